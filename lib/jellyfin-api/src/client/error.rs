use std::io;

use http::{HeaderMap, StatusCode};

use super::descriptor::ResponseShape;
use super::transport::TransportError;

/// Errors that can occur when using the [`ApiClient`](super::ApiClient).
///
/// Every failure is returned to the caller: nothing is retried and nothing is swallowed.
/// Variants raised while building a request (`MissingParameter`, `SerializationFailure`,
/// `UnsupportedParameterValue`) are detected before any transport call.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ApiClientError {
    /// HTTP client error from the underlying reqwest library.
    ///
    /// Occurs when the default reqwest client cannot be created.
    ReqwestError(reqwest::Error),

    /// URL parsing error when constructing request URLs.
    ///
    /// Occurs when the base URL or a resolved path creates an invalid URL.
    UrlError(url::ParseError),

    /// HTTP protocol error from the http crate.
    HttpError(http::Error),

    /// Invalid HTTP header name.
    ///
    /// Occurs when a default or per-call header has an invalid name.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// Invalid HTTP header value.
    ///
    /// Occurs when header values contain invalid characters.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// Invalid base path configuration.
    #[display("Invalid base path: {error}")]
    #[from(skip)]
    InvalidBasePath {
        /// Description of why the base path is invalid.
        error: String,
    },

    /// A required path, query or body parameter was not supplied.
    #[display("Missing the required parameter '{parameter}' when calling {operation_id}")]
    #[from(skip)]
    MissingParameter {
        /// The operation being invoked.
        operation_id: &'static str,
        /// The wire name of the missing parameter.
        parameter: &'static str,
    },

    /// Parameters or the request body could not be encoded as JSON.
    #[display("{operation_id} could not serialize its arguments: {source}")]
    #[from(skip)]
    SerializationFailure {
        /// The operation being invoked.
        operation_id: &'static str,
        /// The underlying serde error.
        source: serde_json::Error,
    },

    /// A path or query parameter value cannot be sent: objects, nested arrays, and the `.`
    /// or `..` path segments.
    #[display("Unsupported value for parameter '{parameter}' of {operation_id}: {value}")]
    #[from(skip)]
    UnsupportedParameterValue {
        /// The operation being invoked.
        operation_id: &'static str,
        /// The parameter name.
        parameter: String,
        /// The rejected value.
        value: serde_json::Value,
    },

    /// The transport failed to deliver the request or to read the response.
    #[display("{operation_id} transport failure: {source}")]
    #[from(skip)]
    TransportFailure {
        /// The operation being invoked.
        operation_id: &'static str,
        /// The transport error.
        source: TransportError,
    },

    /// The call did not complete within its read timeout.
    #[display("{operation_id} timed out")]
    #[from(skip)]
    TimedOut {
        /// The operation being invoked.
        operation_id: &'static str,
    },

    /// The call was cancelled by its caller.
    #[display("{operation_id} was cancelled")]
    #[from(skip)]
    Cancelled {
        /// The operation being invoked.
        operation_id: &'static str,
    },

    /// The server answered with a non-2xx status.
    Api(ApiError),

    /// A 2xx response body could not be decoded into the expected type.
    #[display("{operation_id} failed to deserialize JSON at '{path}': {error}\n{body}")]
    #[from(skip)]
    DeserializationFailure {
        /// The operation being invoked.
        operation_id: &'static str,
        /// The JSON path where decoding failed.
        path: String,
        /// The underlying JSON error.
        error: serde_json::Error,
        /// The response body that failed to parse.
        body: String,
    },

    /// Writing a downloaded body to its temporary file failed.
    #[display("{operation_id} could not store the downloaded file: {source}")]
    #[from(skip)]
    DownloadFailure {
        /// The operation being invoked.
        operation_id: &'static str,
        /// The I/O error.
        source: io::Error,
    },

    /// A typed call was requested for a descriptor with another response shape.
    #[display("{operation_id} response shape is {actual}, expected {expected}")]
    #[from(skip)]
    ResponseShapeMismatch {
        /// The operation being invoked.
        operation_id: &'static str,
        /// The shape the caller asked for.
        expected: ResponseShape,
        /// The shape declared by the descriptor.
        actual: ResponseShape,
    },
}

impl ApiClientError {
    /// Maps a transport error, a transport timeout being reported as [`Self::TimedOut`].
    pub(in crate::client) fn transport(operation_id: &'static str, source: TransportError) -> Self {
        if source.is_timeout() {
            Self::TimedOut { operation_id }
        } else {
            Self::TransportFailure {
                operation_id,
                source,
            }
        }
    }

    /// Returns the HTTP status when the server rejected the call.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(error) => Some(error.status_code),
            _ => None,
        }
    }

    /// Returns the operation id attached to this error, if any.
    pub fn operation_id(&self) -> Option<&'static str> {
        match self {
            Self::MissingParameter { operation_id, .. }
            | Self::SerializationFailure { operation_id, .. }
            | Self::UnsupportedParameterValue { operation_id, .. }
            | Self::TransportFailure { operation_id, .. }
            | Self::TimedOut { operation_id }
            | Self::Cancelled { operation_id }
            | Self::DeserializationFailure { operation_id, .. }
            | Self::DownloadFailure { operation_id, .. }
            | Self::ResponseShapeMismatch { operation_id, .. } => Some(*operation_id),
            Self::Api(error) => Some(error.operation_id),
            Self::ReqwestError(_)
            | Self::UrlError(_)
            | Self::HttpError(_)
            | Self::InvalidHeaderName(_)
            | Self::InvalidHeaderValue(_)
            | Self::InvalidBasePath { .. } => None,
        }
    }
}

/// A non-2xx answer from the server.
///
/// The status code is preserved verbatim, together with the response headers and body text.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("{message}")]
pub struct ApiError {
    /// The operation that failed.
    pub operation_id: &'static str,
    /// The HTTP status returned by the server.
    pub status_code: StatusCode,
    /// `"<operationId> call failed with: <status> - <body>"`.
    pub message: String,
    /// The response headers.
    pub headers: HeaderMap,
    /// The response body, when one was sent.
    pub body: Option<String>,
}

impl ApiError {
    pub(in crate::client) fn new(
        operation_id: &'static str,
        status_code: StatusCode,
        headers: HeaderMap,
        body: Option<String>,
    ) -> Self {
        let message = format!(
            "{operation_id} call failed with: {} - {}",
            status_code.as_u16(),
            body.as_deref().unwrap_or("[no body]")
        );
        Self {
            operation_id,
            status_code,
            message,
            headers,
            body,
        }
    }
}
