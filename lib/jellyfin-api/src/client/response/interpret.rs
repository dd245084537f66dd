use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::download::{DownloadedFile, download};
use crate::client::descriptor::{OperationDescriptor, ResponseShape};
use crate::client::error::{ApiClientError, ApiError};
use crate::client::transport::{ResponseBody, TransportError, TransportResponse};

/// The payload of a 2xx response, according to the descriptor response shape.
#[derive(Debug)]
pub(in crate::client) enum Payload {
    /// No data: void operation, or blank JSON body.
    Empty,
    /// A non-blank JSON document.
    Json(String),
    /// A downloaded body.
    File(DownloadedFile),
}

/// An interpreted 2xx response.
#[derive(Debug)]
pub(in crate::client) struct Interpreted {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub payload: Payload,
}

fn transport_failure(operation_id: &'static str) -> impl Fn(TransportError) -> ApiClientError {
    move |source| ApiClientError::transport(operation_id, source)
}

/// Classifies the status, then reads the body as the descriptor says.
///
/// The body is consumed by exactly one branch and released when that branch returns.
pub(in crate::client) async fn interpret(
    descriptor: &OperationDescriptor,
    response: TransportResponse,
) -> Result<Interpreted, ApiClientError> {
    let operation_id = descriptor.operation_id;
    let TransportResponse {
        status,
        headers,
        body,
    } = response;

    if !status.is_success() {
        return Err(api_error(operation_id, status, headers, body).await);
    }

    let payload = match descriptor.response {
        ResponseShape::Empty => {
            body.drain().await.map_err(transport_failure(operation_id))?;
            Payload::Empty
        }
        ResponseShape::Json => {
            let text = body.text().await.map_err(transport_failure(operation_id))?;
            if text.trim().is_empty() {
                debug!(operation_id, %status, "blank JSON body");
                Payload::Empty
            } else {
                Payload::Json(text)
            }
        }
        ResponseShape::File => Payload::File(download(operation_id, &headers, body).await?),
    };

    Ok(Interpreted {
        status,
        headers,
        payload,
    })
}

/// Builds the error of a non-2xx response. A body that cannot be read counts as absent.
async fn api_error(
    operation_id: &'static str,
    status: StatusCode,
    headers: HeaderMap,
    body: ResponseBody,
) -> ApiClientError {
    let body = match body.text().await {
        Ok(text) if text.is_empty() => None,
        Ok(text) => Some(text),
        Err(err) => {
            debug!(operation_id, %status, %err, "unable to read the error body");
            None
        }
    };
    ApiError::new(operation_id, status, headers, body).into()
}

/// Decodes nothing: void operations.
pub(in crate::client) fn decode_empty(
    _operation_id: &'static str,
    _payload: Payload,
) -> Result<Option<()>, ApiClientError> {
    Ok(None)
}

/// Decodes a JSON payload into `T`, reporting the JSON path of a failure.
pub(in crate::client) fn decode_json<T>(
    operation_id: &'static str,
    payload: Payload,
) -> Result<Option<T>, ApiClientError>
where
    T: DeserializeOwned,
{
    let text = match payload {
        Payload::Empty => return Ok(None),
        Payload::Json(text) => text,
        Payload::File(_) => {
            return Err(ApiClientError::ResponseShapeMismatch {
                operation_id,
                expected: ResponseShape::Json,
                actual: ResponseShape::File,
            });
        }
    };

    let deserializer = &mut serde_json::Deserializer::from_str(&text);
    match serde_path_to_error::deserialize(deserializer) {
        Ok(value) => Ok(Some(value)),
        Err(err) => Err(ApiClientError::DeserializationFailure {
            operation_id,
            path: err.path().to_string(),
            error: err.into_inner(),
            body: text,
        }),
    }
}

/// Hands over a downloaded file.
pub(in crate::client) fn decode_file(
    operation_id: &'static str,
    payload: Payload,
) -> Result<Option<DownloadedFile>, ApiClientError> {
    match payload {
        Payload::File(file) => Ok(Some(file)),
        Payload::Empty => Err(ApiClientError::ResponseShapeMismatch {
            operation_id,
            expected: ResponseShape::File,
            actual: ResponseShape::Empty,
        }),
        Payload::Json(_) => Err(ApiClientError::ResponseShapeMismatch {
            operation_id,
            expected: ResponseShape::File,
            actual: ResponseShape::Json,
        }),
    }
}
