use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};
use tokio_util::sync::CancellationToken;
use tracing::warn;

use super::descriptor::{BodySpec, OperationDescriptor};
use super::error::ApiClientError;
use super::response::Payload;
use super::{ApiClient, CallBody, CallHeaders};

mod execution;
#[cfg(test)]
mod tests;

/// Turns an interpreted payload into the typed data of a call.
pub(in crate::client) type Decoder<T> = fn(&'static str, Payload) -> Result<Option<T>, ApiClientError>;

/// One invocation of a described operation.
///
/// `ApiCall` collects the arguments of the call (path and query parameters, body) and the
/// per-call options (extra headers, timeout, cancellation), then runs when awaited:
///
/// 1. required parameters are checked, before anything is sent,
/// 2. the path, query string, headers and body are built,
/// 3. the request interceptor has the final word on the request,
/// 4. the transport sends it, the response interceptor observes the answer,
/// 5. the response is interpreted according to the descriptor.
///
/// # Method Groups
///
/// ## Arguments
/// - [`with_params(params)`](Self::with_params) - Add the fields of a serializable struct
/// - [`with_param(name, value)`](Self::with_param) - Add a single parameter
/// - [`with_body(body)`](Self::with_body) / [`with_optional_body(body)`](Self::with_optional_body) - Set the JSON body
///
/// ## Options
/// - [`with_header(name, value)`](Self::with_header) / [`with_headers(headers)`](Self::with_headers) - Extra headers
/// - [`with_timeout(duration)`](Self::with_timeout) - Override the client read timeout
/// - [`with_cancellation(token)`](Self::with_cancellation) - Abort the call from elsewhere
///
/// ## Execution
/// - `.await` - Execute the call and return an [`ApiResult`](crate::ApiResult)
/// - [`prepare()`](Self::prepare) - Build the request without sending it
#[derive(derive_more::Debug)]
pub struct ApiCall<T> {
    pub(super) client: ApiClient,
    pub(super) descriptor: &'static OperationDescriptor,
    pub(super) args: Map<String, Value>,
    #[debug(ignore)]
    pub(super) body: Option<CallBody>,
    pub(super) headers: Option<CallHeaders>,
    pub(super) timeout: Option<Duration>,
    pub(super) cancellation: Option<CancellationToken>,
    #[debug(skip)]
    pub(super) decode: Decoder<T>,
}

impl<T> ApiCall<T> {
    pub(in crate::client) fn new(
        client: ApiClient,
        descriptor: &'static OperationDescriptor,
        decode: Decoder<T>,
    ) -> Self {
        Self {
            client,
            descriptor,
            args: Map::new(),
            body: None,
            headers: None,
            timeout: None,
            cancellation: None,
            decode,
        }
    }

    /// The descriptor of the invoked operation.
    pub fn descriptor(&self) -> &'static OperationDescriptor {
        self.descriptor
    }

    fn serialization_failure(&self, source: serde_json::Error) -> ApiClientError {
        ApiClientError::SerializationFailure {
            operation_id: self.descriptor.operation_id,
            source,
        }
    }

    fn insert_arg(&mut self, name: String, value: Value) {
        if self.descriptor.declares(&name) {
            self.args.insert(name, value);
        } else if !value.is_null() {
            warn!(
                operation_id = self.descriptor.operation_id,
                parameter = %name,
                "ignoring an argument the operation does not declare"
            );
        }
    }

    /// Adds every field of a serializable struct as a path or query argument.
    ///
    /// Field names are the wire names; `None` fields are left out.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::SerializationFailure`] when the value does not
    /// serialize to a JSON object.
    pub fn with_params<P>(mut self, params: &P) -> Result<Self, ApiClientError>
    where
        P: Serialize + ?Sized,
    {
        let value = serde_json::to_value(params).map_err(|err| self.serialization_failure(err))?;
        let Value::Object(fields) = value else {
            let err = <serde_json::Error as serde::ser::Error>::custom(
                "parameters must serialize to a JSON object",
            );
            return Err(self.serialization_failure(err));
        };

        for (name, value) in fields {
            self.insert_arg(name, value);
        }
        Ok(self)
    }

    /// Adds one path or query argument.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::SerializationFailure`] when the value cannot be serialized.
    pub fn with_param(
        mut self,
        name: impl Into<String>,
        value: impl Serialize,
    ) -> Result<Self, ApiClientError> {
        let value = serde_json::to_value(value).map_err(|err| self.serialization_failure(err))?;
        self.insert_arg(name.into(), value);
        Ok(self)
    }

    /// Sets the JSON request body.
    ///
    /// A value serializing to `null` leaves the call without body.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::SerializationFailure`] when the value cannot be serialized.
    pub fn with_body<B>(mut self, body: &B) -> Result<Self, ApiClientError>
    where
        B: Serialize + ?Sized,
    {
        if self.descriptor.body == BodySpec::None {
            warn!(
                operation_id = self.descriptor.operation_id,
                "ignoring a body the operation does not accept"
            );
            return Ok(self);
        }

        let body = CallBody::json(body).map_err(|err| self.serialization_failure(err))?;
        self.body = (body.as_bytes() != b"null").then_some(body);
        Ok(self)
    }

    /// Sets the JSON request body when one is given.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::SerializationFailure`] when the value cannot be serialized.
    pub fn with_optional_body<B>(self, body: Option<&B>) -> Result<Self, ApiClientError>
    where
        B: Serialize + ?Sized,
    {
        match body {
            Some(body) => self.with_body(body),
            None => Ok(self),
        }
    }

    /// Adds an extra header, overriding the client default headers and the `Accept` header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let headers = self.headers.take().unwrap_or_default();
        self.headers = Some(headers.add_header(name, value));
        self
    }

    /// Adds extra headers, overriding the client default headers and the `Accept` header.
    #[must_use]
    pub fn with_headers(mut self, headers: CallHeaders) -> Self {
        self.headers = Some(match self.headers.take() {
            Some(existing) => existing.merge(headers),
            None => headers,
        });
        self
    }

    /// Overrides the client read timeout for this call.
    ///
    /// The timeout bounds the wait for the response head and for each body chunk.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Aborts the call when the token is cancelled.
    ///
    /// The in-flight request is dropped and the call fails with [`ApiClientError::Cancelled`].
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}
