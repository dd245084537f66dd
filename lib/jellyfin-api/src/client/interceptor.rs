use std::fmt::Debug;
use std::sync::Arc;

use http::{HeaderMap, StatusCode};

use super::transport::PreparedRequest;

/// A hook that sees and may rewrite every request right before it is sent.
///
/// It runs after every other header has been set, so it has the final word. This is the
/// place to inject credentials such as an `Authorization` header.
///
/// ```rust
/// use jellyfin_api::{ApiClient, RequestInterceptor};
///
/// # fn example() -> Result<(), jellyfin_api::ApiClientError> {
/// let client = ApiClient::builder()
///     .with_request_interceptor(RequestInterceptor::new(|request| {
///         request.headers.insert(
///             http::header::AUTHORIZATION,
///             http::HeaderValue::from_static("MediaBrowser Token=\"secret\""),
///         );
///     }))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RequestInterceptor(Arc<dyn Fn(&mut PreparedRequest) + Send + Sync>);

impl RequestInterceptor {
    /// Wraps a closure.
    pub fn new(intercept: impl Fn(&mut PreparedRequest) + Send + Sync + 'static) -> Self {
        Self(Arc::new(intercept))
    }

    pub(in crate::client) fn intercept(&self, request: &mut PreparedRequest) {
        (self.0)(request);
    }
}

impl Debug for RequestInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RequestInterceptor(..)")
    }
}

/// What the response interceptor observes.
#[derive(Debug, Clone, Copy)]
pub struct ResponseHead<'a> {
    /// The operation that was invoked.
    pub operation_id: &'static str,
    /// The HTTP status.
    pub status: StatusCode,
    /// The response headers.
    pub headers: &'a HeaderMap,
}

/// A hook that observes every response before it is interpreted.
///
/// It cannot alter the outcome of the call.
#[derive(Clone)]
pub struct ResponseInterceptor(Arc<dyn Fn(&ResponseHead<'_>) + Send + Sync>);

impl ResponseInterceptor {
    /// Wraps a closure.
    pub fn new(observe: impl Fn(&ResponseHead<'_>) + Send + Sync + 'static) -> Self {
        Self(Arc::new(observe))
    }

    pub(in crate::client) fn observe(&self, head: &ResponseHead<'_>) {
        (self.0)(head);
    }
}

impl Debug for ResponseInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ResponseInterceptor(..)")
    }
}
