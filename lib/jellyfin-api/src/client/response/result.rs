use http::{HeaderMap, StatusCode};

/// The outcome of a successful (2xx) call.
///
/// `data` is `None` for operations without payload, and for JSON operations whose
/// response body was blank.
#[derive(Debug)]
pub struct ApiResult<T> {
    status: StatusCode,
    headers: HeaderMap,
    data: Option<T>,
}

impl<T> ApiResult<T> {
    pub(in crate::client) fn new(status: StatusCode, headers: HeaderMap, data: Option<T>) -> Self {
        Self {
            status,
            headers,
            data,
        }
    }

    /// The HTTP status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The decoded payload.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Takes the decoded payload.
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Splits the result into its parts.
    pub fn into_parts(self) -> (StatusCode, HeaderMap, Option<T>) {
        (self.status, self.headers, self.data)
    }
}
