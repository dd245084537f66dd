use http::HeaderMap;
use http::header::{HeaderName, HeaderValue};
use indexmap::IndexMap;

use crate::client::error::ApiClientError;

/// Represents extra HTTP headers for an API call.
///
/// Headers keep their insertion order; adding a header with an existing name replaces its value.
/// They are applied after the `Accept` and `Content-Type` headers, so they can override them.
///
/// # Example
///
/// ```rust
/// use jellyfin_api::CallHeaders;
///
/// let headers = CallHeaders::new()
///     .add_header("X-Emby-Token", "0123456789abcdef")
///     .add_header("X-Request-ID", "abc-123-def");
/// assert_eq!(headers.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallHeaders {
    headers: IndexMap<String, String>,
}

impl CallHeaders {
    /// Creates a new empty `CallHeaders` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header, replacing a previous value for the same name.
    #[must_use]
    pub fn add_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Merges another `CallHeaders` instance into this one.
    ///
    /// Headers from the other instance override headers with the same name in this instance.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (name, value) in other.headers {
            self.headers.insert(name, value);
        }
        self
    }

    /// Checks if the headers collection is empty.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Returns the number of headers.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Returns the value of a header.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Writes the headers into an HTTP header map, replacing existing values.
    pub(in crate::client) fn apply_to(&self, target: &mut HeaderMap) -> Result<(), ApiClientError> {
        for (name, value) in &self.headers {
            target.insert(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for CallHeaders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |headers, (name, value)| headers.add_header(name, value))
    }
}
