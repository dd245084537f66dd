use bytes::Bytes;
use headers::ContentType;
use serde::Serialize;

/// Represents the body of an HTTP request with its content type.
///
/// Request bodies of the media server operations are always JSON documents.
#[derive(Clone, derive_more::Debug)]
pub struct CallBody {
    pub(in crate::client) content_type: ContentType,
    #[debug(ignore)]
    pub(in crate::client) data: Bytes,
}

impl CallBody {
    /// Creates a JSON body from a serializable type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use jellyfin_api::CallBody;
    /// # use jellyfin_api::models::PingRequestDto;
    /// let body = CallBody::json(&PingRequestDto { ping: Some(42) })?;
    /// assert_eq!(body.as_bytes(), br#"{"Ping":42}"#);
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Fails when the value cannot be serialized.
    pub fn json<T>(t: &T) -> Result<Self, serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        let content_type = ContentType::json();
        let data = serde_json::to_vec(t)?;

        Ok(Self {
            content_type,
            data: Bytes::from(data),
        })
    }

    /// Returns the serialized body.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the content type of the body.
    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Debug, Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct GroupRequest {
        group_name: String,
    }

    #[test]
    fn test_json_body() {
        let body = CallBody::json(&GroupRequest {
            group_name: "Movie night".to_string(),
        })
        .expect("should serialize");

        assert_eq!(body.content_type(), &ContentType::json());
        insta::assert_snapshot!(String::from_utf8_lossy(body.as_bytes()), @r#"{"GroupName":"Movie night"}"#);
    }
}
