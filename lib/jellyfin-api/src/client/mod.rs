use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

mod builder;
pub use self::builder::ApiClientBuilder;

mod call;
pub use self::call::ApiCall;
use self::call::Decoder;

mod descriptor;
pub use self::descriptor::{
    BodySpec, HttpMethod, OperationDescriptor, QueryParam, ResponseShape, accept,
};

mod error;
pub use self::error::{ApiClientError, ApiError};

mod interceptor;
pub use self::interceptor::{RequestInterceptor, ResponseHead, ResponseInterceptor};

mod parameters;
pub use self::parameters::{
    CallBody, CallHeaders, ParamStyle, QueryPair, UnsupportedValue, encode_query_param,
    encode_value,
};

mod response;
pub use self::response::{ApiResult, DownloadedFile};
use self::response::{decode_empty, decode_file, decode_json};

mod transport;
pub use self::transport::{
    BodyStream, BoxFuture, PreparedRequest, ReqwestTransport, ResponseBody, Transport,
    TransportError, TransportResponse,
};

/// HTTP client for the media server operations.
///
/// `ApiClient` is cheap to clone: clones share the same configuration and transport, so one
/// client can serve concurrent calls. Use [`ApiClientBuilder`] to create instances.
///
/// Calls are usually made through the typed operation groups
/// ([`live_tv`](Self::live_tv), [`sync_play`](Self::sync_play),
/// [`universal_audio`](Self::universal_audio)). Any [`OperationDescriptor`] can also be
/// invoked directly with [`json_call`](Self::json_call), [`empty_call`](Self::empty_call)
/// or [`file_call`](Self::file_call).
///
/// # Example
///
/// ```rust,no_run
/// use jellyfin_api::ApiClient;
/// use jellyfin_api::operations::live_tv::GetTimersParams;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder()
///     .with_host("media.local")
///     .with_default_header("X-Emby-Token", "secret")
///     .build()?;
///
/// let timers = client
///     .live_tv()
///     .get_timers(&GetTimersParams {
///         is_active: Some(true),
///         ..Default::default()
///     })?
///     .await?
///     .into_data();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Arc<ClientConfig>,
}

#[derive(Debug)]
struct ClientConfig {
    transport: Arc<dyn Transport>,
    base_url: Url,
    read_timeout: Option<Duration>,
    default_headers: CallHeaders,
    request_interceptor: Option<RequestInterceptor>,
    response_interceptor: Option<ResponseInterceptor>,
}

impl ApiClient {
    /// Creates a new `ApiClientBuilder` for configuring an API client.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// The URL every operation path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The read timeout applied when a call does not set its own.
    pub fn read_timeout(&self) -> Option<Duration> {
        self.inner.read_timeout
    }

    fn config(&self) -> &ClientConfig {
        &self.inner
    }

    fn call<T>(
        &self,
        descriptor: &'static OperationDescriptor,
        expected: ResponseShape,
        decode: Decoder<T>,
    ) -> Result<ApiCall<T>, ApiClientError> {
        if descriptor.response != expected {
            return Err(ApiClientError::ResponseShapeMismatch {
                operation_id: descriptor.operation_id,
                expected,
                actual: descriptor.response,
            });
        }
        Ok(ApiCall::new(self.clone(), descriptor, decode))
    }

    /// Starts a call of an operation answering with a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::ResponseShapeMismatch`] when the operation does not answer JSON.
    pub fn json_call<T>(
        &self,
        descriptor: &'static OperationDescriptor,
    ) -> Result<ApiCall<T>, ApiClientError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.call(descriptor, ResponseShape::Json, decode_json::<T>)
    }

    /// Starts a call of an operation answering without data.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::ResponseShapeMismatch`] when the operation answers with data.
    pub fn empty_call(
        &self,
        descriptor: &'static OperationDescriptor,
    ) -> Result<ApiCall<()>, ApiClientError> {
        self.call(descriptor, ResponseShape::Empty, decode_empty)
    }

    /// Starts a call of an operation answering with a file.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::ResponseShapeMismatch`] when the operation does not answer a file.
    pub fn file_call(
        &self,
        descriptor: &'static OperationDescriptor,
    ) -> Result<ApiCall<DownloadedFile>, ApiClientError> {
        self.call(descriptor, ResponseShape::File, decode_file)
    }
}
