use std::sync::Arc;
use std::time::Duration;

use http::Uri;
use http::uri::{PathAndQuery, Scheme};
use tracing::debug;
use url::Url;

use super::interceptor::{RequestInterceptor, ResponseInterceptor};
use super::transport::{ReqwestTransport, Transport};
use super::{ApiClient, ApiClientError, CallHeaders, ClientConfig};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8096;

/// Builder for creating `ApiClient` instances.
///
/// # Default Configuration
///
/// - **Scheme**: HTTP (use `with_scheme()` to change to HTTPS)
/// - **Host**: 127.0.0.1 (localhost)
/// - **Port**: 8096 (the media server default port)
/// - **Base path**: None (requests go to root path)
/// - **Read timeout**: None (the transport default applies)
/// - **Transport**: [`ReqwestTransport`] over a default `reqwest::Client`
///
/// # HTTPS
///
/// This crate builds reqwest without a TLS backend, so the default transport only reaches
/// `http://` servers. For `https://` servers, enable a TLS feature of `reqwest` in your
/// own crate and pass the client to [`with_reqwest_client`](Self::with_reqwest_client),
/// or plug a custom [`Transport`].
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use http::uri::Scheme;
/// use jellyfin_api::ApiClient;
///
/// # fn example() -> Result<(), jellyfin_api::ApiClientError> {
/// let client = ApiClient::builder()
///     .with_scheme(Scheme::HTTPS)
///     .with_host("media.example.com")
///     .with_port(443)
///     .with_base_path("/jellyfin")?
///     .with_read_timeout(Duration::from_secs(30))
///     .with_default_header("X-Emby-Token", "secret")
///     .build()?;
///
/// assert_eq!(client.base_url().as_str(), "https://media.example.com/jellyfin");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    transport: Option<Arc<dyn Transport>>,
    scheme: Scheme,
    host: String,
    port: u16,
    base_path: Option<PathAndQuery>,
    read_timeout: Option<Duration>,
    default_headers: CallHeaders,
    request_interceptor: Option<RequestInterceptor>,
    response_interceptor: Option<ResponseInterceptor>,
}

impl ApiClientBuilder {
    /// Builds the final `ApiClient` instance with all configured settings.
    ///
    /// # Errors
    ///
    /// This method can fail if the base URI cannot be constructed from the provided
    /// scheme, host, port and base path.
    pub fn build(self) -> Result<ApiClient, ApiClientError> {
        let Self {
            transport,
            scheme,
            host,
            port,
            base_path,
            read_timeout,
            default_headers,
            request_interceptor,
            response_interceptor,
        } = self;

        let builder = Uri::builder()
            .scheme(scheme)
            .authority(format!("{host}:{port}"));
        let builder = if let Some(path) = &base_path {
            builder.path_and_query(path.path())
        } else {
            builder.path_and_query("/")
        };

        let base_uri = builder.build()?;
        let base_url = base_uri.to_string().parse::<Url>()?;
        debug!(%base_url, "building the API client");

        let transport = transport.unwrap_or_else(|| Arc::new(ReqwestTransport::default()));

        Ok(ApiClient {
            inner: Arc::new(ClientConfig {
                transport,
                base_url,
                read_timeout,
                default_headers,
                request_interceptor,
                response_interceptor,
            }),
        })
    }

    /// Sets the HTTP scheme (protocol) for the API client.
    ///
    /// Defaults to `Scheme::HTTP`.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the hostname or IP address of the media server.
    ///
    /// Defaults to `"127.0.0.1"`.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the port number of the media server.
    ///
    /// Defaults to `8096`.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the base path prepended to every operation path.
    ///
    /// Useful when the server is exposed behind a reverse proxy under a sub-path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidBasePath`] if the path is not a valid URI path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jellyfin_api::ApiClient;
    ///
    /// # fn example() -> Result<(), jellyfin_api::ApiClientError> {
    /// let client = ApiClient::builder()
    ///     .with_base_path("/jellyfin")?
    ///     .build()?;
    ///
    /// let result = ApiClient::builder().with_base_path("invalid path with spaces");
    /// assert!(result.is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_base_path<P>(mut self, base_path: P) -> Result<Self, ApiClientError>
    where
        P: TryInto<PathAndQuery>,
        P::Error: std::fmt::Debug + 'static,
    {
        let base_path = base_path
            .try_into()
            .map_err(|err| ApiClientError::InvalidBasePath {
                error: format!("{err:?}"),
            })?;
        self.base_path = Some(base_path);
        Ok(self)
    }

    /// Sets scheme, host, port and base path from a full URL such as
    /// `https://media.example.com:8920/jellyfin`.
    ///
    /// An `https` URL needs a TLS-enabled transport, see [HTTPS](Self#https).
    ///
    /// # Errors
    ///
    /// Fails when the URL cannot be parsed, has no host, or has an unsupported scheme.
    pub fn with_base_url(self, base_url: &str) -> Result<Self, ApiClientError> {
        let url = base_url.parse::<Url>()?;
        let scheme = url
            .scheme()
            .parse::<Scheme>()
            .map_err(http::Error::from)?;
        let Some(host) = url.host_str() else {
            return Err(ApiClientError::InvalidBasePath {
                error: format!("'{base_url}' has no host"),
            });
        };
        let port = url.port_or_known_default().unwrap_or(DEFAULT_PORT);

        let builder = self.with_scheme(scheme).with_host(host).with_port(port);
        match url.path() {
            "" | "/" => Ok(builder),
            path => builder.with_base_path(path.trim_end_matches('/')),
        }
    }

    /// Sets the read timeout applied to every call, unless a call overrides it.
    ///
    /// It bounds the wait for the response head and the wait for each body chunk, not the
    /// whole download.
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Adds a header sent with every call.
    ///
    /// Per-call headers take precedence over default headers.
    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers = self.default_headers.add_header(name, value);
        self
    }

    /// Adds headers sent with every call.
    pub fn with_default_headers(mut self, headers: CallHeaders) -> Self {
        self.default_headers = self.default_headers.merge(headers);
        self
    }

    /// Uses a [`ReqwestTransport`] over an existing reqwest client, sharing its connection pool.
    pub fn with_reqwest_client(self, client: reqwest::Client) -> Self {
        self.with_transport(ReqwestTransport::new(client))
    }

    /// Uses a custom transport.
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Installs the hook run on every request right before it is sent.
    pub fn with_request_interceptor(mut self, interceptor: RequestInterceptor) -> Self {
        self.request_interceptor = Some(interceptor);
        self
    }

    /// Installs the hook observing every response head.
    pub fn with_response_interceptor(mut self, interceptor: ResponseInterceptor) -> Self {
        self.response_interceptor = Some(interceptor);
        self
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self {
            transport: None,
            scheme: Scheme::HTTP,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            base_path: None,
            read_timeout: None,
            default_headers: CallHeaders::new(),
            request_interceptor: None,
            response_interceptor: None,
        }
    }
}
