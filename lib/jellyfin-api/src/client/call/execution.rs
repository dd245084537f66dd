use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::time::Duration;

use headers::HeaderMapExt;
use http::HeaderMap;
use http::header::{ACCEPT, HeaderValue};
use tracing::debug;
use url::Url;

use super::{ApiCall, Decoder};
use crate::client::descriptor::{BodySpec, OperationDescriptor};
use crate::client::interceptor::ResponseHead;
use crate::client::parameters::{query_pairs, resolve_path, to_query_string};
use crate::client::response::interpret;
use crate::client::transport::{PreparedRequest, TransportError, TransportResponse};
use crate::client::{ApiClient, ApiClientError, ApiResult, CallBody};

impl<T> ApiCall<T> {
    /// Builds the request this call would send, without sending it.
    ///
    /// Required parameters are checked first, in path, query then body order.
    /// The request interceptor has already run on the returned request.
    ///
    /// # Errors
    ///
    /// - [`ApiClientError::MissingParameter`] when a required parameter or body is absent,
    /// - [`ApiClientError::UnsupportedParameterValue`] for values without a string form,
    /// - header or URL errors for invalid extra headers or paths.
    pub fn prepare(&self) -> Result<PreparedRequest, ApiClientError> {
        let descriptor = self.descriptor;
        let config = self.client.config();

        let path = resolve_path(descriptor, &self.args)?;
        let pairs = query_pairs(descriptor, &self.args)?;
        let body = self.request_body()?;

        let url = Self::build_url(&config.base_url, &path, to_query_string(&pairs))?;
        let headers = self.build_headers(body)?;

        let mut request = PreparedRequest {
            operation_id: descriptor.operation_id,
            method: descriptor.method.as_method(),
            url,
            headers,
            body: body.map(|body| body.data.clone()),
            timeout: self.timeout.or(config.read_timeout),
        };

        if let Some(interceptor) = &config.request_interceptor {
            interceptor.intercept(&mut request);
        }

        Ok(request)
    }

    fn request_body(&self) -> Result<Option<&CallBody>, ApiClientError> {
        match self.descriptor.body {
            BodySpec::None => Ok(None),
            BodySpec::Optional(_) => Ok(self.body.as_ref()),
            BodySpec::Required(name) => self.body.as_ref().map(Some).ok_or(
                ApiClientError::MissingParameter {
                    operation_id: self.descriptor.operation_id,
                    parameter: name,
                },
            ),
        }
    }

    pub(super) fn build_url(
        base_url: &Url,
        path: &str,
        query: Option<String>,
    ) -> Result<Url, ApiClientError> {
        let url = format!(
            "{}/{}",
            base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let mut url = url.parse::<Url>()?;

        if let Some(query) = query {
            url.set_query(Some(&query));
        }

        Ok(url)
    }

    fn build_headers(&self, body: Option<&CallBody>) -> Result<HeaderMap, ApiClientError> {
        let config = self.client.config();
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_str(self.descriptor.accept)?);
        if let Some(body) = body {
            headers.typed_insert(body.content_type.clone());
        }

        config.default_headers.apply_to(&mut headers)?;
        if let Some(extra) = &self.headers {
            extra.apply_to(&mut headers)?;
        }

        Ok(headers)
    }
}

impl<T> ApiCall<T>
where
    T: Send + 'static,
{
    async fn exchange(self) -> Result<ApiResult<T>, ApiClientError> {
        let request = self.prepare()?;
        let Self {
            client,
            descriptor,
            cancellation,
            decode,
            ..
        } = self;
        let operation_id = descriptor.operation_id;

        let call = Self::send(&client, descriptor, request, decode);

        let Some(token) = cancellation else {
            return call.await;
        };
        tokio::select! {
            biased;
            () = token.cancelled() => {
                debug!(operation_id, "call cancelled");
                Err(ApiClientError::Cancelled { operation_id })
            }
            result = call => result,
        }
    }

    async fn send(
        client: &ApiClient,
        descriptor: &'static OperationDescriptor,
        request: PreparedRequest,
        decode: Decoder<T>,
    ) -> Result<ApiResult<T>, ApiClientError> {
        let config = client.config();
        let operation_id = descriptor.operation_id;
        let timeout = request.timeout;

        debug!(operation_id, method = %request.method, url = %request.url, "calling");
        let mut response =
            bounded(operation_id, timeout, config.transport.send(request)).await?;
        if let Some(timeout) = timeout {
            response.body = response.body.with_idle_timeout(timeout);
        }

        if let Some(interceptor) = &config.response_interceptor {
            interceptor.observe(&ResponseHead {
                operation_id,
                status: response.status,
                headers: &response.headers,
            });
        }

        let interpreted = interpret(descriptor, response).await?;
        let data = decode(operation_id, interpreted.payload)?;
        debug!(operation_id, status = %interpreted.status, "completed");

        Ok(ApiResult::new(interpreted.status, interpreted.headers, data))
    }
}

/// Waits for the response head, at most `timeout`.
///
/// The body is not covered: a long download only fails when a single chunk is late.
async fn bounded(
    operation_id: &'static str,
    timeout: Option<Duration>,
    send: impl Future<Output = Result<TransportResponse, TransportError>>,
) -> Result<TransportResponse, ApiClientError> {
    let response = match timeout {
        Some(duration) => tokio::time::timeout(duration, send).await.map_err(|_elapsed| {
            debug!(operation_id, ?duration, "no response in time");
            ApiClientError::TimedOut { operation_id }
        })?,
        None => send.await,
    };
    response.map_err(|source| ApiClientError::transport(operation_id, source))
}

/// Implement IntoFuture for ApiCall to enable direct .await syntax
///
/// ```rust,no_run
/// # async fn example() -> Result<(), jellyfin_api::ApiClientError> {
/// # let client = jellyfin_api::ApiClient::builder().build()?;
/// let info = client.live_tv().get_live_tv_info()?.await?;
/// # Ok(())
/// # }
/// ```
impl<T> IntoFuture for ApiCall<T>
where
    T: Send + 'static,
{
    type Output = Result<ApiResult<T>, ApiClientError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.exchange())
    }
}
