//! The HTTP transport seam.
//!
//! The call engine hands a fully-built [`PreparedRequest`] to a [`Transport`] and gets back
//! the status, the headers and a streaming [`ResponseBody`]. The default implementation
//! wraps a [`reqwest::Client`]; hosts and tests can inject their own.

use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use bytes::{Bytes, BytesMut};
use http::{HeaderMap, Method, StatusCode};
use reqwest::{Body, Request};
use tracing::debug;
use url::Url;

/// A boxed future returned by transports and body streams.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A fully-built request, owned by one call.
///
/// The request interceptor receives it mutably right before it is sent.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// The operation being invoked.
    pub operation_id: &'static str,
    /// The HTTP method.
    pub method: Method,
    /// The absolute URL, query included.
    pub url: Url,
    /// The request headers.
    pub headers: HeaderMap,
    /// The serialized body, if any.
    pub body: Option<Bytes>,
    /// The read timeout for this call.
    ///
    /// The call engine bounds the wait for the response head and every wait for a body
    /// chunk with it; it never bounds the whole download.
    pub timeout: Option<Duration>,
}

/// Errors raised by a transport.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum TransportError {
    /// Error from the reqwest client.
    Reqwest(reqwest::Error),

    /// I/O error from a custom transport.
    Io(std::io::Error),

    /// The transport gave up waiting.
    #[display("request timed out")]
    #[from(skip)]
    TimedOut,

    /// Any other failure of a custom transport.
    #[display("{message}")]
    #[from(skip)]
    Other {
        /// Human readable description.
        message: String,
    },
}

impl TransportError {
    /// Creates a free-form transport error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Whether the failure is a timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Reqwest(err) => err.is_timeout(),
            Self::Io(err) => err.kind() == std::io::ErrorKind::TimedOut,
            Self::TimedOut => true,
            Self::Other { .. } => false,
        }
    }
}

/// A source of response body chunks.
///
/// Dropping the stream releases the underlying connection.
pub trait BodyStream: Send {
    /// Returns the next chunk, or `None` at the end of the body.
    fn next_chunk(&mut self) -> BoxFuture<'_, Result<Option<Bytes>, TransportError>>;
}

/// A response body, read at most once.
///
/// Every consuming method takes `self`, so the body is released exactly once,
/// whichever branch reads it.
pub struct ResponseBody {
    stream: Box<dyn BodyStream>,
    idle_timeout: Option<Duration>,
}

impl Debug for ResponseBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseBody")
            .field("idle_timeout", &self.idle_timeout)
            .finish_non_exhaustive()
    }
}

impl ResponseBody {
    /// Wraps a body stream.
    pub fn new(stream: impl BodyStream + 'static) -> Self {
        Self {
            stream: Box::new(stream),
            idle_timeout: None,
        }
    }

    /// Fails a chunk read that waits longer than `timeout` with [`TransportError::TimedOut`].
    #[must_use]
    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = Some(timeout);
        self
    }

    /// A body holding the given bytes.
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self::new(BytesBody(Some(data.into())))
    }

    /// An empty body.
    pub fn empty() -> Self {
        Self::new(BytesBody(None))
    }

    /// Reads the next chunk.
    ///
    /// # Errors
    ///
    /// Fails when the underlying stream fails.
    pub async fn chunk(&mut self) -> Result<Option<Bytes>, TransportError> {
        let idle_timeout = self.idle_timeout;
        let next = self.stream.next_chunk();
        match idle_timeout {
            Some(timeout) => tokio::time::timeout(timeout, next)
                .await
                .map_err(|_elapsed| TransportError::TimedOut)?,
            None => next.await,
        }
    }

    /// Reads the whole body.
    ///
    /// # Errors
    ///
    /// Fails when the underlying stream fails.
    pub async fn bytes(mut self) -> Result<Bytes, TransportError> {
        let mut buffer = BytesMut::new();
        while let Some(chunk) = self.chunk().await? {
            buffer.extend_from_slice(&chunk);
        }
        Ok(buffer.freeze())
    }

    /// Reads the whole body as text, replacing invalid UTF-8 sequences.
    ///
    /// # Errors
    ///
    /// Fails when the underlying stream fails.
    pub async fn text(self) -> Result<String, TransportError> {
        let bytes = self.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Reads and discards the remaining body.
    ///
    /// # Errors
    ///
    /// Fails when the underlying stream fails.
    pub async fn drain(mut self) -> Result<(), TransportError> {
        while self.chunk().await?.is_some() {}
        Ok(())
    }
}

struct BytesBody(Option<Bytes>);

impl BodyStream for BytesBody {
    fn next_chunk(&mut self) -> BoxFuture<'_, Result<Option<Bytes>, TransportError>> {
        let chunk = self.0.take().filter(|data| !data.is_empty());
        Box::pin(async move { Ok(chunk) })
    }
}

/// Status, headers and body returned by a transport.
#[derive(Debug)]
pub struct TransportResponse {
    /// The HTTP status.
    pub status: StatusCode,
    /// The response headers.
    pub headers: HeaderMap,
    /// The streaming body.
    pub body: ResponseBody,
}

/// Executes prepared requests.
pub trait Transport: Debug + Send + Sync {
    /// Sends the request and returns the response head with a streaming body.
    fn send(
        &self,
        request: PreparedRequest,
    ) -> BoxFuture<'_, Result<TransportResponse, TransportError>>;
}

/// The default transport over a [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps an existing reqwest client, sharing its connection pool.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build_request(prepared: PreparedRequest) -> Request {
        let PreparedRequest {
            method,
            url,
            headers,
            body,
            ..
        } = prepared;

        let mut request = Request::new(method, url);
        *request.headers_mut() = headers;
        if let Some(body) = body {
            *request.body_mut() = Some(Body::from(body));
        }
        request
    }
}

impl Transport for ReqwestTransport {
    fn send(
        &self,
        request: PreparedRequest,
    ) -> BoxFuture<'_, Result<TransportResponse, TransportError>> {
        let request = Self::build_request(request);
        Box::pin(async move {
            debug!(?request, "sending...");
            let response = self.client.execute(request).await?;
            debug!(?response, "...receiving");

            let status = response.status();
            let headers = response.headers().clone();
            Ok(TransportResponse {
                status,
                headers,
                body: ResponseBody::new(ReqwestBody(response)),
            })
        })
    }
}

struct ReqwestBody(reqwest::Response);

impl BodyStream for ReqwestBody {
    fn next_chunk(&mut self) -> BoxFuture<'_, Result<Option<Bytes>, TransportError>> {
        Box::pin(async move { Ok(self.0.chunk().await?) })
    }
}
