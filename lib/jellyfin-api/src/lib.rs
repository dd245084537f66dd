//! # Jellyfin API
//!
//! An async client for the Live TV, SyncPlay and Universal Audio operations of a Jellyfin
//! media server.
//!
//! Every operation is described by a `static` [`OperationDescriptor`]: its HTTP method, path
//! template, query parameters, body, `Accept` header and response shape. One generic engine
//! turns a descriptor plus arguments into a request, sends it through a [`Transport`], and
//! interprets the response:
//!
//! - **Request Builder** - checks required parameters before any I/O, substitutes path
//!   placeholders, encodes the query string in declaration order, sets headers and body,
//!   then runs the [`RequestInterceptor`].
//! - **Response Interpreter** - 2xx responses are decoded as the descriptor says (nothing,
//!   a JSON document, or a [`DownloadedFile`]); any other status becomes an [`ApiError`]
//!   carrying the status, headers and body.
//! - **Parameter Encoder** - [`encode_query_param`] turns typed values into URL-encoded
//!   `name=value` pairs, following a [`ParamStyle`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jellyfin_api::ApiClient;
//! use jellyfin_api::models::ItemFields;
//! use jellyfin_api::operations::live_tv::GetLiveTvProgramsParams;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::builder()
//!     .with_base_url("http://media.local:8096")?
//!     .with_default_header("X-Emby-Token", "secret")
//!     .build()?;
//!
//! // Sends `GET /LiveTv/Programs?isAiring=true&fields=Overview&fields=Genres`
//! let programs = client
//!     .live_tv()
//!     .get_live_tv_programs(&GetLiveTvProgramsParams {
//!         is_airing: Some(true),
//!         fields: Some(vec![ItemFields::Overview, ItemFields::Genres]),
//!         ..Default::default()
//!     })?
//!     .await?
//!     .into_data()
//!     .unwrap_or_default();
//!
//! for program in programs.items {
//!     println!("{:?}", program.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Per-call settings
//!
//! A call accepts extra headers, a timeout overriding the client read timeout, and a
//! cancellation token before it is awaited:
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example(client: jellyfin_api::ApiClient) -> Result<(), jellyfin_api::ApiClientError> {
//! let token = CancellationToken::new();
//! let file = client
//!     .live_tv()
//!     .get_live_stream_file("stream-id", "ts")?
//!     .with_header("X-Request-Id", "42")
//!     .with_timeout(Duration::from_secs(300))
//!     .with_cancellation(token.clone())
//!     .await?
//!     .into_data();
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every failure surfaces as an [`ApiClientError`]; nothing is retried or swallowed.
//! Non-2xx statuses are [`ApiClientError::Api`] with the [`ApiError`] details.

mod client;

pub mod models;

pub mod operations;

pub use self::client::{
    ApiCall, ApiClient, ApiClientBuilder, ApiClientError, ApiError, ApiResult, BodySpec,
    BodyStream, BoxFuture, CallBody, CallHeaders, DownloadedFile, HttpMethod, OperationDescriptor,
    ParamStyle, PreparedRequest, QueryPair, QueryParam, RequestInterceptor, ResponseBody,
    ResponseHead, ResponseInterceptor, ResponseShape, ReqwestTransport, Transport, TransportError,
    TransportResponse, UnsupportedValue, accept, encode_query_param, encode_value,
};
