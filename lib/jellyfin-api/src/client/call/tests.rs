use std::future::IntoFuture;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bytes::Bytes;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use rstest::rstest;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::client::descriptor::{BodySpec, HttpMethod, OperationDescriptor, QueryParam, ResponseShape, accept};
use crate::client::interceptor::{RequestInterceptor, ResponseInterceptor};
use crate::client::parameters::ParamStyle;
use crate::client::transport::{
    BodyStream, BoxFuture, PreparedRequest, ResponseBody, Transport, TransportError, TransportResponse,
};
use crate::client::{ApiClient, ApiClientError};

static GET_TIMER: OperationDescriptor =
    OperationDescriptor::new("getTimer", HttpMethod::Get, "/LiveTv/Timers/{timerId}")
        .with_accept(accept::JSON_PROFILES)
        .returning(ResponseShape::Json);

static GET_PROGRAMS: OperationDescriptor =
    OperationDescriptor::new("getLiveTvPrograms", HttpMethod::Get, "/LiveTv/Programs")
        .with_query(&[
            QueryParam::optional("channelIds"),
            QueryParam::optional("userId"),
            QueryParam::optional("isAiring"),
            QueryParam::optional("fields"),
        ])
        .with_accept(accept::JSON_PROFILES)
        .returning(ResponseShape::Json);

static GET_COUNTRIES: OperationDescriptor = OperationDescriptor::new(
    "getListingCountries",
    HttpMethod::Get,
    "/LiveTv/ListingProviders/{providerId}/Countries",
)
.with_query(&[
    QueryParam::required("listingsProviderId"),
    QueryParam::optional("ids").with_style(ParamStyle::Simple),
])
.returning(ResponseShape::File);

static UPDATE_TIMER: OperationDescriptor =
    OperationDescriptor::new("updateTimer", HttpMethod::Post, "/LiveTv/Timers/{timerId}")
        .with_body(BodySpec::Required("timerInfoDto"));

static CANCEL_TIMER: OperationDescriptor =
    OperationDescriptor::new("cancelTimer", HttpMethod::Delete, "/LiveTv/Timers/{timerId}");

static LIVE_RECORDING: OperationDescriptor = OperationDescriptor::new(
    "getLiveRecordingFile",
    HttpMethod::Get,
    "/LiveTv/LiveRecordings/{recordingId}/stream",
)
.with_accept(accept::VIDEO)
.returning(ResponseShape::File);

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Respond {
        status: StatusCode,
        body: &'static str,
    },
    /// The head arrives at once, then `chunks` chunks each `delay` apart.
    Trickle {
        chunks: usize,
        delay: Duration,
    },
    Fail,
    GiveUp,
    Hang,
}

/// Records the requests and counts the released response bodies.
#[derive(Debug, Clone)]
struct SpyTransport {
    requests: Arc<Mutex<Vec<PreparedRequest>>>,
    released: Arc<AtomicUsize>,
    outcome: Outcome,
}

impl SpyTransport {
    fn new(outcome: Outcome) -> Self {
        Self {
            requests: Arc::default(),
            released: Arc::default(),
            outcome,
        }
    }

    fn respond(status: StatusCode, body: &'static str) -> Self {
        Self::new(Outcome::Respond { status, body })
    }

    fn call_count(&self) -> usize {
        self.requests.lock().expect("not poisoned").len()
    }

    fn last_request(&self) -> PreparedRequest {
        self.requests
            .lock()
            .expect("not poisoned")
            .last()
            .cloned()
            .expect("a request was sent")
    }

    fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    fn client(&self) -> ApiClient {
        ApiClient::builder()
            .with_transport(self.clone())
            .build()
            .expect("valid client")
    }

    fn client_with_read_timeout(&self, timeout: Duration) -> ApiClient {
        ApiClient::builder()
            .with_transport(self.clone())
            .with_read_timeout(timeout)
            .build()
            .expect("valid client")
    }
}

impl Transport for SpyTransport {
    fn send(
        &self,
        request: PreparedRequest,
    ) -> BoxFuture<'_, Result<TransportResponse, TransportError>> {
        self.requests.lock().expect("not poisoned").push(request);
        let released = Arc::clone(&self.released);
        let outcome = self.outcome;

        Box::pin(async move {
            match outcome {
                Outcome::Respond { status, body } => Ok(TransportResponse {
                    status,
                    headers: HeaderMap::new(),
                    body: ResponseBody::new(SpyBody {
                        data: Some(Bytes::from_static(body.as_bytes())),
                        released,
                    }),
                }),
                Outcome::Trickle { chunks, delay } => Ok(TransportResponse {
                    status: StatusCode::OK,
                    headers: HeaderMap::new(),
                    body: ResponseBody::new(TrickleBody {
                        remaining: chunks,
                        delay,
                        released,
                    }),
                }),
                Outcome::Fail => Err(TransportError::other("connection refused")),
                Outcome::GiveUp => Err(TransportError::TimedOut),
                Outcome::Hang => {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                    Err(TransportError::other("should have been dropped"))
                }
            }
        })
    }
}

struct SpyBody {
    data: Option<Bytes>,
    released: Arc<AtomicUsize>,
}

impl BodyStream for SpyBody {
    fn next_chunk(&mut self) -> BoxFuture<'_, Result<Option<Bytes>, TransportError>> {
        let chunk = self.data.take();
        Box::pin(async move { Ok(chunk) })
    }
}

impl Drop for SpyBody {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

struct TrickleBody {
    remaining: usize,
    delay: Duration,
    released: Arc<AtomicUsize>,
}

impl BodyStream for TrickleBody {
    fn next_chunk(&mut self) -> BoxFuture<'_, Result<Option<Bytes>, TransportError>> {
        Box::pin(async move {
            if self.remaining == 0 {
                return Ok(None);
            }
            tokio::time::sleep(self.delay).await;
            self.remaining -= 1;
            Ok(Some(Bytes::from_static(b"ts")))
        })
    }
}

impl Drop for TrickleBody {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
struct Timer {
    id: String,
    name: Option<String>,
}

#[tokio::test]
async fn test_missing_path_parameter_sends_nothing() {
    let transport = SpyTransport::respond(StatusCode::OK, "{}");
    let client = transport.client();

    let error = client
        .json_call::<Timer>(&GET_TIMER)
        .expect("json operation")
        .await
        .expect_err("timerId is missing");

    insta::assert_snapshot!(error, @"Missing the required parameter 'timerId' when calling getTimer");
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_null_path_parameter_is_missing() {
    let transport = SpyTransport::respond(StatusCode::OK, "{}");
    let client = transport.client();

    let error = client
        .json_call::<Timer>(&GET_TIMER)
        .and_then(|call| call.with_param("timerId", Option::<String>::None))
        .expect("valid arguments")
        .await
        .expect_err("timerId is null");

    assert!(matches!(
        error,
        ApiClientError::MissingParameter {
            parameter: "timerId",
            ..
        }
    ));
    assert_eq!(transport.call_count(), 0);
}

#[test]
fn test_path_is_checked_before_query() {
    let client = SpyTransport::respond(StatusCode::OK, "").client();

    let error = client
        .file_call(&GET_COUNTRIES)
        .expect("file operation")
        .prepare()
        .expect_err("both are missing");

    assert!(matches!(
        error,
        ApiClientError::MissingParameter {
            parameter: "providerId",
            ..
        }
    ));
}

#[test]
fn test_missing_required_query_parameter() {
    let client = SpyTransport::respond(StatusCode::OK, "").client();

    let error = client
        .file_call(&GET_COUNTRIES)
        .and_then(|call| call.with_param("providerId", "sd"))
        .expect("valid arguments")
        .prepare()
        .expect_err("listingsProviderId is missing");

    insta::assert_snapshot!(error, @"Missing the required parameter 'listingsProviderId' when calling getListingCountries");
}

#[tokio::test]
async fn test_missing_required_body_sends_nothing() {
    let transport = SpyTransport::respond(StatusCode::NO_CONTENT, "");
    let client = transport.client();

    let error = client
        .empty_call(&UPDATE_TIMER)
        .and_then(|call| call.with_param("timerId", "t1"))
        .and_then(|call| call.with_optional_body(Option::<&Timer>::None))
        .expect("valid arguments")
        .await
        .expect_err("the body is missing");

    insta::assert_snapshot!(error, @"Missing the required parameter 'timerInfoDto' when calling updateTimer");
    assert_eq!(transport.call_count(), 0);
}

#[test]
fn test_prepare_builds_url_in_declaration_order() {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Params {
        fields: Vec<&'static str>,
        is_airing: bool,
        channel_ids: Vec<&'static str>,
        user_id: Option<&'static str>,
    }
    let client = SpyTransport::respond(StatusCode::OK, "").client();

    let request = client
        .json_call::<serde_json::Value>(&GET_PROGRAMS)
        .and_then(|call| {
            call.with_params(&Params {
                fields: vec!["Overview", "Genres"],
                is_airing: true,
                channel_ids: vec!["a b", "c"],
                user_id: None,
            })
        })
        .expect("valid arguments")
        .prepare()
        .expect("should prepare");

    assert_eq!(request.method, Method::GET);
    insta::assert_snapshot!(
        request.url,
        @"http://127.0.0.1:8096/LiveTv/Programs?channelIds=a%20b&channelIds=c&isAiring=true&fields=Overview&fields=Genres"
    );
}

#[test]
fn test_prepare_encodes_path_and_simple_style() {
    let client = SpyTransport::respond(StatusCode::OK, "").client();

    let request = client
        .file_call(&GET_COUNTRIES)
        .and_then(|call| call.with_param("providerId", "sd/1"))
        .and_then(|call| call.with_param("listingsProviderId", "sd"))
        .and_then(|call| call.with_param("ids", ["x", "y"]))
        .expect("valid arguments")
        .prepare()
        .expect("should prepare");

    insta::assert_snapshot!(
        request.url,
        @"http://127.0.0.1:8096/LiveTv/ListingProviders/sd%2F1/Countries?listingsProviderId=sd&ids=x%2Cy"
    );
}

#[test]
fn test_undeclared_argument_is_ignored() {
    let client = SpyTransport::respond(StatusCode::OK, "").client();

    let request = client
        .json_call::<Timer>(&GET_TIMER)
        .and_then(|call| call.with_param("timerId", "t1"))
        .and_then(|call| call.with_param("unknown", 42))
        .expect("valid arguments")
        .prepare()
        .expect("should prepare");

    insta::assert_snapshot!(request.url, @"http://127.0.0.1:8096/LiveTv/Timers/t1");
}

#[test]
fn test_params_must_be_an_object() {
    let client = SpyTransport::respond(StatusCode::OK, "").client();

    let error = client
        .json_call::<Timer>(&GET_TIMER)
        .expect("json operation")
        .with_params(&["timerId"])
        .expect_err("an array is not a parameter set");

    assert!(matches!(
        error,
        ApiClientError::SerializationFailure {
            operation_id: "getTimer",
            ..
        }
    ));
}

#[test]
fn test_headers_precedence() {
    let transport = SpyTransport::respond(StatusCode::OK, "");
    let client = ApiClient::builder()
        .with_transport(transport)
        .with_default_header("X-Emby-Client", "tests")
        .with_default_header("X-Trace", "default")
        .build()
        .expect("valid client");

    let request = client
        .empty_call(&UPDATE_TIMER)
        .and_then(|call| call.with_param("timerId", "t1"))
        .and_then(|call| {
            call.with_body(&Timer {
                id: "t1".to_string(),
                name: None,
            })
        })
        .expect("valid arguments")
        .with_header("X-Trace", "call")
        .with_header("Accept", "application/json")
        .prepare()
        .expect("should prepare");

    assert_eq!(request.headers.get(ACCEPT), Some(&HeaderValue::from_static("application/json")));
    assert_eq!(
        request.headers.get(CONTENT_TYPE),
        Some(&HeaderValue::from_static("application/json"))
    );
    assert_eq!(request.headers.get("X-Emby-Client"), Some(&HeaderValue::from_static("tests")));
    assert_eq!(request.headers.get("X-Trace"), Some(&HeaderValue::from_static("call")));
    assert_eq!(
        request.body.as_deref(),
        Some(br#"{"Id":"t1","Name":null}"#.as_slice())
    );
}

#[test]
fn test_request_interceptor_has_final_word() {
    let client = ApiClient::builder()
        .with_transport(SpyTransport::respond(StatusCode::OK, ""))
        .with_default_header("Authorization", "default")
        .with_request_interceptor(RequestInterceptor::new(|request| {
            request
                .headers
                .insert(AUTHORIZATION, HeaderValue::from_static("MediaBrowser Token=\"t\""));
        }))
        .build()
        .expect("valid client");

    let request = client
        .empty_call(&CANCEL_TIMER)
        .and_then(|call| call.with_param("timerId", "t1"))
        .expect("valid arguments")
        .with_header("Authorization", "call")
        .prepare()
        .expect("should prepare");

    assert_eq!(
        request.headers.get(AUTHORIZATION),
        Some(&HeaderValue::from_static("MediaBrowser Token=\"t\""))
    );
    assert_eq!(request.body, None);
}

#[tokio::test]
async fn test_json_call_decodes_and_releases_body() -> anyhow::Result<()> {
    let transport = SpyTransport::respond(StatusCode::OK, r#"{"Id":"t1","Name":"News"}"#);
    let client = transport.client();

    let result = client.json_call::<Timer>(&GET_TIMER)?.with_param("timerId", "t1")?.await?;

    assert_eq!(result.status(), StatusCode::OK);
    assert_eq!(
        result.into_data(),
        Some(Timer {
            id: "t1".to_string(),
            name: Some("News".to_string()),
        })
    );
    assert_eq!(transport.last_request().url.path(), "/LiveTv/Timers/t1");
    assert_eq!(transport.released(), 1);
    Ok(())
}

#[tokio::test]
async fn test_blank_json_body_yields_no_data() -> anyhow::Result<()> {
    let transport = SpyTransport::respond(StatusCode::OK, "");
    let client = transport.client();

    let result = client.json_call::<Timer>(&GET_TIMER)?.with_param("timerId", "t1")?.await?;

    assert_eq!(result.data(), None);
    assert_eq!(transport.released(), 1);
    Ok(())
}

#[tokio::test]
async fn test_error_status_releases_body() -> anyhow::Result<()> {
    let transport = SpyTransport::respond(StatusCode::INTERNAL_SERVER_ERROR, "boom");
    let client = transport.client();

    let error = client
        .empty_call(&CANCEL_TIMER)?
        .with_param("timerId", "t1")?
        .await
        .expect_err("500 is an error");

    insta::assert_snapshot!(error, @"cancelTimer call failed with: 500 - boom");
    assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(transport.released(), 1);
    Ok(())
}

#[tokio::test]
async fn test_undecodable_body_is_released() -> anyhow::Result<()> {
    let transport = SpyTransport::respond(StatusCode::OK, r#"{"Id":42}"#);
    let client = transport.client();

    let error = client
        .json_call::<Timer>(&GET_TIMER)?
        .with_param("timerId", "t1")?
        .await
        .expect_err("the id is not a string");

    assert!(matches!(error, ApiClientError::DeserializationFailure { .. }));
    assert_eq!(transport.released(), 1);
    Ok(())
}

#[tokio::test]
async fn test_empty_call_drains_and_releases_body() -> anyhow::Result<()> {
    let transport = SpyTransport::respond(StatusCode::NO_CONTENT, "ignored");
    let client = transport.client();

    let result = client.empty_call(&CANCEL_TIMER)?.with_param("timerId", "t1")?.await?;

    assert_eq!(result.status(), StatusCode::NO_CONTENT);
    assert_eq!(result.data(), None);
    assert_eq!(transport.released(), 1);
    Ok(())
}

#[rstest]
#[case::current(".")]
#[case::parent("..")]
#[tokio::test]
async fn test_dot_segment_path_value_sends_nothing(#[case] timer_id: &str) -> anyhow::Result<()> {
    let transport = SpyTransport::respond(StatusCode::NO_CONTENT, "");
    let client = transport.client();

    let error = client
        .empty_call(&CANCEL_TIMER)?
        .with_param("timerId", timer_id)?
        .await
        .expect_err("a dot segment would change the target");

    assert!(matches!(
        error,
        ApiClientError::UnsupportedParameterValue {
            operation_id: "cancelTimer",
            ..
        }
    ));
    assert_eq!(transport.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_download_may_outlast_read_timeout() -> anyhow::Result<()> {
    let transport = SpyTransport::new(Outcome::Trickle {
        chunks: 5,
        delay: Duration::from_millis(40),
    });
    let client = transport.client_with_read_timeout(Duration::from_millis(100));

    let file = client
        .file_call(&LIVE_RECORDING)?
        .with_param("recordingId", "rec-1")?
        .await?
        .into_data()
        .expect("a downloaded file");

    assert_eq!(file.read().await?, b"tststststs");
    assert_eq!(transport.released(), 1);
    Ok(())
}

#[tokio::test]
async fn test_stalled_body_times_out() -> anyhow::Result<()> {
    let transport = SpyTransport::new(Outcome::Trickle {
        chunks: 2,
        delay: Duration::from_millis(300),
    });
    let client = transport.client_with_read_timeout(Duration::from_millis(50));

    let error = client
        .file_call(&LIVE_RECORDING)?
        .with_param("recordingId", "rec-1")?
        .await
        .expect_err("no chunk arrives in time");

    insta::assert_snapshot!(error, @"getLiveRecordingFile timed out");
    assert_eq!(transport.released(), 1);
    Ok(())
}

#[tokio::test]
async fn test_transport_failure() -> anyhow::Result<()> {
    let client = SpyTransport::new(Outcome::Fail).client();

    let error = client
        .empty_call(&CANCEL_TIMER)?
        .with_param("timerId", "t1")?
        .await
        .expect_err("the transport fails");

    insta::assert_snapshot!(error, @"cancelTimer transport failure: connection refused");
    Ok(())
}

#[tokio::test]
async fn test_transport_timeout_is_timed_out() -> anyhow::Result<()> {
    let client = SpyTransport::new(Outcome::GiveUp).client();

    let error = client
        .empty_call(&CANCEL_TIMER)?
        .with_param("timerId", "t1")?
        .await
        .expect_err("the transport gives up");

    assert!(matches!(error, ApiClientError::TimedOut { operation_id: "cancelTimer" }));
    Ok(())
}

#[tokio::test]
async fn test_call_timeout() -> anyhow::Result<()> {
    let client = SpyTransport::new(Outcome::Hang).client();

    let error = client
        .empty_call(&CANCEL_TIMER)?
        .with_param("timerId", "t1")?
        .with_timeout(Duration::from_millis(20))
        .await
        .expect_err("the transport hangs");

    insta::assert_snapshot!(error, @"cancelTimer timed out");
    Ok(())
}

#[tokio::test]
async fn test_cancellation_aborts_in_flight_call() -> anyhow::Result<()> {
    let transport = SpyTransport::new(Outcome::Hang);
    let client = transport.client();
    let token = CancellationToken::new();

    let call = client
        .empty_call(&CANCEL_TIMER)?
        .with_param("timerId", "t1")?
        .with_cancellation(token.clone());
    let handle = tokio::spawn(call.into_future());
    tokio::time::sleep(Duration::from_millis(20)).await;
    token.cancel();

    let error = handle.await?.expect_err("the call is cancelled");

    insta::assert_snapshot!(error, @"cancelTimer was cancelled");
    assert_eq!(transport.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_cancelled_token_wins() -> anyhow::Result<()> {
    let client = SpyTransport::respond(StatusCode::NO_CONTENT, "").client();
    let token = CancellationToken::new();
    token.cancel();

    let error = client
        .empty_call(&CANCEL_TIMER)?
        .with_param("timerId", "t1")?
        .with_cancellation(token)
        .await
        .expect_err("already cancelled");

    assert!(matches!(error, ApiClientError::Cancelled { .. }));
    Ok(())
}

#[tokio::test]
async fn test_response_interceptor_observes_status() -> anyhow::Result<()> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);
    let client = ApiClient::builder()
        .with_transport(SpyTransport::respond(StatusCode::NOT_FOUND, ""))
        .with_response_interceptor(ResponseInterceptor::new(move |head| {
            recorder
                .lock()
                .expect("not poisoned")
                .push((head.operation_id, head.status));
        }))
        .build()?;

    let _error = client
        .empty_call(&CANCEL_TIMER)?
        .with_param("timerId", "t1")?
        .await
        .expect_err("404 is an error");

    assert_eq!(
        *seen.lock().expect("not poisoned"),
        vec![("cancelTimer", StatusCode::NOT_FOUND)]
    );
    Ok(())
}

#[test]
fn test_typed_call_checks_response_shape() {
    let client = SpyTransport::respond(StatusCode::OK, "").client();

    let error = client
        .json_call::<Timer>(&CANCEL_TIMER)
        .expect_err("cancelTimer returns nothing");

    insta::assert_snapshot!(error, @"cancelTimer response shape is empty, expected JSON");
}
