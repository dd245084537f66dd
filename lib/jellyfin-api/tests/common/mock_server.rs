#![allow(
    clippy::missing_errors_doc,
    dead_code,
    missing_docs,
    clippy::expect_used
)]
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::{Path, Request, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::Json;
use serde_json::json;
use tokio::task::JoinHandle;
use tracing::info;

use jellyfin_api::{ApiClient, ApiClientBuilder};

pub const TIMER_ID: &str = "abc";
pub const STREAM_CONTENT: &[u8] = b"\x47\x40\x00\x10 mpeg-ts packet";
pub const AUDIO_CONTENT: &[u8] = b"OggS opus frames";

/// A request as the mock server received it.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ReceivedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|it| it.to_str().ok())
    }

    pub fn json(&self) -> anyhow::Result<serde_json::Value> {
        serde_json::from_slice(&self.body).context("the request body should be JSON")
    }
}

type Received = Arc<Mutex<Vec<ReceivedRequest>>>;

/// A Jellyfin lookalike answering the Live TV, SyncPlay and Universal Audio routes used by the tests.
#[derive(Debug)]
pub struct MockServer {
    addr: SocketAddr,
    received: Received,
    handle: JoinHandle<()>,
}

impl MockServer {
    pub async fn start() -> anyhow::Result<Self> {
        let received = Received::default();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind an ephemeral port")?;
        let addr = listener.local_addr()?;

        let router = routes().layer(middleware::from_fn_with_state(received.clone(), record));
        let handle = tokio::spawn(async move {
            if let Err(error) = axum::serve(listener, router).await {
                tracing::error!(?error, "mock server stopped");
            }
        });
        info!(%addr, "mock server started");

        Ok(Self {
            addr,
            received,
            handle,
        })
    }

    /// A builder targeting this server.
    pub fn builder(&self) -> ApiClientBuilder {
        ApiClient::builder().with_port(self.addr.port())
    }

    pub fn client(&self) -> ApiClient {
        self.builder().build().expect("valid client")
    }

    /// The requests received so far, in arrival order.
    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().expect("not poisoned").clone()
    }

    pub fn last_request(&self) -> ReceivedRequest {
        self.received()
            .pop()
            .expect("the server should have received a request")
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record(State(received): State<Received>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let Ok(body) = axum::body::to_bytes(body, usize::MAX).await else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    received.lock().expect("not poisoned").push(ReceivedRequest {
        method: parts.method.clone(),
        uri: parts.uri.clone(),
        headers: parts.headers.clone(),
        body: body.clone(),
    });

    next.run(Request::from_parts(parts, Body::from(body))).await
}

fn routes() -> Router {
    Router::new()
        .route("/LiveTv/Info", get(live_tv_info))
        .route("/LiveTv/GuideInfo", get(slow_guide_info))
        .route("/LiveTv/Programs", get(programs))
        .route("/LiveTv/Timers", get(timers))
        .route("/LiveTv/Timers/{timer_id}", get(timer).delete(no_content))
        .route("/LiveTv/Tuners/{tuner_id}/Reset", post(unavailable))
        .route("/LiveTv/ChannelMappings", post(channel_mapping))
        .route("/LiveTv/LiveStreamFiles/{stream_id}/{file}", get(stream_file))
        .route("/LiveTv/ListingProviders/SchedulesDirect/Countries", get(countries))
        .route("/LiveTv/Recordings/{recording_id}", delete(no_content))
        .route("/SyncPlay/List", get(sync_play_groups))
        .route("/SyncPlay/Ping", post(no_content))
        .route("/SyncPlay/Pause", post(no_content))
        .route("/SyncPlay/SetRepeatMode", post(no_content))
        .route("/Audio/{item_id}/universal", get(universal_audio))
}

async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn unavailable() -> StatusCode {
    StatusCode::SERVICE_UNAVAILABLE
}

async fn live_tv_info() -> Json<serde_json::Value> {
    Json(json!({
        "Services": [{ "Name": "Emby", "Status": "Ok", "IsVisible": true }],
        "IsEnabled": true,
        "EnabledUsers": ["7f0e5c2a6f0b4a40a08d4fa9b5f0b6b1"]
    }))
}

async fn slow_guide_info() -> Json<serde_json::Value> {
    tokio::time::sleep(Duration::from_secs(10)).await;
    Json(json!({}))
}

async fn programs() -> Json<serde_json::Value> {
    Json(json!({
        "Items": [{ "Name": "Evening News", "Type": "Program", "IsNews": true }],
        "TotalRecordCount": 1,
        "StartIndex": 0
    }))
}

async fn timers() -> Json<serde_json::Value> {
    Json(json!({ "Items": [], "TotalRecordCount": 0, "StartIndex": 0 }))
}

async fn timer(Path(timer_id): Path<String>) -> Response {
    if timer_id == TIMER_ID {
        Json(json!({ "Id": TIMER_ID, "Name": "Evening News", "PrePaddingSeconds": 60 }))
            .into_response()
    } else {
        (StatusCode::NOT_FOUND, "not found").into_response()
    }
}

async fn channel_mapping(Json(mapping): Json<serde_json::Value>) -> Json<serde_json::Value> {
    Json(json!({
        "Name": "Channel 1",
        "ProviderChannelName": "Provider 101",
        "ProviderChannelId": mapping["ProviderChannelId"],
        "Id": mapping["TunerChannelId"]
    }))
}

async fn stream_file(Path((_stream_id, _file)): Path<(String, String)>) -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "video/mp2t"),
            (CONTENT_DISPOSITION, r#"attachment; filename="clip.ts""#),
        ],
        STREAM_CONTENT,
    )
}

async fn countries() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/json")], r#"{"countries":["FRA","USA"]}"#)
}

async fn sync_play_groups() -> Json<serde_json::Value> {
    Json(json!([{
        "GroupId": "3c1a2b7e-9d4f-4e6a-8b2c-5f7d9e1a3b4c",
        "GroupName": "Movie night",
        "State": "Playing",
        "Participants": ["alice", "bob"]
    }]))
}

// axum answers HEAD through the GET route, without the body
async fn universal_audio() -> impl IntoResponse {
    ([(CONTENT_TYPE, "audio/ogg")], AUDIO_CONTENT)
}
