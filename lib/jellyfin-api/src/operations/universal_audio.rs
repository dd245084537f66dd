//! Universal Audio: audio streams the server remuxes or transcodes to what the client plays.

use serde::Serialize;
use uuid::Uuid;

use crate::client::{
    ApiCall, ApiClient, ApiClientError, DownloadedFile, HttpMethod, OperationDescriptor,
    QueryParam, ResponseShape, accept,
};
use crate::models::MediaStreamProtocol;

const UNIVERSAL_AUDIO_QUERY: &[QueryParam] = &[
    QueryParam::optional("container"),
    QueryParam::optional("mediaSourceId"),
    QueryParam::optional("deviceId"),
    QueryParam::optional("userId"),
    QueryParam::optional("audioCodec"),
    QueryParam::optional("maxAudioChannels"),
    QueryParam::optional("transcodingAudioChannels"),
    QueryParam::optional("maxStreamingBitrate"),
    QueryParam::optional("audioBitRate"),
    QueryParam::optional("startTimeTicks"),
    QueryParam::optional("transcodingContainer"),
    QueryParam::optional("transcodingProtocol"),
    QueryParam::optional("maxAudioSampleRate"),
    QueryParam::optional("maxAudioBitDepth"),
    QueryParam::optional("enableRemoteMedia"),
    QueryParam::optional("enableAudioVbrEncoding"),
    QueryParam::optional("breakOnNonKeyFrames"),
    QueryParam::optional("enableRedirection"),
];

/// `GET /Audio/{itemId}/universal`
pub static GET_UNIVERSAL_AUDIO_STREAM: OperationDescriptor = OperationDescriptor::new(
    "getUniversalAudioStream",
    HttpMethod::Get,
    "/Audio/{itemId}/universal",
)
.with_query(UNIVERSAL_AUDIO_QUERY)
.with_accept(accept::AUDIO)
.returning(ResponseShape::File);

/// `HEAD /Audio/{itemId}/universal`
pub static HEAD_UNIVERSAL_AUDIO_STREAM: OperationDescriptor = OperationDescriptor::new(
    "headUniversalAudioStream",
    HttpMethod::Head,
    "/Audio/{itemId}/universal",
)
.with_query(UNIVERSAL_AUDIO_QUERY)
.with_accept(accept::AUDIO)
.returning(ResponseShape::File);

/// Every Universal Audio operation.
pub static ALL: &[&OperationDescriptor] = &[&GET_UNIVERSAL_AUDIO_STREAM, &HEAD_UNIVERSAL_AUDIO_STREAM];

/// Query of the universal audio stream.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversalAudioParams {
    /// Containers the client can play, e.g. `["opus", "mp3", "aac"]`.
    pub container: Option<Vec<String>>,
    /// The media version to stream.
    pub media_source_id: Option<String>,
    /// The client device id.
    pub device_id: Option<String>,
    /// The user id.
    pub user_id: Option<Uuid>,
    /// The audio codec when transcoding.
    pub audio_codec: Option<String>,
    /// Maximum number of audio channels.
    pub max_audio_channels: Option<i32>,
    /// Number of audio channels when transcoding.
    pub transcoding_audio_channels: Option<i32>,
    /// Maximum streaming bitrate, in bits per second.
    pub max_streaming_bitrate: Option<i32>,
    /// Audio bitrate, in bits per second.
    pub audio_bit_rate: Option<i32>,
    /// Start position, in ticks.
    pub start_time_ticks: Option<i64>,
    /// The container when transcoding.
    pub transcoding_container: Option<String>,
    /// The protocol when transcoding.
    pub transcoding_protocol: Option<MediaStreamProtocol>,
    /// Maximum sample rate.
    pub max_audio_sample_rate: Option<i32>,
    /// Maximum bit depth.
    pub max_audio_bit_depth: Option<i32>,
    /// Whether remote media may be streamed.
    pub enable_remote_media: Option<bool>,
    /// Whether variable bitrate encoding may be used.
    pub enable_audio_vbr_encoding: Option<bool>,
    /// Whether to break on non key frames.
    pub break_on_non_key_frames: Option<bool>,
    /// Whether the server may redirect to the remote media.
    pub enable_redirection: Option<bool>,
}

/// The Universal Audio operations, bound to a client.
#[derive(Debug, Clone, Copy)]
pub struct UniversalAudioApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// The Universal Audio operations.
    pub fn universal_audio(&self) -> UniversalAudioApi<'_> {
        UniversalAudioApi { client: self }
    }
}

#[allow(clippy::missing_errors_doc)]
impl UniversalAudioApi<'_> {
    /// Downloads an audio stream.
    pub fn get_universal_audio_stream(
        &self,
        item_id: Uuid,
        params: &UniversalAudioParams,
    ) -> Result<ApiCall<DownloadedFile>, ApiClientError> {
        self.client
            .file_call(&GET_UNIVERSAL_AUDIO_STREAM)?
            .with_param("itemId", item_id)?
            .with_params(params)
    }

    /// Checks an audio stream; the downloaded file is empty.
    pub fn head_universal_audio_stream(
        &self,
        item_id: Uuid,
        params: &UniversalAudioParams,
    ) -> Result<ApiCall<DownloadedFile>, ApiClientError> {
        self.client
            .file_call(&HEAD_UNIVERSAL_AUDIO_STREAM)?
            .with_param("itemId", item_id)?
            .with_params(params)
    }
}
