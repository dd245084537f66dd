use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{
    DayOfWeek, DayPattern, ImageType, ItemFields, ItemSortBy, KeepUntil, LiveTvServiceStatus,
    RecordingStatus, SortOrder,
};
use super::item::{BaseItemDto, NameIdPair, NameValuePair, QueryResult};

/// A scheduled recording of one program.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct TimerInfoDto {
    pub id: Option<String>,
    #[serde(rename = "Type")]
    pub timer_type: Option<String>,
    pub server_id: Option<String>,
    pub external_id: Option<String>,
    pub channel_id: Option<Uuid>,
    pub external_channel_id: Option<String>,
    pub channel_name: Option<String>,
    pub channel_primary_image_tag: Option<String>,
    pub program_id: Option<String>,
    pub external_program_id: Option<String>,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub service_name: Option<String>,
    pub priority: Option<i32>,
    pub pre_padding_seconds: Option<i32>,
    pub post_padding_seconds: Option<i32>,
    pub is_pre_padding_required: Option<bool>,
    pub parent_backdrop_item_id: Option<String>,
    pub parent_backdrop_image_tags: Option<Vec<String>>,
    pub is_post_padding_required: Option<bool>,
    pub keep_until: Option<KeepUntil>,
    pub status: Option<RecordingStatus>,
    pub series_timer_id: Option<String>,
    pub external_series_timer_id: Option<String>,
    pub run_time_ticks: Option<i64>,
    pub program_info: Option<BaseItemDto>,
}

/// A recurring recording rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct SeriesTimerInfoDto {
    pub id: Option<String>,
    #[serde(rename = "Type")]
    pub timer_type: Option<String>,
    pub server_id: Option<String>,
    pub external_id: Option<String>,
    pub channel_id: Option<Uuid>,
    pub external_channel_id: Option<String>,
    pub channel_name: Option<String>,
    pub channel_primary_image_tag: Option<String>,
    pub program_id: Option<String>,
    pub external_program_id: Option<String>,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub service_name: Option<String>,
    pub priority: Option<i32>,
    pub pre_padding_seconds: Option<i32>,
    pub post_padding_seconds: Option<i32>,
    pub is_pre_padding_required: Option<bool>,
    pub parent_backdrop_item_id: Option<String>,
    pub parent_backdrop_image_tags: Option<Vec<String>>,
    pub is_post_padding_required: Option<bool>,
    pub keep_until: Option<KeepUntil>,
    pub record_any_time: Option<bool>,
    pub skip_episodes_in_library: Option<bool>,
    pub record_any_channel: Option<bool>,
    pub keep_up_to: Option<i32>,
    pub record_new_only: Option<bool>,
    pub days: Option<Vec<DayOfWeek>>,
    pub day_pattern: Option<DayPattern>,
    pub image_tags: Option<std::collections::HashMap<String, String>>,
    pub parent_thumb_item_id: Option<String>,
    pub parent_thumb_image_tag: Option<String>,
    pub parent_primary_image_item_id: Option<String>,
    pub parent_primary_image_tag: Option<String>,
}

/// A page of timers.
pub type TimerInfoDtoQueryResult = QueryResult<TimerInfoDto>;

/// A page of series timers.
pub type SeriesTimerInfoDtoQueryResult = QueryResult<SeriesTimerInfoDto>;

/// A guide data provider configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct ListingsProviderInfo {
    pub id: Option<String>,
    #[serde(rename = "Type")]
    pub provider_type: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub listings_id: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub path: Option<String>,
    pub enabled_tuners: Option<Vec<String>>,
    pub enable_all_tuners: Option<bool>,
    pub news_categories: Option<Vec<String>>,
    pub sports_categories: Option<Vec<String>>,
    pub kids_categories: Option<Vec<String>>,
    pub movie_categories: Option<Vec<String>>,
    pub channel_mappings: Option<Vec<NameValuePair>>,
    pub movie_prefix: Option<String>,
    pub preferred_language: Option<String>,
    pub user_agent: Option<String>,
}

/// A tuner device configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct TunerHostInfo {
    pub id: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "Type")]
    pub tuner_type: Option<String>,
    pub device_id: Option<String>,
    pub friendly_name: Option<String>,
    pub import_favorites_only: Option<bool>,
    #[serde(rename = "AllowHWTranscoding")]
    pub allow_hw_transcoding: Option<bool>,
    pub allow_fmp4_transcoding_container: Option<bool>,
    pub allow_stream_sharing: Option<bool>,
    pub fallback_max_streaming_bitrate: Option<i32>,
    pub enable_stream_looping: Option<bool>,
    pub source: Option<String>,
    pub tuner_count: Option<i32>,
    pub user_agent: Option<String>,
    pub ignore_dts: Option<bool>,
}

/// Mapping between a tuner channel and a guide provider channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct TunerChannelMapping {
    pub name: Option<String>,
    pub provider_channel_name: Option<String>,
    pub provider_channel_id: Option<String>,
    pub id: Option<String>,
}

/// The channels that can be mapped for a guide provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct ChannelMappingOptionsDto {
    pub tuner_channels: Option<Vec<TunerChannelMapping>>,
    pub provider_channels: Option<Vec<NameIdPair>>,
    pub mappings: Option<Vec<NameValuePair>>,
    pub provider_name: Option<String>,
}

/// Request body of a channel mapping update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct SetChannelMappingDto {
    pub provider_id: String,
    pub tuner_channel_id: String,
    pub provider_channel_id: String,
}

/// The time span covered by the guide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct GuideInfo {
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

/// State of one Live TV service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct LiveTvServiceInfo {
    pub name: Option<String>,
    pub home_page_url: Option<String>,
    pub status: Option<LiveTvServiceStatus>,
    pub status_message: Option<String>,
    pub version: Option<String>,
    pub has_update_available: Option<bool>,
    pub is_visible: Option<bool>,
    pub tuners: Option<Vec<String>>,
}

/// Overall Live TV state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct LiveTvInfo {
    pub services: Option<Vec<LiveTvServiceInfo>>,
    pub is_enabled: Option<bool>,
    pub enabled_users: Option<Vec<String>>,
}

/// Request body of the program search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct GetProgramsDto {
    pub channel_ids: Option<Vec<Uuid>>,
    pub user_id: Option<Uuid>,
    pub min_start_date: Option<Timestamp>,
    pub has_aired: Option<bool>,
    pub is_airing: Option<bool>,
    pub max_start_date: Option<Timestamp>,
    pub min_end_date: Option<Timestamp>,
    pub max_end_date: Option<Timestamp>,
    pub is_movie: Option<bool>,
    pub is_series: Option<bool>,
    pub is_news: Option<bool>,
    pub is_kids: Option<bool>,
    pub is_sports: Option<bool>,
    pub start_index: Option<i32>,
    pub limit: Option<i32>,
    pub sort_by: Option<Vec<ItemSortBy>>,
    pub sort_order: Option<Vec<SortOrder>>,
    pub genres: Option<Vec<String>>,
    pub genre_ids: Option<Vec<Uuid>>,
    pub enable_images: Option<bool>,
    pub enable_total_record_count: Option<bool>,
    pub image_type_limit: Option<i32>,
    pub enable_image_types: Option<Vec<ImageType>>,
    pub enable_user_data: Option<bool>,
    pub series_timer_id: Option<String>,
    pub library_series_id: Option<Uuid>,
    pub fields: Option<Vec<ItemFields>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_uses_pascal_case() {
        let timer: TimerInfoDto = serde_json::from_str(
            r#"{"Id":"abc","ChannelName":"News 24","KeepUntil":"UntilWatched","Status":"New","PrePaddingSeconds":60}"#,
        )
        .expect("valid timer");

        assert_eq!(timer.id.as_deref(), Some("abc"));
        assert_eq!(timer.channel_name.as_deref(), Some("News 24"));
        assert_eq!(timer.keep_until, Some(KeepUntil::UntilWatched));
        assert_eq!(timer.status, Some(RecordingStatus::New));
        assert_eq!(timer.pre_padding_seconds, Some(60));
    }

    #[test]
    fn test_tuner_host_acronym_fields() {
        let tuner = TunerHostInfo {
            allow_hw_transcoding: Some(true),
            ..Default::default()
        };

        let json = serde_json::to_value(&tuner).expect("serializable");

        assert_eq!(json["AllowHWTranscoding"], serde_json::json!(true));
        assert_eq!(json["AllowFmp4TranscodingContainer"], serde_json::Value::Null);
    }

    #[test]
    fn test_series_timer_days() {
        let timer: SeriesTimerInfoDto = serde_json::from_str(
            r#"{"Days":["Monday","Friday"],"DayPattern":"Weekdays","RecordNewOnly":true}"#,
        )
        .expect("valid series timer");

        assert_eq!(timer.days, Some(vec![DayOfWeek::Monday, DayOfWeek::Friday]));
        assert_eq!(timer.day_pattern, Some(DayPattern::Weekdays));
    }
}
