use std::collections::HashMap;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::enums::{ChannelType, RecordingStatus};

/// A library item: a channel, a program, a recording, a folder...
///
/// Only the fields used around Live TV are typed. Every other property sent by the server
/// is kept in [`extra`](Self::extra).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct BaseItemDto {
    pub name: Option<String>,
    pub original_title: Option<String>,
    pub server_id: Option<String>,
    pub id: Option<Uuid>,
    pub etag: Option<String>,
    #[serde(rename = "Type")]
    pub item_type: Option<String>,
    pub media_type: Option<String>,
    pub date_created: Option<Timestamp>,
    pub overview: Option<String>,
    pub genres: Option<Vec<String>>,
    pub community_rating: Option<f32>,
    pub official_rating: Option<String>,
    pub run_time_ticks: Option<i64>,
    pub production_year: Option<i32>,
    pub is_folder: Option<bool>,
    pub parent_id: Option<Uuid>,
    pub channel_id: Option<Uuid>,
    pub channel_name: Option<String>,
    pub channel_number: Option<String>,
    pub channel_type: Option<ChannelType>,
    pub channel_primary_image_tag: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub episode_title: Option<String>,
    pub is_movie: Option<bool>,
    pub is_series: Option<bool>,
    pub is_news: Option<bool>,
    pub is_kids: Option<bool>,
    pub is_sports: Option<bool>,
    pub is_live: Option<bool>,
    pub is_premiere: Option<bool>,
    pub is_repeat: Option<bool>,
    pub timer_id: Option<String>,
    pub series_timer_id: Option<String>,
    pub program_id: Option<String>,
    pub status: Option<RecordingStatus>,
    pub current_program: Option<Box<BaseItemDto>>,
    pub image_tags: Option<HashMap<String, String>>,

    /// Properties without a typed field.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A page of query results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryResult<T> {
    /// The items of the page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// The total number of matching records.
    #[serde(default)]
    pub total_record_count: i32,
    /// The index of the first item of the page.
    #[serde(default)]
    pub start_index: i32,
}

impl<T> Default for QueryResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_record_count: 0,
            start_index: 0,
        }
    }
}

/// A page of items.
pub type BaseItemDtoQueryResult = QueryResult<BaseItemDto>;

/// A name with its identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct NameIdPair {
    pub name: Option<String>,
    pub id: Option<String>,
}

/// A name with its value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct NameValuePair {
    pub name: Option<String>,
    pub value: Option<String>,
}
