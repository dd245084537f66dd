use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{GroupQueueMode, GroupRepeatMode, GroupShuffleMode, GroupStateType};

/// A client reports it is buffering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct BufferRequestDto {
    pub when: Option<Timestamp>,
    pub position_ticks: Option<i64>,
    pub is_playing: Option<bool>,
    pub playlist_item_id: Option<Uuid>,
}

/// A client reports it is ready to play.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct ReadyRequestDto {
    pub when: Option<Timestamp>,
    pub position_ticks: Option<i64>,
    pub is_playing: Option<bool>,
    pub playlist_item_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct NewGroupRequestDto {
    pub group_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct JoinGroupRequestDto {
    pub group_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct MovePlaylistItemRequestDto {
    pub playlist_item_id: Option<Uuid>,
    pub new_index: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct NextItemRequestDto {
    pub playlist_item_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct PreviousItemRequestDto {
    pub playlist_item_id: Option<Uuid>,
}

/// Round trip time measured by the client, in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct PingRequestDto {
    pub ping: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct QueueRequestDto {
    pub item_ids: Option<Vec<Uuid>>,
    pub mode: Option<GroupQueueMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct RemoveFromPlaylistRequestDto {
    pub playlist_item_ids: Option<Vec<Uuid>>,
    pub clear_playlist: Option<bool>,
    pub clear_playing_item: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct SeekRequestDto {
    pub position_ticks: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct IgnoreWaitRequestDto {
    pub ignore_wait: Option<bool>,
}

/// Replaces the group playing queue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct PlayRequestDto {
    pub playing_queue: Option<Vec<Uuid>>,
    pub playing_item_position: Option<i32>,
    pub start_position_ticks: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct SetPlaylistItemRequestDto {
    pub playlist_item_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct SetRepeatModeRequestDto {
    pub mode: Option<GroupRepeatMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct SetShuffleModeRequestDto {
    pub mode: Option<GroupShuffleMode>,
}

/// A SyncPlay group as listed by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(missing_docs)]
pub struct GroupInfoDto {
    pub group_id: Option<Uuid>,
    pub group_name: Option<String>,
    pub state: Option<GroupStateType>,
    pub participants: Option<Vec<String>>,
    pub last_updated_at: Option<Timestamp>,
}
