//! SyncPlay: synchronized playback groups.
//!
//! Every command is a `POST` answered without data; most of them carry a required body.

use crate::client::{
    ApiCall, ApiClient, ApiClientError, BodySpec, HttpMethod, OperationDescriptor, ResponseShape,
    accept,
};
use crate::models::{
    BufferRequestDto, GroupInfoDto, IgnoreWaitRequestDto, JoinGroupRequestDto,
    MovePlaylistItemRequestDto, NewGroupRequestDto, NextItemRequestDto, PingRequestDto,
    PlayRequestDto, PreviousItemRequestDto, QueueRequestDto, ReadyRequestDto,
    RemoveFromPlaylistRequestDto, SeekRequestDto, SetPlaylistItemRequestDto,
    SetRepeatModeRequestDto, SetShuffleModeRequestDto,
};

const fn command(operation_id: &'static str, path: &'static str) -> OperationDescriptor {
    OperationDescriptor::new(operation_id, HttpMethod::Post, path)
}

const fn command_with(
    operation_id: &'static str,
    path: &'static str,
    body: &'static str,
) -> OperationDescriptor {
    command(operation_id, path).with_body(BodySpec::Required(body))
}

/// `POST /SyncPlay/Buffering`
pub static SYNC_PLAY_BUFFERING: OperationDescriptor =
    command_with("syncPlayBuffering", "/SyncPlay/Buffering", "bufferRequestDto");

/// `POST /SyncPlay/New`
pub static SYNC_PLAY_CREATE_GROUP: OperationDescriptor =
    command_with("syncPlayCreateGroup", "/SyncPlay/New", "newGroupRequestDto");

/// `GET /SyncPlay/List`
pub static SYNC_PLAY_GET_GROUPS: OperationDescriptor =
    OperationDescriptor::new("syncPlayGetGroups", HttpMethod::Get, "/SyncPlay/List")
        .with_accept(accept::JSON_PROFILES)
        .returning(ResponseShape::Json);

/// `POST /SyncPlay/Join`
pub static SYNC_PLAY_JOIN_GROUP: OperationDescriptor =
    command_with("syncPlayJoinGroup", "/SyncPlay/Join", "joinGroupRequestDto");

/// `POST /SyncPlay/Leave`
pub static SYNC_PLAY_LEAVE_GROUP: OperationDescriptor = command("syncPlayLeaveGroup", "/SyncPlay/Leave");

/// `POST /SyncPlay/MovePlaylistItem`
pub static SYNC_PLAY_MOVE_PLAYLIST_ITEM: OperationDescriptor = command_with(
    "syncPlayMovePlaylistItem",
    "/SyncPlay/MovePlaylistItem",
    "movePlaylistItemRequestDto",
);

/// `POST /SyncPlay/NextItem`
pub static SYNC_PLAY_NEXT_ITEM: OperationDescriptor =
    command_with("syncPlayNextItem", "/SyncPlay/NextItem", "nextItemRequestDto");

/// `POST /SyncPlay/Pause`
pub static SYNC_PLAY_PAUSE: OperationDescriptor = command("syncPlayPause", "/SyncPlay/Pause");

/// `POST /SyncPlay/Ping`
pub static SYNC_PLAY_PING: OperationDescriptor =
    command_with("syncPlayPing", "/SyncPlay/Ping", "pingRequestDto");

/// `POST /SyncPlay/PreviousItem`
pub static SYNC_PLAY_PREVIOUS_ITEM: OperationDescriptor =
    command_with("syncPlayPreviousItem", "/SyncPlay/PreviousItem", "previousItemRequestDto");

/// `POST /SyncPlay/Queue`
pub static SYNC_PLAY_QUEUE: OperationDescriptor =
    command_with("syncPlayQueue", "/SyncPlay/Queue", "queueRequestDto");

/// `POST /SyncPlay/Ready`
pub static SYNC_PLAY_READY: OperationDescriptor =
    command_with("syncPlayReady", "/SyncPlay/Ready", "readyRequestDto");

/// `POST /SyncPlay/RemoveFromPlaylist`
pub static SYNC_PLAY_REMOVE_FROM_PLAYLIST: OperationDescriptor = command_with(
    "syncPlayRemoveFromPlaylist",
    "/SyncPlay/RemoveFromPlaylist",
    "removeFromPlaylistRequestDto",
);

/// `POST /SyncPlay/Seek`
pub static SYNC_PLAY_SEEK: OperationDescriptor =
    command_with("syncPlaySeek", "/SyncPlay/Seek", "seekRequestDto");

/// `POST /SyncPlay/SetIgnoreWait`
pub static SYNC_PLAY_SET_IGNORE_WAIT: OperationDescriptor =
    command_with("syncPlaySetIgnoreWait", "/SyncPlay/SetIgnoreWait", "ignoreWaitRequestDto");

/// `POST /SyncPlay/SetNewQueue`
pub static SYNC_PLAY_SET_NEW_QUEUE: OperationDescriptor =
    command_with("syncPlaySetNewQueue", "/SyncPlay/SetNewQueue", "playRequestDto");

/// `POST /SyncPlay/SetPlaylistItem`
pub static SYNC_PLAY_SET_PLAYLIST_ITEM: OperationDescriptor = command_with(
    "syncPlaySetPlaylistItem",
    "/SyncPlay/SetPlaylistItem",
    "setPlaylistItemRequestDto",
);

/// `POST /SyncPlay/SetRepeatMode`
pub static SYNC_PLAY_SET_REPEAT_MODE: OperationDescriptor =
    command_with("syncPlaySetRepeatMode", "/SyncPlay/SetRepeatMode", "setRepeatModeRequestDto");

/// `POST /SyncPlay/SetShuffleMode`
pub static SYNC_PLAY_SET_SHUFFLE_MODE: OperationDescriptor =
    command_with("syncPlaySetShuffleMode", "/SyncPlay/SetShuffleMode", "setShuffleModeRequestDto");

/// `POST /SyncPlay/Stop`
pub static SYNC_PLAY_STOP: OperationDescriptor = command("syncPlayStop", "/SyncPlay/Stop");

/// `POST /SyncPlay/Unpause`
pub static SYNC_PLAY_UNPAUSE: OperationDescriptor = command("syncPlayUnpause", "/SyncPlay/Unpause");

/// Every SyncPlay operation.
pub static ALL: &[&OperationDescriptor] = &[
    &SYNC_PLAY_BUFFERING,
    &SYNC_PLAY_CREATE_GROUP,
    &SYNC_PLAY_GET_GROUPS,
    &SYNC_PLAY_JOIN_GROUP,
    &SYNC_PLAY_LEAVE_GROUP,
    &SYNC_PLAY_MOVE_PLAYLIST_ITEM,
    &SYNC_PLAY_NEXT_ITEM,
    &SYNC_PLAY_PAUSE,
    &SYNC_PLAY_PING,
    &SYNC_PLAY_PREVIOUS_ITEM,
    &SYNC_PLAY_QUEUE,
    &SYNC_PLAY_READY,
    &SYNC_PLAY_REMOVE_FROM_PLAYLIST,
    &SYNC_PLAY_SEEK,
    &SYNC_PLAY_SET_IGNORE_WAIT,
    &SYNC_PLAY_SET_NEW_QUEUE,
    &SYNC_PLAY_SET_PLAYLIST_ITEM,
    &SYNC_PLAY_SET_REPEAT_MODE,
    &SYNC_PLAY_SET_SHUFFLE_MODE,
    &SYNC_PLAY_STOP,
    &SYNC_PLAY_UNPAUSE,
];

/// The SyncPlay operations, bound to a client.
#[derive(Debug, Clone, Copy)]
pub struct SyncPlayApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// The SyncPlay operations.
    pub fn sync_play(&self) -> SyncPlayApi<'_> {
        SyncPlayApi { client: self }
    }
}

#[allow(clippy::missing_errors_doc)]
impl SyncPlayApi<'_> {
    fn command<B>(
        &self,
        descriptor: &'static OperationDescriptor,
        request: &B,
    ) -> Result<ApiCall<()>, ApiClientError>
    where
        B: serde::Serialize,
    {
        self.client.empty_call(descriptor)?.with_body(request)
    }

    /// Notifies the group that this client is buffering.
    pub fn buffering(&self, request: &BufferRequestDto) -> Result<ApiCall<()>, ApiClientError> {
        self.command(&SYNC_PLAY_BUFFERING, request)
    }

    /// Creates a new group and joins it.
    pub fn create_group(&self, request: &NewGroupRequestDto) -> Result<ApiCall<()>, ApiClientError> {
        self.command(&SYNC_PLAY_CREATE_GROUP, request)
    }

    /// Lists the groups the user may join.
    pub fn get_groups(&self) -> Result<ApiCall<Vec<GroupInfoDto>>, ApiClientError> {
        self.client.json_call(&SYNC_PLAY_GET_GROUPS)
    }

    /// Joins a group.
    pub fn join_group(&self, request: &JoinGroupRequestDto) -> Result<ApiCall<()>, ApiClientError> {
        self.command(&SYNC_PLAY_JOIN_GROUP, request)
    }

    /// Leaves the current group.
    pub fn leave_group(&self) -> Result<ApiCall<()>, ApiClientError> {
        self.client.empty_call(&SYNC_PLAY_LEAVE_GROUP)
    }

    /// Moves an item in the playlist.
    pub fn move_playlist_item(
        &self,
        request: &MovePlaylistItemRequestDto,
    ) -> Result<ApiCall<()>, ApiClientError> {
        self.command(&SYNC_PLAY_MOVE_PLAYLIST_ITEM, request)
    }

    /// Plays the next item.
    pub fn next_item(&self, request: &NextItemRequestDto) -> Result<ApiCall<()>, ApiClientError> {
        self.command(&SYNC_PLAY_NEXT_ITEM, request)
    }

    /// Pauses the group playback.
    pub fn pause(&self) -> Result<ApiCall<()>, ApiClientError> {
        self.client.empty_call(&SYNC_PLAY_PAUSE)
    }

    /// Reports the client round trip time.
    pub fn ping(&self, request: &PingRequestDto) -> Result<ApiCall<()>, ApiClientError> {
        self.command(&SYNC_PLAY_PING, request)
    }

    /// Plays the previous item.
    pub fn previous_item(&self, request: &PreviousItemRequestDto) -> Result<ApiCall<()>, ApiClientError> {
        self.command(&SYNC_PLAY_PREVIOUS_ITEM, request)
    }

    /// Adds items to the playlist.
    pub fn queue(&self, request: &QueueRequestDto) -> Result<ApiCall<()>, ApiClientError> {
        self.command(&SYNC_PLAY_QUEUE, request)
    }

    /// Notifies the group that this client is ready.
    pub fn ready(&self, request: &ReadyRequestDto) -> Result<ApiCall<()>, ApiClientError> {
        self.command(&SYNC_PLAY_READY, request)
    }

    /// Removes items from the playlist.
    pub fn remove_from_playlist(
        &self,
        request: &RemoveFromPlaylistRequestDto,
    ) -> Result<ApiCall<()>, ApiClientError> {
        self.command(&SYNC_PLAY_REMOVE_FROM_PLAYLIST, request)
    }

    /// Seeks the group playback.
    pub fn seek(&self, request: &SeekRequestDto) -> Result<ApiCall<()>, ApiClientError> {
        self.command(&SYNC_PLAY_SEEK, request)
    }

    /// Tells the group whether to wait for this client.
    pub fn set_ignore_wait(&self, request: &IgnoreWaitRequestDto) -> Result<ApiCall<()>, ApiClientError> {
        self.command(&SYNC_PLAY_SET_IGNORE_WAIT, request)
    }

    /// Replaces the playing queue.
    pub fn set_new_queue(&self, request: &PlayRequestDto) -> Result<ApiCall<()>, ApiClientError> {
        self.command(&SYNC_PLAY_SET_NEW_QUEUE, request)
    }

    /// Sets the playing item.
    pub fn set_playlist_item(
        &self,
        request: &SetPlaylistItemRequestDto,
    ) -> Result<ApiCall<()>, ApiClientError> {
        self.command(&SYNC_PLAY_SET_PLAYLIST_ITEM, request)
    }

    /// Sets the repeat mode.
    pub fn set_repeat_mode(&self, request: &SetRepeatModeRequestDto) -> Result<ApiCall<()>, ApiClientError> {
        self.command(&SYNC_PLAY_SET_REPEAT_MODE, request)
    }

    /// Sets the shuffle mode.
    pub fn set_shuffle_mode(
        &self,
        request: &SetShuffleModeRequestDto,
    ) -> Result<ApiCall<()>, ApiClientError> {
        self.command(&SYNC_PLAY_SET_SHUFFLE_MODE, request)
    }

    /// Stops the group playback.
    pub fn stop(&self) -> Result<ApiCall<()>, ApiClientError> {
        self.client.empty_call(&SYNC_PLAY_STOP)
    }

    /// Resumes the group playback.
    pub fn unpause(&self) -> Result<ApiCall<()>, ApiClientError> {
        self.client.empty_call(&SYNC_PLAY_UNPAUSE)
    }
}
