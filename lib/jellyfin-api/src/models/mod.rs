//! JSON documents exchanged with the media server.
//!
//! Property names are PascalCase on the wire. Every property is optional unless the server
//! requires it, so unknown or partial documents still decode.

mod enums;
pub use self::enums::{
    ChannelType, DayOfWeek, DayPattern, GroupQueueMode, GroupRepeatMode, GroupShuffleMode,
    GroupStateType, ImageType, ItemFields, ItemSortBy, KeepUntil, LiveTvServiceStatus,
    MediaStreamProtocol, RecordingStatus, SortOrder,
};

mod item;
pub use self::item::{BaseItemDto, BaseItemDtoQueryResult, NameIdPair, NameValuePair, QueryResult};

mod live_tv;
pub use self::live_tv::{
    ChannelMappingOptionsDto, GetProgramsDto, GuideInfo, ListingsProviderInfo, LiveTvInfo,
    LiveTvServiceInfo, SeriesTimerInfoDto, SeriesTimerInfoDtoQueryResult, SetChannelMappingDto,
    TimerInfoDto, TimerInfoDtoQueryResult, TunerChannelMapping, TunerHostInfo,
};

mod sync_play;
pub use self::sync_play::{
    BufferRequestDto, GroupInfoDto, IgnoreWaitRequestDto, JoinGroupRequestDto,
    MovePlaylistItemRequestDto, NewGroupRequestDto, NextItemRequestDto, PingRequestDto,
    PlayRequestDto, PreviousItemRequestDto, QueueRequestDto, ReadyRequestDto,
    RemoveFromPlaylistRequestDto, SeekRequestDto, SetPlaylistItemRequestDto,
    SetRepeatModeRequestDto, SetShuffleModeRequestDto,
};
