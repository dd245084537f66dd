//! Live TV: channels, guide, programs, recordings, timers, tuners and guide providers.

use serde::Serialize;
use uuid::Uuid;

use crate::client::{
    ApiCall, ApiClient, ApiClientError, BodySpec, DownloadedFile, HttpMethod, OperationDescriptor,
    QueryParam, ResponseShape, accept,
};
use crate::models::{
    BaseItemDto, BaseItemDtoQueryResult, ChannelMappingOptionsDto, ChannelType, GetProgramsDto,
    GuideInfo, ImageType, ItemFields, ItemSortBy, ListingsProviderInfo, LiveTvInfo, NameIdPair,
    RecordingStatus, SeriesTimerInfoDto, SeriesTimerInfoDtoQueryResult, SetChannelMappingDto,
    SortOrder, TimerInfoDto, TimerInfoDtoQueryResult, TunerChannelMapping, TunerHostInfo,
};

const fn get(operation_id: &'static str, path: &'static str) -> OperationDescriptor {
    OperationDescriptor::new(operation_id, HttpMethod::Get, path)
        .with_accept(accept::JSON_PROFILES)
        .returning(ResponseShape::Json)
}

/// `POST /LiveTv/ListingProviders`
pub static ADD_LISTING_PROVIDER: OperationDescriptor = OperationDescriptor::new(
    "addListingProvider",
    HttpMethod::Post,
    "/LiveTv/ListingProviders",
)
.with_query(&[
    QueryParam::optional("pw"),
    QueryParam::optional("validateListings"),
    QueryParam::optional("validateLogin"),
])
.with_body(BodySpec::Optional("listingsProviderInfo"))
.with_accept(accept::JSON_PROFILES)
.returning(ResponseShape::Json);

/// `POST /LiveTv/TunerHosts`
pub static ADD_TUNER_HOST: OperationDescriptor =
    OperationDescriptor::new("addTunerHost", HttpMethod::Post, "/LiveTv/TunerHosts")
        .with_body(BodySpec::Optional("tunerHostInfo"))
        .with_accept(accept::JSON_PROFILES)
        .returning(ResponseShape::Json);

/// `DELETE /LiveTv/SeriesTimers/{timerId}`
pub static CANCEL_SERIES_TIMER: OperationDescriptor = OperationDescriptor::new(
    "cancelSeriesTimer",
    HttpMethod::Delete,
    "/LiveTv/SeriesTimers/{timerId}",
);

/// `DELETE /LiveTv/Timers/{timerId}`
pub static CANCEL_TIMER: OperationDescriptor =
    OperationDescriptor::new("cancelTimer", HttpMethod::Delete, "/LiveTv/Timers/{timerId}");

/// `POST /LiveTv/SeriesTimers`
pub static CREATE_SERIES_TIMER: OperationDescriptor =
    OperationDescriptor::new("createSeriesTimer", HttpMethod::Post, "/LiveTv/SeriesTimers")
        .with_body(BodySpec::Optional("seriesTimerInfoDto"));

/// `POST /LiveTv/Timers`
pub static CREATE_TIMER: OperationDescriptor =
    OperationDescriptor::new("createTimer", HttpMethod::Post, "/LiveTv/Timers")
        .with_body(BodySpec::Optional("timerInfoDto"));

/// `DELETE /LiveTv/ListingProviders`
pub static DELETE_LISTING_PROVIDER: OperationDescriptor = OperationDescriptor::new(
    "deleteListingProvider",
    HttpMethod::Delete,
    "/LiveTv/ListingProviders",
)
.with_query(&[QueryParam::optional("id")]);

/// `DELETE /LiveTv/Recordings/{recordingId}`
pub static DELETE_RECORDING: OperationDescriptor = OperationDescriptor::new(
    "deleteRecording",
    HttpMethod::Delete,
    "/LiveTv/Recordings/{recordingId}",
)
.with_accept(accept::JSON_PROFILES);

/// `DELETE /LiveTv/TunerHosts`
pub static DELETE_TUNER_HOST: OperationDescriptor =
    OperationDescriptor::new("deleteTunerHost", HttpMethod::Delete, "/LiveTv/TunerHosts")
        .with_query(&[QueryParam::optional("id")]);

/// `GET /LiveTv/Tuners/Discover`
pub static DISCOVER_TUNERS: OperationDescriptor =
    get("discoverTuners", "/LiveTv/Tuners/Discover").with_query(&[QueryParam::optional("newDevicesOnly")]);

/// `GET /LiveTv/Tuners/Discvover`, the misspelled alias of [`DISCOVER_TUNERS`].
pub static DISCVOVER_TUNERS: OperationDescriptor = get("discvoverTuners", "/LiveTv/Tuners/Discvover")
    .with_query(&[QueryParam::optional("newDevicesOnly")])
    .deprecated();

/// `GET /LiveTv/Channels/{channelId}`
pub static GET_CHANNEL: OperationDescriptor =
    get("getChannel", "/LiveTv/Channels/{channelId}").with_query(&[QueryParam::optional("userId")]);

/// `GET /LiveTv/ChannelMappingOptions`
pub static GET_CHANNEL_MAPPING_OPTIONS: OperationDescriptor =
    get("getChannelMappingOptions", "/LiveTv/ChannelMappingOptions")
        .with_query(&[QueryParam::optional("providerId")]);

/// `GET /LiveTv/ListingProviders/Default`
pub static GET_DEFAULT_LISTING_PROVIDER: OperationDescriptor =
    get("getDefaultListingProvider", "/LiveTv/ListingProviders/Default");

/// `GET /LiveTv/Timers/Defaults`
pub static GET_DEFAULT_TIMER: OperationDescriptor =
    get("getDefaultTimer", "/LiveTv/Timers/Defaults").with_query(&[QueryParam::optional("programId")]);

/// `GET /LiveTv/GuideInfo`
pub static GET_GUIDE_INFO: OperationDescriptor = get("getGuideInfo", "/LiveTv/GuideInfo");

/// `GET /LiveTv/ListingProviders/Lineups`
pub static GET_LINEUPS: OperationDescriptor = get("getLineups", "/LiveTv/ListingProviders/Lineups")
    .with_query(&[
        QueryParam::optional("id"),
        QueryParam::optional("type"),
        QueryParam::optional("location"),
        QueryParam::optional("country"),
    ]);

/// `GET /LiveTv/LiveRecordings/{recordingId}/stream`
pub static GET_LIVE_RECORDING_FILE: OperationDescriptor = OperationDescriptor::new(
    "getLiveRecordingFile",
    HttpMethod::Get,
    "/LiveTv/LiveRecordings/{recordingId}/stream",
)
.with_accept(accept::VIDEO)
.returning(ResponseShape::File);

/// `GET /LiveTv/LiveStreamFiles/{streamId}/stream.{container}`
pub static GET_LIVE_STREAM_FILE: OperationDescriptor = OperationDescriptor::new(
    "getLiveStreamFile",
    HttpMethod::Get,
    "/LiveTv/LiveStreamFiles/{streamId}/stream.{container}",
)
.with_accept(accept::VIDEO)
.returning(ResponseShape::File);

/// `GET /LiveTv/Channels`
pub static GET_LIVE_TV_CHANNELS: OperationDescriptor = get("getLiveTvChannels", "/LiveTv/Channels")
    .with_query(&[
        QueryParam::optional("type"),
        QueryParam::optional("userId"),
        QueryParam::optional("startIndex"),
        QueryParam::optional("isMovie"),
        QueryParam::optional("isSeries"),
        QueryParam::optional("isNews"),
        QueryParam::optional("isKids"),
        QueryParam::optional("isSports"),
        QueryParam::optional("limit"),
        QueryParam::optional("isFavorite"),
        QueryParam::optional("isLiked"),
        QueryParam::optional("isDisliked"),
        QueryParam::optional("enableImages"),
        QueryParam::optional("imageTypeLimit"),
        QueryParam::optional("enableImageTypes"),
        QueryParam::optional("fields"),
        QueryParam::optional("enableUserData"),
        QueryParam::optional("sortBy"),
        QueryParam::optional("sortOrder"),
        QueryParam::optional("enableFavoriteSorting"),
        QueryParam::optional("addCurrentProgram"),
    ]);

/// `GET /LiveTv/Info`
pub static GET_LIVE_TV_INFO: OperationDescriptor = get("getLiveTvInfo", "/LiveTv/Info");

/// `GET /LiveTv/Programs`
pub static GET_LIVE_TV_PROGRAMS: OperationDescriptor = get("getLiveTvPrograms", "/LiveTv/Programs")
    .with_query(&[
        QueryParam::optional("channelIds"),
        QueryParam::optional("userId"),
        QueryParam::optional("minStartDate"),
        QueryParam::optional("hasAired"),
        QueryParam::optional("isAiring"),
        QueryParam::optional("maxStartDate"),
        QueryParam::optional("minEndDate"),
        QueryParam::optional("maxEndDate"),
        QueryParam::optional("isMovie"),
        QueryParam::optional("isSeries"),
        QueryParam::optional("isNews"),
        QueryParam::optional("isKids"),
        QueryParam::optional("isSports"),
        QueryParam::optional("startIndex"),
        QueryParam::optional("limit"),
        QueryParam::optional("sortBy"),
        QueryParam::optional("sortOrder"),
        QueryParam::optional("genres"),
        QueryParam::optional("genreIds"),
        QueryParam::optional("enableImages"),
        QueryParam::optional("imageTypeLimit"),
        QueryParam::optional("enableImageTypes"),
        QueryParam::optional("enableUserData"),
        QueryParam::optional("seriesTimerId"),
        QueryParam::optional("librarySeriesId"),
        QueryParam::optional("fields"),
        QueryParam::optional("enableTotalRecordCount"),
    ]);

/// `GET /LiveTv/Programs/{programId}`
pub static GET_PROGRAM: OperationDescriptor =
    get("getProgram", "/LiveTv/Programs/{programId}").with_query(&[QueryParam::optional("userId")]);

/// `POST /LiveTv/Programs`
pub static GET_PROGRAMS: OperationDescriptor =
    OperationDescriptor::new("getPrograms", HttpMethod::Post, "/LiveTv/Programs")
        .with_body(BodySpec::Optional("getProgramsDto"))
        .with_accept(accept::JSON_PROFILES)
        .returning(ResponseShape::Json);

/// `GET /LiveTv/Programs/Recommended`
pub static GET_RECOMMENDED_PROGRAMS: OperationDescriptor =
    get("getRecommendedPrograms", "/LiveTv/Programs/Recommended").with_query(&[
        QueryParam::optional("userId"),
        QueryParam::optional("limit"),
        QueryParam::optional("isAiring"),
        QueryParam::optional("hasAired"),
        QueryParam::optional("isSeries"),
        QueryParam::optional("isMovie"),
        QueryParam::optional("isNews"),
        QueryParam::optional("isKids"),
        QueryParam::optional("isSports"),
        QueryParam::optional("enableImages"),
        QueryParam::optional("imageTypeLimit"),
        QueryParam::optional("enableImageTypes"),
        QueryParam::optional("genreIds"),
        QueryParam::optional("fields"),
        QueryParam::optional("enableUserData"),
        QueryParam::optional("enableTotalRecordCount"),
    ]);

/// `GET /LiveTv/Recordings/{recordingId}`
pub static GET_RECORDING: OperationDescriptor =
    get("getRecording", "/LiveTv/Recordings/{recordingId}").with_query(&[QueryParam::optional("userId")]);

/// `GET /LiveTv/Recordings/Folders`
pub static GET_RECORDING_FOLDERS: OperationDescriptor =
    get("getRecordingFolders", "/LiveTv/Recordings/Folders").with_query(&[QueryParam::optional("userId")]);

/// `GET /LiveTv/Recordings/Groups/{groupId}`
pub static GET_RECORDING_GROUP: OperationDescriptor = OperationDescriptor::new(
    "getRecordingGroup",
    HttpMethod::Get,
    "/LiveTv/Recordings/Groups/{groupId}",
)
.with_accept(accept::JSON_PROFILES)
.deprecated();

/// `GET /LiveTv/Recordings/Groups`
pub static GET_RECORDING_GROUPS: OperationDescriptor = get("getRecordingGroups", "/LiveTv/Recordings/Groups")
    .with_query(&[QueryParam::optional("userId")])
    .deprecated();

/// `GET /LiveTv/Recordings`
pub static GET_RECORDINGS: OperationDescriptor = get("getRecordings", "/LiveTv/Recordings").with_query(&[
    QueryParam::optional("channelId"),
    QueryParam::optional("userId"),
    QueryParam::optional("startIndex"),
    QueryParam::optional("limit"),
    QueryParam::optional("status"),
    QueryParam::optional("isInProgress"),
    QueryParam::optional("seriesTimerId"),
    QueryParam::optional("enableImages"),
    QueryParam::optional("imageTypeLimit"),
    QueryParam::optional("enableImageTypes"),
    QueryParam::optional("fields"),
    QueryParam::optional("enableUserData"),
    QueryParam::optional("isMovie"),
    QueryParam::optional("isSeries"),
    QueryParam::optional("isKids"),
    QueryParam::optional("isSports"),
    QueryParam::optional("isNews"),
    QueryParam::optional("isLibraryItem"),
    QueryParam::optional("enableTotalRecordCount"),
]);

/// `GET /LiveTv/Recordings/Series`
pub static GET_RECORDINGS_SERIES: OperationDescriptor = get("getRecordingsSeries", "/LiveTv/Recordings/Series")
    .with_query(&[
        QueryParam::optional("channelId"),
        QueryParam::optional("userId"),
        QueryParam::optional("groupId"),
        QueryParam::optional("startIndex"),
        QueryParam::optional("limit"),
        QueryParam::optional("status"),
        QueryParam::optional("isInProgress"),
        QueryParam::optional("seriesTimerId"),
        QueryParam::optional("enableImages"),
        QueryParam::optional("imageTypeLimit"),
        QueryParam::optional("enableImageTypes"),
        QueryParam::optional("fields"),
        QueryParam::optional("enableUserData"),
        QueryParam::optional("enableTotalRecordCount"),
    ])
    .deprecated();

/// `GET /LiveTv/ListingProviders/SchedulesDirect/Countries`
pub static GET_SCHEDULES_DIRECT_COUNTRIES: OperationDescriptor = OperationDescriptor::new(
    "getSchedulesDirectCountries",
    HttpMethod::Get,
    "/LiveTv/ListingProviders/SchedulesDirect/Countries",
)
.returning(ResponseShape::File);

/// `GET /LiveTv/SeriesTimers/{timerId}`
pub static GET_SERIES_TIMER: OperationDescriptor = get("getSeriesTimer", "/LiveTv/SeriesTimers/{timerId}");

/// `GET /LiveTv/SeriesTimers`
pub static GET_SERIES_TIMERS: OperationDescriptor = get("getSeriesTimers", "/LiveTv/SeriesTimers")
    .with_query(&[QueryParam::optional("sortBy"), QueryParam::optional("sortOrder")]);

/// `GET /LiveTv/Timers/{timerId}`
pub static GET_TIMER: OperationDescriptor = get("getTimer", "/LiveTv/Timers/{timerId}");

/// `GET /LiveTv/Timers`
pub static GET_TIMERS: OperationDescriptor = get("getTimers", "/LiveTv/Timers").with_query(&[
    QueryParam::optional("channelId"),
    QueryParam::optional("seriesTimerId"),
    QueryParam::optional("isActive"),
    QueryParam::optional("isScheduled"),
]);

/// `GET /LiveTv/TunerHosts/Types`
pub static GET_TUNER_HOST_TYPES: OperationDescriptor = get("getTunerHostTypes", "/LiveTv/TunerHosts/Types");

/// `POST /LiveTv/Tuners/{tunerId}/Reset`
pub static RESET_TUNER: OperationDescriptor =
    OperationDescriptor::new("resetTuner", HttpMethod::Post, "/LiveTv/Tuners/{tunerId}/Reset");

/// `POST /LiveTv/ChannelMappings`
pub static SET_CHANNEL_MAPPING: OperationDescriptor =
    OperationDescriptor::new("setChannelMapping", HttpMethod::Post, "/LiveTv/ChannelMappings")
        .with_body(BodySpec::Required("setChannelMappingDto"))
        .with_accept(accept::JSON_PROFILES)
        .returning(ResponseShape::Json);

/// `POST /LiveTv/SeriesTimers/{timerId}`
pub static UPDATE_SERIES_TIMER: OperationDescriptor = OperationDescriptor::new(
    "updateSeriesTimer",
    HttpMethod::Post,
    "/LiveTv/SeriesTimers/{timerId}",
)
.with_body(BodySpec::Optional("seriesTimerInfoDto"));

/// `POST /LiveTv/Timers/{timerId}`
pub static UPDATE_TIMER: OperationDescriptor =
    OperationDescriptor::new("updateTimer", HttpMethod::Post, "/LiveTv/Timers/{timerId}")
        .with_body(BodySpec::Optional("timerInfoDto"));

/// Every Live TV operation.
pub static ALL: &[&OperationDescriptor] = &[
    &ADD_LISTING_PROVIDER,
    &ADD_TUNER_HOST,
    &CANCEL_SERIES_TIMER,
    &CANCEL_TIMER,
    &CREATE_SERIES_TIMER,
    &CREATE_TIMER,
    &DELETE_LISTING_PROVIDER,
    &DELETE_RECORDING,
    &DELETE_TUNER_HOST,
    &DISCOVER_TUNERS,
    &DISCVOVER_TUNERS,
    &GET_CHANNEL,
    &GET_CHANNEL_MAPPING_OPTIONS,
    &GET_DEFAULT_LISTING_PROVIDER,
    &GET_DEFAULT_TIMER,
    &GET_GUIDE_INFO,
    &GET_LINEUPS,
    &GET_LIVE_RECORDING_FILE,
    &GET_LIVE_STREAM_FILE,
    &GET_LIVE_TV_CHANNELS,
    &GET_LIVE_TV_INFO,
    &GET_LIVE_TV_PROGRAMS,
    &GET_PROGRAM,
    &GET_PROGRAMS,
    &GET_RECOMMENDED_PROGRAMS,
    &GET_RECORDING,
    &GET_RECORDING_FOLDERS,
    &GET_RECORDING_GROUP,
    &GET_RECORDING_GROUPS,
    &GET_RECORDINGS,
    &GET_RECORDINGS_SERIES,
    &GET_SCHEDULES_DIRECT_COUNTRIES,
    &GET_SERIES_TIMER,
    &GET_SERIES_TIMERS,
    &GET_TIMER,
    &GET_TIMERS,
    &GET_TUNER_HOST_TYPES,
    &RESET_TUNER,
    &SET_CHANNEL_MAPPING,
    &UPDATE_SERIES_TIMER,
    &UPDATE_TIMER,
];

/// Query of [`LiveTvApi::add_listing_provider`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddListingProviderParams {
    /// Password, as a SHA1 hex digest.
    pub pw: Option<String>,
    /// Validate the listings.
    pub validate_listings: Option<bool>,
    /// Validate the login.
    pub validate_login: Option<bool>,
}

/// Query of [`LiveTvApi::get_lineups`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct GetLineupsParams {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub provider_type: Option<String>,
    pub location: Option<String>,
    pub country: Option<String>,
}

/// Query of [`LiveTvApi::get_live_tv_channels`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct GetLiveTvChannelsParams {
    #[serde(rename = "type")]
    pub channel_type: Option<ChannelType>,
    pub user_id: Option<Uuid>,
    pub start_index: Option<i32>,
    pub is_movie: Option<bool>,
    pub is_series: Option<bool>,
    pub is_news: Option<bool>,
    pub is_kids: Option<bool>,
    pub is_sports: Option<bool>,
    pub limit: Option<i32>,
    pub is_favorite: Option<bool>,
    pub is_liked: Option<bool>,
    pub is_disliked: Option<bool>,
    pub enable_images: Option<bool>,
    pub image_type_limit: Option<i32>,
    pub enable_image_types: Option<Vec<ImageType>>,
    pub fields: Option<Vec<ItemFields>>,
    pub enable_user_data: Option<bool>,
    pub sort_by: Option<Vec<ItemSortBy>>,
    pub sort_order: Option<SortOrder>,
    pub enable_favorite_sorting: Option<bool>,
    pub add_current_program: Option<bool>,
}

/// Query of [`LiveTvApi::get_live_tv_programs`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct GetLiveTvProgramsParams {
    pub channel_ids: Option<Vec<Uuid>>,
    pub user_id: Option<Uuid>,
    pub min_start_date: Option<jiff::Timestamp>,
    pub has_aired: Option<bool>,
    pub is_airing: Option<bool>,
    pub max_start_date: Option<jiff::Timestamp>,
    pub min_end_date: Option<jiff::Timestamp>,
    pub max_end_date: Option<jiff::Timestamp>,
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
    pub image_type_limit: Option<i32>,
    pub enable_image_types: Option<Vec<ImageType>>,
    pub enable_user_data: Option<bool>,
    pub series_timer_id: Option<String>,
    pub library_series_id: Option<Uuid>,
    pub fields: Option<Vec<ItemFields>>,
    pub enable_total_record_count: Option<bool>,
}

/// Query of [`LiveTvApi::get_recommended_programs`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct GetRecommendedProgramsParams {
    pub user_id: Option<Uuid>,
    pub limit: Option<i32>,
    pub is_airing: Option<bool>,
    pub has_aired: Option<bool>,
    pub is_series: Option<bool>,
    pub is_movie: Option<bool>,
    pub is_news: Option<bool>,
    pub is_kids: Option<bool>,
    pub is_sports: Option<bool>,
    pub enable_images: Option<bool>,
    pub image_type_limit: Option<i32>,
    pub enable_image_types: Option<Vec<ImageType>>,
    pub genre_ids: Option<Vec<Uuid>>,
    pub fields: Option<Vec<ItemFields>>,
    pub enable_user_data: Option<bool>,
    pub enable_total_record_count: Option<bool>,
}

/// Query of [`LiveTvApi::get_recordings`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct GetRecordingsParams {
    pub channel_id: Option<String>,
    pub user_id: Option<Uuid>,
    pub start_index: Option<i32>,
    pub limit: Option<i32>,
    pub status: Option<RecordingStatus>,
    pub is_in_progress: Option<bool>,
    pub series_timer_id: Option<String>,
    pub enable_images: Option<bool>,
    pub image_type_limit: Option<i32>,
    pub enable_image_types: Option<Vec<ImageType>>,
    pub fields: Option<Vec<ItemFields>>,
    pub enable_user_data: Option<bool>,
    pub is_movie: Option<bool>,
    pub is_series: Option<bool>,
    pub is_kids: Option<bool>,
    pub is_sports: Option<bool>,
    pub is_news: Option<bool>,
    pub is_library_item: Option<bool>,
    pub enable_total_record_count: Option<bool>,
}

/// Query of [`LiveTvApi::get_recordings_series`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct GetRecordingsSeriesParams {
    pub channel_id: Option<String>,
    pub user_id: Option<Uuid>,
    pub group_id: Option<String>,
    pub start_index: Option<i32>,
    pub limit: Option<i32>,
    pub status: Option<RecordingStatus>,
    pub is_in_progress: Option<bool>,
    pub series_timer_id: Option<String>,
    pub enable_images: Option<bool>,
    pub image_type_limit: Option<i32>,
    pub enable_image_types: Option<Vec<ImageType>>,
    pub fields: Option<Vec<ItemFields>>,
    pub enable_user_data: Option<bool>,
    pub enable_total_record_count: Option<bool>,
}

/// Query of [`LiveTvApi::get_series_timers`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSeriesTimersParams {
    /// Sort field name.
    pub sort_by: Option<String>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
}

/// Query of [`LiveTvApi::get_timers`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct GetTimersParams {
    pub channel_id: Option<String>,
    pub series_timer_id: Option<String>,
    pub is_active: Option<bool>,
    pub is_scheduled: Option<bool>,
}

/// The Live TV operations, bound to a client.
///
/// ```rust,no_run
/// # async fn example(client: jellyfin_api::ApiClient) -> Result<(), jellyfin_api::ApiClientError> {
/// let timer = client.live_tv().get_timer("abc")?.await?.into_data();
/// client.live_tv().cancel_timer("abc")?.await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LiveTvApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// The Live TV operations.
    pub fn live_tv(&self) -> LiveTvApi<'_> {
        LiveTvApi { client: self }
    }
}

/// Every method returns an [`ApiCall`] to await, after optional per-call settings.
///
/// # Errors
///
/// The methods fail with [`ApiClientError::SerializationFailure`] when an argument cannot
/// be serialized.
#[allow(clippy::missing_errors_doc)]
impl LiveTvApi<'_> {
    /// Adds a guide data provider.
    pub fn add_listing_provider(
        &self,
        params: &AddListingProviderParams,
        provider: Option<&ListingsProviderInfo>,
    ) -> Result<ApiCall<ListingsProviderInfo>, ApiClientError> {
        self.client
            .json_call(&ADD_LISTING_PROVIDER)?
            .with_params(params)?
            .with_optional_body(provider)
    }

    /// Adds a tuner host.
    pub fn add_tuner_host(
        &self,
        tuner_host: Option<&TunerHostInfo>,
    ) -> Result<ApiCall<TunerHostInfo>, ApiClientError> {
        self.client
            .json_call(&ADD_TUNER_HOST)?
            .with_optional_body(tuner_host)
    }

    /// Cancels a series timer.
    pub fn cancel_series_timer(&self, timer_id: &str) -> Result<ApiCall<()>, ApiClientError> {
        self.client
            .empty_call(&CANCEL_SERIES_TIMER)?
            .with_param("timerId", timer_id)
    }

    /// Cancels a timer.
    pub fn cancel_timer(&self, timer_id: &str) -> Result<ApiCall<()>, ApiClientError> {
        self.client
            .empty_call(&CANCEL_TIMER)?
            .with_param("timerId", timer_id)
    }

    /// Creates a series timer.
    pub fn create_series_timer(
        &self,
        series_timer: Option<&SeriesTimerInfoDto>,
    ) -> Result<ApiCall<()>, ApiClientError> {
        self.client
            .empty_call(&CREATE_SERIES_TIMER)?
            .with_optional_body(series_timer)
    }

    /// Creates a timer.
    pub fn create_timer(&self, timer: Option<&TimerInfoDto>) -> Result<ApiCall<()>, ApiClientError> {
        self.client.empty_call(&CREATE_TIMER)?.with_optional_body(timer)
    }

    /// Deletes a guide data provider.
    pub fn delete_listing_provider(&self, id: Option<&str>) -> Result<ApiCall<()>, ApiClientError> {
        self.client
            .empty_call(&DELETE_LISTING_PROVIDER)?
            .with_param("id", id)
    }

    /// Deletes a recording.
    pub fn delete_recording(&self, recording_id: Uuid) -> Result<ApiCall<()>, ApiClientError> {
        self.client
            .empty_call(&DELETE_RECORDING)?
            .with_param("recordingId", recording_id)
    }

    /// Deletes a tuner host.
    pub fn delete_tuner_host(&self, id: Option<&str>) -> Result<ApiCall<()>, ApiClientError> {
        self.client.empty_call(&DELETE_TUNER_HOST)?.with_param("id", id)
    }

    /// Discovers tuners on the network.
    pub fn discover_tuners(
        &self,
        new_devices_only: Option<bool>,
    ) -> Result<ApiCall<Vec<TunerHostInfo>>, ApiClientError> {
        self.client
            .json_call(&DISCOVER_TUNERS)?
            .with_param("newDevicesOnly", new_devices_only)
    }

    /// Discovers tuners through the misspelled route kept by older servers.
    #[deprecated(note = "use `discover_tuners`")]
    pub fn discvover_tuners(
        &self,
        new_devices_only: Option<bool>,
    ) -> Result<ApiCall<Vec<TunerHostInfo>>, ApiClientError> {
        self.client
            .json_call(&DISCVOVER_TUNERS)?
            .with_param("newDevicesOnly", new_devices_only)
    }

    /// Gets a channel.
    pub fn get_channel(
        &self,
        channel_id: Uuid,
        user_id: Option<Uuid>,
    ) -> Result<ApiCall<BaseItemDto>, ApiClientError> {
        self.client
            .json_call(&GET_CHANNEL)?
            .with_param("channelId", channel_id)?
            .with_param("userId", user_id)
    }

    /// Gets the tuner and provider channels available for mapping.
    pub fn get_channel_mapping_options(
        &self,
        provider_id: Option<&str>,
    ) -> Result<ApiCall<ChannelMappingOptionsDto>, ApiClientError> {
        self.client
            .json_call(&GET_CHANNEL_MAPPING_OPTIONS)?
            .with_param("providerId", provider_id)
    }

    /// Gets the default guide data provider.
    pub fn get_default_listing_provider(&self) -> Result<ApiCall<ListingsProviderInfo>, ApiClientError> {
        self.client.json_call(&GET_DEFAULT_LISTING_PROVIDER)
    }

    /// Gets the default values of a new timer, optionally for a program.
    pub fn get_default_timer(
        &self,
        program_id: Option<&str>,
    ) -> Result<ApiCall<SeriesTimerInfoDto>, ApiClientError> {
        self.client
            .json_call(&GET_DEFAULT_TIMER)?
            .with_param("programId", program_id)
    }

    /// Gets the guide time span.
    pub fn get_guide_info(&self) -> Result<ApiCall<GuideInfo>, ApiClientError> {
        self.client.json_call(&GET_GUIDE_INFO)
    }

    /// Gets the available lineups of a provider.
    pub fn get_lineups(&self, params: &GetLineupsParams) -> Result<ApiCall<Vec<NameIdPair>>, ApiClientError> {
        self.client.json_call(&GET_LINEUPS)?.with_params(params)
    }

    /// Downloads an in-progress recording.
    pub fn get_live_recording_file(
        &self,
        recording_id: &str,
    ) -> Result<ApiCall<DownloadedFile>, ApiClientError> {
        self.client
            .file_call(&GET_LIVE_RECORDING_FILE)?
            .with_param("recordingId", recording_id)
    }

    /// Downloads a live stream file.
    pub fn get_live_stream_file(
        &self,
        stream_id: &str,
        container: &str,
    ) -> Result<ApiCall<DownloadedFile>, ApiClientError> {
        self.client
            .file_call(&GET_LIVE_STREAM_FILE)?
            .with_param("streamId", stream_id)?
            .with_param("container", container)
    }

    /// Lists the channels.
    pub fn get_live_tv_channels(
        &self,
        params: &GetLiveTvChannelsParams,
    ) -> Result<ApiCall<BaseItemDtoQueryResult>, ApiClientError> {
        self.client.json_call(&GET_LIVE_TV_CHANNELS)?.with_params(params)
    }

    /// Gets the Live TV services state.
    pub fn get_live_tv_info(&self) -> Result<ApiCall<LiveTvInfo>, ApiClientError> {
        self.client.json_call(&GET_LIVE_TV_INFO)
    }

    /// Searches the guide programs.
    pub fn get_live_tv_programs(
        &self,
        params: &GetLiveTvProgramsParams,
    ) -> Result<ApiCall<BaseItemDtoQueryResult>, ApiClientError> {
        self.client.json_call(&GET_LIVE_TV_PROGRAMS)?.with_params(params)
    }

    /// Gets a program.
    pub fn get_program(
        &self,
        program_id: &str,
        user_id: Option<Uuid>,
    ) -> Result<ApiCall<BaseItemDto>, ApiClientError> {
        self.client
            .json_call(&GET_PROGRAM)?
            .with_param("programId", program_id)?
            .with_param("userId", user_id)
    }

    /// Searches the guide programs, with the filters in the body.
    pub fn get_programs(
        &self,
        filters: Option<&GetProgramsDto>,
    ) -> Result<ApiCall<BaseItemDtoQueryResult>, ApiClientError> {
        self.client.json_call(&GET_PROGRAMS)?.with_optional_body(filters)
    }

    /// Gets the recommended programs.
    pub fn get_recommended_programs(
        &self,
        params: &GetRecommendedProgramsParams,
    ) -> Result<ApiCall<BaseItemDtoQueryResult>, ApiClientError> {
        self.client
            .json_call(&GET_RECOMMENDED_PROGRAMS)?
            .with_params(params)
    }

    /// Gets a recording.
    pub fn get_recording(
        &self,
        recording_id: Uuid,
        user_id: Option<Uuid>,
    ) -> Result<ApiCall<BaseItemDto>, ApiClientError> {
        self.client
            .json_call(&GET_RECORDING)?
            .with_param("recordingId", recording_id)?
            .with_param("userId", user_id)
    }

    /// Lists the recording folders.
    pub fn get_recording_folders(
        &self,
        user_id: Option<Uuid>,
    ) -> Result<ApiCall<BaseItemDtoQueryResult>, ApiClientError> {
        self.client
            .json_call(&GET_RECORDING_FOLDERS)?
            .with_param("userId", user_id)
    }

    /// Gets a recording group. The server answers without data.
    #[deprecated(note = "recording groups are obsolete")]
    pub fn get_recording_group(&self, group_id: Uuid) -> Result<ApiCall<()>, ApiClientError> {
        self.client
            .empty_call(&GET_RECORDING_GROUP)?
            .with_param("groupId", group_id)
    }

    /// Lists the recording groups.
    #[deprecated(note = "recording groups are obsolete")]
    pub fn get_recording_groups(
        &self,
        user_id: Option<Uuid>,
    ) -> Result<ApiCall<BaseItemDtoQueryResult>, ApiClientError> {
        self.client
            .json_call(&GET_RECORDING_GROUPS)?
            .with_param("userId", user_id)
    }

    /// Lists the recordings.
    pub fn get_recordings(
        &self,
        params: &GetRecordingsParams,
    ) -> Result<ApiCall<BaseItemDtoQueryResult>, ApiClientError> {
        self.client.json_call(&GET_RECORDINGS)?.with_params(params)
    }

    /// Lists the recorded series.
    #[deprecated(note = "recording series are obsolete")]
    pub fn get_recordings_series(
        &self,
        params: &GetRecordingsSeriesParams,
    ) -> Result<ApiCall<BaseItemDtoQueryResult>, ApiClientError> {
        self.client.json_call(&GET_RECORDINGS_SERIES)?.with_params(params)
    }

    /// Downloads the Schedules Direct country list.
    pub fn get_schedules_direct_countries(&self) -> Result<ApiCall<DownloadedFile>, ApiClientError> {
        self.client.file_call(&GET_SCHEDULES_DIRECT_COUNTRIES)
    }

    /// Gets a series timer.
    pub fn get_series_timer(&self, timer_id: &str) -> Result<ApiCall<SeriesTimerInfoDto>, ApiClientError> {
        self.client
            .json_call(&GET_SERIES_TIMER)?
            .with_param("timerId", timer_id)
    }

    /// Lists the series timers.
    pub fn get_series_timers(
        &self,
        params: &GetSeriesTimersParams,
    ) -> Result<ApiCall<SeriesTimerInfoDtoQueryResult>, ApiClientError> {
        self.client.json_call(&GET_SERIES_TIMERS)?.with_params(params)
    }

    /// Gets a timer.
    pub fn get_timer(&self, timer_id: &str) -> Result<ApiCall<TimerInfoDto>, ApiClientError> {
        self.client.json_call(&GET_TIMER)?.with_param("timerId", timer_id)
    }

    /// Lists the timers.
    pub fn get_timers(
        &self,
        params: &GetTimersParams,
    ) -> Result<ApiCall<TimerInfoDtoQueryResult>, ApiClientError> {
        self.client.json_call(&GET_TIMERS)?.with_params(params)
    }

    /// Lists the supported tuner host types.
    pub fn get_tuner_host_types(&self) -> Result<ApiCall<Vec<NameIdPair>>, ApiClientError> {
        self.client.json_call(&GET_TUNER_HOST_TYPES)
    }

    /// Resets a tuner.
    pub fn reset_tuner(&self, tuner_id: &str) -> Result<ApiCall<()>, ApiClientError> {
        self.client
            .empty_call(&RESET_TUNER)?
            .with_param("tunerId", tuner_id)
    }

    /// Maps a tuner channel to a provider channel.
    pub fn set_channel_mapping(
        &self,
        mapping: &SetChannelMappingDto,
    ) -> Result<ApiCall<TunerChannelMapping>, ApiClientError> {
        self.client.json_call(&SET_CHANNEL_MAPPING)?.with_body(mapping)
    }

    /// Updates a series timer.
    pub fn update_series_timer(
        &self,
        timer_id: &str,
        series_timer: Option<&SeriesTimerInfoDto>,
    ) -> Result<ApiCall<()>, ApiClientError> {
        self.client
            .empty_call(&UPDATE_SERIES_TIMER)?
            .with_param("timerId", timer_id)?
            .with_optional_body(series_timer)
    }

    /// Updates a timer.
    pub fn update_timer(
        &self,
        timer_id: &str,
        timer: Option<&TimerInfoDto>,
    ) -> Result<ApiCall<()>, ApiClientError> {
        self.client
            .empty_call(&UPDATE_TIMER)?
            .with_param("timerId", timer_id)?
            .with_optional_body(timer)
    }
}
