//! The described operations, grouped as the server groups them.
//!
//! Each group module holds the `static` [`OperationDescriptor`]s, the typed parameter
//! structs, and the group handle returned by [`ApiClient`](crate::ApiClient).

use crate::client::OperationDescriptor;

pub mod live_tv;
pub use self::live_tv::LiveTvApi;

pub mod sync_play;
pub use self::sync_play::SyncPlayApi;

pub mod universal_audio;
pub use self::universal_audio::UniversalAudioApi;

/// Every described operation.
pub fn all() -> impl Iterator<Item = &'static OperationDescriptor> {
    live_tv::ALL
        .iter()
        .chain(sync_play::ALL)
        .chain(universal_audio::ALL)
        .copied()
}
