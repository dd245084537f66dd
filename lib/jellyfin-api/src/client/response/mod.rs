//! Response Interpreter: status classification, JSON decoding and downloads.

mod download;
pub use self::download::DownloadedFile;

mod interpret;
pub(in crate::client) use self::interpret::{
    Payload, decode_empty, decode_file, decode_json, interpret,
};

mod result;
pub use self::result::ApiResult;
