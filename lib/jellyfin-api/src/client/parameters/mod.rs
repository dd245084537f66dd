//! Parameter Encoder: request parameters for building API calls.
//!
//! - [`encode_query_param`] - typed values to ordered, URL-encoded query pairs
//! - path substitution of `{name}` placeholders
//! - [`CallHeaders`] - extra HTTP headers
//! - [`CallBody`] - JSON request body
//!
//! Values arrive as `serde_json` values: strings are used raw, numbers and booleans
//! through their JSON text, date-times and UUIDs through their serde string form, and
//! enums through their wire name.

mod param;
pub use self::param::{ParamStyle, QueryPair, UnsupportedValue, encode_query_param, encode_value};

mod path;
pub(in crate::client) use self::path::resolve_path;

mod query;
pub(in crate::client) use self::query::{query_pairs, to_query_string};

mod headers;
pub use self::headers::CallHeaders;

mod body;
pub use self::body::CallBody;
