//! Static description of a remote operation.
//!
//! Every endpoint is described once by an [`OperationDescriptor`] stored in a `static`.
//! The call engine reads nothing else: the descriptor decides where each argument goes,
//! which parameters are required, the `Accept` header and how the response is interpreted.

use std::sync::LazyLock;

use http::Method;
use regex::Regex;

use super::parameters::ParamStyle;

/// `Accept` header values used by the media server endpoints.
pub mod accept {
    /// Plain JSON.
    pub const JSON: &str = "application/json";

    /// JSON with the casing profiles the server understands.
    pub const JSON_PROFILES: &str = "application/json, application/json; profile=CamelCase, application/json; profile=PascalCase";

    /// A video stream, or a JSON error document.
    pub const VIDEO: &str = "video/*, application/json, application/json; profile=CamelCase, application/json; profile=PascalCase";

    /// An audio stream, or a JSON error document.
    pub const AUDIO: &str = "audio/*, application/json, application/json; profile=CamelCase, application/json; profile=PascalCase";
}

/// Regular expression for matching path placeholders in the format `{param_name}`.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>\w+)}").expect("a valid regex"));

/// HTTP methods used by the described operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HttpMethod {
    /// `GET`
    #[display("GET")]
    Get,
    /// `POST`
    #[display("POST")]
    Post,
    /// `DELETE`
    #[display("DELETE")]
    Delete,
    /// `HEAD`
    #[display("HEAD")]
    Head,
}

impl HttpMethod {
    /// Converts to the `http` crate method.
    pub fn as_method(self) -> Method {
        match self {
            Self::Get => Method::GET,
            Self::Post => Method::POST,
            Self::Delete => Method::DELETE,
            Self::Head => Method::HEAD,
        }
    }
}

/// How a successful response is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ResponseShape {
    /// No payload: the body is drained and discarded.
    #[display("empty")]
    Empty,
    /// A JSON document decoded into a typed value. A blank body yields no data.
    #[display("JSON")]
    Json,
    /// A binary stream written to a caller-owned temporary file.
    #[display("file")]
    File,
}

/// Whether an operation takes a JSON request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySpec {
    /// No request body.
    None,
    /// An optional body; the name is the generated parameter name.
    Optional(&'static str),
    /// A body that must be supplied.
    Required(&'static str),
}

/// A declared query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParam {
    /// The wire name, never encoded.
    pub name: &'static str,
    /// Whether the call fails without it.
    pub required: bool,
    /// How collection values are laid out.
    pub style: ParamStyle,
}

impl QueryParam {
    /// An optional parameter; collections are sent with repeated keys.
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            style: ParamStyle::Form,
        }
    }

    /// A required parameter.
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            style: ParamStyle::Form,
        }
    }

    /// Changes the collection style.
    pub const fn with_style(mut self, style: ParamStyle) -> Self {
        self.style = style;
        self
    }
}

/// Immutable description of one endpoint.
///
/// ```rust
/// use jellyfin_api::{HttpMethod, OperationDescriptor, QueryParam, ResponseShape, accept};
///
/// static GET_ITEM: OperationDescriptor =
///     OperationDescriptor::new("getItem", HttpMethod::Get, "/Items/{itemId}")
///         .with_query(&[QueryParam::optional("userId")])
///         .with_accept(accept::JSON_PROFILES)
///         .returning(ResponseShape::Json);
///
/// assert_eq!(GET_ITEM.path_params().collect::<Vec<_>>(), ["itemId"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Identifier used in errors and logs.
    pub operation_id: &'static str,
    /// The HTTP method.
    pub method: HttpMethod,
    /// The path template, relative to the client base URL, with `{name}` placeholders.
    pub path: &'static str,
    /// The declared query parameters, in wire order.
    pub query: &'static [QueryParam],
    /// The request body.
    pub body: BodySpec,
    /// The `Accept` header value.
    pub accept: &'static str,
    /// How a 2xx response is interpreted.
    pub response: ResponseShape,
    /// Whether the server flags the operation as deprecated.
    pub deprecated: bool,
}

impl OperationDescriptor {
    /// Creates a descriptor without parameters, body or payload.
    pub const fn new(operation_id: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self {
            operation_id,
            method,
            path,
            query: &[],
            body: BodySpec::None,
            accept: accept::JSON,
            response: ResponseShape::Empty,
            deprecated: false,
        }
    }

    /// Declares the query parameters.
    pub const fn with_query(mut self, query: &'static [QueryParam]) -> Self {
        self.query = query;
        self
    }

    /// Declares the request body.
    pub const fn with_body(mut self, body: BodySpec) -> Self {
        self.body = body;
        self
    }

    /// Sets the `Accept` header.
    pub const fn with_accept(mut self, accept: &'static str) -> Self {
        self.accept = accept;
        self
    }

    /// Sets the response shape.
    pub const fn returning(mut self, response: ResponseShape) -> Self {
        self.response = response;
        self
    }

    /// Flags the operation as deprecated.
    pub const fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Path parameter names, in template order. Path parameters are always required.
    pub fn path_params(&self) -> impl Iterator<Item = &'static str> {
        PLACEHOLDER
            .captures_iter(self.path)
            .filter_map(|captures| captures.name("name"))
            .map(|name| name.as_str())
    }

    /// Whether the parameter name is declared in the path or the query.
    pub fn declares(&self, name: &str) -> bool {
        self.path_params().any(|param| param == name)
            || self.query.iter().any(|param| param.name == name)
    }

    pub(in crate::client) fn placeholder() -> &'static Regex {
        &PLACEHOLDER
    }
}
