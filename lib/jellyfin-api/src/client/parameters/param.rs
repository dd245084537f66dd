use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;

/// Characters kept verbatim when encoding a parameter value.
///
/// Everything but ASCII alphanumerics and `.`, `-`, `*`, `_` is percent-encoded,
/// so a space becomes `%20` rather than `+`.
const VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'.')
    .remove(b'-')
    .remove(b'*')
    .remove(b'_');

/// Layout of a collection parameter.
///
/// Scalar values ignore the style and always produce a single pair.
///
/// # Examples
///
/// ```rust
/// use jellyfin_api::{ParamStyle, encode_query_param};
/// use serde_json::json;
///
/// let fields = json!(["Name", "Overview", "Genres"]);
///
/// // Form style (default) - collections repeat the key: fields=Name&fields=Overview&fields=Genres
/// let pairs = encode_query_param("fields", &fields, ParamStyle::Form)?;
/// assert_eq!(pairs.len(), 3);
///
/// // Pipe delimited - one pair: fields=Name%7COverview%7CGenres
/// let pairs = encode_query_param("fields", &fields, ParamStyle::PipeDelimited)?;
/// assert_eq!(pairs, [("fields".to_string(), "Name%7COverview%7CGenres".to_string())]);
/// # Ok::<(), jellyfin_api::UnsupportedValue>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamStyle {
    /// Form style: `param=value1&param=value2` (the "multi" collection format)
    #[default]
    Form,
    /// Simple style: `param=value1,value2`
    Simple,
    /// Space delimited: `param=value1%20value2`
    SpaceDelimited,
    /// Pipe delimited: `param=value1%7Cvalue2`
    PipeDelimited,
}

impl ParamStyle {
    fn delimiter(self) -> Option<&'static str> {
        match self {
            Self::Form => None,
            Self::Simple => Some(","),
            Self::SpaceDelimited => Some(" "),
            Self::PipeDelimited => Some("|"),
        }
    }
}

/// A value that has no string form: an object, or an array nested in a collection.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
#[display("unsupported parameter value: {_0}")]
pub struct UnsupportedValue(#[error(not(source))] pub Value);

/// One `name=value` query pair; the value is already percent-encoded.
pub type QueryPair = (String, String);

/// Percent-encodes a parameter value.
///
/// ```rust
/// assert_eq!(jellyfin_api::encode_value("a b/c"), "a%20b%2Fc");
/// assert_eq!(jellyfin_api::encode_value("stream.ts"), "stream.ts");
/// ```
pub fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, VALUE_ENCODE_SET).to_string()
}

/// Converts a scalar JSON value to its raw string form.
///
/// Returns `Ok(None)` for `null`, which means "no value".
pub(in crate::client) fn scalar_to_string(value: &Value) -> Result<Option<String>, UnsupportedValue> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text.clone())),
        Value::Number(number) => Ok(Some(number.to_string())),
        Value::Bool(flag) => Ok(Some(flag.to_string())),
        Value::Array(_) | Value::Object(_) => Err(UnsupportedValue(value.clone())),
    }
}

/// Converts array items to raw strings, skipping `null` items.
fn items_to_strings(items: &[Value]) -> Result<Vec<String>, UnsupportedValue> {
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        if let Some(text) = scalar_to_string(item)? {
            result.push(text);
        }
    }
    Ok(result)
}

/// Joins a value into a single raw string, using the style delimiter for collections.
///
/// Form style has no delimiter of its own and falls back to commas, as path segments
/// cannot repeat.
pub(in crate::client) fn value_to_string(
    value: &Value,
    style: ParamStyle,
) -> Result<Option<String>, UnsupportedValue> {
    match value {
        Value::Array(items) => {
            let items = items_to_strings(items)?;
            let delimiter = style.delimiter().unwrap_or(",");
            Ok(Some(items.join(delimiter)))
        }
        other => scalar_to_string(other),
    }
}

/// Encodes one query parameter into ordered `(name, encoded value)` pairs.
///
/// - `null` yields no pair,
/// - a scalar yields one pair,
/// - a collection in [`ParamStyle::Form`] yields one pair per element, in order
///   (an empty collection yields none),
/// - a collection in a delimited style yields one pair with the joined elements.
///
/// The name is used as is.
///
/// # Errors
///
/// Objects and arrays nested in a collection are rejected with [`UnsupportedValue`].
pub fn encode_query_param(
    name: &str,
    value: &Value,
    style: ParamStyle,
) -> Result<Vec<QueryPair>, UnsupportedValue> {
    let pairs = match (value, style.delimiter()) {
        (Value::Array(items), None) => items_to_strings(items)?
            .into_iter()
            .map(|item| (name.to_string(), encode_value(&item)))
            .collect(),
        (Value::Array(items), Some(_)) if items.is_empty() => Vec::new(),
        _ => value_to_string(value, style)?
            .map(|text| vec![(name.to_string(), encode_value(&text))])
            .unwrap_or_default(),
    };
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn pairs(name: &str, value: Value, style: ParamStyle) -> Vec<QueryPair> {
        encode_query_param(name, &value, style).expect("should encode")
    }

    #[test]
    fn test_null_yields_no_pair() {
        assert!(pairs("userId", Value::Null, ParamStyle::Form).is_empty());
    }

    #[rstest]
    #[case::string(json!("Name"), "Name")]
    #[case::number(json!(42), "42")]
    #[case::negative(json!(-7), "-7")]
    #[case::boolean(json!(true), "true")]
    #[case::space(json!("machine learning"), "machine%20learning")]
    #[case::reserved(json!("a&b=c"), "a%26b%3Dc")]
    #[case::unreserved(json!("file-name_v1.0*"), "file-name_v1.0*")]
    #[case::unicode(json!("café"), "caf%C3%A9")]
    fn test_scalar_yields_one_encoded_pair(#[case] value: Value, #[case] expected: &str) {
        let result = pairs("q", value, ParamStyle::Form);

        assert_eq!(result, [("q".to_string(), expected.to_string())]);
    }

    #[test]
    fn test_form_collection_repeats_key_in_order() {
        let result = pairs(
            "fields",
            json!(["Name", "Overview", "Genres"]),
            ParamStyle::Form,
        );

        insta::assert_debug_snapshot!(result, @r#"
        [
            (
                "fields",
                "Name",
            ),
            (
                "fields",
                "Overview",
            ),
            (
                "fields",
                "Genres",
            ),
        ]
        "#);
    }

    #[test]
    fn test_empty_collection_yields_no_pair() {
        assert!(pairs("fields", json!([]), ParamStyle::Form).is_empty());
        assert!(pairs("fields", json!([]), ParamStyle::Simple).is_empty());
    }

    #[rstest]
    #[case::simple(ParamStyle::Simple, "a%2Cb%2Cc")]
    #[case::space(ParamStyle::SpaceDelimited, "a%20b%20c")]
    #[case::pipe(ParamStyle::PipeDelimited, "a%7Cb%7Cc")]
    fn test_delimited_collection_yields_one_pair(#[case] style: ParamStyle, #[case] expected: &str) {
        let result = pairs("tags", json!(["a", "b", "c"]), style);

        assert_eq!(result, [("tags".to_string(), expected.to_string())]);
    }

    #[test]
    fn test_null_items_are_skipped() {
        let result = pairs("ids", json!(["a", null, "b"]), ParamStyle::Form);

        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_object_is_rejected() {
        let error = encode_query_param("filter", &json!({"a": 1}), ParamStyle::Form)
            .expect_err("objects are not supported");

        insta::assert_snapshot!(error, @r#"unsupported parameter value: {"a":1}"#);
    }

    #[test]
    fn test_nested_array_is_rejected() {
        let result = encode_query_param("ids", &json!([["a"], ["b"]]), ParamStyle::Form);

        assert!(result.is_err());
    }

    #[test]
    fn test_value_to_string_form_falls_back_to_comma() {
        let value = value_to_string(&json!(["rust", "web"]), ParamStyle::Form).expect("should join");

        assert_eq!(value.as_deref(), Some("rust,web"));
    }
}
