use serde_json::{Map, Value};

use super::param::{ParamStyle, encode_value, value_to_string};
use crate::client::descriptor::OperationDescriptor;
use crate::client::error::ApiClientError;

/// Substitutes every `{name}` placeholder of the descriptor path with the encoded argument.
///
/// The same placeholder may appear several times. Collections are joined with commas.
///
/// # Errors
///
/// - [`ApiClientError::MissingParameter`] when a placeholder has no argument or a `null` one,
/// - [`ApiClientError::UnsupportedParameterValue`] for object values, and for `.` or `..`
///   which URL normalization would turn into another path.
pub(in crate::client) fn resolve_path(
    descriptor: &OperationDescriptor,
    args: &Map<String, Value>,
) -> Result<String, ApiClientError> {
    let operation_id = descriptor.operation_id;
    let placeholder = OperationDescriptor::placeholder();

    let mut resolved = String::with_capacity(descriptor.path.len());
    let mut last = 0;
    for captures in placeholder.captures_iter(descriptor.path) {
        let (Some(whole), Some(name)) = (captures.get(0), captures.name("name")) else {
            continue;
        };
        let name = name.as_str();
        let value = args.get(name).unwrap_or(&Value::Null);
        let value = value_to_string(value, ParamStyle::Simple)
            .map_err(|err| ApiClientError::UnsupportedParameterValue {
                operation_id,
                parameter: name.to_string(),
                value: err.0,
            })?
            .ok_or(ApiClientError::MissingParameter {
                operation_id,
                parameter: name,
            })?;
        if matches!(value.as_str(), "." | "..") {
            return Err(ApiClientError::UnsupportedParameterValue {
                operation_id,
                parameter: name.to_string(),
                value: Value::String(value),
            });
        }

        resolved.push_str(&descriptor.path[last..whole.start()]);
        resolved.push_str(&encode_value(&value));
        last = whole.end();
    }
    resolved.push_str(&descriptor.path[last..]);

    Ok(resolved)
}
