use serde_json::{Map, Value};

use super::param::{QueryPair, encode_query_param};
use crate::client::descriptor::OperationDescriptor;
use crate::client::error::ApiClientError;

/// Builds the query pairs of a call, in descriptor order.
///
/// Undeclared arguments are not sent.
///
/// # Errors
///
/// - [`ApiClientError::MissingParameter`] when a required parameter is absent or `null`,
/// - [`ApiClientError::UnsupportedParameterValue`] for values without a string form.
pub(in crate::client) fn query_pairs(
    descriptor: &OperationDescriptor,
    args: &Map<String, Value>,
) -> Result<Vec<QueryPair>, ApiClientError> {
    let operation_id = descriptor.operation_id;
    let mut result = Vec::new();

    for param in descriptor.query {
        let value = args.get(param.name).unwrap_or(&Value::Null);
        if param.required && value.is_null() {
            return Err(ApiClientError::MissingParameter {
                operation_id,
                parameter: param.name,
            });
        }

        let pairs = encode_query_param(param.name, value, param.style).map_err(|err| {
            ApiClientError::UnsupportedParameterValue {
                operation_id,
                parameter: param.name.to_string(),
                value: err.0,
            }
        })?;
        result.extend(pairs);
    }

    Ok(result)
}

/// Joins encoded pairs into a query string, `None` when there is nothing to send.
pub(in crate::client) fn to_query_string(pairs: &[QueryPair]) -> Option<String> {
    if pairs.is_empty() {
        return None;
    }

    let query = pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    Some(query)
}
