//! Fallible field projection out of generic JSON responses
//!
//! Every remote call returns an untyped `serde_json::Value`. The typed
//! operations project single fields out of it with these helpers instead
//! of indexing and asserting. A key that is absent and a key that holds
//! the wrong type both yield [`ApiError::Extraction`]; nothing here can
//! panic on a malformed body.

use serde_json::Value;

use super::ApiError;

/// Project a string field out of a response object
pub fn str_field<'a>(value: &'a Value, field: &'static str) -> Result<&'a str, ApiError> {
    value
        .get(field)
        .and_then(Value::as_str)
        .ok_or(ApiError::Extraction { field, expected: "string" })
}

/// Project an array field out of a response object
pub fn array_field<'a>(value: &'a Value, field: &'static str) -> Result<&'a [Value], ApiError> {
    value
        .get(field)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or(ApiError::Extraction { field, expected: "array" })
}
