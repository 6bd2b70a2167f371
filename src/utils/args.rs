// ABOUTME: Typed accessors over the raw JSON argument object of a tool call
// ABOUTME: Distinguishes absent keys from keys present with empty or null values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tool arguments stay a raw `serde_json::Value` object so handlers can tell
//! "key absent" apart from "key present but empty". These helpers keep that
//! distinction explicit at every call site.

use serde_json::Value;

use crate::errors::ToolError;

/// Value under `key` when the key is present, including explicit `null`
#[must_use]
pub fn field<'a>(args: &'a Value, key: &str) -> Option<&'a Value> {
    args.as_object().and_then(|object| object.get(key))
}

/// Whether `key` appears in the argument object at all
#[must_use]
pub fn has_field(args: &Value, key: &str) -> bool {
    field(args, key).is_some()
}

/// Non-empty string under `key`; empty strings, `null` and other types yield `None`
#[must_use]
pub fn non_empty_str<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    field(args, key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

/// `true` only when `key` holds the JSON literal `true`
#[must_use]
pub fn is_true(args: &Value, key: &str) -> bool {
    matches!(field(args, key), Some(Value::Bool(true)))
}

/// Partial-update view of a string field.
///
/// - `Ok(None)`: key absent, leave the stored value alone
/// - `Ok(Some(None))`: key present as `null`, clear the stored value
/// - `Ok(Some(Some(text)))`: key present as a string (possibly empty)
///
/// # Errors
///
/// Returns `ToolError::InvalidParameter` when the key holds a non-string value
pub fn string_update(
    tool_name: &str,
    args: &Value,
    key: &str,
) -> Result<Option<Option<String>>, ToolError> {
    match field(args, key) {
        None => Ok(None),
        Some(Value::Null) => Ok(Some(None)),
        Some(Value::String(text)) => Ok(Some(Some(text.clone()))),
        Some(other) => Err(ToolError::invalid_parameter(
            tool_name,
            key,
            format!("must be a string, got {}", json_type_name(other)),
        )),
    }
}

/// JSON type name used in parameter error messages
#[must_use]
pub const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
