// ABOUTME: Input validators for tool arguments returning a field-specific verdict
// ABOUTME: Date, hex color and required-string checks plus per-tool composites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Input Validation
//!
//! Validators inspect raw JSON argument values before any collaborator call is
//! made. Each returns a [`Verdict`]: `Ok(())` or a [`ValidationError`] whose
//! message names the offending field. Composite validators short-circuit on
//! the first failing check, in a fixed order.
//!
//! A value counts as *missing* when it is absent, `null`, `false`, `0`, or the
//! empty string.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::errors::{AppError, ErrorCode};
use crate::utils::args::field;
use crate::utils::dates::parse_date;

static HEX_COLOR_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").ok());

/// Field-naming validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Create a validation error with a user-facing message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// User-facing message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        Self::new(ErrorCode::InvalidInput, error.message)
    }
}

/// Outcome of a validator
pub type Verdict = Result<(), ValidationError>;

/// Whether a raw argument value counts as not provided
#[must_use]
pub fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n.abs() < f64::EPSILON),
        Some(Value::Array(_) | Value::Object(_) | Value::Bool(true)) => false,
    }
}

/// Validate a required `YYYY-MM-DD` date.
///
/// # Errors
///
/// `Date is required`, `Date must be a string`, or
/// `Invalid date format. Use YYYY-MM-DD`
pub fn validate_date(value: Option<&Value>) -> Verdict {
    if is_missing(value) {
        return Err(ValidationError::new("Date is required"));
    }

    let Some(text) = value.and_then(Value::as_str) else {
        return Err(ValidationError::new("Date must be a string"));
    };

    if parse_date(text).is_none() {
        return Err(ValidationError::new("Invalid date format. Use YYYY-MM-DD"));
    }

    Ok(())
}

/// Validate an optional `#RRGGBB` color (case-insensitive).
///
/// # Errors
///
/// `Hex color must be a string` or `Invalid hex color. Use #RRGGBB format`
pub fn validate_hex_color(value: Option<&Value>) -> Verdict {
    if is_missing(value) {
        return Ok(());
    }

    let Some(text) = value.and_then(Value::as_str) else {
        return Err(ValidationError::new("Hex color must be a string"));
    };

    let matches = HEX_COLOR_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(text));
    if !matches {
        return Err(ValidationError::new(
            "Invalid hex color. Use #RRGGBB format",
        ));
    }

    Ok(())
}

/// Validate a required string with at least one non-whitespace character.
///
/// # Errors
///
/// `{field} is required`, `{field} must be a string`, or `{field} cannot be empty`
pub fn validate_required_string(value: Option<&Value>, field_name: &str) -> Verdict {
    if is_missing(value) {
        return Err(ValidationError::new(format!("{field_name} is required")));
    }

    let Some(text) = value.and_then(Value::as_str) else {
        return Err(ValidationError::new(format!(
            "{field_name} must be a string"
        )));
    };

    if text.trim().is_empty() {
        return Err(ValidationError::new(format!(
            "{field_name} cannot be empty"
        )));
    }

    Ok(())
}

/// Event creation: date, then title.
///
/// # Errors
///
/// The first failing field check
pub fn validate_event_input(args: &Value) -> Verdict {
    validate_date(field(args, "date"))?;
    validate_required_string(field(args, "title"), "Title")
}

/// Event update: event id, then the date only when one is provided.
///
/// # Errors
///
/// The first failing field check
pub fn validate_event_update_input(args: &Value) -> Verdict {
    validate_required_string(field(args, "eventId"), "Event ID")?;

    let date = field(args, "date");
    if !is_missing(date) {
        validate_date(date)?;
    }

    Ok(())
}

/// Label creation: name, then hex color if provided.
///
/// # Errors
///
/// The first failing field check
pub fn validate_label_input(args: &Value) -> Verdict {
    validate_required_string(field(args, "name"), "Name")?;
    validate_hex_color(field(args, "hexColor"))
}

/// Label update: label id, then hex color if provided.
///
/// # Errors
///
/// The first failing field check
pub fn validate_label_update_input(args: &Value) -> Verdict {
    validate_required_string(field(args, "labelId"), "Label ID")?;
    validate_hex_color(field(args, "hexColor"))
}

/// List item creation: list id, then item name.
///
/// # Errors
///
/// The first failing field check
pub fn validate_list_item_input(args: &Value) -> Verdict {
    validate_required_string(field(args, "listId"), "List ID")?;
    validate_required_string(field(args, "name"), "Item name")
}
