// ABOUTME: Defines ToolResult, the success-or-error outcome of a tool execution.
// ABOUTME: Renders results into MCP text content: pretty JSON on success, plain message on error.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Result Types
//!
//! `ToolResult` bridges tool implementations with the MCP protocol response
//! format. Success payloads are rendered as pretty-printed JSON text; error
//! payloads carry a plain message.

use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::errors::AppError;
use crate::mcp::schema::{Content, ToolResponse};

/// Result returned by tool execution.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    /// The result value to return to the client
    pub content: Value,
    /// Whether this result represents an error condition
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful result
    #[must_use]
    pub const fn ok(content: Value) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    /// Create an error result carrying a plain message
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: Value::String(message.into()),
            is_error: true,
        }
    }

    /// Error result for a handler failure: `Failed to <action>: <message>`
    #[must_use]
    pub fn failure(action: &str, err: &AppError) -> Self {
        error!(action, code = ?err.code, error = %err, "Tool handler failed");
        Self::error(format!("Failed to {action}: {}", err.message))
    }

    /// Error result for a missing entity: `<Resource> not found: <id>`
    #[must_use]
    pub fn not_found(resource: &str, id: &str) -> Self {
        Self::error(AppError::not_found(resource, id).message)
    }

    /// Create a result from a serializable value
    ///
    /// # Errors
    ///
    /// Returns the serialization error if the value cannot be converted to JSON
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::ok(serde_json::to_value(value)?))
    }

    /// Text shown to the assistant host
    #[must_use]
    pub fn text(&self) -> String {
        match &self.content {
            Value::String(message) if self.is_error => message.clone(),
            content => serde_json::to_string_pretty(content).unwrap_or_else(|_| content.to_string()),
        }
    }

    /// Message of an error result, if this is one
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        if self.is_error {
            self.content.as_str()
        } else {
            None
        }
    }

    /// Convert into the MCP `tools/call` response shape
    #[must_use]
    pub fn into_response(self) -> ToolResponse {
        ToolResponse {
            content: vec![Content::Text { text: self.text() }],
            is_error: self.is_error,
        }
    }
}

impl Default for ToolResult {
    fn default() -> Self {
        Self::ok(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_text_is_pretty_json() {
        let result = ToolResult::ok(json!({"count": 0, "lists": []}));
        let text = result.text();

        assert!(text.contains('\n'));
        assert_eq!(serde_json::from_str::<Value>(&text).unwrap()["count"], 0);
    }

    #[test]
    fn test_error_text_is_plain_message() {
        let result = ToolResult::error("List not found: L9");

        assert_eq!(result.text(), "List not found: L9");
        assert_eq!(result.error_message(), Some("List not found: L9"));

        let response = result.into_response();
        assert!(response.is_error);
    }

    #[test]
    fn test_failure_prefixes_action() {
        let err = AppError::external_service("AnyList", "timeout");
        let result = ToolResult::failure("get lists", &err);

        assert_eq!(result.text(), "Failed to get lists: AnyList: timeout");
    }
}
