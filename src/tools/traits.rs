// ABOUTME: Defines the McpTool trait and ToolCapabilities for the pluggable tools architecture.
// ABOUTME: Tools implement this trait to be registered and executed via the ToolRegistry.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # MCP Tool Trait and Capabilities
//!
//! All tools implement the `McpTool` trait which provides:
//! - Tool metadata (name, description, input schema)
//! - Capability flags for filtering and logging
//! - Async execution with context

use async_trait::async_trait;
use bitflags::bitflags;
use serde_json::Value;

use crate::errors::AppResult;
use crate::mcp::schema::JsonSchema;

use super::context::ToolExecutionContext;
use super::result::ToolResult;

bitflags! {
    /// Capabilities that tools declare for filtering and discovery.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u16 {
        /// Tool reads account data
        const READS_DATA = 0b0000_0001;
        /// Tool creates, modifies or deletes account data
        const WRITES_DATA = 0b0000_0010;
        /// Tool needs an authenticated AnyList session
        const REQUIRES_SESSION = 0b0000_0100;
        /// Tool works on meal planning calendar events
        const MEAL_PLANNING = 0b0000_1000;
        /// Tool works on calendar labels
        const LABELS = 0b0001_0000;
        /// Tool works on recipes or recipe collections
        const RECIPES = 0b0010_0000;
        /// Tool works on shopping lists
        const SHOPPING_LISTS = 0b0100_0000;
    }
}

impl ToolCapabilities {
    /// Check if tool reads data
    #[must_use]
    pub const fn reads_data(self) -> bool {
        self.contains(Self::READS_DATA)
    }

    /// Check if tool writes data
    #[must_use]
    pub const fn writes_data(self) -> bool {
        self.contains(Self::WRITES_DATA)
    }

    /// Check if tool needs a session
    #[must_use]
    pub const fn requires_session(self) -> bool {
        self.contains(Self::REQUIRES_SESSION)
    }

    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let parts: Vec<&str> = self
            .iter_names()
            .map(|(name, _)| name)
            .collect();

        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ").to_lowercase()
        }
    }
}

/// The main trait that all MCP tools must implement.
///
/// Tools are registered with the `ToolRegistry` and looked up by name.
///
/// # Design Notes
///
/// - Tools are `Send + Sync` for safe sharing across async tasks
/// - `name()` returns `&'static str` for zero-allocation tool lookup
/// - `execute()` receives the raw argument object so handlers can tell an
///   absent key from a key present with an empty value
///
/// # Example
///
/// ```rust,no_run
/// use async_trait::async_trait;
/// use anylist_mcp_server::tools::{McpTool, ToolCapabilities, ToolResult, ToolExecutionContext};
/// use anylist_mcp_server::mcp::schema::JsonSchema;
/// use anylist_mcp_server::errors::AppResult;
/// use serde_json::Value;
///
/// struct PingTool;
///
/// #[async_trait]
/// impl McpTool for PingTool {
///     fn name(&self) -> &'static str {
///         "ping"
///     }
///
///     fn description(&self) -> &'static str {
///         "Check that the server answers"
///     }
///
///     fn input_schema(&self) -> JsonSchema {
///         JsonSchema::object(Vec::new(), &[])
///     }
///
///     fn capabilities(&self) -> ToolCapabilities {
///         ToolCapabilities::empty()
///     }
///
///     async fn execute(&self, _args: Value, _context: &ToolExecutionContext) -> AppResult<ToolResult> {
///         Ok(ToolResult::ok(serde_json::json!({"pong": true})))
///     }
/// }
/// ```
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Unique identifier for the tool (e.g., `anylist_get_lists`)
    fn name(&self) -> &'static str;

    /// Human-readable description for LLM consumption
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters, returned in tools/list responses
    fn input_schema(&self) -> JsonSchema;

    /// Capability flags for filtering and logging
    fn capabilities(&self) -> ToolCapabilities;

    /// Execute the tool with given arguments and context
    ///
    /// Validation failures, missing entities and collaborator failures are
    /// reported as error-shaped `ToolResult`s, not as `Err`.
    ///
    /// # Errors
    ///
    /// Returns `AppError` only for failures outside the handler contract
    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult>;
}
