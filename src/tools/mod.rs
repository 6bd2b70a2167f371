// ABOUTME: Pluggable tool architecture for the AnyList MCP server.
// ABOUTME: Trait, result and context types, the registry, and the built-in tool implementations.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # MCP Tools
//!
//! Every tool is a struct implementing [`McpTool`]. The [`ToolRegistry`]
//! owns them, advertises their schemas and dispatches calls by name.
//!
//! Handlers follow one shape: validate the raw arguments, obtain the shared
//! session, fetch fresh state, locate the target entity, mutate or filter,
//! and format. Validation failures, missing entities and collaborator errors
//! all come back as error-shaped [`ToolResult`]s.

/// Tool execution context
pub mod context;
/// Built-in tool implementations grouped by category
pub mod implementations;
/// Tool registry and dispatch
pub mod registry;
/// Tool result type
pub mod result;
/// `McpTool` trait and capability flags
pub mod traits;

pub use context::ToolExecutionContext;
pub use registry::ToolRegistry;
pub use result::ToolResult;
pub use traits::{McpTool, ToolCapabilities};
