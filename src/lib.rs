// ABOUTME: Main library entry point for the AnyList MCP server
// ABOUTME: Exposes meal planning, label, recipe and shopping list tools over the Model Context Protocol
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # AnyList MCP Server
//!
//! A Model Context Protocol (MCP) server that lets an AI assistant manage an
//! AnyList account: meal planning calendar events and their labels, recipes
//! and recipe collections, and shopping lists.
//!
//! ## Quick Start
//!
//! 1. Store credentials once with `anylist-mcp-server --setup`
//! 2. Point the MCP host at the `anylist-mcp-server` binary
//! 3. Call tools such as `anylist_get_lists` from the assistant
//!
//! ## Architecture
//!
//! - **Tools**: one struct per tool, registered by category in a `ToolRegistry`
//! - **Validation / Formatters**: pure argument checks and response shaping
//! - **Client**: the collaborator traits, the memoizing `ClientAccessor` and
//!   a JSON-file backed local implementation
//! - **MCP / JSON-RPC**: request routing and the stdio transport
//! - **Config / Logging**: environment configuration and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use anylist_mcp_server::config::environment::ServerConfig;
//! use anylist_mcp_server::errors::AppResult;
//! use anylist_mcp_server::mcp::AnyListMcpServer;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let server = Arc::new(AnyListMcpServer::from_config(&config));
//!
//!     let response = server
//!         .call_tool("anylist_get_lists", serde_json::json!({}), None)
//!         .await;
//!     println!("{}", serde_json::to_string_pretty(&response)?);
//!
//!     server.shutdown().await;
//!     Ok(())
//! }
//! ```

/// Collaborator traits, session accessor and local backend
pub mod client;

/// Environment configuration
pub mod config;

/// Constants shared across layers
pub mod constants;

/// Error types
pub mod errors;

/// Response shaping for tool payloads
pub mod formatters;

/// JSON-RPC 2.0 message types
pub mod jsonrpc;

/// Structured logging setup
pub mod logging;

/// MCP protocol implementation
pub mod mcp;

/// Domain entities
pub mod models;

/// Interactive credential setup
pub mod setup;

/// Tool trait, registry and implementations
pub mod tools;

/// Date and argument helpers
pub mod utils;

/// Argument validators
pub mod validation;
