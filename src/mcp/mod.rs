// ABOUTME: Model Context Protocol (MCP) implementation for AI assistant integration
// ABOUTME: Protocol schemas, the AnyList server facade, request routing and the stdio transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON-RPC request routing
pub mod mcp_request_processor;
/// Protocol message structures
pub mod schema;
/// Tool listing and invocation over the shared session
pub mod server;
/// Line-delimited stdio transport
pub mod transport;

pub use mcp_request_processor::McpRequestProcessor;
pub use server::AnyListMcpServer;
pub use transport::StdioTransport;
