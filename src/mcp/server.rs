// ABOUTME: AnyList MCP server facade tying the tool registry to the shared session
// ABOUTME: Lists tool schemas, invokes tools by name, and tears the session down on shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Facade
//!
//! [`AnyListMcpServer`] is what the protocol layer talks to. It owns the
//! [`ToolRegistry`] and the [`ClientAccessor`], and converts every tool
//! outcome into the MCP `tools/call` response shape.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info};

use crate::client::{ClientAccessor, LocalConnector};
use crate::config::environment::ServerConfig;
use crate::mcp::schema::{ToolResponse, ToolSchema};
use crate::tools::{ToolExecutionContext, ToolRegistry};

/// Tool surface of the AnyList MCP server
#[derive(Debug, Clone)]
pub struct AnyListMcpServer {
    registry: Arc<ToolRegistry>,
    client: Arc<ClientAccessor>,
}

impl AnyListMcpServer {
    /// Create a server over an existing registry and accessor
    #[must_use]
    pub const fn new(registry: Arc<ToolRegistry>, client: Arc<ClientAccessor>) -> Self {
        Self { registry, client }
    }

    /// Create a server with every built-in tool, backed by the local data file
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        let connector = Arc::new(LocalConnector::new(config.data_file.clone()));
        let client = Arc::new(ClientAccessor::new(
            connector,
            config.credentials_file.clone(),
            config.account.clone(),
        ));

        Self::new(Arc::new(ToolRegistry::with_builtin_tools()), client)
    }

    /// Tool registry
    #[must_use]
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Shared session accessor
    #[must_use]
    pub const fn client(&self) -> &Arc<ClientAccessor> {
        &self.client
    }

    /// Schemas of every tool, in registration order
    #[must_use]
    pub fn list_tools(&self) -> Vec<ToolSchema> {
        self.registry.list_schemas()
    }

    /// Invoke a tool; failures come back as `isError` responses
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
        request_id: Option<Value>,
    ) -> ToolResponse {
        let started = Instant::now();

        let mut context = ToolExecutionContext::new(Arc::clone(&self.client));
        if let Some(id) = request_id {
            context = context.with_request_id(id);
        }

        let result = self.registry.dispatch(name, arguments, &context).await;
        debug!(
            tool = name,
            is_error = result.is_error,
            duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Tool call finished"
        );

        result.into_response()
    }

    /// Tear down the session, if one was established
    pub async fn shutdown(&self) {
        info!("Shutting down AnyList MCP server");
        self.client.disconnect().await;
    }
}
