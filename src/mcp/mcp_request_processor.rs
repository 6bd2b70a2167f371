// ABOUTME: MCP request processing and protocol handling for the stdio server
// ABOUTME: Validates, routes, and executes JSON-RPC requests with proper error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use serde_json::{json, Value};
use tracing::{debug, error, warn};

use super::schema::{InitializeResponse, ToolCall};
use super::server::AnyListMcpServer;
use crate::constants::json_rpc_codes::{
    INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
};
use crate::constants::protocol::JSONRPC_VERSION;
use crate::errors::{AppError, AppResult};
use crate::jsonrpc::{JsonRpcRequest, JsonRpcResponse};

const PARAMS_PREVIEW_LEN: usize = 100;

/// Processes MCP protocol requests with validation, routing, and execution
#[derive(Debug, Clone)]
pub struct McpRequestProcessor {
    server: Arc<AnyListMcpServer>,
}

impl McpRequestProcessor {
    /// Create a new MCP request processor
    #[must_use]
    pub const fn new(server: Arc<AnyListMcpServer>) -> Self {
        Self { server }
    }

    /// Server behind this processor
    #[must_use]
    pub const fn server(&self) -> &Arc<AnyListMcpServer> {
        &self.server
    }

    /// Handle one raw line from the transport.
    ///
    /// Malformed JSON yields a parse error; valid JSON that is not a request
    /// object yields an invalid-request error.
    pub async fn handle_message(&self, line: &str) -> Option<JsonRpcResponse> {
        let message: Value = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(e) => {
                warn!("Invalid JSON-RPC message: {}", e);
                return Some(JsonRpcResponse::error(None, PARSE_ERROR, "Parse error"));
            }
        };

        let id = message.get("id").cloned();
        match serde_json::from_value::<JsonRpcRequest>(message) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                warn!("Message is not a JSON-RPC request: {}", e);
                Some(JsonRpcResponse::error(
                    id,
                    INVALID_REQUEST,
                    format!("Invalid Request: {e}"),
                ))
            }
        }
    }

    /// Handle an MCP request and return a response
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let start_time = Instant::now();
        Self::log_request(&request);

        // Notifications never get a response
        if request.is_notification() || request.id.is_none() {
            debug!("Handling notification: {}", request.method);
            Self::log_completion("notification", start_time);
            return None;
        }

        let response = match self.process_request(&request).await {
            Ok(response) => response,
            Err(e) => Self::create_error_response(&request, &e),
        };

        Self::log_completion("request", start_time);
        Some(response)
    }

    fn create_error_response(request: &JsonRpcRequest, e: &AppError) -> JsonRpcResponse {
        error!(
            "Failed to process MCP request: {} | Request: method={}, jsonrpc={}, id={:?}",
            e, request.method, request.jsonrpc, request.id
        );

        JsonRpcResponse::from_app_error(request.id.clone(), e)
    }

    /// Process an MCP request and generate response
    async fn process_request(&self, request: &JsonRpcRequest) -> AppResult<JsonRpcResponse> {
        if let Some(response) = Self::validate_request(request) {
            return Ok(response);
        }

        match request.method.as_str() {
            "initialize" => Self::handle_initialize(request),
            "ping" => Ok(Self::handle_ping(request)),
            "tools/list" => self.handle_tools_list(request),
            "tools/call" => self.handle_tools_call(request).await,
            _ => Ok(Self::handle_unknown_method(request)),
        }
    }

    /// Reject requests with the wrong protocol version or no method
    fn validate_request(request: &JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::error(
                request.id.clone(),
                INVALID_REQUEST,
                format!(
                    "Invalid JSON-RPC version: got '{}', expected '{}'",
                    request.jsonrpc, JSONRPC_VERSION
                ),
            ));
        }

        if request.method.is_empty() {
            return Some(JsonRpcResponse::error(
                request.id.clone(),
                INVALID_REQUEST,
                "Missing method",
            ));
        }

        None
    }

    /// Handle MCP initialize request
    fn handle_initialize(request: &JsonRpcRequest) -> AppResult<JsonRpcResponse> {
        debug!("Handling initialize request");

        let result = serde_json::to_value(InitializeResponse::default())?;
        Ok(JsonRpcResponse::success(request.id.clone(), result))
    }

    /// Handle MCP ping request
    fn handle_ping(request: &JsonRpcRequest) -> JsonRpcResponse {
        debug!("Handling ping request");
        JsonRpcResponse::success(request.id.clone(), json!({}))
    }

    /// Handle tools/list request
    fn handle_tools_list(&self, request: &JsonRpcRequest) -> AppResult<JsonRpcResponse> {
        debug!("Handling tools/list request");

        let tools = serde_json::to_value(self.server.list_tools())?;
        Ok(JsonRpcResponse::success(
            request.id.clone(),
            json!({ "tools": tools }),
        ))
    }

    /// Handle tools/call request
    async fn handle_tools_call(&self, request: &JsonRpcRequest) -> AppResult<JsonRpcResponse> {
        debug!("Handling tools/call request");

        let Some(params) = request.params.clone() else {
            return Ok(JsonRpcResponse::error(
                request.id.clone(),
                INVALID_PARAMS,
                "Missing parameters for tools/call",
            ));
        };

        let call: ToolCall = match serde_json::from_value(params) {
            Ok(call) => call,
            Err(e) => {
                return Ok(JsonRpcResponse::error(
                    request.id.clone(),
                    INVALID_PARAMS,
                    format!("Invalid parameters for tools/call: {e}"),
                ));
            }
        };

        let arguments = match call.arguments {
            None | Some(Value::Null) => json!({}),
            Some(arguments) => arguments,
        };

        let response = self
            .server
            .call_tool(&call.name, arguments, request.id.clone())
            .await;

        Ok(JsonRpcResponse::success(
            request.id.clone(),
            serde_json::to_value(response)?,
        ))
    }

    /// Handle unknown method
    fn handle_unknown_method(request: &JsonRpcRequest) -> JsonRpcResponse {
        warn!("Unknown MCP method: {}", request.method);

        JsonRpcResponse::error(
            request.id.clone(),
            METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        )
    }

    /// Log incoming request with truncated params
    fn log_request(request: &JsonRpcRequest) {
        debug!(
            mcp_method = %request.method,
            mcp_id = ?request.id,
            mcp_params_preview = ?request.params.as_ref().map(|p| {
                let s = p.to_string();
                match s.char_indices().nth(PARAMS_PREVIEW_LEN) {
                    Some((cut, _)) => format!("{}...[truncated]", &s[..cut]),
                    None => s,
                }
            }),
            "Received MCP request"
        );
    }

    /// Log request completion with timing
    fn log_completion(request_type: &str, start_time: Instant) {
        let duration = start_time.elapsed();
        debug!(
            duration_ms = u64::try_from(duration.as_millis()).unwrap_or(0),
            "Completed MCP {} processing", request_type
        );
    }
}
