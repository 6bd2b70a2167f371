// ABOUTME: Line-delimited JSON-RPC transport over stdin and stdout
// ABOUTME: Processes requests concurrently, serializes writes, and disconnects on end of input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Stdio Transport
//!
//! One JSON object per line in each direction. Logs never go to stdout.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use super::mcp_request_processor::McpRequestProcessor;
use crate::constants::json_rpc_codes::PARSE_ERROR;
use crate::errors::{AppError, AppResult};
use crate::jsonrpc::JsonRpcResponse;

/// Stdio transport for the MCP server
#[derive(Debug, Clone)]
pub struct StdioTransport {
    processor: Arc<McpRequestProcessor>,
}

impl StdioTransport {
    /// Create a transport over a request processor
    #[must_use]
    pub const fn new(processor: Arc<McpRequestProcessor>) -> Self {
        Self { processor }
    }

    /// Serve the process's stdin and stdout until stdin closes
    ///
    /// # Errors
    ///
    /// Returns an error if reading stdin fails
    pub async fn run(&self) -> AppResult<()> {
        info!("MCP stdio transport ready - listening on stdin/stdout");
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Serve arbitrary line-oriented streams.
    ///
    /// Each line is handled on its own task; responses are written whole, one
    /// per line, in completion order. When the input ends, in-flight requests
    /// finish and the AnyList session is disconnected.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the input fails
    pub async fn serve<R, W>(&self, mut reader: R, writer: W) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let writer = Arc::new(Mutex::new(writer));
        let mut in_flight = JoinSet::new();
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer).await? == 0 {
                break;
            }

            let Ok(line) = std::str::from_utf8(&buffer) else {
                warn!("Rejecting input line that is not valid UTF-8");
                let response = JsonRpcResponse::error(None, PARSE_ERROR, "Parse error");
                if let Err(e) = write_response(&response, &writer).await {
                    warn!("Failed to write MCP response: {}", e);
                }
                continue;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let line = line.to_owned();

            let processor = Arc::clone(&self.processor);
            let writer = Arc::clone(&writer);
            in_flight.spawn(async move {
                if let Some(response) = processor.handle_message(&line).await {
                    if let Err(e) = write_response(&response, &writer).await {
                        warn!("Failed to write MCP response: {}", e);
                    }
                }
            });

            // Reap finished tasks so the set does not grow unbounded
            while in_flight.try_join_next().is_some() {}
        }

        debug!("stdin closed, waiting for {} in-flight requests", in_flight.len());
        while in_flight.join_next().await.is_some() {}

        self.processor.server().shutdown().await;
        info!("MCP stdio transport stopped");
        Ok(())
    }
}

/// Write one response followed by a newline, then flush
///
/// # Errors
///
/// Returns an error if JSON serialization fails or I/O operations fail
pub async fn write_response<W>(response: &JsonRpcResponse, writer: &Mutex<W>) -> AppResult<()>
where
    W: AsyncWrite + Unpin,
{
    let mut response_json = serde_json::to_string(response)
        .map_err(|e| AppError::internal(format!("JSON serialization failed: {e}")))?;
    debug!("Sending MCP response: {}", response_json);
    response_json.push('\n');

    let mut writer = writer.lock().await;
    writer
        .write_all(response_json.as_bytes())
        .await
        .map_err(|e| AppError::internal(format!("Transport error: {e}")))?;
    writer
        .flush()
        .await
        .map_err(|e| AppError::internal(format!("Transport error: {e}")))?;
    drop(writer);

    Ok(())
}
