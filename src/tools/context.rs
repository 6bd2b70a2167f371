// ABOUTME: Defines ToolExecutionContext which gives tools access to the shared AnyList session.
// ABOUTME: Carries the client accessor and the JSON-RPC request id for tracing.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Execution Context
//!
//! Provides a unified context object for tool execution, containing access to
//! the memoized collaborator session and request tracing information.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::client::{AnyListSession, ClientAccessor};
use crate::errors::AppResult;

/// Context provided to every tool execution.
///
/// The `client` field is `Arc<ClientAccessor>`, shared by every concurrent
/// tool call so they all reuse one session.
#[derive(Clone)]
pub struct ToolExecutionContext {
    /// Shared, lazily connected AnyList session
    pub client: Arc<ClientAccessor>,
    /// Request ID for tracing/logging
    pub request_id: Option<Value>,
}

impl ToolExecutionContext {
    /// Create a new context
    #[must_use]
    pub const fn new(client: Arc<ClientAccessor>) -> Self {
        Self {
            client,
            request_id: None,
        }
    }

    /// Set request ID
    #[must_use]
    pub fn with_request_id(mut self, request_id: Value) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Obtain the shared session, connecting on first use
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing or the login fails
    pub async fn session(&self) -> AppResult<Arc<dyn AnyListSession>> {
        self.client.get_client().await
    }
}

impl fmt::Debug for ToolExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolExecutionContext")
            .field("request_id", &self.request_id)
            .field("connected", &self.client.is_connected())
            .finish_non_exhaustive()
    }
}
