// ABOUTME: Lazily established, memoized AnyList session shared by every tool call
// ABOUTME: Single-flight initialization, credential resolution, disconnect and status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Client Accessor
//!
//! Owns the only process-wide mutable state of the server: the memoized
//! session handle and the guard serializing its first initialization.
//!
//! - Concurrent first calls to [`ClientAccessor::get_client`] perform exactly one
//!   login; every caller receives the same `Arc`.
//! - A failed login is not memoized; the next call tries again.
//! - [`ClientAccessor::disconnect`] tears the session down so the next call
//!   starts from scratch.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::constants::messages::CREDENTIALS_NOT_CONFIGURED;
use crate::errors::{AppError, AppResult};

use super::{AccountCredentials, AnyListSession, Credentials, SessionConnector};

/// Lazily connected, shared AnyList session
pub struct ClientAccessor {
    connector: Arc<dyn SessionConnector>,
    credentials_file: PathBuf,
    account: Option<AccountCredentials>,
    session: RwLock<Option<Arc<dyn AnyListSession>>>,
    init_guard: Mutex<()>,
}

impl ClientAccessor {
    /// Create an accessor; no login happens until the first `get_client`
    #[must_use]
    pub fn new(
        connector: Arc<dyn SessionConnector>,
        credentials_file: PathBuf,
        account: Option<AccountCredentials>,
    ) -> Self {
        Self {
            connector,
            credentials_file,
            account,
            session: RwLock::new(None),
            init_guard: Mutex::new(()),
        }
    }

    /// Credential store consulted on first connection
    #[must_use]
    pub fn credentials_file(&self) -> &Path {
        &self.credentials_file
    }

    /// Return the shared session, logging in on first use.
    ///
    /// # Errors
    ///
    /// - `ConfigMissing` when neither a credential file nor both override values exist
    /// - whatever the connector reports when the login fails
    pub async fn get_client(&self) -> AppResult<Arc<dyn AnyListSession>> {
        if let Some(session) = self.current() {
            return Ok(session);
        }

        let _guard = self.init_guard.lock().await;

        // Another caller may have finished the login while we waited
        if let Some(session) = self.current() {
            return Ok(session);
        }

        let credentials = self.resolve_credentials().await?;
        info!(
            credentials_file = %credentials.credentials_file.display(),
            explicit_account = credentials.account.is_some(),
            "Connecting to AnyList"
        );

        let session = self
            .connector
            .login(&credentials)
            .await
            .inspect_err(|e| warn!(error = %e, "AnyList login failed"))?;

        *self
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&session));
        info!("AnyList session established");

        Ok(session)
    }

    /// Tear down and forget the current session, if any
    pub async fn disconnect(&self) {
        let _guard = self.init_guard.lock().await;

        let session = self
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(session) = session {
            session.teardown().await;
            info!("AnyList session closed");
        } else {
            debug!("Disconnect requested without an active session");
        }
    }

    /// Whether a session is memoized; does not check liveness
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn current(&self) -> Option<Arc<dyn AnyListSession>> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn resolve_credentials(&self) -> AppResult<Credentials> {
        let has_stored = tokio::fs::try_exists(&self.credentials_file)
            .await
            .unwrap_or(false);

        if !has_stored && self.account.is_none() {
            return Err(AppError::config_missing(CREDENTIALS_NOT_CONFIGURED));
        }

        Ok(Credentials {
            credentials_file: self.credentials_file.clone(),
            account: self.account.clone(),
        })
    }
}

impl fmt::Debug for ClientAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientAccessor")
            .field("credentials_file", &self.credentials_file)
            .field("explicit_account", &self.account.is_some())
            .field("connected", &self.is_connected())
            .finish_non_exhaustive()
    }
}
