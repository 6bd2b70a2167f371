// ABOUTME: Environment-based server configuration for credentials, data file and logging
// ABOUTME: Loads .env files, applies path defaults, and renders a secret-free summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `ANYLIST_CREDENTIALS_FILE` | `~/.mcp-anylist-credentials` |
//! | `ANYLIST_DATA_FILE` | `<data dir>/mcp-anylist/data.json` |
//! | `ANYLIST_EMAIL` + `ANYLIST_PASSWORD` | unset; used only when both are non-empty |
//!
//! Empty values count as unset.

use std::env;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::client::AccountCredentials;
use crate::constants::env_config::{
    ANYLIST_CREDENTIALS_FILE, ANYLIST_DATA_FILE, ANYLIST_EMAIL, ANYLIST_PASSWORD,
};
use crate::constants::paths::{DATA_DIR_NAME, DATA_FILE_NAME, DEFAULT_CREDENTIALS_FILE_NAME};
use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Credential store consulted before the first login
    pub credentials_file: PathBuf,
    /// Local account data file
    pub data_file: PathBuf,
    /// Explicit account override
    pub account: Option<AccountCredentials>,
    /// Logging settings
    pub logging: LoggingConfig,
    /// `.env` file applied before reading variables, if one was found
    pub env_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// credentials file location is not set explicitly
    pub fn from_env() -> AppResult<Self> {
        // Load .env file if it exists; reported by `log_sources` once logging is up
        let env_file = dotenvy::dotenv().ok();

        let mut config = Self::from_lookup(|key| env::var(key).ok())?;
        config.env_file = env_file;
        Ok(config)
    }

    /// Log where the configuration came from
    ///
    /// Call after the subscriber is installed; `from_env` runs before it.
    pub fn log_sources(&self) {
        match &self.env_file {
            Some(path) => info!("Loaded environment from {}", path.display()),
            None => warn!("No .env file found, using process environment only"),
        }
        info!("Configuration loaded from environment");
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// # Errors
    ///
    /// Returns an error if a default path is needed but no home directory exists
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let credentials_file = match non_empty(ANYLIST_CREDENTIALS_FILE) {
            Some(path) => PathBuf::from(path),
            None => dirs::home_dir()
                .map(|home| home.join(DEFAULT_CREDENTIALS_FILE_NAME))
                .ok_or_else(|| {
                    AppError::config(format!(
                        "Cannot determine home directory; set {ANYLIST_CREDENTIALS_FILE}"
                    ))
                })?,
        };

        let data_file = match non_empty(ANYLIST_DATA_FILE) {
            Some(path) => PathBuf::from(path),
            None => dirs::data_dir()
                .or_else(dirs::home_dir)
                .map(|dir| dir.join(DATA_DIR_NAME).join(DATA_FILE_NAME))
                .ok_or_else(|| {
                    AppError::config(format!(
                        "Cannot determine data directory; set {ANYLIST_DATA_FILE}"
                    ))
                })?,
        };

        let account =
            AccountCredentials::from_parts(non_empty(ANYLIST_EMAIL), non_empty(ANYLIST_PASSWORD));

        Ok(Self {
            credentials_file,
            data_file,
            account,
            logging: LoggingConfig::from_lookup(&lookup),
            env_file: None,
        })
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "AnyList MCP Server Configuration:\n\
             - Credentials File: {}\n\
             - Data File: {}\n\
             - Account Override: {}\n\
             - Log Level: {}\n\
             - Log Format: {:?}",
            self.credentials_file.display(),
            self.data_file.display(),
            if self.account.is_some() {
                "Enabled"
            } else {
                "Disabled"
            },
            self.logging.level,
            self.logging.format,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_explicit_paths_and_account() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("ANYLIST_CREDENTIALS_FILE", "/tmp/creds.json"),
            ("ANYLIST_DATA_FILE", "/tmp/data.json"),
            ("ANYLIST_EMAIL", "cook@example.com"),
            ("ANYLIST_PASSWORD", "hunter2"),
        ]))
        .unwrap();

        assert_eq!(config.credentials_file, PathBuf::from("/tmp/creds.json"));
        assert_eq!(config.data_file, PathBuf::from("/tmp/data.json"));
        assert_eq!(config.account.unwrap().email, "cook@example.com");
    }

    #[test]
    fn test_half_account_is_ignored() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("ANYLIST_CREDENTIALS_FILE", "/tmp/creds.json"),
            ("ANYLIST_DATA_FILE", "/tmp/data.json"),
            ("ANYLIST_EMAIL", "cook@example.com"),
            ("ANYLIST_PASSWORD", ""),
        ]))
        .unwrap();

        assert!(config.account.is_none());
    }

    #[test]
    fn test_summary_hides_password() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("ANYLIST_CREDENTIALS_FILE", "/tmp/creds.json"),
            ("ANYLIST_DATA_FILE", "/tmp/data.json"),
            ("ANYLIST_EMAIL", "cook@example.com"),
            ("ANYLIST_PASSWORD", "hunter2"),
        ]))
        .unwrap();

        let summary = config.summary();
        assert!(summary.contains("Account Override: Enabled"));
        assert!(!summary.contains("hunter2"));
    }
}
