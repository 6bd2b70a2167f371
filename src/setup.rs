// ABOUTME: Interactive credential setup run by `anylist-mcp-server --setup`
// ABOUTME: Prompts for missing account values, verifies them with a login, and stores credentials
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Credential Setup
//!
//! Unlike the server, setup is allowed to fail hard: a missing email or
//! password, or a rejected login, ends the process with a non-zero status.

use std::path::PathBuf;

use serde_json::json;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::info;

use crate::client::{AccountCredentials, Credentials, SessionConnector};
use crate::errors::{AppError, AppResult};

/// Values supplied on the command line; missing ones are prompted for
#[derive(Clone, Default)]
pub struct SetupOptions {
    /// Account email
    pub email: Option<String>,
    /// Account password
    pub password: Option<String>,
}

impl std::fmt::Debug for SetupOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetupOptions")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Run setup against the given streams.
///
/// Returns the credentials file written by the login.
///
/// # Errors
///
/// - `InvalidInput` when the email or password is empty
/// - whatever the connector reports when the login fails
/// - I/O errors on the prompt streams
pub async fn run_setup<R, W>(
    connector: &dyn SessionConnector,
    credentials_file: PathBuf,
    options: SetupOptions,
    input: R,
    mut output: W,
) -> AppResult<PathBuf>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    write_lines(
        &mut output,
        &[
            "",
            "AnyList MCP server setup",
            "",
            "This will verify your AnyList credentials and store them locally.",
            "",
        ],
    )
    .await?;

    let email = match options.email {
        Some(email) => email,
        None => prompt(&mut lines, &mut output, "AnyList Email: ").await?,
    };
    let email = email.trim().to_owned();
    if email.is_empty() {
        return Err(AppError::invalid_input("Email is required."));
    }

    let password = match options.password {
        Some(password) => password,
        None => prompt(&mut lines, &mut output, "AnyList Password: ").await?,
    };
    if password.is_empty() {
        return Err(AppError::invalid_input("Password is required."));
    }

    write_lines(&mut output, &["", "Authenticating with AnyList..."]).await?;

    let credentials = Credentials {
        credentials_file: credentials_file.clone(),
        account: Some(AccountCredentials { email, password }),
    };
    let session = connector.login(&credentials).await?;
    session.teardown().await;
    info!(path = %credentials_file.display(), "Stored AnyList credentials");

    let host_config = json!({
        "mcpServers": {
            "anylist": {
                "command": "anylist-mcp-server",
                "args": [],
            }
        }
    });
    let host_config = serde_json::to_string_pretty(&host_config)?;
    let saved_line = format!("Credentials saved to: {}", credentials_file.display());

    write_lines(
        &mut output,
        &[
            "",
            "Authentication successful!",
            &saved_line,
            "",
            "Add this to your MCP host configuration:",
            "",
            &host_config,
            "",
        ],
    )
    .await?;

    Ok(credentials_file)
}

async fn prompt<R, W>(lines: &mut Lines<R>, output: &mut W, question: &str) -> AppResult<String>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(question.as_bytes()).await?;
    output.flush().await?;

    // End of input counts as an empty answer
    Ok(lines.next_line().await?.unwrap_or_default())
}

async fn write_lines<W: AsyncWrite + Unpin>(output: &mut W, lines: &[&str]) -> AppResult<()> {
    for line in lines {
        output.write_all(line.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }
    output.flush().await?;
    Ok(())
}
