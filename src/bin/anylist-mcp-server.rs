// ABOUTME: Binary entry point for the AnyList MCP server
// ABOUTME: Runs the stdio server, or interactive credential setup with --setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # AnyList MCP Server Binary
//!
//! ```text
//! anylist-mcp-server           Run the MCP server on stdin/stdout
//! anylist-mcp-server --setup   Configure AnyList credentials
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use anylist_mcp_server::{
    client::LocalConnector,
    config::environment::ServerConfig,
    mcp::{AnyListMcpServer, McpRequestProcessor, StdioTransport},
    setup::{run_setup, SetupOptions},
};
use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "anylist-mcp-server")]
#[command(version)]
#[command(about = "MCP server for AnyList meal planning, recipes and shopping lists")]
pub struct Args {
    /// Configure AnyList credentials interactively
    #[arg(short, long)]
    setup: bool,

    /// Account email for --setup (prompted when absent)
    #[arg(long, requires = "setup")]
    email: Option<String>,

    /// Account password for --setup (prompted when absent)
    #[arg(long, requires = "setup")]
    password: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ServerConfig::from_env()?;
    config.logging.init()?;
    config.log_sources();
    info!("{}", config.summary());

    if args.setup {
        let options = SetupOptions {
            email: args.email,
            password: args.password,
        };
        return setup(&config, options).await;
    }

    serve(&config).await
}

async fn setup(config: &ServerConfig, options: SetupOptions) -> Result<()> {
    let connector = LocalConnector::new(config.data_file.clone());

    run_setup(
        &connector,
        config.credentials_file.clone(),
        options,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
    .context("Authentication failed. Please check your email and password and try again")?;

    Ok(())
}

async fn serve(config: &ServerConfig) -> Result<()> {
    let server = Arc::new(AnyListMcpServer::from_config(config));
    info!(
        "Registered {} tools: {:?}",
        server.registry().len(),
        server.registry().tool_names()
    );

    let processor = Arc::new(McpRequestProcessor::new(Arc::clone(&server)));
    let transport = StdioTransport::new(processor);

    tokio::select! {
        result = transport.run() => {
            if let Err(e) = result {
                error!("stdio transport failed: {}", e);
                server.shutdown().await;
                return Err(e.into());
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupt received");
            server.shutdown().await;
        }
    }

    info!("AnyList MCP server stopped");
    Ok(())
}
