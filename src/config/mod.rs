// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Resolves credential, data file and logging settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the AnyList MCP server

/// Environment and server configuration
pub mod environment;

pub use environment::ServerConfig;
