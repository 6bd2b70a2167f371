// ABOUTME: Core types and constants for the AnyList MCP server
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # AnyList Core
//!
//! Foundation crate providing shared types and constants for the AnyList MCP
//! server. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ToolError`
//! - **constants**: Tool names, environment variables, and protocol constants
//! - **models**: Records exchanged with the AnyList collaborator

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Domain records (events, labels, recipes, lists, items)
pub mod models;
