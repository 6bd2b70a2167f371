// ABOUTME: Re-exports application constants from anylist-core
// ABOUTME: Tool names, environment variables, protocol identification and JSON-RPC codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use anylist_core::constants::*;
