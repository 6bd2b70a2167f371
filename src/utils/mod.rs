// ABOUTME: Utility modules for common functionality across the application
// ABOUTME: Contains calendar date helpers and JSON argument accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Calendar date parsing, formatting and arithmetic for `YYYY-MM-DD` text
pub mod dates;
/// Typed accessors over raw tool argument objects
pub mod args;
