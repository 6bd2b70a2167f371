// ABOUTME: Re-exports the unified error system from anylist-core
// ABOUTME: Lets the rest of the crate use crate::errors without naming the core crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use anylist_core::errors::*;
