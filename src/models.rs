// ABOUTME: Re-exports domain records from anylist-core
// ABOUTME: Calendar events, labels, recipes, collections, shopping lists and items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use anylist_core::models::*;
