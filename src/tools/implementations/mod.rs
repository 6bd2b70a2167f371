// ABOUTME: Module containing all MCP tool implementations organized by category.
// ABOUTME: Each submodule corresponds to a tool category with feature flag support.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Implementations
//!
//! This module contains all MCP tool implementations, organized by category:
//!
//! - `meal_planning` - Meal planning calendar events (list, create, update, delete)
//! - `labels` - Calendar labels (list, create, update, delete)
//! - `recipes` - Recipes and recipe collections (read-only)
//! - `shopping_lists` - Shopping lists and their items
//!
//! Each category is conditionally compiled based on feature flags.

// Meal planning tools: get/create/update/delete meal planning events
#[cfg(feature = "tools-meal-planning")]
pub mod meal_planning;

// Label tools: get/create/update/delete calendar labels
#[cfg(feature = "tools-labels")]
pub mod labels;

// Recipe tools: get_recipes, get_recipe_collections
#[cfg(feature = "tools-recipes")]
pub mod recipes;

// Shopping list tools: get_lists, get_list_items, add_list_item, remove_list_item
#[cfg(feature = "tools-shopping-lists")]
pub mod shopping_lists;
