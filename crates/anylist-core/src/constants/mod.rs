// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Tool names, environment variables, protocol identification and JSON-RPC error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// MCP tool identifiers
pub mod tools {
    /// List meal planning events, optionally within a date range
    pub const GET_MEAL_PLANNING_EVENTS: &str = "anylist_get_meal_planning_events";
    /// Create a meal planning event
    pub const CREATE_MEAL_PLANNING_EVENT: &str = "anylist_create_meal_planning_event";
    /// Update a meal planning event
    pub const UPDATE_MEAL_PLANNING_EVENT: &str = "anylist_update_meal_planning_event";
    /// Delete a meal planning event
    pub const DELETE_MEAL_PLANNING_EVENT: &str = "anylist_delete_meal_planning_event";

    /// List calendar labels
    pub const GET_LABELS: &str = "anylist_get_labels";
    /// Create a calendar label
    pub const CREATE_LABEL: &str = "anylist_create_label";
    /// Update a calendar label
    pub const UPDATE_LABEL: &str = "anylist_update_label";
    /// Delete a calendar label
    pub const DELETE_LABEL: &str = "anylist_delete_label";

    /// List recipes with optional search and collection filters
    pub const GET_RECIPES: &str = "anylist_get_recipes";
    /// List recipe collections
    pub const GET_RECIPE_COLLECTIONS: &str = "anylist_get_recipe_collections";

    /// List shopping lists
    pub const GET_LISTS: &str = "anylist_get_lists";
    /// List the items of one shopping list
    pub const GET_LIST_ITEMS: &str = "anylist_get_list_items";
    /// Add an item to a shopping list
    pub const ADD_LIST_ITEM: &str = "anylist_add_list_item";
    /// Remove an item from a shopping list
    pub const REMOVE_LIST_ITEM: &str = "anylist_remove_list_item";
}

/// Tool category names used by the registry
pub mod categories {
    /// Meal planning calendar events
    pub const MEAL_PLANNING: &str = "meal_planning";
    /// Calendar labels
    pub const LABELS: &str = "labels";
    /// Recipes and recipe collections
    pub const RECIPES: &str = "recipes";
    /// Shopping lists and their items
    pub const SHOPPING_LISTS: &str = "shopping_lists";
}

/// Environment variable names
pub mod env_config {
    /// Account email; overrides the credentials file when set together with the password
    pub const ANYLIST_EMAIL: &str = "ANYLIST_EMAIL";
    /// Account password
    pub const ANYLIST_PASSWORD: &str = "ANYLIST_PASSWORD";
    /// Location of the persisted credentials file
    pub const ANYLIST_CREDENTIALS_FILE: &str = "ANYLIST_CREDENTIALS_FILE";
    /// Location of the local account data file
    pub const ANYLIST_DATA_FILE: &str = "ANYLIST_DATA_FILE";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Include file and line in log records
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
}

/// File-system defaults
pub mod paths {
    /// Credentials file name placed in the home directory
    pub const DEFAULT_CREDENTIALS_FILE_NAME: &str = ".mcp-anylist-credentials";
    /// Directory created under the platform data directory
    pub const DATA_DIR_NAME: &str = "mcp-anylist";
    /// Data file name inside `DATA_DIR_NAME`
    pub const DATA_FILE_NAME: &str = "data.json";
}

/// Protocol version and identification constants
pub mod protocol {
    /// JSON-RPC version (standard, not configurable)
    pub const JSONRPC_VERSION: &str = "2.0";
    /// MCP protocol revision advertised during `initialize`
    pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";
    /// Server name advertised during `initialize`
    pub const SERVER_NAME: &str = "mcp-anylist";
    /// Server version from Cargo.toml
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// JSON-RPC error codes
pub mod json_rpc_codes {
    /// Invalid JSON was received
    pub const PARSE_ERROR: i32 = -32700;
    /// The JSON sent is not a valid request object
    pub const INVALID_REQUEST: i32 = -32600;
    /// The method does not exist
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameters
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal JSON-RPC error
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// User-facing messages shared between layers
pub mod messages {
    /// Reported when neither environment nor file credentials are available
    pub const CREDENTIALS_NOT_CONFIGURED: &str =
        "AnyList credentials not configured. Run \"anylist-mcp-server --setup\" to authenticate.";
}
