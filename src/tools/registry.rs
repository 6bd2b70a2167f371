// ABOUTME: Central registry for MCP tools with category grouping and name-based dispatch.
// ABOUTME: Provides tool discovery, schema listing, and feature-flag-based registration.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Registry
//!
//! Central registry for MCP tools, providing:
//! - Tool registration and lookup
//! - Category grouping (meal planning, labels, recipes, shopping lists)
//! - Feature-flag-based conditional registration
//! - Schema generation for MCP tools/list responses
//! - Dispatch that always answers with a `ToolResult`

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::{AppResult, ToolError};
use crate::mcp::schema::ToolSchema;

use super::context::ToolExecutionContext;
use super::result::ToolResult;
use super::traits::{McpTool, ToolCapabilities};

/// Central registry for MCP tools.
///
/// Built once at startup and then used immutably for lookups. Tools are
/// listed in registration order.
///
/// # Example
///
/// ```
/// use anylist_mcp_server::tools::registry::ToolRegistry;
///
/// let mut registry = ToolRegistry::new();
/// registry.register_builtin_tools();
///
/// assert!(registry.contains("anylist_get_lists"));
/// assert_eq!(registry.list_schemas().len(), registry.len());
/// ```
pub struct ToolRegistry {
    /// Registered tools by name
    tools: HashMap<String, Arc<dyn McpTool>>,
    /// Registration order, used for listing
    order: Vec<String>,
    /// Tool categories for organization
    categories: HashMap<String, Vec<String>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
            order: Vec::new(),
            categories: HashMap::new(),
        }
    }

    /// Create a registry with every built-in tool enabled by feature flags
    #[must_use]
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        registry.register_builtin_tools();
        registry
    }

    /// Register a tool in the registry
    ///
    /// # Returns
    ///
    /// `true` if the tool was registered, `false` if a tool with the same name exists
    pub fn register(&mut self, tool: Arc<dyn McpTool>) -> bool {
        let name = tool.name().to_owned();

        if self.tools.contains_key(&name) {
            warn!("Tool '{}' is already registered, skipping", name);
            return false;
        }

        debug!(
            "Registering tool '{}' with capabilities: {}",
            name,
            tool.capabilities().describe()
        );
        self.order.push(name.clone());
        self.tools.insert(name, tool);
        true
    }

    /// Register a tool, failing if the name is taken
    ///
    /// # Errors
    ///
    /// Returns `ToolError::AlreadyRegistered` on a duplicate name
    pub fn try_register(&mut self, tool: Arc<dyn McpTool>) -> Result<(), ToolError> {
        let name = tool.name();
        if self.register(tool) {
            Ok(())
        } else {
            Err(ToolError::already_registered(name))
        }
    }

    /// Register a tool and categorize it
    pub fn register_with_category(&mut self, tool: Arc<dyn McpTool>, category: &str) {
        let name = tool.name().to_owned();
        if self.register(tool) {
            self.categories
                .entry(category.to_owned())
                .or_default()
                .push(name);
        }
    }

    /// Get a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpTool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// List all tool names in registration order
    #[must_use]
    pub fn tool_names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// List tool names in a specific category
    #[must_use]
    pub fn tools_in_category(&self, category: &str) -> Vec<&str> {
        self.categories
            .get(category)
            .map(|names| names.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// List all categories
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.categories.keys().map(String::as_str).collect();
        categories.sort_unstable();
        categories
    }

    /// Schemas of every registered tool, in registration order
    #[must_use]
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.ordered_tools()
            .map(|tool| ToolSchema {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                input_schema: tool.input_schema(),
            })
            .collect()
    }

    /// Filter tools by capabilities
    #[must_use]
    pub fn filter_by_capabilities(&self, required: ToolCapabilities) -> Vec<&Arc<dyn McpTool>> {
        self.ordered_tools()
            .filter(|tool| tool.capabilities().contains(required))
            .collect()
    }

    /// Names of tools that only read data
    #[must_use]
    pub fn read_tools(&self) -> Vec<&str> {
        self.ordered_tools()
            .filter(|tool| {
                let caps = tool.capabilities();
                caps.reads_data() && !caps.writes_data()
            })
            .map(|tool| tool.name())
            .collect()
    }

    /// Names of tools that write data
    #[must_use]
    pub fn write_tools(&self) -> Vec<&str> {
        self.ordered_tools()
            .filter(|tool| tool.capabilities().writes_data())
            .map(|tool| tool.name())
            .collect()
    }

    /// Execute a tool by name
    ///
    /// # Errors
    ///
    /// Returns `AppError` if the tool is not found or its execution fails
    pub async fn execute(
        &self,
        name: &str,
        args: Value,
        context: &ToolExecutionContext,
    ) -> AppResult<ToolResult> {
        let tool = self.get(name).ok_or_else(|| ToolError::not_found(name))?;
        tool.execute(args, context).await
    }

    /// Execute a tool by name, converting every failure into an error result.
    ///
    /// - unknown name: `Unknown tool: <name>`
    /// - any error escaping the handler: `Tool error: <message>`
    pub async fn dispatch(
        &self,
        name: &str,
        args: Value,
        context: &ToolExecutionContext,
    ) -> ToolResult {
        let Some(tool) = self.get(name) else {
            warn!(tool = name, "Call for unknown tool");
            return ToolResult::error(ToolError::not_found(name).to_string());
        };

        debug!(tool = name, request_id = ?context.request_id, "Dispatching tool call");

        match tool.execute(args, context).await {
            Ok(result) => result,
            Err(e) => {
                warn!(tool = name, error = %e, "Tool execution failed");
                ToolResult::error(format!("Tool error: {}", e.message))
            }
        }
    }

    /// Register all built-in tools based on feature flags
    ///
    /// This method is called at startup to register all tools that are
    /// enabled via Cargo feature flags.
    pub fn register_builtin_tools(&mut self) {
        info!("Registering built-in tools...");

        #[cfg(feature = "tools-meal-planning")]
        self.register_meal_planning_tools();

        #[cfg(feature = "tools-labels")]
        self.register_label_tools();

        #[cfg(feature = "tools-recipes")]
        self.register_recipe_tools();

        #[cfg(feature = "tools-shopping-lists")]
        self.register_shopping_list_tools();

        info!("Registered {} built-in tools", self.len());
    }

    /// Register meal planning event tools
    #[cfg(feature = "tools-meal-planning")]
    fn register_meal_planning_tools(&mut self) {
        use super::implementations::meal_planning::create_meal_planning_tools;
        use crate::constants::categories::MEAL_PLANNING;

        debug!(
            "Registering meal planning tools (registry has {} tools)",
            self.tools.len()
        );

        for tool in create_meal_planning_tools() {
            self.register_with_category(Arc::from(tool), MEAL_PLANNING);
        }

        info!(
            "Registered meal planning tools (registry now has {} tools)",
            self.tools.len()
        );
    }

    /// Register calendar label tools
    #[cfg(feature = "tools-labels")]
    fn register_label_tools(&mut self) {
        use super::implementations::labels::create_label_tools;
        use crate::constants::categories::LABELS;

        debug!(
            "Registering label tools (registry has {} tools)",
            self.tools.len()
        );

        for tool in create_label_tools() {
            self.register_with_category(Arc::from(tool), LABELS);
        }

        info!(
            "Registered label tools (registry now has {} tools)",
            self.tools.len()
        );
    }

    /// Register recipe tools
    #[cfg(feature = "tools-recipes")]
    fn register_recipe_tools(&mut self) {
        use super::implementations::recipes::create_recipe_tools;
        use crate::constants::categories::RECIPES;

        debug!(
            "Registering recipe tools (registry has {} tools)",
            self.tools.len()
        );

        for tool in create_recipe_tools() {
            self.register_with_category(Arc::from(tool), RECIPES);
        }

        info!(
            "Registered recipe tools (registry now has {} tools)",
            self.tools.len()
        );
    }

    /// Register shopping list tools
    #[cfg(feature = "tools-shopping-lists")]
    fn register_shopping_list_tools(&mut self) {
        use super::implementations::shopping_lists::create_shopping_list_tools;
        use crate::constants::categories::SHOPPING_LISTS;

        debug!(
            "Registering shopping list tools (registry has {} tools)",
            self.tools.len()
        );

        for tool in create_shopping_list_tools() {
            self.register_with_category(Arc::from(tool), SHOPPING_LISTS);
        }

        info!(
            "Registered shopping list tools (registry now has {} tools)",
            self.tools.len()
        );
    }

    fn ordered_tools(&self) -> impl Iterator<Item = &Arc<dyn McpTool>> {
        self.order.iter().filter_map(|name| self.tools.get(name))
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tool_count", &self.tools.len())
            .field("tools", &self.tool_names())
            .field("categories", &self.categories())
            .finish()
    }
}
