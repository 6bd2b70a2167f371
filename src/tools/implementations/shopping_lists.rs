// ABOUTME: Shopping list tools for the AnyList account.
// ABOUTME: Implements get_lists, get_list_items, add_list_item and remove_list_item.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Shopping List Tools
//!
//! - `GetListsTool` - All shopping lists with item counts
//! - `GetListItemsTool` - Items of one list, unchecked only by default
//! - `AddListItemTool` - Append a new unchecked item
//! - `RemoveListItemTool` - Remove an item by identifier

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::constants::tools::{ADD_LIST_ITEM, GET_LISTS, GET_LIST_ITEMS, REMOVE_LIST_ITEM};
use crate::errors::AppResult;
use crate::formatters::{format_item, format_list, format_list_with_items};
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::models::{NewListItem, ShoppingList};
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};
use crate::utils::args::{field, is_true, non_empty_str};
use crate::validation::{validate_list_item_input, validate_required_string};

fn find_list(lists: Vec<ShoppingList>, list_id: &str) -> Option<ShoppingList> {
    lists.into_iter().find(|list| list.identifier == list_id)
}

// ============================================================================
// GetListsTool
// ============================================================================

/// Tool listing shopping lists.
pub struct GetListsTool;

impl GetListsTool {
    const ACTION: &'static str = "get lists";

    async fn run(ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let lists = ctx.session().await?.lists().await?;
        let lists: Vec<_> = lists.iter().map(format_list).collect();

        Ok(ToolResult::ok(json!({
            "count": lists.len(),
            "lists": lists,
        })))
    }
}

#[async_trait]
impl McpTool for GetListsTool {
    fn name(&self) -> &'static str {
        GET_LISTS
    }

    fn description(&self) -> &'static str {
        "Get all shopping lists."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(Vec::new(), &[])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::REQUIRES_SESSION
            | ToolCapabilities::READS_DATA
            | ToolCapabilities::SHOPPING_LISTS
    }

    async fn execute(&self, _args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        tracing::debug!("Getting shopping lists");

        Ok(Self::run(ctx)
            .await
            .unwrap_or_else(|e| ToolResult::failure(Self::ACTION, &e)))
    }
}

// ============================================================================
// GetListItemsTool
// ============================================================================

/// Tool listing the items of one shopping list.
pub struct GetListItemsTool;

impl GetListItemsTool {
    const ACTION: &'static str = "get list items";

    async fn run(
        list_id: &str,
        include_checked: bool,
        ctx: &ToolExecutionContext,
    ) -> AppResult<ToolResult> {
        let lists = ctx.session().await?.lists().await?;
        let Some(list) = find_list(lists, list_id) else {
            return Ok(ToolResult::not_found("List", list_id));
        };

        Ok(ToolResult::from_serializable(&format_list_with_items(
            &list,
            include_checked,
        ))?)
    }
}

#[async_trait]
impl McpTool for GetListItemsTool {
    fn name(&self) -> &'static str {
        GET_LIST_ITEMS
    }

    fn description(&self) -> &'static str {
        "Get items from a specific shopping list."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                ("listId", PropertySchema::string("ID of the shopping list")),
                (
                    "includeChecked",
                    PropertySchema::boolean("Include checked-off items (default: false)"),
                ),
            ],
            &["listId"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::REQUIRES_SESSION
            | ToolCapabilities::READS_DATA
            | ToolCapabilities::SHOPPING_LISTS
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        if let Err(e) = validate_required_string(field(&args, "listId"), "List ID") {
            return Ok(ToolResult::error(e.message()));
        }

        let list_id = non_empty_str(&args, "listId").unwrap_or_default();
        // Only the literal `true` opts in
        let include_checked = is_true(&args, "includeChecked");
        tracing::debug!(list_id, include_checked, "Getting shopping list items");

        Ok(Self::run(list_id, include_checked, ctx)
            .await
            .unwrap_or_else(|e| ToolResult::failure(Self::ACTION, &e)))
    }
}

// ============================================================================
// AddListItemTool
// ============================================================================

/// Tool adding an item to a shopping list.
pub struct AddListItemTool;

impl AddListItemTool {
    const ACTION: &'static str = "add item";

    async fn run(
        list_id: &str,
        draft: NewListItem,
        ctx: &ToolExecutionContext,
    ) -> AppResult<ToolResult> {
        let session = ctx.session().await?;
        let lists = session.lists().await?;
        if find_list(lists, list_id).is_none() {
            return Ok(ToolResult::not_found("List", list_id));
        }

        let item = session.create_item(draft);
        let added = session.add_item(list_id, item).await?;
        tracing::info!(list_id, item_id = %added.identifier, "Added shopping list item");

        Ok(ToolResult::ok(json!({
            "success": true,
            "message": "Item added successfully",
            "item": format_item(&added),
        })))
    }
}

#[async_trait]
impl McpTool for AddListItemTool {
    fn name(&self) -> &'static str {
        ADD_LIST_ITEM
    }

    fn description(&self) -> &'static str {
        "Add an item to a shopping list."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                ("listId", PropertySchema::string("ID of the target shopping list")),
                ("name", PropertySchema::string("Item name")),
                (
                    "quantity",
                    PropertySchema::string(r#"Quantity (e.g., "2 lbs", "1 dozen")"#),
                ),
                ("details", PropertySchema::string("Additional notes")),
            ],
            &["listId", "name"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::REQUIRES_SESSION
            | ToolCapabilities::READS_DATA
            | ToolCapabilities::WRITES_DATA
            | ToolCapabilities::SHOPPING_LISTS
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        if let Err(e) = validate_list_item_input(&args) {
            return Ok(ToolResult::error(e.message()));
        }

        let list_id = non_empty_str(&args, "listId").unwrap_or_default();
        tracing::debug!(list_id, "Adding shopping list item");

        let draft = NewListItem {
            name: non_empty_str(&args, "name").unwrap_or_default().to_owned(),
            quantity: non_empty_str(&args, "quantity").map(str::to_owned),
            details: non_empty_str(&args, "details").map(str::to_owned),
        };

        Ok(Self::run(list_id, draft, ctx)
            .await
            .unwrap_or_else(|e| ToolResult::failure(Self::ACTION, &e)))
    }
}

// ============================================================================
// RemoveListItemTool
// ============================================================================

/// Tool removing an item from a shopping list.
pub struct RemoveListItemTool;

impl RemoveListItemTool {
    const ACTION: &'static str = "remove item";

    async fn run(list_id: &str, item_id: &str, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let session = ctx.session().await?;
        let lists = session.lists().await?;
        let Some(list) = find_list(lists, list_id) else {
            return Ok(ToolResult::not_found("List", list_id));
        };

        if list.item_by_id(item_id).is_none() {
            return Ok(ToolResult::not_found("Item", item_id));
        }

        session.remove_item(list_id, item_id).await?;
        tracing::info!(list_id, item_id, "Removed shopping list item");

        Ok(ToolResult::ok(json!({
            "success": true,
            "message": "Item removed successfully",
            "itemId": item_id,
        })))
    }
}

#[async_trait]
impl McpTool for RemoveListItemTool {
    fn name(&self) -> &'static str {
        REMOVE_LIST_ITEM
    }

    fn description(&self) -> &'static str {
        "Remove an item from a shopping list."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                ("listId", PropertySchema::string("ID of the shopping list")),
                ("itemId", PropertySchema::string("ID of the item to remove")),
            ],
            &["listId", "itemId"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::REQUIRES_SESSION
            | ToolCapabilities::READS_DATA
            | ToolCapabilities::WRITES_DATA
            | ToolCapabilities::SHOPPING_LISTS
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let verdict = validate_required_string(field(&args, "listId"), "List ID")
            .and_then(|()| validate_required_string(field(&args, "itemId"), "Item ID"));
        if let Err(e) = verdict {
            return Ok(ToolResult::error(e.message()));
        }

        let list_id = non_empty_str(&args, "listId").unwrap_or_default();
        let item_id = non_empty_str(&args, "itemId").unwrap_or_default();
        tracing::debug!(list_id, item_id, "Removing shopping list item");

        Ok(Self::run(list_id, item_id, ctx)
            .await
            .unwrap_or_else(|e| ToolResult::failure(Self::ACTION, &e)))
    }
}

// ============================================================================
// Tool registration
// ============================================================================

/// Create all shopping list tools
#[must_use]
pub fn create_shopping_list_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(GetListsTool),
        Box::new(GetListItemsTool),
        Box::new(AddListItemTool),
        Box::new(RemoveListItemTool),
    ]
}
