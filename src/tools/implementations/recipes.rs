// ABOUTME: Read-only recipe tools for the AnyList account.
// ABOUTME: Implements get_recipes with name/collection filters and get_recipe_collections.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Tools
//!
//! - `GetRecipesTool` - All recipes, optionally filtered by a case-insensitive
//!   name search and by collection membership
//! - `GetRecipeCollectionsTool` - All recipe collections

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::constants::tools::{GET_RECIPES, GET_RECIPE_COLLECTIONS};
use crate::errors::AppResult;
use crate::formatters::{format_recipe, format_recipe_collection};
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::models::Recipe;
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};
use crate::utils::args::non_empty_str;

/// Recipes without a name never match a search
fn matches_search(recipe: &Recipe, needle: &str) -> bool {
    recipe
        .name
        .as_deref()
        .is_some_and(|name| name.to_lowercase().contains(needle))
}

// ============================================================================
// GetRecipesTool
// ============================================================================

/// Tool listing recipes.
pub struct GetRecipesTool;

impl GetRecipesTool {
    const ACTION: &'static str = "get recipes";

    async fn run(
        search: Option<String>,
        collection_id: Option<&str>,
        ctx: &ToolExecutionContext,
    ) -> AppResult<ToolResult> {
        let session = ctx.session().await?;
        let mut recipes = session.recipes().await?;

        if let Some(needle) = search.as_deref() {
            recipes.retain(|recipe| matches_search(recipe, needle));
        }

        if let Some(collection_id) = collection_id {
            let collections = session.recipe_collections().await?;
            let Some(collection) = collections
                .iter()
                .find(|collection| collection.identifier == collection_id)
            else {
                return Ok(ToolResult::not_found("Collection", collection_id));
            };

            recipes.retain(|recipe| collection.contains(&recipe.identifier));
        }

        let recipes: Vec<_> = recipes.iter().map(format_recipe).collect();
        Ok(ToolResult::ok(json!({
            "count": recipes.len(),
            "recipes": recipes,
        })))
    }
}

#[async_trait]
impl McpTool for GetRecipesTool {
    fn name(&self) -> &'static str {
        GET_RECIPES
    }

    fn description(&self) -> &'static str {
        "Get all recipes. Optionally filter by name search or collection."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                (
                    "search",
                    PropertySchema::string(
                        "Search term to filter recipes by name (case-insensitive)",
                    ),
                ),
                (
                    "collectionId",
                    PropertySchema::string("Filter by recipe collection ID"),
                ),
            ],
            &[],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::REQUIRES_SESSION | ToolCapabilities::READS_DATA | ToolCapabilities::RECIPES
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let search = non_empty_str(&args, "search").map(str::to_lowercase);
        let collection_id = non_empty_str(&args, "collectionId");
        tracing::debug!(?search, ?collection_id, "Getting recipes");

        Ok(Self::run(search, collection_id, ctx)
            .await
            .unwrap_or_else(|e| ToolResult::failure(Self::ACTION, &e)))
    }
}

// ============================================================================
// GetRecipeCollectionsTool
// ============================================================================

/// Tool listing recipe collections.
pub struct GetRecipeCollectionsTool;

impl GetRecipeCollectionsTool {
    const ACTION: &'static str = "get collections";

    async fn run(ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let collections = ctx.session().await?.recipe_collections().await?;
        let collections: Vec<_> = collections.iter().map(format_recipe_collection).collect();

        Ok(ToolResult::ok(json!({
            "count": collections.len(),
            "collections": collections,
        })))
    }
}

#[async_trait]
impl McpTool for GetRecipeCollectionsTool {
    fn name(&self) -> &'static str {
        GET_RECIPE_COLLECTIONS
    }

    fn description(&self) -> &'static str {
        "Get all recipe collections."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(Vec::new(), &[])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::REQUIRES_SESSION | ToolCapabilities::READS_DATA | ToolCapabilities::RECIPES
    }

    async fn execute(&self, _args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        tracing::debug!("Getting recipe collections");

        Ok(Self::run(ctx)
            .await
            .unwrap_or_else(|e| ToolResult::failure(Self::ACTION, &e)))
    }
}

/// Create all recipe tools
#[must_use]
pub fn create_recipe_tools() -> Vec<Box<dyn McpTool>> {
    vec![Box::new(GetRecipesTool), Box::new(GetRecipeCollectionsTool)]
}
