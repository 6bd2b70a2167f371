// ABOUTME: Calendar label tools for categorizing meal planning events.
// ABOUTME: Implements get, create, update and delete of calendar labels.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Label Tools
//!
//! Labels (Breakfast, Lunch, Dinner, ...) are fetched together with the meal
//! planning calendar, so every label tool loads the calendar first.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::constants::tools::{CREATE_LABEL, DELETE_LABEL, GET_LABELS, UPDATE_LABEL};
use crate::errors::AppResult;
use crate::formatters::format_label;
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::models::{Label, NewLabel};
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};
use crate::utils::args::{field, non_empty_str, string_update};
use crate::validation::{validate_label_input, validate_label_update_input, validate_required_string};

// ============================================================================
// GetLabelsTool
// ============================================================================

/// Tool listing calendar labels.
pub struct GetLabelsTool;

impl GetLabelsTool {
    const ACTION: &'static str = "get labels";

    async fn run(ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let calendar = ctx.session().await?.meal_planning_calendar().await?;
        let labels: Vec<_> = calendar.labels.iter().map(format_label).collect();

        Ok(ToolResult::ok(json!({
            "count": labels.len(),
            "labels": labels,
        })))
    }
}

#[async_trait]
impl McpTool for GetLabelsTool {
    fn name(&self) -> &'static str {
        GET_LABELS
    }

    fn description(&self) -> &'static str {
        "Get all meal planning calendar labels (e.g., Breakfast, Lunch, Dinner)."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(Vec::new(), &[])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::REQUIRES_SESSION | ToolCapabilities::READS_DATA | ToolCapabilities::LABELS
    }

    async fn execute(&self, _args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        tracing::debug!("Getting calendar labels");

        Ok(Self::run(ctx)
            .await
            .unwrap_or_else(|e| ToolResult::failure(Self::ACTION, &e)))
    }
}

// ============================================================================
// CreateLabelTool
// ============================================================================

/// Tool creating a calendar label.
pub struct CreateLabelTool;

impl CreateLabelTool {
    const ACTION: &'static str = "create label";

    async fn run(draft: NewLabel, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let label = ctx.session().await?.create_label(draft).await?;
        tracing::info!(label_id = %label.identifier, "Created calendar label");

        Ok(ToolResult::ok(json!({
            "success": true,
            "message": "Label created successfully",
            "label": format_label(&label),
        })))
    }
}

#[async_trait]
impl McpTool for CreateLabelTool {
    fn name(&self) -> &'static str {
        CREATE_LABEL
    }

    fn description(&self) -> &'static str {
        "Create a new calendar label for categorizing meals."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                (
                    "name",
                    PropertySchema::string(r#"Label name (e.g., "Breakfast", "Dinner", "Snack")"#),
                ),
                (
                    "hexColor",
                    PropertySchema::string(r##"Hex color code (e.g., "#FF5733")"##),
                ),
            ],
            &["name"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::REQUIRES_SESSION | ToolCapabilities::WRITES_DATA | ToolCapabilities::LABELS
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        tracing::debug!("Creating calendar label");

        if let Err(e) = validate_label_input(&args) {
            return Ok(ToolResult::error(e.message()));
        }

        let draft = NewLabel {
            name: non_empty_str(&args, "name").unwrap_or_default().to_owned(),
            hex_color: non_empty_str(&args, "hexColor").map(str::to_owned),
        };

        Ok(Self::run(draft, ctx)
            .await
            .unwrap_or_else(|e| ToolResult::failure(Self::ACTION, &e)))
    }
}

// ============================================================================
// UpdateLabelTool
// ============================================================================

/// Tool updating a calendar label.
pub struct UpdateLabelTool;

impl UpdateLabelTool {
    const ACTION: &'static str = "update label";

    async fn run(
        label_id: &str,
        name: Option<Option<String>>,
        hex_color: Option<Option<String>>,
        ctx: &ToolExecutionContext,
    ) -> AppResult<ToolResult> {
        let session = ctx.session().await?;
        let calendar = session.meal_planning_calendar().await?;

        let Some(mut label) = calendar.label_by_id(label_id).cloned() else {
            return Ok(ToolResult::not_found("Label", label_id));
        };

        apply_label_changes(&mut label, name, hex_color);
        let saved = session.save_label(&label).await?;
        tracing::info!(label_id, "Updated calendar label");

        Ok(ToolResult::ok(json!({
            "success": true,
            "message": "Label updated successfully",
            "label": format_label(&saved),
        })))
    }
}

fn apply_label_changes(
    label: &mut Label,
    name: Option<Option<String>>,
    hex_color: Option<Option<String>>,
) {
    if let Some(name) = name {
        label.name = name;
    }
    if let Some(hex_color) = hex_color {
        label.hex_color = hex_color;
    }
}

#[async_trait]
impl McpTool for UpdateLabelTool {
    fn name(&self) -> &'static str {
        UPDATE_LABEL
    }

    fn description(&self) -> &'static str {
        "Update an existing calendar label."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                ("labelId", PropertySchema::string("ID of the label to update")),
                ("name", PropertySchema::string("Updated name")),
                (
                    "hexColor",
                    PropertySchema::string(r##"Updated hex color (e.g., "#FF5733")"##),
                ),
            ],
            &["labelId"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::REQUIRES_SESSION
            | ToolCapabilities::READS_DATA
            | ToolCapabilities::WRITES_DATA
            | ToolCapabilities::LABELS
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        if let Err(e) = validate_label_update_input(&args) {
            return Ok(ToolResult::error(e.message()));
        }

        let label_id = non_empty_str(&args, "labelId").unwrap_or_default();
        tracing::debug!(label_id, "Updating calendar label");

        let changes = string_update(UPDATE_LABEL, &args, "name").and_then(|name| {
            string_update(UPDATE_LABEL, &args, "hexColor").map(|hex_color| (name, hex_color))
        });
        let (name, hex_color) = match changes {
            Ok(changes) => changes,
            Err(e) => return Ok(ToolResult::error(e.to_string())),
        };

        Ok(Self::run(label_id, name, hex_color, ctx)
            .await
            .unwrap_or_else(|e| ToolResult::failure(Self::ACTION, &e)))
    }
}

// ============================================================================
// DeleteLabelTool
// ============================================================================

/// Tool deleting a calendar label.
pub struct DeleteLabelTool;

impl DeleteLabelTool {
    const ACTION: &'static str = "delete label";

    async fn run(label_id: &str, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let session = ctx.session().await?;
        let calendar = session.meal_planning_calendar().await?;

        if calendar.label_by_id(label_id).is_none() {
            return Ok(ToolResult::not_found("Label", label_id));
        }

        session.delete_label(label_id).await?;
        tracing::info!(label_id, "Deleted calendar label");

        Ok(ToolResult::ok(json!({
            "success": true,
            "message": "Label deleted successfully",
            "labelId": label_id,
        })))
    }
}

#[async_trait]
impl McpTool for DeleteLabelTool {
    fn name(&self) -> &'static str {
        DELETE_LABEL
    }

    fn description(&self) -> &'static str {
        "Delete a calendar label."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![("labelId", PropertySchema::string("ID of the label to delete"))],
            &["labelId"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::REQUIRES_SESSION
            | ToolCapabilities::READS_DATA
            | ToolCapabilities::WRITES_DATA
            | ToolCapabilities::LABELS
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        if let Err(e) = validate_required_string(field(&args, "labelId"), "Label ID") {
            return Ok(ToolResult::error(e.message()));
        }

        let label_id = non_empty_str(&args, "labelId").unwrap_or_default();
        tracing::debug!(label_id, "Deleting calendar label");

        Ok(Self::run(label_id, ctx)
            .await
            .unwrap_or_else(|e| ToolResult::failure(Self::ACTION, &e)))
    }
}

// ============================================================================
// Tool registration
// ============================================================================

/// Create all calendar label tools
#[must_use]
pub fn create_label_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(GetLabelsTool),
        Box::new(CreateLabelTool),
        Box::new(UpdateLabelTool),
        Box::new(DeleteLabelTool),
    ]
}
