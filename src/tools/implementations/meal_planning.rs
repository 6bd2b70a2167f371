// ABOUTME: Meal planning calendar event tools for the AnyList account.
// ABOUTME: Implements get, create, update and delete of meal planning events.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Planning Tools
//!
//! - `GetMealPlanningEventsTool` - List events, optionally within a date range
//! - `CreateMealPlanningEventTool` - Add a meal to the calendar
//! - `UpdateMealPlanningEventTool` - Partially update an event
//! - `DeleteMealPlanningEventTool` - Remove an event

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::constants::tools::{
    CREATE_MEAL_PLANNING_EVENT, DELETE_MEAL_PLANNING_EVENT, GET_MEAL_PLANNING_EVENTS,
    UPDATE_MEAL_PLANNING_EVENT,
};
use crate::errors::AppResult;
use crate::formatters::format_event;
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::models::{CalendarEvent, DateValue, NewEvent};
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};
use crate::utils::args::{field, non_empty_str, string_update};
use crate::utils::dates::{date_prefix, is_within_range, parse_date, parse_date_value};
use crate::validation::{
    validate_event_input, validate_event_update_input, validate_required_string,
};

// ============================================================================
// Helper functions
// ============================================================================

/// Calendar day of an event, whichever form the collaborator returned
fn event_day(event: &CalendarEvent) -> Option<NaiveDate> {
    match event.date.as_ref()? {
        DateValue::Native(day) => Some(*day),
        DateValue::Text(text) => parse_date(text).or_else(|| date_prefix(text)),
    }
}

/// Whether an event falls inside the optional inclusive bounds.
///
/// Events without a usable date are dropped once any bound is set.
fn matches_range(event: &CalendarEvent, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    let day = event_day(event);
    match (start, end) {
        (Some(_), Some(_)) => is_within_range(day, start, end),
        (Some(start), None) => day.is_some_and(|day| day >= start),
        (None, Some(end)) => day.is_some_and(|day| day <= end),
        (None, None) => true,
    }
}

// ============================================================================
// GetMealPlanningEventsTool
// ============================================================================

/// Tool listing meal planning calendar events.
pub struct GetMealPlanningEventsTool;

impl GetMealPlanningEventsTool {
    const ACTION: &'static str = "get events";

    async fn run(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        ctx: &ToolExecutionContext,
    ) -> AppResult<ToolResult> {
        let calendar = ctx.session().await?.meal_planning_calendar().await?;

        let events: Vec<_> = calendar
            .events
            .iter()
            .filter(|event| matches_range(event, start, end))
            .map(format_event)
            .collect();

        Ok(ToolResult::ok(json!({
            "count": events.len(),
            "events": events,
        })))
    }
}

#[async_trait]
impl McpTool for GetMealPlanningEventsTool {
    fn name(&self) -> &'static str {
        GET_MEAL_PLANNING_EVENTS
    }

    fn description(&self) -> &'static str {
        "Get meal planning calendar events. Optionally filter by date range."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                (
                    "startDate",
                    PropertySchema::string(
                        "Start date filter (YYYY-MM-DD). Events on or after this date.",
                    ),
                ),
                (
                    "endDate",
                    PropertySchema::string(
                        "End date filter (YYYY-MM-DD). Events on or before this date.",
                    ),
                ),
            ],
            &[],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::REQUIRES_SESSION
            | ToolCapabilities::READS_DATA
            | ToolCapabilities::MEAL_PLANNING
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        // Unparseable bounds are ignored rather than rejected
        let start = non_empty_str(&args, "startDate").and_then(parse_date);
        let end = non_empty_str(&args, "endDate").and_then(parse_date);
        tracing::debug!(?start, ?end, "Getting meal planning events");

        Ok(Self::run(start, end, ctx)
            .await
            .unwrap_or_else(|e| ToolResult::failure(Self::ACTION, &e)))
    }
}

// ============================================================================
// CreateMealPlanningEventTool
// ============================================================================

/// Tool creating a meal planning calendar event.
pub struct CreateMealPlanningEventTool;

impl CreateMealPlanningEventTool {
    const ACTION: &'static str = "create event";

    async fn run(draft: NewEvent, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let event = ctx.session().await?.create_event(draft).await?;
        tracing::info!(event_id = %event.identifier, "Created meal planning event");

        Ok(ToolResult::ok(json!({
            "success": true,
            "message": "Event created successfully",
            "event": format_event(&event),
        })))
    }
}

#[async_trait]
impl McpTool for CreateMealPlanningEventTool {
    fn name(&self) -> &'static str {
        CREATE_MEAL_PLANNING_EVENT
    }

    fn description(&self) -> &'static str {
        "Create a new meal planning calendar event. Use this to add meals to the calendar."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                ("date", PropertySchema::string("Event date (YYYY-MM-DD)")),
                ("title", PropertySchema::string("Event title (e.g., meal name)")),
                ("details", PropertySchema::string("Additional notes or details")),
                (
                    "labelId",
                    PropertySchema::string(
                        "ID of a calendar label to apply (e.g., Breakfast, Lunch, Dinner)",
                    ),
                ),
                ("recipeId", PropertySchema::string("ID of a linked recipe")),
            ],
            &["date", "title"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::REQUIRES_SESSION
            | ToolCapabilities::WRITES_DATA
            | ToolCapabilities::MEAL_PLANNING
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        tracing::debug!("Creating meal planning event");

        if let Err(e) = validate_event_input(&args) {
            return Ok(ToolResult::error(e.message()));
        }

        let Some(date) = field(&args, "date").and_then(parse_date_value) else {
            return Ok(ToolResult::error("Invalid date format. Use YYYY-MM-DD"));
        };

        let draft = NewEvent {
            date,
            title: non_empty_str(&args, "title").unwrap_or_default().to_owned(),
            details: non_empty_str(&args, "details").map(str::to_owned),
            label_id: non_empty_str(&args, "labelId").map(str::to_owned),
            recipe_id: non_empty_str(&args, "recipeId").map(str::to_owned),
        };

        Ok(Self::run(draft, ctx)
            .await
            .unwrap_or_else(|e| ToolResult::failure(Self::ACTION, &e)))
    }
}

// ============================================================================
// UpdateMealPlanningEventTool
// ============================================================================

/// Field changes requested by an update call
#[derive(Debug, Default)]
struct EventChanges {
    date: Option<NaiveDate>,
    title: Option<Option<String>>,
    details: Option<Option<String>>,
    label_id: Option<Option<String>>,
    recipe_id: Option<Option<String>>,
}

impl EventChanges {
    fn apply(self, event: &mut CalendarEvent) {
        if let Some(date) = self.date {
            event.date = Some(DateValue::Native(date));
        }
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(details) = self.details {
            event.details = details;
        }
        if let Some(label_id) = self.label_id {
            event.label_id = label_id;
        }
        if let Some(recipe_id) = self.recipe_id {
            event.recipe_id = recipe_id;
        }
    }
}

/// Tool updating a meal planning calendar event.
pub struct UpdateMealPlanningEventTool;

impl UpdateMealPlanningEventTool {
    const ACTION: &'static str = "update event";

    fn changes(args: &Value) -> Result<EventChanges, ToolResult> {
        let update = |key: &str| {
            string_update(UPDATE_MEAL_PLANNING_EVENT, args, key)
                .map_err(|e| ToolResult::error(e.to_string()))
        };

        Ok(EventChanges {
            // Empty dates leave the stored date alone
            date: non_empty_str(args, "date").and_then(parse_date),
            title: update("title")?,
            details: update("details")?,
            label_id: update("labelId")?,
            recipe_id: update("recipeId")?,
        })
    }

    async fn run(
        event_id: &str,
        changes: EventChanges,
        ctx: &ToolExecutionContext,
    ) -> AppResult<ToolResult> {
        let session = ctx.session().await?;
        let calendar = session.meal_planning_calendar().await?;

        let Some(mut event) = calendar.event_by_id(event_id).cloned() else {
            return Ok(ToolResult::not_found("Event", event_id));
        };

        changes.apply(&mut event);
        let saved = session.save_event(&event).await?;
        tracing::info!(event_id, "Updated meal planning event");

        Ok(ToolResult::ok(json!({
            "success": true,
            "message": "Event updated successfully",
            "event": format_event(&saved),
        })))
    }
}

#[async_trait]
impl McpTool for UpdateMealPlanningEventTool {
    fn name(&self) -> &'static str {
        UPDATE_MEAL_PLANNING_EVENT
    }

    fn description(&self) -> &'static str {
        "Update an existing meal planning calendar event."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                ("eventId", PropertySchema::string("ID of the event to update")),
                ("date", PropertySchema::string("New date (YYYY-MM-DD)")),
                ("title", PropertySchema::string("Updated title")),
                ("details", PropertySchema::string("Updated details")),
                ("labelId", PropertySchema::string("Updated label ID")),
                ("recipeId", PropertySchema::string("Updated recipe ID")),
            ],
            &["eventId"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::REQUIRES_SESSION
            | ToolCapabilities::READS_DATA
            | ToolCapabilities::WRITES_DATA
            | ToolCapabilities::MEAL_PLANNING
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        if let Err(e) = validate_event_update_input(&args) {
            return Ok(ToolResult::error(e.message()));
        }

        let event_id = non_empty_str(&args, "eventId").unwrap_or_default();
        tracing::debug!(event_id, "Updating meal planning event");

        let changes = match Self::changes(&args) {
            Ok(changes) => changes,
            Err(result) => return Ok(result),
        };

        Ok(Self::run(event_id, changes, ctx)
            .await
            .unwrap_or_else(|e| ToolResult::failure(Self::ACTION, &e)))
    }
}

// ============================================================================
// DeleteMealPlanningEventTool
// ============================================================================

/// Tool deleting a meal planning calendar event.
pub struct DeleteMealPlanningEventTool;

impl DeleteMealPlanningEventTool {
    const ACTION: &'static str = "delete event";

    async fn run(event_id: &str, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        let session = ctx.session().await?;
        let calendar = session.meal_planning_calendar().await?;

        if calendar.event_by_id(event_id).is_none() {
            return Ok(ToolResult::not_found("Event", event_id));
        }

        session.delete_event(event_id).await?;
        tracing::info!(event_id, "Deleted meal planning event");

        Ok(ToolResult::ok(json!({
            "success": true,
            "message": "Event deleted successfully",
            "eventId": event_id,
        })))
    }
}

#[async_trait]
impl McpTool for DeleteMealPlanningEventTool {
    fn name(&self) -> &'static str {
        DELETE_MEAL_PLANNING_EVENT
    }

    fn description(&self) -> &'static str {
        "Delete a meal planning calendar event."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![("eventId", PropertySchema::string("ID of the event to delete"))],
            &["eventId"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::REQUIRES_SESSION
            | ToolCapabilities::READS_DATA
            | ToolCapabilities::WRITES_DATA
            | ToolCapabilities::MEAL_PLANNING
    }

    async fn execute(&self, args: Value, ctx: &ToolExecutionContext) -> AppResult<ToolResult> {
        if let Err(e) = validate_required_string(field(&args, "eventId"), "Event ID") {
            return Ok(ToolResult::error(e.message()));
        }

        let event_id = non_empty_str(&args, "eventId").unwrap_or_default();
        tracing::debug!(event_id, "Deleting meal planning event");

        Ok(Self::run(event_id, ctx)
            .await
            .unwrap_or_else(|e| ToolResult::failure(Self::ACTION, &e)))
    }
}

// ============================================================================
// Tool registration
// ============================================================================

/// Create all meal planning tools
#[must_use]
pub fn create_meal_planning_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(GetMealPlanningEventsTool),
        Box::new(CreateMealPlanningEventTool),
        Box::new(UpdateMealPlanningEventTool),
        Box::new(DeleteMealPlanningEventTool),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_on(date: DateValue) -> CalendarEvent {
        CalendarEvent {
            identifier: "E1".to_owned(),
            date: Some(date),
            ..CalendarEvent::default()
        }
    }

    #[test]
    fn test_event_day_accepts_timestamps() {
        let event = event_on(DateValue::Text("2024-03-15T18:00:00.000Z".to_owned()));
        assert_eq!(event_day(&event), parse_date("2024-03-15"));
    }

    #[test]
    fn test_open_ended_ranges() {
        let event = event_on(DateValue::Text("2024-03-15".to_owned()));

        assert!(matches_range(&event, parse_date("2024-03-15"), None));
        assert!(!matches_range(&event, parse_date("2024-03-16"), None));
        assert!(matches_range(&event, None, parse_date("2024-03-15")));
        assert!(!matches_range(&CalendarEvent::default(), None, parse_date("2024-03-15")));
        assert!(matches_range(&CalendarEvent::default(), None, None));
    }

    #[test]
    fn test_changes_skip_absent_keys() {
        let mut event = CalendarEvent {
            identifier: "E1".to_owned(),
            title: Some("Tacos".to_owned()),
            details: Some("spicy".to_owned()),
            ..CalendarEvent::default()
        };

        let changes =
            UpdateMealPlanningEventTool::changes(&json!({"eventId": "E1", "details": ""}))
                .unwrap();
        changes.apply(&mut event);

        assert_eq!(event.title.as_deref(), Some("Tacos"));
        assert_eq!(event.details.as_deref(), Some(""));
    }

    #[test]
    fn test_changes_reject_wrong_type() {
        let result =
            UpdateMealPlanningEventTool::changes(&json!({"eventId": "E1", "title": 7})).unwrap_err();
        assert!(result.is_error);
    }
}
