// ABOUTME: Meal planning calendar models for events and calendar labels
// ABOUTME: CalendarEvent, Label, DateValue and the drafts handed to the collaborator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::recipe::RecipeRef;

/// Calendar day as handed back by the collaborator.
///
/// Some backends return a native date, others a pre-formatted string (which
/// may carry a time component). Formatting normalizes both forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    /// Native calendar day
    Native(NaiveDate),
    /// Pre-formatted text
    Text(String),
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self::Native(date)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A meal planning calendar event
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Identifier assigned by the collaborator
    pub identifier: String,
    /// Calendar day of the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateValue>,
    /// Event title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Reference to a calendar label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_id: Option<String>,
    /// Embedded label snapshot resolved by the collaborator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    /// Reference to a recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    /// Embedded recipe summary resolved by the collaborator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<RecipeRef>,
}

/// A meal planning calendar label (Breakfast, Lunch, Dinner, ...)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    /// Identifier assigned by the collaborator
    pub identifier: String,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Color in `#RRGGBB` form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,
    /// Ordering hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_index: Option<i64>,
}

/// Events and labels, fetched together from the collaborator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanningCalendar {
    /// All calendar events
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
    /// All calendar labels
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl MealPlanningCalendar {
    /// Find an event by identifier
    #[must_use]
    pub fn event_by_id(&self, identifier: &str) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| event.identifier == identifier)
    }

    /// Find a label by identifier
    #[must_use]
    pub fn label_by_id(&self, identifier: &str) -> Option<&Label> {
        self.labels.iter().find(|label| label.identifier == identifier)
    }
}

/// Draft of a new calendar event; the collaborator assigns the identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    /// Calendar day
    pub date: NaiveDate,
    /// Event title
    pub title: String,
    /// Free-form notes
    pub details: Option<String>,
    /// Label reference
    pub label_id: Option<String>,
    /// Recipe reference
    pub recipe_id: Option<String>,
}

/// Draft of a new calendar label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLabel {
    /// Display name
    pub name: String,
    /// Color in `#RRGGBB` form
    pub hex_color: Option<String>,
}
