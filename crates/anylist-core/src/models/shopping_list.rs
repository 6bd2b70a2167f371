// ABOUTME: Shopping list models for lists and their items
// ABOUTME: ShoppingList, ListItem and the NewListItem draft
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A shopping list with its items
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    /// Identifier assigned by the collaborator
    pub identifier: String,
    /// List name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Items in list order
    #[serde(default)]
    pub items: Vec<ListItem>,
}

impl ShoppingList {
    /// Find an item by identifier
    #[must_use]
    pub fn item_by_id(&self, identifier: &str) -> Option<&ListItem> {
        self.items.iter().find(|item| item.identifier == identifier)
    }
}

/// A single shopping list item
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// Identifier assigned by the collaborator
    pub identifier: String,
    /// Item name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Quantity text, e.g. "2 lbs"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Additional notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Checked off
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl ListItem {
    /// Whether the item has been checked off
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.checked.unwrap_or(false)
    }
}

/// Draft of a new list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListItem {
    /// Item name
    pub name: String,
    /// Quantity text
    pub quantity: Option<String>,
    /// Additional notes
    pub details: Option<String>,
}
