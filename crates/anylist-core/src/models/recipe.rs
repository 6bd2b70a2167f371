// ABOUTME: Recipe box models: recipes, ingredients and recipe collections
// ABOUTME: Read-only records; the server never creates or edits recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A recipe from the account's recipe box
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Identifier assigned by the collaborator
    pub identifier: String,
    /// Recipe name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Name of the source (cookbook, website)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    /// Source URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Preparation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<i64>,
    /// Cooking time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<i64>,
    /// Servings text, e.g. "4 servings"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<String>,
    /// Star rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
    /// Ordered ingredient lines
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Ordered preparation steps
    #[serde(default)]
    pub preparation_steps: Vec<String>,
}

impl Recipe {
    /// Summary reference suitable for embedding in a calendar event
    #[must_use]
    pub fn to_ref(&self) -> RecipeRef {
        RecipeRef {
            identifier: self.identifier.clone(),
            name: self.name.clone(),
        }
    }
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Ingredient line as typed by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_ingredient: Option<String>,
    /// Parsed ingredient name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Parsed quantity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Parsed note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Minimal recipe reference embedded in calendar events
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRef {
    /// Recipe identifier
    pub identifier: String,
    /// Recipe name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A named group of recipes
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCollection {
    /// Identifier assigned by the collaborator
    pub identifier: String,
    /// Collection name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Member recipe identifiers
    #[serde(default)]
    pub recipe_ids: Vec<String>,
}

impl RecipeCollection {
    /// Whether the collection contains the given recipe
    #[must_use]
    pub fn contains(&self, recipe_id: &str) -> bool {
        self.recipe_ids.iter().any(|id| id == recipe_id)
    }
}
