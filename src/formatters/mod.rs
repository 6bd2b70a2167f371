// ABOUTME: Response shaping for tool results with fixed key sets and default substitution
// ABOUTME: Maps events, labels, recipes, collections, lists and items into stable JSON shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Response Formatters
//!
//! Pure, total mappings from collaborator records to the JSON shapes returned
//! to the assistant host. Every shape has a fixed key set; missing optional
//! values are substituted rather than omitted:
//!
//! - text fields default to `""`
//! - references and numbers default to `null` (empty strings and zero count as missing)
//! - `sortIndex` defaults to `0`, `checked` to `false`, sequences to `[]`

use serde::Serialize;

use crate::models::{
    CalendarEvent, DateValue, Ingredient, Label, ListItem, Recipe, RecipeCollection, RecipeRef,
    ShoppingList,
};
use crate::utils::dates::{date_prefix, parse_date, to_date_text};

/// Formatted calendar event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    /// Event identifier
    pub id: String,
    /// `YYYY-MM-DD`, or `""` when unknown
    pub date: String,
    /// Title
    pub title: String,
    /// Notes
    pub details: String,
    /// Label reference
    pub label_id: Option<String>,
    /// Embedded label
    pub label: Option<LabelResponse>,
    /// Recipe reference
    pub recipe_id: Option<String>,
    /// Embedded recipe summary
    pub recipe: Option<RecipeSummary>,
}

/// Formatted calendar label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelResponse {
    /// Label identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// `#RRGGBB` color
    pub hex_color: Option<String>,
    /// Ordering hint
    pub sort_index: i64,
}

/// Minimal recipe reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeSummary {
    /// Recipe identifier
    pub id: String,
    /// Recipe name
    pub name: String,
}

/// Formatted full recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    /// Recipe identifier
    pub id: String,
    /// Recipe name
    pub name: String,
    /// Note
    pub note: String,
    /// Source name
    pub source_name: String,
    /// Source URL
    pub source_url: String,
    /// Preparation time
    pub prep_time: Option<i64>,
    /// Cooking time
    pub cook_time: Option<i64>,
    /// Servings text
    pub servings: String,
    /// Star rating
    pub rating: Option<i64>,
    /// Ingredient lines
    pub ingredients: Vec<IngredientResponse>,
    /// Preparation steps
    pub preparation_steps: Vec<String>,
}

/// Formatted ingredient line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientResponse {
    /// Line as typed
    pub raw: String,
    /// Parsed name
    pub name: String,
    /// Parsed quantity
    pub quantity: String,
    /// Parsed note
    pub note: String,
}

/// Formatted recipe collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResponse {
    /// Collection identifier
    pub id: String,
    /// Collection name
    pub name: String,
    /// Member recipe identifiers
    pub recipe_ids: Vec<String>,
    /// Number of member recipes
    pub recipe_count: usize,
}

/// Formatted shopping list without items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    /// List identifier
    pub id: String,
    /// List name
    pub name: String,
    /// Number of items, checked or not
    pub item_count: usize,
}

/// Formatted shopping list with its (filtered) items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListWithItemsResponse {
    /// List identifier
    pub id: String,
    /// List name
    pub name: String,
    /// Items, unchecked only unless requested otherwise
    pub items: Vec<ItemResponse>,
}

/// Formatted shopping list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemResponse {
    /// Item identifier
    pub id: String,
    /// Item name
    pub name: String,
    /// Quantity text
    pub quantity: String,
    /// Notes
    pub details: String,
    /// Checked off
    pub checked: bool,
}

fn text_or_empty(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|text| !text.is_empty()).cloned()
}

fn non_zero(value: Option<i64>) -> Option<i64> {
    value.filter(|number| *number != 0)
}

/// Normalize a collaborator date into `YYYY-MM-DD`.
///
/// Native dates are formatted directly. Strings are re-rendered when they hold
/// a date or a timestamp with a leading date; anything else yields `""`.
#[must_use]
pub fn format_date_value(date: Option<&DateValue>) -> String {
    match date {
        None => String::new(),
        Some(DateValue::Native(day)) => to_date_text(Some(*day)),
        Some(DateValue::Text(text)) => to_date_text(parse_date(text).or_else(|| date_prefix(text))),
    }
}

/// Format a calendar event
#[must_use]
pub fn format_event(event: &CalendarEvent) -> EventResponse {
    EventResponse {
        id: event.identifier.clone(),
        date: format_date_value(event.date.as_ref()),
        title: text_or_empty(event.title.as_ref()),
        details: text_or_empty(event.details.as_ref()),
        label_id: non_empty(event.label_id.as_ref()),
        label: event.label.as_ref().map(format_label),
        recipe_id: non_empty(event.recipe_id.as_ref()),
        recipe: event.recipe.as_ref().map(format_recipe_summary),
    }
}

/// Format a calendar label
#[must_use]
pub fn format_label(label: &Label) -> LabelResponse {
    LabelResponse {
        id: label.identifier.clone(),
        name: text_or_empty(label.name.as_ref()),
        hex_color: non_empty(label.hex_color.as_ref()),
        sort_index: label.sort_index.unwrap_or(0),
    }
}

/// Format a recipe reference
#[must_use]
pub fn format_recipe_summary(recipe: &RecipeRef) -> RecipeSummary {
    RecipeSummary {
        id: recipe.identifier.clone(),
        name: text_or_empty(recipe.name.as_ref()),
    }
}

/// Format a full recipe
#[must_use]
pub fn format_recipe(recipe: &Recipe) -> RecipeResponse {
    RecipeResponse {
        id: recipe.identifier.clone(),
        name: text_or_empty(recipe.name.as_ref()),
        note: text_or_empty(recipe.note.as_ref()),
        source_name: text_or_empty(recipe.source_name.as_ref()),
        source_url: text_or_empty(recipe.source_url.as_ref()),
        prep_time: non_zero(recipe.prep_time),
        cook_time: non_zero(recipe.cook_time),
        servings: text_or_empty(recipe.servings.as_ref()),
        rating: non_zero(recipe.rating),
        ingredients: recipe.ingredients.iter().map(format_ingredient).collect(),
        preparation_steps: recipe.preparation_steps.clone(),
    }
}

/// Format an ingredient line
#[must_use]
pub fn format_ingredient(ingredient: &Ingredient) -> IngredientResponse {
    IngredientResponse {
        raw: text_or_empty(ingredient.raw_ingredient.as_ref()),
        name: text_or_empty(ingredient.name.as_ref()),
        quantity: text_or_empty(ingredient.quantity.as_ref()),
        note: text_or_empty(ingredient.note.as_ref()),
    }
}

/// Format a recipe collection
#[must_use]
pub fn format_recipe_collection(collection: &RecipeCollection) -> CollectionResponse {
    CollectionResponse {
        id: collection.identifier.clone(),
        name: text_or_empty(collection.name.as_ref()),
        recipe_ids: collection.recipe_ids.clone(),
        recipe_count: collection.recipe_ids.len(),
    }
}

/// Format a shopping list summary
#[must_use]
pub fn format_list(list: &ShoppingList) -> ListResponse {
    ListResponse {
        id: list.identifier.clone(),
        name: text_or_empty(list.name.as_ref()),
        item_count: list.items.len(),
    }
}

/// Format a shopping list with items, dropping checked items unless `include_checked`
#[must_use]
pub fn format_list_with_items(list: &ShoppingList, include_checked: bool) -> ListWithItemsResponse {
    ListWithItemsResponse {
        id: list.identifier.clone(),
        name: text_or_empty(list.name.as_ref()),
        items: list
            .items
            .iter()
            .filter(|item| include_checked || !item.is_checked())
            .map(format_item)
            .collect(),
    }
}

/// Format a shopping list item
#[must_use]
pub fn format_item(item: &ListItem) -> ItemResponse {
    ItemResponse {
        id: item.identifier.clone(),
        name: text_or_empty(item.name.as_ref()),
        quantity: text_or_empty(item.quantity.as_ref()),
        details: text_or_empty(item.details.as_ref()),
        checked: item.is_checked(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    #[test]
    fn test_event_defaults_are_substituted() {
        let event = CalendarEvent {
            identifier: "E1".to_owned(),
            label_id: Some(String::new()),
            ..CalendarEvent::default()
        };

        let formatted = serde_json::to_value(format_event(&event)).unwrap();

        assert_eq!(
            formatted,
            json!({
                "id": "E1",
                "date": "",
                "title": "",
                "details": "",
                "labelId": null,
                "label": null,
                "recipeId": null,
                "recipe": null,
            })
        );
    }

    #[test]
    fn test_date_value_normalization() {
        let native = DateValue::Native(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());

        assert_eq!(format_date_value(Some(&native)), "2024-03-05");
        assert_eq!(
            format_date_value(Some(&DateValue::Text("2024-03-05T00:00:00.000Z".to_owned()))),
            "2024-03-05"
        );
        assert_eq!(format_date_value(Some(&DateValue::Text("soon".to_owned()))), "");
        assert_eq!(format_date_value(None), "");
    }

    #[test]
    fn test_recipe_zero_numbers_become_null() {
        let recipe = Recipe {
            identifier: "R1".to_owned(),
            prep_time: Some(0),
            cook_time: Some(25),
            rating: Some(0),
            ..Recipe::default()
        };

        let formatted = serde_json::to_value(format_recipe(&recipe)).unwrap();

        assert_eq!(formatted["prepTime"], Value::Null);
        assert_eq!(formatted["cookTime"], 25);
        assert_eq!(formatted["rating"], Value::Null);
        assert_eq!(formatted["servings"], "");
        assert_eq!(formatted["preparationSteps"], json!([]));
    }

    #[test]
    fn test_list_with_items_filters_checked() {
        let list = ShoppingList {
            identifier: "S1".to_owned(),
            name: None,
            items: vec![
                ListItem {
                    identifier: "I1".to_owned(),
                    checked: Some(true),
                    ..ListItem::default()
                },
                ListItem {
                    identifier: "I2".to_owned(),
                    ..ListItem::default()
                },
            ],
        };

        assert_eq!(format_list(&list).item_count, 2);
        assert_eq!(format_list_with_items(&list, false).items.len(), 1);
        assert_eq!(format_list_with_items(&list, true).items.len(), 2);
        assert!(!format_list_with_items(&list, false).items[0].checked);
    }
}
