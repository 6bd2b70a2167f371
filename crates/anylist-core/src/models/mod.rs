// ABOUTME: Domain records exchanged with the AnyList collaborator
// ABOUTME: Re-exports calendar, recipe and shopping list types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain records owned by the AnyList collaborator. The server never assigns
//! identifiers and never persists these records itself; every tool call loads
//! them fresh, reshapes them, and hands mutations back to the collaborator.
//!
//! All models serialize as camelCase JSON (`identifier`, `hexColor`,
//! `labelId`, `recipeIds`) so a file-backed collaborator can store them as-is.
//!
//! ## Core Models
//!
//! - `CalendarEvent`: a meal planned on a calendar day
//! - `Label`: a calendar label such as Breakfast or Dinner
//! - `Recipe`, `Ingredient`, `RecipeCollection`: read-only recipe box
//! - `ShoppingList`, `ListItem`: shopping lists and their items

mod meal_planning;
mod recipe;
mod shopping_list;

// Meal planning domain
pub use meal_planning::{CalendarEvent, DateValue, Label, MealPlanningCalendar, NewEvent, NewLabel};

// Recipe domain
pub use recipe::{Ingredient, Recipe, RecipeCollection, RecipeRef};

// Shopping list domain
pub use shopping_list::{ListItem, NewListItem, ShoppingList};
