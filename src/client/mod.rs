// ABOUTME: Collaborator boundary for the AnyList account: session and connector traits
// ABOUTME: Credentials types, the memoizing ClientAccessor and the file-backed local backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # AnyList Collaborator Interface
//!
//! The server never talks to AnyList directly. Everything account-related goes
//! through two narrow traits:
//!
//! - [`SessionConnector`]: performs a non-realtime login and hands back a session
//! - [`AnyListSession`]: fetch-all, save and delete primitives per entity kind
//!
//! Identifiers are always assigned by the session implementation. The tool
//! layer fetches fresh state on every call and never caches entities.
//!
//! [`ClientAccessor`] memoizes a single session for the process lifetime, and
//! [`LocalConnector`] is a JSON-file backed implementation used by the binary
//! and the test suite.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::{
    CalendarEvent, Label, ListItem, MealPlanningCalendar, NewEvent, NewLabel, NewListItem, Recipe,
    RecipeCollection, ShoppingList,
};

/// Memoized, single-flight session access
pub mod accessor;
/// JSON-file backed collaborator
pub mod local;

pub use accessor::ClientAccessor;
pub use local::{AccountData, LocalConnector, LocalSession};

/// Explicit account credentials
#[derive(Clone, PartialEq, Eq)]
pub struct AccountCredentials {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

impl AccountCredentials {
    /// Build credentials when both values are non-empty
    #[must_use]
    pub fn from_parts(email: Option<String>, password: Option<String>) -> Option<Self> {
        match (email, password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Some(Self { email, password })
            }
            _ => None,
        }
    }
}

impl fmt::Debug for AccountCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// What a connector needs to log in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Credential store the collaborator reads from (and writes to after an explicit login)
    pub credentials_file: PathBuf,
    /// Explicit account values; take precedence over the stored credentials
    pub account: Option<AccountCredentials>,
}

/// An authenticated session against one AnyList account.
///
/// Every fetch returns a fresh snapshot. Save operations return the entity as
/// stored, with embedded label and recipe snapshots resolved.
#[async_trait]
pub trait AnyListSession: Send + Sync {
    /// All calendar events together with all calendar labels
    async fn meal_planning_calendar(&self) -> AppResult<MealPlanningCalendar>;

    /// Create and persist a new calendar event
    async fn create_event(&self, draft: NewEvent) -> AppResult<CalendarEvent>;

    /// Persist changes to an existing calendar event
    async fn save_event(&self, event: &CalendarEvent) -> AppResult<CalendarEvent>;

    /// Delete a calendar event
    async fn delete_event(&self, event_id: &str) -> AppResult<()>;

    /// Create and persist a new calendar label
    async fn create_label(&self, draft: NewLabel) -> AppResult<Label>;

    /// Persist changes to an existing calendar label
    async fn save_label(&self, label: &Label) -> AppResult<Label>;

    /// Delete a calendar label
    async fn delete_label(&self, label_id: &str) -> AppResult<()>;

    /// All recipes
    async fn recipes(&self) -> AppResult<Vec<Recipe>>;

    /// All recipe collections
    async fn recipe_collections(&self) -> AppResult<Vec<RecipeCollection>>;

    /// All shopping lists with their items
    async fn lists(&self) -> AppResult<Vec<ShoppingList>>;

    /// Build a new, unsaved list item with a fresh identifier
    fn create_item(&self, draft: NewListItem) -> ListItem;

    /// Append an item to a list
    async fn add_item(&self, list_id: &str, item: ListItem) -> AppResult<ListItem>;

    /// Remove an item from a list
    async fn remove_item(&self, list_id: &str, item_id: &str) -> AppResult<()>;

    /// Release the session; further calls may fail
    async fn teardown(&self);
}

/// Performs the non-realtime login that produces a session
#[async_trait]
pub trait SessionConnector: Send + Sync {
    /// Log in and return a shared session.
    ///
    /// When `credentials.account` is set, implementations persist the
    /// resulting credentials to `credentials.credentials_file`.
    ///
    /// # Errors
    ///
    /// Returns `ExternalAuthFailed` when the login is rejected
    async fn login(&self, credentials: &Credentials) -> AppResult<Arc<dyn AnyListSession>>;
}
