// ABOUTME: File-backed AnyList collaborator storing account data in a local JSON document
// ABOUTME: LocalConnector performs login and credential persistence, LocalSession serves entities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Local Collaborator Backend
//!
//! Implements [`SessionConnector`] and [`AnyListSession`] over a JSON data
//! file, so the server runs end-to-end without a network connection.
//!
//! - Login with explicit account values writes the credentials file.
//! - Login without them requires a readable credentials file.
//! - Every read loads the data file fresh; every write rewrites it.
//! - Events are stored with references only; embedded label and recipe
//!   snapshots are resolved on each read.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::{
    CalendarEvent, DateValue, Label, ListItem, MealPlanningCalendar, NewEvent, NewLabel,
    NewListItem, Recipe, RecipeCollection, ShoppingList,
};

use super::{AnyListSession, Credentials, SessionConnector};

/// Contents of the local data file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountData {
    /// Calendar events (references only)
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
    /// Calendar labels
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Recipes
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// Recipe collections
    #[serde(default)]
    pub recipe_collections: Vec<RecipeCollection>,
    /// Shopping lists
    #[serde(default)]
    pub lists: Vec<ShoppingList>,
}

impl AccountData {
    /// Load the data file; a missing file is an empty account
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub async fn load(path: &Path) -> AppResult<Self> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(AppError::storage(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    /// Write the data file, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub async fn save(&self, path: &Path) -> AppResult<()> {
        write_json(path, self).await
    }

    fn resolve_event(&self, event: &CalendarEvent) -> CalendarEvent {
        let mut resolved = event.clone();
        resolved.label = event
            .label_id
            .as_deref()
            .and_then(|id| self.labels.iter().find(|label| label.identifier == id))
            .cloned();
        resolved.recipe = event
            .recipe_id
            .as_deref()
            .and_then(|id| self.recipes.iter().find(|recipe| recipe.identifier == id))
            .map(Recipe::to_ref);
        resolved
    }

    fn list_mut(&mut self, list_id: &str) -> AppResult<&mut ShoppingList> {
        self.lists
            .iter_mut()
            .find(|list| list.identifier == list_id)
            .ok_or_else(|| AppError::not_found("List", list_id))
    }
}

/// Credentials file written by a successful explicit login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCredentials {
    email: String,
    session_token: String,
}

async fn write_json<T: Serialize + Sync>(path: &Path, value: &T) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let bytes = serde_json::to_vec_pretty(value)?;

    // Readers only ever see the old or the new document
    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = PathBuf::from(staging);
    tokio::fs::write(&staging, bytes).await?;
    tokio::fs::rename(&staging, path).await?;
    Ok(())
}

fn new_identifier() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Logs in against a local data file
#[derive(Debug, Clone)]
pub struct LocalConnector {
    data_file: PathBuf,
}

impl LocalConnector {
    /// Create a connector serving the given data file
    #[must_use]
    pub const fn new(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    async fn stored_credentials(path: &Path) -> AppResult<StoredCredentials> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AppError::auth_failed(format!(
                "Cannot read credentials file {}: {e}",
                path.display()
            ))
        })?;

        let stored: StoredCredentials = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::auth_failed(format!(
                "Credentials file {} is not valid: {e}",
                path.display()
            ))
        })?;

        if stored.email.is_empty() || stored.session_token.is_empty() {
            return Err(AppError::auth_failed(format!(
                "Credentials file {} is incomplete",
                path.display()
            )));
        }

        Ok(stored)
    }
}

#[async_trait]
impl SessionConnector for LocalConnector {
    async fn login(&self, credentials: &Credentials) -> AppResult<Arc<dyn AnyListSession>> {
        let email = if let Some(account) = &credentials.account {
            if account.email.trim().is_empty() || account.password.is_empty() {
                return Err(AppError::auth_failed("Email and password are required"));
            }

            let stored = StoredCredentials {
                email: account.email.clone(),
                session_token: new_identifier(),
            };
            write_json(&credentials.credentials_file, &stored).await?;
            debug!(
                path = %credentials.credentials_file.display(),
                "Stored AnyList credentials"
            );
            stored.email
        } else {
            Self::stored_credentials(&credentials.credentials_file)
                .await?
                .email
        };

        // Fail at login rather than on the first tool call when the data file is corrupt
        AccountData::load(&self.data_file).await?;

        info!(%email, data_file = %self.data_file.display(), "Logged in to local AnyList data");
        Ok(Arc::new(LocalSession::new(self.data_file.clone())))
    }
}

/// Session over a local data file
#[derive(Debug)]
pub struct LocalSession {
    data_file: PathBuf,
    data_lock: RwLock<()>,
    closed: AtomicBool,
}

impl LocalSession {
    /// Open a session on the given data file without a login step
    #[must_use]
    pub fn new(data_file: PathBuf) -> Self {
        Self {
            data_file,
            data_lock: RwLock::new(()),
            closed: AtomicBool::new(false),
        }
    }

    fn ensure_open(&self) -> AppResult<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(AppError::external_service(
                "AnyList",
                "session has been torn down",
            ));
        }
        Ok(())
    }

    async fn snapshot(&self) -> AppResult<AccountData> {
        self.ensure_open()?;
        let _guard = self.data_lock.read().await;
        AccountData::load(&self.data_file).await
    }

    /// Load, mutate and persist the data file under the write lock
    async fn update<T: Send>(
        &self,
        mutate: impl FnOnce(&mut AccountData) -> AppResult<T> + Send,
    ) -> AppResult<T> {
        self.ensure_open()?;
        let _guard = self.data_lock.write().await;

        let mut data = AccountData::load(&self.data_file).await?;
        let outcome = mutate(&mut data)?;
        data.save(&self.data_file).await?;
        Ok(outcome)
    }
}

/// Stored form of an event: references only, no embedded snapshots
fn stored_event(event: &CalendarEvent) -> CalendarEvent {
    CalendarEvent {
        label: None,
        recipe: None,
        ..event.clone()
    }
}

#[async_trait]
impl AnyListSession for LocalSession {
    async fn meal_planning_calendar(&self) -> AppResult<MealPlanningCalendar> {
        let data = self.snapshot().await?;
        let events = data
            .events
            .iter()
            .map(|event| data.resolve_event(event))
            .collect();

        Ok(MealPlanningCalendar {
            events,
            labels: data.labels,
        })
    }

    async fn create_event(&self, draft: NewEvent) -> AppResult<CalendarEvent> {
        let event = CalendarEvent {
            identifier: new_identifier(),
            date: Some(DateValue::Native(draft.date)),
            title: Some(draft.title),
            details: draft.details,
            label_id: draft.label_id,
            label: None,
            recipe_id: draft.recipe_id,
            recipe: None,
        };

        self.update(|data| {
            data.events.push(stored_event(&event));
            Ok(data.resolve_event(&event))
        })
        .await
    }

    async fn save_event(&self, event: &CalendarEvent) -> AppResult<CalendarEvent> {
        self.update(|data| {
            let slot = data
                .events
                .iter_mut()
                .find(|stored| stored.identifier == event.identifier)
                .ok_or_else(|| AppError::not_found("Event", event.identifier.as_str()))?;
            *slot = stored_event(event);
            Ok(data.resolve_event(event))
        })
        .await
    }

    async fn delete_event(&self, event_id: &str) -> AppResult<()> {
        self.update(|data| {
            let before = data.events.len();
            data.events.retain(|event| event.identifier != event_id);
            if data.events.len() == before {
                return Err(AppError::not_found("Event", event_id));
            }
            Ok(())
        })
        .await
    }

    async fn create_label(&self, draft: NewLabel) -> AppResult<Label> {
        self.update(|data| {
            let next_index = data
                .labels
                .iter()
                .filter_map(|label| label.sort_index)
                .max()
                .map_or(0, |index| index.saturating_add(1));

            let label = Label {
                identifier: new_identifier(),
                name: Some(draft.name),
                hex_color: draft.hex_color,
                sort_index: Some(next_index),
            };
            data.labels.push(label.clone());
            Ok(label)
        })
        .await
    }

    async fn save_label(&self, label: &Label) -> AppResult<Label> {
        self.update(|data| {
            let slot = data
                .labels
                .iter_mut()
                .find(|stored| stored.identifier == label.identifier)
                .ok_or_else(|| AppError::not_found("Label", label.identifier.as_str()))?;
            *slot = label.clone();
            Ok(label.clone())
        })
        .await
    }

    async fn delete_label(&self, label_id: &str) -> AppResult<()> {
        self.update(|data| {
            let before = data.labels.len();
            data.labels.retain(|label| label.identifier != label_id);
            if data.labels.len() == before {
                return Err(AppError::not_found("Label", label_id));
            }
            // Events keep their reference; it simply stops resolving
            Ok(())
        })
        .await
    }

    async fn recipes(&self) -> AppResult<Vec<Recipe>> {
        Ok(self.snapshot().await?.recipes)
    }

    async fn recipe_collections(&self) -> AppResult<Vec<RecipeCollection>> {
        Ok(self.snapshot().await?.recipe_collections)
    }

    async fn lists(&self) -> AppResult<Vec<ShoppingList>> {
        Ok(self.snapshot().await?.lists)
    }

    fn create_item(&self, draft: NewListItem) -> ListItem {
        ListItem {
            identifier: new_identifier(),
            name: Some(draft.name),
            quantity: draft.quantity,
            details: draft.details,
            checked: Some(false),
        }
    }

    async fn add_item(&self, list_id: &str, item: ListItem) -> AppResult<ListItem> {
        self.update(|data| {
            data.list_mut(list_id)?.items.push(item.clone());
            Ok(item)
        })
        .await
    }

    async fn remove_item(&self, list_id: &str, item_id: &str) -> AppResult<()> {
        self.update(|data| {
            let list = data.list_mut(list_id)?;
            let before = list.items.len();
            list.items.retain(|item| item.identifier != item_id);
            if list.items.len() == before {
                return Err(AppError::not_found("Item", item_id));
            }
            Ok(())
        })
        .await
    }

    async fn teardown(&self) {
        self.closed.store(true, Ordering::Release);
        debug!(data_file = %self.data_file.display(), "Local AnyList session torn down");
    }
}
