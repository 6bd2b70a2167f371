// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: In-memory AnyList session and connector that record every collaborator call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `anylist_mcp_server`
//!
//! [`FakeSession`] keeps the account in memory and counts calls per
//! operation so tests can assert which collaborator calls a tool made.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use anylist_mcp_server::client::{
    AccountData, AnyListSession, ClientAccessor, Credentials, SessionConnector,
};
use anylist_mcp_server::errors::{AppError, AppResult};
use anylist_mcp_server::mcp::AnyListMcpServer;
use anylist_mcp_server::models::{
    CalendarEvent, DateValue, Ingredient, Label, ListItem, MealPlanningCalendar, NewEvent,
    NewLabel, NewListItem, Recipe, RecipeCollection, RecipeRef, ShoppingList,
};
use anylist_mcp_server::tools::{ToolExecutionContext, ToolRegistry, ToolResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub fn day(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn event(id: &str, date: &str, title: &str) -> CalendarEvent {
    CalendarEvent {
        identifier: id.to_owned(),
        date: Some(DateValue::Native(day(date))),
        title: Some(title.to_owned()),
        ..CalendarEvent::default()
    }
}

pub fn label(id: &str, name: &str, hex_color: Option<&str>, sort_index: i64) -> Label {
    Label {
        identifier: id.to_owned(),
        name: Some(name.to_owned()),
        hex_color: hex_color.map(str::to_owned),
        sort_index: Some(sort_index),
    }
}

pub fn recipe(id: &str, name: Option<&str>) -> Recipe {
    Recipe {
        identifier: id.to_owned(),
        name: name.map(str::to_owned),
        ..Recipe::default()
    }
}

pub fn collection(id: &str, name: &str, recipe_ids: &[&str]) -> RecipeCollection {
    RecipeCollection {
        identifier: id.to_owned(),
        name: Some(name.to_owned()),
        recipe_ids: recipe_ids.iter().map(|id| (*id).to_owned()).collect(),
    }
}

pub fn item(id: &str, name: &str, checked: bool) -> ListItem {
    ListItem {
        identifier: id.to_owned(),
        name: Some(name.to_owned()),
        quantity: None,
        details: None,
        checked: Some(checked),
    }
}

pub fn list(id: &str, name: &str, items: Vec<ListItem>) -> ShoppingList {
    ShoppingList {
        identifier: id.to_owned(),
        name: Some(name.to_owned()),
        items,
    }
}

/// Small account covering every entity kind
pub fn sample_account() -> AccountData {
    let mut tacos = recipe("R1", Some("Chicken Tacos"));
    tacos.ingredients = vec![Ingredient {
        raw_ingredient: Some("1 lb chicken".to_owned()),
        name: Some("chicken".to_owned()),
        quantity: Some("1 lb".to_owned()),
        note: None,
    }];
    tacos.preparation_steps = vec!["Cook the chicken".to_owned()];

    let mut dinner = event("E1", "2024-03-15", "Tacos");
    dinner.details = Some("Family night".to_owned());
    dinner.label_id = Some("L1".to_owned());
    dinner.recipe_id = Some("R1".to_owned());

    AccountData {
        events: vec![
            event("E0", "2024-02-28", "Leftovers"),
            dinner,
            event("E2", "2024-04-01", "Pizza"),
        ],
        labels: vec![
            label("L1", "Dinner", Some("#FF0000"), 0),
            label("L2", "Lunch", None, 1),
        ],
        recipes: vec![
            tacos,
            recipe("R2", Some("Beef Stew")),
            recipe("R3", None),
        ],
        recipe_collections: vec![collection("C1", "Weeknight", &["R2"])],
        lists: vec![list(
            "S1",
            "Groceries",
            vec![item("I1", "Eggs", false), item("I2", "Bread", true)],
        )],
    }
}

// ============================================================================
// FakeSession
// ============================================================================

/// In-memory collaborator that records how often each operation ran
#[derive(Debug, Default)]
pub struct FakeSession {
    data: Mutex<AccountData>,
    calls: Mutex<HashMap<&'static str, usize>>,
    next_id: AtomicUsize,
    failure: Mutex<Option<String>>,
}

impl FakeSession {
    pub fn new(data: AccountData) -> Arc<Self> {
        Arc::new(Self {
            data: Mutex::new(data),
            ..Self::default()
        })
    }

    /// Number of times `operation` was invoked
    pub fn calls(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(operation)
            .copied()
            .unwrap_or(0)
    }

    /// Make every subsequent collaborator call fail with `message`
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_owned());
    }

    pub fn data(&self) -> AccountData {
        self.data.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str) -> AppResult<()> {
        *self.calls.lock().unwrap().entry(operation).or_insert(0) += 1;
        match self.failure.lock().unwrap().as_deref() {
            Some(message) => Err(AppError::external_service("AnyList", message)),
            None => Ok(()),
        }
    }

    fn fresh_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn resolve(data: &AccountData, event: &CalendarEvent) -> CalendarEvent {
        let mut resolved = event.clone();
        resolved.label = event
            .label_id
            .as_deref()
            .and_then(|id| data.labels.iter().find(|label| label.identifier == id))
            .cloned();
        resolved.recipe = event
            .recipe_id
            .as_deref()
            .and_then(|id| data.recipes.iter().find(|recipe| recipe.identifier == id))
            .map(|recipe| RecipeRef {
                identifier: recipe.identifier.clone(),
                name: recipe.name.clone(),
            });
        resolved
    }
}

#[async_trait]
impl AnyListSession for FakeSession {
    async fn meal_planning_calendar(&self) -> AppResult<MealPlanningCalendar> {
        self.record("meal_planning_calendar")?;
        let data = self.data.lock().unwrap();
        Ok(MealPlanningCalendar {
            events: data
                .events
                .iter()
                .map(|event| Self::resolve(&data, event))
                .collect(),
            labels: data.labels.clone(),
        })
    }

    async fn create_event(&self, draft: NewEvent) -> AppResult<CalendarEvent> {
        self.record("create_event")?;
        let event = CalendarEvent {
            identifier: self.fresh_id("event"),
            date: Some(DateValue::Native(draft.date)),
            title: Some(draft.title),
            details: draft.details,
            label_id: draft.label_id,
            label: None,
            recipe_id: draft.recipe_id,
            recipe: None,
        };
        let mut data = self.data.lock().unwrap();
        data.events.push(event.clone());
        Ok(Self::resolve(&data, &event))
    }

    async fn save_event(&self, event: &CalendarEvent) -> AppResult<CalendarEvent> {
        self.record("save_event")?;
        let mut data = self.data.lock().unwrap();
        let slot = data
            .events
            .iter_mut()
            .find(|stored| stored.identifier == event.identifier)
            .ok_or_else(|| AppError::not_found("Event", event.identifier.as_str()))?;
        *slot = event.clone();
        Ok(Self::resolve(&data, event))
    }

    async fn delete_event(&self, event_id: &str) -> AppResult<()> {
        self.record("delete_event")?;
        self.data
            .lock()
            .unwrap()
            .events
            .retain(|event| event.identifier != event_id);
        Ok(())
    }

    async fn create_label(&self, draft: NewLabel) -> AppResult<Label> {
        self.record("create_label")?;
        let mut data = self.data.lock().unwrap();
        let label = Label {
            identifier: self.fresh_id("label"),
            name: Some(draft.name),
            hex_color: draft.hex_color,
            sort_index: Some(i64::try_from(data.labels.len()).unwrap()),
        };
        data.labels.push(label.clone());
        Ok(label)
    }

    async fn save_label(&self, label: &Label) -> AppResult<Label> {
        self.record("save_label")?;
        let mut data = self.data.lock().unwrap();
        let slot = data
            .labels
            .iter_mut()
            .find(|stored| stored.identifier == label.identifier)
            .ok_or_else(|| AppError::not_found("Label", label.identifier.as_str()))?;
        *slot = label.clone();
        Ok(label.clone())
    }

    async fn delete_label(&self, label_id: &str) -> AppResult<()> {
        self.record("delete_label")?;
        self.data
            .lock()
            .unwrap()
            .labels
            .retain(|label| label.identifier != label_id);
        Ok(())
    }

    async fn recipes(&self) -> AppResult<Vec<Recipe>> {
        self.record("recipes")?;
        Ok(self.data.lock().unwrap().recipes.clone())
    }

    async fn recipe_collections(&self) -> AppResult<Vec<RecipeCollection>> {
        self.record("recipe_collections")?;
        Ok(self.data.lock().unwrap().recipe_collections.clone())
    }

    async fn lists(&self) -> AppResult<Vec<ShoppingList>> {
        self.record("lists")?;
        Ok(self.data.lock().unwrap().lists.clone())
    }

    fn create_item(&self, draft: NewListItem) -> ListItem {
        ListItem {
            identifier: self.fresh_id("item"),
            name: Some(draft.name),
            quantity: draft.quantity,
            details: draft.details,
            checked: Some(false),
        }
    }

    async fn add_item(&self, list_id: &str, item: ListItem) -> AppResult<ListItem> {
        self.record("add_item")?;
        let mut data = self.data.lock().unwrap();
        let list = data
            .lists
            .iter_mut()
            .find(|list| list.identifier == list_id)
            .ok_or_else(|| AppError::not_found("List", list_id))?;
        list.items.push(item.clone());
        Ok(item)
    }

    async fn remove_item(&self, list_id: &str, item_id: &str) -> AppResult<()> {
        self.record("remove_item")?;
        let mut data = self.data.lock().unwrap();
        if let Some(list) = data.lists.iter_mut().find(|list| list.identifier == list_id) {
            list.items.retain(|item| item.identifier != item_id);
        }
        Ok(())
    }

    async fn teardown(&self) {
        *self.calls.lock().unwrap().entry("teardown").or_insert(0) += 1;
    }
}

// ============================================================================
// FakeConnector
// ============================================================================

/// Connector handing out one shared `FakeSession` and counting logins
#[derive(Debug)]
pub struct FakeConnector {
    session: Arc<FakeSession>,
    logins: AtomicUsize,
    failures_remaining: AtomicUsize,
    last_credentials: Mutex<Option<Credentials>>,
}

impl FakeConnector {
    pub fn new(session: Arc<FakeSession>) -> Arc<Self> {
        Arc::new(Self {
            session,
            logins: AtomicUsize::new(0),
            failures_remaining: AtomicUsize::new(0),
            last_credentials: Mutex::new(None),
        })
    }

    /// Reject the next `count` logins
    pub fn fail_next_logins(&self, count: usize) {
        self.failures_remaining.store(count, Ordering::SeqCst);
    }

    pub fn logins(&self) -> usize {
        self.logins.load(Ordering::SeqCst)
    }

    pub fn last_credentials(&self) -> Option<Credentials> {
        self.last_credentials.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionConnector for FakeConnector {
    async fn login(&self, credentials: &Credentials) -> AppResult<Arc<dyn AnyListSession>> {
        self.logins.fetch_add(1, Ordering::SeqCst);
        *self.last_credentials.lock().unwrap() = Some(credentials.clone());

        // Yield so concurrent callers overlap with an in-flight login
        tokio::task::yield_now().await;

        let remaining = self.failures_remaining.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_remaining
                .store(remaining - 1, Ordering::SeqCst);
            return Err(AppError::auth_failed("Invalid email or password"));
        }

        Ok(Arc::clone(&self.session) as Arc<dyn AnyListSession>)
    }
}

// ============================================================================
// Harness
// ============================================================================

/// Everything a tool test needs, wired around one `FakeSession`
pub struct TestHarness {
    pub session: Arc<FakeSession>,
    pub connector: Arc<FakeConnector>,
    pub client: Arc<ClientAccessor>,
    pub registry: ToolRegistry,
    _credentials_dir: tempfile::TempDir,
}

impl TestHarness {
    pub fn new(data: AccountData) -> Self {
        init_test_logging();

        let session = FakeSession::new(data);
        let connector = FakeConnector::new(Arc::clone(&session));
        let credentials_dir = tempfile::tempdir().unwrap();
        let client = Arc::new(ClientAccessor::new(
            Arc::clone(&connector) as Arc<dyn SessionConnector>,
            credentials_file_in(&credentials_dir),
            Some(anylist_mcp_server::client::AccountCredentials {
                email: "cook@example.com".to_owned(),
                password: "secret".to_owned(),
            }),
        ));

        Self {
            session,
            connector,
            client,
            registry: ToolRegistry::with_builtin_tools(),
            _credentials_dir: credentials_dir,
        }
    }

    pub fn sample() -> Self {
        Self::new(sample_account())
    }

    pub fn context(&self) -> ToolExecutionContext {
        ToolExecutionContext::new(Arc::clone(&self.client))
    }

    pub async fn call(&self, tool: &str, args: Value) -> ToolResult {
        self.registry.dispatch(tool, args, &self.context()).await
    }

    pub fn server(&self) -> Arc<AnyListMcpServer> {
        Arc::new(AnyListMcpServer::new(
            Arc::new(ToolRegistry::with_builtin_tools()),
            Arc::clone(&self.client),
        ))
    }
}

pub fn credentials_file_in(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".mcp-anylist-credentials")
}

/// Message of an error result; panics on success
pub fn error_text(result: &ToolResult) -> String {
    assert!(result.is_error, "expected error result, got {result:?}");
    result.text()
}
