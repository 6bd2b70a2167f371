// ABOUTME: Integration tests for the JSON-file backed AnyList collaborator
// ABOUTME: Covers login and credential persistence, entity persistence and snapshot resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::path::PathBuf;
use std::sync::Arc;

use anylist_mcp_server::client::{
    AccountCredentials, AccountData, AnyListSession, ClientAccessor, Credentials, LocalConnector,
    LocalSession, SessionConnector,
};
use anylist_mcp_server::errors::ErrorCode;
use anylist_mcp_server::mcp::AnyListMcpServer;
use anylist_mcp_server::models::{NewEvent, NewLabel, NewListItem};
use anylist_mcp_server::tools::ToolRegistry;
use common::{day, sample_account};
use serde_json::{json, Value};
use tempfile::TempDir;

struct Paths {
    _dir: TempDir,
    data_file: PathBuf,
    credentials_file: PathBuf,
}

async fn seeded(data: &AccountData) -> Paths {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("anylist").join("data.json");
    let credentials_file = dir.path().join(".mcp-anylist-credentials");
    data.save(&data_file).await.unwrap();
    Paths {
        _dir: dir,
        data_file,
        credentials_file,
    }
}

fn explicit(paths: &Paths) -> Credentials {
    Credentials {
        credentials_file: paths.credentials_file.clone(),
        account: Some(AccountCredentials {
            email: "cook@example.com".to_owned(),
            password: "secret".to_owned(),
        }),
    }
}

#[tokio::test]
async fn test_missing_data_file_is_empty_account() {
    let dir = tempfile::tempdir().unwrap();

    let data = AccountData::load(&dir.path().join("absent.json")).await.unwrap();

    assert_eq!(data, AccountData::default());
}

#[tokio::test]
async fn test_login_without_stored_credentials_fails() {
    let paths = seeded(&sample_account()).await;
    let connector = LocalConnector::new(paths.data_file.clone());

    let outcome = connector
        .login(&Credentials {
            credentials_file: paths.credentials_file.clone(),
            account: None,
        })
        .await;

    assert_eq!(outcome.err().unwrap().code, ErrorCode::ExternalAuthFailed);
}

#[tokio::test]
async fn test_explicit_login_persists_credentials_for_later_logins() {
    let paths = seeded(&sample_account()).await;
    let connector = LocalConnector::new(paths.data_file.clone());

    connector.login(&explicit(&paths)).await.unwrap();
    let stored: Value =
        serde_json::from_slice(&std::fs::read(&paths.credentials_file).unwrap()).unwrap();
    assert_eq!(stored["email"], "cook@example.com");
    assert!(stored.get("password").is_none());

    let session = connector
        .login(&Credentials {
            credentials_file: paths.credentials_file.clone(),
            account: None,
        })
        .await
        .unwrap();
    assert_eq!(session.lists().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_corrupt_data_file_fails_login() {
    let paths = seeded(&sample_account()).await;
    std::fs::write(&paths.data_file, "not json").unwrap();
    let connector = LocalConnector::new(paths.data_file.clone());

    let outcome = connector.login(&explicit(&paths)).await;

    assert_eq!(outcome.err().unwrap().code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_events_resolve_label_and_recipe_snapshots() {
    let paths = seeded(&sample_account()).await;
    let session = LocalSession::new(paths.data_file.clone());

    let created = session
        .create_event(NewEvent {
            date: day("2024-06-01"),
            title: "Stew".to_owned(),
            details: None,
            label_id: Some("L2".to_owned()),
            recipe_id: Some("R2".to_owned()),
        })
        .await
        .unwrap();

    assert_eq!(created.label.unwrap().name.as_deref(), Some("Lunch"));
    assert_eq!(created.recipe.unwrap().name.as_deref(), Some("Beef Stew"));

    // Snapshots are not persisted
    let raw: Value = serde_json::from_slice(&std::fs::read(&paths.data_file).unwrap()).unwrap();
    let stored = raw["events"].as_array().unwrap().last().unwrap().clone();
    assert!(stored.get("label").is_none_or(Value::is_null));

    session.delete_label("L2").await.unwrap();
    let calendar = session.meal_planning_calendar().await.unwrap();
    let event = calendar.event_by_id(&created.identifier).unwrap();
    assert_eq!(event.label_id.as_deref(), Some("L2"));
    assert!(event.label.is_none());
}

#[tokio::test]
async fn test_labels_get_increasing_sort_index() {
    let paths = seeded(&sample_account()).await;
    let session = LocalSession::new(paths.data_file.clone());

    let label = session
        .create_label(NewLabel {
            name: "Snack".to_owned(),
            hex_color: None,
        })
        .await
        .unwrap();

    assert_eq!(label.sort_index, Some(2));
}

#[tokio::test]
async fn test_items_persist_and_remove() {
    let paths = seeded(&sample_account()).await;
    let session = LocalSession::new(paths.data_file.clone());

    let item = session.create_item(NewListItem {
        name: "Milk".to_owned(),
        quantity: Some("1 gal".to_owned()),
        details: None,
    });
    assert_eq!(item.checked, Some(false));

    session.add_item("S1", item.clone()).await.unwrap();
    let reloaded = AccountData::load(&paths.data_file).await.unwrap();
    assert_eq!(reloaded.lists[0].items.len(), 3);

    session.remove_item("S1", &item.identifier).await.unwrap();
    let missing = session.remove_item("S1", &item.identifier).await;
    assert_eq!(missing.err().unwrap().code, ErrorCode::ResourceNotFound);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_reads_never_observe_partial_writes() {
    let paths = seeded(&sample_account()).await;
    let session = Arc::new(LocalSession::new(paths.data_file.clone()));
    // Separate session on the same file shares no lock with the writer
    let outsider = Arc::new(LocalSession::new(paths.data_file.clone()));

    let writer = {
        let session = Arc::clone(&session);
        tokio::spawn(async move {
            for n in 0..150 {
                let item = session.create_item(NewListItem {
                    name: format!("Item {n}"),
                    quantity: None,
                    details: None,
                });
                session.add_item("S1", item).await.unwrap();
            }
        })
    };

    let mut failures = Vec::new();
    while !writer.is_finished() {
        for reader in [&session, &outsider] {
            if let Err(e) = reader.lists().await {
                failures.push(e.message);
            }
        }
    }
    writer.await.unwrap();

    assert!(failures.is_empty(), "reads failed: {failures:?}");
    let reloaded = AccountData::load(&paths.data_file).await.unwrap();
    assert_eq!(reloaded.lists[0].items.len(), 152);
}

#[tokio::test]
async fn test_torn_down_session_rejects_calls() {
    let paths = seeded(&sample_account()).await;
    let session = LocalSession::new(paths.data_file.clone());

    session.teardown().await;

    assert!(session.recipes().await.is_err());
}

#[tokio::test]
async fn test_server_end_to_end_over_local_files() {
    let paths = seeded(&sample_account()).await;
    let connector = Arc::new(LocalConnector::new(paths.data_file.clone()));
    let client = Arc::new(ClientAccessor::new(
        connector as Arc<dyn SessionConnector>,
        paths.credentials_file.clone(),
        explicit(&paths).account,
    ));
    let server = AnyListMcpServer::new(Arc::new(ToolRegistry::with_builtin_tools()), client);

    let created = server
        .call_tool(
            "anylist_create_meal_planning_event",
            json!({"date": "2024-03-20", "title": "Soup"}),
            Some(json!(1)),
        )
        .await;
    assert!(!created.is_error);

    let listed = server
        .call_tool(
            "anylist_get_meal_planning_events",
            json!({"startDate": "2024-03-16", "endDate": "2024-03-31"}),
            None,
        )
        .await;
    let text = serde_json::to_value(&listed.content[0]).unwrap()["text"]
        .as_str()
        .unwrap()
        .to_owned();
    let payload: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(payload["count"], 1);
    assert_eq!(payload["events"][0]["title"], "Soup");

    server.shutdown().await;
    assert!(!server.client().is_connected());
}
