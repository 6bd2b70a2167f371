// ABOUTME: Integration tests for the shopping list tools
// ABOUTME: Covers list summaries, checked-item filtering, adding and removing items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anylist_mcp_server::constants::tools::{
    ADD_LIST_ITEM, GET_LISTS, GET_LIST_ITEMS, REMOVE_LIST_ITEM,
};
use common::{error_text, TestHarness};
use serde_json::json;

#[tokio::test]
async fn test_get_lists_counts_all_items() {
    let harness = TestHarness::sample();

    let result = harness.call(GET_LISTS, json!({})).await;

    assert_eq!(result.content["count"], 1);
    assert_eq!(result.content["lists"][0]["name"], "Groceries");
    assert_eq!(result.content["lists"][0]["itemCount"], 2);
}

#[tokio::test]
async fn test_get_list_items_hides_checked_by_default() {
    let harness = TestHarness::sample();

    let result = harness.call(GET_LIST_ITEMS, json!({"listId": "S1"})).await;

    let items = result.content["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Eggs");
    assert_eq!(items[0]["checked"], false);
    assert_eq!(items[0]["quantity"], "");
}

#[tokio::test]
async fn test_include_checked_requires_literal_true() {
    let harness = TestHarness::sample();

    let with_checked = harness
        .call(GET_LIST_ITEMS, json!({"listId": "S1", "includeChecked": true}))
        .await;
    let stringly = harness
        .call(GET_LIST_ITEMS, json!({"listId": "S1", "includeChecked": "true"}))
        .await;

    assert_eq!(with_checked.content["items"].as_array().unwrap().len(), 2);
    assert_eq!(stringly.content["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_items_unknown_list() {
    let harness = TestHarness::sample();

    let missing = harness.call(GET_LIST_ITEMS, json!({})).await;
    let unknown = harness.call(GET_LIST_ITEMS, json!({"listId": "S9"})).await;

    assert_eq!(error_text(&missing), "List ID is required");
    assert_eq!(error_text(&unknown), "List not found: S9");
}

#[tokio::test]
async fn test_add_item() {
    let harness = TestHarness::sample();

    let result = harness
        .call(
            ADD_LIST_ITEM,
            json!({"listId": "S1", "name": "Milk", "quantity": "1 gal"}),
        )
        .await;

    assert!(!result.is_error, "{result:?}");
    assert_eq!(result.content["message"], "Item added successfully");
    let added = &result.content["item"];
    assert_eq!(added["name"], "Milk");
    assert_eq!(added["quantity"], "1 gal");
    assert_eq!(added["details"], "");
    assert_eq!(added["checked"], false);

    let stored = &harness.session.data().lists[0];
    assert_eq!(stored.items.len(), 3);
    assert_eq!(stored.items[2].identifier, added["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_add_item_validation_order() {
    let harness = TestHarness::sample();

    let no_list = harness.call(ADD_LIST_ITEM, json!({"name": "Milk"})).await;
    let no_name = harness.call(ADD_LIST_ITEM, json!({"listId": "S1"})).await;
    let unknown = harness
        .call(ADD_LIST_ITEM, json!({"listId": "S9", "name": "Milk"}))
        .await;

    assert_eq!(error_text(&no_list), "List ID is required");
    assert_eq!(error_text(&no_name), "Item name is required");
    assert_eq!(error_text(&unknown), "List not found: S9");
    assert_eq!(harness.session.calls("add_item"), 0);
}

#[tokio::test]
async fn test_remove_item() {
    let harness = TestHarness::sample();

    let result = harness
        .call(REMOVE_LIST_ITEM, json!({"listId": "S1", "itemId": "I2"}))
        .await;

    assert_eq!(result.content["success"], true);
    assert_eq!(result.content["itemId"], "I2");
    assert_eq!(harness.session.data().lists[0].items.len(), 1);
}

#[tokio::test]
async fn test_remove_item_checks_list_then_item() {
    let harness = TestHarness::sample();

    let no_item_id = harness.call(REMOVE_LIST_ITEM, json!({"listId": "S1"})).await;
    let unknown_list = harness
        .call(REMOVE_LIST_ITEM, json!({"listId": "S9", "itemId": "I1"}))
        .await;
    let unknown_item = harness
        .call(REMOVE_LIST_ITEM, json!({"listId": "S1", "itemId": "I9"}))
        .await;

    assert_eq!(error_text(&no_item_id), "Item ID is required");
    assert_eq!(error_text(&unknown_list), "List not found: S9");
    assert_eq!(error_text(&unknown_item), "Item not found: I9");
    assert_eq!(harness.session.calls("remove_item"), 0);
}
