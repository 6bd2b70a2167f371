// ABOUTME: Integration tests for the recipe and recipe collection tools
// ABOUTME: Covers case-insensitive search, collection filtering and formatting defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anylist_mcp_server::constants::tools::{GET_RECIPES, GET_RECIPE_COLLECTIONS};
use common::{error_text, TestHarness};
use serde_json::{json, Value};

fn names(result: &Value) -> Vec<&str> {
    result["recipes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|recipe| recipe["name"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_get_all_recipes() {
    let harness = TestHarness::sample();

    let result = harness.call(GET_RECIPES, json!({})).await;

    assert_eq!(result.content["count"], 3);
    let tacos = &result.content["recipes"][0];
    assert_eq!(tacos["ingredients"][0]["raw"], "1 lb chicken");
    assert_eq!(tacos["ingredients"][0]["note"], "");
    assert_eq!(tacos["preparationSteps"][0], "Cook the chicken");
    assert_eq!(tacos["prepTime"], Value::Null);
    assert_eq!(tacos["sourceUrl"], "");

    let unnamed = &result.content["recipes"][2];
    assert_eq!(unnamed["name"], "");
    assert_eq!(unnamed["ingredients"], json!([]));
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let harness = TestHarness::sample();

    let result = harness.call(GET_RECIPES, json!({"search": "TACO"})).await;

    assert_eq!(result.content["count"], 1);
    assert_eq!(names(&result.content), vec!["Chicken Tacos"]);
}

#[tokio::test]
async fn test_search_skips_unnamed_recipes() {
    let harness = TestHarness::sample();

    let result = harness.call(GET_RECIPES, json!({"search": "e"})).await;

    assert_eq!(names(&result.content), vec!["Chicken Tacos", "Beef Stew"]);
}

#[tokio::test]
async fn test_empty_search_means_no_filter() {
    let harness = TestHarness::sample();

    let result = harness.call(GET_RECIPES, json!({"search": ""})).await;

    assert_eq!(result.content["count"], 3);
    assert_eq!(harness.session.calls("recipe_collections"), 0);
}

#[tokio::test]
async fn test_collection_filter() {
    let harness = TestHarness::sample();

    let result = harness
        .call(GET_RECIPES, json!({"collectionId": "C1"}))
        .await;

    assert_eq!(names(&result.content), vec!["Beef Stew"]);
}

#[tokio::test]
async fn test_search_and_collection_combine() {
    let harness = TestHarness::sample();

    let result = harness
        .call(GET_RECIPES, json!({"search": "taco", "collectionId": "C1"}))
        .await;

    assert_eq!(result.content["count"], 0);
}

#[tokio::test]
async fn test_unknown_collection() {
    let harness = TestHarness::sample();

    let result = harness
        .call(GET_RECIPES, json!({"collectionId": "C404"}))
        .await;

    assert!(error_text(&result).starts_with("Collection not found"));
}

#[tokio::test]
async fn test_get_recipe_collections() {
    let harness = TestHarness::sample();

    let result = harness.call(GET_RECIPE_COLLECTIONS, json!({})).await;

    assert_eq!(result.content["count"], 1);
    let weeknight = &result.content["collections"][0];
    assert_eq!(weeknight["name"], "Weeknight");
    assert_eq!(weeknight["recipeIds"], json!(["R2"]));
    assert_eq!(weeknight["recipeCount"], 1);
}

#[tokio::test]
async fn test_collections_failure_is_reported() {
    let harness = TestHarness::sample();
    harness.session.fail_with("timeout");

    let result = harness.call(GET_RECIPE_COLLECTIONS, json!({})).await;

    assert_eq!(
        error_text(&result),
        "Failed to get collections: AnyList: timeout"
    );
}
