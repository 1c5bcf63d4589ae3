// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Signup endpoint tests.

use axum::http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_list_signups_empty_is_not_found() {
    let (app, _state) = common::create_test_app().await;

    let (status, body) = common::send(&app, "GET", "/signups", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No signups found" }));
}

#[tokio::test]
async fn test_create_signup() {
    let (app, state) = common::create_test_app().await;
    let alex = common::add_camper(&state.db, "Alex", 12).await;
    let archery = common::add_activity(&state.db, "Archery", 2).await;

    let (status, body) = common::send(
        &app,
        "POST",
        "/signups",
        Some(json!({ "time": 9, "camper_id": alex.id, "activity_id": archery.id })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_i64());
    assert_eq!(body["time"], 9);
    assert_eq!(body["camper"], json!({ "id": alex.id, "name": "Alex", "age": 12 }));
    assert_eq!(
        body["activity"],
        json!({ "id": archery.id, "name": "Archery", "difficulty": 2 })
    );
    assert_eq!(state.db.count_signups().await.unwrap(), 1);
}

#[tokio::test]
async fn test_list_signups() {
    let (app, state) = common::create_test_app().await;
    let alex = common::add_camper(&state.db, "Alex", 12).await;
    let archery = common::add_activity(&state.db, "Archery", 2).await;
    let signup = common::add_signup(&state.db, &alex, &archery, 0).await;

    let (status, body) = common::send(&app, "GET", "/signups", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "id": signup,
            "time": 0,
            "camper_id": alex.id,
            "activity_id": archery.id,
            "camper": { "id": alex.id, "name": "Alex", "age": 12 },
            "activity": { "id": archery.id, "name": "Archery", "difficulty": 2 },
        }])
    );
}

#[tokio::test]
async fn test_create_signup_rejects_out_of_range_time() {
    let (app, state) = common::create_test_app().await;
    let alex = common::add_camper(&state.db, "Alex", 12).await;
    let archery = common::add_activity(&state.db, "Archery", 2).await;

    for time in [-1, 24, 100] {
        let (status, body) = common::send(
            &app,
            "POST",
            "/signups",
            Some(json!({ "time": time, "camper_id": alex.id, "activity_id": archery.id })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "time {}", time);
        assert_eq!(body, json!({ "errors": ["validation errors"] }));
    }

    assert_eq!(state.db.count_signups().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_signup_rejects_missing_references() {
    let (app, state) = common::create_test_app().await;
    let alex = common::add_camper(&state.db, "Alex", 12).await;
    let archery = common::add_activity(&state.db, "Archery", 2).await;

    let payloads = [
        json!({ "time": 9, "camper_id": 999, "activity_id": archery.id }),
        json!({ "time": 9, "camper_id": alex.id, "activity_id": 999 }),
        json!({ "time": 9, "camper_id": alex.id }),
        json!({ "time": 9, "camper_id": alex.id, "activity_id": archery.id, "id": 5 }),
    ];

    for payload in payloads {
        let (status, body) = common::send(&app, "POST", "/signups", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", payload);
        assert_eq!(body["errors"], json!(["validation errors"]));
    }

    assert_eq!(state.db.count_signups().await.unwrap(), 0);
}
