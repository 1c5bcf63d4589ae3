// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::{Body, Bytes};
use axum::http::{header, Request, StatusCode};
use camp_api::config::Config;
use camp_api::db::CampDb;
use camp_api::models::{Activity, Camper, NewCamper, NewSignup};
use camp_api::routes::create_router;
use camp_api::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app backed by a fresh in-memory database.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub async fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let db = CampDb::new_in_memory()
        .await
        .expect("Failed to create in-memory database");

    let state = Arc::new(AppState { config, db });
    (create_router(state.clone()), state)
}

/// Send a request and return the status and raw body.
#[allow(dead_code)]
pub async fn send_raw(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Bytes) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    (status, bytes)
}

/// Send a request and parse the body as JSON (`Null` when empty).
#[allow(dead_code)]
pub async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let body = body.map(|v| v.to_string());
    let (status, bytes) = send_raw(app, method, uri, body.as_deref()).await;
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    (status, serde_json::from_slice(&bytes).expect("body is JSON"))
}

#[allow(dead_code)]
pub async fn add_camper(db: &CampDb, name: &str, age: i64) -> Camper {
    db.create_camper(&NewCamper {
        name: name.to_string(),
        age,
    })
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn add_activity(db: &CampDb, name: &str, difficulty: i64) -> Activity {
    db.create_activity(name, difficulty).await.unwrap()
}

#[allow(dead_code)]
pub async fn add_signup(db: &CampDb, camper: &Camper, activity: &Activity, time: i64) -> i64 {
    db.create_signup(&NewSignup {
        time,
        camper_id: camper.id,
        activity_id: activity.id,
    })
    .await
    .unwrap()
    .id
}
