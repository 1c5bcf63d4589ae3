// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity routes.

use crate::error::{AppError, Result};
use crate::models::{Activity, Camper};
use crate::routes::entity_id;
use crate::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{id}", get(get_activity).delete(delete_activity))
}

/// Activity with its signups. Each signup embeds its camper and leaves out
/// the activity it belongs to.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityDetail {
    #[serde(flatten)]
    pub activity: Activity,
    pub signups: Vec<ActivitySignup>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitySignup {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub time: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub camper_id: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub activity_id: i64,
    pub camper: Camper,
}

async fn list_activities(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Activity>>> {
    Ok(Json(state.db.list_activities().await?))
}

async fn get_activity(
    State(state): State<Arc<AppState>>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<ActivityDetail>> {
    let id = entity_id(path, AppError::ACTIVITY_NOT_FOUND)?;
    let activity = state
        .db
        .get_activity(id)
        .await?
        .ok_or(AppError::ACTIVITY_NOT_FOUND)?;

    let signups = state
        .db
        .signups_for_activity(id)
        .await?
        .into_iter()
        .map(|row| ActivitySignup {
            camper: row.camper(),
            id: row.id,
            time: row.time,
            camper_id: row.camper_id,
            activity_id: row.activity_id,
        })
        .collect();

    Ok(Json(ActivityDetail { activity, signups }))
}

/// Delete an activity; its signups go with it.
async fn delete_activity(
    State(state): State<Arc<AppState>>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<StatusCode> {
    let id = entity_id(path, AppError::ACTIVITY_NOT_FOUND)?;

    if !state.db.delete_activity(id).await? {
        return Err(AppError::ACTIVITY_NOT_FOUND);
    }
    Ok(StatusCode::NO_CONTENT)
}
