// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Signup routes.

use crate::db::SignupRow;
use crate::error::{AppError, Result};
use crate::models::{Activity, Camper, NewSignup};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/signups", get(list_signups).post(create_signup))
}

/// Signup with its camper and activity, both as plain scalars.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SignupResponse {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub time: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub camper_id: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub activity_id: i64,
    pub camper: Camper,
    pub activity: Activity,
}

impl From<SignupRow> for SignupResponse {
    fn from(row: SignupRow) -> Self {
        Self {
            camper: row.camper(),
            activity: row.activity(),
            id: row.id,
            time: row.time,
            camper_id: row.camper_id,
            activity_id: row.activity_id,
        }
    }
}

/// List all signups. An empty table is reported as not found.
async fn list_signups(State(state): State<Arc<AppState>>) -> Result<Json<Vec<SignupResponse>>> {
    let signups = state.db.list_signups().await?;
    if signups.is_empty() {
        return Err(AppError::NO_SIGNUPS);
    }
    Ok(Json(signups.into_iter().map(SignupResponse::from).collect()))
}

async fn create_signup(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<NewSignup>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupResponse>)> {
    let Json(new_signup) = body?;
    new_signup.validate()?;

    let signup = state.db.create_signup(&new_signup).await?;

    Ok((StatusCode::CREATED, Json(signup.into())))
}
