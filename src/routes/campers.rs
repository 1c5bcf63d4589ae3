// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Camper routes.

use crate::error::{AppError, Result};
use crate::models::{Activity, Camper, CamperPatch, NewCamper};
use crate::routes::entity_id;
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
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
    Router::new()
        .route("/campers", get(list_campers).post(create_camper))
        .route("/campers/{id}", get(get_camper).patch(update_camper))
}

/// Camper with its signups. Each signup embeds its activity and leaves out
/// the camper it belongs to.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CamperDetail {
    #[serde(flatten)]
    pub camper: Camper,
    pub signups: Vec<CamperSignup>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CamperSignup {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub time: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub camper_id: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub activity_id: i64,
    pub activity: Activity,
}

async fn list_campers(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Camper>>> {
    Ok(Json(state.db.list_campers().await?))
}

async fn create_camper(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<NewCamper>, JsonRejection>,
) -> Result<(StatusCode, Json<Camper>)> {
    let Json(new_camper) = body?;
    new_camper.validate()?;

    let camper = state.db.create_camper(&new_camper).await?;

    Ok((StatusCode::ACCEPTED, Json(camper)))
}

async fn get_camper(
    State(state): State<Arc<AppState>>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<CamperDetail>> {
    let id = entity_id(path, AppError::CAMPER_NOT_FOUND)?;
    let camper = state
        .db
        .get_camper(id)
        .await?
        .ok_or(AppError::CAMPER_NOT_FOUND)?;

    let signups = state
        .db
        .signups_for_camper(id)
        .await?
        .into_iter()
        .map(|row| CamperSignup {
            activity: row.activity(),
            id: row.id,
            time: row.time,
            camper_id: row.camper_id,
            activity_id: row.activity_id,
        })
        .collect();

    Ok(Json(CamperDetail { camper, signups }))
}

/// Apply a partial update. A missing camper wins over a bad body.
async fn update_camper(
    State(state): State<Arc<AppState>>,
    path: std::result::Result<Path<i64>, PathRejection>,
    body: std::result::Result<Json<CamperPatch>, JsonRejection>,
) -> Result<(StatusCode, Json<Camper>)> {
    let id = entity_id(path, AppError::CAMPER_NOT_FOUND)?;

    let patch = match body {
        Ok(Json(patch)) => patch,
        Err(rejection) => {
            if state.db.get_camper(id).await?.is_none() {
                return Err(AppError::CAMPER_NOT_FOUND);
            }
            return Err(rejection.into());
        }
    };

    let camper = state
        .db
        .update_camper(id, patch)
        .await?
        .ok_or(AppError::CAMPER_NOT_FOUND)?;

    Ok((StatusCode::ACCEPTED, Json(camper)))
}
