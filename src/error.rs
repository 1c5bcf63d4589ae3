// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Message returned for every rejected write.
pub const VALIDATION_MESSAGE: &str = "validation errors";

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(&'static str),

    /// Rejected write. The cause is logged, never returned to the client.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub const CAMPER_NOT_FOUND: AppError = AppError::NotFound("Camper not found");
    pub const ACTIVITY_NOT_FOUND: AppError = AppError::NotFound("Activity not found");
    pub const NO_SIGNUPS: AppError = AppError::NotFound("No signups found");
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// JSON body for not-found and server errors
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// JSON body for validation failures
#[derive(Serialize)]
struct ValidationResponse {
    errors: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: msg.to_string(),
                }),
            )
                .into_response(),
            AppError::Validation(cause) => {
                tracing::warn!(cause = %cause, "Rejected write");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationResponse {
                        errors: vec![VALIDATION_MESSAGE.to_string()],
                    }),
                )
                    .into_response()
            }
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                internal_error()
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "internal server error".to_string(),
        }),
    )
        .into_response()
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
