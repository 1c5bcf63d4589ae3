// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Camp API: campers, activities and the signups that join them.
//!
//! This crate provides a small REST backend over a SQLite store.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use config::Config;
use db::CampDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: CampDb,
}
