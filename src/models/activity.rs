// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Camp activity model.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Stored activity row. Serializes to its scalar columns only.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: i64,
    pub name: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub difficulty: i64,
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Activity {}: {}", self.id, self.name)
    }
}
