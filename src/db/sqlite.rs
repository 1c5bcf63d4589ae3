// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SQLite repository with typed operations.
//!
//! Provides high-level operations for:
//! - Campers (list, fetch, create, patch)
//! - Activities (list, fetch, create, delete with cascade)
//! - Signups (list and create, joined with their camper and activity)
//!
//! Failed reads are `AppError::Database`; a failed insert or update is
//! `AppError::Validation`.

use crate::db::tables;
use crate::error::AppError;
use crate::models::{Activity, Camper, CamperPatch, NewCamper, NewSignup, Signup};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

const MAX_CONNECTIONS: u32 = 5;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS activities (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  difficulty INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS campers (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL CHECK (name <> ''),
  age INTEGER NOT NULL CHECK (age BETWEEN 8 AND 18)
);

CREATE TABLE IF NOT EXISTS signups (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  time INTEGER NOT NULL CHECK (time BETWEEN 0 AND 23),
  camper_id INTEGER NOT NULL REFERENCES campers (id) ON DELETE CASCADE,
  activity_id INTEGER NOT NULL REFERENCES activities (id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS ix_signups_camper_id ON signups (camper_id);
CREATE INDEX IF NOT EXISTS ix_signups_activity_id ON signups (activity_id);
"#;

const SQL_LIST_CAMPERS: &str = "SELECT id, name, age FROM campers ORDER BY id";
const SQL_GET_CAMPER: &str = "SELECT id, name, age FROM campers WHERE id = ?";
const SQL_INSERT_CAMPER: &str =
    "INSERT INTO campers (name, age) VALUES (?, ?) RETURNING id, name, age";
const SQL_UPDATE_CAMPER: &str = r#"
UPDATE campers
SET name = COALESCE(?, name), age = COALESCE(?, age)
WHERE id = ?
RETURNING id, name, age
"#;

const SQL_LIST_ACTIVITIES: &str = "SELECT id, name, difficulty FROM activities ORDER BY id";
const SQL_GET_ACTIVITY: &str = "SELECT id, name, difficulty FROM activities WHERE id = ?";
const SQL_INSERT_ACTIVITY: &str =
    "INSERT INTO activities (name, difficulty) VALUES (?, ?) RETURNING id, name, difficulty";
const SQL_DELETE_ACTIVITY: &str = "DELETE FROM activities WHERE id = ?";

const SQL_INSERT_SIGNUP: &str =
    "INSERT INTO signups (time, camper_id, activity_id) VALUES (?, ?, ?) RETURNING id";

const SQL_SIGNUPS_FOR_CAMPER: &str = r#"
SELECT
  s.id,
  s.time,
  s.camper_id,
  s.activity_id,
  a.name AS activity_name,
  a.difficulty AS activity_difficulty
FROM signups s
JOIN activities a ON a.id = s.activity_id
WHERE s.camper_id = ?
ORDER BY s.id
"#;

const SQL_SIGNUPS_FOR_ACTIVITY: &str = r#"
SELECT
  s.id,
  s.time,
  s.camper_id,
  s.activity_id,
  c.name AS camper_name,
  c.age AS camper_age
FROM signups s
JOIN campers c ON c.id = s.camper_id
WHERE s.activity_id = ?
ORDER BY s.id
"#;

const SQL_SELECT_SIGNUPS: &str = r#"
SELECT
  s.id,
  s.time,
  s.camper_id,
  s.activity_id,
  c.name AS camper_name,
  c.age AS camper_age,
  a.name AS activity_name,
  a.difficulty AS activity_difficulty
FROM signups s
JOIN campers c ON c.id = s.camper_id
JOIN activities a ON a.id = s.activity_id
"#;

/// Signup joined with its activity (camper side omitted).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CamperSignupRow {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub activity_name: String,
    pub activity_difficulty: i64,
}

impl CamperSignupRow {
    pub fn activity(&self) -> Activity {
        Activity {
            id: self.activity_id,
            name: self.activity_name.clone(),
            difficulty: self.activity_difficulty,
        }
    }
}

/// Signup joined with its camper (activity side omitted).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivitySignupRow {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub camper_name: String,
    pub camper_age: i64,
}

impl ActivitySignupRow {
    pub fn camper(&self) -> Camper {
        Camper {
            id: self.camper_id,
            name: self.camper_name.clone(),
            age: self.camper_age,
        }
    }
}

/// Signup joined with both its camper and its activity.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SignupRow {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
    pub camper_name: String,
    pub camper_age: i64,
    pub activity_name: String,
    pub activity_difficulty: i64,
}

impl SignupRow {
    pub fn signup(&self) -> Signup {
        Signup {
            id: self.id,
            time: self.time,
            camper_id: self.camper_id,
            activity_id: self.activity_id,
        }
    }

    pub fn camper(&self) -> Camper {
        Camper {
            id: self.camper_id,
            name: self.camper_name.clone(),
            age: self.camper_age,
        }
    }

    pub fn activity(&self) -> Activity {
        Activity {
            id: self.activity_id,
            name: self.activity_name.clone(),
            difficulty: self.activity_difficulty,
        }
    }
}

fn db_error(err: sqlx::Error) -> AppError {
    AppError::Database(err.to_string())
}

/// A rejected insert or update (constraint, foreign key, ...) is reported to
/// clients like any other invalid write.
fn write_error(err: sqlx::Error) -> AppError {
    AppError::Validation(err.to_string())
}

/// SQLite database client.
#[derive(Clone)]
pub struct CampDb {
    pool: SqlitePool,
}

impl CampDb {
    /// Connect to the database at `url`, creating the file if missing.
    ///
    /// Foreign keys are enforced on every connection.
    pub async fn connect(url: &str) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| AppError::Database(format!("Invalid database URL {}: {}", url, e)))?
            .create_if_missing(true)
            .foreign_keys(true);

        // Every connection to an in-memory database sees its own database,
        // so those pools hold exactly one connection that never expires.
        let pool_options = if url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to SQLite: {}", e)))?;

        tracing::info!(url = url, "Connected to SQLite");
        Ok(Self { pool })
    }

    /// Create a fresh in-memory database with the schema applied.
    pub async fn new_in_memory() -> Result<Self, AppError> {
        let db = Self::connect("sqlite::memory:").await?;
        db.ensure_schema().await?;
        Ok(db)
    }

    /// Create the tables if they do not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::raw_sql(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(())
    }

    /// Delete every row from every table (children first).
    pub async fn clear_all(&self) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;
        for table in [tables::SIGNUPS, tables::CAMPERS, tables::ACTIVITIES] {
            let sql = format!("DELETE FROM {}", table);
            sqlx::query(&sql)
                .execute(&mut *tx)
                .await
                .map_err(db_error)?;
        }
        tx.commit().await.map_err(db_error)
    }

    // ─── Camper Operations ───────────────────────────────────────

    pub async fn list_campers(&self) -> Result<Vec<Camper>, AppError> {
        sqlx::query_as::<_, Camper>(SQL_LIST_CAMPERS)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)
    }

    pub async fn get_camper(&self, id: i64) -> Result<Option<Camper>, AppError> {
        sqlx::query_as::<_, Camper>(SQL_GET_CAMPER)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)
    }

    /// Insert a camper. The payload must already be validated.
    pub async fn create_camper(&self, camper: &NewCamper) -> Result<Camper, AppError> {
        let created = sqlx::query_as::<_, Camper>(SQL_INSERT_CAMPER)
            .bind(&camper.name)
            .bind(camper.age)
            .fetch_one(&self.pool)
            .await
            .map_err(write_error)?;

        tracing::info!(camper = %created, "Camper created");
        Ok(created)
    }

    /// Validate `patch` and merge it into the stored camper.
    ///
    /// Returns `Ok(None)` if no camper has this id, even when the patch is
    /// invalid. The merge is a single `UPDATE`, so concurrent patches
    /// queue on the write lock instead of failing.
    pub async fn update_camper(
        &self,
        id: i64,
        patch: CamperPatch,
    ) -> Result<Option<Camper>, AppError> {
        if patch.is_empty() {
            return self.get_camper(id).await;
        }

        let changes = match patch.into_changes() {
            Ok(changes) => changes,
            Err(err) => {
                return match self.get_camper(id).await? {
                    Some(_) => Err(err),
                    None => Ok(None),
                };
            }
        };

        let updated = sqlx::query_as::<_, Camper>(SQL_UPDATE_CAMPER)
            .bind(changes.name)
            .bind(changes.age)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(write_error)?;

        if let Some(camper) = &updated {
            tracing::info!(camper = %camper, "Camper updated");
        }
        Ok(updated)
    }

    pub async fn signups_for_camper(
        &self,
        camper_id: i64,
    ) -> Result<Vec<CamperSignupRow>, AppError> {
        sqlx::query_as::<_, CamperSignupRow>(SQL_SIGNUPS_FOR_CAMPER)
            .bind(camper_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)
    }

    // ─── Activity Operations ─────────────────────────────────────

    pub async fn list_activities(&self) -> Result<Vec<Activity>, AppError> {
        sqlx::query_as::<_, Activity>(SQL_LIST_ACTIVITIES)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)
    }

    pub async fn get_activity(&self, id: i64) -> Result<Option<Activity>, AppError> {
        sqlx::query_as::<_, Activity>(SQL_GET_ACTIVITY)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)
    }

    /// Insert an activity. There is no HTTP endpoint for this; the seed tool
    /// and tests use it.
    pub async fn create_activity(&self, name: &str, difficulty: i64) -> Result<Activity, AppError> {
        let created = sqlx::query_as::<_, Activity>(SQL_INSERT_ACTIVITY)
            .bind(name)
            .bind(difficulty)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        tracing::info!(activity = %created, "Activity created");
        Ok(created)
    }

    /// Delete an activity and, through the foreign key, its signups.
    ///
    /// Returns `false` if no activity has this id.
    pub async fn delete_activity(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(SQL_DELETE_ACTIVITY)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(activity_id = id, "Activity deleted");
        }
        Ok(deleted)
    }

    pub async fn signups_for_activity(
        &self,
        activity_id: i64,
    ) -> Result<Vec<ActivitySignupRow>, AppError> {
        sqlx::query_as::<_, ActivitySignupRow>(SQL_SIGNUPS_FOR_ACTIVITY)
            .bind(activity_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)
    }

    // ─── Signup Operations ───────────────────────────────────────

    pub async fn list_signups(&self) -> Result<Vec<SignupRow>, AppError> {
        let sql = format!("{} ORDER BY s.id", SQL_SELECT_SIGNUPS);
        sqlx::query_as::<_, SignupRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)
    }

    /// Insert a signup and return it joined with its camper and activity.
    ///
    /// A missing camper or activity fails the insert on the foreign key.
    pub async fn create_signup(&self, signup: &NewSignup) -> Result<SignupRow, AppError> {
        let id: i64 = sqlx::query_scalar(SQL_INSERT_SIGNUP)
            .bind(signup.time)
            .bind(signup.camper_id)
            .bind(signup.activity_id)
            .fetch_one(&self.pool)
            .await
            .map_err(write_error)?;

        let sql = format!("{} WHERE s.id = ?", SQL_SELECT_SIGNUPS);
        let created = sqlx::query_as::<_, SignupRow>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        tracing::info!(
            signup = %created.signup(),
            camper_id = created.camper_id,
            activity_id = created.activity_id,
            "Signup created"
        );
        Ok(created)
    }

    /// Number of stored signups.
    pub async fn count_signups(&self) -> Result<i64, AppError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM signups")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)
    }
}
