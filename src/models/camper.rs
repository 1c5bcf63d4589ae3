// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Camper model and its write payloads.
//!
//! The same rules apply to creation and to patches. Stored rows already
//! satisfy them, so a patch only needs its own fields checked before they
//! are merged into the row.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

pub const MIN_AGE: i64 = 8;
pub const MAX_AGE: i64 = 18;

/// Stored camper row. Serializes to its scalar columns only.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Camper {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: i64,
    pub name: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub age: i64,
}

impl std::fmt::Display for Camper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Camper {}: {}", self.id, self.name)
    }
}

/// Body of `POST /campers`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewCamper {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = MIN_AGE, max = MAX_AGE))]
    pub age: i64,
}

/// Body of `PATCH /campers/{id}`. Absent keys leave the field unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CamperPatch {
    #[serde(default, deserialize_with = "super::explicit")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::explicit")]
    pub age: Option<Option<i64>>,
}

impl CamperPatch {
    /// Check the supplied fields. An explicit `null` is rejected.
    pub fn into_changes(self) -> Result<CamperChanges, AppError> {
        let changes = CamperChanges {
            name: self
                .name
                .map(|name| name.ok_or_else(|| AppError::Validation("name is null".into())))
                .transpose()?,
            age: self
                .age
                .map(|age| age.ok_or_else(|| AppError::Validation("age is null".into())))
                .transpose()?,
        };
        changes.validate()?;
        Ok(changes)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}

/// Validated patch fields; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct CamperChanges {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(range(min = MIN_AGE, max = MAX_AGE))]
    pub age: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alex() -> Camper {
        Camper {
            id: 1,
            name: "Alex".to_string(),
            age: 12,
        }
    }

    fn parse_patch(json: &str) -> CamperPatch {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_new_camper_age_bounds() {
        for (age, ok) in [(7, false), (8, true), (18, true), (19, false)] {
            let camper = NewCamper {
                name: "Alex".to_string(),
                age,
            };
            assert_eq!(camper.validate().is_ok(), ok, "age {}", age);
        }
    }

    #[test]
    fn test_new_camper_rejects_empty_name() {
        let camper = NewCamper {
            name: String::new(),
            age: 12,
        };
        assert!(camper.validate().is_err());
    }

    #[test]
    fn test_new_camper_rejects_unknown_keys() {
        let result: Result<NewCamper, _> =
            serde_json::from_str(r#"{"name":"Alex","age":12,"id":99}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_absent_vs_null() {
        let patch = parse_patch(r#"{"age":13}"#);
        assert_eq!(patch.name, None);
        assert_eq!(patch.age, Some(Some(13)));

        let patch = parse_patch(r#"{"name":null}"#);
        assert_eq!(patch.name, Some(None));
        assert!(parse_patch("{}").is_empty());
    }

    #[test]
    fn test_patch_into_changes() {
        let changes = parse_patch(r#"{"name":"Sam","age":14}"#)
            .into_changes()
            .unwrap();
        assert_eq!(changes.name.as_deref(), Some("Sam"));
        assert_eq!(changes.age, Some(14));

        let changes = parse_patch(r#"{"age":8}"#).into_changes().unwrap();
        assert_eq!(changes, CamperChanges { name: None, age: Some(8) });
    }

    #[test]
    fn test_patch_rejects_invalid_values() {
        for json in [
            r#"{"age":25}"#,
            r#"{"age":null}"#,
            r#"{"name":""}"#,
            r#"{"name":null}"#,
        ] {
            let err = parse_patch(json).into_changes().unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{}", json);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(alex().to_string(), "Camper 1: Alex");
    }
}
