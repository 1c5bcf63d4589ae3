// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Signup model: one camper booked into one activity at an hour of the day.

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const LAST_HOUR: i64 = 23;

/// Stored signup row.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Signup {
    pub id: i64,
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
}

impl std::fmt::Display for Signup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signup {}", self.id)
    }
}

/// Body of `POST /signups`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewSignup {
    #[validate(range(min = 0, max = LAST_HOUR))]
    pub time: i64,
    pub camper_id: i64,
    pub activity_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_bounds() {
        for (time, ok) in [(-1, false), (0, true), (23, true), (24, false)] {
            let signup = NewSignup {
                time,
                camper_id: 1,
                activity_id: 1,
            };
            assert_eq!(signup.validate().is_ok(), ok, "time {}", time);
        }
    }

    #[test]
    fn test_missing_reference_is_rejected() {
        let result: Result<NewSignup, _> = serde_json::from_str(r#"{"time":9,"camper_id":1}"#);
        assert!(result.is_err());
    }
}
