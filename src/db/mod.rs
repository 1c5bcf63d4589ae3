//! Database layer (SQLite).

pub mod sqlite;

pub use sqlite::{ActivitySignupRow, CampDb, CamperSignupRow, SignupRow};

/// Table names as constants.
pub mod tables {
    pub const ACTIVITIES: &str = "activities";
    pub const CAMPERS: &str = "campers";
    pub const SIGNUPS: &str = "signups";
}
