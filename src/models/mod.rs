// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod activity;
pub mod camper;
pub mod signup;

pub use activity::Activity;
pub use camper::{Camper, CamperChanges, CamperPatch, NewCamper};
pub use signup::{NewSignup, Signup};

/// Keeps an explicit `null` distinguishable from an absent key.
///
/// Use with `#[serde(default)]`: absent gives `None`, `null` gives `Some(None)`.
pub(crate) fn explicit<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Option::<T>::deserialize(deserializer).map(Some)
}
