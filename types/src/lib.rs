//! Core state types for Reveal.
//!
//! This crate contains pure state transitions with no IO, no async, and minimal
//! dependencies: the visibility trigger, the eased counter and the bounded
//! stepper are all driven by values the caller feeds in (viewport snapshots,
//! elapsed time, frame deltas). Clocks and subscriptions live in the engine.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

pub mod ui;

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use thiserror::Error;

// ============================================================================
// Contract errors
// ============================================================================

/// A caller broke an input contract. The operation was rejected and no state
/// changed; these are never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ContractError {
    #[error("animation duration must be greater than zero")]
    ZeroDuration,
    #[error("visibility threshold must be in (0, 1], got {value}")]
    InvalidThreshold { value: f64 },
    #[error("a stepper needs at least one step")]
    EmptySteps,
}

// ============================================================================
// NonEmpty String Types
// ============================================================================

/// A string guaranteed to be non-empty (after trimming).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyString(String);

#[derive(Debug, Error)]
#[error("value must not be empty")]
pub struct EmptyStringError;

impl NonEmptyString {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyStringError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyStringError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = EmptyStringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

impl Deref for NonEmptyString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
