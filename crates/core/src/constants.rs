//! Display constants used throughout the HYGIA core crate.
//!
//! This module contains the placeholder strings so view-models and surfaces
//! stay consistent with each other.

/// Placeholder shown when a patient has no phone number on record.
pub const PHONE_PLACEHOLDER: &str = "N/D";

/// Placeholder shown when an age cannot be derived from a birthdate.
pub const AGE_PLACEHOLDER: &str = "--";

/// Last-visit label on the detail panel. No visit data exists, so the value
/// is fixed.
pub const LAST_VISIT_SIMULATED: &str = "Today (simulated)";
