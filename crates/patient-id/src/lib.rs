//! Patient identifier type and validation.
//!
//! HYGIA addresses patients with a *canonical* registry identifier: the letter
//! `P` followed by the patient's sequence number, zero-padded to at least
//! three digits.
//!
//! This module provides a small wrapper type ([`PatientId`]) that *guarantees*
//! the canonical format once constructed.
//!
//! ## Canonical identifier form
//! - First character: `P`
//! - Remainder: three or more ASCII digits
//! - Examples: `P001`, `P042`, `P1000`
//!
//! Notes:
//! - Identifiers are assigned by the registry from its record count; callers
//!   never invent them. Padding widens past three digits once the sequence
//!   exceeds 999, so ordering by string compare is not guaranteed — compare
//!   sequence numbers instead.
//! - Canonical form is *required* for externally supplied identifiers (for
//!   example, from CLI/API inputs). Use [`PatientId::parse`] to validate an
//!   input string.
//! - Non-canonical values (lowercase `p`, missing padding, non-digits) are
//!   rejected.

mod id;

pub use id::PatientId;

/// Error type for patient identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    /// Invalid input provided
    #[error("Invalid patient id: {0}")]
    InvalidInput(String),
}

/// Result type for patient identifier operations.
pub type IdResult<T> = Result<T, IdError>;
