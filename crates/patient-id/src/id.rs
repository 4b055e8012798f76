//! Internal implementation of the patient identifier wrapper.

use crate::{IdError, IdResult};
use std::fmt;
use std::str::FromStr;

/// Minimum number of digits in a canonical identifier.
const PAD_WIDTH: usize = 3;

/// HYGIA's canonical patient identifier (`P` + zero-padded sequence number).
///
/// This wrapper type guarantees that once constructed, the contained
/// identifier is in canonical form. It provides type safety for identifier
/// operations and keeps formatting consistent across the system.
///
/// # When to use this type
/// Use this wrapper whenever you are:
/// - Accepting an identifier string from *outside* the core (CLI input, API
///   request, etc), or
/// - Allocating the identifier for a newly registered patient.
///
/// Once you have a `PatientId`, you can safely assume the contained value is
/// valid and in canonical form.
///
/// # Construction
/// - [`PatientId::from_sequence`] formats a registry sequence number (for new
///   registrations).
/// - [`PatientId::parse`] validates an externally supplied identifier.
///
/// # Display format
/// When displayed or converted to string, `PatientId` always produces the
/// canonical form, e.g. `P001`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PatientId(String);

impl PatientId {
    /// Formats a registry sequence number as a canonical identifier.
    ///
    /// Sequence numbers are 1-based: the first record in a registry is `P001`.
    /// Numbers above 999 widen the identifier rather than truncate it.
    ///
    /// # Arguments
    ///
    /// * `sequence` - 1-based position of the record in the registry.
    ///
    /// # Returns
    ///
    /// Returns a canonical `PatientId` for the given sequence number.
    pub fn from_sequence(sequence: u32) -> Self {
        Self(format!("P{sequence:0width$}", width = PAD_WIDTH))
    }

    /// Validates and parses an identifier string that must already be in
    /// canonical form.
    ///
    /// This does **not** normalise other spellings (for example, lowercase
    /// `p001` or unpadded `P1`). Callers must provide the canonical
    /// representation, which keeps identifiers byte-comparable everywhere.
    ///
    /// # Arguments
    ///
    /// * `input` - Identifier string to validate and wrap.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidInput`] if `input` is not in canonical form.
    pub fn parse(input: &str) -> IdResult<Self> {
        if Self::is_canonical(input) {
            return Ok(Self(input.to_owned()));
        }
        Err(IdError::InvalidInput(format!(
            "patient id must be 'P' followed by at least {PAD_WIDTH} digits, got: '{input}'"
        )))
    }

    /// Returns true if `input` is in canonical identifier form.
    ///
    /// This is a purely syntactic check that validates:
    /// - Leading `P`
    /// - At least three trailing ASCII digits, nothing else
    ///
    /// It is fast and can be used for pre-validation before calling
    /// [`PatientId::parse`].
    pub fn is_canonical(input: &str) -> bool {
        match input.strip_prefix('P') {
            Some(digits) => {
                digits.len() >= PAD_WIDTH && digits.bytes().all(|b| b.is_ascii_digit())
            }
            None => false,
        }
    }

    /// Returns the 1-based sequence number encoded in this identifier.
    pub fn sequence(&self) -> u32 {
        // Canonical form guarantees an all-digit suffix; saturate rather than
        // panic on absurd widths.
        self.0[1..].parse().unwrap_or(u32::MAX)
    }

    /// Returns the canonical identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PatientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for PatientId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PatientId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PatientId::parse(&s).map_err(serde::de::Error::custom)
    }
}
