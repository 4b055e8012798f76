//! Patient record and admission input types.

use hygia_id::PatientId;
use serde::{Deserialize, Serialize};

/// A single patient's attribute set.
///
/// Records are created only by [`crate::PatientRegistry::register`] and are
/// never mutated or deleted afterwards. The registry assigns `id`; every
/// other field is carried verbatim from the admission input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Registry-assigned identifier (`P001`, `P002`, ...).
    pub id: PatientId,
    /// Display name.
    pub name: String,
    /// National identity number; free-form, used for search matching only.
    pub national_id: String,
    /// Contact phone number, if one was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// ISO calendar date of birth (`YYYY-MM-DD`); used only to derive age.
    pub birthdate: String,
    /// Short gender code; not validated against an enumerated domain.
    pub gender: String,
}

/// Admission input for a new patient.
///
/// The registry trusts these strings verbatim - including empty ones - and
/// performs no field validation. Presence checks, where a surface wants them,
/// happen before this struct is built.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub national_id: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub birthdate: String,
    pub gender: String,
}
