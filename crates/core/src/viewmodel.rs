//! View-models for the dashboard surfaces.
//!
//! Surfaces render from structured descriptors, never from concatenated
//! markup: the patient table is a list of [`PatientRow`]s and the detail
//! panel is a [`PatientDetail`] state. Both are plain data and carry their
//! placeholders already applied, so every surface shows the same thing.

use crate::constants::{LAST_VISIT_SIMULATED, PHONE_PLACEHOLDER};
use crate::demographics::age_display;
use crate::patient::PatientRecord;
use crate::registry::PatientRegistry;
use chrono::NaiveDate;
use serde::Serialize;

/// One row of the patient table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PatientRow {
    pub id: String,
    pub name: String,
    pub national_id: String,
    /// Phone number, or the `N/D` placeholder when absent.
    pub phone: String,
    /// Path of the patient's detail view.
    pub detail_path: String,
}

impl PatientRow {
    /// Builds the row descriptor for one record.
    pub fn from_record(record: &PatientRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            national_id: record.national_id.clone(),
            phone: phone_display(record.phone.as_deref()),
            detail_path: format!("/patients/{}", record.id),
        }
    }
}

/// Builds table rows for a sequence of records, preserving its order.
pub fn patient_rows<'a, I>(records: I) -> Vec<PatientRow>
where
    I: IntoIterator<Item = &'a PatientRecord>,
{
    records.into_iter().map(PatientRow::from_record).collect()
}

/// Display form of an optional phone number.
pub fn phone_display(phone: Option<&str>) -> String {
    match phone {
        Some(p) if !p.trim().is_empty() => p.to_owned(),
        _ => PHONE_PLACEHOLDER.to_owned(),
    }
}

/// State of the patient detail panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PatientDetail {
    /// A patient was requested and found.
    Loaded {
        id: String,
        name: String,
        /// Whole-years age, or `--` when the birthdate is unusable.
        age: String,
        last_visit: String,
    },
    /// A patient was requested but no record has that identifier.
    NotFound { requested_id: String },
    /// No patient identifier was requested at all.
    NotSelected,
}

impl PatientDetail {
    /// Resolves the detail state for an optional requested identifier.
    ///
    /// `on` is the reference date for the age display.
    pub fn resolve(registry: &PatientRegistry, requested: Option<&str>, on: NaiveDate) -> Self {
        match requested {
            None => PatientDetail::NotSelected,
            Some(id) => match registry.find_by_id(id) {
                Some(record) => PatientDetail::Loaded {
                    id: record.id.to_string(),
                    name: record.name.clone(),
                    age: age_display(&record.birthdate, on),
                    last_visit: LAST_VISIT_SIMULATED.to_owned(),
                },
                None => PatientDetail::NotFound {
                    requested_id: id.to_owned(),
                },
            },
        }
    }
}
