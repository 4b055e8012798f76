//! Clinical evolution notes.
//!
//! Note saving is *simulated*: an accepted note is written to the diagnostic
//! log and nowhere else, so it is gone when the process ends. What this
//! module does enforce are the two preconditions for the save action - a
//! loaded patient and non-empty content - as structured errors instead of
//! user alerts.

use crate::error::{PatientError, PatientResult};
use crate::patient::PatientRecord;
use hygia_types::NonEmptyText;

/// Service accepting clinical notes for loaded patients.
#[derive(Clone, Debug, Default)]
pub struct NoteService;

impl NoteService {
    /// Creates a new `NoteService` instance.
    pub fn new() -> Self {
        Self
    }

    /// Accepts a note for the loaded patient.
    ///
    /// The returned value is the trimmed note content that was accepted. The
    /// only persistence is an info-level log entry.
    ///
    /// # Arguments
    ///
    /// * `patient` - The currently loaded patient, if any.
    /// * `content` - Raw note text from the user.
    ///
    /// # Errors
    ///
    /// - [`PatientError::NoActivePatient`] when no patient is loaded.
    /// - [`PatientError::EmptyNote`] when the content trims to nothing.
    ///
    /// Both failures leave all state unchanged.
    pub fn save_note(
        &self,
        patient: Option<&PatientRecord>,
        content: &str,
    ) -> PatientResult<NonEmptyText> {
        let patient = patient.ok_or(PatientError::NoActivePatient)?;
        let note = NonEmptyText::new(content).map_err(|_| PatientError::EmptyNote)?;

        tracing::info!(
            patient_id = %patient.id,
            patient_name = %patient.name,
            "saving evolution note (simulated): {note}"
        );

        Ok(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PatientRegistry;

    #[test]
    fn save_without_a_loaded_patient_is_rejected() {
        let service = NoteService::new();
        let err = service
            .save_note(None, "patient stable overnight")
            .expect_err("expected rejection");
        assert!(matches!(err, PatientError::NoActivePatient));
    }

    #[test]
    fn save_with_empty_content_is_rejected() {
        let registry = PatientRegistry::seeded();
        let patient = registry.find_by_id("P001");
        let service = NoteService::new();

        for content in ["", "   ", "\n\t"] {
            let err = service
                .save_note(patient, content)
                .expect_err("expected rejection");
            assert!(matches!(err, PatientError::EmptyNote), "content: {content:?}");
        }
    }

    #[test]
    fn accepted_note_returns_trimmed_content() {
        let registry = PatientRegistry::seeded();
        let patient = registry.find_by_id("P001");
        let note = NoteService::new()
            .save_note(patient, "  patient stable overnight  ")
            .expect("note accepted");
        assert_eq!(note.as_str(), "patient stable overnight");
    }
}
