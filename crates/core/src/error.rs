//! Error taxonomy for patient operations.
//!
//! Registry reads never fail: absence is signalled with `Option`, not an
//! error. The variants here are the user-visible failure conditions that the
//! surface layers (REST, CLI) translate into responses - nothing is handled
//! with ad hoc alerts.

/// Errors surfaced by patient operations.
#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    /// No patient with the requested identifier exists in the registry.
    #[error("patient not found: {0}")]
    NotFound(String),
    /// A note was submitted without a loaded patient to attach it to.
    #[error("no active patient is loaded")]
    NoActivePatient,
    /// A note was submitted with empty or whitespace-only content.
    #[error("note content cannot be empty")]
    EmptyNote,
}

pub type PatientResult<T> = std::result::Result<T, PatientError>;
