//! # HYGIA Core
//!
//! Core business logic for the HYGIA clinical-management prototype.
//!
//! This crate contains pure data operations and no I/O:
//! - The in-memory patient registry (listing, lookup, search, admission)
//! - Age derivation from birthdates
//! - Role-based navigation menus
//! - Clinical note acceptance (the save itself is simulated)
//! - View-models for the patient table and the detail panel
//!
//! **No API concerns**: HTTP servers, endpoint types, and terminal output
//! belong in `api-rest` and `hygia-cli`.
//!
//! All registry state lives for the lifetime of the owning process and is
//! lost on exit; there is no durable storage anywhere in this crate.

pub mod config;
pub mod constants;
pub mod demographics;
pub mod error;
pub mod navigation;
pub mod notes;
pub mod patient;
pub mod registry;
pub mod viewmodel;

pub use config::SessionConfig;
pub use error::{PatientError, PatientResult};
pub use navigation::{menu_for, MenuItem};
pub use notes::NoteService;
pub use patient::{NewPatient, PatientRecord};
pub use registry::PatientRegistry;
pub use viewmodel::{patient_rows, PatientDetail, PatientRow};

pub use hygia_id::PatientId;
pub use hygia_types::{NonEmptyText, Role};
