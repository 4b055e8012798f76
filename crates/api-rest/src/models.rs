//! Wire models for the REST API.
//!
//! Hand-written serde DTOs; the core's domain types stay off the wire so the
//! HTTP contract can evolve independently of them.

use hygia_core::{MenuItem, PatientDetail, PatientRecord, PatientRow, SessionConfig};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// A full patient record as stored in the registry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PatientDto {
    pub id: String,
    pub name: String,
    pub national_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub birthdate: String,
    pub gender: String,
}

impl From<&PatientRecord> for PatientDto {
    fn from(record: &PatientRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            national_id: record.national_id.clone(),
            phone: record.phone.clone(),
            birthdate: record.birthdate.clone(),
            gender: record.gender.clone(),
        }
    }
}

/// One row of the patient table, placeholders already applied.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PatientRowDto {
    pub id: String,
    pub name: String,
    pub national_id: String,
    pub phone: String,
    pub detail_path: String,
}

impl From<PatientRow> for PatientRowDto {
    fn from(row: PatientRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            national_id: row.national_id,
            phone: row.phone,
            detail_path: row.detail_path,
        }
    }
}

/// Patient table response for the list/search view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListPatientsRes {
    pub patients: Vec<PatientRowDto>,
}

/// Admission request body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterPatientReq {
    pub name: String,
    pub national_id: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub birthdate: String,
    pub gender: String,
}

/// Admission response carrying the stored record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterPatientRes {
    pub patient: PatientDto,
}

/// Loaded-patient card on the detail panel.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PatientCardDto {
    pub id: String,
    pub name: String,
    pub age: String,
    pub last_visit: String,
}

/// Detail panel response.
///
/// `state` is `loaded` or `not_found`; exactly one of `patient` and
/// `requested_id` accompanies it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PatientDetailRes {
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient: Option<PatientCardDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_id: Option<String>,
}

impl From<PatientDetail> for PatientDetailRes {
    fn from(detail: PatientDetail) -> Self {
        match detail {
            PatientDetail::Loaded {
                id,
                name,
                age,
                last_visit,
            } => Self {
                state: "loaded".into(),
                patient: Some(PatientCardDto {
                    id,
                    name,
                    age,
                    last_visit,
                }),
                requested_id: None,
            },
            PatientDetail::NotFound { requested_id } => Self {
                state: "not_found".into(),
                patient: None,
                requested_id: Some(requested_id),
            },
            PatientDetail::NotSelected => Self {
                state: "not_selected".into(),
                patient: None,
                requested_id: None,
            },
        }
    }
}

/// Clinical note submission body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveNoteReq {
    pub content: String,
}

/// Acknowledgement of an accepted (simulated) note save.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveNoteRes {
    pub patient_id: String,
    /// Trimmed content that was accepted.
    pub content: String,
}

/// One sidebar entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuItemDto {
    pub label: String,
    pub icon: String,
    pub destination: String,
}

impl From<&MenuItem> for MenuItemDto {
    fn from(item: &MenuItem) -> Self {
        Self {
            label: item.label.into(),
            icon: item.icon.into(),
            destination: item.destination.into(),
        }
    }
}

/// Navigation menu for a role.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuRes {
    pub role: String,
    pub items: Vec<MenuItemDto>,
}

/// The signed-in session, as configured at startup.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionRes {
    pub signed_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub menu: Vec<MenuItemDto>,
}

impl From<&SessionConfig> for SessionRes {
    fn from(session: &SessionConfig) -> Self {
        Self {
            signed_in: session.signed_in(),
            greeting: session.greeting(),
            role: session.role().map(|r| r.to_string()),
            user_name: session.user_name().map(str::to_owned),
            avatar: session.avatar().map(str::to_owned),
            menu: session.menu().iter().map(MenuItemDto::from).collect(),
        }
    }
}

/// Error body for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}
