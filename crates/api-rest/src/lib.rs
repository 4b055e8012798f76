//! # API REST
//!
//! REST API implementation for HYGIA.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialisation, CORS, status mapping)
//!
//! The registry is shared across handlers behind an async `RwLock`;
//! admissions take the write lock so identifier generation cannot race.
//! State is process-local and resets on restart, like the dashboard it
//! replaces.

#![warn(rust_2018_idioms)]

pub mod models;

use axum::{
    extract::{Path as AxumPath, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use hygia_core::{
    demographics, navigation, patient_rows, NewPatient, NoteService, PatientDetail, PatientError,
    PatientRegistry, SessionConfig,
};
use models::{
    ErrorRes, HealthRes, ListPatientsRes, MenuItemDto, MenuRes, PatientCardDto, PatientDetailRes,
    PatientDto, PatientRowDto, RegisterPatientReq, RegisterPatientRes, SaveNoteReq, SaveNoteRes,
    SessionRes,
};

/// Application state shared across REST API handlers.
///
/// The registry is the single owner of patient state for the process; the
/// session identity is resolved once at startup.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<RwLock<PatientRegistry>>,
    session: Arc<SessionConfig>,
    notes: NoteService,
}

impl AppState {
    /// Creates state around an existing registry and session.
    pub fn new(registry: PatientRegistry, session: SessionConfig) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            session: Arc::new(session),
            notes: NoteService::new(),
        }
    }

    /// State with the seeded demo registry and no session identity.
    pub fn seeded() -> Self {
        Self::new(PatientRegistry::seeded(), SessionConfig::anonymous())
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_patients,
        register_patient,
        patient_detail,
        save_note,
        navigation_menu,
        session_info,
    ),
    components(schemas(
        HealthRes,
        PatientDto,
        PatientRowDto,
        ListPatientsRes,
        RegisterPatientReq,
        RegisterPatientRes,
        PatientCardDto,
        PatientDetailRes,
        SaveNoteReq,
        SaveNoteRes,
        MenuItemDto,
        MenuRes,
        SessionRes,
        ErrorRes,
    ))
)]
pub struct ApiDoc;

/// Builds the HYGIA router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/patients", get(list_patients).post(register_patient))
        .route("/patients/:id", get(patient_detail))
        .route("/patients/:id/notes", post(save_note))
        .route("/navigation/:role", get(navigation_menu))
        .route("/session", get(session_info))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Maps a core error to the HTTP status and JSON body it is surfaced as.
fn error_response(err: &PatientError) -> (StatusCode, Json<ErrorRes>) {
    let status = match err {
        PatientError::NotFound(_) | PatientError::NoActivePatient => StatusCode::NOT_FOUND,
        PatientError::EmptyNote => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (
        status,
        Json(ErrorRes {
            error: err.to_string(),
        }),
    )
}

/// Free-text filter for the patient table.
#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    q: Option<String>,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "HYGIA REST API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/patients",
    responses(
        (status = 200, description = "Patient table rows", body = ListPatientsRes)
    )
)]
/// List or search patients
///
/// Without `q`, returns the full registry as table rows. With `q`, returns
/// the rows matching the free-text query (name matching is
/// case-insensitive, national-id matching is case-sensitive). Row order is
/// always registry insertion order.
#[axum::debug_handler]
async fn list_patients(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Json<ListPatientsRes> {
    let registry = state.registry.read().await;
    let rows = match params.q.as_deref() {
        Some(query) => patient_rows(registry.search(query)),
        None => patient_rows(registry.list_all()),
    };
    Json(ListPatientsRes {
        patients: rows.into_iter().map(PatientRowDto::from).collect(),
    })
}

#[utoipa::path(
    post,
    path = "/patients",
    request_body = RegisterPatientReq,
    responses(
        (status = 201, description = "Patient admitted", body = RegisterPatientRes)
    )
)]
/// Admit a new patient
///
/// Assigns the next sequential identifier and appends the record to the
/// registry. Field values are stored verbatim; admission never fails.
#[axum::debug_handler]
async fn register_patient(
    State(state): State<AppState>,
    Json(req): Json<RegisterPatientReq>,
) -> (StatusCode, Json<RegisterPatientRes>) {
    let record = state.registry.write().await.register(NewPatient {
        name: req.name,
        national_id: req.national_id,
        phone: req.phone,
        birthdate: req.birthdate,
        gender: req.gender,
    });

    tracing::info!(patient_id = %record.id, "patient admitted");

    (
        StatusCode::CREATED,
        Json(RegisterPatientRes {
            patient: PatientDto::from(&record),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/patients/{id}",
    responses(
        (status = 200, description = "Patient loaded", body = PatientDetailRes),
        (status = 404, description = "No patient has the requested id", body = PatientDetailRes)
    )
)]
/// Patient detail panel
///
/// Looks the identifier up with an exact, case-sensitive match. A miss is a
/// 404 whose body still renders the explicit not-found state with the
/// requested identifier echoed back.
#[axum::debug_handler]
async fn patient_detail(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> (StatusCode, Json<PatientDetailRes>) {
    let registry = state.registry.read().await;
    let detail = PatientDetail::resolve(&registry, Some(&id), demographics::today());
    let status = match detail {
        PatientDetail::Loaded { .. } => StatusCode::OK,
        _ => StatusCode::NOT_FOUND,
    };
    (status, Json(PatientDetailRes::from(detail)))
}

#[utoipa::path(
    post,
    path = "/patients/{id}/notes",
    request_body = SaveNoteReq,
    responses(
        (status = 200, description = "Note accepted (simulated save)", body = SaveNoteRes),
        (status = 404, description = "No patient has the requested id", body = ErrorRes),
        (status = 422, description = "Note content was empty", body = ErrorRes)
    )
)]
/// Save a clinical note for a patient
///
/// The save is simulated: an accepted note is written to the service log and
/// nowhere else. Rejections (unknown patient, empty content) leave all state
/// unchanged.
#[axum::debug_handler]
async fn save_note(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    Json(req): Json<SaveNoteReq>,
) -> Result<Json<SaveNoteRes>, (StatusCode, Json<ErrorRes>)> {
    let registry = state.registry.read().await;
    let patient = registry.get_by_id(&id).map_err(|e| error_response(&e))?;

    match state.notes.save_note(Some(patient), &req.content) {
        Ok(note) => Ok(Json(SaveNoteRes {
            patient_id: id,
            content: note.into_inner(),
        })),
        Err(e) => Err(error_response(&e)),
    }
}

#[utoipa::path(
    get,
    path = "/navigation/{role}",
    responses(
        (status = 200, description = "Sidebar menu for the role", body = MenuRes)
    )
)]
/// Navigation menu for a role
///
/// Unknown roles are not an error; they get an empty menu, matching the
/// dashboard's lenient role handling.
#[axum::debug_handler]
async fn navigation_menu(AxumPath(role): AxumPath<String>) -> Json<MenuRes> {
    let items = navigation::menu_for_role_str(&role)
        .iter()
        .map(MenuItemDto::from)
        .collect();
    Json(MenuRes { role, items })
}

#[utoipa::path(
    get,
    path = "/session",
    responses(
        (status = 200, description = "Startup session identity", body = SessionRes)
    )
)]
/// The session identity the server was started with
///
/// Carries the greeting, avatar, and sidebar menu the dashboard header
/// renders from. Session values are configuration, not authentication.
#[axum::debug_handler]
async fn session_info(State(state): State<AppState>) -> Json<SessionRes> {
    Json(SessionRes::from(state.session.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(AppState::seeded())
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_alive() {
        let (status, body) = get_json(&test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn listing_returns_the_seeded_rows_in_order() {
        let (status, body) = get_json(&test_app(), "/patients").await;
        assert_eq!(status, StatusCode::OK);
        let patients = body["patients"].as_array().unwrap();
        assert_eq!(patients.len(), 2);
        assert_eq!(patients[0]["id"], "P001");
        assert_eq!(patients[1]["id"], "P002");
        assert_eq!(patients[0]["phone"], "+57 310 123 4567");
    }

    #[tokio::test]
    async fn searching_filters_by_name_case_insensitively() {
        let (status, body) = get_json(&test_app(), "/patients?q=ANA").await;
        assert_eq!(status, StatusCode::OK);
        let patients = body["patients"].as_array().unwrap();
        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0]["name"], "Ana María Soto");
    }

    #[tokio::test]
    async fn admission_assigns_the_next_sequential_id() {
        let app = test_app();

        let (status, body) = post_json(
            &app,
            "/patients",
            json!({
                "name": "Luis Pérez",
                "national_id": "555",
                "birthdate": "2000-01-01",
                "gender": "M"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["patient"]["id"], "P003");

        let (_, listing) = get_json(&app, "/patients").await;
        assert_eq!(listing["patients"].as_array().unwrap().len(), 3);

        let (_, search) = get_json(&app, "/patients?q=luis").await;
        let hits = search["patients"].as_array().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["id"], "P003");
        assert_eq!(hits[0]["phone"], "N/D");
    }

    #[tokio::test]
    async fn detail_loads_a_seeded_patient() {
        let (status, body) = get_json(&test_app(), "/patients/P001").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"], "loaded");
        assert_eq!(body["patient"]["name"], "Ana María Soto");
    }

    #[tokio::test]
    async fn detail_miss_is_an_explicit_not_found_state() {
        let (status, body) = get_json(&test_app(), "/patients/P999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["state"], "not_found");
        assert_eq!(body["requested_id"], "P999");
    }

    #[tokio::test]
    async fn note_for_unknown_patient_is_rejected() {
        let (status, body) =
            post_json(&test_app(), "/patients/P999/notes", json!({"content": "stable"})).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "patient not found: P999");
    }

    #[tokio::test]
    async fn empty_note_is_rejected_without_state_change() {
        let app = test_app();
        let (status, body) =
            post_json(&app, "/patients/P001/notes", json!({"content": "   "})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("empty"));

        let (_, listing) = get_json(&app, "/patients").await;
        assert_eq!(listing["patients"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn accepted_note_echoes_trimmed_content() {
        let (status, body) = post_json(
            &test_app(),
            "/patients/P002/notes",
            json!({"content": "  follow-up in two weeks  "}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["patient_id"], "P002");
        assert_eq!(body["content"], "follow-up in two weeks");
    }

    #[tokio::test]
    async fn navigation_is_role_keyed_and_lenient() {
        let (status, body) = get_json(&test_app(), "/navigation/clinician").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["items"].as_array().unwrap().len(), 2);
        assert_eq!(body["items"][0]["icon"], "fas fa-file-medical");

        let (status, body) = get_json(&test_app(), "/navigation/janitor").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["items"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn session_reflects_startup_identity() {
        let state = AppState::new(
            PatientRegistry::seeded(),
            SessionConfig::from_env_values(
                Some("receptionist".into()),
                Some("Marta Díaz".into()),
                Some("MD".into()),
            ),
        );
        let (status, body) = get_json(&app(state), "/session").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["signed_in"], true);
        assert_eq!(body["greeting"], "Welcome, Marta");
        assert_eq!(body["menu"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn anonymous_session_has_no_greeting_or_menu() {
        let (status, body) = get_json(&test_app(), "/session").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["signed_in"], false);
        assert!(body.get("greeting").is_none());
        assert!(body["menu"].as_array().unwrap().is_empty());
    }
}
