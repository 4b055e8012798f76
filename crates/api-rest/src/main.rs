//! HYGIA REST API server binary.
//!
//! ## Purpose
//! Runs the dashboard's REST API: the patient registry (list/search,
//! admission, detail), role navigation menus, clinical note submission, and
//! Swagger UI at `/swagger-ui`.
//!
//! All state is in-memory and seeded at startup; restarting the server
//! resets the registry to the two demo records.

use api_rest::{app, AppState};
use hygia_core::{PatientRegistry, SessionConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the HYGIA REST API server
///
/// # Environment Variables
/// - `HYGIA_REST_ADDR`: server address (default: "0.0.0.0:3000")
/// - `HYGIA_ROLE`: session role (`clinician`, `receptionist`, `pharmacist`)
/// - `HYGIA_USER`: session display name
/// - `HYGIA_AVATAR`: session avatar initials
///
/// The three session values are taken on trust, exactly as the dashboard
/// takes them from its session store; absent or unrecognised values degrade
/// the `/session` response rather than failing startup.
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?)
                .add_directive("hygia_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("HYGIA_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let session = SessionConfig::from_env_values(
        std::env::var("HYGIA_ROLE").ok(),
        std::env::var("HYGIA_USER").ok(),
        std::env::var("HYGIA_AVATAR").ok(),
    );

    tracing::info!("-- Starting HYGIA REST API on {}", addr);
    if let Some(role) = session.role() {
        tracing::info!("-- Session role: {}", role);
    }

    let state = AppState::new(PatientRegistry::seeded(), session);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
