//! # demerit-api — Axum API Service for Violation Intake
//!
//! Accepts multipart violation reports (reporter identity, student number,
//! course, violation codes, optional evidence image), appends immutable
//! records to a process-lifetime store, and lists everything collected so
//! far. Records do not survive a restart by design; only evidence files
//! persist on disk.
//!
//! ## API Surface
//!
//! | Route                 | Module                  | Operation           |
//! |-----------------------|-------------------------|---------------------|
//! | `POST /violations`    | [`routes::violations`]  | Record a report     |
//! | `GET /violations`     | [`routes::violations`]  | List all records    |
//! | `GET /openapi.json`   | [`openapi`]             | OpenAPI spec        |
//! | `GET /health/*`       | `lib.rs`                | Health probes       |
//!
//! ## Crate Policy
//!
//! - No business logic in route handlers — splitting, ordinal derivation,
//!   and record finalization live in `demerit-core`/`demerit-store`.
//! - All errors map to structured HTTP responses via [`error::AppError`].
//! - CORS is permissive: the service fronts a mobile client during
//!   development and is not itself a security boundary.

pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::{AppConfig, AppState};

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Upload body limit. Evidence files are phone-camera images; 10 MiB
/// covers them while bounding memory per request.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`) sit alongside the API routes — there is no
/// authentication layer to keep them outside of.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::violations::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    let probes = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new()
        .merge(api)
        .merge(probes)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Permissive CORS, matching the development posture of the clients this
/// service fronts: any origin, method, and header.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — verifies the application is ready to serve traffic.
///
/// Checks:
/// - The record store is accessible.
/// - The evidence directory exists and accepts writes.
///
/// Returns 200 "ready" or 503 with a diagnostic message.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let _ = state.records.len();

    if !state.evidence.is_writable() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            "evidence directory not writable",
        )
            .into_response();
    }

    (StatusCode::OK, "ready").into_response()
}
