//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the intake API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Demerit API — Violation Intake Service",
        version = "0.1.0",
        description = "Multipart violation-report intake with optional evidence upload and record listing.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::violations::submit_violation,
        crate::routes::violations::list_violations,
    ),
    components(schemas(
        demerit_core::ViolationReport,
        crate::routes::violations::SubmitResponse,
        crate::routes::violations::ListResponse,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "violations", description = "Violation intake and listing"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
///
/// Serves the OpenAPI JSON spec at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_includes_the_violations_paths() {
        let spec = ApiDoc::openapi();
        assert!(spec.paths.paths.contains_key("/violations"));
    }
}
