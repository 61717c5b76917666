//! # Violation Intake API
//!
//! Handles report submission (multipart form with optional evidence file)
//! and listing of all records collected since the process started.

use std::sync::Arc;

use axum::extract::multipart::Multipart;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use demerit_core::{parse_violation_codes, ReportSubmission, SubmissionError, ViolationReport};

use crate::error::AppError;
use crate::state::AppState;

/// Response envelope for a recorded violation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponse {
    pub message: String,
    pub record: ViolationReport,
}

/// Response envelope for the record listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListResponse {
    pub records: Vec<ViolationReport>,
}

/// Form fields collected from the multipart body before validation.
#[derive(Default)]
struct RawForm {
    reporter_name: Option<String>,
    student_number: Option<String>,
    course: Option<String>,
    department: Option<String>,
    /// `None` means the field never appeared; an empty vec means it did
    /// but held no codes after splitting.
    violations: Option<Vec<String>>,
    evidence_filename: Option<String>,
    evidence_bytes: Option<Vec<u8>>,
}

/// Build the violations router.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/violations",
        get(list_violations).post(submit_violation),
    )
}

/// Drain the multipart stream into a [`RawForm`].
///
/// Unknown fields are ignored. A repeated `violations` field is
/// concatenated after splitting each occurrence.
async fn read_form(mut multipart: Multipart) -> Result<RawForm, AppError> {
    let mut form = RawForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("malformed multipart body: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "name" => form.reporter_name = Some(read_text(field).await?),
            "student_no" => form.student_number = Some(read_text(field).await?),
            "course" => form.course = Some(read_text(field).await?),
            "department" => form.department = Some(read_text(field).await?),
            "violations" => {
                let raw = read_text(field).await?;
                form.violations
                    .get_or_insert_with(Vec::new)
                    .extend(parse_violation_codes(&raw));
            }
            "evidence" => {
                form.evidence_filename = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("malformed evidence part: {e}")))?;
                form.evidence_bytes = Some(bytes.to_vec());
            }
            _ => {}
        }
    }
    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("malformed form field: {e}")))
}

/// POST /violations — Record a violation report.
///
/// Multipart fields: `name`, `student_no`, `course`, `violations`
/// (comma-separated, may repeat) are required; `department` and an
/// `evidence` file part are optional. When an evidence file is present it
/// is written in full before the record is appended, so no record ever
/// references a partially written file.
#[utoipa::path(
    post,
    path = "/violations",
    responses(
        (status = 201, description = "Violation recorded", body = SubmitResponse),
        (status = 400, description = "Malformed multipart body", body = crate::error::ErrorBody),
        (status = 422, description = "Missing or blank required field", body = crate::error::ErrorBody),
    ),
    tag = "violations"
)]
pub async fn submit_violation(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    let form = read_form(multipart).await?;

    let reporter_name = form
        .reporter_name
        .ok_or(SubmissionError::MissingField("name"))?;
    let student_number = form
        .student_number
        .ok_or(SubmissionError::MissingField("student_no"))?;
    let course = form.course.ok_or(SubmissionError::MissingField("course"))?;
    let violations = form
        .violations
        .ok_or(SubmissionError::MissingField("violations"))?;

    // Browsers submit an empty evidence part when no file was chosen;
    // treat a part with no filename and no content as absent. A named
    // part is a real upload even when its content is zero bytes.
    let evidence_reference = match (form.evidence_filename, form.evidence_bytes) {
        (filename, Some(bytes))
            if !bytes.is_empty() || filename.as_deref().is_some_and(|f| !f.is_empty()) =>
        {
            let byte_count = bytes.len();
            let evidence = Arc::clone(&state.evidence);
            // File I/O runs off the runtime thread.
            let saved = tokio::task::spawn_blocking(move || {
                evidence.save(filename.as_deref(), &bytes)
            })
            .await
            .map_err(|e| AppError::Internal(format!("evidence write task failed: {e}")))??;
            tracing::info!(
                path = %saved.path.display(),
                bytes = byte_count,
                "evidence saved"
            );
            Some(saved.reference)
        }
        _ => None,
    };

    let submission = ReportSubmission::new(
        reporter_name,
        student_number,
        course,
        form.department,
        violations,
        evidence_reference,
    )?;
    let record = state.records.append(submission);

    tracing::info!(
        student_number = %record.student_number,
        course = %record.course,
        offense = %record.offense_ordinal,
        violations = record.violations.len(),
        evidence = record.evidence_reference.is_some(),
        "violation recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "violation recorded".to_string(),
            record,
        }),
    ))
}

/// GET /violations — List all records in submission order.
#[utoipa::path(
    get,
    path = "/violations",
    responses(
        (status = 200, description = "All records, in submission order", body = ListResponse),
    ),
    tag = "violations"
)]
pub async fn list_violations(State(state): State<AppState>) -> Json<ListResponse> {
    Json(ListResponse {
        records: state.records.list(),
    })
}
