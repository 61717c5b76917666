//! # Error Types
//!
//! Structured errors for report submission, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.

use thiserror::Error;

/// Errors raised while assembling a [`crate::ReportSubmission`] from
/// client-supplied form fields.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubmissionError {
    /// A required form field was absent from the request.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A required form field was present but blank.
    #[error("field must not be blank: {0}")]
    BlankField(&'static str),
}
