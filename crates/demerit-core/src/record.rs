//! # Violation Report Record
//!
//! The canonical record schema for the intake service: required
//! reporter/student/course fields, an optional department, a list of
//! violation codes, a derived offense ordinal, a server-side submission
//! timestamp, and an optional evidence reference.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::SubmissionError;
use crate::temporal::Timestamp;

/// A validated report submission — the store-facing input.
///
/// Construction via [`ReportSubmission::new`] enforces the non-blank
/// contract on the required identity fields. The store derives the rest
/// of a [`ViolationReport`] (id, timestamp, offense ordinal) at append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSubmission {
    /// Name of the person filing the report.
    pub reporter_name: String,
    /// Student number of the reported student — the offense aggregation key.
    pub student_number: String,
    /// Course of the reported student.
    pub course: String,
    /// Department, when the reporter supplied one.
    pub department: Option<String>,
    /// Parsed violation codes, in submission order.
    pub violations: Vec<String>,
    /// Reference to the saved evidence file, when one was uploaded.
    pub evidence_reference: Option<String>,
}

impl ReportSubmission {
    /// Build a submission, rejecting blank required fields.
    ///
    /// Presence of the required fields is the caller's concern (the form
    /// layer reports a missing field before this constructor runs); this
    /// check covers present-but-blank values, which would otherwise break
    /// the aggregation key.
    pub fn new(
        reporter_name: String,
        student_number: String,
        course: String,
        department: Option<String>,
        violations: Vec<String>,
        evidence_reference: Option<String>,
    ) -> Result<Self, SubmissionError> {
        if reporter_name.trim().is_empty() {
            return Err(SubmissionError::BlankField("name"));
        }
        if student_number.trim().is_empty() {
            return Err(SubmissionError::BlankField("student_no"));
        }
        if course.trim().is_empty() {
            return Err(SubmissionError::BlankField("course"));
        }
        Ok(Self {
            reporter_name,
            student_number,
            course,
            department,
            violations,
            evidence_reference,
        })
    }
}

/// One recorded violation report.
///
/// Immutable after append: there are no update or delete operations, and
/// records live only for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ViolationReport {
    /// Stable handle assigned at append.
    pub id: Uuid,
    /// Name of the person who filed the report.
    pub reporter_name: String,
    /// Student number of the reported student.
    pub student_number: String,
    /// Course of the reported student.
    pub course: String,
    /// Department, when supplied.
    pub department: Option<String>,
    /// Violation codes, in submission order.
    pub violations: Vec<String>,
    /// Rank label for this student's offense history ("1st", "2nd", ...).
    pub offense_ordinal: String,
    /// Server-side submission time (UTC, second precision).
    pub submitted_at: Timestamp,
    /// Path reference to the saved evidence file; `null` when no file
    /// accompanied the report.
    pub evidence_reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(reporter: &str, student: &str, course: &str) -> Result<ReportSubmission, SubmissionError> {
        ReportSubmission::new(
            reporter.to_string(),
            student.to_string(),
            course.to_string(),
            None,
            vec!["Cheating".to_string()],
            None,
        )
    }

    #[test]
    fn accepts_populated_required_fields() {
        let sub = submission("Jane Doe", "2021-001", "BSCS").unwrap();
        assert_eq!(sub.student_number, "2021-001");
        assert_eq!(sub.violations, vec!["Cheating"]);
    }

    #[test]
    fn rejects_blank_required_fields() {
        assert_eq!(
            submission("  ", "2021-001", "BSCS").unwrap_err(),
            SubmissionError::BlankField("name")
        );
        assert_eq!(
            submission("Jane Doe", "", "BSCS").unwrap_err(),
            SubmissionError::BlankField("student_no")
        );
        assert_eq!(
            submission("Jane Doe", "2021-001", " ").unwrap_err(),
            SubmissionError::BlankField("course")
        );
    }

    #[test]
    fn report_serializes_null_evidence_reference() {
        let report = ViolationReport {
            id: Uuid::new_v4(),
            reporter_name: "Jane Doe".to_string(),
            student_number: "2021-001".to_string(),
            course: "BSCS".to_string(),
            department: None,
            violations: vec!["Cheating".to_string(), "Plagiarism".to_string()],
            offense_ordinal: "1st".to_string(),
            submitted_at: Timestamp::now(),
            evidence_reference: None,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["evidence_reference"].is_null());
        assert_eq!(value["violations"][1], "Plagiarism");
    }
}
