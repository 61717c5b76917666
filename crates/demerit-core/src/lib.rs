#![deny(missing_docs)]

//! # demerit-core — Foundational Types for the Violation Intake Service
//!
//! This crate defines the domain types the store and API layers depend on.
//! It has no internal crate dependencies — only `serde`, `thiserror`,
//! `chrono`, `uuid`, and `utoipa` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **One canonical record schema.** [`ViolationReport`] is the single
//!    wire and storage representation of a violation report. Records are
//!    immutable once constructed — there are no update or delete paths.
//!
//! 2. **Derivation logic lives here, not in handlers.** Offense ordinal
//!    labels ([`offense::ordinal_label`]) and violation-code splitting
//!    ([`codes::parse_violation_codes`]) are pure functions with unit tests,
//!    so the HTTP layer stays a thin parse-and-delegate shell.
//!
//! 3. **UTC-only timestamps.** All submission times flow through
//!    [`Timestamp`], which serializes to ISO 8601 with a `Z` suffix at
//!    second precision. Local time is a presentation concern.

pub mod codes;
pub mod error;
pub mod offense;
pub mod record;
pub mod temporal;

pub use codes::parse_violation_codes;
pub use error::SubmissionError;
pub use offense::ordinal_label;
pub use record::{ReportSubmission, ViolationReport};
pub use temporal::Timestamp;
