//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. Holds the record store behind its trait seam (so
//! the in-memory backend can later be swapped for a durable one) and the
//! evidence file store.

use std::path::PathBuf;
use std::sync::Arc;

use demerit_store::{EvidenceError, EvidenceStore, MemoryRecordStore, RecordStore};

/// Server configuration, built from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port to bind.
    pub port: u16,
    /// Directory evidence uploads are written to. Created at startup if
    /// absent.
    pub evidence_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            evidence_dir: PathBuf::from("evidence"),
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Append/list seam over the process-lifetime record list.
    pub records: Arc<dyn RecordStore>,
    /// Evidence upload directory.
    pub evidence: Arc<EvidenceStore>,
}

impl AppState {
    /// Build state from configuration, creating the evidence directory.
    pub fn new(config: &AppConfig) -> Result<Self, EvidenceError> {
        let evidence = EvidenceStore::open(&config.evidence_dir)?;
        Ok(Self::with_stores(
            Arc::new(MemoryRecordStore::new()),
            Arc::new(evidence),
        ))
    }

    /// Build state from pre-constructed stores. Used by tests to point the
    /// evidence store at a temporary directory.
    pub fn with_stores(records: Arc<dyn RecordStore>, evidence: Arc<EvidenceStore>) -> Self {
        Self { records, evidence }
    }
}
