//! # Record Store
//!
//! Append-only store for [`ViolationReport`] records. Records are immutable
//! once appended and live for the lifetime of the process; listing returns
//! them in insertion order.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use demerit_core::{ordinal_label, ReportSubmission, Timestamp, ViolationReport};

/// The append/list seam over the record list.
///
/// The store owns record finalization: it assigns the id, the submission
/// timestamp, and the offense ordinal, because the ordinal depends on state
/// only the store can read consistently.
pub trait RecordStore: Send + Sync {
    /// Finalize a submission into a record and append it.
    fn append(&self, submission: ReportSubmission) -> ViolationReport;

    /// All records, in insertion order.
    fn list(&self) -> Vec<ViolationReport>;

    /// Number of records appended so far.
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of records for the given student number.
    fn offense_count(&self, student_number: &str) -> u32;
}

#[derive(Default)]
struct Inner {
    records: Vec<ViolationReport>,
    // Running per-student counts, maintained on append so deriving an
    // ordinal never requires scanning the record list.
    offense_counts: HashMap<String, u32>,
}

/// Thread-safe, cloneable in-memory record store.
///
/// Clones share the same underlying list. The mutex is `parking_lot`, not
/// `tokio::sync`, because no operation holds it across an `.await` point.
#[derive(Clone, Default)]
pub struct MemoryRecordStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryRecordStore {
    fn append(&self, submission: ReportSubmission) -> ViolationReport {
        let mut inner = self.inner.lock();

        // Count increment and append share this lock acquisition; the
        // K-th record for a student always carries the ordinal for K.
        let count = inner
            .offense_counts
            .entry(submission.student_number.clone())
            .or_insert(0);
        *count += 1;
        let offense_ordinal = ordinal_label(*count);

        let record = ViolationReport {
            id: Uuid::new_v4(),
            reporter_name: submission.reporter_name,
            student_number: submission.student_number,
            course: submission.course,
            department: submission.department,
            violations: submission.violations,
            offense_ordinal,
            submitted_at: Timestamp::now(),
            evidence_reference: submission.evidence_reference,
        };
        inner.records.push(record.clone());
        record
    }

    fn list(&self) -> Vec<ViolationReport> {
        self.inner.lock().records.clone()
    }

    fn len(&self) -> usize {
        self.inner.lock().records.len()
    }

    fn offense_count(&self, student_number: &str) -> u32 {
        self.inner
            .lock()
            .offense_counts
            .get(student_number)
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(student: &str) -> ReportSubmission {
        ReportSubmission::new(
            "Jane Doe".to_string(),
            student.to_string(),
            "BSCS".to_string(),
            None,
            vec!["Cheating".to_string()],
            None,
        )
        .unwrap()
    }

    #[test]
    fn append_returns_the_stored_record() {
        let store = MemoryRecordStore::new();
        let record = store.append(submission("2021-001"));
        assert_eq!(store.list(), vec![record]);
    }

    #[test]
    fn listing_preserves_insertion_order() {
        let store = MemoryRecordStore::new();
        let a = store.append(submission("2021-001"));
        let b = store.append(submission("2021-002"));
        let c = store.append(submission("2021-001"));
        let ids: Vec<_> = store.list().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![a.id, b.id, c.id]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn ordinals_advance_per_student() {
        let store = MemoryRecordStore::new();
        for expected in ["1st", "2nd", "3rd", "4th"] {
            let record = store.append(submission("2021-001"));
            assert_eq!(record.offense_ordinal, expected);
        }
        assert_eq!(store.offense_count("2021-001"), 4);
    }

    #[test]
    fn ordinals_are_independent_across_students() {
        let store = MemoryRecordStore::new();
        store.append(submission("2021-001"));
        store.append(submission("2021-001"));
        let other = store.append(submission("2021-002"));
        assert_eq!(other.offense_ordinal, "1st");
        assert_eq!(store.offense_count("2021-002"), 1);
    }

    #[test]
    fn clones_share_state() {
        let store = MemoryRecordStore::new();
        let clone = store.clone();
        store.append(submission("2021-001"));
        assert_eq!(clone.len(), 1);
    }

    #[test]
    fn usable_as_trait_object() {
        let store: Arc<dyn RecordStore> = Arc::new(MemoryRecordStore::new());
        store.append(submission("2021-001"));
        assert!(!store.is_empty());
    }

    #[test]
    fn concurrent_appends_for_one_student_yield_distinct_ordinals() {
        let store = Arc::new(MemoryRecordStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.append(submission("2021-001")).offense_ordinal)
            })
            .collect();
        let mut ordinals: Vec<String> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        ordinals.sort();
        ordinals.dedup();
        assert_eq!(ordinals.len(), 8);
    }
}
