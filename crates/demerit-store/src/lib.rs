//! # demerit-store — Storage Layer for the Violation Intake Service
//!
//! Two stores live here:
//!
//! - [`RecordStore`] / [`MemoryRecordStore`] — the append/list seam over the
//!   process-lifetime record list. Handlers program against the trait so the
//!   in-memory backend can later be swapped for a durable one without
//!   touching route logic.
//! - [`EvidenceStore`] — writes uploaded evidence files to a local directory
//!   under collision-resistant filenames.
//!
//! ## Locking
//!
//! The in-memory backend uses `parking_lot::Mutex` and all operations are
//! synchronous — the lock is never held across an `.await` point. The
//! offense-counter increment and the record append happen under a single
//! lock acquisition, so concurrent submissions for the same student can
//! never observe or produce duplicate ordinals.

pub mod evidence;
pub mod records;

pub use evidence::{EvidenceError, EvidenceStore, SavedEvidence};
pub use records::{MemoryRecordStore, RecordStore};
