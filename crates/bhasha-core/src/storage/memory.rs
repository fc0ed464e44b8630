//! In-Memory Storage Implementation
//!
//! `Persistence` impl that keeps the phrase list in process memory. Used by
//! tests and by ephemeral deployments that do not want a file on disk. The
//! fail-next-save switch exists so tests can exercise the store's rollback
//! path on persistence failure.

use std::cell::{Cell, RefCell};

use super::{Persistence, PersistenceError};
use crate::srs::PhraseRecord;

/// Process-local vocabulary persistence
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<Vec<PhraseRecord>>,
    fail_next_save: Cell<bool>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with records
    pub fn with_records(records: Vec<PhraseRecord>) -> Self {
        Self {
            records: RefCell::new(records),
            fail_next_save: Cell::new(false),
        }
    }

    /// Make the next `save` call fail with an IO error
    pub fn fail_next_save(&self) {
        self.fail_next_save.set(true);
    }

    /// Snapshot of the currently persisted records
    pub fn snapshot(&self) -> Vec<PhraseRecord> {
        self.records.borrow().clone()
    }
}

impl Persistence for MemoryStore {
    fn load(&self) -> std::result::Result<Vec<PhraseRecord>, PersistenceError> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[PhraseRecord]) -> std::result::Result<(), PersistenceError> {
        if self.fail_next_save.take() {
            return Err(PersistenceError::Io(std::io::Error::other(
                "injected save failure",
            )));
        }
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
