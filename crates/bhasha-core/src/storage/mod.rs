//! Storage Module
//!
//! Persistence collaborator for the vocabulary store:
//! - `Persistence` trait: full-load / full-save over the phrase list
//! - `JsonFileStore`: human-readable JSON file with atomic replace writes
//! - `MemoryStore`: in-process store for tests and ephemeral deployments
//!
//! The store is small enough that every mutation rewrites the whole file;
//! there is no incremental or partial write path.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::srs::PhraseRecord;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Persistence error type
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Store file could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Initialization error
    #[error("initialization error: {0}")]
    Init(String),
}

// ============================================================================
// PERSISTENCE TRAIT
// ============================================================================

/// Backing-store contract for the vocabulary store.
///
/// Implementations load the full phrase list at startup and replace it
/// wholesale on every save. Insertion order of the slice is significant and
/// must survive a load/save round trip.
pub trait Persistence {
    /// Load all phrase records. A missing backing store loads as empty.
    fn load(&self) -> std::result::Result<Vec<PhraseRecord>, PersistenceError>;

    /// Durably replace the backing store with the given records.
    fn save(&self, records: &[PhraseRecord]) -> std::result::Result<(), PersistenceError>;
}
