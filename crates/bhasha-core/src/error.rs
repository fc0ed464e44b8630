//! Error taxonomy for the tutoring core
//!
//! Every failure here is recoverable by the route layer: duplicates and
//! missing keys surface as user-facing messages, persistence failures follow
//! a retry-once-then-report policy on the caller's side. Nothing in this
//! crate aborts the process.

use crate::storage::PersistenceError;

/// Core error type
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum TutorError {
    /// Phrase key already exists in the vocabulary store
    #[error("phrase already saved: {0}")]
    DuplicateKey(String),
    /// Unknown phrase or session key
    #[error("not found: {0}")]
    NotFound(String),
    /// Backing store could not be read or written
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
    /// Malformed input (empty phrase key, unknown language, etc.)
    #[error("validation error: {0}")]
    Validation(String),
}

/// Core result type
pub type Result<T> = std::result::Result<T, TutorError>;
