//! # Bhasha Core
//!
//! Tutoring core for a conversational language-practice app. Two small
//! algorithms with everything else kept at arm's length behind trait seams:
//!
//! - **Adaptive Complexity Tracker**: per-session exchange/success counters
//!   that move a three-level difficulty dial at fixed checkpoints, holding
//!   steady in the comprehensible-input i+1 zone (50-80% success).
//! - **Spaced-Repetition Scheduler**: a persisted vocabulary store with a
//!   fixed ladder of review gaps (1, 3, 7, 14, 30, 60 days); success climbs
//!   one rung, failure resets to the shortest gap.
//!
//! The HTTP routes, prompt templates, and LLM/TTS/STT plumbing live outside
//! this crate; they call in through [`Engine`] and plug in through the
//! [`conversation::ConversationService`] and [`storage::Persistence`] traits.
//!
//! ## Quick Start
//!
//! ```rust
//! use bhasha_core::{Engine, MemoryStore, Mode, SavePhrase};
//!
//! # fn main() -> bhasha_core::Result<()> {
//! let mut engine = Engine::new(MemoryStore::new())?;
//!
//! // Run a guided practice session
//! let session = engine.start_session("telugu", "ordering coffee at a café", Mode::Guided)?;
//! let session_id = session.id.clone();
//! let _adjustment = engine.record_turn(&session_id, true)?;
//!
//! // Save a tricky phrase for spaced review
//! engine.save_phrase(&session_id, SavePhrase {
//!     phrase: "నమస్కారం".to_string(),
//!     transliteration: "namaskāraṁ".to_string(),
//!     english: "hello".to_string(),
//!     context: "greetings".to_string(),
//! })?;
//!
//! // Later: review what is due
//! for phrase in engine.due_phrases() {
//!     let updated = engine.mark_reviewed(&phrase.phrase, true)?;
//!     assert!(updated.review_count > 0);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod conversation;
pub mod engine;
pub mod error;
pub mod session;
pub mod srs;
pub mod storage;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use conversation::{
    ConversationError, ConversationService, LANGUAGES, Language, Mode, SCENARIOS, TurnContext,
};
pub use engine::Engine;
pub use error::{Result, TutorError};
pub use session::{
    Adjustment, ComplexityLevel, Direction, PerformanceTracker, SessionState, SessionStats,
    SessionStore, TrackerConfig,
};
pub use srs::{
    DEFAULT_GAPS_DAYS, MASTERED_REVIEW_COUNT, PhraseRecord, ReviewSchedule, SavePhrase,
    VocabStats, VocabStore,
};
pub use storage::{JsonFileStore, MemoryStore, Persistence, PersistenceError};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PRELUDE
// ============================================================================

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::{
        Adjustment, ComplexityLevel, Engine, JsonFileStore, MemoryStore, Mode,
        PerformanceTracker, Persistence, PhraseRecord, Result, ReviewSchedule, SavePhrase,
        SessionStore, TutorError, VocabStats, VocabStore,
    };
}
