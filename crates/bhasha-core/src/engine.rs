//! Tutoring Engine
//!
//! Route-facing facade that owns the session map and the vocabulary store
//! and exposes the core operations as plain-data calls. Each operation is a
//! synchronous request/response step; the single-writer assumption for the
//! vocabulary store lives here (one engine per process, one mutation at a
//! time).

use std::collections::BTreeMap;

use chrono::Utc;

use crate::conversation::{Language, Mode, TurnContext, format};
use crate::error::{Result, TutorError};
use crate::session::{Adjustment, SessionState, SessionStats, SessionStore, TrackerConfig};
use crate::srs::{PhraseRecord, ReviewSchedule, SavePhrase, VocabStats, VocabStore};
use crate::storage::Persistence;

/// Tutoring core: adaptive sessions plus the spaced-repetition vocabulary
pub struct Engine<P: Persistence> {
    sessions: SessionStore,
    vocab: VocabStore<P>,
}

impl<P: Persistence> Engine<P> {
    /// Create an engine, loading the vocabulary through the given
    /// persistence collaborator
    pub fn new(persistence: P) -> Result<Self> {
        Ok(Self {
            sessions: SessionStore::new(),
            vocab: VocabStore::open(persistence)?,
        })
    }

    /// Create with a custom review schedule and tracker config
    pub fn with_config(
        persistence: P,
        schedule: ReviewSchedule,
        tracker_config: TrackerConfig,
    ) -> Result<Self> {
        Ok(Self {
            sessions: SessionStore::with_config(tracker_config),
            vocab: VocabStore::open_with_schedule(persistence, schedule)?,
        })
    }

    // ========================================================================
    // SESSIONS
    // ========================================================================

    /// Start a practice session for a known language
    pub fn start_session(
        &mut self,
        language: &str,
        scenario: &str,
        mode: Mode,
    ) -> Result<SessionState> {
        if Language::get(language).is_none() {
            return Err(TutorError::Validation(format!(
                "unknown language: {}",
                language
            )));
        }
        Ok(self.sessions.start(language, scenario, mode).clone())
    }

    /// Record one learner turn; the caller judges success.
    ///
    /// Returns the checkpoint decision so the glue layer can rebuild its
    /// prompt when the level moves.
    pub fn record_turn(&mut self, session_id: &str, was_successful: bool) -> Result<Adjustment> {
        self.sessions.record_turn(session_id, was_successful)
    }

    /// Context bundle for the prompt-building collaborator, reflecting the
    /// most recent checkpoint decision
    pub fn turn_context(&self, session_id: &str) -> Result<TurnContext> {
        let state = self
            .sessions
            .get(session_id)
            .ok_or_else(|| TutorError::NotFound(format!("session {}", session_id)))?;
        Ok(TurnContext {
            language: state.language.clone(),
            scenario: state.scenario.clone(),
            mode: state.mode,
            level: state.tracker.level(),
            instruction: state.tracker.last_direction().instruction().to_string(),
        })
    }

    /// Performance statistics for one session
    pub fn session_stats(&self, session_id: &str) -> Result<SessionStats> {
        self.sessions
            .get(session_id)
            .map(|s| s.tracker.stats())
            .ok_or_else(|| TutorError::NotFound(format!("session {}", session_id)))
    }

    /// End a session, returning its final state
    pub fn end_session(&mut self, session_id: &str) -> Option<SessionState> {
        self.sessions.end(session_id)
    }

    // ========================================================================
    // VOCABULARY
    // ========================================================================

    /// Save a phrase from a guided session, bucketed by the session's
    /// current complexity level
    pub fn save_phrase(&mut self, session_id: &str, input: SavePhrase) -> Result<PhraseRecord> {
        let state = self
            .sessions
            .get(session_id)
            .ok_or_else(|| TutorError::NotFound(format!("session {}", session_id)))?;
        if state.mode != Mode::Guided {
            return Err(TutorError::Validation(
                "phrases can only be saved in guided mode".to_string(),
            ));
        }
        let level = state.tracker.level();
        let record = self.vocab.save_phrase(input, level, Utc::now())?;
        Ok(record.clone())
    }

    /// Parse a formatted guided-mode turn and save its first phrase, using
    /// the session's scenario as context
    pub fn save_turn_phrase(&mut self, session_id: &str, turn_text: &str) -> Result<PhraseRecord> {
        let state = self
            .sessions
            .get(session_id)
            .ok_or_else(|| TutorError::NotFound(format!("session {}", session_id)))?;
        let language = Language::get(&state.language).ok_or_else(|| {
            TutorError::Validation(format!("unknown language: {}", state.language))
        })?;

        let parsed = format::parse_guided_turn(turn_text, language)
            .ok_or_else(|| TutorError::Validation("could not parse phrase".to_string()))?;

        let input = SavePhrase {
            phrase: parsed.native,
            transliteration: parsed.transliteration,
            english: parsed.english,
            context: state.scenario.clone(),
        };
        self.save_phrase(session_id, input)
    }

    /// Phrases due for review right now, earliest first
    pub fn due_phrases(&self) -> Vec<PhraseRecord> {
        self.vocab.due(Utc::now()).cloned().collect()
    }

    /// Record a review outcome; the caller judges recall success
    pub fn mark_reviewed(&mut self, phrase: &str, succeeded: bool) -> Result<PhraseRecord> {
        let record = self.vocab.mark_reviewed(phrase, succeeded, Utc::now())?;
        Ok(record.clone())
    }

    /// All phrases grouped by difficulty bucket, for display
    pub fn group_by_difficulty(&self) -> BTreeMap<u8, Vec<PhraseRecord>> {
        self.vocab
            .group_by_difficulty()
            .into_iter()
            .map(|(bucket, records)| (bucket, records.into_iter().cloned().collect()))
            .collect()
    }

    /// Vocabulary statistics as of now
    pub fn vocab_stats(&self) -> VocabStats {
        self.vocab.stats(Utc::now())
    }

    /// The underlying vocabulary store
    pub fn vocab(&self) -> &VocabStore<P> {
        &self.vocab
    }

    /// The underlying session store
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

// ============================================================================
// TESTS
// ============================================================================
