//! Session Module
//!
//! Per-conversation state for active practice sessions:
//! - `PerformanceTracker` with the adaptive complexity dial
//! - `SessionState` tying a tracker to a language, scenario, and mode
//! - `SessionStore`, an explicitly owned map from session id to state
//!
//! Sessions are ephemeral: they live for one conversation and are discarded
//! on end or process restart. Concurrent sessions are independent; there is
//! no cross-session state.

mod tracker;

pub use tracker::{
    Adjustment, ComplexityLevel, Direction, PerformanceTracker, SessionStats, TrackerConfig,
};

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::conversation::Mode;
use crate::error::{Result, TutorError};

// ============================================================================
// SESSION STATE
// ============================================================================

/// State of one active practice session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Opaque unique session id (UUID v4), assigned at conversation start
    pub id: String,
    /// Target language key (e.g. "telugu")
    pub language: String,
    /// Scenario label (e.g. "ordering coffee at a café")
    pub scenario: String,
    /// Learning mode
    pub mode: Mode,
    /// Adaptive complexity tracker
    pub tracker: PerformanceTracker,
    /// When the session started
    pub started_at: DateTime<Utc>,
}

// ============================================================================
// SESSION STORE
// ============================================================================

/// Owned map of active sessions, keyed by session id
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<String, SessionState>,
    tracker_config: TrackerConfig,
}

impl SessionStore {
    /// Create an empty session store with default tracker thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom tracker config applied to every new session
    pub fn with_config(tracker_config: TrackerConfig) -> Self {
        Self {
            sessions: HashMap::new(),
            tracker_config,
        }
    }

    /// Start a new session and return it
    pub fn start(
        &mut self,
        language: impl Into<String>,
        scenario: impl Into<String>,
        mode: Mode,
    ) -> &SessionState {
        let id = Uuid::new_v4().to_string();
        let state = SessionState {
            id: id.clone(),
            language: language.into(),
            scenario: scenario.into(),
            mode,
            tracker: PerformanceTracker::with_config(self.tracker_config),
            started_at: Utc::now(),
        };
        tracing::info!(
            session = %id,
            language = %state.language,
            scenario = %state.scenario,
            mode = %state.mode,
            "session started"
        );
        self.sessions.entry(id).or_insert(state)
    }

    /// Look up a session
    pub fn get(&self, session_id: &str) -> Option<&SessionState> {
        self.sessions.get(session_id)
    }

    /// Look up a session mutably
    pub fn get_mut(&mut self, session_id: &str) -> Option<&mut SessionState> {
        self.sessions.get_mut(session_id)
    }

    /// Record one turn for the given session and re-evaluate complexity
    pub fn record_turn(&mut self, session_id: &str, was_successful: bool) -> Result<Adjustment> {
        let state = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| TutorError::NotFound(format!("session {}", session_id)))?;
        state.tracker.record_turn(was_successful);
        Ok(state.tracker.maybe_adjust())
    }

    /// End a session, returning its final state
    pub fn end(&mut self, session_id: &str) -> Option<SessionState> {
        let state = self.sessions.remove(session_id);
        if let Some(state) = &state {
            tracing::info!(
                session = %state.id,
                exchanges = state.tracker.exchange_count(),
                level = %state.tracker.level(),
                "session ended"
            );
        }
        state
    }

    /// Number of active sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether any sessions are active
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
