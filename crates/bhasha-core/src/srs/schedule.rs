//! Review Schedule
//!
//! Fixed ascending ladder of review gaps. Success climbs one rung, failure
//! drops back to the first rung, and the final rung is a plateau: once a
//! phrase reaches the longest gap it stays there on further successes.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TutorError};

/// Default review gaps in days
pub const DEFAULT_GAPS_DAYS: [i64; 6] = [1, 3, 7, 14, 30, 60];

/// Ordered sequence of review-gap lengths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSchedule {
    gaps_days: Vec<i64>,
}

impl Default for ReviewSchedule {
    fn default() -> Self {
        Self {
            gaps_days: DEFAULT_GAPS_DAYS.to_vec(),
        }
    }
}

impl ReviewSchedule {
    /// Create a schedule from an ascending sequence of positive day counts
    pub fn new(gaps_days: Vec<i64>) -> Result<Self> {
        if gaps_days.is_empty() {
            return Err(TutorError::Validation(
                "review schedule must not be empty".to_string(),
            ));
        }
        if gaps_days.iter().any(|&d| d <= 0) {
            return Err(TutorError::Validation(
                "review gaps must be positive day counts".to_string(),
            ));
        }
        if gaps_days.windows(2).any(|w| w[0] >= w[1]) {
            return Err(TutorError::Validation(
                "review gaps must be strictly ascending".to_string(),
            ));
        }
        Ok(Self { gaps_days })
    }

    /// Number of rungs in the ladder
    pub fn len(&self) -> usize {
        self.gaps_days.len()
    }

    /// Always false; construction rejects empty ladders
    pub fn is_empty(&self) -> bool {
        self.gaps_days.is_empty()
    }

    /// Index of the longest gap (the mastered plateau)
    pub fn last_index(&self) -> usize {
        self.gaps_days.len() - 1
    }

    /// Gap length at the given rung, in days.
    ///
    /// Indexes past the ladder clamp to the plateau; the store only produces
    /// indexes via `advance` and reset, so in practice this never clamps.
    pub fn gap_days(&self, index: usize) -> i64 {
        self.gaps_days[index.min(self.last_index())]
    }

    /// Gap length at the given rung
    pub fn gap(&self, index: usize) -> Duration {
        Duration::days(self.gap_days(index))
    }

    /// Next rung after a successful review, saturating at the plateau
    pub fn advance(&self, index: usize) -> usize {
        (index + 1).min(self.last_index())
    }
}

// ============================================================================
// TESTS
// ============================================================================
