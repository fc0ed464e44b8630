//! Phrase Records
//!
//! The persisted unit of the vocabulary store, plus the input and statistics
//! types that cross the route boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reviews after which a phrase counts as mastered, regardless of recent
/// outcomes
pub const MASTERED_REVIEW_COUNT: u32 = 5;

// ============================================================================
// PHRASE RECORD
// ============================================================================

/// A saved vocabulary phrase with its review schedule state
///
/// `phrase` is the unique key within the store. `interval_index` is always a
/// valid rung of the owning store's schedule, and `next_due_at` is always
/// derived from that rung and the last review time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseRecord {
    /// Target-language text, unique within the store
    pub phrase: String,
    /// Romanized pronunciation aid
    pub transliteration: String,
    /// English translation
    pub english: String,
    /// Scenario label captured at save time
    pub context: String,
    /// Complexity level at save time (1-3), used only for display grouping
    pub difficulty_bucket: u8,
    /// Current rung on the review ladder
    pub interval_index: usize,
    /// When the phrase next comes due
    pub next_due_at: DateTime<Utc>,
    /// Reviews performed, regardless of outcome
    pub review_count: u32,
    /// Reviews with successful recall
    pub correct_count: u32,
    /// When the phrase was saved
    pub added_at: DateTime<Utc>,
}

impl PhraseRecord {
    /// Whether the phrase is due for review at the given time
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_due_at <= now
    }

    /// Whether the phrase counts as mastered
    pub fn is_mastered(&self) -> bool {
        self.review_count >= MASTERED_REVIEW_COUNT
    }
}

// ============================================================================
// INPUT TYPES
// ============================================================================

/// Input for saving a new phrase
///
/// Uses `deny_unknown_fields` so malformed route payloads fail at the
/// boundary instead of silently dropping data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SavePhrase {
    /// Target-language text (the store key)
    pub phrase: String,
    /// Romanized pronunciation aid
    pub transliteration: String,
    /// English translation
    pub english: String,
    /// Scenario label
    #[serde(default)]
    pub context: String,
}

// ============================================================================
// STATISTICS
// ============================================================================

/// Aggregate view over the vocabulary store
///
/// Derived read-only on demand; nothing here is a stored field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabStats {
    /// Phrases in the store
    pub total: usize,
    /// Phrases currently due for review
    pub due: usize,
    /// Phrases reviewed at least [`MASTERED_REVIEW_COUNT`] times
    pub mastered: usize,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record(next_due_at: DateTime<Utc>) -> PhraseRecord {
        PhraseRecord {
            phrase: "నమస్కారం".to_string(),
            transliteration: "namaskāraṁ".to_string(),
            english: "hello".to_string(),
            context: "greeting a family member".to_string(),
            difficulty_bucket: 1,
            interval_index: 0,
            next_due_at,
            review_count: 0,
            correct_count: 0,
            added_at: Utc::now(),
        }
    }

    #[test]
    fn test_due_at_exact_boundary() {
        let now = Utc::now();
        assert!(record(now).is_due(now));
        assert!(record(now - Duration::seconds(1)).is_due(now));
        assert!(!record(now + Duration::seconds(1)).is_due(now));
    }

    #[test]
    fn test_mastered_threshold() {
        let mut r = record(Utc::now());
        assert!(!r.is_mastered());
        r.review_count = MASTERED_REVIEW_COUNT;
        assert!(r.is_mastered());
    }

    #[test]
    fn test_save_phrase_rejects_unknown_fields() {
        let json = r#"{"phrase": "నమస్కారం", "transliteration": "namaskāraṁ", "english": "hello"}"#;
        assert!(serde_json::from_str::<SavePhrase>(json).is_ok());

        let json = r#"{"phrase": "x", "transliteration": "x", "english": "x", "bogus": 1}"#;
        assert!(serde_json::from_str::<SavePhrase>(json).is_err());
    }
}
