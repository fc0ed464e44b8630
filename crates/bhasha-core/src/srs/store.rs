//! Vocabulary Store
//!
//! Owns the in-memory phrase list and the injected persistence collaborator.
//! The full list is loaded once at construction and flushed after every
//! mutation; callers are assumed to be the single writer.
//!
//! Mutations are atomic: the next record state is computed first, handed to
//! the persistence collaborator, and only kept in memory once the write has
//! succeeded. A persistence failure therefore leaves the store exactly as it
//! was.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::phrase::{PhraseRecord, SavePhrase, VocabStats};
use super::schedule::ReviewSchedule;
use crate::error::{Result, TutorError};
use crate::session::ComplexityLevel;
use crate::storage::Persistence;

/// Durable spaced-repetition vocabulary store
#[derive(Debug)]
pub struct VocabStore<P: Persistence> {
    records: Vec<PhraseRecord>,
    schedule: ReviewSchedule,
    persistence: P,
}

impl<P: Persistence> VocabStore<P> {
    /// Load the store through the given persistence collaborator
    pub fn open(persistence: P) -> Result<Self> {
        Self::open_with_schedule(persistence, ReviewSchedule::default())
    }

    /// Load with a custom review schedule
    pub fn open_with_schedule(persistence: P, schedule: ReviewSchedule) -> Result<Self> {
        let mut records = persistence.load()?;
        // Stored rungs from a longer previous ladder clamp to the plateau
        for record in &mut records {
            record.interval_index = record.interval_index.min(schedule.last_index());
        }
        tracing::debug!(count = records.len(), "vocabulary store loaded");
        Ok(Self {
            records,
            schedule,
            persistence,
        })
    }

    /// Save a new phrase, scheduling its first review one rung out.
    ///
    /// Duplicate keys are rejected rather than overwritten, so review history
    /// is never silently discarded.
    pub fn save_phrase(
        &mut self,
        input: SavePhrase,
        level: ComplexityLevel,
        now: DateTime<Utc>,
    ) -> Result<&PhraseRecord> {
        let phrase = input.phrase.trim();
        if phrase.is_empty() {
            return Err(TutorError::Validation(
                "phrase key must not be empty".to_string(),
            ));
        }
        if self.get(phrase).is_some() {
            return Err(TutorError::DuplicateKey(phrase.to_string()));
        }

        let record = PhraseRecord {
            phrase: phrase.to_string(),
            transliteration: input.transliteration,
            english: input.english,
            context: input.context,
            difficulty_bucket: level.as_u8(),
            interval_index: 0,
            next_due_at: now + self.schedule.gap(0),
            review_count: 0,
            correct_count: 0,
            added_at: now,
        };

        let index = self.records.len();
        self.records.push(record);
        if let Err(e) = self.persistence.save(&self.records) {
            self.records.pop();
            tracing::warn!(error = %e, "failed to persist saved phrase");
            return Err(e.into());
        }

        let record = &self.records[index];
        tracing::info!(
            phrase = %record.phrase,
            bucket = record.difficulty_bucket,
            due = %record.next_due_at,
            "phrase saved for review"
        );
        Ok(record)
    }

    /// Phrases due at the given time, earliest first.
    ///
    /// Restartable: each call walks the store afresh. Ties on the due time
    /// keep insertion order.
    pub fn due(&self, now: DateTime<Utc>) -> impl Iterator<Item = &PhraseRecord> {
        let mut due: Vec<&PhraseRecord> =
            self.records.iter().filter(|r| r.is_due(now)).collect();
        // Stable sort preserves insertion order within equal due times
        due.sort_by_key(|r| r.next_due_at);
        due.into_iter()
    }

    /// Record a review outcome and reschedule the phrase.
    ///
    /// Success climbs one rung (saturating at the plateau); failure drops all
    /// the way back to the shortest gap.
    pub fn mark_reviewed(
        &mut self,
        phrase: &str,
        succeeded: bool,
        now: DateTime<Utc>,
    ) -> Result<&PhraseRecord> {
        let index = self
            .records
            .iter()
            .position(|r| r.phrase == phrase)
            .ok_or_else(|| TutorError::NotFound(phrase.to_string()))?;

        let mut updated = self.records[index].clone();
        updated.review_count += 1;
        if succeeded {
            updated.correct_count += 1;
            updated.interval_index = self.schedule.advance(updated.interval_index);
        } else {
            updated.interval_index = 0;
        }
        updated.next_due_at = now + self.schedule.gap(updated.interval_index);

        let previous = std::mem::replace(&mut self.records[index], updated);
        if let Err(e) = self.persistence.save(&self.records) {
            self.records[index] = previous;
            tracing::warn!(phrase, error = %e, "failed to persist review outcome");
            return Err(e.into());
        }

        let record = &self.records[index];
        tracing::debug!(
            phrase,
            succeeded,
            rung = record.interval_index,
            due = %record.next_due_at,
            "phrase reviewed"
        );
        Ok(record)
    }

    /// Group all phrases by difficulty bucket, preserving insertion order
    /// within each bucket. Pure read; used only for display.
    pub fn group_by_difficulty(&self) -> BTreeMap<u8, Vec<&PhraseRecord>> {
        let mut buckets: BTreeMap<u8, Vec<&PhraseRecord>> = BTreeMap::new();
        for record in &self.records {
            buckets.entry(record.difficulty_bucket).or_default().push(record);
        }
        buckets
    }

    /// Aggregate statistics at the given time
    pub fn stats(&self, now: DateTime<Utc>) -> VocabStats {
        VocabStats {
            total: self.records.len(),
            due: self.records.iter().filter(|r| r.is_due(now)).count(),
            mastered: self.records.iter().filter(|r| r.is_mastered()).count(),
        }
    }

    /// Look up a phrase by key
    pub fn get(&self, phrase: &str) -> Option<&PhraseRecord> {
        self.records.iter().find(|r| r.phrase == phrase)
    }

    /// All phrases in insertion order
    pub fn all(&self) -> &[PhraseRecord] {
        &self.records
    }

    /// Number of saved phrases
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The review schedule in effect
    pub fn schedule(&self) -> &ReviewSchedule {
        &self.schedule
    }
}

// ============================================================================
// TESTS
// ============================================================================
