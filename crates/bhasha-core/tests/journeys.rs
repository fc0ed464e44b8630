//! End-to-end journeys over the tutoring core: complete practice sessions
//! driving the complexity dial, and save → due → review cycles over the
//! vocabulary store, including the file-backed persistence path.

use bhasha_core::{
    ComplexityLevel, Direction, JsonFileStore, MemoryStore, Mode, PerformanceTracker,
    ReviewSchedule, SavePhrase, SessionStore, TutorError, VocabStore,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn day(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap() + Duration::days(n)
}

fn phrase(key: &str) -> SavePhrase {
    SavePhrase {
        phrase: key.to_string(),
        transliteration: "translit".to_string(),
        english: "english".to_string(),
        context: "practice".to_string(),
    }
}

// ============================================================================
// COMPLEXITY JOURNEYS
// ============================================================================

#[test]
fn strong_learner_climbs_to_advanced_and_stays_there() {
    let mut tracker = PerformanceTracker::new();

    // 30 flawless exchanges: checkpoints at 5 and 10 climb to Advanced,
    // every later checkpoint clamps there
    let mut levels = Vec::new();
    for _ in 0..30 {
        tracker.record_turn(true);
        levels.push(tracker.maybe_adjust().level);
    }

    assert_eq!(levels[4], ComplexityLevel::Intermediate);
    assert_eq!(levels[9], ComplexityLevel::Advanced);
    assert!(levels[10..].iter().all(|&l| l == ComplexityLevel::Advanced));
}

#[test]
fn struggling_learner_is_floored_at_beginner() {
    let mut tracker = PerformanceTracker::new();

    for _ in 0..20 {
        tracker.record_turn(false);
        let adjustment = tracker.maybe_adjust();
        assert_eq!(adjustment.level, ComplexityLevel::Beginner);
    }
    assert_eq!(tracker.exchange_count(), 20);
    assert_eq!(tracker.success_count(), 0);
}

#[test]
fn mixed_session_rises_then_falls() {
    let mut tracker = PerformanceTracker::new();

    // First checkpoint: 5/5 raises the level
    for _ in 0..5 {
        tracker.record_turn(true);
        tracker.maybe_adjust();
    }
    assert_eq!(tracker.level(), ComplexityLevel::Intermediate);

    // Ten straight failures drag the whole-session rate to 5/15 < 0.5
    let mut last = None;
    for _ in 0..10 {
        tracker.record_turn(false);
        last = Some(tracker.maybe_adjust());
    }
    let last = last.unwrap();
    assert_eq!(last.direction, Direction::Decrease);
    assert_eq!(last.level, ComplexityLevel::Beginner);
}

#[test]
fn whole_session_rate_not_a_sliding_window() {
    let mut tracker = PerformanceTracker::new();

    // 4 successes then 1 failure: rate at the first checkpoint is exactly
    // 0.8, which is not strictly above the raise threshold
    for _ in 0..4 {
        tracker.record_turn(true);
        tracker.maybe_adjust();
    }
    tracker.record_turn(false);
    let adjustment = tracker.maybe_adjust();
    assert_eq!(adjustment.direction, Direction::Maintain);
    assert_eq!(adjustment.level, ComplexityLevel::Beginner);

    // A perfect second block lifts the cumulative rate to 9/10
    for _ in 0..5 {
        tracker.record_turn(true);
        tracker.maybe_adjust();
    }
    assert_eq!(tracker.level(), ComplexityLevel::Intermediate);
}

#[test]
fn sessions_are_independent() {
    let mut sessions = SessionStore::new();
    let strong = sessions.start("telugu", "asking for directions", Mode::Guided).id.clone();
    let weak = sessions.start("telugu", "asking for directions", Mode::Guided).id.clone();

    for _ in 0..5 {
        sessions.record_turn(&strong, true).unwrap();
        sessions.record_turn(&weak, false).unwrap();
    }

    assert_eq!(
        sessions.get(&strong).unwrap().tracker.level(),
        ComplexityLevel::Intermediate
    );
    assert_eq!(
        sessions.get(&weak).unwrap().tracker.level(),
        ComplexityLevel::Beginner
    );
}

// ============================================================================
// REVIEW JOURNEYS
// ============================================================================

#[test]
fn day_by_day_review_walkthrough() {
    // Save "hello" at day 0 -> due day 1. Success at day 1 -> due day 4.
    // Success at day 4 -> due day 11. Failure at day 11 -> due day 12.
    let mut vocab = VocabStore::open(MemoryStore::new()).unwrap();
    vocab
        .save_phrase(phrase("hello"), ComplexityLevel::Beginner, day(0))
        .unwrap();

    assert_eq!(vocab.due(day(0)).count(), 0);
    assert_eq!(vocab.get("hello").unwrap().next_due_at, day(1));

    let r = vocab.mark_reviewed("hello", true, day(1)).unwrap();
    assert_eq!(r.next_due_at, day(4));

    let r = vocab.mark_reviewed("hello", true, day(4)).unwrap();
    assert_eq!(r.next_due_at, day(11));

    let r = vocab.mark_reviewed("hello", false, day(11)).unwrap();
    assert_eq!(r.interval_index, 0);
    assert_eq!(r.next_due_at, day(12));
    assert_eq!(r.review_count, 3);
}

#[test]
fn plateau_then_lapse_then_recovery() {
    let mut vocab = VocabStore::open(MemoryStore::new()).unwrap();
    vocab
        .save_phrase(phrase("వంకాయ"), ComplexityLevel::Intermediate, day(0))
        .unwrap();

    // Climb the whole ladder; extra successes stay on the plateau
    let ladder = vocab.schedule().len();
    for i in 0..ladder + 2 {
        vocab.mark_reviewed("వంకాయ", true, day(i as i64)).unwrap();
    }
    let plateau = vocab.get("వంకాయ").unwrap().interval_index;
    assert_eq!(plateau, ladder - 1);

    // One lapse falls all the way back
    let r = vocab.mark_reviewed("వంకాయ", false, day(100)).unwrap();
    assert_eq!(r.interval_index, 0);
    assert_eq!(r.next_due_at, day(101));

    // And the climb starts over from the shortest gap
    let r = vocab.mark_reviewed("వంకాయ", true, day(101)).unwrap();
    assert_eq!(r.interval_index, 1);
    assert_eq!(r.next_due_at, day(104));
}

#[test]
fn due_listing_is_restartable_and_ordered() {
    let mut vocab = VocabStore::open(MemoryStore::new()).unwrap();
    vocab.save_phrase(phrase("late"), ComplexityLevel::Beginner, day(5)).unwrap();
    vocab.save_phrase(phrase("early"), ComplexityLevel::Beginner, day(0)).unwrap();

    let first: Vec<String> = vocab.due(day(30)).map(|r| r.phrase.clone()).collect();
    let second: Vec<String> = vocab.due(day(30)).map(|r| r.phrase.clone()).collect();
    assert_eq!(first, vec!["early", "late"]);
    assert_eq!(first, second);
}

#[test]
fn mastery_counts_reviews_not_outcomes() {
    let mut vocab = VocabStore::open(MemoryStore::new()).unwrap();
    vocab.save_phrase(phrase("పుస్తకం"), ComplexityLevel::Beginner, day(0)).unwrap();

    // Five reviews, all failures: still mastered by the review-count rule
    for i in 1..=5 {
        vocab.mark_reviewed("పుస్తకం", false, day(i)).unwrap();
    }
    let stats = vocab.stats(day(6));
    assert_eq!(stats.total, 1);
    assert_eq!(stats.mastered, 1);
}

// ============================================================================
// PERSISTENCE JOURNEYS
// ============================================================================

#[test]
fn vocabulary_survives_restart_through_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocabulary.json");

    {
        let mut vocab = VocabStore::open(JsonFileStore::new(&path)).unwrap();
        vocab.save_phrase(phrase("నమస్కారం"), ComplexityLevel::Beginner, day(0)).unwrap();
        vocab.save_phrase(phrase("వందనం"), ComplexityLevel::Advanced, day(0)).unwrap();
        vocab.mark_reviewed("నమస్కారం", true, day(1)).unwrap();
    }

    // Fresh process: full reload from the file
    let vocab = VocabStore::open(JsonFileStore::new(&path)).unwrap();
    assert_eq!(vocab.len(), 2);

    let hello = vocab.get("నమస్కారం").unwrap();
    assert_eq!(hello.interval_index, 1);
    assert_eq!(hello.next_due_at, day(4));
    assert_eq!(hello.review_count, 1);

    let buckets = vocab.group_by_difficulty();
    assert_eq!(buckets[&1].len(), 1);
    assert_eq!(buckets[&3].len(), 1);
}

#[test]
fn failed_write_leaves_store_and_file_consistent() {
    let store = MemoryStore::new();
    let mut vocab = VocabStore::open(store).unwrap();
    vocab.save_phrase(phrase("kept"), ComplexityLevel::Beginner, day(0)).unwrap();

    // Reload through a collaborator that rejects the next write
    let failing = MemoryStore::with_records(vocab.all().to_vec());
    failing.fail_next_save();
    let mut vocab = VocabStore::open(failing).unwrap();

    let err = vocab
        .save_phrase(phrase("dropped"), ComplexityLevel::Beginner, day(0))
        .unwrap_err();
    assert!(matches!(err, TutorError::Persistence(_)));

    // In-memory state matches what was durably recorded
    assert_eq!(vocab.len(), 1);
    assert!(vocab.get("kept").is_some());
    assert!(vocab.get("dropped").is_none());
}

#[test]
fn custom_schedule_flows_through_the_store() {
    let schedule = ReviewSchedule::new(vec![2, 5]).unwrap();
    let mut vocab =
        VocabStore::open_with_schedule(MemoryStore::new(), schedule).unwrap();

    vocab.save_phrase(phrase("x"), ComplexityLevel::Beginner, day(0)).unwrap();
    assert_eq!(vocab.get("x").unwrap().next_due_at, day(2));

    let r = vocab.mark_reviewed("x", true, day(2)).unwrap();
    assert_eq!(r.next_due_at, day(7));

    // Two-rung ladder: already at the plateau
    let r = vocab.mark_reviewed("x", true, day(7)).unwrap();
    assert_eq!(r.interval_index, 1);
    assert_eq!(r.next_due_at, day(12));
}
