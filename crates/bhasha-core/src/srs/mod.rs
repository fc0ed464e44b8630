//! Spaced-Repetition Module
//!
//! Durable review scheduling for saved phrases:
//! - `ReviewSchedule`: fixed ascending ladder of review gaps
//! - `PhraseRecord`: the persisted phrase with its schedule state
//! - `VocabStore`: save / due / review / group operations over the store
//!
//! Success climbs the ladder one rung at a time; failure drops straight back
//! to the shortest gap (aggressive relearning).

mod phrase;
mod schedule;
mod store;

pub use phrase::{MASTERED_REVIEW_COUNT, PhraseRecord, SavePhrase, VocabStats};
pub use schedule::{DEFAULT_GAPS_DAYS, ReviewSchedule};
pub use store::VocabStore;
