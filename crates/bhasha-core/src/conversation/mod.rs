//! Conversation Module
//!
//! Seams between the scheduling core and the conversation glue:
//! - `Language` registry with script ranges for the supported languages
//! - `Mode`: guided immersion vs pure conversational practice
//! - `TurnContext`: the plain-data bundle handed to the prompt builder
//! - `ConversationService`: the consumed LLM collaborator trait
//!
//! The core never builds prompts or touches audio; it only supplies the
//! current complexity level and adjustment instruction.

pub mod format;

use serde::{Deserialize, Serialize};

use crate::session::ComplexityLevel;

// ============================================================================
// LANGUAGES
// ============================================================================

/// A supported target language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Lookup key (e.g. "telugu")
    pub key: &'static str,
    /// English display name
    pub name: &'static str,
    /// Language code passed to the TTS/STT collaborator
    pub code: &'static str,
    /// Name in the language's own script
    pub native_name: &'static str,
    /// Unicode block covering the language's script
    script_range: (char, char),
}

/// Supported target languages
pub const LANGUAGES: [Language; 3] = [
    Language {
        key: "telugu",
        name: "Telugu",
        code: "te",
        native_name: "తెలుగు",
        script_range: ('\u{0C00}', '\u{0C7F}'),
    },
    Language {
        key: "tamil",
        name: "Tamil",
        code: "ta",
        native_name: "தமிழ்",
        script_range: ('\u{0B80}', '\u{0BFF}'),
    },
    Language {
        key: "kannada",
        name: "Kannada",
        code: "kn",
        native_name: "ಕನ್ನಡ",
        script_range: ('\u{0C80}', '\u{0CFF}'),
    },
];

impl Language {
    /// Look up a language by key
    pub fn get(key: &str) -> Option<&'static Language> {
        LANGUAGES.iter().find(|l| l.key == key)
    }

    /// All supported languages
    pub fn all() -> &'static [Language] {
        &LANGUAGES
    }

    /// Whether a character belongs to this language's script
    pub fn script_contains(&self, c: char) -> bool {
        let (start, end) = self.script_range;
        (start..=end).contains(&c)
    }

    /// Whether any character of the text is in this language's script
    pub fn has_script(&self, text: &str) -> bool {
        text.chars().any(|c| self.script_contains(c))
    }
}

// ============================================================================
// LEARNING MODES
// ============================================================================

/// Learning mode for a practice session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Tutor turns carry transliteration and translation annotations;
    /// phrases can be saved for review
    #[default]
    Guided,
    /// Target-language-only conversation with a "native speaker"
    Conversational,
}

impl Mode {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Guided => "guided",
            Mode::Conversational => "conversational",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "guided" => Ok(Mode::Guided),
            "conversational" => Ok(Mode::Conversational),
            _ => Err(format!("Unknown mode: {}", s)),
        }
    }
}

// ============================================================================
// SCENARIOS
// ============================================================================

/// Default practice scenarios
pub const SCENARIOS: [&str; 7] = [
    "ordering coffee at a café",
    "buying vegetables at the market",
    "greeting a family member",
    "asking for directions",
    "introducing yourself to someone new",
    "ordering food at a restaurant",
    "shopping for clothes",
];

// ============================================================================
// COLLABORATOR SEAM
// ============================================================================

/// Everything the prompt-building collaborator needs for one tutor turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnContext {
    /// Target language key
    pub language: String,
    /// Scenario label
    pub scenario: String,
    /// Learning mode
    pub mode: Mode,
    /// Complexity level in effect
    pub level: ComplexityLevel,
    /// Adjustment instruction from the most recent checkpoint
    pub instruction: String,
}

/// Error from the conversation collaborator; upstream API failures are
/// opaque at this layer
#[derive(Debug, thiserror::Error)]
#[error("conversation service error: {0}")]
pub struct ConversationError(pub String);

/// Consumed collaborator that produces tutor utterances by calling the
/// external LLM. The core supplies `(level, instruction)` via `TurnContext`
/// and never constructs prompts itself.
pub trait ConversationService {
    /// Open a conversation and produce the tutor's first utterance
    fn open_conversation(&mut self, context: &TurnContext) -> Result<String, ConversationError>;

    /// Produce the next tutor utterance in reply to the learner
    fn next_utterance(
        &mut self,
        context: &TurnContext,
        learner_text: &str,
    ) -> Result<String, ConversationError>;
}

// ============================================================================
// TESTS
// ============================================================================
