//! Guided-Turn Formatting
//!
//! Guided-mode tutor turns follow a fixed three-line shape per sentence:
//!
//! ```text
//! నమస్కారం!
//! (namaskāraṁ!)
//! [Hello!]
//! ```
//!
//! This module parses that shape back out of a turn (for saving phrases) and
//! strips the annotation lines when only the target-language text is wanted
//! (for the speech collaborator).

use super::Language;

/// One phrase parsed out of a guided-mode turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTurn {
    /// Target-language line
    pub native: String,
    /// Transliteration (parenthesized line, without the parentheses)
    pub transliteration: String,
    /// English translation (bracketed line, without the brackets)
    pub english: String,
}

/// Parse the first complete phrase out of a guided-mode turn.
///
/// Takes the first line written in the target script together with the first
/// transliteration and translation annotations found anywhere in the turn.
/// Returns `None` when any of the three parts is missing.
pub fn parse_guided_turn(text: &str, language: &Language) -> Option<ParsedTurn> {
    let mut native = None;
    let mut transliteration = None;
    let mut english = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(inner) = annotation(line, '(', ')') {
            transliteration.get_or_insert_with(|| inner.to_string());
        } else if let Some(inner) = annotation(line, '[', ']') {
            english.get_or_insert_with(|| inner.to_string());
        } else if language.has_script(line) {
            native.get_or_insert_with(|| line.to_string());
        }
    }

    Some(ParsedTurn {
        native: native?,
        transliteration: transliteration?,
        english: english?,
    })
}

/// Strip a turn down to its target-script lines, joined with spaces.
///
/// Annotation lines (transliterations in parentheses, translations in
/// brackets) and lines without any target-script character are dropped. In
/// conversational mode the whole turn is target language and passes through
/// largely unchanged.
pub fn extract_script_text(text: &str, language: &Language) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            annotation(line, '(', ')').is_none() && annotation(line, '[', ']').is_none()
        })
        .filter(|line| language.has_script(line))
        .collect::<Vec<_>>()
        .join(" ")
}

fn annotation(line: &str, open: char, close: char) -> Option<&str> {
    let inner = line.strip_prefix(open)?.strip_suffix(close)?;
    Some(inner)
}

// ============================================================================
// TESTS
// ============================================================================
