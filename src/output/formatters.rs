//! Formatting utilities for terminal output

use crate::dictionary::EditOutcome;

/// Shown when a search completes without matches
pub const NOTHING_FOUND: &str = "Nothing found matching the supplied criteria.";

/// "Found 1 word" / "Found 12 words"
#[must_use]
pub fn count_summary(count: usize) -> String {
    let noun = if count == 1 { "word" } else { "words" };
    format!("Found {count} {noun}")
}

/// One-line description of an edit outcome
#[must_use]
pub fn describe_outcome(word: &str, outcome: EditOutcome) -> String {
    match outcome {
        EditOutcome::Added { line } => format!("Added '{word}' at line {line}"),
        EditOutcome::AlreadyPresent => format!("'{word}' is already in the dictionary"),
        EditOutcome::Removed { count: 1 } => format!("Removed '{word}'"),
        EditOutcome::Removed { count } => format!("Removed {count} copies of '{word}'"),
        EditOutcome::NotFound => format!("'{word}' is not in the dictionary"),
    }
}
