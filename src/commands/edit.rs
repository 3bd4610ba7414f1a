//! Dictionary edit commands

use crate::dictionary::{DictionarySource, EditOutcome};
use crate::error::Result;

/// A single-word change to the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    Add(String),
    Remove(String),
}

impl EditCommand {
    /// The word being added or removed
    #[must_use]
    pub fn word(&self) -> &str {
        match self {
            Self::Add(word) | Self::Remove(word) => word,
        }
    }
}

/// Result of an edit
#[derive(Debug, Clone)]
pub struct EditResult {
    pub command: EditCommand,
    pub outcome: EditOutcome,
}

/// Apply an edit to the dictionary
///
/// # Errors
///
/// Returns an error if the word is invalid or the dictionary cannot be
/// rewritten. The original file is left intact on failure.
pub fn run_edit(command: EditCommand, source: &DictionarySource) -> Result<EditResult> {
    let outcome = match &command {
        EditCommand::Add(word) => source.add_word(word)?,
        EditCommand::Remove(word) => source.remove_word(word)?,
    };

    Ok(EditResult { command, outcome })
}
