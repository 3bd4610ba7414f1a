//! Word search command
//!
//! Resolves the constraint arguments, then makes one pass over the dictionary.

use crate::dictionary::DictionarySource;
use crate::error::Result;
use crate::matcher::{MatchResult, SearchMode, resolve, scan};
use tracing::{debug, info};

/// What to search for
#[derive(Debug, Clone)]
pub struct FindConfig {
    /// Available letters, `a-z` only
    pub letters: String,
    /// Zero, one or two extra arguments: lengths or a pattern
    pub constraints: Vec<String>,
}

impl FindConfig {
    #[must_use]
    pub const fn new(letters: String, constraints: Vec<String>) -> Self {
        Self {
            letters,
            constraints,
        }
    }
}

/// Result of a search
#[derive(Debug, Clone)]
pub struct FindResult {
    pub mode: SearchMode,
    pub matches: MatchResult,
}

/// Run a search against the dictionary
///
/// # Errors
///
/// Returns an error if:
/// - The letters or constraint arguments fail validation
/// - The dictionary cannot be opened or read
pub fn find_words(config: &FindConfig, source: &DictionarySource) -> Result<FindResult> {
    let mode = resolve(&config.letters, config.constraints.as_slice())?;
    debug!(%mode, "resolved search");

    let matches = scan(&mode, source.words()?)?;
    info!(
        found = matches.count(),
        scanned = matches.scanned,
        "search complete"
    );

    Ok(FindResult { mode, matches })
}
