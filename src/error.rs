//! Error type shared by every layer of the finder

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can end a search or a dictionary edit
///
/// None of these are retried internally. A search that finds nothing is not
/// an error and never produces one of these.
#[derive(Debug, Error)]
pub enum FinderError {
    #[error("Input string can only contain the letters a-z, got '{0}'")]
    InvalidInput(String),

    #[error("Invalid word length {length}: {reason}")]
    InvalidLength { length: i64, reason: &'static str },

    #[error("Invalid length range {min}..={max}: {reason}")]
    InvalidRange {
        min: i64,
        max: i64,
        reason: &'static str,
    },

    #[error(
        "The number of available letters ({available}) must be at least the size of the pattern ({pattern})"
    )]
    InsufficientLetters { available: usize, pattern: usize },

    #[error("'{0}' isn't a number")]
    NotANumber(String),

    #[error("Pattern '{0}' may only contain the letters a-z and '_' for open cells")]
    InvalidPattern(String),

    #[error("'{0}' is not a dictionary word (ASCII letters only)")]
    InvalidWord(String),

    #[error("Too many constraint arguments: expected at most 2, got {0}")]
    TooManyArguments(usize),

    #[error("I/O failure on {}: {source}", .path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FinderError {
    /// Attach a path to an I/O error
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::IoFailure {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, FinderError>;
