//! Word Finder
//!
//! Finds every dictionary word that can be spelled from a set of available
//! letters, optionally limited to a length range or a positional pattern.
//!
//! # Quick Start
//!
//! ```rust
//! use word_finder::matcher::{resolve, scan};
//!
//! // Letters "tree", words of exactly four letters
//! let mode = resolve("tree", &["4"]).unwrap();
//!
//! let dictionary = ["tree", "reet", "teer", "tret"].map(|w| Ok(w.to_string()));
//! let result = scan(&mode, dictionary).unwrap();
//! assert_eq!(result.words, vec!["tree", "reet", "teer"]);
//! ```

// Error type
pub mod error;

// Core domain types
pub mod core;

// Matching engine
pub mod matcher;

// Dictionary file access
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::FinderError;
