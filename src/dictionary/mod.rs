//! The word list on disk
//!
//! Reading is a fresh forward pass per search; edits rewrite the whole file
//! through a temporary file and an atomic rename.

mod edit;
mod source;

pub use edit::EditOutcome;
pub use source::{DEFAULT_DICTIONARY, DictionarySource, Words};
