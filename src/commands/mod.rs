//! Command implementations

pub mod edit;
pub mod find;

pub use edit::{EditCommand, EditResult, run_edit};
pub use find::{FindConfig, FindResult, find_words};
