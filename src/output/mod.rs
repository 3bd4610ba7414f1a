//! Terminal output formatting
//!
//! Display utilities for CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_edit_result, print_find_result};
