//! Core domain types for word finding
//!
//! The letter budget and the two kinds of search constraint. Everything here
//! is pure and free of I/O.

mod constraint;
mod letters;

pub use constraint::{Cell, LengthRange, PositionalPattern};
pub use letters::{Budget, LetterMultiset};
