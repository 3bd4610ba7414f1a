//! Letter-availability matching
//!
//! A [`Matcher`] decides whether one dictionary word can be spelled under a
//! constraint. [`SearchMode`] selects between the two matchers at runtime and
//! [`scan`] applies a matcher across a whole word stream.

mod engine;
mod positional;
mod resolve;
mod unconstrained;

pub use engine::{MatchResult, scan};
pub use positional::PositionalMatcher;
pub use resolve::resolve;
pub use unconstrained::UnconstrainedMatcher;

use std::fmt;

/// Predicate over candidate dictionary words
pub trait Matcher {
    /// Whether `word` can be formed under this matcher's constraint
    ///
    /// Must not carry state between calls: every candidate is tested against
    /// the full letter supply.
    fn matches(&self, word: &str) -> bool;
}

/// Enum wrapper for both matcher kinds
///
/// Allows runtime selection of the search mode while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum SearchMode {
    /// Any arrangement within a length range
    Unconstrained(UnconstrainedMatcher),
    /// Fixed letters at fixed positions, exact length
    Positional(PositionalMatcher),
}

impl Matcher for SearchMode {
    fn matches(&self, word: &str) -> bool {
        match self {
            Self::Unconstrained(m) => m.matches(word),
            Self::Positional(m) => m.matches(word),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unconstrained(m) => write!(f, "'{}', {}", m.letters(), m.range()),
            Self::Positional(m) => write!(f, "'{}', pattern {}", m.letters(), m.pattern()),
        }
    }
}
