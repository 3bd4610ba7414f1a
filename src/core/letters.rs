//! Available-letter budget
//!
//! A `LetterMultiset` counts how many of each lowercase letter the player holds.
//! Matchers never mutate the original; each candidate word is charged against
//! a scratch copy obtained from [`LetterMultiset::budget`].

use crate::error::{FinderError, Result};
use rustc_hash::FxHashMap;
use std::fmt;

/// Multiset of available lowercase ASCII letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterMultiset {
    text: String,
    counts: FxHashMap<u8, u32>,
    total: usize,
}

impl LetterMultiset {
    /// Build a multiset from a letters string
    ///
    /// # Errors
    /// Returns `FinderError::InvalidInput` if the string is empty or contains
    /// anything other than `a-z`.
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::LetterMultiset;
    ///
    /// let letters = LetterMultiset::new("tree").unwrap();
    /// assert_eq!(letters.len(), 4);
    /// assert!(letters.can_spell(b"tee"));
    /// assert!(!letters.can_spell(b"teee"));
    ///
    /// assert!(LetterMultiset::new("Tree").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();

        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(FinderError::InvalidInput(text));
        }

        let mut counts: FxHashMap<u8, u32> = FxHashMap::default();
        for &ch in text.as_bytes() {
            *counts.entry(ch).or_insert(0) += 1;
        }

        Ok(Self {
            total: text.len(),
            text,
            counts,
        })
    }

    /// Total number of letters, duplicates included
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    /// Always false: construction rejects an empty letter set
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Fresh scratch budget for testing one candidate word
    #[inline]
    #[must_use]
    pub fn budget(&self) -> Budget {
        Budget {
            remaining: self.counts.clone(),
        }
    }

    /// Check whether every byte of `word` can be paid for
    ///
    /// Stops at the first byte the budget cannot cover. Bytes are compared
    /// exactly: uppercase letters and anything outside `a-z` are never
    /// available.
    #[must_use]
    pub fn can_spell(&self, word: &[u8]) -> bool {
        let mut budget = self.budget();
        word.iter().all(|&ch| budget.consume(ch))
    }
}

impl fmt::Display for LetterMultiset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Per-candidate scratch copy of the letter counts
#[derive(Debug, Clone)]
pub struct Budget {
    remaining: FxHashMap<u8, u32>,
}

impl Budget {
    /// Spend one `letter`; returns false if none is left
    #[inline]
    pub fn consume(&mut self, letter: u8) -> bool {
        match self.remaining.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiset_counts_duplicates() {
        let letters = LetterMultiset::new("banana").unwrap();
        assert_eq!(letters.len(), 6);
        assert_eq!(letters.to_string(), "banana");

        assert!(letters.can_spell(b"aaa"));
        assert!(!letters.can_spell(b"aaaa"));
        assert!(letters.can_spell(b"nn"));
        assert!(!letters.can_spell(b"bb"));
        assert!(!letters.can_spell(b"z"));
    }

    #[test]
    fn multiset_rejects_invalid_input() {
        assert!(matches!(
            LetterMultiset::new(""),
            Err(FinderError::InvalidInput(_))
        ));
        assert!(LetterMultiset::new("abC").is_err()); // Uppercase
        assert!(LetterMultiset::new("ab1").is_err()); // Digit
        assert!(LetterMultiset::new("a b").is_err()); // Space
        assert!(LetterMultiset::new("café").is_err()); // Non-ASCII
    }

    #[test]
    fn budget_consumes_until_exhausted() {
        let letters = LetterMultiset::new("ee").unwrap();
        let mut budget = letters.budget();

        assert!(budget.consume(b'e'));
        assert!(budget.consume(b'e'));
        assert!(!budget.consume(b'e'));
        assert!(!budget.consume(b'x'));
    }

    #[test]
    fn budget_is_independent_of_original() {
        let letters = LetterMultiset::new("abc").unwrap();

        let mut first = letters.budget();
        assert!(first.consume(b'a'));
        assert!(!first.consume(b'a'));

        // A new budget starts from the full supply again
        let mut second = letters.budget();
        assert!(second.consume(b'a'));
        assert!(letters.can_spell(b"a"));
    }

    #[test]
    fn can_spell_respects_repeats() {
        let letters = LetterMultiset::new("tre").unwrap();
        assert!(letters.can_spell(b"ret"));
        assert!(!letters.can_spell(b"tree")); // Needs two e's

        let letters = LetterMultiset::new("tree").unwrap();
        assert!(letters.can_spell(b"tree"));
        assert!(letters.can_spell(b""));
    }

    #[test]
    fn can_spell_is_case_sensitive() {
        let letters = LetterMultiset::new("tree").unwrap();
        assert!(!letters.can_spell(b"Tree"));
        assert!(!letters.can_spell(b"TREE"));
    }
}
