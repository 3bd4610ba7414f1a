//! Pattern matching: fixed letters at fixed positions, open cells elsewhere

use super::Matcher;
use crate::core::{LetterMultiset, PositionalPattern};

/// Accepts words that fit the pattern and can be spelled from the letters
///
/// Fixed cells are charged against the letter budget like open cells, so a
/// pattern letter missing from the supply can never match anything.
#[derive(Debug, Clone)]
pub struct PositionalMatcher {
    letters: LetterMultiset,
    pattern: PositionalPattern,
}

impl PositionalMatcher {
    #[must_use]
    pub const fn new(letters: LetterMultiset, pattern: PositionalPattern) -> Self {
        Self { letters, pattern }
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterMultiset {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &PositionalPattern {
        &self.pattern
    }
}

impl Matcher for PositionalMatcher {
    fn matches(&self, word: &str) -> bool {
        if word.len() != self.pattern.len() {
            return false;
        }

        let mut budget = self.letters.budget();
        self.pattern
            .cells()
            .iter()
            .zip(word.bytes())
            .all(|(cell, ch)| cell.accepts(ch) && budget.consume(ch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(letters: &str, pattern: &str) -> PositionalMatcher {
        PositionalMatcher::new(
            LetterMultiset::new(letters).unwrap(),
            PositionalPattern::parse(pattern).unwrap(),
        )
    }

    #[test]
    fn fixed_cells_must_agree() {
        let m = matcher("cats", "c__");
        assert!(m.matches("cat"));
        assert!(!m.matches("act"));
        assert!(!m.matches("sat"));
    }

    #[test]
    fn length_must_be_exact() {
        let m = matcher("cats", "c__");
        assert!(!m.matches("cats"));
        assert!(!m.matches("ca"));
    }

    #[test]
    fn fixed_cells_are_charged_against_letters() {
        // Letters only hold one 't'; the fixed 't' uses it up
        let m = matcher("tao", "t__");
        assert!(m.matches("tao"));
        assert!(!m.matches("tot"));
    }

    #[test]
    fn fixed_letter_missing_from_supply_never_matches() {
        let m = matcher("abc", "z__");
        assert!(!m.matches("zab"));
        assert!(!m.matches("abc"));
    }

    #[test]
    fn all_open_cells_behave_like_exact_length_search() {
        let m = matcher("tree", "____");
        assert!(m.matches("tree"));
        assert!(m.matches("eert")); // Any arrangement
        assert!(m.matches("rete"));
        assert!(!m.matches("reef"));
    }

    #[test]
    fn boundary_pattern_with_repeated_fixed_letters() {
        let m = matcher("aabb", "a_bb");
        let found: Vec<&str> = ["aabb", "abbb", "aabc"]
            .into_iter()
            .filter(|w| m.matches(w))
            .collect();
        assert_eq!(found, vec!["aabb"]);
    }

    #[test]
    fn fixed_cells_compare_exactly() {
        let m = matcher("paris", "p____");
        assert!(m.matches("pairs"));
        assert!(!m.matches("Paris"));

        // Open cells are still charged, so capitals never match either
        let m = matcher("paris", "_____");
        assert!(!m.matches("Paris"));
    }
}
