//! Length-ranged matching: any arrangement of the available letters

use super::Matcher;
use crate::core::{LengthRange, LetterMultiset};

/// Accepts words that fit the length range and can be spelled from the letters
#[derive(Debug, Clone)]
pub struct UnconstrainedMatcher {
    letters: LetterMultiset,
    range: LengthRange,
}

impl UnconstrainedMatcher {
    #[must_use]
    pub const fn new(letters: LetterMultiset, range: LengthRange) -> Self {
        Self { letters, range }
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterMultiset {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn range(&self) -> LengthRange {
        self.range
    }
}

impl Matcher for UnconstrainedMatcher {
    /// # Examples
    /// ```
    /// use word_finder::core::{LengthRange, LetterMultiset};
    /// use word_finder::matcher::{Matcher, UnconstrainedMatcher};
    ///
    /// let letters = LetterMultiset::new("eetr").unwrap();
    /// let matcher = UnconstrainedMatcher::new(letters, LengthRange::new(3, 4).unwrap());
    ///
    /// assert!(matcher.matches("tree"));
    /// assert!(matcher.matches("tee"));
    /// assert!(!matcher.matches("teeter"));
    /// ```
    fn matches(&self, word: &str) -> bool {
        if !self.range.contains(word.len()) {
            return false;
        }

        self.letters.can_spell(word.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(letters: &str, min: usize, max: usize) -> UnconstrainedMatcher {
        UnconstrainedMatcher::new(
            LetterMultiset::new(letters).unwrap(),
            LengthRange::new(min, max).unwrap(),
        )
    }

    #[test]
    fn matches_any_arrangement() {
        let m = matcher("act", 3, 3);
        assert!(m.matches("cat"));
        assert!(m.matches("act"));
        assert!(m.matches("tac"));
        assert!(!m.matches("cab"));
    }

    #[test]
    fn repeated_letters_need_repeated_supply() {
        let m = matcher("tre", 3, 4);
        assert!(!m.matches("tree"));

        let m = matcher("tree", 3, 4);
        assert!(m.matches("tree"));
        assert!(m.matches("tee"));
    }

    #[test]
    fn length_range_is_enforced() {
        let m = matcher("abcdef", 3, 4);
        assert!(!m.matches("ab"));
        assert!(m.matches("abc"));
        assert!(m.matches("abcd"));
        assert!(!m.matches("abcde")); // Spellable but too long
    }

    #[test]
    fn subset_of_letters_is_enough() {
        let m = matcher("zyxcat", 3, 6);
        assert!(m.matches("cat"));
    }

    #[test]
    fn capitalized_entries_are_not_spelled_by_lowercase_letters() {
        let m = matcher("paris", 5, 5);
        assert!(m.matches("pairs"));
        assert!(!m.matches("Paris"));
        assert!(!m.matches("PAIRS"));
    }

    #[test]
    fn non_letters_never_match() {
        let m = matcher("dont", 3, 5);
        assert!(!m.matches("don't"));
        assert!(!m.matches("do n"));
        assert!(!m.matches(""));
    }

    #[test]
    fn each_candidate_starts_with_full_supply() {
        let m = matcher("ab", 1, 2);
        assert!(m.matches("ab"));
        assert!(m.matches("ba"));
        assert!(m.matches("a"));
        assert!(!m.matches("aa"));
        assert!(m.matches("ab"));
    }

    #[test]
    fn boundary_letter_supply_excludes_longer_words() {
        let m = matcher("abc", 1, 3);
        let found: Vec<&str> = ["a", "ab", "abc", "abcd"]
            .into_iter()
            .filter(|w| m.matches(w))
            .collect();
        assert_eq!(found, vec!["a", "ab", "abc"]);
    }
}
