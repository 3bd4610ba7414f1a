//! Applying a matcher across a word stream

use super::Matcher;
use crate::error::Result;

/// Words found by one search, in dictionary order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub words: Vec<String>,
    /// Candidates examined, matched or not
    pub scanned: usize,
}

impl MatchResult {
    /// Number of matching words
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    /// True when nothing matched (a normal outcome, not an error)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Run `matcher` over every word of `words` exactly once
///
/// Words are trimmed before testing; blank lines are skipped. The first read
/// error aborts the scan.
///
/// # Errors
/// Propagates any error produced by the word stream.
///
/// # Examples
/// ```
/// use word_finder::matcher::{resolve, scan};
///
/// let mode = resolve("abc", &["1", "3"]).unwrap();
/// let dictionary = ["a", "ab", "abc", "abcd"].map(|w| Ok(w.to_string()));
///
/// let result = scan(&mode, dictionary).unwrap();
/// assert_eq!(result.words, vec!["a", "ab", "abc"]);
/// assert_eq!(result.count(), 3);
/// ```
pub fn scan<M, I>(matcher: &M, words: I) -> Result<MatchResult>
where
    M: Matcher + ?Sized,
    I: IntoIterator<Item = Result<String>>,
{
    let mut result = MatchResult::default();

    for word in words {
        let word = word?;
        let candidate = word.trim();
        if candidate.is_empty() {
            continue;
        }

        result.scanned += 1;
        if matcher.matches(candidate) {
            result.words.push(candidate.to_string());
        }
    }

    Ok(result)
}
