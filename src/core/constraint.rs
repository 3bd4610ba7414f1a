//! Search constraints: word length ranges and positional patterns

use crate::error::{FinderError, Result};
use std::fmt;

/// Inclusive bounds on candidate word length
///
/// Invariant: `1 <= min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    /// Default shortest word searched for
    pub const DEFAULT_MIN: usize = 3;
    /// Default longest word searched for
    pub const DEFAULT_MAX: usize = 8;

    /// The default `3..=8` range
    pub const DEFAULT: Self = Self {
        min: Self::DEFAULT_MIN,
        max: Self::DEFAULT_MAX,
    };

    /// Create a range
    ///
    /// # Errors
    /// Returns `InvalidLength` if `min` is zero and `InvalidRange` if
    /// `max < min`.
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min == 0 {
            return Err(FinderError::InvalidLength {
                length: 0,
                reason: "words must be at least one letter long",
            });
        }
        if max < min {
            return Err(FinderError::InvalidRange {
                min: min as i64,
                max: max as i64,
                reason: "maximum length cannot be less than minimum length",
            });
        }
        Ok(Self { min, max })
    }

    /// A range admitting exactly one length
    ///
    /// # Errors
    /// Returns `InvalidLength` if `length` is zero.
    pub fn exactly(length: usize) -> Result<Self> {
        Self::new(length, length)
    }

    /// Whether a word of `length` letters is in range
    #[inline]
    #[must_use]
    pub const fn contains(self, length: usize) -> bool {
        length >= self.min && length <= self.max
    }

    /// Shrink the range so no bound exceeds `limit`
    ///
    /// Used to keep the default range within the letter supply. A `limit`
    /// of zero is treated as one so the invariant holds.
    #[must_use]
    pub fn clamp_to(self, limit: usize) -> Self {
        let limit = limit.max(1);
        let max = self.max.min(limit);
        let min = self.min.min(max);
        Self { min, max }
    }
}

impl Default for LengthRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LengthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{} letters", self.min)
        } else {
            write!(f, "{}-{} letters", self.min, self.max)
        }
    }
}

/// One position of a positional pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// The word must have exactly this letter here
    Fixed(u8),
    /// Any available letter
    Open,
}

impl Cell {
    /// Character used for open cells on the command line
    pub const WILDCARD: u8 = b'_';

    /// Whether `letter` satisfies this cell's position requirement
    ///
    /// Availability in the letter budget is checked separately.
    #[inline]
    #[must_use]
    pub const fn accepts(self, letter: u8) -> bool {
        match self {
            Self::Fixed(required) => required == letter,
            Self::Open => true,
        }
    }
}

/// A fixed-length word template such as `a_bb`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalPattern {
    cells: Vec<Cell>,
}

impl PositionalPattern {
    /// Parse a pattern string
    ///
    /// Lowercase letters are fixed cells, `_` is an open cell.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the string is empty or contains any other
    /// character.
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::{Cell, PositionalPattern};
    ///
    /// let pattern = PositionalPattern::parse("a_bb").unwrap();
    /// assert_eq!(pattern.len(), 4);
    /// assert_eq!(pattern.cells()[1], Cell::Open);
    /// assert_eq!(pattern.cells()[2], Cell::Fixed(b'b'));
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(FinderError::InvalidPattern(text.to_string()));
        }

        let cells = text
            .bytes()
            .map(|b| match b {
                Cell::WILDCARD => Ok(Cell::Open),
                b'a'..=b'z' => Ok(Cell::Fixed(b)),
                _ => Err(FinderError::InvalidPattern(text.to_string())),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { cells })
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells (the exact word length searched for)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a parsed pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl fmt::Display for PositionalPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let ch = match *cell {
                Cell::Fixed(letter) => letter,
                Cell::Open => Cell::WILDCARD,
            };
            write!(f, "{}", ch as char)?;
        }
        Ok(())
    }
}
