//! Turning raw constraint arguments into a search mode
//!
//! Accepted shapes after the letters:
//! - nothing: default range `3..=8`, clamped to the number of letters
//! - one number `n`: words of exactly `n` letters
//! - two numbers `min max`: words of `min..=max` letters
//! - anything else: a positional pattern such as `a_bb`

use super::{PositionalMatcher, SearchMode, UnconstrainedMatcher};
use crate::core::{LengthRange, LetterMultiset, PositionalPattern};
use crate::error::{FinderError, Result};

const LONGER_THAN_SUPPLY: &str = "cannot find words longer than the number of available letters";

/// Validate the letters and constraint arguments and pick a matcher
///
/// # Errors
/// - `InvalidInput` if `letters` is empty or not all `a-z`
/// - `InvalidLength` for a non-positive length, or a single length above the letter count
/// - `InvalidRange` if `max < min` or `max` is above the letter count
/// - `NotANumber` if one of two range arguments is not an integer
/// - `InvalidPattern` / `InsufficientLetters` for a bad or over-long pattern
/// - `TooManyArguments` for more than two constraint arguments
///
/// # Examples
/// ```
/// use word_finder::matcher::{resolve, Matcher};
///
/// let mode = resolve("aabb", &["a_bb".to_string()]).unwrap();
/// assert!(mode.matches("aabb"));
/// assert!(!mode.matches("abbb"));
///
/// assert!(resolve("abc", &["4".to_string()]).is_err());
/// ```
pub fn resolve<S: AsRef<str>>(letters: &str, args: &[S]) -> Result<SearchMode> {
    let letters = LetterMultiset::new(letters)?;
    let supply = letters.len();

    match args {
        [] => {
            let range = LengthRange::DEFAULT.clamp_to(supply);
            Ok(SearchMode::Unconstrained(UnconstrainedMatcher::new(
                letters, range,
            )))
        }
        [arg] if looks_numeric(arg.as_ref()) => {
            let length = parse_number(arg.as_ref())?;
            let range = single_length(length, supply)?;
            Ok(SearchMode::Unconstrained(UnconstrainedMatcher::new(
                letters, range,
            )))
        }
        [arg] => {
            let pattern = PositionalPattern::parse(arg.as_ref())?;
            if supply < pattern.len() {
                return Err(FinderError::InsufficientLetters {
                    available: supply,
                    pattern: pattern.len(),
                });
            }
            Ok(SearchMode::Positional(PositionalMatcher::new(
                letters, pattern,
            )))
        }
        [min, max] => {
            let min = parse_number(min.as_ref())?;
            let max = parse_number(max.as_ref())?;
            let range = length_range(min, max, supply)?;
            Ok(SearchMode::Unconstrained(UnconstrainedMatcher::new(
                letters, range,
            )))
        }
        _ => Err(FinderError::TooManyArguments(args.len())),
    }
}

fn single_length(length: i64, supply: usize) -> Result<LengthRange> {
    if length <= 0 {
        return Err(FinderError::InvalidLength {
            length,
            reason: "length must be positive",
        });
    }
    if length > supply as i64 {
        return Err(FinderError::InvalidLength {
            length,
            reason: LONGER_THAN_SUPPLY,
        });
    }
    LengthRange::exactly(length as usize)
}

fn length_range(min: i64, max: i64, supply: usize) -> Result<LengthRange> {
    if min <= 0 {
        return Err(FinderError::InvalidLength {
            length: min,
            reason: "minimum length must be positive",
        });
    }
    if max < min {
        return Err(FinderError::InvalidRange {
            min,
            max,
            reason: "maximum length cannot be less than minimum length",
        });
    }
    if max > supply as i64 {
        return Err(FinderError::InvalidRange {
            min,
            max,
            reason: LONGER_THAN_SUPPLY,
        });
    }
    LengthRange::new(min as usize, max as usize)
}

/// Optional sign followed by at least one digit
fn looks_numeric(arg: &str) -> bool {
    let digits = arg
        .strip_prefix('-')
        .or_else(|| arg.strip_prefix('+'))
        .unwrap_or(arg);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_number(arg: &str) -> Result<i64> {
    if !looks_numeric(arg) {
        return Err(FinderError::NotANumber(arg.to_string()));
    }
    arg.parse()
        .map_err(|_| FinderError::NotANumber(arg.to_string()))
}
