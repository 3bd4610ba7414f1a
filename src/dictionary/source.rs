//! Reading the dictionary file
//!
//! Every call to [`DictionarySource::words`] opens the file again and returns
//! a new forward-only iterator, so one search can never exhaust another's input.
//!
//! The file must be UTF-8; a line that is not ends the pass with `IoFailure`.

use crate::error::{FinderError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default dictionary file name, relative to the working directory
pub const DEFAULT_DICTIONARY: &str = "en.dict";

/// A newline-delimited word list on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionarySource {
    path: PathBuf,
}

impl DictionarySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh pass over the dictionary
    ///
    /// # Errors
    /// Returns `IoFailure` if the file cannot be opened.
    pub fn words(&self) -> Result<Words> {
        let file = File::open(&self.path).map_err(|e| FinderError::io(&self.path, e))?;
        debug!(path = %self.path.display(), "opened dictionary");

        Ok(Words {
            lines: BufReader::new(file).lines(),
            path: self.path.clone(),
        })
    }
}

impl Default for DictionarySource {
    fn default() -> Self {
        Self::new(DEFAULT_DICTIONARY)
    }
}

/// One pass over the dictionary, yielding lines as stored
///
/// Both `\n` and `\r\n` terminators are stripped.
#[derive(Debug)]
pub struct Words {
    lines: Lines<BufReader<File>>,
    path: PathBuf,
}

impl Iterator for Words {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines
            .next()
            .map(|line| line.map_err(|e| FinderError::io(&self.path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dictionary(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn words_yields_lines_in_order() {
        let file = dictionary("apple\nBanana\ncherry\n");
        let source = DictionarySource::new(file.path());

        let words: Vec<String> = source.words().unwrap().map(Result::unwrap).collect();
        assert_eq!(words, vec!["apple", "Banana", "cherry"]);
    }

    #[test]
    fn each_pass_starts_from_the_top() {
        let file = dictionary("one\ntwo\n");
        let source = DictionarySource::new(file.path());

        let first: Vec<String> = source.words().unwrap().map(Result::unwrap).collect();
        let second: Vec<String> = source.words().unwrap().map(Result::unwrap).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn crlf_terminators_are_stripped() {
        let file = dictionary("apple\r\nbanana\r\n");
        let source = DictionarySource::new(file.path());

        let words: Vec<String> = source.words().unwrap().map(Result::unwrap).collect();
        assert_eq!(words, vec!["apple", "banana"]);
    }

    #[test]
    fn non_utf8_line_is_io_failure() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"apple\n\xff\xfe\nbanana\n").unwrap();
        let source = DictionarySource::new(file.path());

        let mut words = source.words().unwrap();
        assert_eq!(words.next().unwrap().unwrap(), "apple");
        assert!(matches!(
            words.next(),
            Some(Err(FinderError::IoFailure { .. }))
        ));
    }

    #[test]
    fn missing_file_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = DictionarySource::new(dir.path().join("nope.dict"));

        assert!(matches!(
            source.words(),
            Err(FinderError::IoFailure { .. })
        ));
    }

    #[test]
    fn default_points_at_en_dict() {
        assert_eq!(
            DictionarySource::default().path(),
            Path::new(DEFAULT_DICTIONARY)
        );
    }
}
