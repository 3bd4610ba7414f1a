//! Adding and removing dictionary entries
//!
//! Both edits read the whole file, write the new contents to a temporary file
//! in the same directory and rename it over the original. If anything fails
//! before the rename, the temporary file is deleted on drop and the original
//! is left as it was. The rewritten file keeps the original's line terminator
//! (`\r\n` if the file used it anywhere, `\n` otherwise).

use super::DictionarySource;
use crate::error::{FinderError, Result};
use std::cmp::Ordering;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// What an edit did to the dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Word inserted at this 1-based line number
    Added { line: usize },
    /// A case-insensitive equal entry already existed; file not rewritten
    AlreadyPresent,
    /// This many matching lines were dropped
    Removed { count: usize },
    /// No entry matched; file not rewritten
    NotFound,
}

impl EditOutcome {
    /// Whether the dictionary file was rewritten
    #[must_use]
    pub const fn changed(self) -> bool {
        matches!(self, Self::Added { .. } | Self::Removed { .. })
    }
}

impl DictionarySource {
    /// Insert `word` at its case-insensitive sorted position
    ///
    /// Existing duplicate lines are left alone. Adding a word that is already
    /// present (ignoring case) does nothing.
    ///
    /// # Errors
    /// - `InvalidWord` if `word` is empty or not all ASCII letters
    /// - `IoFailure` if the dictionary cannot be read, or the replacement
    ///   cannot be written and renamed into place
    pub fn add_word(&self, word: &str) -> Result<EditOutcome> {
        let word = validate_word(word)?;
        let mut contents = self.read_contents()?;

        if contents
            .lines
            .iter()
            .any(|line| line.trim().eq_ignore_ascii_case(word))
        {
            debug!(word, "already in dictionary");
            return Ok(EditOutcome::AlreadyPresent);
        }

        let position = contents
            .lines
            .iter()
            .position(|line| cmp_ignore_case(line.trim(), word) == Ordering::Greater)
            .unwrap_or(contents.lines.len());
        contents.lines.insert(position, word.to_string());

        self.replace_contents(&contents)?;
        info!(word, line = position + 1, "added word");
        Ok(EditOutcome::Added { line: position + 1 })
    }

    /// Delete every line equal to `word`, ignoring case
    ///
    /// # Errors
    /// - `InvalidWord` if `word` is empty or not all ASCII letters
    /// - `IoFailure` if the dictionary cannot be read, or the replacement
    ///   cannot be written and renamed into place
    pub fn remove_word(&self, word: &str) -> Result<EditOutcome> {
        let word = validate_word(word)?;
        let mut contents = self.read_contents()?;
        let before = contents.lines.len();

        contents
            .lines
            .retain(|line| !line.trim().eq_ignore_ascii_case(word));
        let count = before - contents.lines.len();

        if count == 0 {
            debug!(word, "not in dictionary");
            return Ok(EditOutcome::NotFound);
        }

        self.replace_contents(&contents)?;
        info!(word, count, "removed word");
        Ok(EditOutcome::Removed { count })
    }

    fn read_contents(&self) -> Result<Contents> {
        let content =
            fs::read_to_string(self.path()).map_err(|e| FinderError::io(self.path(), e))?;
        let newline = if content.contains("\r\n") { "\r\n" } else { "\n" };

        Ok(Contents {
            lines: content.lines().map(str::to_string).collect(),
            newline,
        })
    }

    fn replace_contents(&self, contents: &Contents) -> Result<()> {
        let path = self.path();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| FinderError::io(dir, e))?;
        debug!(tmp = %tmp.path().display(), "writing replacement dictionary");

        write_lines(&mut tmp, contents).map_err(|e| FinderError::io(tmp.path(), e))?;
        if let Ok(meta) = fs::metadata(path) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| FinderError::io(tmp.path(), e))?;
        }
        tmp.as_file()
            .sync_all()
            .map_err(|e| FinderError::io(tmp.path(), e))?;

        // On failure the temp file travels back inside the error and is removed when dropped
        tmp.persist(path)
            .map_err(|e| FinderError::io(path, e.error))?;
        Ok(())
    }
}

/// Dictionary lines without terminators, plus the terminator to write back
struct Contents {
    lines: Vec<String>,
    newline: &'static str,
}

fn write_lines(tmp: &mut NamedTempFile, contents: &Contents) -> std::io::Result<()> {
    let mut writer = BufWriter::new(tmp);
    for line in &contents.lines {
        write!(writer, "{line}{}", contents.newline)?;
    }
    writer.flush()
}

fn validate_word(word: &str) -> Result<&str> {
    let trimmed = word.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(FinderError::InvalidWord(word.to_string()));
    }
    Ok(trimmed)
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}
