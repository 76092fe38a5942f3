//! Dictionary records and the per-line transformation into IME entries

use crate::domain::pos_map;
use std::fmt;

/// Lines starting with this character are comments
pub const COMMENT_MARKER: char = '#';

/// One parsed line of the source dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryRecord {
    pub reading: String,
    pub word: String,
    pub pos: String,
    pub comment: String,
}

impl DictionaryRecord {
    /// Parse a raw source line.
    ///
    /// Returns None for blank lines, comments and lines with fewer than
    /// three tab-separated fields. Fields past the fourth are dropped.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            return None;
        }

        let mut fields = line.split('\t');
        let reading = fields.next()?;
        let word = fields.next()?;
        let pos = fields.next()?;
        let comment = fields.next().unwrap_or("");

        Some(DictionaryRecord {
            reading: reading.to_string(),
            word: word.to_string(),
            pos: pos.to_string(),
            comment: comment.to_string(),
        })
    }

    /// Entry for Google Japanese Input, tag kept as-is
    pub fn to_google(&self) -> GoogleEntry {
        GoogleEntry {
            reading: self.reading.clone(),
            word: self.word.clone(),
            pos: self.pos.clone(),
            comment: self.comment.clone(),
        }
    }

    /// Entry for MS-IME, tag remapped through the part-of-speech table
    pub fn to_msime(&self) -> MsimeEntry {
        MsimeEntry {
            reading: self.reading.clone(),
            word: self.word.clone(),
            pos: pos_map::resolve(&self.pos).to_string(),
            comment: self.comment.clone(),
        }
    }
}

/// Tab-separated entry for Google Japanese Input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleEntry {
    pub reading: String,
    pub word: String,
    pub pos: String,
    pub comment: String,
}

impl fmt::Display for GoogleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.reading, self.word, self.pos, self.comment
        )
    }
}

/// Comma-separated entry for MS-IME
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsimeEntry {
    pub reading: String,
    pub word: String,
    pub pos: String,
    pub comment: String,
}

impl fmt::Display for MsimeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.reading, self.word, self.pos, self.comment
        )
    }
}

/// Transform one source line into the pair of IME entries, or None if the
/// line carries no record.
pub fn transform(line: &str) -> Option<(GoogleEntry, MsimeEntry)> {
    let record = DictionaryRecord::parse(line)?;
    Some((record.to_google(), record.to_msime()))
}
