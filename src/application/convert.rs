//! Convert one source dictionary into Google and MS-IME files

use crate::domain::record::{self, GoogleEntry, MsimeEntry};
use crate::error::Result;
use crate::infrastructure::dict_file;
use std::path::Path;

/// Outcome of converting one source dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionSummary {
    /// Records written to each output
    pub records: usize,
    /// Lines after the header that produced no record
    pub skipped: usize,
}

/// Google and MS-IME entries of one source, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertedEntries {
    pub google: Vec<GoogleEntry>,
    pub msime: Vec<MsimeEntry>,
    pub skipped: usize,
}

/// Transform source text. The first line is a header and is always dropped.
pub fn convert_text(text: &str) -> ConvertedEntries {
    let mut converted = ConvertedEntries::default();

    for line in text.lines().skip(1) {
        match record::transform(line) {
            Some((google, msime)) => {
                converted.google.push(google);
                converted.msime.push(msime);
            }
            None => converted.skipped += 1,
        }
    }

    converted
}

/// Read `input`, write the UTF-8 Google file and the UTF-16 MS-IME file.
/// Existing outputs are overwritten.
pub fn convert(
    input: &Path,
    google_output: &Path,
    msime_output: &Path,
) -> Result<ConversionSummary> {
    let text = dict_file::read_source(input)?;
    let converted = convert_text(&text);

    dict_file::write_utf8(google_output, &dict_file::join_lines(&converted.google))?;
    dict_file::write_utf16le(msime_output, &dict_file::join_lines(&converted.msime))?;

    Ok(ConversionSummary {
        records: converted.google.len(),
        skipped: converted.skipped,
    })
}
