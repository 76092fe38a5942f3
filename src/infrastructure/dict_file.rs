//! Dictionary file reading and writing
//!
//! Sources and Google outputs are UTF-8. MS-IME imports UTF-16 text, so its
//! output is written little-endian with a byte-order mark.

use crate::error::{ConvDictError, Result};
use encoding_rs::UTF_8;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Byte-order mark of UTF-16LE
const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// Separator between output records
const LINE_SEPARATOR: &str = "\n";

/// Read a UTF-8 source dictionary into a string.
///
/// A leading BOM is stripped. Undecodable bytes fail the read.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ConvDictError::MissingInput(path.to_path_buf())
        } else {
            ConvDictError::Io(e)
        }
    })?;

    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&bytes);
    UTF_8
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| ConvDictError::InvalidEncoding(path.to_path_buf()))
}

/// Join records with newlines, without a trailing newline.
pub fn join_lines<T: ToString>(records: &[T]) -> String {
    records
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}

/// Encode text as UTF-16LE, BOM first.
pub fn encode_utf16le(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(UTF16LE_BOM.len() + text.len() * 2);
    bytes.extend_from_slice(&UTF16LE_BOM);
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

/// Write UTF-8 text, replacing any existing file.
pub fn write_utf8(path: &Path, text: &str) -> Result<()> {
    write_bytes(path, text.as_bytes())
}

/// Write UTF-16LE text with BOM, replacing any existing file.
pub fn write_utf16le(path: &Path, text: &str) -> Result<()> {
    write_bytes(path, &encode_utf16le(text))
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| ConvDictError::UnwritableOutput {
        path: path.to_path_buf(),
        source,
    })
}
