//! Zip packaging of produced dictionary files

use crate::error::{ConvDictError, Result};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A file to put into the archive and the name it gets inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub source: PathBuf,
    pub name: String,
}

impl ArchiveEntry {
    pub fn new(source: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        ArchiveEntry {
            source: source.into(),
            name: name.into(),
        }
    }
}

/// Create `archive_path` and write every entry into it, in order.
///
/// All sources are checked before the archive is created, so a missing
/// source never leaves a half-written archive behind.
pub fn package(archive_path: &Path, entries: &[ArchiveEntry]) -> Result<()> {
    if let Some(missing) = entries.iter().find(|e| !e.source.is_file()) {
        return Err(ConvDictError::MissingArchiveSource(missing.source.clone()));
    }

    let file = File::create(archive_path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        let mut source = File::open(&entry.source).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ConvDictError::MissingArchiveSource(entry.source.clone())
            } else {
                ConvDictError::Io(e)
            }
        })?;
        zip.start_file(entry.name.as_str(), options)?;
        io::copy(&mut source, &mut zip)?;
    }

    zip.finish()?;
    Ok(())
}
