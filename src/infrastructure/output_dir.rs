//! Output directory inspection for archive versioning

use crate::domain::version;
use crate::error::{ConvDictError, Result};
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Names of the entries directly inside `dir` (not recursive).
pub fn entry_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| ConvDictError::DirectoryListing {
            path: dir.to_path_buf(),
            source: e
                .into_io_error()
                .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "directory walk failed")),
        })?;
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

/// Next version label for archives of `date_label` in `dir`.
///
/// Counts earlier archives of the same day and returns `v<count + 1>`.
/// Listing and archive creation are not atomic, so concurrent runs against
/// one directory can pick the same label.
pub fn next_version_with_stem(dir: &Path, stem: &str, date_label: &str) -> Result<String> {
    let existing = entry_names(dir)?
        .iter()
        .filter(|name| version::is_archive_for_date(name, stem, date_label))
        .count();
    Ok(version::version_label(existing + 1))
}

/// [`next_version_with_stem`] for the default archive stem.
pub fn next_version(dir: &Path, date_label: &str) -> Result<String> {
    next_version_with_stem(dir, version::DEFAULT_ARCHIVE_STEM, date_label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_directory_starts_at_v1() {
        let temp = TempDir::new().unwrap();
        assert_eq!(next_version(temp.path(), "20250117").unwrap(), "v1");
    }

    #[test]
    fn test_existing_archive_bumps_version() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("dict_20250117_v1.zip"), "").unwrap();

        assert_eq!(next_version(temp.path(), "20250117").unwrap(), "v2");
    }

    #[test]
    fn test_produced_archives_are_counted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("tokisen_dict_20250117_v1.zip"), "").unwrap();
        fs::write(temp.path().join("tokisen_dict_20250117_v2.zip"), "").unwrap();

        assert_eq!(next_version(temp.path(), "20250117").unwrap(), "v3");
    }

    #[test]
    fn test_other_dates_are_ignored() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("dict_20250116_v1.zip"), "").unwrap();
        fs::write(temp.path().join("tokisen_dict_20250118_v4.zip"), "").unwrap();
        fs::write(temp.path().join("tokisen_songs_google.txt"), "").unwrap();

        assert_eq!(next_version(temp.path(), "20250117").unwrap(), "v1");
    }

    #[test]
    fn test_listing_is_not_recursive() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("old");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("dict_20250117_v1.zip"), "").unwrap();

        assert_eq!(next_version(temp.path(), "20250117").unwrap(), "v1");
        assert_eq!(entry_names(temp.path()).unwrap(), vec!["old"]);
    }

    #[test]
    fn test_custom_stem() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("songs_20250117_v1.zip"), "").unwrap();

        assert_eq!(
            next_version_with_stem(temp.path(), "songs", "20250117").unwrap(),
            "v2"
        );
        assert_eq!(next_version(temp.path(), "20250117").unwrap(), "v1");
    }

    #[test]
    fn test_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let result = next_version(&temp.path().join("missing"), "20250117");

        match result.unwrap_err() {
            ConvDictError::DirectoryListing { path, .. } => assert!(path.ends_with("missing")),
            other => panic!("Expected DirectoryListing error, got {:?}", other),
        }
    }
}
