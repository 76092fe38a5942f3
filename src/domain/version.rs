//! Dated, versioned archive names

use crate::error::{ConvDictError, Result};
use chrono::{Local, NaiveDate};

/// Archive stem used when none is configured
pub const DEFAULT_ARCHIVE_STEM: &str = "tokisen_dict";

/// Extension of produced archives
pub const ARCHIVE_EXTENSION: &str = ".zip";

const DATE_LABEL_FORMAT: &str = "%Y%m%d";

/// Today's date label in local time (YYYYMMDD)
pub fn today_label() -> String {
    Local::now().format(DATE_LABEL_FORMAT).to_string()
}

/// Validate a user supplied YYYYMMDD label and return it normalized.
pub fn parse_date_label(label: &str) -> Result<String> {
    let label = label.trim();
    if label.len() != 8 {
        return Err(ConvDictError::InvalidDate(label.to_string()));
    }
    NaiveDate::parse_from_str(label, DATE_LABEL_FORMAT)
        .map(|date| date.format(DATE_LABEL_FORMAT).to_string())
        .map_err(|_| ConvDictError::InvalidDate(label.to_string()))
}

/// Version label for the n-th archive of a day (1-based)
pub fn version_label(n: usize) -> String {
    format!("v{}", n)
}

/// `<stem>_<date>_<version>.zip`
pub fn archive_file_name(stem: &str, date_label: &str, version: &str) -> String {
    format!("{}_{}_{}{}", stem, date_label, version, ARCHIVE_EXTENSION)
}

/// Whether a directory entry name counts as an earlier archive of `date_label`.
///
/// Both the bare `dict_<date>_` prefix and the stem-qualified
/// `<stem>_<date>_` prefix are accepted.
pub fn is_archive_for_date(name: &str, stem: &str, date_label: &str) -> bool {
    if !name.ends_with(ARCHIVE_EXTENSION) {
        return false;
    }
    let bare = format!("dict_{}_", date_label);
    let qualified = format!("{}_{}_", stem, date_label);
    name.starts_with(&bare) || name.starts_with(&qualified)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_file_name() {
        assert_eq!(
            archive_file_name(DEFAULT_ARCHIVE_STEM, "20250117", "v3"),
            "tokisen_dict_20250117_v3.zip"
        );
    }

    #[test]
    fn test_version_label() {
        assert_eq!(version_label(1), "v1");
        assert_eq!(version_label(12), "v12");
    }

    #[test]
    fn test_matches_both_prefixes() {
        let stem = DEFAULT_ARCHIVE_STEM;
        assert!(is_archive_for_date("dict_20250117_v1.zip", stem, "20250117"));
        assert!(is_archive_for_date(
            "tokisen_dict_20250117_v2.zip",
            stem,
            "20250117"
        ));
    }

    #[test]
    fn test_other_dates_and_extensions_do_not_match() {
        let stem = DEFAULT_ARCHIVE_STEM;
        assert!(!is_archive_for_date(
            "tokisen_dict_20250116_v1.zip",
            stem,
            "20250117"
        ));
        assert!(!is_archive_for_date(
            "tokisen_dict_20250117_v1.tar",
            stem,
            "20250117"
        ));
        assert!(!is_archive_for_date("dict_20250117.zip", stem, "20250117"));
        assert!(!is_archive_for_date(
            "tokisen_songs_google.txt",
            stem,
            "20250117"
        ));
    }

    #[test]
    fn test_parse_date_label() {
        assert_eq!(parse_date_label("20250117").unwrap(), "20250117");
        assert_eq!(parse_date_label(" 20240229 ").unwrap(), "20240229");
    }

    #[test]
    fn test_parse_date_label_rejects_invalid() {
        for bad in ["2025-01-17", "20250230", "2025011", "abcdefgh", ""] {
            match parse_date_label(bad) {
                Err(ConvDictError::InvalidDate(_)) => {}
                other => panic!("Expected InvalidDate for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_today_label_is_parseable() {
        let label = today_label();
        assert_eq!(label.len(), 8);
        assert_eq!(parse_date_label(&label).unwrap(), label);
    }
}
