//! Error types for conv_dict

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for conv_dict
#[derive(Debug, Error)]
pub enum ConvDictError {
    #[error("Input file not found: {0}")]
    MissingInput(PathBuf),

    #[error("Input file is not valid UTF-8: {0}")]
    InvalidEncoding(PathBuf),

    #[error("Cannot write output file {path}: {source}")]
    UnwritableOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File to archive not found: {0}")]
    MissingArchiveSource(PathBuf),

    #[error("Cannot list directory {path}: {source}")]
    DirectoryListing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date label: {0}")]
    InvalidDate(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ConvDictError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvDictError::MissingInput(_) | ConvDictError::InvalidEncoding(_) => 2,
            ConvDictError::UnwritableOutput { .. } => 3,
            ConvDictError::MissingArchiveSource(_) | ConvDictError::Archive(_) => 4,
            ConvDictError::DirectoryListing { .. } => 5,
            ConvDictError::Config(_)
            | ConvDictError::InvalidDate(_)
            | ConvDictError::TomlDeserialize(_)
            | ConvDictError::TomlSerialize(_) => 6,
            ConvDictError::Io(_) => 1,
        }
    }
}

/// Result type using ConvDictError
pub type Result<T> = std::result::Result<T, ConvDictError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_nonzero() {
        let errors = vec![
            ConvDictError::MissingInput(PathBuf::from("曲名.tsv")),
            ConvDictError::InvalidEncoding(PathBuf::from("bad.tsv")),
            ConvDictError::MissingArchiveSource(PathBuf::from("gone.txt")),
            ConvDictError::Config("bad".to_string()),
            ConvDictError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom")),
        ];

        for err in errors {
            assert_ne!(err.exit_code(), 0, "{} should fail the run", err);
        }
    }

    #[test]
    fn test_missing_input_message_names_path() {
        let err = ConvDictError::MissingInput(PathBuf::from("人名・固有名詞.tsv"));
        assert_eq!(err.to_string(), "Input file not found: 人名・固有名詞.tsv");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unwritable_output_keeps_source() {
        let err = ConvDictError::UnwritableOutput {
            path: PathBuf::from("out/a.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("out/a.txt"));
        assert!(msg.contains("no such directory"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_directory_listing_exit_code() {
        let err = ConvDictError::DirectoryListing {
            path: PathBuf::from("conv_dict"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.exit_code(), 5);
        assert!(err.to_string().starts_with("Cannot list directory conv_dict"));
    }
}
