//! Build configuration

use crate::domain::version::DEFAULT_ARCHIVE_STEM;
use crate::error::{ConvDictError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the base directory
pub const CONFIG_FILE_NAME: &str = "conv_dict.toml";

/// One source dictionary and the two files produced from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobConfig {
    pub input: PathBuf,
    pub google_output: PathBuf,
    pub microsoft_output: PathBuf,
}

impl JobConfig {
    pub fn new(
        input: impl Into<PathBuf>,
        google_output: impl Into<PathBuf>,
        microsoft_output: impl Into<PathBuf>,
    ) -> Self {
        JobConfig {
            input: input.into(),
            google_output: google_output.into(),
            microsoft_output: microsoft_output.into(),
        }
    }

    /// Same job with every relative path resolved against `base`
    pub fn resolved(&self, base: &Path) -> JobConfig {
        JobConfig {
            input: base.join(&self.input),
            google_output: base.join(&self.google_output),
            microsoft_output: base.join(&self.microsoft_output),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory holding outputs and archives
    pub output_dir: PathBuf,
    /// Archive names are `<stem>_<YYYYMMDD>_v<N>.zip`
    pub archive_stem: String,
    #[serde(rename = "job")]
    pub jobs: Vec<JobConfig>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            output_dir: PathBuf::from("conv_dict"),
            archive_stem: DEFAULT_ARCHIVE_STEM.to_string(),
            jobs: vec![
                JobConfig::new(
                    "曲名.tsv",
                    "conv_dict/tokisen_songs_google.txt",
                    "conv_dict/tokisen_songs_microsoft.txt",
                ),
                JobConfig::new(
                    "人名・固有名詞.tsv",
                    "conv_dict/tokisen_names_google.txt",
                    "conv_dict/tokisen_names_microsoft.txt",
                ),
            ],
        }
    }
}

impl BuildConfig {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConvDictError::Config(format!("Config file not found: {}", path.display()))
            } else {
                ConvDictError::Io(e)
            }
        })?;

        let config: BuildConfig = toml::from_str(&contents).map_err(|e| {
            ConvDictError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load conv_dict.toml from `dir`, or the default layout if there is none
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config as conv_dict.toml in `dir`
    pub fn save_to_dir(&self, dir: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(dir.join(CONFIG_FILE_NAME), contents)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.archive_stem.trim().is_empty() {
            return Err(ConvDictError::Config(
                "archive_stem must not be empty".to_string(),
            ));
        }
        if self.jobs.is_empty() {
            return Err(ConvDictError::Config(
                "At least one [[job]] is required".to_string(),
            ));
        }
        Ok(())
    }
}
