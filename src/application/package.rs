//! Full build: convert every source dictionary, then archive the outputs

use crate::application::convert::{convert, ConversionSummary};
use crate::domain::version;
use crate::error::{ConvDictError, Result};
use crate::infrastructure::archive::{self, ArchiveEntry};
use crate::infrastructure::{output_dir, BuildConfig, JobConfig};
use std::path::{Path, PathBuf};

/// Result of converting one job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    pub input: PathBuf,
    pub summary: ConversionSummary,
}

/// Result of a whole build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub jobs: Vec<JobReport>,
    pub archive_path: PathBuf,
    pub version: String,
}

/// Archive entries for the outputs of `jobs`, named after their file names.
pub fn archive_entries(jobs: &[JobConfig]) -> Result<Vec<ArchiveEntry>> {
    let mut entries = Vec::with_capacity(jobs.len() * 2);
    for job in jobs {
        for output in [&job.google_output, &job.microsoft_output] {
            let name = output
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| {
                    ConvDictError::Config(format!(
                        "Invalid output file name: {}",
                        output.display()
                    ))
                })?;
            entries.push(ArchiveEntry::new(output.clone(), name));
        }
    }
    Ok(entries)
}

/// Build service that runs every configured job relative to a base directory
pub struct BuildService {
    base: PathBuf,
    config: BuildConfig,
}

impl BuildService {
    pub fn new(base: impl Into<PathBuf>, config: BuildConfig) -> Self {
        BuildService {
            base: base.into(),
            config,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Convert all jobs, then package their outputs as
    /// `<output_dir>/<stem>_<date_label>_v<N>.zip`.
    ///
    /// Stops at the first failure; outputs written before it are left in place.
    pub fn execute(&self, date_label: &str) -> Result<BuildReport> {
        let jobs: Vec<JobConfig> = self
            .config
            .jobs
            .iter()
            .map(|job| job.resolved(&self.base))
            .collect();

        let mut reports = Vec::with_capacity(jobs.len());
        for job in &jobs {
            let summary = convert(&job.input, &job.google_output, &job.microsoft_output)?;
            reports.push(JobReport {
                input: job.input.clone(),
                summary,
            });
        }

        let out_dir = self.base.join(&self.config.output_dir);
        let version =
            output_dir::next_version_with_stem(&out_dir, &self.config.archive_stem, date_label)?;
        let archive_name =
            version::archive_file_name(&self.config.archive_stem, date_label, &version);
        let archive_path = out_dir.join(archive_name);

        archive::package(&archive_path, &archive_entries(&jobs)?)?;

        Ok(BuildReport {
            jobs: reports,
            archive_path,
            version,
        })
    }
}
