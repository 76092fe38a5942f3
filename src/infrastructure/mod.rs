//! Infrastructure layer - File encodings, archives and configuration

pub mod archive;
pub mod config;
pub mod dict_file;
pub mod output_dir;

pub use archive::{package, ArchiveEntry};
pub use config::{BuildConfig, JobConfig};
pub use output_dir::next_version;
