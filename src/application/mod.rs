//! Application layer - Use cases and orchestration

pub mod convert;
pub mod package;

pub use convert::{convert, ConversionSummary};
pub use package::{BuildReport, BuildService};
