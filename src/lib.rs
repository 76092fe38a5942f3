//! conv_dict - IME user dictionary converter
//!
//! Converts a tab-separated custom dictionary into a Google Japanese Input
//! file and an MS-IME file, remapping part-of-speech tags between the two,
//! and packages the results into a dated, versioned zip archive.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ConvDictError;
