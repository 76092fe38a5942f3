//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "conv_dict")]
#[command(
    about = "Convert a custom dictionary for Google Japanese Input and MS-IME",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Base directory that sources, outputs and conv_dict.toml are relative to
    #[arg(short = 'C', long = "dir", default_value = ".")]
    pub dir: PathBuf,

    /// Config file to use instead of <DIR>/conv_dict.toml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Date label for the archive name (YYYYMMDD, default: today)
    #[arg(long, value_name = "YYYYMMDD")]
    pub date: Option<String>,

    /// Only print the archive path
    #[arg(short, long)]
    pub quiet: bool,
}
