use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub const SONGS_SOURCE: &str = "曲名.tsv";
pub const NAMES_SOURCE: &str = "人名・固有名詞.tsv";

pub fn conv_dict_cmd() -> Command {
    Command::cargo_bin("conv_dict").unwrap()
}

/// Create the default layout: both sources and the conv_dict output directory.
#[allow(dead_code)]
pub fn setup_default_layout(root: &Path, songs: &str, names: &str) {
    fs::create_dir_all(root.join("conv_dict")).unwrap();
    fs::write(root.join(SONGS_SOURCE), songs).unwrap();
    fs::write(root.join(NAMES_SOURCE), names).unwrap();
}
