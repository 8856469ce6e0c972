//! Core types shared by the scanner, the renderer and the driver.

use serde::Deserialize;
use std::ffi::OsString;
use std::path::PathBuf;

/// Directory scanned when nothing else is configured.
pub const DEFAULT_ROOT_DIR: &str = "lib";

/// Output file written when nothing else is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "merged_dart_files.txt";

/// Case-sensitive filename suffix selecting candidate files.
pub const DART_EXTENSION: &str = ".dart";

/// Number of `-` characters in the line closing every block.
pub const SEPARATOR_WIDTH: usize = 40;

/// A file discovered by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Root joined with the relative components, as yielded by the walk.
    pub path: PathBuf,
    /// Base filename of `path`.
    pub file_name: OsString,
}

impl Candidate {
    pub fn from_entry(entry: walkdir::DirEntry) -> Self {
        let file_name = entry.file_name().to_os_string();
        Self { path: entry.into_path(), file_name }
    }
}

/// Outcome of a completed merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub output_path: PathBuf,
    /// Non-directory entries seen during the walk, matching or not.
    pub files_scanned: usize,
    /// Blocks written to the output.
    pub files_merged: usize,
}

impl MergeSummary {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path, ..Self::default() }
    }
}

/// Resolved settings for one run.
///
/// Both fields default to the historical constants, so a run without flags or a
/// config file scans `lib` and writes `merged_dart_files.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub root: PathBuf,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self { root: PathBuf::from(DEFAULT_ROOT_DIR), output: PathBuf::from(DEFAULT_OUTPUT_FILE) }
    }
}
