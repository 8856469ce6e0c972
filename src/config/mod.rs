//! Configuration loading and merging
//!
//! Precedence is CLI > config file > defaults. The defaults are the historical
//! constants: scan `lib`, write `merged_dart_files.txt`.

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};
