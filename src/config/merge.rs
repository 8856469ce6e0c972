//! CLI overrides on top of file/default settings

use crate::domain::Config;
use std::path::PathBuf;

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub root: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Apply CLI values over `config` (CLI > file > defaults).
pub fn merge_cli_with_config(mut config: Config, overrides: CliOverrides) -> Config {
    if let Some(root) = overrides.root {
        config.root = root;
    }
    if let Some(output) = overrides.output {
        config.output = output;
    }
    config
}
