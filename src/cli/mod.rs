//! Command-line interface for dart-merge
//!
//! Without arguments the tool scans `lib` and writes `merged_dart_files.txt` in
//! the current directory. Diagnostics go to stderr; stdout carries only the
//! completion line.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::merge::Merger;

/// Merge every Dart source file under a directory into one text file
#[derive(Parser)]
#[command(name = "dart-merge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan recursively [default: lib]
    #[arg(short, long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// File the merged blocks are written to [default: merged_dart_files.txt]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to a config file (.toml, .yml or .yaml)
    #[arg(short, long, value_name = "FILE", env = "DART_MERGE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file_config = load_config(cli.config.as_deref())?;
    let config = merge_cli_with_config(
        file_config,
        CliOverrides { root: cli.root, output: cli.output },
    );

    let merger = Merger::from_config(&config);
    let summary = merger
        .run()
        .map_err(|err| {
            tracing::debug!("merge stopped at {}", err.path().display());
            err
        })
        .with_context(|| {
            format!(
                "Failed merging Dart files from {} into {}",
                merger.root().display(),
                merger.output().display()
            )
        })?;

    println!("Merged Dart files saved to {}", summary.output_path.display());
    Ok(())
}

fn init_logging(verbose: bool) {
    // RUST_LOG wins when set; otherwise WARN, and --verbose always enables DEBUG.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    let filter = if verbose { filter.add_directive(Level::DEBUG.into()) } else { filter };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
