//! The merge driver: walk, filter, read, write.

use crate::domain::{Candidate, Config, MergeSummary};
use crate::error::{MergeError, Result};
use crate::render::write_block;
use crate::scan::{has_dart_extension, FileScanner};
use crate::utils::read_source;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Merges every `.dart` file under `root` into the file at `output`.
#[derive(Debug, Clone)]
pub struct Merger {
    root: PathBuf,
    output: PathBuf,
}

impl Merger {
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), output: output.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.root.clone(), config.output.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Run the merge.
    ///
    /// The output is truncated before the walk starts and written one block per
    /// candidate, in traversal order. The first error aborts the run; blocks
    /// written before it stay in the output.
    pub fn run(&self) -> Result<MergeSummary> {
        let file = File::create(&self.output)
            .map_err(|source| MergeError::OutputOpen { path: self.output.clone(), source })?;
        let mut out = BufWriter::new(file);
        let mut summary = MergeSummary::new(self.output.clone());

        tracing::debug!("scanning {} for Dart files", self.root.display());

        for candidate in FileScanner::new(&self.root) {
            summary.files_scanned += 1;
            if !has_dart_extension(&candidate.file_name) {
                continue;
            }

            self.merge_one(&mut out, &candidate)?;
            summary.files_merged += 1;
            tracing::debug!("merged {}", candidate.path.display());
        }

        out.flush().map_err(|source| self.write_error(source))?;

        tracing::debug!(
            "wrote {} of {} scanned files to {}",
            summary.files_merged,
            summary.files_scanned,
            self.output.display()
        );
        Ok(summary)
    }

    fn merge_one<W: Write>(&self, out: &mut W, candidate: &Candidate) -> Result<()> {
        let content = read_source(&candidate.path)?;

        let location = candidate
            .path
            .to_str()
            .ok_or_else(|| MergeError::Encode { path: candidate.path.clone() })?;
        let file_name = candidate
            .file_name
            .to_str()
            .ok_or_else(|| MergeError::Encode { path: candidate.path.clone() })?;

        write_block(out, location, file_name, &content).map_err(|source| self.write_error(source))
    }

    fn write_error(&self, source: std::io::Error) -> MergeError {
        MergeError::Write { path: self.output.clone(), source }
    }
}
