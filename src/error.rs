//! Errors that abort a merge.
//!
//! None of these are recovered from: the first one stops the run and the output
//! keeps only the blocks written before it.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// A discovered file could not be opened or read.
    #[error("failed to read {}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A discovered file is not valid UTF-8.
    #[error("{} is not valid UTF-8", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// The output file could not be created.
    #[error("failed to create output file {}", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a block (or the final flush) failed.
    #[error("failed to write to output file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A path or filename cannot be represented in the UTF-8 output.
    #[error("path {} is not valid Unicode", path.display())]
    Encode { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, MergeError>;

impl MergeError {
    /// Path the error is about: the offending source file, or the output file.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Access { path, .. }
            | Self::Decode { path, .. }
            | Self::OutputOpen { path, .. }
            | Self::Write { path, .. }
            | Self::Encode { path } => path,
        }
    }
}
