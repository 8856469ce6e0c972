//! Library side of `dart-merge`.
//!
//! The pipeline is walk → filter → read → write, driven by [`merge::Merger`].

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod merge;
pub mod render;
pub mod scan;
pub mod utils;

pub use domain::{Candidate, Config, MergeSummary};
pub use error::MergeError;
pub use merge::Merger;
