//! Shared helpers

pub mod encoding;

pub use encoding::{normalize_newlines, read_source};
