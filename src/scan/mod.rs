//! Directory walking and candidate selection

pub mod scanner;

pub use scanner::{dart_candidates, has_dart_extension, FileScanner};
