//! Recursive file walker and the `.dart` suffix filter

use crate::domain::{Candidate, DART_EXTENSION};
use std::ffi::OsStr;
use std::path::Path;
use walkdir::WalkDir;

/// Lazily walks a directory tree top-down and yields every entry that is not a
/// directory.
///
/// Within one directory the non-directory entries come first, in listing order,
/// followed by each subdirectory (again in listing order), which is walked
/// recursively. The order is whatever the filesystem lists: it is stable for an
/// unmodified tree but is not alphabetical.
///
/// Symlinks are never followed. A link to a directory counts as a directory and
/// is skipped; links to files and dangling links are yielded. A missing root,
/// a root that is not a directory, or an unreadable subdirectory simply yields
/// nothing for that part of the tree.
pub struct FileScanner {
    entries: walkdir::IntoIter,
}

impl FileScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let entries = WalkDir::new(root)
            .min_depth(1)
            .follow_links(false)
            // Stable sort: files keep their listing order and precede subdirectories.
            .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()))
            .into_iter();
        Self { entries }
    }
}

impl Iterator for FileScanner {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!("skipping unreadable entry: {}", err);
                    continue;
                }
            };

            if entry.file_type().is_dir() || entry.path().is_dir() {
                continue;
            }

            return Some(Candidate::from_entry(entry));
        }
    }
}

/// Exact, case-sensitive check for the `.dart` suffix.
///
/// Works on the raw name so that non-Unicode names are still classified.
pub fn has_dart_extension(file_name: &OsStr) -> bool {
    file_name.as_encoded_bytes().ends_with(DART_EXTENSION.as_bytes())
}

/// Walk `root` and keep only `.dart` files.
pub fn dart_candidates<P: AsRef<Path>>(root: P) -> impl Iterator<Item = Candidate> {
    FileScanner::new(root).filter(|candidate| has_dart_extension(&candidate.file_name))
}
