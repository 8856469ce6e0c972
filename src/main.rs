//! dart-merge: collect every Dart source file under a directory into one text file
//!
//! Each file becomes a block carrying its location, its name and its code, so the
//! whole tree can be handed around (or pasted into a prompt) as a single document.

use anyhow::Result;

fn main() -> Result<()> {
    dart_merge::cli::run()
}
