//! Block rendering.
//!
//! Every merged file is written as:
//!
//! ```text
//! File Location: <full path>
//! File Name: <filename>
//! File Code:
//! <content>
//! ----------------------------------------
//! ```
//!
//! A newline always separates the content from the dashed line, even when the
//! content already ends with one. Blocks follow each other with nothing in
//! between.

use crate::domain::SEPARATOR_WIDTH;
use std::io::{self, Write};

pub fn write_block<W: Write>(
    out: &mut W,
    location: &str,
    file_name: &str,
    content: &str,
) -> io::Result<()> {
    writeln!(out, "File Location: {location}")?;
    writeln!(out, "File Name: {file_name}")?;
    writeln!(out, "File Code:")?;
    out.write_all(content.as_bytes())?;
    writeln!(out)?;
    writeln!(out, "{:-<width$}", "", width = SEPARATOR_WIDTH)
}
