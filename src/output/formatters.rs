//! Solution file formatting
//!
//! ```text
//! found <K> wordsquares
//!
//! 1:
//!
//! 0: <row 0>
//! ...
//! <2N-1>: <column N-1>
//!
//!
//! 2:
//! ...
//! ```
//!
//! Each block is headed by its 1-based ordinal and lists every line, rows first. Blocks are
//! separated by two blank lines.

use crate::core::Grid;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write `solutions` in discovery order
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn write_solutions<W: Write>(out: &mut W, solutions: &[Grid]) -> io::Result<()> {
    writeln!(out, "found {} wordsquares", solutions.len())?;
    writeln!(out)?;

    for (i, grid) in solutions.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
            writeln!(out)?;
        }
        writeln!(out, "{}: ", i + 1)?;
        writeln!(out)?;
        write_lines(out, grid)?;
    }

    Ok(())
}

/// Every line of `grid` as `<index>: <word>`
///
/// # Errors
/// Returns any I/O error from the writer.
pub fn write_lines<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    for line in 0..grid.line_count() {
        writeln!(out, "{line}: {}", grid.line_text(line))?;
    }
    Ok(())
}

/// Create (or truncate) `path` and write `solutions` to it
///
/// # Errors
/// Returns `Error::Io` if the file cannot be created or written.
pub fn save_solutions(path: &Path, solutions: &[Grid]) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    write_solutions(&mut out, solutions)
        .and_then(|()| out.flush())
        .map_err(|e| Error::io(path, e))
}

/// Render a solution as an uppercase letter block, one row per line
#[must_use]
pub fn square_block(grid: &Grid) -> String {
    (0..grid.width())
        .map(|row| grid.line_text(row).to_uppercase())
        .collect::<Vec<_>>()
        .join("\n")
}
