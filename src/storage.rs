//! Index file formats
//!
//! All three preprocessed files are newline-delimited text:
//!
//! - dictionary: a count line, then that many words
//! - patterns: a count line, then that many patterns in id (ascending) order
//! - matches: a count line for `offsets`, the offsets, a count line for `rows`, the rows
//!
//! Readers validate counts, widths and ordering, and report the offending line.

use crate::core::{Pattern, Word};
use crate::error::{Error, Result};
use crate::index::{MatchIndex, PatternCatalog, SquareIndex};
use crate::wordlists::{Dictionary, check_width};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Locations of the three preprocessed files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPaths {
    pub dictionary: PathBuf,
    pub patterns: PathBuf,
    pub matches: PathBuf,
}

impl IndexPaths {
    #[must_use]
    pub fn new(
        dictionary: impl Into<PathBuf>,
        patterns: impl Into<PathBuf>,
        matches: impl Into<PathBuf>,
    ) -> Self {
        Self {
            dictionary: dictionary.into(),
            patterns: patterns.into(),
            matches: matches.into(),
        }
    }
}

/// Write all three files for `index`
///
/// # Errors
/// Returns `Error::Io` if any file cannot be written.
pub fn save_index(index: &SquareIndex, paths: &IndexPaths) -> Result<()> {
    write_dictionary(&paths.dictionary, index.dictionary())?;
    write_patterns(&paths.patterns, index.catalog())?;
    write_matches(&paths.matches, index.matches())?;
    Ok(())
}

/// Read all three files and cross-check them
///
/// # Errors
/// Returns an error if a file is missing or malformed, or the files disagree.
pub fn load_index(paths: &IndexPaths, width: usize) -> Result<SquareIndex> {
    check_width(width)?;

    let dictionary = read_dictionary(&paths.dictionary, width)?;
    log::info!("loaded {} words from {}", dictionary.len(), paths.dictionary.display());

    let catalog = read_patterns(&paths.patterns, width)?;
    log::info!("loaded {} patterns from {}", catalog.len(), paths.patterns.display());

    let matches = read_matches(&paths.matches)?;
    log::info!(
        "loaded {} matches from {}",
        matches.rows().len(),
        paths.matches.display()
    );

    SquareIndex::from_parts(dictionary, catalog, matches)
}

/// # Errors
/// Returns `Error::Io` if the file cannot be written.
pub fn write_dictionary(path: &Path, dictionary: &Dictionary) -> Result<()> {
    write_counted(path, dictionary.iter())
}

/// # Errors
/// Returns `Error::Io` if the file cannot be written.
pub fn write_patterns(path: &Path, catalog: &PatternCatalog) -> Result<()> {
    write_counted(path, catalog.patterns().iter())
}

/// # Errors
/// Returns `Error::Io` if the file cannot be written.
pub fn write_matches(path: &Path, matches: &MatchIndex) -> Result<()> {
    write_with(path, |out| {
        write_section(out, matches.offsets().iter())?;
        write_section(out, matches.rows().iter())
    })
}

/// Read a dictionary file of words of length `width`
///
/// # Errors
/// Returns an error if the file is missing, a count is wrong, a word is invalid, or a word
/// repeats.
pub fn read_dictionary(path: &Path, width: usize) -> Result<Dictionary> {
    let content = read_file(path)?;
    let mut lines = Lines::new(path, &content);

    let words = lines.section(|text| Word::new(text, width).map_err(|e| e.to_string()))?;
    lines.finish()?;

    Dictionary::new(width, words)
}

/// Read a pattern file of patterns of length `width`
///
/// # Errors
/// Returns an error if the file is missing, a count is wrong, a pattern is invalid, or the
/// patterns are not strictly ascending.
pub fn read_patterns(path: &Path, width: usize) -> Result<PatternCatalog> {
    let content = read_file(path)?;
    let mut lines = Lines::new(path, &content);

    let patterns = lines.section(|text| Pattern::new(text, width).map_err(|e| e.to_string()))?;
    lines.finish()?;

    PatternCatalog::from_patterns(width, patterns)
}

/// Read a match index file
///
/// # Errors
/// Returns an error if the file is missing, a count is wrong, a value is not an unsigned
/// integer, or the arrays break the CSC layout rules.
pub fn read_matches(path: &Path) -> Result<MatchIndex> {
    let content = read_file(path)?;
    let mut lines = Lines::new(path, &content);

    let offsets = lines.section(parse_number)?;
    let rows = lines.section(parse_number)?;
    lines.finish()?;

    MatchIndex::from_parts(offsets, rows)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

fn parse_number<T: FromStr>(text: &str) -> std::result::Result<T, String> {
    text.trim()
        .parse()
        .map_err(|_| format!("expected an unsigned integer, got '{text}'"))
}

fn write_with<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    body(&mut out)
        .and_then(|()| out.flush())
        .map_err(|e| Error::io(path, e))
}

fn write_counted<I>(path: &Path, items: I) -> Result<()>
where
    I: ExactSizeIterator,
    I::Item: std::fmt::Display,
{
    write_with(path, |out| write_section(out, items))
}

fn write_section<W, I>(out: &mut W, items: I) -> std::io::Result<()>
where
    W: Write,
    I: ExactSizeIterator,
    I::Item: std::fmt::Display,
{
    writeln!(out, "{}", items.len())?;
    for item in items {
        writeln!(out, "{item}")?;
    }
    Ok(())
}

/// Most entries reserved up front from a count line
const PREALLOCATE_LIMIT: usize = 1 << 16;

/// Line cursor that knows where it is for error messages
struct Lines<'a> {
    path: &'a Path,
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last_line: usize,
}

impl<'a> Lines<'a> {
    fn new(path: &'a Path, content: &'a str) -> Self {
        Self {
            path,
            inner: content.lines().enumerate(),
            last_line: 0,
        }
    }

    fn next_line(&mut self, expected: &str) -> Result<(usize, &'a str)> {
        match self.inner.next() {
            Some((index, text)) => {
                self.last_line = index + 1;
                Ok((index + 1, text.trim_end_matches('\r')))
            }
            None => Err(Error::malformed(
                self.path,
                self.last_line + 1,
                format!("unexpected end of file, expected {expected}"),
            )),
        }
    }

    /// A count line followed by that many items
    fn section<T, F>(&mut self, parse: F) -> Result<Vec<T>>
    where
        F: Fn(&str) -> std::result::Result<T, String>,
    {
        let (line, text) = self.next_line("a count")?;
        let count: usize = parse_number(text).map_err(|msg| Error::malformed(self.path, line, msg))?;

        // the count is untrusted until the entries are actually present
        let mut items = Vec::with_capacity(count.min(PREALLOCATE_LIMIT));
        for _ in 0..count {
            let (line, text) = self.next_line("another entry")?;
            items.push(parse(text).map_err(|msg| Error::malformed(self.path, line, msg))?);
        }
        Ok(items)
    }

    /// Only blank lines may follow the last section
    fn finish(&mut self) -> Result<()> {
        for (index, text) in self.inner.by_ref() {
            if !text.trim().is_empty() {
                return Err(Error::malformed(
                    self.path,
                    index + 1,
                    "unexpected content after the declared entries",
                ));
            }
        }
        Ok(())
    }
}
