//! Seed words
//!
//! A seed set is the handful of literal words every generated square must contain.

use crate::core::Word;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Fewest seed words a run accepts
pub const MIN_SEEDS: usize = 3;

/// Most seed words a run accepts
pub const MAX_SEEDS: usize = 10;

/// Validated seed words, in the order they are placed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSet {
    words: Vec<Word>,
}

impl SeedSet {
    /// Wrap `words`, enforcing the seed count bounds
    ///
    /// # Errors
    /// Returns `Error::SeedCount` unless `MIN_SEEDS <= words.len() <= MAX_SEEDS`.
    pub fn new(words: Vec<Word>) -> Result<Self> {
        if (MIN_SEEDS..=MAX_SEEDS).contains(&words.len()) {
            Ok(Self { words })
        } else {
            Err(Error::SeedCount {
                count: words.len(),
                min: MIN_SEEDS,
                max: MAX_SEEDS,
            })
        }
    }

    /// Parse seed lines of width `width`
    ///
    /// Blank lines are skipped. Letters are lowercased; the filler character marks
    /// positions a shorter seed leaves empty.
    ///
    /// # Errors
    /// Returns an error for a seed of the wrong length or with an invalid character, or
    /// if the number of seeds is out of bounds.
    pub fn parse<'a, I>(lines: I, width: usize) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words = lines
            .into_iter()
            .map(|line| line.trim_end_matches(['\r', '\n']))
            .filter(|line| !line.trim().is_empty())
            .map(|line| Word::new(line, width))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Self::new(words)
    }

    /// Load a seed file, one word per line
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be read, otherwise as [`SeedSet::parse`].
    pub fn load<P: AsRef<Path>>(path: P, width: usize) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let seeds = Self::parse(content.lines(), width)?;
        log::info!("loaded {} seed words from {}", seeds.len(), path.display());
        Ok(seeds)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
