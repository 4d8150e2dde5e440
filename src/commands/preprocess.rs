//! Preprocess command
//!
//! Normalizes a raw wordlist, builds the pattern index and writes the three index files.

use super::progress;
use crate::error::{Error, Result};
use crate::index::{MatchIndex, SquareIndex};
use crate::storage::{IndexPaths, save_index};
use crate::wordlists::{WordNormalizer, check_width, loader::load_raw_wordlist};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for building an index
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    pub wordlist: PathBuf,
    pub paths: IndexPaths,
    pub width: usize,
    pub pad_short_words: bool,
    /// Rebuild the match index by scanning every pattern and compare
    pub verify: bool,
    pub quiet: bool,
}

impl PreprocessConfig {
    #[must_use]
    pub const fn new(wordlist: PathBuf, paths: IndexPaths, width: usize) -> Self {
        Self {
            wordlist,
            paths,
            width,
            pad_short_words: true,
            verify: false,
            quiet: false,
        }
    }
}

/// What preprocessing produced
#[derive(Debug, Clone)]
pub struct PreprocessReport {
    pub width: usize,
    pub words: usize,
    pub padded_words: usize,
    pub patterns: usize,
    pub matches: usize,
    /// Whether the scan builder was run and agreed
    pub verified: bool,
    pub build_time: Duration,
    pub total_time: Duration,
}

/// Build and save the index described by `config`
///
/// # Errors
/// Returns an error if the width is unsupported, the wordlist cannot be read, an index
/// file cannot be written, or verification finds the two match builders disagreeing.
pub fn run_preprocess(config: &PreprocessConfig) -> Result<PreprocessReport> {
    let total_start = Instant::now();
    check_width(config.width)?;

    let normalizer = WordNormalizer::new(config.width).with_padding(config.pad_short_words);
    let dictionary = load_raw_wordlist(&config.wordlist, &normalizer)?;
    let padded_words = dictionary.iter().filter(|w| w.is_padded()).count();

    let build_start = Instant::now();
    let index = SquareIndex::build(dictionary)?;
    let build_time = build_start.elapsed();

    if config.verify {
        verify_matches(&index, config.quiet)?;
    }

    save_index(&index, &config.paths)?;
    log::info!(
        "wrote {}, {}, {}",
        config.paths.dictionary.display(),
        config.paths.patterns.display(),
        config.paths.matches.display()
    );

    Ok(PreprocessReport {
        width: index.width(),
        words: index.dictionary().len(),
        padded_words,
        patterns: index.catalog().len(),
        matches: index.matches().rows().len(),
        verified: config.verify,
        build_time,
        total_time: total_start.elapsed(),
    })
}

fn verify_matches(index: &SquareIndex, quiet: bool) -> Result<()> {
    let pb = progress::bar(index.catalog().len(), quiet);
    pb.set_message("scanning patterns");

    let scanned = MatchIndex::build_by_scan(index.catalog(), index.dictionary(), || pb.inc(1));
    pb.finish_and_clear();

    if &scanned == index.matches() {
        log::info!("match index verified against full scan");
        Ok(())
    } else {
        Err(Error::inconsistent(
            "bucketed match index differs from full pattern scan",
        ))
    }
}
