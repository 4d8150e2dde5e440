//! Solve command
//!
//! Loads the index and seeds, enumerates every square containing the seeds and writes the
//! solution file.

use super::progress;
use crate::core::Grid;
use crate::error::Result;
use crate::output::save_solutions;
use crate::solver::{Enumeration, SearchStats, SeedSet, SquareEnumerator};
use crate::storage::{IndexPaths, load_index};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for a solving run
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub paths: IndexPaths,
    pub seeds: PathBuf,
    pub output: PathBuf,
    pub width: usize,
    pub quiet: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(paths: IndexPaths, seeds: PathBuf, output: PathBuf, width: usize) -> Self {
        Self {
            paths,
            seeds,
            output,
            width,
            quiet: false,
        }
    }
}

/// Result of a solving run
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub seed_squares: usize,
    /// Completed squares in discovery order
    pub solutions: Vec<Grid>,
    pub stats: SearchStats,
    pub output: PathBuf,
    pub load_time: Duration,
    pub search_time: Duration,
}

impl SolveReport {
    /// Seed squares plus completed squares
    #[must_use]
    pub fn total_grids(&self) -> usize {
        self.seed_squares + self.solutions.len()
    }
}

/// Run the search described by `config`
///
/// Seeds are validated before the index is loaded, and the output file is only written
/// once the search has finished.
///
/// # Errors
/// Returns an error for a bad seed file, an unreadable or inconsistent index, or a
/// failure writing the output file.
pub fn run_solve(config: &SolveConfig) -> Result<SolveReport> {
    let load_start = Instant::now();
    let seeds = SeedSet::load(&config.seeds, config.width)?;
    let index = load_index(&config.paths, config.width)?;
    let load_time = load_start.elapsed();

    let search_start = Instant::now();
    let pb = progress::bar(0, config.quiet);
    let enumeration = SquareEnumerator::new(&index).enumerate(&seeds, |state| {
        pb.set_length(state.seed_squares as u64);
        pb.set_position(state.completed as u64);
        pb.set_message(format!("{} found", state.solutions));
    })?;
    pb.finish_and_clear();
    let search_time = search_start.elapsed();

    let Enumeration {
        seed_squares,
        solutions,
        stats,
    } = enumeration;
    log::debug!(
        "search visited {} nodes, pruned {} branches",
        stats.nodes,
        stats.pruned
    );

    save_solutions(&config.output, &solutions)?;

    Ok(SolveReport {
        seed_squares,
        solutions,
        stats,
        output: config.output.clone(),
        load_time,
        search_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::index::SquareIndex;
    use crate::storage::save_index;
    use crate::wordlists::{Dictionary, WordNormalizer};
    use std::fs;
    use tempfile::TempDir;

    fn setup(dir: &TempDir, words: &[&str], seeds: &str) -> SolveConfig {
        let width = words[0].len();
        let normalizer = WordNormalizer::new(width).with_padding(false);
        let dictionary = Dictionary::from_raw_lines(words, &normalizer).unwrap();
        let index = SquareIndex::build(dictionary).unwrap();

        let paths = IndexPaths::new(
            dir.path().join("dict.txt"),
            dir.path().join("patterns.txt"),
            dir.path().join("matches.txt"),
        );
        save_index(&index, &paths).unwrap();

        let seed_path = dir.path().join("seeds.txt");
        fs::write(&seed_path, seeds).unwrap();

        let mut config = SolveConfig::new(paths, seed_path, dir.path().join("out.txt"), width);
        config.quiet = true;
        config
    }

    #[test]
    fn finds_latin_squares() {
        let dir = TempDir::new().unwrap();
        let words = ["abc", "bca", "cab", "acb", "bac", "cba"];
        let config = setup(&dir, &words, "abc\nbca\ncab\n");

        let report = run_solve(&config).unwrap();
        assert!(report.seed_squares > 0);
        // the seeds as rows force the same three words down the columns
        assert!(!report.solutions.is_empty());
        assert_eq!(report.solutions.len(), report.stats.solutions);
        assert_eq!(
            report.total_grids() - report.seed_squares,
            report.solutions.len()
        );

        let text = fs::read_to_string(&config.output).unwrap();
        let header = format!("found {} wordsquares", report.solutions.len());
        assert!(text.starts_with(&header));
    }

    #[test]
    fn no_solutions_still_writes_output() {
        let dir = TempDir::new().unwrap();
        // no dictionary word shares a letter with the seeds
        let config = setup(&dir, &["xxx", "yyy", "zzz"], "abc\nbca\ncab\n");

        let report = run_solve(&config).unwrap();
        assert!(report.seed_squares > 0);
        assert!(report.solutions.is_empty());
        assert_eq!(
            fs::read_to_string(&config.output).unwrap(),
            "found 0 wordsquares\n\n"
        );
    }

    #[test]
    fn bad_seed_count_fails_before_output() {
        let dir = TempDir::new().unwrap();
        let config = setup(&dir, &["abc", "bca", "cab"], "abc\nbca\n");

        assert!(matches!(
            run_solve(&config),
            Err(Error::SeedCount { count: 2, .. })
        ));
        assert!(!config.output.exists());
    }

    #[test]
    fn wrong_seed_length_fails() {
        let dir = TempDir::new().unwrap();
        let config = setup(&dir, &["abc", "bca", "cab"], "abc\nbcad\ncab\n");

        assert!(matches!(run_solve(&config), Err(Error::Word(_))));
        assert!(!config.output.exists());
    }

    #[test]
    fn missing_index_fails() {
        let dir = TempDir::new().unwrap();
        let mut config = setup(&dir, &["abc", "bca", "cab"], "abc\nbca\ncab\n");
        config.paths.matches = dir.path().join("absent.txt");

        assert!(matches!(run_solve(&config), Err(Error::Io { .. })));
        assert!(!config.output.exists());
    }
}
