//! Exhaustive word square enumeration
//!
//! Two phases share one index:
//!
//! 1. Seed placement tries every consistent arrangement of the seed words on grid lines.
//!    The first seed only goes on rows, which stops a square and its transpose from both
//!    appearing as separate seed squares. Later seeds are unrestricted, so transposed
//!    duplicates can still arise once two or more seeds are placed.
//! 2. Completion fills the remaining lines depth-first. The next line is always the
//!    lowest-index unassigned one; its constraint pattern is looked up in the catalog and
//!    candidates are tried in ascending word id, which fixes the order solutions appear in.

use crate::core::{Grid, Word};
use crate::error::{Error, Result};
use crate::index::SquareIndex;

use super::SeedSet;

/// Counters gathered while completing squares
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Complete squares found
    pub solutions: usize,
    /// Lines assigned during completion
    pub nodes: usize,
    /// Constraints with no pattern in the catalog
    pub pruned: usize,
}

impl SearchStats {
    pub fn merge(&mut self, other: Self) {
        self.solutions += other.solutions;
        self.nodes += other.nodes;
        self.pruned += other.pruned;
    }
}

/// Where an enumeration stands, reported after each seed square is completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Seed squares completed so far
    pub completed: usize,
    pub seed_squares: usize,
    /// Solutions found so far
    pub solutions: usize,
}

/// Everything found for one seed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    /// Number of seed squares the seeds produced
    pub seed_squares: usize,
    /// Completed squares in discovery order
    pub solutions: Vec<Grid>,
    pub stats: SearchStats,
}

/// Square search over a shared, read-only index
pub struct SquareEnumerator<'a> {
    index: &'a SquareIndex,
}

impl<'a> SquareEnumerator<'a> {
    #[must_use]
    pub const fn new(index: &'a SquareIndex) -> Self {
        Self { index }
    }

    /// Run both phases for `seeds`, collecting every solution
    ///
    /// `on_progress` is called once before completion starts and again after every seed
    /// square.
    ///
    /// # Errors
    /// Returns an error if the seed width differs from the index width.
    pub fn enumerate<F>(&self, seeds: &SeedSet, mut on_progress: F) -> Result<Enumeration>
    where
        F: FnMut(Progress),
    {
        let seed_squares = self.seed_squares(seeds.words())?;
        log::info!("generated {} seed squares", seed_squares.len());

        let mut solutions = Vec::new();
        let mut stats = SearchStats::default();
        on_progress(Progress {
            completed: 0,
            seed_squares: seed_squares.len(),
            solutions: 0,
        });
        for (i, square) in seed_squares.iter().enumerate() {
            stats.merge(self.complete(square, |grid| solutions.push(grid.clone())));
            on_progress(Progress {
                completed: i + 1,
                seed_squares: seed_squares.len(),
                solutions: solutions.len(),
            });
        }

        Ok(Enumeration {
            seed_squares: seed_squares.len(),
            solutions,
            stats,
        })
    }

    /// Every consistent placement of `seeds`, each seed on exactly one line
    ///
    /// Accepts any number of seeds; count bounds are the seed set's concern.
    ///
    /// # Errors
    /// Returns `Error::Inconsistent` if a seed's width differs from the index width.
    pub fn seed_squares(&self, seeds: &[Word]) -> Result<Vec<Grid>> {
        let width = self.index.width();
        if let Some(seed) = seeds.iter().find(|seed| seed.len() != width) {
            return Err(Error::inconsistent(format!(
                "seed '{seed}' has width {}, index width is {width}",
                seed.len()
            )));
        }

        let mut squares = Vec::new();
        let mut grid = Grid::new(width);
        place_seeds(&mut grid, seeds, 0, &mut squares);
        Ok(squares)
    }

    /// Fill every unassigned line of `seed`, calling `on_solution` for each square found
    ///
    /// `seed` is left untouched; the search works on a copy.
    pub fn complete<F>(&self, seed: &Grid, mut on_solution: F) -> SearchStats
    where
        F: FnMut(&Grid),
    {
        let mut grid = seed.clone();
        let mut stats = SearchStats::default();
        self.fill(&mut grid, &mut stats, &mut on_solution);
        stats
    }

    fn fill<F>(&self, grid: &mut Grid, stats: &mut SearchStats, on_solution: &mut F)
    where
        F: FnMut(&Grid),
    {
        let Some(line) = grid.next_unassigned() else {
            stats.solutions += 1;
            on_solution(grid);
            return;
        };

        let constraint = grid.constraint_at(line);
        let Some(pattern_id) = self.index.catalog().lookup(&constraint) else {
            stats.pruned += 1;
            return;
        };

        let dictionary = self.index.dictionary();
        for &word_id in self.index.matches().candidates(pattern_id) {
            stats.nodes += 1;
            let mut placed = grid.place(line, dictionary.word(word_id));
            self.fill(&mut placed, stats, on_solution);
        }
    }
}

fn place_seeds(grid: &mut Grid, seeds: &[Word], count: usize, squares: &mut Vec<Grid>) {
    let Some(seed) = seeds.get(count) else {
        squares.push(grid.clone());
        return;
    };

    let lines = if count == 0 {
        grid.width()
    } else {
        grid.line_count()
    };

    for line in 0..lines {
        if grid.is_assigned(line) {
            continue;
        }
        let mut placed = grid.place(line, seed);
        if placed.is_consistent() {
            place_seeds(&mut placed, seeds, count + 1, squares);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{Dictionary, WordNormalizer};

    fn index(texts: &[&str]) -> SquareIndex {
        let width = texts[0].len();
        let normalizer = WordNormalizer::new(width).with_padding(false);
        SquareIndex::build(Dictionary::from_raw_lines(texts, &normalizer).unwrap()).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text, text.len()).unwrap()
    }

    fn lines(grid: &Grid) -> Vec<String> {
        (0..grid.line_count()).map(|l| grid.line_text(l)).collect()
    }

    #[test]
    fn completes_two_letter_square() {
        let index = index(&["on", "no"]);
        let enumerator = SquareEnumerator::new(&index);

        let mut seed = Grid::new(2);
        seed.assign(0, &word("on"));

        let mut found = Vec::new();
        let stats = enumerator.complete(&seed, |grid| found.push(grid.clone()));

        assert_eq!(found.len(), 1);
        assert_eq!(stats.solutions, 1);
        assert_eq!(lines(&found[0]), ["on", "no", "on", "no"]);
        assert!(found[0].is_consistent());
    }

    #[test]
    fn completion_prunes_catalog_misses() {
        let index = index(&["on", "no"]);
        let enumerator = SquareEnumerator::new(&index);

        let mut seed = Grid::new(2);
        seed.assign(0, &word("on"));
        let stats = enumerator.complete(&seed, |_| {});

        // row 1 = "on" leaves column 0 needing "oo"
        assert_eq!(stats.pruned, 1);
    }

    #[test]
    fn completion_leaves_seed_untouched() {
        let index = index(&["on", "no"]);
        let enumerator = SquareEnumerator::new(&index);

        let mut seed = Grid::new(2);
        seed.assign(0, &word("on"));
        let before = seed.clone();
        enumerator.complete(&seed, |_| {});

        assert_eq!(seed, before);
    }

    #[test]
    fn empty_grid_completes_to_all_squares() {
        let index = index(&["on", "no"]);
        let enumerator = SquareEnumerator::new(&index);

        let mut found = Vec::new();
        enumerator.complete(&Grid::new(2), |grid| found.push(lines(grid)));

        assert_eq!(found, [["no", "on", "no", "on"], ["on", "no", "on", "no"]]);
    }

    #[test]
    fn solutions_follow_word_id_order() {
        let index = index(&["ab", "ba", "aa", "bb"]);
        let enumerator = SquareEnumerator::new(&index);

        let mut found = Vec::new();
        enumerator.complete(&Grid::new(2), |grid| found.push(lines(grid)));

        // every 2x2 grid over {a, b} is a square here
        assert_eq!(found.len(), 16);
        let rows: Vec<_> = found.iter().map(|l| (l[0].clone(), l[1].clone())).collect();
        let mut sorted = rows.clone();
        sorted.sort();
        assert_eq!(rows, sorted);
    }

    #[test]
    fn seed_squares_place_each_seed_once() {
        let index = index(&["abc", "bca", "cab"]);
        let enumerator = SquareEnumerator::new(&index);
        let seeds = [word("abc"), word("bca"), word("cab")];

        let squares = enumerator.seed_squares(&seeds).unwrap();
        assert!(!squares.is_empty());
        for square in &squares {
            assert_eq!(square.assigned_count(), 3);
            assert!(square.is_consistent());
            for seed in &seeds {
                let count = (0..6)
                    .filter(|&l| square.is_assigned(l) && square.line(l) == seed.as_bytes())
                    .count();
                assert!(count >= 1);
            }
        }
    }

    #[test]
    fn first_seed_only_on_rows() {
        let index = index(&["abc", "bca", "cab"]);
        let enumerator = SquareEnumerator::new(&index);
        let seeds = [word("abc"), word("bca"), word("cab")];

        for square in enumerator.seed_squares(&seeds).unwrap() {
            let first_on_row = (0..3).any(|l| square.is_assigned(l) && square.line(l) == b"abc");
            assert!(first_on_row);
        }
    }

    #[test]
    fn later_seeds_may_cross_on_columns() {
        let index = index(&["abc", "bca", "cab"]);
        let enumerator = SquareEnumerator::new(&index);
        let seeds = [word("abc"), word("bca"), word("cab")];

        let squares = enumerator.seed_squares(&seeds).unwrap();
        // all seeds on rows: 3 * 2 * 1 = 6; bca on a row and cab crossing both on a
        // column: 3; bca crossing abc on a column, then cab on a row or column: 3 * 2
        assert_eq!(squares.len(), 15);
        let with_column = squares
            .iter()
            .filter(|square| (3..6).any(|l| square.is_assigned(l)))
            .count();
        assert_eq!(with_column, 9);
    }

    #[test]
    fn independent_seeds_place_everywhere() {
        // seeds sharing no letters can only sit on parallel lines
        let index = index(&["aaa", "bbb", "ccc"]);
        let enumerator = SquareEnumerator::new(&index);
        let seeds = [word("aaa"), word("bbb"), word("ccc")];

        let squares = enumerator.seed_squares(&seeds).unwrap();
        // first seed on one of 3 rows, the others on the remaining rows: 3 * 2 * 1
        assert_eq!(squares.len(), 6);
        for square in &squares {
            assert!((0..3).all(|l| square.is_assigned(l)));
        }
    }

    #[test]
    fn conflicting_seeds_yield_nothing() {
        let index = index(&["abc", "xyz", "qrs"]);
        let enumerator = SquareEnumerator::new(&index);
        let seeds = [word("abc"), word("abc"), word("abc"), word("abc")];

        // four copies cannot all fit on three rows without crossing a column
        assert!(enumerator.seed_squares(&seeds).unwrap().is_empty());
    }

    #[test]
    fn seed_width_mismatch_rejected() {
        let index = index(&["on", "no"]);
        let enumerator = SquareEnumerator::new(&index);
        let result = enumerator.seed_squares(&[word("one")]);
        assert!(matches!(result, Err(Error::Inconsistent(_))));
    }

    #[test]
    fn enumerate_counts_seed_squares_and_solutions() {
        let index = index(&["abc", "bca", "cab", "acb", "bac", "cba"]);
        let enumerator = SquareEnumerator::new(&index);
        let seeds = SeedSet::new(vec![word("abc"), word("bca"), word("cab")]).unwrap();

        let mut reports = Vec::new();
        let result = enumerator.enumerate(&seeds, |p| reports.push(p)).unwrap();
        assert!(result.seed_squares > 0);
        assert_eq!(reports.len(), result.seed_squares + 1);
        assert_eq!(reports[0].completed, 0);
        let last = reports[reports.len() - 1];
        assert_eq!(last.completed, result.seed_squares);
        assert_eq!(last.solutions, result.solutions.len());
        assert_eq!(result.solutions.len(), result.stats.solutions);
        for square in &result.solutions {
            assert!(square.is_complete());
            assert!(square.is_consistent());
        }
    }
}
