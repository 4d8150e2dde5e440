//! Pattern → word match index
//!
//! Compressed sparse column layout: the words matching pattern `p` are
//! `rows[offsets[p]..offsets[p + 1]]`, in ascending word id. `offsets` has one entry per
//! pattern plus a trailing total, starts at 0, never decreases, and ends at `rows.len()`.

use super::catalog::{PatternCatalog, PatternId, derive_patterns};
use crate::core::Pattern;
use crate::error::{Error, Result};
use crate::wordlists::{Dictionary, WordId};
use rayon::prelude::*;

/// Sparse relation from pattern ids to the word ids satisfying them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchIndex {
    offsets: Vec<usize>,
    rows: Vec<WordId>,
}

impl MatchIndex {
    /// Build by bucketing each word under every pattern it derives
    ///
    /// A word matches a pattern exactly when revealing the word at the pattern's revealed
    /// positions reproduces the pattern, so each word only needs its own `2^width`
    /// patterns looked up. Words are bucketed in ascending id, which keeps every column
    /// sorted.
    ///
    /// # Errors
    /// Returns an error if a derived pattern is missing from the catalog, meaning the
    /// catalog was not built from this dictionary with these subsets.
    pub fn build(
        catalog: &PatternCatalog,
        dictionary: &Dictionary,
        subsets: &[Vec<usize>],
    ) -> Result<Self> {
        let wildcard = catalog.lookup(&Pattern::wildcard(dictionary.width()));

        let per_word: Vec<Vec<PatternId>> = dictionary
            .words()
            .par_iter()
            .map(|word| {
                derive_patterns(word, subsets)
                    .iter()
                    .map(|pattern| {
                        catalog.lookup(pattern).ok_or_else(|| {
                            Error::inconsistent(format!(
                                "pattern '{pattern}' of word '{word}' missing from catalog"
                            ))
                        })
                    })
                    .chain(wildcard.map(Ok))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<_>>()?;

        let mut counts = vec![0usize; catalog.len()];
        for &pattern_id in per_word.iter().flatten() {
            counts[pattern_id] += 1;
        }

        let mut offsets = Vec::with_capacity(catalog.len() + 1);
        offsets.push(0);
        for count in &counts {
            let last = offsets.last().copied().unwrap_or(0);
            offsets.push(last + count);
        }

        let mut cursor = offsets[..catalog.len()].to_vec();
        let mut rows = vec![0; offsets[catalog.len()]];
        for (word_id, pattern_ids) in per_word.iter().enumerate() {
            for &pattern_id in pattern_ids {
                rows[cursor[pattern_id]] = word_id;
                cursor[pattern_id] += 1;
            }
        }

        log::debug!(
            "match index: {} patterns, {} entries",
            catalog.len(),
            rows.len()
        );

        Ok(Self { offsets, rows })
    }

    /// Build by testing every word against every pattern
    ///
    /// Produces the same arrays as [`MatchIndex::build`] at `O(patterns × words × width)`
    /// cost. Patterns are scanned in parallel; columns are concatenated in id order.
    /// `on_pattern` is called once per pattern scanned, from worker threads.
    pub fn build_by_scan<F>(
        catalog: &PatternCatalog,
        dictionary: &Dictionary,
        on_pattern: F,
    ) -> Self
    where
        F: Fn() + Sync,
    {
        let columns: Vec<Vec<WordId>> = catalog
            .patterns()
            .par_iter()
            .map(|pattern| {
                let column = dictionary
                    .iter()
                    .enumerate()
                    .filter(|(_, word)| pattern.matches(word))
                    .map(|(id, _)| id)
                    .collect();
                on_pattern();
                column
            })
            .collect();

        let mut offsets = Vec::with_capacity(columns.len() + 1);
        let mut rows = Vec::new();
        offsets.push(0);
        for column in columns {
            rows.extend(column);
            offsets.push(rows.len());
        }

        Self { offsets, rows }
    }

    /// Rebuild from raw CSC arrays, checking the layout invariants
    ///
    /// # Errors
    /// Returns an error if `offsets` is empty, does not start at 0, decreases, or does
    /// not end at `rows.len()`, or if a column is not strictly ascending.
    pub fn from_parts(offsets: Vec<usize>, rows: Vec<WordId>) -> Result<Self> {
        let (Some(&first), Some(&last)) = (offsets.first(), offsets.last()) else {
            return Err(Error::inconsistent("offsets must not be empty"));
        };
        if first != 0 || last != rows.len() {
            return Err(Error::inconsistent(format!(
                "offsets must run from 0 to {}, found {first}..{last}",
                rows.len()
            )));
        }

        if let Some(p) = offsets.windows(2).position(|w| w[0] > w[1]) {
            return Err(Error::inconsistent(format!(
                "offsets decrease at pattern {p}"
            )));
        }

        let index = Self { offsets, rows };
        let unsorted = (0..index.num_patterns())
            .find(|&p| index.candidates(p).windows(2).any(|w| w[0] >= w[1]));
        if let Some(p) = unsorted {
            return Err(Error::inconsistent(format!(
                "word ids for pattern {p} are not strictly ascending"
            )));
        }

        Ok(index)
    }

    /// Words matching `pattern_id`, ascending by word id (possibly empty)
    ///
    /// # Panics
    /// Panics if `pattern_id >= num_patterns()`
    #[inline]
    #[must_use]
    pub fn candidates(&self, pattern_id: PatternId) -> &[WordId] {
        &self.rows[self.offsets[pattern_id]..self.offsets[pattern_id + 1]]
    }

    #[must_use]
    pub fn num_patterns(&self) -> usize {
        self.offsets.len() - 1
    }

    #[must_use]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    #[must_use]
    pub fn rows(&self) -> &[WordId] {
        &self.rows
    }

    /// Largest word id referenced, if any
    #[must_use]
    pub fn max_word_id(&self) -> Option<WordId> {
        self.rows.iter().copied().max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::index::position_subsets;

    fn dictionary(texts: &[&str]) -> Dictionary {
        let width = texts[0].len();
        let words = texts.iter().map(|t| Word::new(*t, width).unwrap()).collect();
        Dictionary::new(width, words).unwrap()
    }

    fn build(dict: &Dictionary) -> (PatternCatalog, MatchIndex) {
        let subsets = position_subsets(dict.width());
        let catalog = PatternCatalog::build(dict, &subsets);
        let index = MatchIndex::build(&catalog, dict, &subsets).unwrap();
        (catalog, index)
    }

    fn candidates<'a>(
        catalog: &PatternCatalog,
        index: &'a MatchIndex,
        pattern: &str,
    ) -> &'a [WordId] {
        let id = catalog
            .lookup(&Pattern::new(pattern, pattern.len()).unwrap())
            .unwrap();
        index.candidates(id)
    }

    #[test]
    fn two_letter_index() {
        let dict = dictionary(&["no", "on"]);
        let (catalog, index) = build(&dict);

        assert_eq!(candidates(&catalog, &index, "**"), &[0, 1]);
        assert_eq!(candidates(&catalog, &index, "n*"), &[0]);
        assert_eq!(candidates(&catalog, &index, "*n"), &[1]);
        assert_eq!(candidates(&catalog, &index, "on"), &[1]);
    }

    #[test]
    fn offsets_invariants_hold() {
        let dict = dictionary(&["route", "roast", "ocean", "-ace-", "ace--"]);
        let (catalog, index) = build(&dict);

        let offsets = index.offsets();
        assert_eq!(offsets.len(), catalog.len() + 1);
        assert_eq!(offsets[0], 0);
        assert_eq!(*offsets.last().unwrap(), index.rows().len());
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        // every word appears once per derived pattern plus the wildcard
        assert_eq!(index.rows().len(), dict.len() * 32);
    }

    #[test]
    fn every_derived_pattern_lists_its_word() {
        let dict = dictionary(&["route", "roast", "ocean", "-ace-", "ace--"]);
        let subsets = position_subsets(5);
        let (catalog, index) = build(&dict);

        for (word_id, word) in dict.iter().enumerate() {
            for pattern in derive_patterns(word, &subsets) {
                let pattern_id = catalog.lookup(&pattern).unwrap();
                assert!(index.candidates(pattern_id).contains(&word_id));
            }
        }
    }

    #[test]
    fn candidates_ascend_by_word_id() {
        let dict = dictionary(&["aa", "ab", "ba", "bb"]);
        let (_, index) = build(&dict);
        for p in 0..index.num_patterns() {
            assert!(index.candidates(p).windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn scan_agrees_with_bucket_build() {
        let dict = dictionary(&["route", "roast", "ocean", "-ace-", "ace--", "toast"]);
        let (catalog, index) = build(&dict);
        let scanned = MatchIndex::build_by_scan(&catalog, &dict, || {});
        assert_eq!(index, scanned);
    }

    #[test]
    fn foreign_catalog_rejected() {
        let dict = dictionary(&["no", "on"]);
        let other = dictionary(&["ox", "on"]);
        let subsets = position_subsets(2);
        let catalog = PatternCatalog::build(&other, &subsets);
        assert!(MatchIndex::build(&catalog, &dict, &subsets).is_err());
    }

    #[test]
    fn from_parts_validates_layout() {
        assert!(MatchIndex::from_parts(vec![0, 1, 3], vec![4, 0, 2]).is_ok());
        assert!(MatchIndex::from_parts(vec![], vec![]).is_err());
        assert!(MatchIndex::from_parts(vec![1, 2], vec![0, 1]).is_err());
        assert!(MatchIndex::from_parts(vec![0, 2, 1, 3], vec![0, 1, 2]).is_err());
        assert!(MatchIndex::from_parts(vec![0, 2], vec![0, 1, 2]).is_err());
        assert!(MatchIndex::from_parts(vec![0, 2], vec![1, 0]).is_err());
    }

    #[test]
    fn empty_catalog_has_empty_index() {
        let dict = Dictionary::new(3, Vec::new()).unwrap();
        let subsets = position_subsets(3);
        let catalog = PatternCatalog::build(&dict, &subsets);
        let index = MatchIndex::build(&catalog, &dict, &subsets).unwrap();
        assert_eq!(index.num_patterns(), 0);
        assert!(index.rows().is_empty());
        assert_eq!(index.max_word_id(), None);
    }
}
