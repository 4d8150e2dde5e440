//! Pattern catalog
//!
//! The catalog holds every distinct pattern derivable from the dictionary and numbers
//! them. Ids are assigned in ascending byte order of the pattern strings; the pattern
//! file is written in that order and the match index is keyed by it, so a catalog built
//! here and one reloaded from disk always agree.

use crate::core::{Pattern, Word};
use crate::error::{Error, Result};
use crate::wordlists::Dictionary;
use rustc_hash::{FxHashMap, FxHashSet};

/// Index of a pattern in the catalog
pub type PatternId = usize;

/// Bijection between patterns and ids
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    width: usize,
    patterns: Vec<Pattern>,
    ids: FxHashMap<Pattern, PatternId>,
}

impl PatternCatalog {
    /// Generate the catalog for `dictionary`
    ///
    /// Every word is revealed at every subset in `subsets`. The all-wildcard pattern is
    /// added whenever the dictionary has a word, since an unconstrained line must still
    /// see every word as a candidate.
    #[must_use]
    pub fn build(dictionary: &Dictionary, subsets: &[Vec<usize>]) -> Self {
        let mut distinct: FxHashSet<Pattern> = dictionary
            .iter()
            .flat_map(|word| derive_patterns(word, subsets))
            .collect();

        if !dictionary.is_empty() {
            distinct.insert(Pattern::wildcard(dictionary.width()));
        }

        let mut patterns: Vec<Pattern> = distinct.into_iter().collect();
        patterns.sort_unstable();

        log::debug!(
            "catalog: {} distinct patterns from {} words",
            patterns.len(),
            dictionary.len()
        );

        Self::from_sorted(dictionary.width(), patterns)
    }

    /// Rebuild a catalog from patterns listed in id order
    ///
    /// # Errors
    /// Returns an error if a pattern has the wrong width or the list is not strictly
    /// ascending (which would mean ids disagree with the builder's).
    pub fn from_patterns(width: usize, patterns: Vec<Pattern>) -> Result<Self> {
        if let Some(bad) = patterns.iter().find(|p| p.len() != width) {
            return Err(Error::inconsistent(format!(
                "pattern '{bad}' has width {}, expected {width}",
                bad.len()
            )));
        }

        if let Some(pair) = patterns.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(Error::inconsistent(format!(
                "patterns out of order: '{}' listed before '{}'",
                pair[0], pair[1]
            )));
        }

        Ok(Self::from_sorted(width, patterns))
    }

    fn from_sorted(width: usize, patterns: Vec<Pattern>) -> Self {
        let ids = patterns
            .iter()
            .enumerate()
            .map(|(id, pattern)| (pattern.clone(), id))
            .collect();

        Self {
            width,
            patterns,
            ids,
        }
    }

    /// Id of `pattern`, or `None` if no dictionary word can satisfy it
    #[inline]
    #[must_use]
    pub fn lookup(&self, pattern: &Pattern) -> Option<PatternId> {
        self.ids.get(pattern).copied()
    }

    /// Pattern with the given id
    ///
    /// # Panics
    /// Panics if `id >= len()`
    #[must_use]
    pub fn pattern(&self, id: PatternId) -> &Pattern {
        &self.patterns[id]
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Patterns in id order
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

impl PartialEq for PatternCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.patterns == other.patterns
    }
}

impl Eq for PatternCatalog {}

/// Every pattern `word` yields for the given subsets, in subset order
#[must_use]
pub fn derive_patterns(word: &Word, subsets: &[Vec<usize>]) -> Vec<Pattern> {
    subsets
        .iter()
        .map(|subset| Pattern::reveal(word, subset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::position_subsets;

    fn dictionary(texts: &[&str]) -> Dictionary {
        let width = texts[0].len();
        let words = texts.iter().map(|t| Word::new(*t, width).unwrap()).collect();
        Dictionary::new(width, words).unwrap()
    }

    fn pattern(text: &str) -> Pattern {
        Pattern::new(text, text.len()).unwrap()
    }

    #[test]
    fn two_letter_catalog() {
        let dict = dictionary(&["no", "on"]);
        let catalog = PatternCatalog::build(&dict, &position_subsets(2));

        let texts: Vec<_> = catalog.patterns().iter().map(Pattern::text).collect();
        assert_eq!(texts, ["**", "*n", "*o", "n*", "no", "o*", "on"]);
    }

    #[test]
    fn ids_follow_sorted_order() {
        let dict = dictionary(&["no", "on"]);
        let catalog = PatternCatalog::build(&dict, &position_subsets(2));

        assert_eq!(catalog.lookup(&pattern("**")), Some(0));
        assert_eq!(catalog.lookup(&pattern("on")), Some(6));
        for (id, p) in catalog.patterns().iter().enumerate() {
            assert_eq!(catalog.lookup(p), Some(id));
            assert_eq!(catalog.pattern(id), p);
        }
    }

    #[test]
    fn lookup_miss_returns_none() {
        let dict = dictionary(&["no", "on"]);
        let catalog = PatternCatalog::build(&dict, &position_subsets(2));
        assert_eq!(catalog.lookup(&pattern("oo")), None);
        assert_eq!(catalog.lookup(&pattern("x*")), None);
    }

    #[test]
    fn build_is_deterministic() {
        let dict = dictionary(&["route", "ocean", "-ace-", "acorn", "roast"]);
        let subsets = position_subsets(5);
        let first = PatternCatalog::build(&dict, &subsets);
        let second = PatternCatalog::build(&dict, &subsets);
        assert_eq!(first, second);
    }

    #[test]
    fn shared_patterns_deduplicated() {
        let dict = dictionary(&["route", "roast"]);
        let catalog = PatternCatalog::build(&dict, &position_subsets(5));
        // 31 each, minus the 3 patterns revealing only positions {0, 1, 0..=1}, plus "*****"
        assert_eq!(catalog.len(), 31 + 31 - 3 + 1);
        assert!(catalog.lookup(&pattern("ro***")).is_some());
    }

    #[test]
    fn empty_dictionary_has_empty_catalog() {
        let dict = Dictionary::new(5, Vec::new()).unwrap();
        let catalog = PatternCatalog::build(&dict, &position_subsets(5));
        assert!(catalog.is_empty());
        assert_eq!(catalog.lookup(&Pattern::wildcard(5)), None);
    }

    #[test]
    fn from_patterns_requires_strict_order() {
        let ok = PatternCatalog::from_patterns(2, vec![pattern("**"), pattern("o*")]);
        assert!(ok.is_ok());

        let unsorted = PatternCatalog::from_patterns(2, vec![pattern("o*"), pattern("**")]);
        assert!(matches!(unsorted, Err(Error::Inconsistent(_))));

        let duplicate = PatternCatalog::from_patterns(2, vec![pattern("o*"), pattern("o*")]);
        assert!(matches!(duplicate, Err(Error::Inconsistent(_))));
    }

    #[test]
    fn from_patterns_rejects_wrong_width() {
        let result = PatternCatalog::from_patterns(2, vec![pattern("***")]);
        assert!(matches!(result, Err(Error::Inconsistent(_))));
    }
}
