//! Pattern index over a dictionary
//!
//! Preprocessing turns a dictionary into a catalog of every wildcard pattern its words
//! can produce and a sparse index from each pattern to the words matching it. Both are
//! immutable once built and are shared read-only by every search branch.

mod catalog;
mod combinations;
mod matches;

pub use catalog::{PatternCatalog, PatternId, derive_patterns};
pub use combinations::position_subsets;
pub use matches::MatchIndex;

use crate::core::Pattern;
use crate::error::{Error, Result};
use crate::wordlists::{Dictionary, WordId};

/// Dictionary, catalog and match index for one grid width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareIndex {
    dictionary: Dictionary,
    catalog: PatternCatalog,
    matches: MatchIndex,
}

impl SquareIndex {
    /// Build the catalog and match index for `dictionary`
    ///
    /// # Errors
    /// Propagates match index construction errors (which indicate a bug rather than bad
    /// input, since the catalog is built from the same dictionary).
    pub fn build(dictionary: Dictionary) -> Result<Self> {
        let subsets = position_subsets(dictionary.width());
        let catalog = PatternCatalog::build(&dictionary, &subsets);
        let matches = MatchIndex::build(&catalog, &dictionary, &subsets)?;

        log::info!(
            "built index: {} words, {} patterns, {} matches",
            dictionary.len(),
            catalog.len(),
            matches.rows().len()
        );

        Ok(Self {
            dictionary,
            catalog,
            matches,
        })
    }

    /// Assemble an index from separately loaded parts
    ///
    /// # Errors
    /// Returns `Error::Inconsistent` if the widths differ, the match index does not have
    /// one column per catalog pattern, or it references a word id past the dictionary.
    pub fn from_parts(
        dictionary: Dictionary,
        catalog: PatternCatalog,
        matches: MatchIndex,
    ) -> Result<Self> {
        if catalog.width() != dictionary.width() {
            return Err(Error::inconsistent(format!(
                "dictionary width {} but pattern width {}",
                dictionary.width(),
                catalog.width()
            )));
        }

        if matches.num_patterns() != catalog.len() {
            return Err(Error::inconsistent(format!(
                "match index has {} pattern columns but catalog has {} patterns",
                matches.num_patterns(),
                catalog.len()
            )));
        }

        if let Some(max) = matches.max_word_id()
            && max >= dictionary.len()
        {
            return Err(Error::inconsistent(format!(
                "match index references word {max} but dictionary has {} words",
                dictionary.len()
            )));
        }

        Ok(Self {
            dictionary,
            catalog,
            matches,
        })
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.dictionary.width()
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn matches(&self) -> &MatchIndex {
        &self.matches
    }

    /// Word ids satisfying `pattern`, ascending; empty when the catalog has no such pattern
    #[must_use]
    pub fn candidates(&self, pattern: &Pattern) -> &[WordId] {
        match self.catalog.lookup(pattern) {
            Some(id) => self.matches.candidates(id),
            None => &[],
        }
    }
}
