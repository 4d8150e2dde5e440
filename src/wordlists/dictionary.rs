//! The fixed-width word collection
//!
//! Word ids are positions in the dictionary. Once built the dictionary never changes,
//! so ids stay valid for the match index and every search branch.

use super::WordNormalizer;
use crate::core::{MAX_WIDTH, MIN_WIDTH, Word};
use crate::error::{Error, Result};
use rustc_hash::FxHashSet;

/// Index of a word in the dictionary
pub type WordId = usize;

/// Ordered, duplicate-free collection of words of one width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    width: usize,
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from words in id order
    ///
    /// # Errors
    /// Returns an error if the width is unsupported, a word has a different width, or a
    /// word appears twice.
    pub fn new(width: usize, words: Vec<Word>) -> Result<Self> {
        check_width(width)?;

        let mut seen = FxHashSet::default();
        for word in &words {
            if word.len() != width {
                return Err(Error::inconsistent(format!(
                    "word '{word}' has width {}, dictionary width is {width}",
                    word.len()
                )));
            }
            if !seen.insert(word.text()) {
                return Err(Error::inconsistent(format!(
                    "word '{word}' appears more than once"
                )));
            }
        }

        Ok(Self { width, words })
    }

    /// Normalize raw wordlist lines into a dictionary
    ///
    /// Ids follow ascending byte order of the normalized words, independent of input
    /// order.
    ///
    /// # Errors
    /// Returns an error if the normalizer's width is unsupported.
    pub fn from_raw_lines<I, S>(lines: I, normalizer: &WordNormalizer) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let width = normalizer.width();
        check_width(width)?;

        let words = normalizer
            .normalize_lines(lines)
            .into_iter()
            .map(|text| Word::new(text, width))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { width, words })
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word with the given id
    ///
    /// # Panics
    /// Panics if `id >= len()`
    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id]
    }

    #[must_use]
    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Reject widths outside the supported range
///
/// # Errors
/// Returns `Error::UnsupportedWidth` for widths outside `MIN_WIDTH..=MAX_WIDTH`.
pub fn check_width(width: usize) -> Result<()> {
    if (MIN_WIDTH..=MAX_WIDTH).contains(&width) {
        Ok(())
    } else {
        Err(Error::UnsupportedWidth(width))
    }
}
