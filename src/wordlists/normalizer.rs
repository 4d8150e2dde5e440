//! Raw wordlist normalization
//!
//! Each raw line is reduced to its ASCII letters, lowercased, and then either kept
//! (exact width), padded with filler characters (slightly short), or dropped.

use crate::core::FILLER;
use std::collections::BTreeSet;

/// Shortest word that is ever padded, regardless of grid width
pub const MIN_PADDED_LEN: usize = 3;

/// Turns raw wordlist lines into fixed-width candidate words
///
/// Padding policy: a sanitized word of length `width - 1` yields two variants (filler
/// prepended, filler appended); one of length `width - 2` yields three (two fillers in
/// front, one on each side, two at the end). Short words below [`MIN_PADDED_LEN`] letters
/// are never padded. For width 5 this pads exactly the 4- and 3-letter words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordNormalizer {
    width: usize,
    pad_short_words: bool,
}

impl WordNormalizer {
    /// Normalizer for `width`, with padding enabled
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self {
            width,
            pad_short_words: true,
        }
    }

    /// Enable or disable filler padding of short words
    #[must_use]
    pub const fn with_padding(mut self, pad_short_words: bool) -> Self {
        self.pad_short_words = pad_short_words;
        self
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn pads_short_words(&self) -> bool {
        self.pad_short_words
    }

    /// Keep ASCII letters only, lowercased
    #[must_use]
    pub fn sanitize(line: &str) -> String {
        line.chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }

    /// All fixed-width variants produced by one raw line (possibly none)
    #[must_use]
    pub fn variants(&self, line: &str) -> Vec<String> {
        let word = Self::sanitize(line);
        let len = word.len();
        let filler = char::from(FILLER).to_string();

        if len == self.width {
            return vec![word];
        }
        if !self.pad_short_words || len < MIN_PADDED_LEN {
            return Vec::new();
        }

        if len + 1 == self.width {
            vec![format!("{filler}{word}"), format!("{word}{filler}")]
        } else if len + 2 == self.width {
            vec![
                format!("{filler}{filler}{word}"),
                format!("{filler}{word}{filler}"),
                format!("{word}{filler}{filler}"),
            ]
        } else {
            Vec::new()
        }
    }

    /// Normalize every line and deduplicate
    ///
    /// The result iterates in ascending byte order, which is the order dictionary ids are
    /// assigned in.
    pub fn normalize_lines<I, S>(&self, lines: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .flat_map(|line| self.variants(line.as_ref()))
            .collect()
    }
}
