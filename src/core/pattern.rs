//! Wildcard patterns over fixed-length words
//!
//! A pattern has the same width as the words it describes. Each position is either a
//! revealed character (a letter or the filler) or the wildcard, which matches anything.
//!
//! Patterns order bytewise (`'*' < '-' < 'a'..'z'`). Pattern ids in the catalog follow
//! this ordering, so it must never depend on container iteration order.

use super::{WILDCARD, Word, WordError, is_pattern_byte};
use std::fmt;

/// A partially revealed word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    text: String,
}

impl Pattern {
    /// Parse a pattern of the given width
    ///
    /// # Errors
    /// Returns `WordError` if the length differs from `width` or a character other than
    /// `a-z`, the filler, or the wildcard is present.
    ///
    /// # Examples
    /// ```
    /// use wordsquare::core::{Pattern, Word};
    ///
    /// let pattern = Pattern::new("ro*t*", 5).unwrap();
    /// assert!(pattern.matches(&Word::new("route", 5).unwrap()));
    /// assert!(!pattern.matches(&Word::new("roast", 5).unwrap()));
    /// ```
    pub fn new(text: impl Into<String>, width: usize) -> Result<Self, WordError> {
        let text = text.into().to_lowercase();

        WordError::check_chars(&text, is_pattern_byte)?;
        WordError::check_length(&text, width)?;

        Ok(Self { text })
    }

    /// The pattern with every position hidden
    #[must_use]
    pub fn wildcard(width: usize) -> Self {
        Self {
            text: char::from(WILDCARD).to_string().repeat(width),
        }
    }

    /// Reveal `word` at `positions`, hiding every other position
    ///
    /// # Panics
    /// Panics if a position is out of range for the word.
    #[must_use]
    pub fn reveal(word: &Word, positions: &[usize]) -> Self {
        let mut bytes = vec![WILDCARD; word.len()];
        for &position in positions {
            bytes[position] = word.char_at(position);
        }
        Self::from_bytes(&bytes)
    }

    /// Build from bytes already known to be pattern characters
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        debug_assert!(bytes.iter().all(|&b| is_pattern_byte(b)));
        Self {
            text: bytes.iter().map(|&b| char::from(b)).collect(),
        }
    }

    /// Get the pattern as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of revealed (non-wildcard) positions
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.as_bytes().iter().filter(|&&b| b != WILDCARD).count()
    }

    /// Whether `word` satisfies every revealed position
    ///
    /// The wildcard matches any character, the filler included. A revealed filler only
    /// matches a filler.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.len() == word.len()
            && self
                .as_bytes()
                .iter()
                .zip(word.as_bytes())
                .all(|(&p, &w)| p == WILDCARD || p == w)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
