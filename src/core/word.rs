//! Fixed-length word representation
//!
//! A Word is a lowercase string of exactly `width` characters drawn from `a-z` and the
//! filler character.

use super::is_word_byte;
use std::fmt;
use thiserror::Error;

/// A dictionary word occupying one full grid line
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words and patterns
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("'{text}' must be exactly {expected} characters, got {actual}")]
    InvalidLength {
        text: String,
        expected: usize,
        actual: usize,
    },

    #[error("'{text}' contains invalid character {ch:?}")]
    InvalidCharacter { text: String, ch: char },
}

impl WordError {
    pub(crate) fn check_length(text: &str, expected: usize) -> Result<(), Self> {
        let actual = text.chars().count();
        if actual == expected {
            Ok(())
        } else {
            Err(Self::InvalidLength {
                text: text.to_string(),
                expected,
                actual,
            })
        }
    }

    pub(crate) fn check_chars(text: &str, allowed: impl Fn(u8) -> bool) -> Result<(), Self> {
        let invalid = text
            .chars()
            .find(|&c| !c.is_ascii() || !allowed(c as u8));

        match invalid {
            Some(ch) => Err(Self::InvalidCharacter {
                text: text.to_string(),
                ch,
            }),
            None => Ok(()),
        }
    }
}

impl Word {
    /// Create a new Word of the given width
    ///
    /// Uppercase letters are folded to lowercase; anything outside `a-z` and the filler
    /// character is rejected.
    ///
    /// # Errors
    /// Returns `WordError` if the length differs from `width` or an invalid character is
    /// present.
    ///
    /// # Examples
    /// ```
    /// use wordsquare::core::Word;
    ///
    /// let word = Word::new("Route", 5).unwrap();
    /// assert_eq!(word.text(), "route");
    ///
    /// assert!(Word::new("-ace-", 5).is_ok());
    /// assert!(Word::new("rout", 5).is_err());
    /// assert!(Word::new("r0ute", 5).is_err());
    /// ```
    pub fn new(text: impl Into<String>, width: usize) -> Result<Self, WordError> {
        let text = text.into().to_lowercase();

        WordError::check_chars(&text, is_word_byte)?;
        WordError::check_length(&text, width)?;

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of characters (the grid width this word fits)
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

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.as_bytes()[position]
    }

    /// Whether the word carries filler characters
    #[must_use]
    pub fn is_padded(&self) -> bool {
        self.as_bytes().contains(&super::FILLER)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
