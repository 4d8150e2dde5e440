//! Core domain types for word squares
//!
//! Words, wildcard patterns, and the mutable grid a search fills in. These types carry
//! no I/O; everything here is pure and cheap to test.

mod grid;
mod pattern;
mod word;

pub use grid::{Grid, Placement};
pub use pattern::Pattern;
pub use word::{Word, WordError};

/// Character used to pad words shorter than the grid width
pub const FILLER: u8 = b'-';

/// Character that matches any letter (or filler) in a pattern
pub const WILDCARD: u8 = b'*';

/// Smallest supported grid width
pub const MIN_WIDTH: usize = 2;

/// Largest supported grid width
///
/// Each word derives `2^width` patterns, so the index grows exponentially with width.
pub const MAX_WIDTH: usize = 10;

/// Whether `ch` may appear in a dictionary word
#[inline]
#[must_use]
pub const fn is_word_byte(ch: u8) -> bool {
    ch.is_ascii_lowercase() || ch == FILLER
}

/// Whether `ch` may appear in a pattern
#[inline]
#[must_use]
pub const fn is_pattern_byte(ch: u8) -> bool {
    is_word_byte(ch) || ch == WILDCARD
}
