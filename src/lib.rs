//! Word Square Generator
//!
//! Exhaustively enumerates word squares that contain a set of seed words. A word square
//! of width N is an N×N letter grid whose N rows and N columns are all dictionary words.
//!
//! # Quick Start
//!
//! ```rust
//! use wordsquare::index::SquareIndex;
//! use wordsquare::solver::{SeedSet, SquareEnumerator};
//! use wordsquare::wordlists::{Dictionary, WordNormalizer};
//!
//! // Build the pattern index for a tiny dictionary
//! let dictionary = Dictionary::from_raw_lines(["abc", "bca", "cab"], &WordNormalizer::new(3))?;
//! let index = SquareIndex::build(dictionary)?;
//!
//! // Every square containing all three seeds
//! let seeds = SeedSet::parse(["abc", "bca", "cab"], 3)?;
//! let result = SquareEnumerator::new(&index).enumerate(&seeds, |_| {})?;
//! assert!(!result.solutions.is_empty());
//! # Ok::<(), wordsquare::Error>(())
//! ```

// Core domain types
pub mod core;

// Dictionary normalization and loading
pub mod wordlists;

// Pattern catalog and match index
pub mod index;

// Index file formats
pub mod storage;

// Seed placement and square completion
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output and solution files
pub mod output;

pub mod error;
pub mod logging;

pub use error::{Error, Result};
