//! Word lists for word square search
//!
//! Normalization of raw wordlists and the immutable dictionary built from them.

mod dictionary;
pub mod loader;
mod normalizer;

pub use dictionary::{Dictionary, WordId, check_width};
pub use normalizer::{MIN_PADDED_LEN, WordNormalizer};
