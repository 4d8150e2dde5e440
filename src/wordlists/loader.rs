//! Raw wordlist loading
//!
//! Reads an arbitrary newline-delimited wordlist and normalizes it into a dictionary.

use super::{Dictionary, WordNormalizer};
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load and normalize a raw wordlist file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or an error if the normalizer's width
/// is unsupported.
///
/// # Examples
/// ```no_run
/// use wordsquare::wordlists::{WordNormalizer, loader::load_raw_wordlist};
///
/// let dict = load_raw_wordlist("/usr/share/dict/words", &WordNormalizer::new(5)).unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_raw_wordlist<P: AsRef<Path>>(
    path: P,
    normalizer: &WordNormalizer,
) -> Result<Dictionary> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let content = String::from_utf8_lossy(&bytes);

    let dict = Dictionary::from_raw_lines(content.lines(), normalizer)?;
    log::info!(
        "normalized {} into {} words of width {}",
        path.display(),
        dict.len(),
        dict.width()
    );

    Ok(dict)
}
