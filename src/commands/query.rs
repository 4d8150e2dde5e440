//! Query command
//!
//! Looks a single pattern up in a saved index.

use crate::core::{Pattern, Word};
use crate::error::Result;
use crate::storage::{IndexPaths, load_index};

/// Configuration for a pattern lookup
#[derive(Debug, Clone)]
pub struct QueryConfig {
    pub paths: IndexPaths,
    pub width: usize,
    pub pattern: String,
}

/// Result of a pattern lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub pattern: Pattern,
    /// Whether the catalog knows the pattern at all
    pub in_catalog: bool,
    /// Matching words, ascending by id
    pub words: Vec<Word>,
}

/// Load the index and list every word matching the configured pattern
///
/// A pattern missing from the catalog is not an error; it simply has no matches.
///
/// # Errors
/// Returns an error for an invalid pattern or an unreadable or inconsistent index.
pub fn run_query(config: &QueryConfig) -> Result<QueryResult> {
    let pattern = Pattern::new(config.pattern.as_str(), config.width)?;
    let index = load_index(&config.paths, config.width)?;

    let in_catalog = index.catalog().lookup(&pattern).is_some();
    let words = index
        .candidates(&pattern)
        .iter()
        .map(|&id| index.dictionary().word(id).clone())
        .collect();

    Ok(QueryResult {
        pattern,
        in_catalog,
        words,
    })
}
