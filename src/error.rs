//! Error types for word square generation
//!
//! Every fatal condition (bad seeds, malformed or missing files, mismatched index files)
//! is an [`Error`] returned to the caller. Nothing in the library exits the process.
//! A pattern missing from the catalog is not an error; it simply has no candidates.

use crate::core::{MAX_WIDTH, MIN_WIDTH, WordError};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Seed file holds too few or too many words
    #[error("expected between {min} and {max} seed words, got {count}")]
    SeedCount { count: usize, min: usize, max: usize },

    /// A word or pattern failed validation
    #[error(transparent)]
    Word(#[from] WordError),

    /// Grid width outside the supported range
    #[error("unsupported grid width {0} (supported: {min}..={max})", min = MIN_WIDTH, max = MAX_WIDTH)]
    UnsupportedWidth(usize),

    /// A file's contents do not follow its format
    #[error("{}:{line}: {message}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Dictionary, catalog and match index disagree with each other
    #[error("inconsistent index: {0}")]
    Inconsistent(String),

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn malformed(path: &Path, line: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.to_path_buf(),
            line,
            message: message.into(),
        }
    }

    pub(crate) fn inconsistent(message: impl Into<String>) -> Self {
        Self::Inconsistent(message.into())
    }
}
