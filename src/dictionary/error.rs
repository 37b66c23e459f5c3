//! Dictionary loading errors

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a usable word list
///
/// Queries never fail once a dictionary is loaded; this is the only error the
/// engine surfaces.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },

    #[error("word list {origin} has no words of at least {min_length} letters")]
    EmptyWordList { origin: String, min_length: usize },
}
