//! Word list sources
//!
//! Implementations of [`WordSource`] for files on disk and the embedded list.

use super::WORDS;
use crate::dictionary::{DictionaryError, WordSource};
use std::fs;
use std::path::{Path, PathBuf};

/// Word list read from a newline-delimited text file
///
/// # Examples
/// ```no_run
/// use word_puzzle::dictionary::SharedDictionary;
/// use word_puzzle::wordlists::FileSource;
///
/// let shared = SharedDictionary::default();
/// let dictionary = shared.get_or_load(&FileSource::new("data/words.txt")).unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl WordSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String, DictionaryError> {
        fs::read_to_string(&self.path).map_err(|cause| DictionaryError::Read {
            path: self.path.clone(),
            cause,
        })
    }
}

/// The word list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl WordSource for EmbeddedSource {
    fn describe(&self) -> String {
        format!("embedded word list ({} entries)", WORDS.len())
    }

    fn fetch(&self) -> Result<String, DictionaryError> {
        Ok(WORDS.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Dictionary, DictionaryConfig, SharedDictionary};
    use std::env;
    use std::process;

    #[test]
    fn embedded_source_loads() {
        let shared = SharedDictionary::default();
        let dictionary = shared.get_or_load(&EmbeddedSource).unwrap();

        assert!(dictionary.is_valid_word("stare"));
        // Four-letter entries are filtered by the default minimum
        assert!(!dictionary.is_valid_word("star"));
        assert!(dictionary.len() <= WORDS.len());
    }

    #[test]
    fn embedded_text_round_trips_through_loader() {
        let text = EmbeddedSource.fetch().unwrap();
        let dictionary = Dictionary::from_text(DictionaryConfig::new(1), &text);
        assert_eq!(dictionary.len(), WORDS.len());
    }

    #[test]
    fn file_source_reads_words() {
        let path = env::temp_dir().join(format!("word_puzzle_loader_{}.txt", process::id()));
        fs::write(&path, "Star\n\ntears\nrat\n").unwrap();

        let source = FileSource::new(&path);
        let text = source.fetch().unwrap();
        fs::remove_file(&path).unwrap();

        let dictionary = Dictionary::from_text(DictionaryConfig::new(4), &text);
        assert_eq!(dictionary.sorted_words(), vec!["STAR", "TEARS"]);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let source = FileSource::new("definitely/not/a/word/list.txt");
        let err = source.fetch().unwrap_err();
        assert!(matches!(err, DictionaryError::Read { .. }));
        assert!(err.to_string().contains("list.txt"));
    }
}
