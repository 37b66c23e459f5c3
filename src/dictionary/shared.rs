//! Load-once dictionary shared by all puzzle components

use super::{Dictionary, DictionaryConfig, DictionaryError};
use log::{debug, info};
use parking_lot::Mutex;
use std::sync::OnceLock;
use std::time::Instant;

/// Where a word list comes from
pub trait WordSource {
    /// Human-readable name for logs and errors
    fn describe(&self) -> String;

    /// Fetch the newline-delimited word list
    ///
    /// # Errors
    /// Returns a `DictionaryError` if the list cannot be read.
    fn fetch(&self) -> Result<String, DictionaryError>;
}

/// A dictionary that is loaded on first use and never changes afterwards
///
/// Concurrent first calls to [`get_or_load`](Self::get_or_load) are coalesced
/// into a single fetch. A failed load leaves the cell empty so it can be
/// retried.
#[derive(Debug)]
pub struct SharedDictionary {
    config: DictionaryConfig,
    loaded: OnceLock<Dictionary>,
    in_flight: Mutex<()>,
}

impl SharedDictionary {
    #[must_use]
    pub fn new(config: DictionaryConfig) -> Self {
        Self {
            config,
            loaded: OnceLock::new(),
            in_flight: Mutex::new(()),
        }
    }

    /// The dictionary, if it has been loaded
    #[must_use]
    pub fn get(&self) -> Option<&Dictionary> {
        self.loaded.get()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    /// Return the loaded dictionary, fetching it from `source` the first time
    ///
    /// Later calls return the same dictionary without touching any source.
    ///
    /// # Errors
    /// Returns the source's error if fetching fails, or
    /// `DictionaryError::EmptyWordList` if no word survives filtering.
    pub fn get_or_load<S>(&self, source: &S) -> Result<&Dictionary, DictionaryError>
    where
        S: WordSource + ?Sized,
    {
        if let Some(dictionary) = self.loaded.get() {
            return Ok(dictionary);
        }

        let _guard = self.in_flight.lock();
        if let Some(dictionary) = self.loaded.get() {
            debug!("Dictionary loaded by a concurrent caller");
            return Ok(dictionary);
        }

        let start = Instant::now();
        let text = source.fetch()?;
        let dictionary = Dictionary::from_text(self.config, &text);
        if dictionary.is_empty() {
            return Err(DictionaryError::EmptyWordList {
                origin: source.describe(),
                min_length: self.config.min_word_length(),
            });
        }

        info!(
            "Loaded {} words from {} in {:.1?}",
            dictionary.len(),
            source.describe(),
            start.elapsed()
        );
        Ok(self.loaded.get_or_init(|| dictionary))
    }
}

impl Default for SharedDictionary {
    fn default() -> Self {
        Self::new(DictionaryConfig::default())
    }
}
