//! Rack search command
//!
//! Lists every word a rack can spell.

use crate::core::{Rack, RackError};
use crate::dictionary::Dictionary;
use std::time::{Duration, Instant};

/// Result of searching a rack
pub struct FindResult {
    pub rack: Rack,
    pub words: Vec<String>,
    pub duration: Duration,
}

impl FindResult {
    /// Length of the longest word found, 0 if none
    #[must_use]
    pub fn longest(&self) -> usize {
        self.words.iter().map(String::len).max().unwrap_or(0)
    }
}

/// Find all words that can be spelled from `rack`
///
/// # Errors
///
/// Returns an error if the rack contains characters other than letters and `*`.
pub fn find_words(dictionary: &Dictionary, rack: &str) -> Result<FindResult, RackError> {
    let rack = Rack::parse(rack)?;

    let start = Instant::now();
    let words = dictionary.find_all_words(&rack);

    Ok(FindResult {
        rack,
        words,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::tests::sample_dictionary;

    #[test]
    fn finds_words_for_rack() {
        let result = find_words(&sample_dictionary(), "s t a r").unwrap();
        assert_eq!(result.rack.to_string(), "STAR");
        assert_eq!(result.words, vec!["ARTS", "RATS", "STAR", "TARS"]);
        assert_eq!(result.longest(), 4);
    }

    #[test]
    fn empty_result() {
        let result = find_words(&sample_dictionary(), "zzzz").unwrap();
        assert!(result.words.is_empty());
        assert_eq!(result.longest(), 0);
    }

    #[test]
    fn invalid_rack() {
        assert!(find_words(&sample_dictionary(), "st?r").is_err());
    }
}
