//! Dictionary engine
//!
//! A trie plus a word set, built once from a word list and read-only afterwards.
//! All queries take `&self`, so a loaded [`Dictionary`] can be shared freely
//! between threads.

mod error;
mod matching;
mod search;
mod shared;
mod trie;

pub use error::DictionaryError;
pub use matching::{Formation, PatternMatch, WildcardUse, can_form_word};
pub use shared::{SharedDictionary, WordSource};

use crate::core::{is_alphabetic, normalize};
use log::debug;
use rustc_hash::FxHashSet;
pub(crate) use trie::TrieNode;

/// Minimum word length for the rack-validation dictionary
pub const RACK_MIN_LENGTH: usize = 5;

/// Minimum word length used for grid and rack discovery
pub const GRID_MIN_LENGTH: usize = 4;

/// Load-time dictionary configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryConfig {
    min_word_length: usize,
}

impl DictionaryConfig {
    /// Create a configuration accepting words of at least `min_word_length` letters
    ///
    /// A minimum of zero is raised to one; the empty word is never stored.
    #[must_use]
    pub fn new(min_word_length: usize) -> Self {
        Self {
            min_word_length: min_word_length.max(1),
        }
    }

    #[inline]
    #[must_use]
    pub const fn min_word_length(&self) -> usize {
        self.min_word_length
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self::new(RACK_MIN_LENGTH)
    }
}

/// Word list with membership, prefix and search queries
///
/// # Examples
/// ```
/// use word_puzzle::dictionary::{Dictionary, DictionaryConfig};
///
/// let dictionary = Dictionary::from_text(DictionaryConfig::new(4), "star\nrats\ncat\n");
///
/// assert!(dictionary.is_valid_word("Star"));
/// assert!(dictionary.has_prefix("ra"));
/// assert!(!dictionary.is_valid_word("cat")); // shorter than the minimum
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    root: TrieNode,
    words: FxHashSet<String>,
    config: DictionaryConfig,
}

impl Dictionary {
    /// Create an empty dictionary
    #[must_use]
    pub fn new(config: DictionaryConfig) -> Self {
        Self {
            root: TrieNode::default(),
            words: FxHashSet::default(),
            config,
        }
    }

    /// Build a dictionary from individual words
    #[must_use]
    pub fn from_words<I, S>(config: DictionaryConfig, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new(config);
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Build a dictionary from newline-delimited text
    #[must_use]
    pub fn from_text(config: DictionaryConfig, text: &str) -> Self {
        let mut dictionary = Self::new(config);
        dictionary.load_text(text);
        dictionary
    }

    /// Add every acceptable line of `text`
    ///
    /// Lines are trimmed and uppercased. Lines shorter than the configured
    /// minimum (including blank ones) and lines with characters outside A-Z
    /// are skipped. Words already present are ignored, so loading the same
    /// text twice leaves the dictionary unchanged.
    ///
    /// Returns the number of new words.
    pub fn load_text(&mut self, text: &str) -> usize {
        let added = text.lines().filter(|line| self.insert(line)).count();
        debug!(
            "Loaded {added} new words ({} total, minimum length {})",
            self.words.len(),
            self.config.min_word_length
        );
        added
    }

    /// Insert one word into both the trie and the word set
    fn insert(&mut self, raw: &str) -> bool {
        let word = normalize(raw);
        if word.len() < self.config.min_word_length || !is_alphabetic(&word) {
            return false;
        }
        if !self.root.insert(word.as_bytes()) {
            return false;
        }
        self.words.insert(word)
    }

    /// Check whether `word` is in the dictionary (case-insensitive)
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(&normalize(word))
    }

    /// Check whether any dictionary word starts with `prefix` (case-insensitive)
    ///
    /// The prefix need not be a word itself. The empty prefix always matches.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.root.walk(normalize(prefix).as_bytes()).is_some()
    }

    /// Number of words in the dictionary
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn min_word_length(&self) -> usize {
        self.config.min_word_length
    }

    /// All words in ascending order
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    #[inline]
    pub(crate) const fn root(&self) -> &TrieNode {
        &self.root
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Sample word list shared by the dictionary, grid and puzzle tests
    pub(crate) const SAMPLE_WORDS: &[&str] = &[
        "STAR", "STARS", "STARE", "STARED", "TARS", "RATS", "ARTS", "DEAR", "DEARS", "DARE",
        "DARES", "DATE", "DATES", "READ", "READS", "TRADE", "TRADES", "TREAD", "TREADS", "RATE",
        "RATES", "TEAR", "TEARS", "SEAT", "EATS", "TEST", "CAT", "PLAY", "PLAYS", "PLAYER",
        "LEAP", "PEAL", "PALE", "WORD", "WORDS", "SWORD",
    ];

    pub(crate) fn sample_dictionary() -> Dictionary {
        Dictionary::from_words(DictionaryConfig::new(GRID_MIN_LENGTH), SAMPLE_WORDS)
    }

    #[test]
    fn valid_words() {
        let dictionary = sample_dictionary();
        assert!(dictionary.is_valid_word("STAR"));
        assert!(dictionary.is_valid_word("STARED"));
        assert!(dictionary.is_valid_word("TRADE"));
    }

    #[test]
    fn invalid_words() {
        let dictionary = sample_dictionary();
        assert!(!dictionary.is_valid_word("ZZZZZ"));
        assert!(!dictionary.is_valid_word("STARX"));
        assert!(!dictionary.is_valid_word(""));
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let dictionary = sample_dictionary();
        assert!(dictionary.is_valid_word("star"));
        assert!(dictionary.is_valid_word("Star"));
        assert_eq!(dictionary.has_prefix("sta"), dictionary.has_prefix("STA"));
    }

    #[test]
    fn short_words_are_rejected() {
        let dictionary = sample_dictionary();
        assert!(!dictionary.is_valid_word("CAT"));
        assert!(!dictionary.has_prefix("C"));
    }

    #[test]
    fn rack_minimum_drops_four_letter_words() {
        let dictionary = Dictionary::from_words(DictionaryConfig::default(), SAMPLE_WORDS);
        assert!(!dictionary.is_valid_word("STAR"));
        assert!(dictionary.is_valid_word("STARE"));
        assert!(dictionary.sorted_words().iter().all(|w| w.len() >= RACK_MIN_LENGTH));
    }

    #[test]
    fn prefixes() {
        let dictionary = sample_dictionary();
        assert!(dictionary.has_prefix("STA"));
        assert!(dictionary.has_prefix("STAR"));
        assert!(dictionary.has_prefix("STARE"));
        assert!(dictionary.has_prefix(""));
        assert!(!dictionary.has_prefix("ZZZ"));
        assert!(!dictionary.has_prefix("STARX"));
    }

    #[test]
    fn every_prefix_of_every_word_is_a_prefix() {
        let dictionary = sample_dictionary();
        for word in dictionary.sorted_words() {
            assert!(dictionary.is_valid_word(word));
            for end in 1..=word.len() {
                assert!(dictionary.has_prefix(&word[..end]), "{word}: {}", &word[..end]);
            }
        }
    }

    #[test]
    fn trie_and_word_set_agree() {
        let dictionary = sample_dictionary();
        for word in dictionary.sorted_words() {
            let node = dictionary.root().walk(word.as_bytes()).unwrap();
            assert!(node.is_terminal(), "{word} not terminal in trie");
        }
    }

    #[test]
    fn load_text_skips_blank_and_non_alphabetic_lines() {
        let text = "star\n\n   \nst4r\nCAN'T\n  tears  \r\n";
        let dictionary = Dictionary::from_text(DictionaryConfig::new(4), text);
        assert_eq!(dictionary.sorted_words(), vec!["STAR", "TEARS"]);
    }

    #[test]
    fn loading_twice_is_idempotent() {
        let text = SAMPLE_WORDS.join("\n");
        let mut dictionary = Dictionary::new(DictionaryConfig::new(GRID_MIN_LENGTH));

        let first = dictionary.load_text(&text);
        let words_after_first: Vec<String> = dictionary
            .sorted_words()
            .into_iter()
            .map(str::to_string)
            .collect();

        let second = dictionary.load_text(&text);
        assert_eq!(first, SAMPLE_WORDS.len() - 1); // CAT is too short
        assert_eq!(second, 0);
        assert_eq!(dictionary.sorted_words(), words_after_first);
    }

    #[test]
    fn duplicate_words_in_source() {
        let dictionary = Dictionary::from_text(DictionaryConfig::new(4), "star\nSTAR\nStar\n");
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn zero_minimum_is_raised() {
        let config = DictionaryConfig::new(0);
        assert_eq!(config.min_word_length(), 1);
        let dictionary = Dictionary::from_text(config, "\na\n");
        assert_eq!(dictionary.sorted_words(), vec!["A"]);
    }
}
