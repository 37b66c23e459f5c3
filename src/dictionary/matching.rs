//! Feasibility checks and wildcard patterns

use super::Dictionary;
use crate::core::{Rack, WILDCARD, normalize};
use log::debug;

/// A wildcard tile standing in for one letter of a formed word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WildcardUse {
    /// Zero-based index into the word
    pub position: usize,
    pub letter: char,
}

/// Successful result of [`can_form_word`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formation {
    wildcards: Vec<WildcardUse>,
}

impl Formation {
    /// Every wildcard substitution, in word order
    #[must_use]
    pub fn wildcards(&self) -> &[WildcardUse] {
        &self.wildcards
    }

    /// The first wildcard substitution, if any
    #[must_use]
    pub fn first_wildcard(&self) -> Option<WildcardUse> {
        self.wildcards.first().copied()
    }

    #[must_use]
    pub fn uses_wildcard(&self) -> bool {
        !self.wildcards.is_empty()
    }
}

/// Check whether `word` can be spelled from the rack's tiles
///
/// Letters are consumed left to right. Each position takes a matching letter
/// tile if one is left, otherwise a wildcard tile. Returns `None` as soon as a
/// position can be satisfied by neither. The word is not checked against any
/// dictionary.
///
/// # Examples
/// ```
/// use word_puzzle::core::Rack;
/// use word_puzzle::dictionary::{WildcardUse, can_form_word};
///
/// let rack = Rack::parse("STA*").unwrap();
/// let formation = can_form_word(&rack, "star").unwrap();
/// assert_eq!(formation.first_wildcard(), Some(WildcardUse { position: 3, letter: 'R' }));
///
/// assert!(can_form_word(&Rack::parse("STA").unwrap(), "STAR").is_none());
/// ```
#[must_use]
pub fn can_form_word(rack: &Rack, word: &str) -> Option<Formation> {
    let mut letters = rack.letter_counts();
    let mut wildcards_left = rack.wildcard_count();
    let mut formation = Formation::default();

    for (position, letter) in normalize(word).bytes().enumerate() {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        let count = &mut letters[usize::from(letter - b'A')];
        if *count > 0 {
            *count -= 1;
        } else if wildcards_left > 0 {
            wildcards_left -= 1;
            formation.wildcards.push(WildcardUse {
                position,
                letter: char::from(letter),
            });
        } else {
            return None;
        }
    }

    Some(formation)
}

/// A dictionary word matched by [`Dictionary::match_word_pattern`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    pub word: String,
    /// The letter substituted for the wildcard marker, if the pattern had one
    pub wildcard_letter: Option<char>,
}

impl Dictionary {
    /// Resolve a pattern with at most one `*` marker against the dictionary
    ///
    /// Without a marker the pattern itself must be a word. With one marker,
    /// letters are tried from A to Z and the first valid word is returned, so
    /// this finds the alphabetically first match only. Patterns with more than
    /// one marker are rejected.
    ///
    /// # Examples
    /// ```
    /// use word_puzzle::dictionary::{Dictionary, DictionaryConfig};
    ///
    /// let dictionary = Dictionary::from_words(DictionaryConfig::new(4), ["STAR", "STAY"]);
    ///
    /// let found = dictionary.match_word_pattern("sta*").unwrap();
    /// assert_eq!(found.word, "STAR");
    /// assert_eq!(found.wildcard_letter, Some('R'));
    ///
    /// assert!(dictionary.match_word_pattern("ZZZ*").is_none());
    /// ```
    #[must_use]
    pub fn match_word_pattern(&self, pattern: &str) -> Option<PatternMatch> {
        let pattern = normalize(pattern);
        let mut markers = pattern.match_indices(WILDCARD).map(|(index, _)| index);

        let Some(marker) = markers.next() else {
            return self.is_valid_word(&pattern).then_some(PatternMatch {
                word: pattern,
                wildcard_letter: None,
            });
        };

        if markers.next().is_some() {
            debug!("Rejecting pattern {pattern}: more than one wildcard");
            return None;
        }

        let (head, tail) = (&pattern[..marker], &pattern[marker + 1..]);
        (b'A'..=b'Z').map(char::from).find_map(|letter| {
            let candidate = format!("{head}{letter}{tail}");
            self.is_valid_word(&candidate).then(|| PatternMatch {
                word: candidate,
                wildcard_letter: Some(letter),
            })
        })
    }
}
