//! Letter-rearrangement round

use super::catalog::RearrangePuzzle;
use super::{Rejection, Submission};
use crate::core::{Rack, normalize};
use crate::dictionary::{Dictionary, can_form_word};

/// Length of the words counted towards the main goal
const SHORT_WORD_LENGTH: usize = 5;

/// One round of the rearrange game
///
/// Players spell words from the rack. The round is complete once they have
/// enough five-letter words and enough words of six letters or more.
#[derive(Debug, Clone)]
pub struct RearrangeRound {
    puzzle: RearrangePuzzle,
    rack: Rack,
    found: Vec<String>,
}

impl RearrangeRound {
    #[must_use]
    pub fn new(puzzle: RearrangePuzzle) -> Self {
        Self::with_found(puzzle, Vec::new())
    }

    /// Resume a round with words found earlier
    #[must_use]
    pub fn with_found(puzzle: RearrangePuzzle, found: Vec<String>) -> Self {
        Self {
            rack: puzzle.rack(),
            puzzle,
            found: found.iter().map(|word| normalize(word)).collect(),
        }
    }

    /// Submit a word spelled from the rack
    pub fn submit(&mut self, dictionary: &Dictionary, word: &str) -> Submission {
        let word = normalize(word);
        if word.is_empty() || can_form_word(&self.rack, &word).is_none() {
            return Submission::Rejected(Rejection::NotFormable);
        }
        if !dictionary.is_valid_word(&word) {
            return Submission::Rejected(Rejection::NotAWord);
        }
        if self.found.contains(&word) {
            return Submission::Rejected(Rejection::AlreadyFound);
        }

        let was_complete = self.is_complete();
        self.found.push(word.clone());
        if !was_complete && self.is_complete() {
            Submission::Completed(word)
        } else {
            Submission::Accepted(word)
        }
    }

    #[must_use]
    pub const fn puzzle(&self) -> &RearrangePuzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn rack(&self) -> &Rack {
        &self.rack
    }

    /// Words found so far, in the order they were found
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    /// Five-letter words found
    #[must_use]
    pub fn short_count(&self) -> usize {
        self.found
            .iter()
            .filter(|word| word.len() == SHORT_WORD_LENGTH)
            .count()
    }

    /// Words of six or more letters found
    #[must_use]
    pub fn long_count(&self) -> usize {
        self.found
            .iter()
            .filter(|word| word.len() > SHORT_WORD_LENGTH)
            .count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.short_count() >= self.puzzle.min_words
            && self.long_count() >= self.puzzle.min_long_words
    }
}
