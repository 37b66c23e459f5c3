//! Find-words grid round

use super::catalog::FindWordsPuzzle;
use super::{Rejection, Submission};
use crate::core::normalize;
use crate::dictionary::Dictionary;
use crate::grid::{Cell, Grid, GridError};
use log::warn;

/// One round of the find-words game
///
/// The words hidden in the grid are computed once from the dictionary when the
/// round starts; submissions are checked against that list.
#[derive(Debug, Clone)]
pub struct FindWordsRound {
    grid: Grid,
    valid_words: Vec<String>,
    found: Vec<String>,
    goal: usize,
}

impl FindWordsRound {
    /// Start a round, solving the grid against `dictionary`
    ///
    /// If the grid holds fewer words than the puzzle asks for, the goal is
    /// lowered to the number of words available.
    ///
    /// # Errors
    /// Returns `GridError` if the puzzle rows are not a valid grid.
    pub fn new(puzzle: &FindWordsPuzzle, dictionary: &Dictionary) -> Result<Self, GridError> {
        let grid = puzzle.grid()?;
        let valid_words = grid.find_words(dictionary);
        let goal = puzzle.min_words.min(valid_words.len());
        if goal < puzzle.min_words {
            warn!(
                "Grid holds only {} words, lowering goal from {}",
                valid_words.len(),
                puzzle.min_words
            );
        }

        Ok(Self {
            grid,
            valid_words,
            found: Vec::new(),
            goal,
        })
    }

    /// Resume a round with words found earlier
    ///
    /// Saved words that are not in the grid are dropped.
    ///
    /// # Errors
    /// Returns `GridError` if the puzzle rows are not a valid grid.
    pub fn with_found(
        puzzle: &FindWordsPuzzle,
        dictionary: &Dictionary,
        found: &[String],
    ) -> Result<Self, GridError> {
        let mut round = Self::new(puzzle, dictionary)?;
        for word in found {
            round.submit(word);
        }
        Ok(round)
    }

    /// Submit a word typed by the player
    pub fn submit(&mut self, word: &str) -> Submission {
        let word = normalize(word);
        if self.found.contains(&word) {
            return Submission::Rejected(Rejection::AlreadyFound);
        }
        if self.valid_words.binary_search(&word).is_err() {
            return Submission::Rejected(Rejection::NotInGrid);
        }

        self.found.push(word.clone());
        if self.found.len() == self.goal {
            Submission::Completed(word)
        } else {
            Submission::Accepted(word)
        }
    }

    /// Submit a path traced through the grid
    ///
    /// # Errors
    /// Returns `GridError` if the path is not a valid trace.
    pub fn submit_path(&mut self, path: &[Cell]) -> Result<Submission, GridError> {
        let word = self.grid.trace(path)?;
        Ok(self.submit(&word))
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Every word hidden in the grid, sorted
    #[must_use]
    pub fn valid_words(&self) -> &[String] {
        &self.valid_words
    }

    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    /// Hidden words the player has not found, sorted
    #[must_use]
    pub fn missed_words(&self) -> Vec<&str> {
        self.valid_words
            .iter()
            .filter(|word| !self.found.contains(word))
            .map(String::as_str)
            .collect()
    }

    #[must_use]
    pub const fn goal(&self) -> usize {
        self.goal
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.len() >= self.goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryConfig;

    const PUZZLE: FindWordsPuzzle = FindWordsPuzzle {
        rows: &["STAR", "XEXX", "XXAX", "XXXT"],
        min_words: 2,
    };

    fn dictionary() -> Dictionary {
        Dictionary::from_words(DictionaryConfig::new(4), ["STAR", "SEAT", "TEAR", "QUIZ"])
    }

    #[test]
    fn precomputes_hidden_words() {
        let round = FindWordsRound::new(&PUZZLE, &dictionary()).unwrap();
        assert_eq!(round.valid_words(), &["SEAT", "STAR", "TEAR"]);
        assert_eq!(round.goal(), 2);
    }

    #[test]
    fn submissions_and_completion() {
        let mut round = FindWordsRound::new(&PUZZLE, &dictionary()).unwrap();

        assert_eq!(round.submit("star"), Submission::Accepted("STAR".to_string()));
        assert_eq!(round.submit("STAR"), Submission::Rejected(Rejection::AlreadyFound));
        assert_eq!(round.submit("QUIZ"), Submission::Rejected(Rejection::NotInGrid));
        assert!(!round.is_complete());

        assert_eq!(round.submit("seat"), Submission::Completed("SEAT".to_string()));
        assert!(round.is_complete());
        assert_eq!(round.missed_words(), vec!["TEAR"]);
    }

    #[test]
    fn submit_traced_path() {
        let mut round = FindWordsRound::new(&PUZZLE, &dictionary()).unwrap();
        let seat = [Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2), Cell::new(3, 3)];
        assert_eq!(
            round.submit_path(&seat),
            Ok(Submission::Accepted("SEAT".to_string()))
        );

        let broken = [Cell::new(0, 0), Cell::new(2, 2)];
        assert!(matches!(
            round.submit_path(&broken),
            Err(GridError::NotAdjacent { .. })
        ));
    }

    #[test]
    fn goal_is_capped_by_available_words() {
        let puzzle = FindWordsPuzzle {
            rows: PUZZLE.rows,
            min_words: 10,
        };
        let round = FindWordsRound::new(&puzzle, &dictionary()).unwrap();
        assert_eq!(round.goal(), 3);
    }

    #[test]
    fn resume_drops_unknown_words() {
        let saved = vec!["STAR".to_string(), "QUIZ".to_string()];
        let round = FindWordsRound::with_found(&PUZZLE, &dictionary(), &saved).unwrap();
        assert_eq!(round.found_words(), &["STAR".to_string()]);
    }
}
