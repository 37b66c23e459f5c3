//! Round progress across games
//!
//! Tracks which rounds of each game have been completed and the words found in
//! them. Progress lives in memory for the length of a session.

use crate::puzzles::{CROSSWORD_PUZZLES, FIND_WORDS_PUZZLES, REARRANGE_PUZZLES};
use std::fmt;
use thiserror::Error;

/// The puzzle games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    FindWords,
    Crossword,
    Rearrange,
}

impl GameKind {
    pub const ALL: [Self; 3] = [Self::FindWords, Self::Crossword, Self::Rearrange];

    /// Parse a game name as typed on the command line
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "find-words" | "findwords" | "grid" => Some(Self::FindWords),
            "crossword" | "cross" => Some(Self::Crossword),
            "rearrange" | "rack" => Some(Self::Rearrange),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FindWords => "find-words",
            Self::Crossword => "crossword",
            Self::Rearrange => "rearrange",
        }
    }

    /// Number of rounds the game has
    #[must_use]
    pub const fn round_count(self) -> usize {
        match self {
            Self::FindWords => FIND_WORDS_PUZZLES.len(),
            Self::Crossword => CROSSWORD_PUZZLES.len(),
            Self::Rearrange => REARRANGE_PUZZLES.len(),
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressError {
    #[error("{game} has {rounds} rounds, there is no round {round}")]
    RoundOutOfRange {
        game: GameKind,
        round: usize,
        rounds: usize,
    },
}

/// State of a single round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundState {
    pub completed: bool,
    /// Words found, or clue answers filled in for a crossword
    pub found_words: Vec<String>,
}

/// Completed rounds for every game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    find_words: Vec<RoundState>,
    crossword: Vec<RoundState>,
    rearrange: Vec<RoundState>,
}

impl Progress {
    #[must_use]
    pub fn new() -> Self {
        Self {
            find_words: vec![RoundState::default(); GameKind::FindWords.round_count()],
            crossword: vec![RoundState::default(); GameKind::Crossword.round_count()],
            rearrange: vec![RoundState::default(); GameKind::Rearrange.round_count()],
        }
    }

    #[must_use]
    pub fn rounds(&self, game: GameKind) -> &[RoundState] {
        match game {
            GameKind::FindWords => &self.find_words,
            GameKind::Crossword => &self.crossword,
            GameKind::Rearrange => &self.rearrange,
        }
    }

    fn rounds_mut(&mut self, game: GameKind) -> &mut [RoundState] {
        match game {
            GameKind::FindWords => &mut self.find_words,
            GameKind::Crossword => &mut self.crossword,
            GameKind::Rearrange => &mut self.rearrange,
        }
    }

    /// Mark a round complete, keeping the words found in it
    ///
    /// # Errors
    /// Returns `ProgressError::RoundOutOfRange` if the game has no such round.
    pub fn complete_round(
        &mut self,
        game: GameKind,
        round: usize,
        found_words: Vec<String>,
    ) -> Result<(), ProgressError> {
        let rounds = self.rounds_mut(game);
        let count = rounds.len();
        let state = rounds.get_mut(round).ok_or(ProgressError::RoundOutOfRange {
            game,
            round,
            rounds: count,
        })?;
        *state = RoundState {
            completed: true,
            found_words,
        };
        Ok(())
    }

    #[must_use]
    pub fn completed_count(&self, game: GameKind) -> usize {
        self.rounds(game).iter().filter(|round| round.completed).count()
    }

    /// First round of `game` not yet completed
    #[must_use]
    pub fn next_available_round(&self, game: GameKind) -> Option<usize> {
        self.rounds(game).iter().position(|round| !round.completed)
    }

    #[must_use]
    pub fn is_game_complete(&self, game: GameKind) -> bool {
        self.rounds(game).iter().all(|round| round.completed)
    }

    #[must_use]
    pub fn is_all_complete(&self) -> bool {
        GameKind::ALL.iter().all(|&game| self.is_game_complete(game))
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_progress_is_empty() {
        let progress = Progress::new();
        assert_eq!(progress.rounds(GameKind::FindWords).len(), 3);
        assert_eq!(progress.rounds(GameKind::Crossword).len(), 2);
        assert_eq!(progress.rounds(GameKind::Rearrange).len(), 5);
        assert_eq!(progress.completed_count(GameKind::Rearrange), 0);
        assert_eq!(progress.next_available_round(GameKind::FindWords), Some(0));
        assert!(!progress.is_all_complete());
    }

    #[test]
    fn completing_rounds_advances() {
        let mut progress = Progress::new();
        progress
            .complete_round(GameKind::Rearrange, 0, vec!["STARE".to_string()])
            .unwrap();

        assert_eq!(progress.completed_count(GameKind::Rearrange), 1);
        assert_eq!(progress.next_available_round(GameKind::Rearrange), Some(1));
        assert_eq!(
            progress.rounds(GameKind::Rearrange)[0].found_words,
            vec!["STARE".to_string()]
        );
        // Other games are unaffected
        assert_eq!(progress.completed_count(GameKind::FindWords), 0);
    }

    #[test]
    fn rounds_can_be_completed_out_of_order() {
        let mut progress = Progress::new();
        progress.complete_round(GameKind::FindWords, 1, Vec::new()).unwrap();
        assert_eq!(progress.next_available_round(GameKind::FindWords), Some(0));
    }

    #[test]
    fn everything_complete() {
        let mut progress = Progress::new();
        for game in GameKind::ALL {
            for round in 0..game.round_count() {
                progress.complete_round(game, round, Vec::new()).unwrap();
            }
            assert!(progress.is_game_complete(game));
            assert_eq!(progress.next_available_round(game), None);
        }
        assert!(progress.is_all_complete());
    }

    #[test]
    fn crossword_rounds_gate_overall_completion() {
        let mut progress = Progress::new();
        for game in [GameKind::FindWords, GameKind::Rearrange] {
            for round in 0..game.round_count() {
                progress.complete_round(game, round, Vec::new()).unwrap();
            }
        }
        assert!(!progress.is_all_complete());

        progress.complete_round(GameKind::Crossword, 0, vec!["FLASH".into()]).unwrap();
        assert_eq!(progress.next_available_round(GameKind::Crossword), Some(1));
        progress.complete_round(GameKind::Crossword, 1, Vec::new()).unwrap();
        assert!(progress.is_all_complete());
    }

    #[test]
    fn out_of_range_round() {
        let mut progress = Progress::new();
        assert_eq!(
            progress.complete_round(GameKind::FindWords, 3, Vec::new()),
            Err(ProgressError::RoundOutOfRange {
                game: GameKind::FindWords,
                round: 3,
                rounds: 3
            })
        );
    }

    #[test]
    fn game_names() {
        assert_eq!(GameKind::from_name("Rearrange"), Some(GameKind::Rearrange));
        assert_eq!(GameKind::from_name("find-words"), Some(GameKind::FindWords));
        assert_eq!(GameKind::from_name("Crossword"), Some(GameKind::Crossword));
        assert_eq!(GameKind::from_name("sudoku"), None);
        assert_eq!(GameKind::FindWords.to_string(), "find-words");
    }
}
