//! Puzzle rounds for the rearrange, find-words and crossword games
//!
//! Each round tracks the words a player has found and decides whether a
//! submitted word counts.

mod catalog;
mod crossword;
mod find_words;
mod rearrange;

pub use catalog::{
    CROSSWORD_PUZZLES, FIND_WORDS_PUZZLES, FindWordsPuzzle, REARRANGE_PUZZLES, RearrangePuzzle,
};
pub use crossword::{Clue, CrosswordError, CrosswordPuzzle, CrosswordRound, Direction};
pub use find_words::FindWordsRound;
pub use rearrange::RearrangeRound;

use std::fmt;

/// Why a submitted word did not count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Not in the dictionary
    NotAWord,
    /// The rack does not hold the letters for it
    NotFormable,
    /// Not one of the words hidden in the grid
    NotInGrid,
    /// Not the answer to the clue
    WrongAnswer,
    WrongLength,
    AlreadyFound,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAWord => write!(f, "not a word"),
            Self::NotFormable => write!(f, "can't be made from these letters"),
            Self::NotInGrid => write!(f, "not in the grid"),
            Self::WrongAnswer => write!(f, "not the answer"),
            Self::WrongLength => write!(f, "wrong number of letters"),
            Self::AlreadyFound => write!(f, "already found"),
        }
    }
}

/// Outcome of submitting a word to a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted(String),
    /// Accepted, and this word finished the round
    Completed(String),
    Rejected(Rejection),
}

impl Submission {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_) | Self::Completed(_))
    }
}
