//! Crossword rounds
//!
//! A crossword is a set of clues placed on a rectangular board. Cells no clue
//! passes through are blocked. Players answer one clue at a time; a correct
//! answer is written into the board and stays there.

use super::{Rejection, Submission};
use crate::core::normalize;
use crate::grid::Cell;
use std::fmt;
use thiserror::Error;

/// Which way a clue's answer runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// Parse `across`/`a` or `down`/`d`, ignoring case
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "across" | "a" => Some(Self::Across),
            "down" | "d" => Some(Self::Down),
            _ => None,
        }
    }

    /// Row and column step between consecutive letters
    const fn step(self) -> (usize, usize) {
        match self {
            Self::Across => (0, 1),
            Self::Down => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// One clue and where its answer sits on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clue {
    pub number: usize,
    pub direction: Direction,
    pub text: &'static str,
    pub answer: &'static str,
    /// Cell of the first letter
    pub start: Cell,
}

impl Clue {
    /// Cells covered by the answer, first letter first
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let (dr, dc) = self.direction.step();
        (0..self.answer.len())
            .map(move |i| Cell::new(self.start.row + i * dr, self.start.col + i * dc))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} ({})",
            self.number,
            self.direction,
            self.text,
            self.answer.len()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrosswordError {
    #[error("clue {number} {direction} runs off the board")]
    OutOfBounds { number: usize, direction: Direction },

    #[error("clues disagree at {cell}: '{first}' and '{second}'")]
    Conflict {
        cell: Cell,
        first: char,
        second: char,
    },

    #[error("there is no clue {number} {direction}")]
    UnknownClue { number: usize, direction: Direction },
}

/// A built-in crossword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrosswordPuzzle {
    pub theme: &'static str,
    pub width: usize,
    pub height: usize,
    pub clues: &'static [Clue],
}

impl CrosswordPuzzle {
    /// Solution letters in row-major order, `None` for blocked cells
    ///
    /// # Errors
    /// Returns `CrosswordError` if a clue leaves the board or two clues put
    /// different letters in the same cell.
    pub fn answer_grid(&self) -> Result<Vec<Option<u8>>, CrosswordError> {
        let mut grid = vec![None; self.width * self.height];

        for clue in self.clues {
            for (cell, letter) in clue.cells().zip(clue.answer.bytes()) {
                if cell.row >= self.height || cell.col >= self.width {
                    return Err(CrosswordError::OutOfBounds {
                        number: clue.number,
                        direction: clue.direction,
                    });
                }
                let slot = &mut grid[cell.row * self.width + cell.col];
                match *slot {
                    Some(existing) if existing != letter => {
                        return Err(CrosswordError::Conflict {
                            cell,
                            first: char::from(existing),
                            second: char::from(letter),
                        });
                    }
                    _ => *slot = Some(letter),
                }
            }
        }

        Ok(grid)
    }

    /// Clue number printed in `cell`, if a clue starts there
    #[must_use]
    pub fn number_at(&self, cell: Cell) -> Option<usize> {
        self.clues
            .iter()
            .find(|clue| clue.start == cell)
            .map(|clue| clue.number)
    }
}

/// One round of the crossword game
#[derive(Debug, Clone)]
pub struct CrosswordRound {
    puzzle: CrosswordPuzzle,
    solution: Vec<Option<u8>>,
    entries: Vec<Option<u8>>,
    solved: Vec<bool>,
}

impl CrosswordRound {
    /// # Errors
    /// Returns `CrosswordError` if the puzzle's clues do not fit together.
    pub fn new(puzzle: CrosswordPuzzle) -> Result<Self, CrosswordError> {
        let solution = puzzle.answer_grid()?;
        Ok(Self {
            entries: vec![None; solution.len()],
            solved: vec![false; puzzle.clues.len()],
            solution,
            puzzle,
        })
    }

    /// Resume a round from answers given earlier
    ///
    /// Saved words that answer no clue are ignored.
    ///
    /// # Errors
    /// Returns `CrosswordError` if the puzzle's clues do not fit together.
    pub fn with_found(puzzle: CrosswordPuzzle, found: &[String]) -> Result<Self, CrosswordError> {
        let mut round = Self::new(puzzle)?;
        for word in found {
            let word = normalize(word);
            if let Some(clue) = puzzle.clues.iter().find(|clue| clue.answer == word) {
                round.submit(clue.number, clue.direction, &word)?;
            }
        }
        Ok(round)
    }

    /// Answer a clue
    ///
    /// A correct answer fills the clue's cells. A wrong answer leaves the
    /// board unchanged.
    ///
    /// # Errors
    /// Returns `CrosswordError::UnknownClue` if the puzzle has no such clue.
    pub fn submit(
        &mut self,
        number: usize,
        direction: Direction,
        word: &str,
    ) -> Result<Submission, CrosswordError> {
        let index = self
            .puzzle
            .clues
            .iter()
            .position(|clue| clue.number == number && clue.direction == direction)
            .ok_or(CrosswordError::UnknownClue { number, direction })?;
        let clue = self.puzzle.clues[index];
        let word = normalize(word);

        if self.solved[index] {
            return Ok(Submission::Rejected(Rejection::AlreadyFound));
        }
        if word.len() != clue.len() {
            return Ok(Submission::Rejected(Rejection::WrongLength));
        }
        if word != clue.answer {
            return Ok(Submission::Rejected(Rejection::WrongAnswer));
        }

        for (cell, letter) in clue.cells().zip(word.bytes()) {
            let slot = self.index(cell);
            self.entries[slot] = Some(letter);
        }
        self.solved[index] = true;

        // A crossing answer can be completed by letters from other clues
        let clues = self.puzzle.clues;
        for (other, clue) in clues.iter().enumerate() {
            if !self.solved[other]
                && clue
                    .cells()
                    .all(|cell| self.entries[self.index(cell)].is_some())
            {
                self.solved[other] = true;
            }
        }

        if self.is_complete() {
            Ok(Submission::Completed(word))
        } else {
            Ok(Submission::Accepted(word))
        }
    }

    /// Letter written in `cell`, if any
    #[must_use]
    pub fn letter_at(&self, cell: Cell) -> Option<char> {
        if cell.row >= self.puzzle.height || cell.col >= self.puzzle.width {
            return None;
        }
        self.entries[self.index(cell)].map(char::from)
    }

    /// Whether `cell` belongs to some answer
    #[must_use]
    pub fn is_open(&self, cell: Cell) -> bool {
        cell.row < self.puzzle.height
            && cell.col < self.puzzle.width
            && self.solution[self.index(cell)].is_some()
    }

    #[must_use]
    pub fn is_solved(&self, number: usize, direction: Direction) -> bool {
        self.puzzle
            .clues
            .iter()
            .zip(&self.solved)
            .any(|(clue, &solved)| solved && clue.number == number && clue.direction == direction)
    }

    /// Clues not answered yet, in puzzle order
    #[must_use]
    pub fn remaining_clues(&self) -> Vec<&Clue> {
        self.puzzle
            .clues
            .iter()
            .zip(&self.solved)
            .filter(|(_, solved)| !**solved)
            .map(|(clue, _)| clue)
            .collect()
    }

    /// Answers filled in so far, in puzzle order
    #[must_use]
    pub fn found_words(&self) -> Vec<String> {
        self.puzzle
            .clues
            .iter()
            .zip(&self.solved)
            .filter(|(_, solved)| **solved)
            .map(|(clue, _)| clue.answer.to_string())
            .collect()
    }

    /// Every open cell holds its solution letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.solution == self.entries
    }

    const fn index(&self, cell: Cell) -> usize {
        cell.row * self.puzzle.width + cell.col
    }
}

/// Board with `#` for blocked cells, clue numbers on empty starting cells
/// and `.` on other empty ones
impl fmt::Display for CrosswordRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.puzzle.height {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.puzzle.width {
                if col > 0 {
                    write!(f, " ")?;
                }
                let cell = Cell::new(row, col);
                match (self.is_open(cell), self.letter_at(cell)) {
                    (false, _) => write!(f, "#")?,
                    (true, Some(letter)) => write!(f, "{letter}")?,
                    (true, None) => match self.puzzle.number_at(cell) {
                        Some(number) => write!(f, "{number}")?,
                        None => write!(f, ".")?,
                    },
                }
            }
        }
        Ok(())
    }
}
