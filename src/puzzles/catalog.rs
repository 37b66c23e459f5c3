//! Built-in puzzle sets

use super::crossword::{Clue, CrosswordPuzzle, Direction};
use crate::core::{Rack, Tile};
use crate::grid::{Cell, Grid, GridError};

/// A letter-rearrangement round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RearrangePuzzle {
    pub letters: &'static str,
    /// Words of exactly five letters needed to finish the round
    pub min_words: usize,
    /// Words of six or more letters needed to finish the round
    pub min_long_words: usize,
}

impl RearrangePuzzle {
    #[must_use]
    pub fn rack(&self) -> Rack {
        self.letters.chars().filter_map(Tile::from_char).collect()
    }
}

/// A find-words grid round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindWordsPuzzle {
    pub rows: &'static [&'static str],
    pub min_words: usize,
}

impl FindWordsPuzzle {
    /// # Errors
    /// Returns `GridError` if the rows do not form a valid grid.
    pub fn grid(&self) -> Result<Grid, GridError> {
        Grid::parse(self.rows)
    }
}

pub const REARRANGE_PUZZLES: &[RearrangePuzzle] = &[
    RearrangePuzzle {
        letters: "STAREDLINS",
        min_words: 8,
        min_long_words: 3,
    },
    RearrangePuzzle {
        letters: "PLAYERSONE",
        min_words: 8,
        min_long_words: 3,
    },
    RearrangePuzzle {
        letters: "SWORDSTEAR",
        min_words: 8,
        min_long_words: 3,
    },
    RearrangePuzzle {
        letters: "MASTERGINS",
        min_words: 10,
        min_long_words: 4,
    },
    RearrangePuzzle {
        letters: "PHONESARTH",
        min_words: 10,
        min_long_words: 5,
    },
];

pub const FIND_WORDS_PUZZLES: &[FindWordsPuzzle] = &[
    FindWordsPuzzle {
        rows: &["STARE", "HEARS", "OWLED", "PERSO", "STEPS"],
        min_words: 8,
    },
    FindWordsPuzzle {
        rows: &["LIGHT", "ONESA", "VERST", "EDGES", "SPOTS"],
        min_words: 8,
    },
    FindWordsPuzzle {
        rows: &["PLAYS", "HONET", "OTESA", "NESTR", "ESSAY"],
        min_words: 8,
    },
];

const fn clue(
    number: usize,
    direction: Direction,
    text: &'static str,
    answer: &'static str,
    row: usize,
    col: usize,
) -> Clue {
    Clue {
        number,
        direction,
        text,
        answer,
        start: Cell::new(row, col),
    }
}

pub const CROSSWORD_PUZZLES: &[CrosswordPuzzle] = &[
    //   0 1 2 3 4 5 6 7
    // 0 # # # # # # # #
    // 1 F L A S H # # #
    // 2 # E # N # # # #
    // 3 # N # A # Z # #
    // 4 # S # P H O T O
    // 5 # # # # # O # #
    // 6 # # # # # M # #
    CrosswordPuzzle {
        theme: "Photography",
        width: 8,
        height: 7,
        clues: &[
            clue(1, Direction::Across, "Sudden burst of light", "FLASH", 1, 0),
            clue(2, Direction::Down, "Camera glass", "LENS", 1, 1),
            clue(3, Direction::Down, "Quick picture", "SNAP", 1, 3),
            clue(4, Direction::Down, "Magnify the view", "ZOOM", 3, 5),
            clue(5, Direction::Across, "Camera capture", "PHOTO", 4, 3),
        ],
    },
    //   0 1 2 3 4 5 6 7
    // 0 D I C E # # # #
    // 1 # # A # # # # #
    // 2 # # R E P # # #
    // 3 # # D # A # # #
    // 4 # # # # W I N S
    // 5 # # # # N # # #
    CrosswordPuzzle {
        theme: "Games",
        width: 8,
        height: 6,
        clues: &[
            clue(1, Direction::Across, "Roll these to play", "DICE", 0, 0),
            clue(2, Direction::Down, "Playing ___", "CARD", 0, 2),
            clue(3, Direction::Across, "Reputation, for short", "REP", 2, 2),
            clue(4, Direction::Down, "Chess piece", "PAWN", 2, 4),
            clue(5, Direction::Across, "Game victories", "WINS", 4, 4),
        ],
    },
];
