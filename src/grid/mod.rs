//! Letter grids for the find-words game
//!
//! A grid is a rectangle of letters. Words are spelled by paths that step to
//! any of the eight neighbouring cells and never revisit a cell.

mod search;

use std::fmt;
use thiserror::Error;

/// Row and column of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if `other` is one of the eight cells around this one
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let rows = self.row.abs_diff(other.row);
        let cols = self.col.abs_diff(other.col);
        rows <= 1 && cols <= 1 && !(rows == 0 && cols == 0)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Errors from building a grid or tracing a path through it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no letters")]
    Empty,

    #[error("row {row} has {found} letters, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid letter '{letter}' at {cell}")]
    InvalidLetter { cell: Cell, letter: char },

    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),

    #[error("cell {0} is used twice")]
    Revisited(Cell),

    #[error("cell {to} is not adjacent to {from}")]
    NotAdjacent { from: Cell, to: Cell },
}

/// Offsets of the eight neighbouring cells
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A rectangular grid of uppercase letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    letters: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from rows of letters (either case)
    ///
    /// # Errors
    /// Returns `GridError` if there are no letters, rows differ in length, or
    /// a cell holds anything other than A-Z.
    ///
    /// # Examples
    /// ```
    /// use word_puzzle::grid::{Cell, Grid};
    ///
    /// let grid = Grid::parse(&["star", "ewls"]).unwrap();
    /// assert_eq!(grid.letter_at(Cell::new(1, 2)), Some('L'));
    /// assert!(Grid::parse(&["abc", "de"]).is_err());
    /// ```
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |row| row.as_ref().chars().count());
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut letters = Vec::with_capacity(rows.len() * cols);
        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            let found = text.chars().count();
            if found != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, letter) in text.chars().enumerate() {
                if !letter.is_ascii_alphabetic() {
                    return Err(GridError::InvalidLetter {
                        cell: Cell::new(row, col),
                        letter,
                    });
                }
                letters.push(letter.to_ascii_uppercase() as u8);
            }
        }

        Ok(Self {
            letters,
            rows: rows.len(),
            cols,
        })
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// The letter at `cell`, or `None` outside the grid
    #[must_use]
    pub fn letter_at(&self, cell: Cell) -> Option<char> {
        self.contains(cell)
            .then(|| char::from(self.letters[self.index(cell)]))
    }

    /// Cells adjacent to `cell` that lie inside the grid
    pub fn neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let neighbour = Cell::new(
                cell.row.checked_add_signed(dr)?,
                cell.col.checked_add_signed(dc)?,
            );
            self.contains(neighbour).then_some(neighbour)
        })
    }

    /// Spell the word along a player-traced path
    ///
    /// # Errors
    /// Returns `GridError` if a cell is outside the grid, a cell repeats, or
    /// two consecutive cells are not adjacent.
    pub fn trace(&self, path: &[Cell]) -> Result<String, GridError> {
        let mut visited = vec![false; self.letters.len()];
        let mut word = String::with_capacity(path.len());

        for (step, &cell) in path.iter().enumerate() {
            if !self.contains(cell) {
                return Err(GridError::OutOfBounds(cell));
            }
            let index = self.index(cell);
            if visited[index] {
                return Err(GridError::Revisited(cell));
            }
            if let Some(&from) = step.checked_sub(1).and_then(|prev| path.get(prev)) {
                if !from.is_adjacent(cell) {
                    return Err(GridError::NotAdjacent { from, to: cell });
                }
            }
            visited[index] = true;
            word.push(char::from(self.letters[index]));
        }

        Ok(word)
    }

    #[inline]
    const fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    pub(crate) const fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.cols, index % self.cols)
    }

    #[inline]
    pub(crate) fn byte_at(&self, cell: Cell) -> u8 {
        self.letters[self.index(cell)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, letters) in self.letters.chunks(self.cols).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, &letter) in letters.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", char::from(letter))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::parse(&["STARE", "HEARS", "OWLED", "PERSO", "STEPS"]).unwrap()
    }

    #[test]
    fn parse_uppercases() {
        let grid = Grid::parse(&["ab", "cd"]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.letter_at(Cell::new(1, 0)), Some('C'));
        assert_eq!(grid.letter_at(Cell::new(2, 0)), None);
    }

    #[test]
    fn parse_errors() {
        let empty: &[&str] = &[];
        assert_eq!(Grid::parse(empty), Err(GridError::Empty));
        assert_eq!(Grid::parse(&[""]), Err(GridError::Empty));
        assert_eq!(
            Grid::parse(&["abc", "ab"]),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Grid::parse(&["ab", "c1"]),
            Err(GridError::InvalidLetter {
                cell: Cell::new(1, 1),
                letter: '1'
            })
        );
    }

    #[test]
    fn adjacency() {
        let centre = Cell::new(1, 1);
        assert!(centre.is_adjacent(Cell::new(0, 0)));
        assert!(centre.is_adjacent(Cell::new(2, 2)));
        assert!(centre.is_adjacent(Cell::new(1, 2)));
        assert!(!centre.is_adjacent(centre));
        assert!(!centre.is_adjacent(Cell::new(3, 1)));
    }

    #[test]
    fn neighbours_at_corner_and_centre() {
        let grid = grid();
        assert_eq!(grid.neighbours(Cell::new(0, 0)).count(), 3);
        assert_eq!(grid.neighbours(Cell::new(0, 2)).count(), 5);
        assert_eq!(grid.neighbours(Cell::new(2, 2)).count(), 8);
        assert_eq!(grid.neighbours(Cell::new(4, 4)).count(), 3);
    }

    #[test]
    fn trace_spells_word() {
        let path: Vec<Cell> = (0..5).map(|col| Cell::new(0, col)).collect();
        assert_eq!(grid().trace(&path).unwrap(), "STARE");

        // Diagonal from top-left
        let diagonal = [Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)];
        assert_eq!(grid().trace(&diagonal).unwrap(), "SEL");
    }

    #[test]
    fn trace_rejects_bad_paths() {
        let grid = grid();
        assert_eq!(
            grid.trace(&[Cell::new(0, 0), Cell::new(0, 2)]),
            Err(GridError::NotAdjacent {
                from: Cell::new(0, 0),
                to: Cell::new(0, 2)
            })
        );
        assert_eq!(
            grid.trace(&[Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 0)]),
            Err(GridError::Revisited(Cell::new(0, 0)))
        );
        assert_eq!(
            grid.trace(&[Cell::new(4, 4), Cell::new(5, 5)]),
            Err(GridError::OutOfBounds(Cell::new(5, 5)))
        );
        assert_eq!(grid.trace(&[]), Ok(String::new()));
    }

    #[test]
    fn display() {
        let grid = Grid::parse(&["ab", "cd"]).unwrap();
        assert_eq!(grid.to_string(), "A B\nC D");
    }
}
