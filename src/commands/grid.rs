//! Grid solve command

use crate::dictionary::Dictionary;
use crate::grid::{Grid, GridError};
use std::time::{Duration, Instant};

/// Result of solving a grid
pub struct GridResult {
    pub grid: Grid,
    pub words: Vec<String>,
    pub duration: Duration,
}

/// Find every word hidden in the grid described by `rows`
///
/// # Errors
///
/// Returns an error if the rows do not form a rectangular grid of letters.
pub fn solve_grid<S: AsRef<str>>(
    dictionary: &Dictionary,
    rows: &[S],
) -> Result<GridResult, GridError> {
    let grid = Grid::parse(rows)?;

    let start = Instant::now();
    let words = grid.find_words(dictionary);

    Ok(GridResult {
        grid,
        words,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryConfig;

    #[test]
    fn solves_grid() {
        let dictionary = Dictionary::from_words(DictionaryConfig::new(4), ["STAR", "RATS"]);
        let result = solve_grid(&dictionary, &["st", "ra"]).unwrap();
        assert_eq!(result.words, vec!["RATS", "STAR"]);
        assert_eq!(result.grid.rows(), 2);
    }

    #[test]
    fn ragged_grid_is_an_error() {
        let dictionary = Dictionary::from_words(DictionaryConfig::new(4), ["STAR"]);
        assert!(matches!(
            solve_grid(&dictionary, &["star", "ra"]),
            Err(GridError::Ragged { .. })
        ));
    }
}
