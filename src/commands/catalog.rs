//! Solve every built-in puzzle
//!
//! Lists the words available in each rearrange rack and find-words grid and
//! reports whether the round's goal can be reached with this dictionary.
//! Crosswords are checked for clues that run off the board or disagree.

use crate::core::Rack;
use crate::dictionary::Dictionary;
use crate::grid::{Grid, GridError};
use crate::puzzles::{CROSSWORD_PUZZLES, CrosswordError, FIND_WORDS_PUZZLES, REARRANGE_PUZZLES};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Words available in one rearrange round
pub struct RearrangeReport {
    pub round: usize,
    pub rack: Rack,
    pub words: Vec<String>,
    pub short_words: usize,
    pub long_words: usize,
    pub goal_reachable: bool,
}

/// Words hidden in one find-words grid
pub struct GridReport {
    pub round: usize,
    pub grid: Grid,
    pub words: Vec<String>,
    pub goal_reachable: bool,
}

/// Answers of one crossword
pub struct CrosswordReport {
    pub round: usize,
    pub theme: &'static str,
    pub answers: Vec<&'static str>,
    /// Set when the clues cannot all be written on the board
    pub error: Option<CrosswordError>,
}

/// Solutions for the whole catalog
pub struct CatalogReport {
    pub rearrange: Vec<RearrangeReport>,
    pub grids: Vec<GridReport>,
    pub crosswords: Vec<CrosswordReport>,
    pub duration: Duration,
}

impl CatalogReport {
    /// Number of rounds whose goal cannot be met
    #[must_use]
    pub fn unreachable_rounds(&self) -> usize {
        self.rearrange.iter().filter(|r| !r.goal_reachable).count()
            + self.grids.iter().filter(|g| !g.goal_reachable).count()
            + self.crosswords.iter().filter(|c| c.error.is_some()).count()
    }
}

/// Solve all built-in puzzles
///
/// Racks are solved against `rack_dictionary` and grids against
/// `grid_dictionary`, since the two games accept different word lengths.
///
/// # Errors
///
/// Returns an error if a built-in grid is malformed.
pub fn solve_catalog(
    rack_dictionary: &Dictionary,
    grid_dictionary: &Dictionary,
    show_progress: bool,
) -> Result<CatalogReport, GridError> {
    let total = REARRANGE_PUZZLES.len() + FIND_WORDS_PUZZLES.len() + CROSSWORD_PUZZLES.len();
    let pb = if show_progress {
        ProgressBar::new(total as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let mut rearrange = Vec::with_capacity(REARRANGE_PUZZLES.len());
    for (round, puzzle) in REARRANGE_PUZZLES.iter().enumerate() {
        pb.set_message(format!("rack {}", puzzle.letters));

        let rack = puzzle.rack();
        let words = rack_dictionary.find_all_words(&rack);
        let short_words = words.iter().filter(|w| w.len() == 5).count();
        let long_words = words.iter().filter(|w| w.len() > 5).count();

        rearrange.push(RearrangeReport {
            round,
            rack,
            goal_reachable: short_words >= puzzle.min_words && long_words >= puzzle.min_long_words,
            words,
            short_words,
            long_words,
        });
        pb.inc(1);
    }

    let mut grids = Vec::with_capacity(FIND_WORDS_PUZZLES.len());
    for (round, puzzle) in FIND_WORDS_PUZZLES.iter().enumerate() {
        pb.set_message(format!("grid {}", round + 1));

        let grid = puzzle.grid()?;
        let words = grid.find_words(grid_dictionary);

        grids.push(GridReport {
            round,
            grid,
            goal_reachable: words.len() >= puzzle.min_words,
            words,
        });
        pb.inc(1);
    }

    let mut crosswords = Vec::with_capacity(CROSSWORD_PUZZLES.len());
    for (round, puzzle) in CROSSWORD_PUZZLES.iter().enumerate() {
        pb.set_message(format!("crossword {}", puzzle.theme));

        crosswords.push(CrosswordReport {
            round,
            theme: puzzle.theme,
            answers: puzzle.clues.iter().map(|clue| clue.answer).collect(),
            error: puzzle.answer_grid().err(),
        });
        pb.inc(1);
    }

    pb.finish_and_clear();

    Ok(CatalogReport {
        rearrange,
        grids,
        crosswords,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{DictionaryConfig, GRID_MIN_LENGTH, SharedDictionary};
    use crate::wordlists::EmbeddedSource;

    fn report() -> CatalogReport {
        let racks = SharedDictionary::default();
        let grids = SharedDictionary::new(DictionaryConfig::new(GRID_MIN_LENGTH));
        solve_catalog(
            racks.get_or_load(&EmbeddedSource).unwrap(),
            grids.get_or_load(&EmbeddedSource).unwrap(),
            false,
        )
        .unwrap()
    }

    #[test]
    fn covers_every_puzzle() {
        let report = report();

        assert_eq!(report.rearrange.len(), REARRANGE_PUZZLES.len());
        assert_eq!(report.grids.len(), FIND_WORDS_PUZZLES.len());
        assert_eq!(report.crosswords.len(), CROSSWORD_PUZZLES.len());

        for entry in &report.rearrange {
            assert!(!entry.words.is_empty(), "rack {} has no words", entry.rack);
        }
        for entry in &report.crosswords {
            assert!(entry.error.is_none(), "{}: {:?}", entry.theme, entry.error);
        }
    }

    #[test]
    fn first_rack_contains_known_words() {
        let report = report();

        let first = &report.rearrange[0];
        for word in ["STARE", "TRADES", "LISTEN"] {
            assert!(first.words.contains(&word.to_string()), "missing {word}");
        }
    }

    #[test]
    fn grid_words_include_top_rows() {
        let report = report();

        assert!(report.grids[0].words.contains(&"STARE".to_string()));
        assert!(report.grids[1].words.contains(&"LIGHT".to_string()));
        assert!(report.grids[2].words.contains(&"PLAYS".to_string()));
    }

    #[test]
    fn grids_use_their_own_minimum_length() {
        let report = report();

        // STAR runs along the top row of the first grid
        assert!(report.grids[0].words.contains(&"STAR".to_string()));
        assert!(
            report
                .rearrange
                .iter()
                .flat_map(|entry| &entry.words)
                .all(|word| word.len() >= 5)
        );
    }
}
