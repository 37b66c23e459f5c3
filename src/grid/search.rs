//! Grid word search
//!
//! Depth-first search from every cell, following the trie alongside the path
//! so a branch stops as soon as no dictionary word continues it.

use super::{Cell, Grid};
use crate::dictionary::{Dictionary, TrieNode};
use log::debug;
use rayon::prelude::*;
use std::collections::BTreeSet;

impl Grid {
    /// Find every dictionary word that can be traced through the grid
    ///
    /// Paths move to any of the eight neighbours and use each cell once.
    /// Words are at least the dictionary's minimum length, deduplicated and
    /// sorted. Start cells are searched in parallel.
    ///
    /// # Examples
    /// ```
    /// use word_puzzle::dictionary::{Dictionary, DictionaryConfig};
    /// use word_puzzle::grid::Grid;
    ///
    /// let dictionary = Dictionary::from_words(DictionaryConfig::new(4), ["STAR", "RATS"]);
    /// let grid = Grid::parse(&["ST", "RA"]).unwrap();
    /// assert_eq!(grid.find_words(&dictionary), ["RATS", "STAR"]);
    /// ```
    #[must_use]
    pub fn find_words(&self, dictionary: &Dictionary) -> Vec<String> {
        let found: BTreeSet<String> = (0..self.len())
            .into_par_iter()
            .flat_map_iter(|index| self.words_from(self.cell_at(index), dictionary))
            .collect();

        debug!(
            "Grid {}x{}: {} words",
            self.rows(),
            self.cols(),
            found.len()
        );
        found.into_iter().collect()
    }

    fn words_from(&self, start: Cell, dictionary: &Dictionary) -> Vec<String> {
        let Some(node) = dictionary.root().child(self.byte_at(start)) else {
            return Vec::new();
        };

        let mut search = GridSearch {
            grid: self,
            visited: vec![false; self.len()],
            path: Vec::new(),
            min_length: dictionary.min_word_length(),
            found: Vec::new(),
        };
        search.descend(start, node);
        search.found
    }
}

struct GridSearch<'a> {
    grid: &'a Grid,
    visited: Vec<bool>,
    path: Vec<u8>,
    min_length: usize,
    found: Vec<String>,
}

impl GridSearch<'_> {
    fn descend(&mut self, cell: Cell, node: &TrieNode) {
        let index = self.grid.index(cell);
        self.visited[index] = true;
        self.path.push(self.grid.byte_at(cell));

        if node.is_terminal() && self.path.len() >= self.min_length {
            self.found
                .push(self.path.iter().copied().map(char::from).collect());
        }

        let grid = self.grid;
        for neighbour in grid.neighbours(cell) {
            if self.visited[grid.index(neighbour)] {
                continue;
            }
            if let Some(child) = node.child(grid.byte_at(neighbour)) {
                self.descend(neighbour, child);
            }
        }

        self.path.pop();
        self.visited[index] = false;
    }
}
