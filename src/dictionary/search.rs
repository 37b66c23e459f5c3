//! Rack word discovery
//!
//! Depth-first search that walks the trie and the unused rack tiles together.
//! A letter tile may only follow an existing trie edge; a wildcard follows
//! every edge of the current node, so dead branches are never entered.

use super::Dictionary;
use super::trie::TrieNode;
use crate::core::{Rack, Tile};
use log::debug;
use std::collections::BTreeSet;

impl Dictionary {
    /// Find every dictionary word that can be spelled from the rack
    ///
    /// Each tile is used at most once per word; a wildcard stands for any one
    /// letter. Results are deduplicated, at least the dictionary's minimum
    /// length, and sorted ascending.
    ///
    /// The search is exponential in rack size and intended for racks of about
    /// ten tiles.
    ///
    /// # Examples
    /// ```
    /// use word_puzzle::core::Rack;
    /// use word_puzzle::dictionary::{Dictionary, DictionaryConfig};
    ///
    /// let dictionary =
    ///     Dictionary::from_words(DictionaryConfig::new(4), ["star", "tars", "rats", "arts"]);
    /// let rack = Rack::parse("STAR").unwrap();
    ///
    /// assert_eq!(dictionary.find_all_words(&rack), ["ARTS", "RATS", "STAR", "TARS"]);
    /// ```
    #[must_use]
    pub fn find_all_words(&self, rack: &Rack) -> Vec<String> {
        let mut search = RackSearch::new(rack.tiles(), self.min_word_length());
        search.descend(self.root());

        debug!(
            "Rack {rack}: {} words from {} visited nodes",
            search.found.len(),
            search.visited
        );
        search.found.into_iter().collect()
    }
}

struct RackSearch<'a> {
    tiles: &'a [Tile],
    used: Vec<bool>,
    path: Vec<u8>,
    min_length: usize,
    found: BTreeSet<String>,
    visited: usize,
}

impl<'a> RackSearch<'a> {
    fn new(tiles: &'a [Tile], min_length: usize) -> Self {
        Self {
            tiles,
            used: vec![false; tiles.len()],
            path: Vec::with_capacity(tiles.len()),
            min_length,
            found: BTreeSet::new(),
            visited: 0,
        }
    }

    fn descend(&mut self, node: &TrieNode) {
        self.visited += 1;
        if node.is_terminal() && self.path.len() >= self.min_length {
            self.found
                .insert(self.path.iter().copied().map(char::from).collect());
        }

        // Identical tiles at the same depth lead to identical subtrees
        let mut tried = Vec::with_capacity(self.tiles.len());

        for index in 0..self.tiles.len() {
            let tile = self.tiles[index];
            if self.used[index] || tried.contains(&tile) {
                continue;
            }
            tried.push(tile);

            self.used[index] = true;
            match tile {
                Tile::Letter(letter) => {
                    if let Some(child) = node.child(letter) {
                        self.step(letter, child);
                    }
                }
                Tile::Wildcard => {
                    for (letter, child) in node.children() {
                        self.step(letter, child);
                    }
                }
            }
            self.used[index] = false;
        }
    }

    fn step(&mut self, letter: u8, child: &TrieNode) {
        self.path.push(letter);
        self.descend(child);
        self.path.pop();
    }
}
