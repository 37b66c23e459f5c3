//! Prefix tree over the letters A-Z

use rustc_hash::FxHashMap;

/// A trie node: children keyed by uppercase ASCII letter plus a word flag
#[derive(Debug, Default, Clone)]
pub(crate) struct TrieNode {
    children: FxHashMap<u8, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// Insert a word below this node, creating nodes as needed
    ///
    /// Returns `true` if the word was not already present.
    pub(crate) fn insert(&mut self, word: &[u8]) -> bool {
        let mut node = self;
        for &letter in word {
            node = node.children.entry(letter).or_default();
        }
        let added = !node.terminal;
        node.terminal = true;
        added
    }

    #[inline]
    pub(crate) fn child(&self, letter: u8) -> Option<&Self> {
        self.children.get(&letter)
    }

    pub(crate) fn children(&self) -> impl Iterator<Item = (u8, &Self)> {
        self.children.iter().map(|(&letter, child)| (letter, child))
    }

    /// Follow `prefix` from this node
    pub(crate) fn walk(&self, prefix: &[u8]) -> Option<&Self> {
        prefix
            .iter()
            .try_fold(self, |node, &letter| node.child(letter))
    }

    #[inline]
    pub(crate) const fn is_terminal(&self) -> bool {
        self.terminal
    }
}
