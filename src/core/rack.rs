//! Letter rack
//!
//! A rack is an ordered sequence of tiles. Repeated letters are distinct
//! positions, each usable once.

use super::tile::Tile;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for rack input that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RackError {
    #[error("invalid rack token '{token}' at position {position} (expected A-Z or '*')")]
    InvalidToken { token: char, position: usize },
}

/// The tiles available for a puzzle round
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl Rack {
    #[must_use]
    pub const fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Parse a rack from user input
    ///
    /// Accepts letters of either case and `*`. Whitespace, commas and hyphens
    /// may separate tokens and are skipped.
    ///
    /// # Errors
    /// Returns `RackError::InvalidToken` for any other character.
    ///
    /// # Examples
    /// ```
    /// use word_puzzle::core::{Rack, Tile};
    ///
    /// let rack = Rack::parse("s, t, a, *").unwrap();
    /// assert_eq!(rack.len(), 4);
    /// assert_eq!(rack.tiles()[3], Tile::Wildcard);
    ///
    /// assert!(Rack::parse("st4r").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, RackError> {
        input
            .chars()
            .enumerate()
            .filter(|(_, c)| !is_separator(*c))
            .map(|(position, c)| {
                Tile::from_char(c).ok_or(RackError::InvalidToken { token: c, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of wildcard tiles on the rack
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_wildcard()).count()
    }

    /// Per-letter tile counts, indexed by `letter - b'A'`
    #[must_use]
    pub fn letter_counts(&self) -> [usize; 26] {
        let mut counts = [0usize; 26];
        for letter in self.tiles.iter().filter_map(|tile| tile.letter()) {
            counts[usize::from(letter - b'A')] += 1;
        }
        counts
    }

    /// A copy of the rack with its tiles in random order
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.shuffle(rng);
        Self::new(tiles)
    }
}

const fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || matches!(c, ',' | '-')
}

impl FromStr for Rack {
    type Err = RackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromIterator<Tile> for Rack {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            write!(f, "{tile}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_plain_letters() {
        let rack = Rack::parse("star").unwrap();
        assert_eq!(
            rack.tiles(),
            &[
                Tile::Letter(b'S'),
                Tile::Letter(b'T'),
                Tile::Letter(b'A'),
                Tile::Letter(b'R')
            ]
        );
    }

    #[test]
    fn parse_skips_separators() {
        let spaced = Rack::parse("S T A R * E D").unwrap();
        let commas = Rack::parse("s,t,a,r,*,e,d").unwrap();
        let dashed = Rack::parse("star-*ed").unwrap();
        assert_eq!(spaced, commas);
        assert_eq!(spaced, dashed);
        assert_eq!(spaced.to_string(), "STAR*ED");
    }

    #[test]
    fn parse_reports_invalid_token_position() {
        assert_eq!(
            Rack::parse("ab?d"),
            Err(RackError::InvalidToken {
                token: '?',
                position: 2
            })
        );
    }

    #[test]
    fn parse_empty_rack() {
        let rack = Rack::parse("   ").unwrap();
        assert!(rack.is_empty());
        assert_eq!(rack.len(), 0);
    }

    #[test]
    fn duplicate_letters_are_separate_tiles() {
        let rack = Rack::parse("STARS").unwrap();
        assert_eq!(rack.len(), 5);
        let counts = rack.letter_counts();
        assert_eq!(counts[usize::from(b'S' - b'A')], 2);
        assert_eq!(counts[usize::from(b'T' - b'A')], 1);
    }

    #[test]
    fn wildcard_count() {
        let rack = Rack::parse("**a*").unwrap();
        assert_eq!(rack.wildcard_count(), 3);
        assert_eq!(rack.letter_counts().iter().sum::<usize>(), 1);
    }

    #[test]
    fn shuffled_keeps_the_same_tiles() {
        let rack = Rack::parse("STAREDLINS").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = rack.shuffled(&mut rng);

        let mut original: Vec<Tile> = rack.tiles().to_vec();
        let mut mixed: Vec<Tile> = shuffled.tiles().to_vec();
        original.sort();
        mixed.sort();
        assert_eq!(original, mixed);
    }

    #[test]
    fn from_str_and_collect() {
        let parsed: Rack = "ab*".parse().unwrap();
        let collected: Rack = "AB*".chars().filter_map(Tile::from_char).collect();
        assert_eq!(parsed, collected);
    }
}
