//! Rack tile representation

use std::fmt;

/// Character that marks a wildcard tile in racks and patterns
pub const WILDCARD: char = '*';

/// A single rack tile: a literal letter or a wildcard
///
/// Letters are always stored as uppercase ASCII bytes (`b'A'..=b'Z'`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tile {
    Letter(u8),
    Wildcard,
}

impl Tile {
    /// Parse a tile from a character
    ///
    /// Letters of either case become uppercase letter tiles; `*` is a wildcard.
    /// Anything else returns `None`.
    ///
    /// # Examples
    /// ```
    /// use word_puzzle::core::Tile;
    ///
    /// assert_eq!(Tile::from_char('s'), Some(Tile::Letter(b'S')));
    /// assert_eq!(Tile::from_char('*'), Some(Tile::Wildcard));
    /// assert_eq!(Tile::from_char('3'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if c == WILDCARD {
            Some(Self::Wildcard)
        } else if c.is_ascii_alphabetic() {
            Some(Self::Letter(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// The letter on this tile, or `None` for a wildcard
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<u8> {
        match self {
            Self::Letter(letter) => Some(letter),
            Self::Wildcard => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// The character this tile displays as
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Letter(letter) => char::from(letter),
            Self::Wildcard => WILDCARD,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_letters_are_uppercased() {
        assert_eq!(Tile::from_char('a'), Some(Tile::Letter(b'A')));
        assert_eq!(Tile::from_char('Z'), Some(Tile::Letter(b'Z')));
    }

    #[test]
    fn wildcard_and_invalid_chars() {
        assert_eq!(Tile::from_char('*'), Some(Tile::Wildcard));
        assert_eq!(Tile::from_char('?'), None);
        assert_eq!(Tile::from_char(' '), None);
        assert_eq!(Tile::from_char('é'), None);
    }

    #[test]
    fn letter_accessor() {
        assert_eq!(Tile::Letter(b'Q').letter(), Some(b'Q'));
        assert_eq!(Tile::Wildcard.letter(), None);
        assert!(Tile::Wildcard.is_wildcard());
        assert!(!Tile::Letter(b'Q').is_wildcard());
    }

    #[test]
    fn tile_display() {
        assert_eq!(Tile::Letter(b'R').to_string(), "R");
        assert_eq!(Tile::Wildcard.to_string(), "*");
    }
}
