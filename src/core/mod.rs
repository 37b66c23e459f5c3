//! Core domain types for word puzzles
//!
//! Tiles, racks and word normalization. Nothing here knows about the dictionary;
//! these are the plain values every other module passes around.

mod rack;
mod tile;
mod word;

pub use rack::{Rack, RackError};
pub use tile::{Tile, WILDCARD};
pub use word::{is_alphabetic, normalize};
