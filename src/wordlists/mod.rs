//! Word lists for the puzzle dictionary
//!
//! Provides the embedded word list and the sources the dictionary loads from.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{EmbeddedSource, FileSource};
