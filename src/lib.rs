//! Word Puzzle
//!
//! A trie-backed word discovery engine for rack, grid and pattern word puzzles.
//!
//! # Quick Start
//!
//! ```rust
//! use word_puzzle::core::Rack;
//! use word_puzzle::dictionary::{Dictionary, DictionaryConfig, can_form_word};
//!
//! let dictionary = Dictionary::from_text(DictionaryConfig::new(4), "star\nrats\ntrade\n");
//! assert!(dictionary.is_valid_word("star"));
//! assert!(dictionary.has_prefix("TRA"));
//!
//! // Every word the rack can spell, sorted
//! let rack = Rack::parse("ST*R").unwrap();
//! assert_eq!(dictionary.find_all_words(&rack), vec!["RATS", "STAR"]);
//!
//! // Feasibility without the dictionary
//! assert!(can_form_word(&rack, "STAR").is_some());
//!
//! // One marker, resolved to the first matching letter
//! let found = dictionary.match_word_pattern("R*TS").unwrap();
//! assert_eq!(found.word, "RATS");
//! ```

// Core domain types
pub mod core;

// Dictionary engine
pub mod dictionary;

// Word lists
pub mod wordlists;

// Letter grids
pub mod grid;

// Puzzle rounds
pub mod puzzles;

// Round progress
pub mod progress;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
