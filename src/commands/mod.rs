//! Command implementations

pub mod catalog;
pub mod find;
pub mod grid;
pub mod lookup;
pub mod play;

pub use catalog::{CatalogReport, CrosswordReport, GridReport, RearrangeReport, solve_catalog};
pub use find::{FindResult, find_words};
pub use grid::{GridResult, solve_grid};
pub use lookup::{
    FormCheck, PatternCheck, PrefixCheck, WordCheck, check_prefix, check_word, form_word,
    match_pattern,
};
pub use play::run_play;
