//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_catalog_report, print_find_result, print_form_check, print_grid_result,
    print_pattern_check, print_prefix_check, print_word_check,
};
