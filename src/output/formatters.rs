//! Formatting utilities for terminal output

use crate::core::Rack;
use std::collections::BTreeMap;

/// Format a rack with spaces between tiles
#[must_use]
pub fn format_rack(rack: &Rack) -> String {
    rack.tiles()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Group words by length, longest first
#[must_use]
pub fn group_by_length<S: AsRef<str>>(words: &[S]) -> Vec<(usize, Vec<&str>)> {
    let mut groups: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for word in words {
        let word = word.as_ref();
        groups.entry(word.len()).or_default().push(word);
    }
    groups.into_iter().rev().collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "█".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    #[allow(clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing `found` out of `goal` words
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn goal_bar(found: usize, goal: usize, width: usize) -> String {
    format!(
        "{} {}/{}",
        create_progress_bar(found as f64, goal as f64, width),
        found.min(goal),
        goal
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rack_is_spaced() {
        let rack = Rack::parse("st*r").unwrap();
        assert_eq!(format_rack(&rack), "S T * R");
    }

    #[test]
    fn groups_longest_first() {
        let words = ["STAR", "TRADES", "STARE", "RATS", "TEARS"];
        let groups = group_by_length(&words);
        assert_eq!(
            groups,
            vec![
                (6, vec!["TRADES"]),
                (5, vec!["STARE", "TEARS"]),
                (4, vec!["STAR", "RATS"]),
            ]
        );
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn goal_bar_caps_count() {
        assert_eq!(goal_bar(3, 2, 4), "████ 2/2");
        assert_eq!(goal_bar(0, 0, 4), "████ 0/0");
    }
}
