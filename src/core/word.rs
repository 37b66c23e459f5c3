//! Word normalization
//!
//! Every lookup in the crate is case-insensitive; words are compared in their
//! trimmed uppercase form.

/// Normalize a word for dictionary storage or lookup
///
/// # Examples
/// ```
/// use word_puzzle::core::normalize;
///
/// assert_eq!(normalize("  Star\r"), "STAR");
/// ```
#[must_use]
pub fn normalize(word: &str) -> String {
    word.trim().to_ascii_uppercase()
}

/// Check that a normalized word only uses the letters A-Z
#[inline]
#[must_use]
pub fn is_alphabetic(word: &str) -> bool {
    word.bytes().all(|b| b.is_ascii_uppercase())
}
