//! Single-query commands
//!
//! Word, prefix, feasibility and pattern lookups against the dictionary.

use crate::core::{Rack, RackError, normalize};
use crate::dictionary::{Dictionary, Formation, PatternMatch, can_form_word};

/// Result of checking a word
pub struct WordCheck {
    pub word: String,
    pub valid: bool,
    /// Whether longer dictionary words continue this one
    pub extendable: bool,
}

/// Check a word against the dictionary
#[must_use]
pub fn check_word(dictionary: &Dictionary, word: &str) -> WordCheck {
    let word = normalize(word);
    let valid = dictionary.is_valid_word(&word);
    let extendable = (b'A'..=b'Z')
        .any(|letter| dictionary.has_prefix(&format!("{word}{}", char::from(letter))));

    WordCheck {
        word,
        valid,
        extendable,
    }
}

/// Result of checking a prefix
pub struct PrefixCheck {
    pub prefix: String,
    pub matches: bool,
    /// The first few words starting with the prefix, sorted
    pub examples: Vec<String>,
    /// Total number of words starting with the prefix
    pub total: usize,
}

/// Check whether any dictionary word starts with `prefix`
#[must_use]
pub fn check_prefix(dictionary: &Dictionary, prefix: &str, limit: usize) -> PrefixCheck {
    let prefix = normalize(prefix);
    let matches = dictionary.has_prefix(&prefix);

    let words: Vec<&str> = if matches {
        dictionary
            .sorted_words()
            .into_iter()
            .filter(|word| word.starts_with(prefix.as_str()))
            .collect()
    } else {
        Vec::new()
    };

    PrefixCheck {
        matches,
        total: words.len(),
        examples: words.into_iter().take(limit).map(str::to_string).collect(),
        prefix,
    }
}

/// Result of checking whether a rack can spell a word
pub struct FormCheck {
    pub rack: Rack,
    pub word: String,
    pub formation: Option<Formation>,
    pub in_dictionary: bool,
}

/// Check whether `word` can be spelled from `rack`
///
/// # Errors
///
/// Returns an error if the rack contains characters other than letters and `*`.
pub fn form_word(dictionary: &Dictionary, rack: &str, word: &str) -> Result<FormCheck, RackError> {
    let rack = Rack::parse(rack)?;
    let word = normalize(word);

    Ok(FormCheck {
        formation: can_form_word(&rack, &word),
        in_dictionary: dictionary.is_valid_word(&word),
        rack,
        word,
    })
}

/// Result of resolving a wildcard pattern
pub struct PatternCheck {
    pub pattern: String,
    pub found: Option<PatternMatch>,
}

/// Resolve a pattern with one `*` to the first matching word
#[must_use]
pub fn match_pattern(dictionary: &Dictionary, pattern: &str) -> PatternCheck {
    PatternCheck {
        pattern: normalize(pattern),
        found: dictionary.match_word_pattern(pattern),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::tests::sample_dictionary;

    #[test]
    fn check_valid_and_extendable_word() {
        let result = check_word(&sample_dictionary(), "star");
        assert_eq!(result.word, "STAR");
        assert!(result.valid);
        assert!(result.extendable); // STARE, STARS, STARED
    }

    #[test]
    fn check_final_word() {
        let result = check_word(&sample_dictionary(), "stared");
        assert!(result.valid);
        assert!(!result.extendable);
    }

    #[test]
    fn prefix_examples_are_limited() {
        let result = check_prefix(&sample_dictionary(), "sta", 2);
        assert!(result.matches);
        assert_eq!(result.total, 4);
        assert_eq!(result.examples, vec!["STAR", "STARE"]);
    }

    #[test]
    fn missing_prefix() {
        let result = check_prefix(&sample_dictionary(), "zz", 5);
        assert!(!result.matches);
        assert_eq!(result.total, 0);
        assert!(result.examples.is_empty());
    }

    #[test]
    fn form_word_with_wildcard() {
        let result = form_word(&sample_dictionary(), "sta*", "star").unwrap();
        assert!(result.in_dictionary);
        let formation = result.formation.unwrap();
        assert_eq!(formation.first_wildcard().map(|w| w.letter), Some('R'));
    }

    #[test]
    fn form_word_rejects_bad_rack() {
        assert!(form_word(&sample_dictionary(), "st4r", "star").is_err());
    }

    #[test]
    fn pattern_lookup() {
        let result = match_pattern(&sample_dictionary(), "s*ar");
        assert_eq!(result.pattern, "S*AR");
        assert_eq!(result.found.map(|m| m.word), Some("STAR".to_string()));
    }
}
