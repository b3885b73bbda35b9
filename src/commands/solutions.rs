//! Solutions command
//!
//! Lists every dictionary word a player could get accepted for a root word.

use crate::core::Candidate;
use crate::validation::{Accepted, Validator, WordListLexicon};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Every acceptable word for one root
pub struct SolutionsResult {
    pub root: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
}

impl SolutionsResult {
    /// Number of solutions for each word length, shortest first
    #[must_use]
    pub fn by_length(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for word in &self.words {
            *counts.entry(word.chars().count()).or_insert(0) += 1;
        }
        counts
    }

    #[must_use]
    pub fn longest(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }
}

/// Find all words in `lexicon` that would be accepted for `root` in a fresh game
///
/// # Examples
/// ```
/// use word_scramble::commands::find_solutions;
/// use word_scramble::validation::{Language, WordListLexicon};
///
/// let lexicon = WordListLexicon::from_words(Language::English, ["silk", "milk", "mill", "ox"]);
/// let result = find_solutions("silkworm", &lexicon);
/// assert_eq!(result.words, vec!["milk", "silk"]);
/// ```
#[must_use]
pub fn find_solutions(root: &str, lexicon: &WordListLexicon) -> SolutionsResult {
    let root = root.trim().to_lowercase();
    let validator = Validator::new(lexicon);
    let dictionary: Vec<&str> = lexicon.words().collect();

    let mut words: Vec<String> = dictionary
        .par_iter()
        .filter_map(|&word| {
            let candidate = Candidate::parse(word)?;
            validator
                .validate(&root, &[], &candidate)
                .ok()
                .map(Accepted::into_word)
        })
        .collect();

    words.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    SolutionsResult { root, words }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Language;

    fn lexicon() -> WordListLexicon {
        WordListLexicon::from_words(
            Language::English,
            [
                "silkworm", "silk", "worm", "worms", "milk", "owl", "slow", "mill", "sw", "word",
            ],
        )
    }

    #[test]
    fn finds_only_acceptable_words() {
        let result = find_solutions("silkworm", &lexicon());
        assert_eq!(
            result.words,
            vec!["worms", "milk", "silk", "slow", "worm", "owl"]
        );
    }

    #[test]
    fn excludes_root_short_and_infeasible() {
        let result = find_solutions("silkworm", &lexicon());
        for excluded in ["silkworm", "sw", "mill", "word"] {
            assert!(!result.words.iter().any(|w| w == excluded), "{excluded}");
        }
    }

    #[test]
    fn normalizes_root() {
        let result = find_solutions("  SilkWorm ", &lexicon());
        assert_eq!(result.root, "silkworm");
        assert!(!result.words.is_empty());
    }

    #[test]
    fn length_histogram() {
        let result = find_solutions("silkworm", &lexicon());
        let counts = result.by_length();
        assert_eq!(counts.get(&3), Some(&1));
        assert_eq!(counts.get(&4), Some(&4));
        assert_eq!(counts.get(&5), Some(&1));
        assert_eq!(result.longest(), Some("worms"));
    }

    #[test]
    fn root_with_no_solutions() {
        let result = find_solutions("zzz", &lexicon());
        assert!(result.words.is_empty());
        assert_eq!(result.longest(), None);
    }
}
