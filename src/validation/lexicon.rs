//! Real-word lookup
//!
//! Defines the `Lexicon` trait the validator consults and a word-list backed
//! implementation.

use crate::wordlists::DICTIONARY;
use crate::wordlists::loader::load_from_file;
use log::debug;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::Path;

/// Language a lookup is made in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
}

impl Language {
    /// ISO 639-1 code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A source of truth for whether a word exists
pub trait Lexicon {
    /// Returns `true` if `word` is a correctly spelled word in `language`
    fn is_known_word(&self, word: &str, language: Language) -> bool;
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn is_known_word(&self, word: &str, language: Language) -> bool {
        (**self).is_known_word(word, language)
    }
}

/// Lexicon backed by an in-memory set of lowercase words
#[derive(Debug, Clone, Default)]
pub struct WordListLexicon {
    language: Language,
    words: FxHashSet<String>,
}

impl WordListLexicon {
    /// Build a lexicon from any collection of words
    ///
    /// Entries are trimmed and lowercased; blank entries are dropped.
    pub fn from_words<I, S>(language: Language, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { language, words }
    }

    /// The English dictionary compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use word_scramble::validation::{Language, Lexicon, WordListLexicon};
    ///
    /// let lexicon = WordListLexicon::embedded();
    /// assert!(lexicon.is_known_word("silk", Language::English));
    /// assert!(!lexicon.is_known_word("silkk", Language::English));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(Language::English, DICTIONARY.iter().copied())
    }

    /// Load an English dictionary from a newline-delimited file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let words = load_from_file(path)?;
        debug!("loaded {} dictionary words from {}", words.len(), path.display());
        Ok(Self::from_words(Language::English, words))
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Lexicon for WordListLexicon {
    fn is_known_word(&self, word: &str, language: Language) -> bool {
        language == self.language && self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn language_code() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::default().to_string(), "en");
    }

    #[test]
    fn from_words_normalizes_entries() {
        let lexicon = WordListLexicon::from_words(Language::English, ["  Silk", "WORM\r", "", "  "]);
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.is_known_word("silk", Language::English));
        assert!(lexicon.is_known_word("worm", Language::English));
    }

    #[test]
    fn lookup_is_case_sensitive_on_query() {
        let lexicon = WordListLexicon::from_words(Language::English, ["silk"]);
        assert!(!lexicon.is_known_word("SILK", Language::English));
    }

    #[test]
    fn embedded_dictionary_is_populated() {
        let lexicon = WordListLexicon::embedded();
        assert!(!lexicon.is_empty());
        assert_eq!(lexicon.language(), Language::English);
        for word in ["silkworm", "worm", "milk", "owl", "slow"] {
            assert!(
                lexicon.is_known_word(word, Language::English),
                "'{word}' missing from embedded dictionary"
            );
        }
    }

    #[test]
    fn reference_implements_lexicon() {
        fn known<L: Lexicon>(lexicon: L, word: &str) -> bool {
            lexicon.is_known_word(word, Language::English)
        }
        let lexicon = WordListLexicon::from_words(Language::English, ["kiln"]);
        assert!(known(&lexicon, "kiln"));
        assert!(!known(&lexicon, "kilt"));
    }

    #[test]
    fn from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "silk\nworm\n\nmilk").unwrap();

        let lexicon = WordListLexicon::from_file(file.path()).unwrap();
        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.is_known_word("milk", Language::English));
    }

    #[test]
    fn from_file_missing_is_error() {
        assert!(WordListLexicon::from_file("/definitely/not/here.txt").is_err());
    }
}
