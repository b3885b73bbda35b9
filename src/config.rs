//! Runtime configuration
//!
//! Gathers where word lists come from, how load failures are handled, and how
//! root words are randomized.

use crate::validation::WordListLexicon;
use crate::wordlists::{DictionarySource, LoadError, LoadPolicy};
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Where a word list is read from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordSource {
    /// The list compiled into the binary
    #[default]
    Embedded,
    /// A newline-delimited file
    File(PathBuf),
}

impl WordSource {
    /// Parse a command-line value: `embedded` or a file path
    ///
    /// # Examples
    /// ```
    /// use std::path::PathBuf;
    /// use word_scramble::config::WordSource;
    ///
    /// assert_eq!(WordSource::from_arg("embedded"), WordSource::Embedded);
    /// assert_eq!(
    ///     WordSource::from_arg("words.txt"),
    ///     WordSource::File(PathBuf::from("words.txt"))
    /// );
    /// ```
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        match value {
            "embedded" | "" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Settings for a game or analysis run
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub start_words: WordSource,
    pub dictionary: WordSource,
    pub load_policy: LoadPolicy,
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Random source for picking roots, reproducible when a seed is set
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Load the root word list
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if a file source can't be read under
    /// `LoadPolicy::FailFast`.
    pub fn load_start_words(&self) -> Result<DictionarySource, LoadError> {
        match &self.start_words {
            WordSource::Embedded => Ok(DictionarySource::embedded()),
            WordSource::File(path) => DictionarySource::from_file(path, self.load_policy),
        }
    }

    /// Load the lexicon used for the real-word check
    ///
    /// Under `LoadPolicy::Fallback` an unreadable file falls back to the
    /// embedded dictionary.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if a file source can't be read under
    /// `LoadPolicy::FailFast`.
    pub fn load_lexicon(&self) -> Result<WordListLexicon, LoadError> {
        match &self.dictionary {
            WordSource::Embedded => Ok(WordListLexicon::embedded()),
            WordSource::File(path) => match WordListLexicon::from_file(path) {
                Ok(lexicon) => Ok(lexicon),
                Err(source) if self.load_policy == LoadPolicy::Fallback => {
                    warn!(
                        "could not load dictionary {} ({source}); using the built-in one",
                        path.display()
                    );
                    Ok(WordListLexicon::embedded())
                }
                Err(source) => Err(LoadError::new(path.clone(), source)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Language, Lexicon};
    use crate::wordlists::START_WORDS;
    use std::io::Write;

    #[test]
    fn default_uses_embedded_lists() {
        let config = GameConfig::default();
        assert_eq!(config.start_words, WordSource::Embedded);
        assert_eq!(config.dictionary, WordSource::Embedded);
        assert_eq!(config.load_policy, LoadPolicy::Fallback);

        let source = config.load_start_words().unwrap();
        assert_eq!(source.len(), START_WORDS.len());
        assert!(config.load_lexicon().unwrap().is_known_word("silk", Language::English));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = GameConfig {
            seed: Some(99),
            ..GameConfig::default()
        };
        let source = config.load_start_words().unwrap();
        assert_eq!(
            source.pick_root(&mut config.rng()),
            source.pick_root(&mut config.rng())
        );
    }

    #[test]
    fn dictionary_file_is_used() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "zyzzyva").unwrap();

        let config = GameConfig {
            dictionary: WordSource::File(file.path().to_path_buf()),
            ..GameConfig::default()
        };
        let lexicon = config.load_lexicon().unwrap();
        assert!(lexicon.is_known_word("zyzzyva", Language::English));
        assert!(!lexicon.is_known_word("silk", Language::English));
    }

    #[test]
    fn missing_dictionary_falls_back_to_embedded() {
        let config = GameConfig {
            dictionary: WordSource::from_arg("/no/such/dictionary.txt"),
            ..GameConfig::default()
        };
        let lexicon = config.load_lexicon().unwrap();
        assert!(lexicon.is_known_word("silk", Language::English));
    }

    #[test]
    fn strict_mode_reports_missing_files() {
        let config = GameConfig {
            start_words: WordSource::from_arg("/no/such/start.txt"),
            dictionary: WordSource::from_arg("/no/such/dictionary.txt"),
            load_policy: LoadPolicy::FailFast,
            seed: None,
        };
        assert!(config.load_start_words().is_err());
        assert!(config.load_lexicon().is_err());
    }
}
