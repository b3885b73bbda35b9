//! Root word selection
//!
//! A `DictionarySource` holds the list of words a game can start from and
//! picks one at random for each new game.

use super::START_WORDS;
use super::loader::{load_from_file, words_from_slice};
use log::{debug, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Root used when there is nothing to choose from
pub const FALLBACK_ROOT: &str = "silkworm";

/// What to do when a word list file can't be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Log a warning and carry on with an empty list
    #[default]
    Fallback,
    /// Report the failure so the caller can refuse to start
    FailFast,
}

/// A word list that could not be loaded
#[derive(Debug)]
pub struct LoadError {
    path: PathBuf,
    source: io::Error,
}

impl LoadError {
    pub(crate) const fn new(path: PathBuf, source: io::Error) -> Self {
        Self { path, source }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not load {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Candidate root words for new games
#[derive(Debug, Clone, Default)]
pub struct DictionarySource {
    words: Vec<String>,
}

impl DictionarySource {
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// The root word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(START_WORDS))
    }

    /// Load the root word list from a file
    ///
    /// Under `LoadPolicy::Fallback` an unreadable file yields an empty source,
    /// which makes `pick_root` return `FALLBACK_ROOT`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the file can't be read and `policy` is
    /// `LoadPolicy::FailFast`.
    pub fn from_file<P: AsRef<Path>>(path: P, policy: LoadPolicy) -> Result<Self, LoadError> {
        let path = path.as_ref();
        match load_from_file(path) {
            Ok(words) => {
                debug!("loaded {} root words from {}", words.len(), path.display());
                Ok(Self::new(words))
            }
            Err(source) if policy == LoadPolicy::Fallback => {
                warn!(
                    "could not load {} ({source}); starting with '{FALLBACK_ROOT}'",
                    path.display()
                );
                Ok(Self::default())
            }
            Err(source) => Err(LoadError::new(path.to_path_buf(), source)),
        }
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a root word uniformly at random
    pub fn pick_root<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        pick_root(&self.words, rng)
    }
}

/// Pick one word uniformly at random, or `FALLBACK_ROOT` if `words` is empty
///
/// # Examples
/// ```
/// use word_scramble::wordlists::source::{FALLBACK_ROOT, pick_root};
///
/// let mut rng = rand::rng();
/// assert_eq!(pick_root(&[], &mut rng), FALLBACK_ROOT);
///
/// let words = vec!["blizzard".to_string()];
/// assert_eq!(pick_root(&words, &mut rng), "blizzard");
/// ```
pub fn pick_root<R: Rng + ?Sized>(words: &[String], rng: &mut R) -> String {
    words
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| FALLBACK_ROOT.to_string())
}
