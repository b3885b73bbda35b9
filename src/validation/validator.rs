//! Word validation
//!
//! Runs the checks a submitted word must pass, in a fixed order:
//! 1. Originality: not already accepted
//! 2. Feasibility: spellable from the root's letters
//! 3. Length and identity: at least three letters and not the root itself
//! 4. Real word: known to the lexicon
//!
//! The first failing check decides the rejection.

use super::lexicon::{Language, Lexicon};
use crate::core::{Candidate, NotRealCause, Rejection, is_sub_multiset};
use log::trace;

/// Shortest word that can be accepted
pub const MIN_WORD_LENGTH: usize = 3;

/// A candidate that passed every check
///
/// Only the validator creates these, so an `Accepted` is proof that the word
/// was checked against the root and accepted list it was submitted with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    word: String,
    root: String,
}

impl Accepted {
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Root word the candidate was checked against
    #[inline]
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    #[must_use]
    pub fn into_word(self) -> String {
        self.word
    }
}

/// Validates candidates against a root word using a lexicon
#[derive(Debug, Clone)]
pub struct Validator<L> {
    lexicon: L,
    language: Language,
}

impl<L: Lexicon> Validator<L> {
    /// Create a validator that checks English words
    #[must_use]
    pub const fn new(lexicon: L) -> Self {
        Self {
            lexicon,
            language: Language::English,
        }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &L {
        &self.lexicon
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Decide whether `candidate` is acceptable
    ///
    /// Pure: the outcome depends only on the arguments and the lexicon, and
    /// nothing is mutated.
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` of the first check that fails.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Candidate, Rejection};
    /// use word_scramble::validation::{Language, Validator, WordListLexicon};
    ///
    /// let lexicon = WordListLexicon::from_words(Language::English, ["silk", "worm"]);
    /// let validator = Validator::new(lexicon);
    ///
    /// let silk = Candidate::parse("silk").unwrap();
    /// assert!(validator.validate("silkworm", &[], &silk).is_ok());
    ///
    /// let used = vec!["silk".to_string()];
    /// assert_eq!(
    ///     validator.validate("silkworm", &used, &silk),
    ///     Err(Rejection::AlreadyUsed)
    /// );
    /// ```
    pub fn validate(
        &self,
        root: &str,
        used: &[String],
        candidate: &Candidate,
    ) -> Result<Accepted, Rejection> {
        let word = candidate.text();

        if !is_original(used, word) {
            return Err(Rejection::AlreadyUsed);
        }

        if !is_possible(root, word) {
            return Err(Rejection::NotPossible {
                root: root.to_string(),
            });
        }

        if let Some(cause) = self.not_real_cause(root, candidate) {
            trace!("'{word}' rejected as not real: {cause}");
            return Err(Rejection::NotReal { cause });
        }

        Ok(Accepted {
            word: word.to_string(),
            root: root.to_string(),
        })
    }

    fn not_real_cause(&self, root: &str, candidate: &Candidate) -> Option<NotRealCause> {
        if candidate.char_count() < MIN_WORD_LENGTH {
            Some(NotRealCause::TooShort)
        } else if candidate.text() == root {
            Some(NotRealCause::SameAsRoot)
        } else if !self.lexicon.is_known_word(candidate.text(), self.language) {
            Some(NotRealCause::Unrecognized)
        } else {
            None
        }
    }
}

/// `true` if `word` hasn't been accepted yet
#[must_use]
pub fn is_original(used: &[String], word: &str) -> bool {
    !used.iter().any(|w| w == word)
}

/// `true` if `word` can be spelled from the letters of `root`
#[must_use]
pub fn is_possible(root: &str, word: &str) -> bool {
    is_sub_multiset(root, word)
}
