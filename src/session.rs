//! Game session state
//!
//! A `Session` owns the current root word and the words accepted so far.
//! Front ends hold one session and route every player action through it.

use crate::core::{Candidate, Rejection};
use crate::validation::{Accepted, Lexicon, Validator};
use crate::wordlists::{DictionarySource, FALLBACK_ROOT};
use log::{debug, info, warn};
use rand::Rng;

/// What happened to one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input was blank after trimming
    Ignored,
    /// The word was accepted and recorded
    Accepted(String),
    /// The word was turned down
    Rejected(Rejection),
}

/// Root word plus the accepted words, most recent first
pub struct Session<L> {
    validator: Validator<L>,
    root: String,
    accepted: Vec<String>,
}

impl<L: Lexicon> Session<L> {
    /// Start a session on a given root word
    ///
    /// The root is trimmed and lowercased; a blank root becomes `FALLBACK_ROOT`.
    #[must_use]
    pub fn new(validator: Validator<L>, root: impl AsRef<str>) -> Self {
        let root = normalize_root(root.as_ref());
        info!("new game with root '{root}'");
        Self {
            validator,
            root,
            accepted: Vec::new(),
        }
    }

    /// Start a session on a random root from `source`
    pub fn start<R: Rng + ?Sized>(
        validator: Validator<L>,
        source: &DictionarySource,
        rng: &mut R,
    ) -> Self {
        Self::new(validator, source.pick_root(rng))
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    /// Validate a candidate against the current state without recording it
    ///
    /// # Errors
    ///
    /// Returns the reason the candidate was rejected.
    pub fn submit(&self, candidate: &Candidate) -> Result<Accepted, Rejection> {
        self.validator.validate(&self.root, &self.accepted, candidate)
    }

    /// Put a validated word at the front of the accepted list
    ///
    /// A word that is already present is left where it is. A word validated
    /// against a different root, e.g. before a `reset`, is dropped.
    pub fn record_accepted(&mut self, accepted: Accepted) {
        if accepted.root() != self.root {
            warn!(
                "'{}' was checked against '{}', not '{}'",
                accepted.word(),
                accepted.root(),
                self.root
            );
            return;
        }
        if self.accepted.iter().any(|w| w == accepted.word()) {
            warn!("'{}' already recorded", accepted.word());
            return;
        }
        self.accepted.insert(0, accepted.into_word());
    }

    /// Replace the root word and forget every accepted word
    pub fn reset(&mut self, root: impl AsRef<str>) {
        self.root = normalize_root(root.as_ref());
        self.accepted.clear();
        info!("new game with root '{}'", self.root);
    }

    /// Start over on a fresh random root
    pub fn new_game<R: Rng + ?Sized>(&mut self, source: &DictionarySource, rng: &mut R) -> &str {
        self.reset(source.pick_root(rng));
        &self.root
    }

    /// Normalize, validate and record raw input in one step
    ///
    /// # Examples
    /// ```
    /// use word_scramble::session::{Outcome, Session};
    /// use word_scramble::validation::{Language, Validator, WordListLexicon};
    ///
    /// let lexicon = WordListLexicon::from_words(Language::English, ["silk"]);
    /// let mut session = Session::new(Validator::new(lexicon), "silkworm");
    ///
    /// assert_eq!(session.play(" SILK "), Outcome::Accepted("silk".to_string()));
    /// assert_eq!(session.play("   "), Outcome::Ignored);
    /// assert_eq!(session.accepted(), ["silk"]);
    /// ```
    pub fn play(&mut self, raw: &str) -> Outcome {
        let Some(candidate) = Candidate::parse(raw) else {
            return Outcome::Ignored;
        };

        match self.submit(&candidate) {
            Ok(accepted) => {
                debug!("accepted '{}'", accepted.word());
                let word = accepted.word().to_string();
                self.record_accepted(accepted);
                Outcome::Accepted(word)
            }
            Err(rejection) => {
                debug!("rejected '{candidate}': {rejection}");
                Outcome::Rejected(rejection)
            }
        }
    }
}

/// Lowercase and trim a root, or fall back to `FALLBACK_ROOT` if it is blank
fn normalize_root(root: &str) -> String {
    Candidate::parse(root).map_or_else(
        || {
            warn!("blank root word; using '{FALLBACK_ROOT}'");
            FALLBACK_ROOT.to_string()
        },
        Candidate::into_inner,
    )
}
