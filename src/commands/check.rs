//! One-shot word check
//!
//! Validates a single word against a root and a list of already used words.

use crate::core::{Candidate, Rejection};
use crate::validation::{Accepted, Lexicon, Validator};
use crate::wordlists::DictionarySource;
use rand::Rng;

/// Input for a single check
pub struct CheckConfig {
    pub word: String,
    /// Root to check against; a random one is picked when absent
    pub root: Option<String>,
    pub used: Vec<String>,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(word: String) -> Self {
        Self {
            word,
            root: None,
            used: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    #[must_use]
    pub fn with_used(mut self, used: Vec<String>) -> Self {
        self.used = used;
        self
    }
}

/// Result of a single check
pub struct CheckResult {
    pub root: String,
    pub word: String,
    pub used: Vec<String>,
    pub outcome: Result<Accepted, Rejection>,
}

impl CheckResult {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Check one word
///
/// Word, root and used words are normalized the same way player input is.
///
/// # Errors
///
/// Returns an error if the word or the given root is blank.
pub fn check_word<L: Lexicon, R: Rng + ?Sized>(
    config: CheckConfig,
    validator: &Validator<L>,
    source: &DictionarySource,
    rng: &mut R,
) -> Result<CheckResult, String> {
    let candidate = Candidate::parse(&config.word).ok_or("Nothing to check: word is blank")?;

    let root = match config.root {
        Some(root) => Candidate::parse(&root)
            .ok_or("Root word is blank")?
            .into_inner(),
        None => source.pick_root(rng),
    };

    let used: Vec<String> = config
        .used
        .iter()
        .filter_map(|w| Candidate::parse(w))
        .map(Candidate::into_inner)
        .collect();

    let outcome = validator.validate(&root, &used, &candidate);

    Ok(CheckResult {
        root,
        word: candidate.into_inner(),
        used,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Language, WordListLexicon};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn validator() -> Validator<WordListLexicon> {
        Validator::new(WordListLexicon::from_words(
            Language::English,
            ["silk", "worm", "board"],
        ))
    }

    fn run(config: CheckConfig) -> Result<CheckResult, String> {
        let source = DictionarySource::new(vec!["keyboard".to_string()]);
        check_word(config, &validator(), &source, &mut StdRng::seed_from_u64(3))
    }

    #[test]
    fn check_accepts_with_explicit_root() {
        let result = run(CheckConfig::new("Silk".into()).with_root("SILKWORM")).unwrap();
        assert_eq!(result.root, "silkworm");
        assert_eq!(result.word, "silk");
        assert!(result.is_accepted());
    }

    #[test]
    fn check_uses_random_root_when_missing() {
        let result = run(CheckConfig::new("board".into())).unwrap();
        assert_eq!(result.root, "keyboard");
        assert!(result.is_accepted());
    }

    #[test]
    fn check_normalizes_used_words() {
        let config = CheckConfig::new("worm".into())
            .with_root("silkworm")
            .with_used(vec![" WORM ".into(), String::new()]);
        let result = run(config).unwrap();
        assert_eq!(result.used, vec!["worm"]);
        assert_eq!(result.outcome, Err(Rejection::AlreadyUsed));
    }

    #[test]
    fn check_blank_word_is_error() {
        assert!(run(CheckConfig::new("  ".into())).is_err());
    }

    #[test]
    fn check_blank_root_is_error() {
        assert!(run(CheckConfig::new("silk".into()).with_root(" ")).is_err());
    }
}
