//! Reasons a submitted word can be turned down
//!
//! Every rejection is an expected, per-submission outcome. Each one carries the
//! title and message shown to the player.

use std::fmt;

/// Why a candidate was not accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The word is already in the accepted list
    AlreadyUsed,
    /// The word can't be spelled from the root's letters
    NotPossible { root: String },
    /// The word is too short, is the root itself, or isn't a known word
    NotReal { cause: NotRealCause },
}

/// Which part of the real-word check failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotRealCause {
    TooShort,
    SameAsRoot,
    Unrecognized,
}

impl Rejection {
    /// Short heading for an alert
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotPossible { .. } => "Word not possible",
            Self::NotReal { .. } => "Word not recognized",
        }
    }

    /// Body text for an alert
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Rejection;
    ///
    /// let rejection = Rejection::NotPossible { root: "silkworm".to_string() };
    /// assert_eq!(rejection.message(), "You can't spell that word from 'silkworm'!");
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotPossible { root } => format!("You can't spell that word from '{root}'!"),
            Self::NotReal { .. } => "You can't just make them up, you know!".to_string(),
        }
    }
}

impl fmt::Display for NotRealCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "too short"),
            Self::SameAsRoot => write!(f, "same as the root word"),
            Self::Unrecognized => write!(f, "not in the dictionary"),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

impl std::error::Error for Rejection {}
