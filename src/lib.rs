//! Word Scramble
//!
//! A word game: make as many words as you can out of the letters of a root word.
//! Every submission must be new, spellable from the root's letters, and a real
//! word of at least three letters that isn't the root itself.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::session::{Outcome, Session};
//! use word_scramble::validation::{Validator, WordListLexicon};
//!
//! let mut session = Session::new(Validator::new(WordListLexicon::embedded()), "silkworm");
//!
//! assert_eq!(session.play("silk"), Outcome::Accepted("silk".to_string()));
//! assert!(matches!(session.play("silk"), Outcome::Rejected(_)));
//! ```

// Core domain types
pub mod core;

// Validation and the real-word lexicon
pub mod validation;

// Game session state
pub mod session;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
