//! Word validation
//!
//! The validator and the lexicon it consults for the real-word check.

pub mod lexicon;
pub mod validator;

pub use lexicon::{Language, Lexicon, WordListLexicon};
pub use validator::{Accepted, MIN_WORD_LENGTH, Validator, is_original, is_possible};
