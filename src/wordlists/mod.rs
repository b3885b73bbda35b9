//! Word lists for Word Scramble
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! file loading, and root word selection.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use source::{DictionarySource, FALLBACK_ROOT, LoadError, LoadPolicy};
