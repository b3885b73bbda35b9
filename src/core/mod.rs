//! Core domain types for Word Scramble
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and testable in isolation.

mod candidate;
mod letters;
mod rejection;

pub use candidate::Candidate;
pub use letters::{LetterPool, is_sub_multiset};
pub use rejection::{NotRealCause, Rejection};
