//! Normalized player input

use std::fmt;

/// A submitted word after normalization
///
/// Always lowercase, trimmed of surrounding whitespace, and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate(String);

impl Candidate {
    /// Normalize raw input into a candidate
    ///
    /// Returns `None` when nothing is left after trimming; an empty submission
    /// is ignored rather than rejected.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Candidate;
    ///
    /// let candidate = Candidate::parse("  Silk \n").unwrap();
    /// assert_eq!(candidate.text(), "silk");
    ///
    /// assert!(Candidate::parse("   ").is_none());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim().to_lowercase();
        if text.is_empty() { None } else { Some(Self(text)) }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes
    #[inline]
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
