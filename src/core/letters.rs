//! Letter multiset used for the feasibility check
//!
//! A `LetterPool` counts how many of each letter a root word offers. Spelling a
//! candidate consumes one occurrence per letter, so every root letter can be
//! used at most once per candidate.

use rustc_hash::FxHashMap;

/// Remaining letters of a root word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
    remaining: usize,
}

impl LetterPool {
    /// Build a pool holding every letter of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::from_word("speed");
    /// assert_eq!(pool.count_of('e'), 2);
    /// assert_eq!(pool.len(), 5);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        let mut remaining = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            remaining += 1;
        }
        Self { counts, remaining }
    }

    /// Number of letters left in the pool
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// How many occurrences of `letter` are left
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` (leaving the pool unchanged) if none is left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                self.remaining -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `word` can be spelled from this pool
    ///
    /// Works on a copy; the pool itself is not consumed.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::from_word("silkworm");
    /// assert!(pool.can_spell("silk"));
    /// assert!(!pool.can_spell("silkk"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut scratch = self.clone();
        word.chars().all(|ch| scratch.take(ch))
    }
}

/// Check whether `candidate` is a sub-multiset of `root`'s letters
///
/// Each letter of `root` may be used at most once; unused root letters don't
/// matter. Order is irrelevant.
#[must_use]
pub fn is_sub_multiset(root: &str, candidate: &str) -> bool {
    LetterPool::from_word(root).can_spell(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_counts_duplicates() {
        let pool = LetterPool::from_word("balloon");
        assert_eq!(pool.count_of('l'), 2);
        assert_eq!(pool.count_of('o'), 2);
        assert_eq!(pool.count_of('b'), 1);
        assert_eq!(pool.count_of('z'), 0);
        assert_eq!(pool.len(), 7);
    }

    #[test]
    fn take_consumes_one_occurrence() {
        let mut pool = LetterPool::from_word("eel");
        assert!(pool.take('e'));
        assert_eq!(pool.count_of('e'), 1);
        assert!(pool.take('e'));
        assert!(!pool.take('e'));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn take_missing_letter_leaves_pool_unchanged() {
        let mut pool = LetterPool::from_word("cat");
        let before = pool.clone();
        assert!(!pool.take('x'));
        assert_eq!(pool, before);
    }

    #[test]
    fn empty_pool() {
        let pool = LetterPool::from_word("");
        assert!(pool.is_empty());
        assert!(pool.can_spell(""));
        assert!(!pool.can_spell("a"));
    }

    #[test]
    fn can_spell_does_not_consume() {
        let pool = LetterPool::from_word("silkworm");
        assert!(pool.can_spell("silk"));
        assert!(pool.can_spell("silk"));
        assert_eq!(pool.len(), 8);
    }

    #[test]
    fn sub_multiset_ignores_order() {
        assert!(is_sub_multiset("silkworm", "mrow"));
        assert!(is_sub_multiset("silkworm", "worms"));
        assert!(is_sub_multiset("silkworm", "silkworm"));
    }

    #[test]
    fn sub_multiset_respects_multiplicity() {
        assert!(!is_sub_multiset("silkworm", "silkk"));
        assert!(!is_sub_multiset("silkworm", "worry"));
        assert!(is_sub_multiset("balloon", "loon"));
        assert!(!is_sub_multiset("balloon", "lllama"));
    }

    #[test]
    fn sub_multiset_rejects_foreign_letters() {
        assert!(!is_sub_multiset("silkworm", "word"));
    }

    #[test]
    fn sub_multiset_handles_non_ascii() {
        assert!(is_sub_multiset("crème", "mèr"));
        assert!(!is_sub_multiset("creme", "crème"));
    }
}
