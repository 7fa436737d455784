use std::collections::{BTreeSet, HashSet};

//─────────────────────────────────────────────────────────────────────────────

/// Membership test over a collection of words.
pub trait WordSet {
    fn contains_word(&self, word: &str) -> bool;
}

impl WordSet for BTreeSet<String> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl WordSet for HashSet<String> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl<S: AsRef<str>> WordSet for [S] {
    fn contains_word(&self, word: &str) -> bool {
        self.iter().any(|w| w.as_ref() == word)
    }
}

/// Returns `true` if `word1` and `word2` have the same length and both are
/// contained in `words`.
///
/// The length check runs first, so membership is only looked up for words of
/// equal length.
pub fn are_valid_words<W: WordSet + ?Sized>(word1: &str, word2: &str, words: &W) -> bool {
    word1.chars().count() == word2.chars().count()
        && words.contains_word(word1)
        && words.contains_word(word2)
}
