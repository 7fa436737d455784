// adjacency.rs
// ──────────────────────────────────────────────────────────────────────────────
// Word adjacency: two words are neighbours when they differ in exactly one
// character position. Positions past the end of the shorter word count as
// mismatches, so "foo" and "fool" are neighbours too. This is positional
// (Hamming) distance, not edit distance. Only equal-length words reach this
// in practice, since the dictionary is filtered to a single length on load.
// ──────────────────────────────────────────────────────────────────────────────

/// Returns `true` if `word1` and `word2` differ in exactly one position.
///
/// Identical words (including two empty words) are never adjacent.
pub fn is_next_word(word1: &str, word2: &str) -> bool {
    let mut left = word1.chars();
    let mut right = word2.chars();
    let mut mismatches = 0usize;

    loop {
        let (a, b) = (left.next(), right.next());
        if a.is_none() && b.is_none() {
            break;
        }
        if a != b {
            mismatches += 1;
            if mismatches > 1 {
                return false;
            }
        }
    }
    mismatches == 1
}

/// Lazy scan over a candidate collection, yielding the candidates adjacent to
/// a fixed word in the collection's own iteration order.
///
/// Created by [`next_words`].
#[derive(Clone, Debug)]
pub struct NextWords<'w, I> {
    word: &'w str,
    candidates: I,
}

impl<'w, 'c, I, S> Iterator for NextWords<'w, I>
where
    I: Iterator<Item = &'c S>,
    S: AsRef<str> + ?Sized + 'c,
{
    type Item = &'c str;

    fn next(&mut self) -> Option<Self::Item> {
        let word = self.word;
        self.candidates
            .by_ref()
            .map(AsRef::as_ref)
            .find(|candidate| is_next_word(word, candidate))
    }
}

/// Returns every element of `candidates` that is adjacent to `word`.
///
/// Nothing is scanned until the iterator is polled. Calling this again with
/// the same collection restarts the scan from the beginning.
pub fn next_words<'w, 'c, C, S>(word: &'w str, candidates: C) -> NextWords<'w, C::IntoIter>
where
    C: IntoIterator<Item = &'c S>,
    S: AsRef<str> + ?Sized + 'c,
{
    NextWords {
        word,
        candidates: candidates.into_iter(),
    }
}
