// graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// Build the word graph reachable from a start word. Vertices are words, and an
// undirected edge joins two words that differ in exactly one position. The
// graph is discovered breadth-first from the start word, so it holds exactly
// the start word's connected component within the candidate set.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use super::adjacency::next_words;
use crate::path::WordPaths;

/// Neighbour sets keyed by word.
pub type Adjacency = BTreeMap<String, BTreeSet<String>>;

/// Decides whether a freshly discovered word is queued for expansion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum EnqueueGuard {
    /// Queue a word only the first time it is discovered.
    #[default]
    Enqueued,
    /// Queue a word whenever it is not yet a key of the graph. A word can be
    /// reached several times before it is expanded, so it may be queued more
    /// than once; re-expanding it only re-inserts existing edges.
    GraphKey,
}

/// Adjacency structure over the words reachable from a start word.
///
/// A word becomes a key once its first edge is inserted. Words without any
/// neighbour (an isolated start word) are therefore absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordGraph {
    adjacency: Adjacency,
}

impl WordGraph {
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    /// Builds the graph reachable from `start` over `candidates`.
    pub fn build<'c, C, S>(start: &str, candidates: C) -> Self
    where
        C: IntoIterator<Item = &'c S> + Clone,
        S: AsRef<str> + ?Sized + 'c,
    {
        Self::build_with_guard(start, candidates, EnqueueGuard::default())
    }

    /// Builds the graph reachable from `start`, using `guard` to decide when a
    /// discovered word is queued.
    ///
    /// Each dequeued word rescans `candidates` from the beginning, which is why
    /// the collection must be cheaply cloneable (a shared reference usually).
    /// Edges come out reciprocal as long as `start` is itself a candidate: the
    /// reverse edge of `w -> u` is inserted when `u` is expanded and finds `w`.
    pub fn build_with_guard<'c, C, S>(start: &str, candidates: C, guard: EnqueueGuard) -> Self
    where
        C: IntoIterator<Item = &'c S> + Clone,
        S: AsRef<str> + ?Sized + 'c,
    {
        let mut graph = Self::new();
        let mut queue: VecDeque<String> = VecDeque::new();
        let mut enqueued: HashSet<String> = HashSet::new();

        queue.push_back(start.to_string());
        enqueued.insert(start.to_string());

        while let Some(current) = queue.pop_front() {
            for word in next_words(&current, candidates.clone()) {
                graph.add_edge(&current, word);

                let should_enqueue = match guard {
                    EnqueueGuard::Enqueued => enqueued.insert(word.to_string()),
                    EnqueueGuard::GraphKey => !graph.contains(word),
                };
                if should_enqueue {
                    queue.push_back(word.to_string());
                }
            }
        }
        graph
    }

    /// Inserts the directed half `from -> to` of an edge, creating the entry
    /// for `from` on its first edge.
    fn add_edge(&mut self, from: &str, to: &str) {
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string());
    }

    /// Returns the neighbours of `word`, or `None` if it is not a vertex.
    pub fn neighbors(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.adjacency.get(word)
    }

    /// Returns `true` if `word` is a key of the graph.
    pub fn contains(&self, word: &str) -> bool {
        self.adjacency.contains_key(word)
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Returns `true` if every edge `a -> b` has its reverse `b -> a`.
    pub fn is_undirected(&self) -> bool {
        self.adjacency.iter().all(|(word, neighbors)| {
            neighbors
                .iter()
                .all(|n| self.neighbors(n).is_some_and(|back| back.contains(word)))
        })
    }

    /// Returns a reference to the underlying adjacency map.
    pub fn get_adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Enumerates every simple path from `start` to `end`, shortest first.
    pub fn paths(&self, start: &str, end: &str) -> WordPaths<'_> {
        WordPaths::new(self, start, end)
    }
}
