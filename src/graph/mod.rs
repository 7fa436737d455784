// adjacency predicate and candidate filter
mod adjacency;
// graph builder
#[allow(clippy::module_inception)]
mod graph;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use adjacency::{is_next_word, next_words, NextWords};
pub use graph::{Adjacency, EnqueueGuard, WordGraph};
