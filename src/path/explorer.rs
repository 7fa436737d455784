// explorer.rs
// ──────────────────────────────────────────────────────────────────────────────
// Enumerate word ladders over a built word graph. Paths are explored
// breadth-first, so they come out shortest first, and a word never appears
// twice on one path.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::VecDeque;
use std::io::Write;

use crate::graph::WordGraph;

/// Separator placed between words when a path is printed.
pub const PATH_SEPARATOR: &str = " -> ";

/// A word ladder: consecutive words are graph neighbours and no word repeats.
pub type WordPath = Vec<String>;

/// Breadth-first enumeration of every simple path between two words.
///
/// Paths are yielded in non-decreasing length. Paths of equal length come out
/// in the order they were discovered, which follows the (sorted) neighbour
/// order of the graph. A start word that is not a vertex of the graph has no
/// neighbours, so it only ever yields the one-word path when it is also the
/// target.
#[derive(Clone, Debug)]
pub struct WordPaths<'g> {
    graph: &'g WordGraph,
    target: String,
    // (word to visit next, path leading up to it)
    queue: VecDeque<(String, WordPath)>,
}

impl<'g> WordPaths<'g> {
    pub fn new(graph: &'g WordGraph, start: &str, end: &str) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((start.to_string(), Vec::new()));
        Self {
            graph,
            target: end.to_string(),
            queue,
        }
    }
}

impl Iterator for WordPaths<'_> {
    type Item = WordPath;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((word, mut path)) = self.queue.pop_front() {
            path.push(word);
            let current = &path[path.len() - 1];

            // Words already on the path are skipped, which keeps paths simple
            // and stops the search from cycling.
            if let Some(neighbors) = self.graph.neighbors(current) {
                for neighbor in neighbors.iter().filter(|n| !path.contains(n)) {
                    self.queue.push_back((neighbor.clone(), path.clone()));
                }
            }

            if *current == self.target {
                return Some(path);
            }
        }
        None
    }
}

/// Formats a path as its words joined by [`PATH_SEPARATOR`].
pub fn format_path(path: &[String]) -> String {
    path.join(PATH_SEPARATOR)
}

/// `PathScraper` drives a path enumeration into a writer.
pub struct PathScraper;

impl PathScraper {
    /// Collects up to `limit` paths from `start` to `end` (all of them when
    /// `limit` is `None`).
    pub fn get_paths(
        graph: &WordGraph,
        start: &str,
        end: &str,
        limit: Option<usize>,
    ) -> Vec<WordPath> {
        let paths = graph.paths(start, end);
        match limit {
            Some(limit) => paths.take(limit).collect(),
            None => paths.collect(),
        }
    }

    /// Writes each path from `start` to `end` on its own line as it is found,
    /// stopping after `limit` paths if one is given.
    ///
    /// Returns the number of paths written. Nothing is written when no path
    /// exists; reporting that case is left to the caller.
    pub fn print_paths_to_writer(
        graph: &WordGraph,
        start: &str,
        end: &str,
        limit: Option<usize>,
        writer: &mut dyn Write,
    ) -> std::io::Result<usize> {
        let mut written = 0usize;
        for path in graph.paths(start, end).take(limit.unwrap_or(usize::MAX)) {
            writeln!(writer, "{}", format_path(&path))?;
            written += 1;
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_graph() -> WordGraph {
        WordGraph::build("cat", &["cat", "cag", "cog", "dog"])
    }

    // Two routes of length 4 from cat to dog, through cot or cag.
    fn square_graph() -> WordGraph {
        WordGraph::build("cat", &["cat", "cot", "cag", "cog", "dog"])
    }

    #[test]
    fn single_shortest_path_in_a_chain() {
        let graph = chain_graph();
        let paths: Vec<WordPath> = graph.paths("cat", "dog").collect();
        assert_eq!(paths, vec![vec!["cat", "cag", "cog", "dog"]]);
    }

    #[test]
    fn start_equals_end_yields_single_word_first() {
        let graph = chain_graph();
        for word in ["cat", "cag", "cog", "dog"] {
            let paths: Vec<WordPath> = graph.paths(word, word).collect();
            assert_eq!(paths, vec![vec![word]]);
        }
    }

    #[test]
    fn all_simple_paths_in_non_decreasing_length() {
        let graph = square_graph();
        let paths: Vec<WordPath> = graph.paths("cat", "dog").collect();

        assert_eq!(
            paths,
            vec![
                vec!["cat", "cag", "cog", "dog"],
                vec!["cat", "cot", "cog", "dog"],
            ]
        );
        assert!(paths.windows(2).all(|w| w[0].len() <= w[1].len()));
    }

    #[test]
    fn detours_that_revisit_a_word_are_dropped() {
        let graph = square_graph();
        let paths: Vec<WordPath> = graph.paths("cat", "cog").collect();

        // cat-cag-cog, cat-cot-cog, then nothing longer: any detour would
        // have to revisit cat or cog.
        assert_eq!(paths.len(), 2);

        let paths: Vec<WordPath> = graph.paths("cag", "cot").collect();
        assert_eq!(
            paths,
            vec![vec!["cag", "cat", "cot"], vec!["cag", "cog", "cot"]]
        );
    }

    #[test]
    fn longer_paths_follow_the_shortest_ones() {
        let words = [
            "bold", "bolt", "bore", "card", "cold", "cord", "core", "ward", "warm", "word",
            "wore", "worm",
        ];
        let graph = WordGraph::build("cold", &words);
        let paths: Vec<WordPath> = graph.paths("cold", "warm").collect();

        let shortest = paths[0].len();
        assert_eq!(shortest, 5);
        assert_eq!(paths[0], ["cold", "cord", "card", "ward", "warm"]);
        assert_eq!(paths.iter().filter(|p| p.len() == shortest).count(), 3);

        // cold-cord-core-wore-worm-warm is one of the detours.
        let detour = paths
            .iter()
            .position(|p| p[..] == ["cold", "cord", "core", "wore", "worm", "warm"])
            .unwrap();
        assert!(detour >= 3);
        assert!(paths.windows(2).all(|w| w[0].len() <= w[1].len()));
    }

    #[test]
    fn paths_never_repeat_a_word() {
        let graph = WordGraph::build("cat", &["cat", "cot", "cog", "cag", "dog", "dot"]);
        let paths: Vec<WordPath> = graph.paths("cat", "dog").collect();
        assert!(!paths.is_empty());
        for path in &paths {
            let mut seen = path.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), path.len(), "{path:?}");
            assert_eq!(path.first().map(String::as_str), Some("cat"));
            assert_eq!(path.last().map(String::as_str), Some("dog"));
        }
        assert!(paths.windows(2).all(|w| w[0].len() <= w[1].len()));
    }

    #[test]
    fn no_path_is_an_empty_sequence() {
        let graph = WordGraph::build("cat", &["cat", "cot", "dog"]);
        assert_eq!(graph.paths("cat", "dog").count(), 0);
    }

    #[test]
    fn absent_start_has_no_neighbours() {
        let graph = chain_graph();
        assert_eq!(graph.paths("zzz", "dog").count(), 0);

        let paths: Vec<WordPath> = graph.paths("zzz", "zzz").collect();
        assert_eq!(paths, vec![vec!["zzz"]]);
    }

    #[test]
    fn enumeration_can_stop_early() {
        let graph = square_graph();
        let first = graph.paths("cat", "dog").next().unwrap();
        assert_eq!(first, ["cat", "cag", "cog", "dog"]);
        assert_eq!(PathScraper::get_paths(&graph, "cat", "dog", Some(1)).len(), 1);
        assert_eq!(PathScraper::get_paths(&graph, "cat", "dog", None).len(), 2);
    }

    #[test]
    fn prints_one_path_per_line() {
        let graph = square_graph();
        let mut out = Vec::new();
        let written =
            PathScraper::print_paths_to_writer(&graph, "cat", "dog", None, &mut out).unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "cat -> cag -> cog -> dog\ncat -> cot -> cog -> dog\n"
        );
    }

    #[test]
    fn prints_nothing_without_paths() {
        let graph = chain_graph();
        let mut out = Vec::new();
        let written =
            PathScraper::print_paths_to_writer(&graph, "cat", "zzz", Some(5), &mut out).unwrap();
        assert_eq!(written, 0);
        assert!(out.is_empty());
    }
}
