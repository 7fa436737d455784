//! The individual stages of a word ladder search.
//!
//! Loading and validating the dictionary, building the word graph around the
//! start word, and writing every path found. Each stage logs its progress
//! through the verbose macros of the parent `app` module.

use super::error::AppError;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::dictionary::{self, are_valid_words};
use crate::graph::{EnqueueGuard, WordGraph};
use crate::path::PathScraper;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

/// Loads the dictionary words with the same length as `start` and checks that
/// `start` and `end` are usable ladder ends.
///
/// # Errors
/// `AppError::Dictionary` if the word file cannot be read, and
/// `AppError::InvalidWords` if the words differ in length or are not in the
/// dictionary.
pub fn load_and_validate_words(
    dictionary_path: &Path,
    start: &str,
    end: &str,
    quiet_mode: bool,
) -> Result<BTreeSet<String>, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading dictionary...");
    let length = start.chars().count();
    let words = dictionary::load_words_from_file(dictionary_path, length).map_err(|e| {
        verbose_eprintln!(quiet_mode, "Input Error: {}", e);
        AppError::from(e)
    })?;
    verbose_println!(
        quiet_mode,
        "   => Found {} word(s) of length {}.",
        words.len(),
        length
    );

    if !are_valid_words(start, end, &words) {
        verbose_eprintln!(
            quiet_mode,
            "Input Error: '{}' and '{}' are not a valid pair of ladder ends.",
            start,
            end
        );
        return Err(AppError::InvalidWords {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(words)
}

/// Builds the graph of every word connected to `start`.
pub fn build_word_graph(
    start: &str,
    words: &BTreeSet<String>,
    guard: EnqueueGuard,
    quiet_mode: bool,
) -> WordGraph {
    verbose_println!(
        quiet_mode,
        "\n[STEP 2] Constructing graph of all connected words..."
    );
    let graph = WordGraph::build_with_guard(start, words, guard);
    verbose_println!(
        quiet_mode,
        "   => {} connected word(s), {} edge(s).",
        graph.len(),
        graph.edge_count()
    );
    graph
}

/// Writes every path from `start` to `end` to `writer`, one per line, or a
/// notice if there is none.
///
/// Returns the number of paths written.
pub fn write_word_paths(
    graph: &WordGraph,
    start: &str,
    end: &str,
    max_paths: Option<usize>,
    quiet_mode: bool,
    writer: &mut dyn Write,
) -> Result<usize, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 3] Attempting to find all word paths...");
    let found = PathScraper::print_paths_to_writer(graph, start, end, max_paths, writer)?;

    if found == 0 {
        verbose_println!(quiet_mode, "   => No paths found.");
        writeln!(writer, "No valid word paths found.")?;
    } else {
        verbose_println!(quiet_mode, "   => Found {} path(s).", found);
    }
    Ok(found)
}
