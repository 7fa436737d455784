//! Main application orchestrator.
//!
//! Coordinates a word ladder search:
//! 1. Initializes logging (unless quiet).
//! 2. Loads the dictionary words of the start word's length and validates the
//!    start and end words against them.
//! 3. Builds the graph of words connected to the start word.
//! 4. Enumerates the paths from start to end, shortest first, writing each as
//!    soon as it is found.
//!
//! The verbose log is flushed after every stage.

use super::cli::Cli;
use super::error::AppError;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use std::io::{self, Write};
use std::num::NonZeroUsize;

/// Runs the word ladder search described by `cli`, printing paths to stdout.
///
/// # Errors
/// Returns `AppError` if the dictionary cannot be read, the input words are
/// invalid, or stdout cannot be written. Finding no path is not an error.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // The search still runs; only the verbose log is lost.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run_app_with_writer(&cli, &mut out);

    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "[ERROR] {}", e);
    }
    flush_log(quiet_mode, "final");
    result.map(|_| ())
}

/// Runs the search and writes the paths (or the no-path notice) to `writer`.
///
/// Returns the number of paths written.
pub fn run_app_with_writer(cli: &Cli, writer: &mut dyn Write) -> Result<usize, AppError> {
    let quiet_mode = cli.quiet;

    verbose_println!(
        quiet_mode,
        "\n============================================================"
    );
    verbose_println!(
        quiet_mode,
        "Word ladder: {} -> {} ({})",
        cli.start,
        cli.end,
        cli.dictionary.display()
    );
    verbose_println!(
        quiet_mode,
        "============================================================"
    );

    let words =
        processing::load_and_validate_words(&cli.dictionary, &cli.start, &cli.end, quiet_mode)?;
    flush_log(quiet_mode, "dictionary loading");

    let graph = processing::build_word_graph(&cli.start, &words, cli.guard, quiet_mode);
    flush_log(quiet_mode, "graph construction");

    let found = processing::write_word_paths(
        &graph,
        &cli.start,
        &cli.end,
        cli.max_paths.map(NonZeroUsize::get),
        quiet_mode,
        writer,
    )?;
    writer.flush()?;
    Ok(found)
}

/// Flushes the verbose log, reporting failures on stderr since the log file
/// itself may be the one failing.
fn flush_log(quiet_mode: bool, stage: &str) {
    if quiet_mode {
        return;
    }
    if let Err(e) = logger::flush_global_logger() {
        eprintln!(
            "[WARNING] Failed to flush verbose log after {}: {}",
            stage, e
        );
    }
}
