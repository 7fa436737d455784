use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::graph::EnqueueGuard;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds all word ladders between two words of a dictionary, shortest first.", long_about = None)]
pub struct Cli {
    /// Word file, one word per line
    pub dictionary: PathBuf,

    /// First word of the ladder
    #[clap(allow_hyphen_values = true)]
    pub start: String,

    /// Last word of the ladder
    #[clap(allow_hyphen_values = true)]
    pub end: String,

    /// Suppress verbose logging, only printing the paths found.
    #[clap(short, long)]
    pub quiet: bool,

    /// Stop after printing this many paths.
    #[clap(long, value_name = "N")]
    pub max_paths: Option<NonZeroUsize>,

    /// When a discovered word is queued while building the graph.
    #[clap(long, value_enum, default_value_t = EnqueueGuard::Enqueued)]
    pub guard: EnqueueGuard,

    /// File receiving the verbose log.
    #[clap(long, default_value = "wordpath.log")]
    pub log_file: PathBuf,
}
