// explorer module
mod explorer;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the explorer module.
//─────────────────────────────────────────────────────────────────────────────
pub use explorer::{format_path, PathScraper, WordPath, WordPaths, PATH_SEPARATOR};
