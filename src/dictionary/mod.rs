// error module
mod error;
// loader module
mod loader;
// word set membership and input validation
mod word_set;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use error::DictionaryError;
pub use loader::{load_words_from_file, parse_words};
pub use word_set::{are_valid_words, WordSet};
