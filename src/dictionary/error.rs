use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for dictionary loading operations.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when reading the word file.
    #[error("Cannot read word file '{0}': {1}")]
    ReadFile(String, std::io::Error),
}
