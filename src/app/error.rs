use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Dictionary(#[from] crate::dictionary::DictionaryError),
    #[error("Not valid input words '{start}' and '{end}', ensure words are the same length and contained in the dictionary")]
    InvalidWords { start: String, end: String },
}
