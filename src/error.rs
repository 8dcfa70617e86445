//! Error types for batcat

use thiserror::Error;

/// Result type alias for batcat operations
pub type Result<T> = std::result::Result<T, CatError>;

/// Errors that abort a cat run
#[derive(Error, Debug)]
pub enum CatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Not a batch file (.bat or .cmd): {0}")]
    UnsupportedFile(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Bad highlight pattern: {0}")]
    Pattern(#[from] regex::Error),
}
