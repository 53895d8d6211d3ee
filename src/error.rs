use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating build artifacts
#[derive(Error, Debug)]
pub enum CodeGenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read header: {path}")]
    HeaderRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Library directory not found: {0}")]
    LibraryNotFound(PathBuf),

    #[error("Failed to write: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {kind} name: '{name}'")]
    InvalidName { kind: &'static str, name: String },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type for code generation operations
pub type Result<T> = std::result::Result<T, CodeGenError>;
