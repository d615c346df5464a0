//! Error types for the citegraph-cli crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
