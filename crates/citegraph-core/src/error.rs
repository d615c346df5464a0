use thiserror::Error;

/// Top-level error type for citegraph services.
#[derive(Error, Debug)]
pub enum CitegraphError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CitegraphError>;
