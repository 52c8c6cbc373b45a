use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for FolioError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        FolioError::Store(err.to_string())
    }
}

impl From<&str> for FolioError {
    fn from(err: &str) -> Self {
        FolioError::Internal(err.to_string())
    }
}

impl From<String> for FolioError {
    fn from(err: String) -> Self {
        FolioError::Internal(err)
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
