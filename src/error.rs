use std::io;
use thiserror::Error;

/// Error type for the status updater
#[derive(Error, Debug)]
pub enum StatusError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A source file, device or helper binary is missing or inaccessible.
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    /// The source exists but its content could not be parsed.
    #[error("Malformed data: {0}")]
    Malformed(String),

    /// The status line buffer could not be allocated.
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Display error: {0}")]
    Display(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for the status updater
pub type Result<T> = std::result::Result<T, StatusError>;

impl StatusError {
    pub fn unavailable<S: Into<String>>(msg: S) -> Self {
        StatusError::Unavailable(msg.into())
    }

    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        StatusError::Malformed(msg.into())
    }

    pub fn resource_exhausted<S: Into<String>>(msg: S) -> Self {
        StatusError::ResourceExhausted(msg.into())
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StatusError::Config(msg.into())
    }

    pub fn display<S: Into<String>>(msg: S) -> Self {
        StatusError::Display(msg.into())
    }

    /// Whether the driver must stop when this error reaches it.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            StatusError::ResourceExhausted(_) | StatusError::Display(_)
        )
    }
}
