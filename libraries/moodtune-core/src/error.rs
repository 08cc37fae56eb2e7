/// Core error types for Moodtune
use thiserror::Error;

/// Result type alias using `MoodtuneError`
pub type Result<T> = std::result::Result<T, MoodtuneError>;

/// Core error type shared across collaborator boundaries
#[derive(Error, Debug)]
pub enum MoodtuneError {
    /// Remote service could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// Remote service answered with a non-success status
    #[error("HTTP error ({status}): {message}")]
    Http { status: u16, message: String },

    /// Response body could not be understood
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation needs a signed-in session
    #[error("Authentication required")]
    AuthRequired,

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl MoodtuneError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
