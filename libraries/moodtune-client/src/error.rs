//! Error types for the Moodtune backend client.

use moodtune_core::MoodtuneError;
use thiserror::Error;

/// Shown when saving a recommendation fails.
pub const SAVE_ERROR_MESSAGE: &str = "저장 실패. 다시 시도해줘.";

/// Shown when the signed-in user's playlists cannot be loaded.
pub const MY_PLAYLISTS_ERROR_MESSAGE: &str = "플레이리스트를 불러오지 못했어요. 다시 시도해줘.";

/// Errors that can occur when talking to the Moodtune backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Authentication required but no token available
    #[error("Authentication required")]
    AuthRequired,

    /// Identity provider refused or could not complete sign-in
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

impl ClientError {
    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ClientError::ServerUnreachable(e.to_string())
        } else {
            ClientError::Request(e)
        }
    }
}

impl From<ClientError> for MoodtuneError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ServerError { status, message } => MoodtuneError::Http { status, message },
            ClientError::AuthRequired => MoodtuneError::AuthRequired,
            ClientError::ParseError(msg) => MoodtuneError::Parse(msg),
            ClientError::InvalidUrl(msg) => MoodtuneError::InvalidInput(msg),
            other => MoodtuneError::Network(other.to_string()),
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
