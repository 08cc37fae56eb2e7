//! Error types for preview playback

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The host refused to start audio without a user gesture
    #[error("Autoplay blocked: {0}")]
    AutoplayBlocked(String),

    /// No audio handle to act on
    #[error("Nothing to play")]
    NothingLoaded,

    /// Player command could not be parsed
    #[error("Invalid player command: {0:?}")]
    InvalidCommand(String),

    /// A link could not be opened
    #[error("Failed to open {url}: {message}")]
    OpenLink { url: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
