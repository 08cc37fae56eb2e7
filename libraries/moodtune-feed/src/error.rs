//! Error types for feed loading

use moodtune_client::ClientError;
use thiserror::Error;

/// Banner shown when a fresh feed load fails.
pub const FEED_ERROR_MESSAGE: &str = "피드를 불러오지 못했어요. 잠시 후 다시 시도해주세요.";

/// Feed errors
#[derive(Debug, Error)]
pub enum FeedError {
    /// Backend request failed
    #[error("Backend error: {0}")]
    Client(#[from] ClientError),

    /// Any other source failure
    #[error("Feed source error: {0}")]
    Source(String),
}

/// Result type for feed operations
pub type Result<T> = std::result::Result<T, FeedError>;
