//! Error types for provider clients.

use moodtune_core::MoodtuneError;
use thiserror::Error;

/// Errors raised while talking to the LLM, video or preview providers.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider returned a non-success status
    #[error("{provider} error ({status}): {message}")]
    Provider {
        provider: &'static str,
        status: u16,
        message: String,
    },

    /// Provider answered but the body could not be understood
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid provider base URL
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// Provider is offline or unreachable
    #[error("Provider unreachable: {0}")]
    Unreachable(String),
}

impl DiscoveryError {
    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            DiscoveryError::Unreachable(e.to_string())
        } else {
            DiscoveryError::Request(e)
        }
    }
}

impl From<DiscoveryError> for MoodtuneError {
    fn from(err: DiscoveryError) -> Self {
        match err {
            DiscoveryError::Provider {
                provider,
                status,
                message,
            } => MoodtuneError::Http {
                status,
                message: format!("{}: {}", provider, message),
            },
            DiscoveryError::ParseError(msg) => MoodtuneError::Parse(msg),
            DiscoveryError::InvalidUrl(msg) => MoodtuneError::InvalidInput(msg),
            other => MoodtuneError::Network(other.to_string()),
        }
    }
}

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// Validate and normalize a provider base URL.
pub(crate) fn normalize_base_url(raw: &str) -> Result<String> {
    let url = raw.trim_end_matches('/');
    if url.is_empty() {
        return Err(DiscoveryError::InvalidUrl("URL cannot be empty".into()));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(DiscoveryError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }
    Ok(url.to_string())
}

pub(crate) async fn provider_error(provider: &'static str, response: reqwest::Response) -> DiscoveryError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    DiscoveryError::Provider {
        provider,
        status,
        message,
    }
}
