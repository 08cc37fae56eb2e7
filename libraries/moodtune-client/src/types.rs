//! Types for Moodtune backend requests and responses.

use moodtune_core::{DbUser, Playlist};
use serde::Deserialize;

/// Configuration for connecting to the Moodtune backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., "https://api.moodtune.app")
    pub url: String,
    /// Identity token sent as a bearer token, if signed in
    pub identity_token: Option<String>,
}

impl ClientConfig {
    /// Create a new config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            identity_token: None,
        }
    }

    /// Create a config with an existing identity token.
    pub fn with_token(url: impl Into<String>, identity_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            identity_token: Some(identity_token.into()),
        }
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Response from `POST /api/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: DbUser,
}

// =============================================================================
// Playlist Types
// =============================================================================

/// The two feed endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedEndpoint {
    /// `GET /api/playlists`, newest first
    Playlists,
    /// `GET /api/search`
    Search,
}

impl FeedEndpoint {
    /// Path relative to the backend base URL
    pub fn path(&self) -> &'static str {
        match self {
            FeedEndpoint::Playlists => "/api/playlists",
            FeedEndpoint::Search => "/api/search",
        }
    }
}

/// One outbound feed request: endpoint plus query parameters, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    pub endpoint: FeedEndpoint,
    pub params: Vec<(String, String)>,
}

impl FeedRequest {
    pub fn new(endpoint: FeedEndpoint) -> Self {
        Self {
            endpoint,
            params: Vec::new(),
        }
    }

    /// Append a query parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// First value of `key`, if present.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A page of playlists from the feed endpoints or `/api/playlists/my`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistPage {
    pub playlists: Vec<Playlist>,
    /// Total matching items across all pages
    #[serde(default)]
    pub total: Option<u64>,
}

impl PlaylistPage {
    /// Total count; a response without one is treated as complete.
    pub fn total_count(&self) -> u64 {
        self.total.unwrap_or(self.playlists.len() as u64)
    }
}
