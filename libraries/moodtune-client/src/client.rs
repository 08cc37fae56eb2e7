//! Main Moodtune backend client.

use crate::auth::AuthClient;
use crate::error::{ClientError, Result};
use crate::playlists::PlaylistsClient;
use crate::types::{ClientConfig, FeedRequest, PlaylistPage};
use moodtune_core::{DbUser, NewPlaylist, Playlist};
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Client for the Moodtune backend.
///
/// Cloning is cheap; clones share the HTTP pool and the current identity
/// token, so a token set by the auth session is seen by every feed loader.
///
/// # Example
///
/// ```ignore
/// use moodtune_client::{ClientConfig, MoodtuneClient};
///
/// let client = MoodtuneClient::new(ClientConfig::new("https://api.moodtune.app"))?;
/// let mine = client.my_playlists().await?;
/// println!("{} saved playlists", mine.len());
/// ```
#[derive(Clone)]
pub struct MoodtuneClient {
    http: Client,
    config: Arc<RwLock<ClientConfig>>,
}

impl MoodtuneClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let url = normalize_base_url(&config.url)?;

        let normalized_config = ClientConfig {
            url,
            identity_token: config.identity_token,
        };

        // No request timeout: a hung call stays pending until the caller gives up
        let http = Client::builder()
            .user_agent(format!("Moodtune/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            config: Arc::new(RwLock::new(normalized_config)),
        })
    }

    /// Get the backend URL.
    pub async fn url(&self) -> String {
        self.config.read().await.url.clone()
    }

    /// Check if the client has an identity token.
    pub async fn is_authenticated(&self) -> bool {
        self.config.read().await.identity_token.is_some()
    }

    /// Get the current identity token.
    pub async fn identity_token(&self) -> Option<String> {
        self.config.read().await.identity_token.clone()
    }

    /// Replace the identity token used as bearer on subsequent requests.
    pub async fn set_identity_token(&self, identity_token: Option<String>) {
        self.config.write().await.identity_token = identity_token;
    }

    /// Clear the stored token (logout).
    pub async fn clear_identity_token(&self) {
        self.config.write().await.identity_token = None;
        info!("Identity token cleared");
    }

    async fn snapshot(&self) -> (String, Option<String>) {
        let config = self.config.read().await;
        (config.url.clone(), config.identity_token.clone())
    }

    /// Exchange `identity_token` for the backend profile and keep it as the
    /// bearer token.
    pub async fn login(&self, identity_token: &str) -> Result<DbUser> {
        let (url, _) = self.snapshot().await;

        let auth_client = AuthClient::new(&self.http, &url);
        let user = auth_client.login(identity_token).await?;

        self.set_identity_token(Some(identity_token.to_string()))
            .await;

        Ok(user)
    }

    /// Fetch one feed page.
    pub async fn fetch_feed(&self, request: &FeedRequest) -> Result<PlaylistPage> {
        let (url, token) = self.snapshot().await;
        PlaylistsClient::new(&self.http, &url, token.as_deref())
            .fetch_page(request)
            .await
    }

    /// Playlists saved by the signed-in user.
    ///
    /// Fails with `AuthRequired` without touching the network when signed out.
    pub async fn my_playlists(&self) -> Result<Vec<Playlist>> {
        let (url, token) = self.snapshot().await;
        PlaylistsClient::new(&self.http, &url, token.as_deref())
            .my_playlists()
            .await
    }

    /// Save a playlist for the signed-in user.
    pub async fn create_playlist(&self, playlist: &NewPlaylist) -> Result<()> {
        let (url, token) = self.snapshot().await;
        PlaylistsClient::new(&self.http, &url, token.as_deref())
            .create(playlist)
            .await
    }
}

/// Validate and normalize a base URL (scheme required, trailing slashes removed).
pub(crate) fn normalize_base_url(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
    }

    let url = raw.trim_end_matches('/').to_string();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ClientError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        // Valid URLs
        assert!(MoodtuneClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(MoodtuneClient::new(ClientConfig::new("http://localhost:8080")).is_ok());

        // Invalid URLs
        assert!(MoodtuneClient::new(ClientConfig::new("")).is_err());
        assert!(MoodtuneClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(MoodtuneClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn test_url_normalization() {
        assert_eq!(
            normalize_base_url("https://example.com///").unwrap(),
            "https://example.com"
        );
    }

    #[tokio::test]
    async fn test_token_roundtrip() {
        let client = MoodtuneClient::new(ClientConfig::new("https://example.com")).unwrap();
        assert!(!client.is_authenticated().await);

        client.set_identity_token(Some("id-token".into())).await;
        assert_eq!(client.identity_token().await.as_deref(), Some("id-token"));

        // Clones share the token
        let clone = client.clone();
        clone.clear_identity_token().await;
        assert!(!client.is_authenticated().await);
    }
}
