//! Preview clip lookup through the iTunes Search API.

use crate::error::{normalize_base_url, provider_error, DiscoveryError, Result};
use async_trait::async_trait;
use moodtune_core::{PreviewInfo, PreviewLookup};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_ITUNES_URL: &str = "https://itunes.apple.com";
pub const DEFAULT_COUNTRY: &str = "KR";

/// Connection settings for the preview lookup provider.
#[derive(Debug, Clone)]
pub struct ItunesConfig {
    pub base_url: String,
    pub country: String,
}

impl Default for ItunesConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ITUNES_URL.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl ItunesConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    result_count: u32,
    #[serde(default)]
    results: Vec<PreviewInfo>,
}

/// iTunes-backed [`PreviewLookup`].
pub struct ItunesClient {
    http: Client,
    config: ItunesConfig,
}

impl ItunesClient {
    pub fn new(config: ItunesConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let http = Client::builder()
            .user_agent(format!("Moodtune/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config: ItunesConfig {
                base_url,
                ..config
            },
        })
    }

    /// First song matching `"{title} {artist}"`.
    pub async fn search_song(&self, title: &str, artist: &str) -> Result<Option<PreviewInfo>> {
        let url = format!("{}/search", self.config.base_url);
        let term = format!("{} {}", title, artist);
        debug!(url = %url, term = %term, "Looking up preview");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("term", term.as_str()),
                ("entity", "song"),
                ("limit", "1"),
                ("country", self.config.country.as_str()),
            ])
            .send()
            .await
            .map_err(DiscoveryError::from_send)?;

        if !response.status().is_success() {
            return Err(provider_error("itunes", response).await);
        }

        // Served as text/javascript, so decode from text
        let body = response.text().await?;
        let found: SearchResponse = serde_json::from_str(&body).map_err(|e| {
            DiscoveryError::ParseError(format!("Failed to parse itunes response: {}", e))
        })?;

        if found.result_count == 0 {
            return Ok(None);
        }
        Ok(found.results.into_iter().next())
    }
}

#[async_trait]
impl PreviewLookup for ItunesClient {
    async fn lookup(&self, title: &str, artist: &str) -> moodtune_core::Result<Option<PreviewInfo>> {
        self.search_song(title, artist).await.map_err(Into::into)
    }
}
