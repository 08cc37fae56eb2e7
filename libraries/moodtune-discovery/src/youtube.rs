//! Video search through the YouTube Data API.

use crate::error::{normalize_base_url, provider_error, DiscoveryError, Result};
use async_trait::async_trait;
use futures_util::future::try_join_all;
use moodtune_core::{Video, VideoSearch};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_YOUTUBE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Connection settings for the video search provider.
#[derive(Debug, Clone)]
pub struct YouTubeConfig {
    pub api_key: String,
    pub base_url: String,
}

impl YouTubeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_YOUTUBE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemId {
    #[serde(default)]
    video_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    #[serde(default)]
    channel_title: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Deserialize, Default)]
struct Thumbnails {
    medium: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Deserialize)]
struct Thumbnail {
    url: String,
}

impl SearchItem {
    fn into_video(self, ordinal: usize) -> Video {
        let thumbnail_url = self
            .snippet
            .thumbnails
            .medium
            .or(self.snippet.thumbnails.default)
            .map(|t| t.url)
            .unwrap_or_default();

        Video {
            id: ordinal.to_string(),
            title: self.snippet.title,
            channel: self.snippet.channel_title,
            video_id: self.id.video_id,
            thumbnail_url,
        }
    }
}

/// YouTube-backed [`VideoSearch`].
pub struct YouTubeClient {
    http: Client,
    config: YouTubeConfig,
}

impl YouTubeClient {
    pub fn new(config: YouTubeConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let http = Client::builder()
            .user_agent(format!("Moodtune/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config: YouTubeConfig {
                base_url,
                ..config
            },
        })
    }

    /// First video for `query`; any non-2xx status is a hard failure.
    pub async fn search_first(&self, query: &str, ordinal: usize) -> Result<Option<Video>> {
        let url = format!("{}/search", self.config.base_url);
        debug!(url = %url, query = %query, "Searching videos");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", "1"),
                ("key", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(DiscoveryError::from_send)?;

        if !response.status().is_success() {
            return Err(provider_error("youtube", response).await);
        }

        let found: SearchResponse = response.json().await.map_err(|e| {
            DiscoveryError::ParseError(format!("Failed to parse youtube response: {}", e))
        })?;

        Ok(found
            .items
            .into_iter()
            .next()
            .map(|item| item.into_video(ordinal)))
    }
}

#[async_trait]
impl VideoSearch for YouTubeClient {
    async fn first_video(&self, query: &str, ordinal: usize) -> moodtune_core::Result<Option<Video>> {
        self.search_first(query, ordinal).await.map_err(Into::into)
    }
}

/// Run one search per query concurrently and keep the hits in query order.
///
/// Any failing query fails the whole batch.
pub async fn search_videos(
    search: &dyn VideoSearch,
    queries: &[String],
) -> moodtune_core::Result<Vec<Video>> {
    let results = try_join_all(
        queries
            .iter()
            .enumerate()
            .map(|(ordinal, query)| search.first_video(query, ordinal)),
    )
    .await?;

    Ok(results.into_iter().flatten().collect())
}
