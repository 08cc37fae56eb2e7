//! Playlist endpoints of the Moodtune backend.

use crate::error::{ClientError, Result};
use crate::types::{FeedRequest, PlaylistPage};
use moodtune_core::{NewPlaylist, Playlist};
use reqwest::{Client, RequestBuilder, Response};
use tracing::debug;

/// Playlist client for the Moodtune backend.
///
/// The bearer token is optional: the feed endpoints are public and degrade
/// gracefully without one.
pub struct PlaylistsClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    identity_token: Option<&'a str>,
}

impl<'a> PlaylistsClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, identity_token: Option<&'a str>) -> Self {
        Self {
            http,
            base_url,
            identity_token,
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.identity_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Fetch one feed page described by `request`.
    pub async fn fetch_page(&self, request: &FeedRequest) -> Result<PlaylistPage> {
        let url = format!("{}{}", self.base_url, request.endpoint.path());
        debug!(url = %url, params = ?request.params, "Fetching feed page");

        let response = self
            .authorized(self.http.get(&url).query(&request.params))
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let page: PlaylistPage = parse_json(response, "feed").await?;

        debug!(
            returned = page.playlists.len(),
            total = page.total_count(),
            "Fetched feed page"
        );

        Ok(page)
    }

    /// `GET /api/playlists/my`. Requires a token.
    pub async fn my_playlists(&self) -> Result<Vec<Playlist>> {
        let token = self.identity_token.ok_or(ClientError::AuthRequired)?;
        let url = format!("{}/api/playlists/my", self.base_url);
        debug!(url = %url, "Fetching own playlists");

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let page: PlaylistPage = parse_json(response, "my playlists").await?;
        debug!(count = page.playlists.len(), "Fetched own playlists");
        Ok(page.playlists)
    }

    /// `POST /api/playlists`. Requires a token.
    pub async fn create(&self, playlist: &NewPlaylist) -> Result<()> {
        let token = self.identity_token.ok_or(ClientError::AuthRequired)?;
        let url = format!("{}/api/playlists", self.base_url);
        debug!(url = %url, name = %playlist.name, tracks = playlist.tracks.len(), "Saving playlist");

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(playlist)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let status = response.status();

        if status.is_success() {
            debug!(status = %status, "Playlist created");
            Ok(())
        } else if status.as_u16() == 401 {
            Err(ClientError::AuthRequired)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

async fn parse_json<T: serde::de::DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse {} response: {}", what, e))
        })
    } else if status.as_u16() == 401 {
        Err(ClientError::AuthRequired)
    } else {
        let error_text = response.text().await.unwrap_or_default();
        Err(ClientError::ServerError {
            status: status.as_u16(),
            message: error_text,
        })
    }
}
