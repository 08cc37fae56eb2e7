//! Where feed pages come from

use crate::error::Result;
use async_trait::async_trait;
use moodtune_client::{FeedRequest, MoodtuneClient, PlaylistPage};

/// Executes composed feed requests.
///
/// The backend client is the production implementation; tests plug in
/// scripted sources to control response timing.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_page(&self, request: &FeedRequest) -> Result<PlaylistPage>;
}

#[async_trait]
impl FeedSource for MoodtuneClient {
    async fn fetch_page(&self, request: &FeedRequest) -> Result<PlaylistPage> {
        Ok(self.fetch_feed(request).await?)
    }
}
