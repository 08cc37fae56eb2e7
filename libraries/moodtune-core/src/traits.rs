//! Collaborator traits.
//!
//! Every external provider (LLM, video search, preview lookup) sits behind one
//! of these seams so orchestration code can be exercised with fakes.

use crate::error::Result;
use crate::types::{MoodAnalysis, PreviewInfo, Video};
use async_trait::async_trait;

/// Turns a free-text mood into an analysis plus suggestions.
#[async_trait]
pub trait MoodAnalyzer: Send + Sync {
    /// Analyze a (trimmed, non-empty) mood description.
    async fn analyze(&self, mood: &str) -> Result<MoodAnalysis>;
}

/// Resolves a search query to its first matching video.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Search for `query`, returning the first hit.
    ///
    /// `ordinal` becomes the local id of the returned video. `Ok(None)` means
    /// the provider had no match, which is not an error.
    async fn first_video(&self, query: &str, ordinal: usize) -> Result<Option<Video>>;
}

/// Resolves a track to a short preview clip.
#[async_trait]
pub trait PreviewLookup: Send + Sync {
    /// Look up the first catalogue match for `title` and `artist`.
    ///
    /// `Ok(None)` (or a result without `preview_url`) is an expected outcome.
    async fn lookup(&self, title: &str, artist: &str) -> Result<Option<PreviewInfo>>;
}
