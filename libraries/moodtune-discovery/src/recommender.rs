//! Mood submission flow: analysis first, then video lookups.

use crate::youtube::search_videos;
use moodtune_core::{MoodAnalyzer, MoodRecommendation, MoodtuneError, Result, VideoSearch};
use std::sync::Arc;
use tracing::{error, info};

/// Shown for any failure of the analysis step; the user has to resubmit.
pub const ANALYSIS_ERROR_MESSAGE: &str = "AI 분석 중 오류가 발생했어요. 잠시 후 다시 시도해줘.";

/// Turns a mood into tracks and videos.
#[derive(Clone)]
pub struct Recommender {
    analyzer: Arc<dyn MoodAnalyzer>,
    videos: Arc<dyn VideoSearch>,
}

impl Recommender {
    pub fn new(analyzer: Arc<dyn MoodAnalyzer>, videos: Arc<dyn VideoSearch>) -> Self {
        Self { analyzer, videos }
    }

    /// Analyze `mood`, number the tracks and resolve the video queries.
    ///
    /// No retries: any failure is returned as is.
    pub async fn recommend(&self, mood: &str) -> Result<MoodRecommendation> {
        let mood = mood.trim();
        if mood.is_empty() {
            return Err(MoodtuneError::invalid_input("Mood cannot be empty"));
        }

        let analysis = self.analyzer.analyze(mood).await.map_err(|e| {
            error!(error = %e, "Mood analysis failed");
            e
        })?;
        let tracks = analysis.numbered_tracks();

        let videos = search_videos(self.videos.as_ref(), &analysis.video_queries)
            .await
            .map_err(|e| {
                error!(error = %e, "Video search failed");
                e
            })?;

        info!(
            tracks = tracks.len(),
            videos = videos.len(),
            "Recommendation ready"
        );

        Ok(MoodRecommendation {
            mood: mood.to_string(),
            analysis: analysis.analysis,
            tracks,
            videos,
        })
    }
}
