//! Saving a recommendation as a public playlist.

use crate::client::MoodtuneClient;
use crate::error::SAVE_ERROR_MESSAGE;
use moodtune_core::{MoodRecommendation, NewPlaylist};
use tracing::{info, warn};

/// Save button state for one recommendation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveState {
    pub saving: bool,
    pub saved: bool,
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Already saving or saved
    Skipped,
    /// No session; nothing was sent
    LoginRequired,
    /// Request failed; saving may be retried
    Failed,
}

/// Saves one recommendation at most once.
pub struct PlaylistSaver {
    client: MoodtuneClient,
    state: SaveState,
}

impl PlaylistSaver {
    pub fn new(client: MoodtuneClient) -> Self {
        Self {
            client,
            state: SaveState::default(),
        }
    }

    pub fn state(&self) -> &SaveState {
        &self.state
    }

    /// Save `recommendation` for the signed-in user.
    pub async fn save(&mut self, recommendation: &MoodRecommendation) -> SaveOutcome {
        if self.state.saving || self.state.saved {
            return SaveOutcome::Skipped;
        }
        if !self.client.is_authenticated().await {
            return SaveOutcome::LoginRequired;
        }

        self.state.saving = true;
        self.state.error = None;

        let playlist = NewPlaylist::from_recommendation(recommendation);
        let outcome = match self.client.create_playlist(&playlist).await {
            Ok(()) => {
                info!(name = %playlist.name, tracks = playlist.tracks.len(), "Playlist saved");
                self.state.saved = true;
                SaveOutcome::Saved
            }
            Err(e) => {
                warn!(error = %e, "Failed to save playlist");
                self.state.error = Some(SAVE_ERROR_MESSAGE);
                SaveOutcome::Failed
            }
        };

        self.state.saving = false;
        outcome
    }
}
