//! Single-flight track preview.
//!
//! At most one audio handle exists at a time. Every transition releases the
//! previous handle before anything new is acquired.

use crate::error::{PlaybackError, Result};
use crate::links::LinkOpener;
use crate::output::{AudioHandle, AudioOutput};
use moodtune_core::{PreviewInfo, PreviewLookup, Track};
use moodtune_discovery::lyrics_search_url;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What the preview area shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewState {
    /// Track whose preview row is expanded
    pub active_track_id: Option<String>,
    pub loading: bool,
    /// Catalogue match, if any
    pub preview: Option<PreviewInfo>,
    pub is_playing: bool,
    /// Autoplay was blocked; a play button must be offered
    pub manual_play_needed: bool,
    /// No preview clip exists; a lyrics search was opened instead
    pub no_preview: bool,
}

/// Result of clicking a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The active track was clicked again; playback stopped
    ToggledOff,
    Playing,
    /// Clip loaded but the host blocked autoplay
    ManualPlayNeeded,
    /// No clip; lyrics search opened at this URL
    LyricsOpened(String),
}

/// Owns the single preview audio handle.
pub struct PreviewPlayer {
    lookup: Arc<dyn PreviewLookup>,
    output: Arc<dyn AudioOutput>,
    links: Arc<dyn LinkOpener>,
    state: PreviewState,
    handle: Option<Box<dyn AudioHandle>>,
}

impl PreviewPlayer {
    pub fn new(
        lookup: Arc<dyn PreviewLookup>,
        output: Arc<dyn AudioOutput>,
        links: Arc<dyn LinkOpener>,
    ) -> Self {
        Self {
            lookup,
            output,
            links,
            state: PreviewState::default(),
            handle: None,
        }
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    pub fn has_audio(&self) -> bool {
        self.handle.is_some()
    }

    /// Toggle the preview for `track`.
    ///
    /// Lookup failures are treated like a track without a preview.
    pub async fn click(&mut self, track: &Track) -> ClickOutcome {
        if self.state.active_track_id.as_deref() == Some(track.id.as_str()) {
            debug!(track_id = %track.id, "Preview toggled off");
            self.reset();
            return ClickOutcome::ToggledOff;
        }

        self.reset();
        self.state.active_track_id = Some(track.id.clone());
        self.state.loading = true;

        let found = match self.lookup.lookup(&track.title, &track.artist).await {
            Ok(found) => found,
            Err(e) => {
                warn!(error = %e, title = %track.title, "Preview lookup failed");
                None
            }
        };
        self.state.loading = false;

        let clip = found.as_ref().and_then(|info| info.preview_url.clone());
        self.state.preview = found;

        match clip {
            Some(url) => self.start(&url),
            None => {
                self.state.no_preview = true;
                let url = lyrics_search_url(&track.title, &track.artist);
                if let Err(e) = self.links.open(&url) {
                    warn!(error = %e, "Failed to open lyrics search");
                }
                ClickOutcome::LyricsOpened(url)
            }
        }
    }

    fn start(&mut self, url: &str) -> ClickOutcome {
        let mut handle = self.output.create(url);
        let outcome = match handle.play() {
            Ok(()) => {
                info!(url = %url, "Preview playing");
                self.state.is_playing = true;
                ClickOutcome::Playing
            }
            Err(e) => {
                debug!(error = %e, "Autoplay blocked; waiting for manual play");
                self.state.manual_play_needed = true;
                ClickOutcome::ManualPlayNeeded
            }
        };
        self.handle = Some(handle);
        outcome
    }

    /// Play after autoplay was blocked.
    pub fn manual_play(&mut self) -> Result<()> {
        let handle = self.handle.as_mut().ok_or(PlaybackError::NothingLoaded)?;
        handle.play()?;
        self.state.is_playing = true;
        self.state.manual_play_needed = false;
        Ok(())
    }

    /// Open the lyrics search for `track`, whether or not it has a preview.
    /// Playback is left untouched.
    pub fn open_lyrics(&self, track: &Track) -> Result<String> {
        let url = lyrics_search_url(&track.title, &track.artist);
        self.links.open(&url)?;
        Ok(url)
    }

    /// Open the catalogue page of the full track for the loaded preview.
    pub fn open_full_track(&self) -> Result<String> {
        let url = self
            .state
            .preview
            .as_ref()
            .map(|info| info.track_view_url.clone())
            .filter(|url| !url.is_empty())
            .ok_or(PlaybackError::NothingLoaded)?;
        self.links.open(&url)?;
        Ok(url)
    }

    /// Check whether the clip ended on its own; if so, clear the active
    /// track. Returns `true` when playback ended.
    pub fn poll(&mut self) -> bool {
        let playing = self.state.is_playing;
        let finished = self
            .handle
            .as_mut()
            .is_some_and(|handle| playing && handle.is_finished());
        if finished {
            self.playback_ended();
        }
        finished
    }

    /// The clip finished playing.
    pub fn playback_ended(&mut self) {
        debug!(track_id = ?self.state.active_track_id, "Preview ended");
        self.reset();
    }

    /// The surface owning the player went away.
    pub fn close(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.stop();
        }
        self.state = PreviewState::default();
    }
}

impl Drop for PreviewPlayer {
    fn drop(&mut self) {
        self.reset();
    }
}
