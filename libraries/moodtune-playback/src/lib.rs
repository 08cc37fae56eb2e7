//! Moodtune Playback
//!
//! Track previews for recommended tracks.
//!
//! Clicking a track looks up a short clip. If one exists it plays, with a
//! manual-play fallback when the host blocks autoplay; otherwise a lyrics
//! search opens in the browser. Only one preview plays at a time and
//! clicking the playing track again stops it.
//!
//! Platform specifics (audio output, link opening) are provided via traits.

mod error;
mod links;
mod output;
mod player;

pub use error::{PlaybackError, Result};
pub use links::{LinkOpener, SystemLinkOpener};
pub use output::{AudioHandle, AudioOutput, SystemPlayerOutput};
pub use player::{ClickOutcome, PreviewPlayer, PreviewState};
