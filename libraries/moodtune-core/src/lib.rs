//! Moodtune Core
//!
//! Platform-agnostic domain types, collaborator traits and error handling
//! shared by every Moodtune crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Playlist`, `Track`, `Video`, `DbUser`, feed filters
//! - **Collaborator Traits**: `MoodAnalyzer`, `VideoSearch`, `PreviewLookup`
//! - **Error Handling**: Unified `MoodtuneError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use moodtune_core::types::{Category, MoodRecommendation, NewPlaylist, Track};
//!
//! let recommendation = MoodRecommendation {
//!     mood: "비 오는 밤".to_string(),
//!     analysis: "차분한 밤이네요.".to_string(),
//!     tracks: vec![Track::new("0", "Holocene", "Bon Iver", "Indie Folk")],
//!     videos: vec![],
//! };
//!
//! let playlist = NewPlaylist::from_recommendation(&recommendation);
//! assert_eq!(playlist.category, "Indie Folk");
//! assert_eq!(Category::parse("전체"), Category::All);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{MoodtuneError, Result};
pub use traits::{MoodAnalyzer, PreviewLookup, VideoSearch};

pub use types::{
    Category, DbUser, MoodAnalysis, MoodRecommendation, NewPlaylist, Playlist, PlaylistOwner,
    PreviewInfo, SortOrder, SuggestedTrack, Track, Video, FEED_CATEGORIES,
};
