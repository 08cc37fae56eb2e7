//! Moodtune Discovery
//!
//! Clients for the external providers behind a mood submission:
//!
//! - **Mood analysis**: Gemini `generateContent`, JSON answer with optional
//!   code fences stripped
//! - **Video search**: YouTube Data API, first match per query
//! - **Preview lookup**: iTunes Search API, first song match
//! - **Recommender**: analysis followed by concurrent video searches
//!
//! Each client implements the matching `moodtune_core` trait so the flow can
//! run against fakes.

mod error;
mod gemini;
mod itunes;
mod links;
mod recommender;
mod youtube;

pub use error::{DiscoveryError, Result};
pub use gemini::{
    build_prompt, parse_analysis, strip_code_fences, GeminiClient, GeminiConfig,
    DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_URL,
};
pub use itunes::{ItunesClient, ItunesConfig, DEFAULT_COUNTRY, DEFAULT_ITUNES_URL};
pub use links::lyrics_search_url;
pub use recommender::{Recommender, ANALYSIS_ERROR_MESSAGE};
pub use youtube::{search_videos, YouTubeClient, YouTubeConfig, DEFAULT_YOUTUBE_URL};
