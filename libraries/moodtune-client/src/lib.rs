//! Moodtune Backend Client
//!
//! HTTP client library for the Moodtune backend API.
//!
//! # Features
//!
//! - **Feed**: paged playlist listing and search
//! - **My playlists**: playlists saved by the signed-in user
//! - **Save**: store a mood recommendation as a public playlist
//! - **Auth session**: mirror identity-provider state into a backend profile
//!
//! Every request carries `Authorization: Bearer <identity token>` when a
//! session exists, except `POST /api/auth/login` which sends the token it is
//! exchanging.

mod auth;
mod client;
mod error;
mod playlists;
mod saver;
mod session;
mod types;

// Re-export main types
pub use client::MoodtuneClient;
pub use error::{ClientError, Result, MY_PLAYLISTS_ERROR_MESSAGE, SAVE_ERROR_MESSAGE};
pub use saver::{PlaylistSaver, SaveOutcome, SaveState};
pub use session::{AuthSession, IdentityProvider, SessionState, StaticIdentityProvider};
pub use types::{ClientConfig, FeedEndpoint, FeedRequest, LoginResponse, PlaylistPage};

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use playlists::PlaylistsClient;
