//! Moodtune Feed
//!
//! Incremental loading of the public playlist feed.
//!
//! - **Query composition**: filters to exactly one backend request
//! - **Fetch sequencing**: responses superseded by newer filters are dropped
//! - **Page accumulation**: pages concatenated in server order
//! - **Load-more trigger**: watcher registered only while loading more is
//!   allowed
//! - **Debounced search**: committed 300ms after the last keystroke
//!
//! # Example
//!
//! ```rust,no_run
//! use moodtune_client::{ClientConfig, MoodtuneClient};
//! use moodtune_feed::{FeedController, DEFAULT_PAGE_SIZE};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MoodtuneClient::new(ClientConfig::new("http://localhost:3000"))?;
//! let feed = FeedController::new(Arc::new(client), DEFAULT_PAGE_SIZE);
//!
//! feed.refresh().await;
//! while feed.on_trigger_visible().await.is_some() {}
//! println!("{} playlists", feed.snapshot().results.len());
//! # Ok(())
//! # }
//! ```

mod accumulator;
mod controller;
mod debounce;
mod error;
mod query;
mod sequencer;
mod source;
mod trigger;

pub use accumulator::PageAccumulator;
pub use controller::{FeedController, FeedSnapshot};
pub use debounce::{SearchDebouncer, SearchInput, DEFAULT_DEBOUNCE};
pub use error::{FeedError, Result, FEED_ERROR_MESSAGE};
pub use query::{FeedFilters, FeedQuery, DEFAULT_PAGE_SIZE};
pub use sequencer::{Completion, FeedState, FetchTicket};
pub use source::FeedSource;
pub use trigger::{LoadMoreTrigger, TriggerChange, TriggerPhase};
