//! Fetch sequencing with stale-response discarding.
//!
//! Every fetch takes a sequence id strictly greater than all earlier ones.
//! A response is only committed if its id is still the latest when it
//! arrives; anything else was superseded by a newer filter selection and is
//! dropped after the fact (nothing is aborted in flight).

use crate::accumulator::PageAccumulator;
use crate::error::{FeedError, FEED_ERROR_MESSAGE};
use crate::query::FeedFilters;
use moodtune_client::{FeedRequest, PlaylistPage};
use moodtune_core::Playlist;
use tracing::{debug, info, warn};

/// An issued fetch. Carries the sequence id captured at issue time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub sequence_id: u64,
    pub page: u32,
    pub append: bool,
    pub request: FeedRequest,
}

/// What happened to a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Page committed; `shown` results out of `total`
    Committed { shown: usize, total: u64 },
    /// A newer fetch was issued meanwhile; response ignored
    Discarded,
    /// Fresh load failed; the error banner is set
    Failed,
    /// Load-more failed; existing results kept, nothing shown
    LoadMoreFailed,
}

/// Page-level feed state: filters, results, loading flags and the sequence
/// counter.
#[derive(Debug, Clone)]
pub struct FeedState {
    filters: FeedFilters,
    accumulator: PageAccumulator,
    page_size: u32,
    loading: bool,
    loading_more: bool,
    error: Option<&'static str>,
    sequence_id: u64,
}

impl FeedState {
    pub fn new(page_size: u32) -> Self {
        Self::with_filters(page_size, FeedFilters::default())
    }

    /// Start from preselected filters; nothing is loaded yet.
    pub fn with_filters(page_size: u32, filters: FeedFilters) -> Self {
        Self {
            filters,
            accumulator: PageAccumulator::new(),
            page_size,
            loading: false,
            loading_more: false,
            error: None,
            sequence_id: 0,
        }
    }

    pub fn filters(&self) -> &FeedFilters {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FeedFilters {
        &mut self.filters
    }

    pub fn results(&self) -> &[Playlist] {
        self.accumulator.results()
    }

    pub fn total(&self) -> u64 {
        self.accumulator.total()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Pages committed under the current filters
    pub fn loaded_pages(&self) -> u32 {
        self.accumulator.page()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loading_more(&self) -> bool {
        self.loading_more
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Latest sequence id issued
    pub fn sequence_id(&self) -> u64 {
        self.sequence_id
    }

    pub fn has_more(&self) -> bool {
        self.accumulator.has_more()
    }

    /// The load-more trigger may exist only while nothing is in flight and
    /// more results remain.
    pub fn can_trigger_load_more(&self) -> bool {
        !self.loading && !self.loading_more && self.has_more()
    }

    /// Everything matching the filters is shown.
    pub fn all_loaded(&self) -> bool {
        !self.loading && !self.accumulator.is_empty() && !self.has_more()
    }

    /// Issue a fetch for `page`.
    ///
    /// A fresh load (`append == false`) also supersedes any load-more still
    /// in flight, so its flag is released here.
    pub fn begin(&mut self, page: u32, append: bool) -> FetchTicket {
        self.sequence_id += 1;

        if append {
            self.loading_more = true;
        } else {
            self.loading = true;
            self.loading_more = false;
            self.error = None;
        }

        let request = self.filters.query(page, self.page_size).compose();
        debug!(
            sequence_id = self.sequence_id,
            page,
            append,
            endpoint = request.endpoint.path(),
            "Issuing feed fetch"
        );

        FetchTicket {
            sequence_id: self.sequence_id,
            page,
            append,
            request,
        }
    }

    /// Apply the outcome of `ticket`'s fetch.
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<PlaylistPage, FeedError>,
    ) -> Completion {
        if ticket.sequence_id != self.sequence_id {
            debug!(
                sequence_id = ticket.sequence_id,
                latest = self.sequence_id,
                "Discarding stale feed response"
            );
            return Completion::Discarded;
        }

        let completion = match outcome {
            Ok(page) => {
                if !ticket.append {
                    self.accumulator.reset();
                }
                let total = page.total_count();
                self.accumulator.append(page.playlists, total);
                info!(
                    page = ticket.page,
                    shown = self.accumulator.len(),
                    total = self.accumulator.total(),
                    "Feed page committed"
                );
                Completion::Committed {
                    shown: self.accumulator.len(),
                    total: self.accumulator.total(),
                }
            }
            Err(e) if ticket.append => {
                warn!(error = %e, page = ticket.page, "Load more failed; keeping results");
                Completion::LoadMoreFailed
            }
            Err(e) => {
                warn!(error = %e, "Feed load failed");
                self.accumulator.reset();
                self.error = Some(FEED_ERROR_MESSAGE);
                Completion::Failed
            }
        };

        if ticket.append {
            self.loading_more = false;
        } else {
            self.loading = false;
        }

        completion
    }
}
