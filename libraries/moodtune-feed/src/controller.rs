//! Feed controller: filters, sequencing, accumulation and the load-more
//! trigger behind one handle.

use crate::query::FeedFilters;
use crate::sequencer::{Completion, FeedState, FetchTicket};
use crate::source::FeedSource;
use crate::trigger::{LoadMoreTrigger, TriggerPhase};
use moodtune_core::{Category, Playlist, SortOrder};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Everything a feed view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSnapshot {
    pub results: Vec<Playlist>,
    pub total: u64,
    pub loading: bool,
    pub loading_more: bool,
    pub error: Option<&'static str>,
    /// Load-more watcher is registered
    pub trigger_registered: bool,
    pub phase: TriggerPhase,
    pub all_loaded: bool,
    pub search_input: String,
    pub debounced_search: String,
    pub category: Category,
    /// Highlighted sort toggle; `None` while searching
    pub active_sort: Option<SortOrder>,
}

struct Inner {
    state: FeedState,
    trigger: LoadMoreTrigger,
}

impl Inner {
    fn sync_trigger(&mut self) {
        let armed = self.state.can_trigger_load_more();
        self.trigger.sync(armed);
    }
}

/// Drives one feed view.
///
/// Locks are never held across a fetch; concurrent calls interleave the way
/// UI callbacks would, and the sequencer discards whatever they supersede.
pub struct FeedController<S: FeedSource> {
    source: Arc<S>,
    inner: Mutex<Inner>,
}

impl<S: FeedSource> FeedController<S> {
    pub fn new(source: Arc<S>, page_size: u32) -> Self {
        Self::with_filters(source, page_size, FeedFilters::default())
    }

    /// Controller with preselected filters. Call [`FeedController::refresh`]
    /// to load the first page.
    pub fn with_filters(source: Arc<S>, page_size: u32, filters: FeedFilters) -> Self {
        Self {
            source,
            inner: Mutex::new(Inner {
                state: FeedState::with_filters(page_size, filters),
                trigger: LoadMoreTrigger::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, page: u32, append: bool) -> FetchTicket {
        let mut inner = self.lock();
        let ticket = inner.state.begin(page, append);
        inner.sync_trigger();
        ticket
    }

    async fn run(&self, ticket: FetchTicket) -> Completion {
        let outcome = self.source.fetch_page(&ticket.request).await;

        let mut inner = self.lock();
        let completion = inner.state.complete(&ticket, outcome);
        inner.sync_trigger();
        completion
    }

    /// Load `page` under the current filters, replacing or appending.
    pub async fn load(&self, page: u32, append: bool) -> Completion {
        let ticket = self.begin(page, append);
        self.run(ticket).await
    }

    /// Fresh load of the first page.
    pub async fn refresh(&self) -> Completion {
        self.load(1, false).await
    }

    /// The load-more trigger became visible.
    ///
    /// Returns `None` when no watcher was registered.
    pub async fn on_trigger_visible(&self) -> Option<Completion> {
        let ticket = {
            let mut inner = self.lock();
            if !inner.trigger.on_visible() {
                debug!("Load-more trigger not registered; ignoring");
                return None;
            }
            let next_page = inner.state.loaded_pages() + 1;
            let ticket = inner.state.begin(next_page, true);
            inner.sync_trigger();
            ticket
        };

        Some(self.run(ticket).await)
    }

    /// Keystroke in the search box. Reloads only if the sort was reset.
    pub async fn set_search_input(&self, text: &str) -> Option<Completion> {
        let changed = self.lock().state.filters_mut().set_search_input(text);
        self.reload_if(changed).await
    }

    /// Debounced search value arrived.
    pub async fn commit_search(&self, value: &str) -> Option<Completion> {
        let changed = self.lock().state.filters_mut().commit_search(value);
        self.reload_if(changed).await
    }

    pub async fn clear_search(&self) -> Option<Completion> {
        let changed = self.lock().state.filters_mut().clear_search();
        self.reload_if(changed).await
    }

    pub async fn set_category(&self, category: Category) -> Option<Completion> {
        let changed = self.lock().state.filters_mut().set_category(category);
        self.reload_if(changed).await
    }

    pub async fn set_sort(&self, sort: SortOrder) -> Option<Completion> {
        let changed = self.lock().state.filters_mut().set_sort(sort);
        self.reload_if(changed).await
    }

    async fn reload_if(&self, changed: bool) -> Option<Completion> {
        if changed {
            Some(self.refresh().await)
        } else {
            None
        }
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        let inner = self.lock();
        let state = &inner.state;
        let filters = state.filters();

        FeedSnapshot {
            results: state.results().to_vec(),
            total: state.total(),
            loading: state.is_loading(),
            loading_more: state.is_loading_more(),
            error: state.error(),
            trigger_registered: inner.trigger.is_registered(),
            phase: LoadMoreTrigger::phase(
                state.is_loading(),
                state.is_loading_more(),
                state.has_more(),
            ),
            all_loaded: state.all_loaded(),
            search_input: filters.search_input().to_string(),
            debounced_search: filters.debounced_search().to_string(),
            category: filters.category().clone(),
            active_sort: filters.active_sort(),
        }
    }
}
