//! Query composition.
//!
//! Filters chosen in the UI collapse into exactly one outbound request:
//!
//! | search text | sort   | request                                 |
//! |-------------|--------|-----------------------------------------|
//! | non-empty   | any    | `GET /api/search?q=<text>&sort=latest`   |
//! | empty       | likes  | `GET /api/search?q=&sort=likes`          |
//! | empty       | latest | `GET /api/playlists?sort=latest`         |
//!
//! `category` is appended unless it is `전체`, followed by `page` and `limit`.

use moodtune_client::{FeedEndpoint, FeedRequest};
use moodtune_core::{Category, SortOrder};

/// Default number of playlists per page
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Everything that determines one feed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    /// Debounced, trimmed search text
    pub search: String,
    pub category: Category,
    pub sort: SortOrder,
    /// 1-based
    pub page: u32,
    pub page_size: u32,
}

impl FeedQuery {
    /// Build the request for this query.
    pub fn compose(&self) -> FeedRequest {
        let (mut request, sort) = if !self.search.is_empty() {
            (
                FeedRequest::new(FeedEndpoint::Search).with_param("q", self.search.as_str()),
                SortOrder::Latest,
            )
        } else if self.sort == SortOrder::Likes {
            (
                FeedRequest::new(FeedEndpoint::Search).with_param("q", ""),
                SortOrder::Likes,
            )
        } else {
            (FeedRequest::new(FeedEndpoint::Playlists), SortOrder::Latest)
        };

        if let Some(category) = self.category.as_param() {
            request = request.with_param("category", category);
        }

        request
            .with_param("sort", sort.as_str())
            .with_param("page", self.page.to_string())
            .with_param("limit", self.page_size.to_string())
    }
}

/// Filter inputs as the user manipulates them.
///
/// Setters return `true` when the effective query changed and the first page
/// must be reloaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedFilters {
    /// Raw search box contents, updated on every keystroke
    search_input: String,
    /// Value that participates in queries
    debounced_search: String,
    category: Category,
    sort: SortOrder,
}

impl FeedFilters {
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn debounced_search(&self) -> &str {
        &self.debounced_search
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Sort toggle highlighted in the UI; none while a search is active.
    pub fn active_sort(&self) -> Option<SortOrder> {
        if self.debounced_search.is_empty() {
            Some(self.sort)
        } else {
            None
        }
    }

    /// Keystroke in the search box.
    ///
    /// Typing while sorted by likes switches the sort back to latest, which
    /// changes the query immediately.
    pub fn set_search_input(&mut self, value: impl Into<String>) -> bool {
        self.search_input = value.into();
        if !self.search_input.is_empty() && self.sort == SortOrder::Likes {
            self.sort = SortOrder::Latest;
            return true;
        }
        false
    }

    /// Debounced search value arrived.
    pub fn commit_search(&mut self, value: &str) -> bool {
        let value = value.trim();
        if self.debounced_search == value {
            return false;
        }
        self.debounced_search = value.to_string();
        true
    }

    /// Clear button: both raw and debounced text empty at once.
    pub fn clear_search(&mut self) -> bool {
        self.search_input.clear();
        let changed = !self.debounced_search.is_empty();
        self.debounced_search.clear();
        changed
    }

    pub fn set_category(&mut self, category: Category) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        true
    }

    /// Choosing a sort drops any search.
    pub fn set_sort(&mut self, sort: SortOrder) -> bool {
        let changed = self.sort != sort || !self.debounced_search.is_empty();
        self.sort = sort;
        self.search_input.clear();
        self.debounced_search.clear();
        changed
    }

    /// Query for `page` under the current filters.
    pub fn query(&self, page: u32, page_size: u32) -> FeedQuery {
        FeedQuery {
            search: self.debounced_search.clone(),
            category: self.category.clone(),
            sort: self.sort,
            page,
            page_size,
        }
    }
}
