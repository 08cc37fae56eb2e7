//! Growing result list for incremental loading

use moodtune_core::Playlist;

/// Results loaded so far for the current filters.
///
/// Order is exactly the concatenation of each page in server order; nothing
/// is re-sorted or de-duplicated here.
#[derive(Debug, Clone, Default)]
pub struct PageAccumulator {
    results: Vec<Playlist>,
    total: u64,
    page: u32,
}

impl PageAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything; the next page appended is page 1.
    pub fn reset(&mut self) {
        self.results.clear();
        self.total = 0;
        self.page = 0;
    }

    /// Append one page and adopt the server's total.
    ///
    /// The total never drops below what is already shown.
    pub fn append(&mut self, items: Vec<Playlist>, total: u64) {
        self.results.extend(items);
        self.total = total.max(self.results.len() as u64);
        self.page += 1;
    }

    pub fn results(&self) -> &[Playlist] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of pages appended since the last reset
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn has_more(&self) -> bool {
        (self.results.len() as u64) < self.total
    }
}
