//! Server-side pagination and search state for list pages.

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;

use crate::config::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

/// The parts of [`ListState`] that determine which rows to fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u64,
    pub size: u64,
    pub search: String,
    /// Bumped to force a re-fetch; never sent to the server.
    pub revision: u64,
}

/// Pagination, search, and loading state for one list page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState {
    /// Zero-based page index.
    pub page: u64,
    pub page_size: u64,
    pub search: String,
    /// Total rows reported by the server.
    pub row_count: u64,
    pub loading: bool,
    pub revision: u64,
    /// Ticket of the most recent fetch; older responses are stale.
    pub fetch_ticket: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            row_count: 0,
            loading: false,
            revision: 0,
            fetch_ticket: 0,
        }
    }
}

impl ListState {
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            size: self.page_size,
            search: self.search.clone(),
            revision: self.revision,
        }
    }

    /// Re-fetch the current page, e.g. after a delete.
    pub fn reload(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Mark a fetch as started and return its ticket.
    ///
    /// Every fetch gets a fresh ticket, so a filter change that leaves the
    /// query untouched still supersedes the earlier request.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_ticket = self.fetch_ticket.wrapping_add(1);
        self.loading = true;
        self.fetch_ticket
    }

    /// Whether a response for `ticket` is still the one to show.
    pub fn is_current_fetch(&self, ticket: u64) -> bool {
        self.fetch_ticket == ticket
    }

    /// Number of pages, at least one.
    pub fn page_count(&self) -> u64 {
        self.row_count.div_ceil(self.page_size.max(1)).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    /// Jump to `page`, clamped to the last page.
    pub fn set_page(&mut self, page: u64) {
        self.page = page.min(self.page_count() - 1);
    }

    /// Change the page size. Sizes outside the offered options are ignored.
    pub fn set_page_size(&mut self, size: u64) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return false;
        }
        self.page_size = size;
        self.page = 0;
        true
    }

    /// Apply a search term and return to the first page.
    pub fn apply_search(&mut self, term: &str) {
        self.search = term.trim().to_owned();
        self.page = 0;
    }

    /// Record a server response's total and clear the loading flag.
    pub fn record_total(&mut self, total: u64) {
        self.row_count = total;
        self.loading = false;
    }

    /// One-based "first-last of total" range label.
    pub fn range_label(&self) -> String {
        if self.row_count == 0 {
            return "0 of 0".to_owned();
        }
        let first = self.page * self.page_size + 1;
        let last = ((self.page + 1) * self.page_size).min(self.row_count);
        format!("{first}-{last} of {}", self.row_count)
    }
}
