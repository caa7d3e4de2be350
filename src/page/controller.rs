//! Owns one page's state across loads and drops superseded results.

use crate::client::LibraryClient;

use super::load::load;
use super::state::{FilterChange, Filters, PagePatch, PageState, reduce};

/// Identifies one load: the parameters it was issued with and its position
/// in the controller's sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    category_id: u32,
    filters: Filters,
}

impl LoadTicket {
    pub fn category_id(&self) -> u32 {
        self.category_id
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Run the fetches this ticket was issued for.
    ///
    /// Takes no reference to the controller, so the load can run on another
    /// task while the controller keeps accepting input.
    pub async fn run(&self, client: &LibraryClient, items_per_page: u32) -> PagePatch {
        load(client, self.category_id, &self.filters, items_per_page).await
    }
}

/// The catalog page for one category.
#[derive(Debug, Clone)]
pub struct PageController {
    category_id: u32,
    state: PageState,
    issued: u64,
}

impl PageController {
    pub fn new(category_id: u32) -> Self {
        Self {
            category_id,
            state: PageState::default(),
            issued: 0,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Point the page at another category. Returns `true` when the id
    /// changed, meaning the caller should load again.
    pub fn set_category(&mut self, category_id: u32) -> bool {
        if self.category_id == category_id {
            return false;
        }
        self.category_id = category_id;
        true
    }

    /// Record a filter input edit. Nothing is fetched until the next load.
    pub fn change_filter(&mut self, change: FilterChange) {
        let state = std::mem::take(&mut self.state);
        self.state = state.with_filter_change(change);
    }

    /// Start a load with the current category and filters. Any ticket
    /// issued before this one becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket {
            seq: self.issued,
            category_id: self.category_id,
            filters: self.state.filters.clone(),
        }
    }

    /// Apply a finished load. Returns `false` and leaves state untouched if
    /// a newer load has been started since `ticket` was issued.
    pub fn commit(&mut self, ticket: &LoadTicket, patch: PagePatch) -> bool {
        if ticket.seq != self.issued {
            tracing::debug!(
                ticket = ticket.seq,
                latest = self.issued,
                "dropping superseded load"
            );
            return false;
        }
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, patch);
        true
    }

    /// Load with the current filters and commit the result.
    ///
    /// Used on first display, after a category change and for the search
    /// action alike.
    pub async fn refresh(&mut self, client: &LibraryClient, items_per_page: u32) -> bool {
        let ticket = self.begin_load();
        let patch = ticket.run(client, items_per_page).await;
        self.commit(&ticket, patch)
    }
}
