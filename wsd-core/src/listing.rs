//! Paginated, filtered business list.

use log::{debug, warn};
use wsd_api::business::Business;
use wsd_api::filters::{BusinessQuery, Filters};
use wsd_api::transport::Transport;
use wsd_api::{ApiClient, ApiError, Page};

use crate::generation::{Generation, Ticket};
use crate::pagination::Pager;

/// Businesses per list page.
pub const PAGE_SIZE: u32 = 20;

/// Render state of a paginated view. The three states are exclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    /// A query is in flight; show skeleton placeholders.
    Loading,
    /// The last completed query returned these items, in API order.
    Populated(Vec<T>),
    /// The last completed query returned nothing (or failed).
    Empty,
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn items(&self) -> &[T] {
        match self {
            PageState::Populated(items) => items,
            _ => &[],
        }
    }

    /// Collapse a response into a state plus total. Failures are logged and
    /// shown as an empty result.
    pub(crate) fn settle(result: Result<Page<T>, ApiError>, what: &str) -> (Self, u64) {
        match result {
            Ok(page) if page.data.is_empty() => (PageState::Empty, page.total),
            Ok(page) => (PageState::Populated(page.data), page.total),
            Err(e) => {
                warn!("Failed to load {}: {}", what, e);
                (PageState::Empty, 0)
            }
        }
    }
}

/// A list query ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub ticket: Ticket,
    pub query: BusinessQuery,
}

/// Drives the business list: one outstanding query at a time, newest wins.
#[derive(Debug, Clone, PartialEq)]
pub struct ListController {
    generation: Generation,
    state: PageState<Business>,
    total: u64,
}

impl Default for ListController {
    fn default() -> Self {
        Self {
            generation: Generation::new(),
            state: PageState::Loading,
            total: 0,
        }
    }
}

impl ListController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PageState<Business> {
        &self.state
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Pagination for `page` against the last known total.
    pub fn pager(&self, page: u32) -> Pager {
        Pager::new(page, PAGE_SIZE, self.total)
    }

    /// Start a query for `filters` at `page`, superseding any in-flight one.
    pub fn begin(&mut self, filters: &Filters, page: u32) -> ListRequest {
        let ticket = self.generation.next();
        self.state = PageState::Loading;
        let query = BusinessQuery {
            filters: filters.clone(),
            page: page.max(1),
            page_size: PAGE_SIZE,
        };
        debug!("List query {:?}", query);
        ListRequest { ticket, query }
    }

    /// Apply a response. Returns `false` if a newer query has started since.
    pub fn finish(&mut self, ticket: Ticket, result: Result<Page<Business>, ApiError>) -> bool {
        if !self.generation.is_current(ticket) {
            debug!("Dropping stale list response {:?}", ticket);
            return false;
        }
        let (state, total) = PageState::settle(result, "businesses");
        self.state = state;
        self.total = total;
        true
    }

    /// `begin`, fetch and `finish` in one call. A page beyond the last one is
    /// refetched at the last page.
    pub async fn query<T: Transport>(
        &mut self,
        client: &ApiClient<T>,
        filters: &Filters,
        page: u32,
    ) -> &PageState<Business> {
        let request = self.begin(filters, page);
        let result = client.businesses(&request.query).await;
        self.finish(request.ticket, result);

        // A page past the end comes back empty but with the real total.
        let clamped = self.pager(page).page();
        if clamped != request.query.page && self.total > 0 {
            debug!("List page {} is past the end, loading page {}", page, clamped);
            let request = self.begin(filters, clamped);
            let result = client.businesses(&request.query).await;
            self.finish(request.ticket, result);
        }
        &self.state
    }
}
