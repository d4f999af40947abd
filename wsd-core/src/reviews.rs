//! Paginated, rating-filtered review list for one business.

use std::fmt;
use std::str::FromStr;

use log::debug;
use wsd_api::filters::{ReviewQuery, RATING_OPTIONS};
use wsd_api::review::Review;
use wsd_api::transport::Transport;
use wsd_api::{ApiClient, ApiError, Page};

use crate::generation::{Generation, Ticket};
use crate::listing::PageState;
use crate::pagination::Pager;

/// Reviews per page.
pub const PAGE_SIZE: u32 = 10;

/// Star filter of the reviews view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingFilter {
    #[default]
    All,
    Stars(u8),
}

impl RatingFilter {
    pub fn rating(self) -> Option<u8> {
        match self {
            RatingFilter::All => None,
            RatingFilter::Stars(n) => Some(n),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid rating filter {0:?}, expected \"all\" or 1-5")]
pub struct InvalidRating(pub String);

impl FromStr for RatingFilter {
    type Err = InvalidRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(RatingFilter::All),
            other => other
                .parse::<u8>()
                .ok()
                .filter(|n| RATING_OPTIONS.contains(n))
                .map(RatingFilter::Stars)
                .ok_or_else(|| InvalidRating(s.to_string())),
        }
    }
}

impl fmt::Display for RatingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingFilter::All => write!(f, "all"),
            RatingFilter::Stars(n) => write!(f, "{}", n),
        }
    }
}

/// Page and rating filter of the reviews view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewParams {
    pub page: u32,
    pub rating: RatingFilter,
}

impl Default for ReviewParams {
    fn default() -> Self {
        Self {
            page: 1,
            rating: RatingFilter::All,
        }
    }
}

impl ReviewParams {
    /// Changing the rating filter always returns to page 1.
    pub fn with_rating(self, rating: RatingFilter) -> Self {
        Self { page: 1, rating }
    }

    pub fn with_page(self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }

    pub fn query(&self) -> ReviewQuery {
        ReviewQuery {
            page: self.page.max(1),
            page_size: PAGE_SIZE,
            rating: self.rating.rating(),
        }
    }
}

/// A review query ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    pub ticket: Ticket,
    pub business_id: String,
    pub query: ReviewQuery,
}

/// Drives the reviews view; newest query wins.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewsController {
    generation: Generation,
    state: PageState<Review>,
    total: u64,
}

impl Default for ReviewsController {
    fn default() -> Self {
        Self {
            generation: Generation::new(),
            state: PageState::Loading,
            total: 0,
        }
    }
}

impl ReviewsController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PageState<Review> {
        &self.state
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn pager(&self, page: u32) -> Pager {
        Pager::new(page, PAGE_SIZE, self.total)
    }

    pub fn begin(&mut self, business_id: &str, params: ReviewParams) -> ReviewRequest {
        let ticket = self.generation.next();
        self.state = PageState::Loading;
        let query = params.query();
        debug!("Reviews query for {}: {:?}", business_id, query);
        ReviewRequest {
            ticket,
            business_id: business_id.to_string(),
            query,
        }
    }

    /// Apply a response. Returns `false` if a newer query has started since.
    pub fn finish(&mut self, ticket: Ticket, result: Result<Page<Review>, ApiError>) -> bool {
        if !self.generation.is_current(ticket) {
            debug!("Dropping stale reviews response {:?}", ticket);
            return false;
        }
        let (state, total) = PageState::settle(result, "reviews");
        self.state = state;
        self.total = total;
        true
    }

    /// `begin`, fetch and `finish`, refetching at the last page when `params`
    /// points past it.
    pub async fn query<T: Transport>(
        &mut self,
        client: &ApiClient<T>,
        business_id: &str,
        params: ReviewParams,
    ) -> &PageState<Review> {
        let request = self.begin(business_id, params);
        let result = client.reviews(&request.business_id, &request.query).await;
        self.finish(request.ticket, result);

        let clamped = self.pager(params.page).page();
        if clamped != request.query.page && self.total > 0 {
            debug!("Reviews page {} is past the end, loading page {}", params.page, clamped);
            let request = self.begin(business_id, params.with_page(clamped));
            let result = client.reviews(&request.business_id, &request.query).await;
            self.finish(request.ticket, result);
        }
        &self.state
    }
}
