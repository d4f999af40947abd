//! Business detail: six independent queries joined into one view model.
//!
//! The queries run concurrently and each lands in its own `Option` slot.
//! A failing endpoint only empties its own section; the rest of the view
//! renders from whatever succeeded.

use futures::join;
use log::{debug, warn};
use wsd_api::business::Business;
use wsd_api::filters::ReviewQuery;
use wsd_api::review::{Review, ReviewSummary};
use wsd_api::stats::{MonthlyStat, StatsTotal, YearlyStat};
use wsd_api::transport::Transport;
use wsd_api::{ApiClient, ApiError, Page};

use crate::address::{fallback_address, AddressResolver, Geocode};
use crate::hours::{opening_hours, DayHours};
use crate::series::{
    available_years, chart_points, monthly_series, rating_bars, yearly_series, ChartPoint,
    MonthlyPoint, Period, RatingBar, YearlyPoint,
};

/// Reviews fetched for the preview section.
pub const PREVIEW_REVIEWS: u32 = 2;

/// How many of the fetched preview reviews are shown.
pub const PREVIEW_SHOWN: usize = 1;

pub const NO_DESCRIPTION: &str = "No description available";

/// Raw results of the six detail queries, each absent on failure.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailSlots {
    pub detail: Option<Business>,
    pub summary: Option<ReviewSummary>,
    pub total: Option<StatsTotal>,
    pub yearly: Option<Vec<YearlyStat>>,
    pub monthly: Option<Vec<MonthlyStat>>,
    pub recent: Option<Page<Review>>,
}

/// Issue the six detail queries concurrently and wait for all of them.
pub async fn fetch_slots<T: Transport>(client: &ApiClient<T>, business_id: &str) -> DetailSlots {
    debug!("Loading detail for {}", business_id);
    let preview = ReviewQuery {
        page: 1,
        page_size: PREVIEW_REVIEWS,
        rating: None,
    };
    let (detail, summary, total, yearly, monthly, recent) = join!(
        client.business(business_id),
        client.review_summary(business_id),
        client.stats_total(business_id),
        client.stats_yearly(business_id),
        client.stats_monthly(business_id),
        client.reviews(business_id, &preview),
    );

    DetailSlots {
        detail: slot(detail, "detail", business_id),
        summary: slot(summary, "review summary", business_id),
        total: slot(total, "total stats", business_id),
        yearly: slot(yearly, "yearly stats", business_id),
        monthly: slot(monthly, "monthly stats", business_id),
        recent: slot(recent, "recent reviews", business_id),
    }
}

fn slot<T>(result: Result<T, ApiError>, what: &str, business_id: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to load {} for {}: {}", what, business_id, e);
            None
        }
    }
}

/// Everything the detail view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    /// The list record that was selected.
    pub selected: Business,
    /// The full detail record, when that query succeeded.
    pub detail: Option<Business>,
    pub address: String,
    pub summary: Option<ReviewSummary>,
    pub total: Option<StatsTotal>,
    pub yearly: Vec<YearlyPoint>,
    pub monthly: Vec<MonthlyPoint>,
    pub recent_reviews: Vec<Review>,
}

impl DetailView {
    /// Derive the view from joined slots and an already-resolved address.
    pub fn from_slots(selected: Business, slots: DetailSlots, address: String) -> Self {
        Self {
            selected,
            detail: slots.detail,
            address,
            summary: slots.summary,
            total: slots.total,
            yearly: yearly_series(slots.yearly.unwrap_or_default()),
            monthly: monthly_series(slots.monthly.unwrap_or_default()),
            recent_reviews: slots.recent.map(|page| page.data).unwrap_or_default(),
        }
    }

    /// The detail record, or the selected list record if detail failed.
    pub fn business(&self) -> &Business {
        self.detail.as_ref().unwrap_or(&self.selected)
    }

    pub fn description(&self) -> &str {
        self.business().description().unwrap_or(NO_DESCRIPTION)
    }

    pub fn category(&self) -> &str {
        self.business().category().unwrap_or("N/A")
    }

    /// `"City, County"` sub-line under the address.
    pub fn locality(&self) -> Option<String> {
        let business = self.business();
        fallback_address(business.city(), business.county())
    }

    pub fn hours(&self) -> Vec<DayHours> {
        opening_hours(self.business().hours())
    }

    pub fn rating_bars(&self) -> Vec<RatingBar> {
        rating_bars(self.summary.as_ref())
    }

    pub fn preview_reviews(&self) -> &[Review] {
        let shown = self.recent_reviews.len().min(PREVIEW_SHOWN);
        &self.recent_reviews[..shown]
    }

    pub fn available_years(&self) -> Vec<i32> {
        available_years(&self.yearly)
    }

    /// Whether to offer the yearly/monthly period selector.
    pub fn has_series(&self) -> bool {
        !self.yearly.is_empty() || !self.monthly.is_empty()
    }

    pub fn chart_points(&self, period: Period) -> Vec<ChartPoint> {
        chart_points(period, &self.yearly, &self.monthly)
    }
}

/// Fetch, join, resolve the address and derive the detail view.
///
/// The address is resolved from the detail record when it loaded, otherwise
/// from the selected list record.
pub async fn load_detail<T, G>(
    client: &ApiClient<T>,
    resolver: &AddressResolver<G>,
    selected: Business,
) -> DetailView
where
    T: Transport,
    G: Geocode,
{
    let slots = fetch_slots(client, &selected.business_id).await;
    let address = resolver
        .resolve(slots.detail.as_ref().unwrap_or(&selected))
        .await;
    DetailView::from_slots(selected, slots, address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wsd_api::geocode::ReverseGeocoder;
    use wsd_api::transport::StaticTransport;

    const BASE: &str = "http://api.test/api/v1";

    const DETAIL: &str = r#"{
        "business_id": "b1",
        "name": "Gas Works Park",
        "description": "Former gasification plant turned park",
        "address": "2101 N Northlake Way, Seattle, WA 98103",
        "county": "King",
        "city": "Seattle",
        "latitude": 47.6456,
        "longitude": -122.3344,
        "avg_rating": 4.7,
        "num_of_reviews": 9120,
        "hours": "{\"Sunday\": \"6AM-10PM\", \"Monday\": \"6AM-10PM\"}",
        "original_category": "Park",
        "is_permanently_closed": false
    }"#;
    const SUMMARY: &str = r#"{"business_id":"b1","total_reviews":10,"rating_distribution":[{"rating":5,"count":0},{"rating":4,"count":10}]}"#;
    const TOTAL: &str = r#"{"business_id":"b1","total_reviews":10,"positive_count":7,"neutral_count":2,"negative_count":1,"positive_pct":"70.00","neutral_pct":"20.00","negative_pct":"10.00"}"#;
    const YEARLY: &str = r#"{"business_id":"b1","data":[{"year":2021,"avg_sentiment":"0.80","positive_count":5},{"year":2019,"avg_sentiment":"bad","positive_count":2}]}"#;
    const MONTHLY: &str = r#"{"business_id":"b1","data":[{"year":2021,"month":6,"avg_sentiment":0.9},{"year":2019,"month":7,"avg_sentiment":0.5},{"year":2021,"month":2,"avg_sentiment":0.7}]}"#;
    const RECENT: &str = r#"{"total":10,"page":1,"page_size":2,"data":[{"review_id":"r1","business_id":"b1","rating":5,"text":"Kites!"},{"review_id":"r2","business_id":"b1","rating":4,"text":"Windy"}]}"#;

    fn all_routes() -> StaticTransport {
        StaticTransport::new()
            .with("http://api.test/api/v1/businesses/b1", DETAIL)
            .with("http://api.test/api/v1/businesses/b1/reviews/summary", SUMMARY)
            .with("http://api.test/api/v1/businesses/b1/stats/total", TOTAL)
            .with("http://api.test/api/v1/businesses/b1/stats/yearly", YEARLY)
            .with("http://api.test/api/v1/businesses/b1/stats/monthly", MONTHLY)
            .with(
                "http://api.test/api/v1/businesses/b1/reviews?page=1&page_size=2",
                RECENT,
            )
    }

    fn resolver() -> AddressResolver<ReverseGeocoder<StaticTransport>> {
        AddressResolver::new(ReverseGeocoder::with_transport(
            "https://geo.test",
            StaticTransport::new(),
        ))
    }

    #[tokio::test]
    async fn issues_all_six_queries() {
        let client = ApiClient::with_transport(BASE, all_routes());
        let slots = fetch_slots(&client, "b1").await;
        assert_eq!(client.transport().requested().len(), 6);
        assert!(slots.detail.is_some());
        assert!(slots.summary.is_some());
        assert!(slots.total.is_some());
        assert!(slots.yearly.is_some());
        assert!(slots.monthly.is_some());
        assert!(slots.recent.is_some());
    }

    #[tokio::test]
    async fn derives_full_view() {
        let client = ApiClient::with_transport(BASE, all_routes());
        let view = load_detail(&client, &resolver(), Business::with_id("b1")).await;

        assert_eq!(view.business().name(), "Gas Works Park");
        assert_eq!(view.address, "2101 N Northlake Way, Seattle, WA 98103");
        assert_eq!(view.locality().as_deref(), Some("Seattle, King"));
        assert_eq!(view.description(), "Former gasification plant turned park");
        assert_eq!(view.category(), "Park");

        let years: Vec<i32> = view.yearly.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2019, 2021]);
        assert_eq!(view.yearly[0].avg_sentiment, 0.0);
        assert_eq!(view.available_years(), vec![2019, 2021]);

        let months: Vec<&str> = view.monthly.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(months, vec!["7/2019", "2/2021", "6/2021"]);
        let points = view.chart_points(Period::Year(2021));
        assert_eq!(points.iter().map(|p| p.x).collect::<Vec<_>>(), vec![2, 6]);

        let bars = view.rating_bars();
        assert_eq!(bars[0].width_pct, 0.0);
        assert_eq!(bars[1].width_pct, 100.0);

        let hours = view.hours();
        assert_eq!(hours[0].day, "Monday");
        assert_eq!(hours[1].day, "Sunday");

        assert_eq!(view.recent_reviews.len(), 2);
        assert_eq!(view.preview_reviews().len(), 1);
        assert_eq!(view.total.as_ref().map(|t| t.positive_count), Some(7));
    }

    #[tokio::test]
    async fn one_failing_endpoint_only_empties_its_section() {
        let transport = all_routes()
            .with_status("http://api.test/api/v1/businesses/b1/stats/yearly", 500)
            .with("http://api.test/api/v1/businesses/b1/reviews/summary", "not json");
        let client = ApiClient::with_transport(BASE, transport);
        let view = load_detail(&client, &resolver(), Business::with_id("b1")).await;

        assert!(view.yearly.is_empty());
        assert!(view.summary.is_none());
        assert!(view.rating_bars().iter().all(|b| b.width_pct == 0.0));
        assert_eq!(view.monthly.len(), 3);
        assert!(view.has_series());
        assert!(view.total.is_some());
        assert_eq!(view.business().name(), "Gas Works Park");
    }

    #[tokio::test]
    async fn failed_detail_falls_back_to_selected_record() {
        let client = ApiClient::with_transport(BASE, StaticTransport::new());
        let selected = Business {
            name: Some("Ruby Beach".into()),
            city: Some("Forks".into()),
            county: Some("Jefferson".into()),
            ..Business::with_id("b1")
        };
        let view = load_detail(&client, &resolver(), selected).await;

        assert_eq!(view.business().name(), "Ruby Beach");
        assert_eq!(view.address, "Forks, Jefferson");
        assert_eq!(view.description(), NO_DESCRIPTION);
        assert_eq!(view.category(), "N/A");
        assert!(view.hours().is_empty());
        assert!(!view.has_series());
        assert!(view.recent_reviews.is_empty());
        assert!(view.chart_points(Period::All).is_empty());
    }
}
