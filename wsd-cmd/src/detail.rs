//! `detail` subcommand.

use std::fmt::Write;

use wsd_api::business::Business;
use wsd_api::transport::Transport;
use wsd_api::ApiClient;
use wsd_core::address::{AddressResolver, Geocode};
use wsd_core::detail::{load_detail, DetailView};
use wsd_core::format::{
    coordinates_line, format_rating, group_thousands, pct, review_date, sentiment_pct,
};
use wsd_core::hours::NO_HOURS;
use wsd_core::series::Period;

pub async fn run_detail<T, G>(
    client: &ApiClient<T>,
    resolver: &AddressResolver<G>,
    business_id: &str,
    period: Period,
) -> anyhow::Result<()>
where
    T: Transport,
    G: Geocode,
{
    let view = load_detail(client, resolver, Business::with_id(business_id)).await;
    if view.detail.is_none() {
        anyhow::bail!("business {} could not be loaded", business_id);
    }
    print!("{}", render_detail(&view, period));
    Ok(())
}

/// Text rendering of every detail section that loaded.
pub fn render_detail(view: &DetailView, period: Period) -> String {
    let business = view.business();
    let mut out = String::new();

    let _ = writeln!(out, "{}", business.name());
    let _ = writeln!(
        out,
        "{} ({} reviews)  {}",
        format_rating(business.avg_rating),
        group_thousands(business.num_of_reviews),
        view.category()
    );
    let _ = writeln!(out, "{}", view.address);
    if let Some(locality) = view.locality() {
        let _ = writeln!(out, "{}", locality);
    }
    if let Some(line) = coordinates_line(business.coordinates()) {
        let _ = writeln!(out, "{}", line);
    }
    if business.is_permanently_closed {
        let _ = writeln!(out, "Permanently closed");
    }
    let _ = writeln!(out, "\n{}", view.description());

    let hours = view.hours();
    let _ = writeln!(out, "\nHours:");
    if hours.is_empty() {
        let _ = writeln!(out, "  {}", NO_HOURS);
    }
    for row in &hours {
        let marker = if row.is_closed() { " *" } else { "" };
        let _ = writeln!(out, "  {}  {}{}", row.short_day(), row.time, marker);
    }

    let _ = writeln!(out, "\nRatings:");
    for bar in view.rating_bars() {
        let width = (bar.width_pct / 5.0).round() as usize;
        let _ = writeln!(
            out,
            "  {}★ {:<20} {}",
            bar.rating,
            "#".repeat(width),
            group_thousands(bar.count)
        );
    }

    if let Some(total) = &view.total {
        let _ = writeln!(
            out,
            "\nSentiment: {} positive ({}%), {} neutral ({}%), {} negative ({}%)",
            group_thousands(total.positive_count),
            pct(total.positive_pct),
            group_thousands(total.neutral_count),
            pct(total.neutral_pct),
            group_thousands(total.negative_count),
            pct(total.negative_pct)
        );
    }

    let points = view.chart_points(period);
    if !points.is_empty() {
        let heading = match period {
            Period::All => "Yearly".to_string(),
            Period::Year(year) => format!("Monthly {}", year),
        };
        let _ = writeln!(out, "\n{} sentiment:", heading);
        for point in &points {
            let _ = writeln!(
                out,
                "  {:>7}  avg {:>6}  +{} ={} -{}",
                point.label,
                sentiment_pct(point.avg_sentiment),
                point.positive_count,
                point.neutral_count,
                point.negative_count
            );
        }
    } else if view.has_series() {
        let years: Vec<String> = view.available_years().iter().map(i32::to_string).collect();
        let _ = writeln!(out, "\nNo data for {}; years with data: {}", period, years.join(", "));
    }

    for review in view.preview_reviews() {
        let _ = writeln!(
            out,
            "\nRecent review ({}★, {}):\n  {}",
            review.rating.unwrap_or_default(),
            review_date(review.time.as_deref()),
            review.text()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wsd_api::geocode::ReverseGeocoder;
    use wsd_api::transport::StaticTransport;

    const BASE: &str = "http://api.test/api/v1";

    fn client() -> ApiClient<StaticTransport> {
        let transport = StaticTransport::new()
            .with(
                "http://api.test/api/v1/businesses/b1",
                r#"{"business_id":"b1","name":"Snoqualmie Falls","avg_rating":4.8,"num_of_reviews":25310,"city":"Snoqualmie","county":"King","hours":"{\"Monday\":\"Closed\"}"}"#,
            )
            .with(
                "http://api.test/api/v1/businesses/b1/stats/total",
                r#"{"total_reviews":10,"positive_count":8,"neutral_count":1,"negative_count":1,"positive_pct":"80.00","neutral_pct":"10.00","negative_pct":"10.00"}"#,
            )
            .with(
                "http://api.test/api/v1/businesses/b1/stats/yearly",
                r#"{"data":[{"year":2021,"avg_sentiment":"0.734","positive_count":8,"neutral_count":1,"negative_count":1}]}"#,
            )
            .with(
                "http://api.test/api/v1/businesses/b1/reviews?page=1&page_size=2",
                r#"{"total":1,"data":[{"review_id":"r1","business_id":"b1","rating":5,"time":"2021-08-14T09:30:00","text":"Worth the drive"}]}"#,
            );
        ApiClient::with_transport(BASE, transport)
    }

    fn resolver() -> AddressResolver<ReverseGeocoder<StaticTransport>> {
        AddressResolver::new(ReverseGeocoder::with_transport(
            "https://geo.test",
            StaticTransport::new(),
        ))
    }

    #[tokio::test]
    async fn renders_loaded_sections() {
        let view = load_detail(&client(), &resolver(), Business::with_id("b1")).await;
        let text = render_detail(&view, Period::All);

        assert!(text.starts_with("Snoqualmie Falls\n4.8 (25,310 reviews)  N/A\n"));
        assert!(text.contains("Snoqualmie, King"));
        assert!(text.contains("No description available"));
        assert!(text.contains("  Mon  Closed *"));
        assert!(text.contains("Sentiment: 8 positive (80%), 1 neutral (10%), 1 negative (10%)"));
        assert!(text.contains("Yearly sentiment:"));
        assert!(text.contains("avg  73.4%"));
        assert!(text.contains("Recent review (5★, 08/14/2021):\n  Worth the drive"));
    }

    #[tokio::test]
    async fn year_without_months_lists_available_years() {
        let view = load_detail(&client(), &resolver(), Business::with_id("b1")).await;
        let text = render_detail(&view, Period::Year(2019));
        assert!(text.contains("No data for 2019; years with data: 2021"));
    }

    #[tokio::test]
    async fn missing_business_is_an_error() {
        let client = ApiClient::with_transport(BASE, StaticTransport::new());
        let result = run_detail(&client, &resolver(), "nope", Period::All).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn shows_coordinates_and_missing_hours() {
        let transport = StaticTransport::new().with(
            "http://api.test/api/v1/businesses/b2",
            r#"{"business_id":"b2","name":"Deception Pass","address":"41020 State Route 20","latitude":48.4062,"longitude":-122.6462}"#,
        );
        let client = ApiClient::with_transport(BASE, transport);
        let view = load_detail(&client, &resolver(), Business::with_id("b2")).await;
        let text = render_detail(&view, Period::All);

        assert!(text.contains("41020 State Route 20\nCoordinates: 48.4062, -122.6462\n"));
        assert!(text.contains("Hours:\n  No hours available\n"));
    }
}
