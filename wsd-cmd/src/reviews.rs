//! `reviews` subcommand.

use std::fmt::Write;

use wsd_api::review::{Review, Sentiment};
use wsd_api::transport::Transport;
use wsd_api::ApiClient;
use wsd_core::format::{group_thousands, review_date};
use wsd_core::listing::PageState;
use wsd_core::reviews::{RatingFilter, ReviewParams, ReviewsController};

pub async fn run_reviews<T: Transport>(
    client: &ApiClient<T>,
    business_id: &str,
    page: u32,
    rating: RatingFilter,
) -> anyhow::Result<()> {
    print!("{}", reviews_report(client, business_id, page, rating).await);
    Ok(())
}

pub async fn reviews_report<T: Transport>(
    client: &ApiClient<T>,
    business_id: &str,
    page: u32,
    rating: RatingFilter,
) -> String {
    let params = ReviewParams::default().with_rating(rating).with_page(page);
    let mut reviews = ReviewsController::new();
    let state = reviews.query(client, business_id, params).await.clone();
    let pager = reviews.pager(params.page);

    let mut out = String::new();
    match state {
        PageState::Populated(items) => {
            let _ = writeln!(
                out,
                "{} reviews, rating {} (page {} of {})",
                group_thousands(reviews.total()),
                rating,
                pager.page(),
                pager.last_page()
            );
            for review in &items {
                out.push_str(&review_block(review));
            }
        }
        _ => out.push_str("No reviews found\n"),
    }
    out
}

fn review_block(review: &Review) -> String {
    let sentiment = match review.sentiment() {
        Sentiment::Positive => "positive",
        Sentiment::Neutral => "neutral",
        Sentiment::Negative => "negative",
    };
    format!(
        "\n{}★  {}  {}\n  {}\n",
        review.rating.unwrap_or_default(),
        review_date(review.time.as_deref()),
        sentiment,
        review.text()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wsd_api::transport::StaticTransport;

    const BASE: &str = "http://api.test/api/v1";

    #[tokio::test]
    async fn rating_filter_and_page_reach_the_query() {
        let transport = StaticTransport::new().with(
            "http://api.test/api/v1/businesses/b1/reviews?page=2&page_size=10&rating=1",
            r#"{"total":14,"data":[{"review_id":"r11","business_id":"b1","rating":1,"time":"2022-01-03","text":"Closed early","sentiment_label":"negative"}]}"#,
        );
        let client = ApiClient::with_transport(BASE, transport);
        let report = reviews_report(&client, "b1", 2, RatingFilter::Stars(1)).await;
        assert_eq!(
            report,
            "14 reviews, rating 1 (page 2 of 2)\n\n1★  01/03/2022  negative\n  Closed early\n"
        );
    }

    #[tokio::test]
    async fn empty_page_reports_no_reviews() {
        let transport = StaticTransport::new().with(
            "http://api.test/api/v1/businesses/b1/reviews?page=1&page_size=10",
            r#"{"total":0,"data":[]}"#,
        );
        let client = ApiClient::with_transport(BASE, transport);
        let report = reviews_report(&client, "b1", 1, RatingFilter::All).await;
        assert_eq!(report, "No reviews found\n");
    }

    #[tokio::test]
    async fn out_of_range_page_reports_last_page() {
        let transport = StaticTransport::new()
            .with(
                "http://api.test/api/v1/businesses/b1/reviews?page=99&page_size=10",
                r#"{"total":14,"data":[]}"#,
            )
            .with(
                "http://api.test/api/v1/businesses/b1/reviews?page=2&page_size=10",
                r#"{"total":14,"data":[{"review_id":"r11","business_id":"b1","rating":5,"time":"2022-01-03","text":"Great views","sentiment_label":"positive"}]}"#,
            );
        let client = ApiClient::with_transport(BASE, transport);
        let report = reviews_report(&client, "b1", 99, RatingFilter::All).await;
        assert_eq!(
            report,
            "14 reviews, rating all (page 2 of 2)\n\n5★  01/03/2022  positive\n  Great views\n"
        );
    }
}
