//! One review with rating, date and sentiment badge.

use dioxus::prelude::*;
use wsd_api::review::{Review, Sentiment};
use wsd_core::format::review_date;

use super::Stars;

#[component]
pub fn ReviewCard(review: Review) -> Element {
    let date = review_date(review.time.as_deref());
    let text = review.text().to_string();
    let (badge, badge_style) = match review.sentiment() {
        Sentiment::Positive => ("Positive", "background: #dcfce7; color: #166534;"),
        Sentiment::Neutral => ("Neutral", "background: #f3f4f6; color: #374151;"),
        Sentiment::Negative => ("Negative", "background: #fee2e2; color: #991b1b;"),
    };
    let rating = review.rating.map(f64::from);

    rsx! {
        div {
            style: "border: 1px solid #e5e7eb; border-radius: 8px; padding: 10px 12px; background: #fff; margin-bottom: 8px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 6px;",
                Stars { rating }
                div {
                    style: "display: flex; gap: 8px; align-items: center; font-size: 11px;",
                    span { style: "padding: 1px 6px; border-radius: 9999px; {badge_style}", "{badge}" }
                    span { style: "color: #6b7280;", "{date}" }
                }
            }
            p { style: "margin: 0; font-size: 13px; color: #111827; white-space: pre-wrap;", "{text}" }
        }
    }
}
