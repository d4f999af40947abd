//! Positive / neutral / negative totals boxes.

use dioxus::prelude::*;
use wsd_api::stats::StatsTotal;
use wsd_core::format::{group_thousands, pct};

#[component]
pub fn SentimentTotals(total: StatsTotal) -> Element {
    let boxes = [
        ("Positive", total.positive_count, total.positive_pct, "#f0fdf4", "#16a34a"),
        ("Neutral", total.neutral_count, total.neutral_pct, "#f9fafb", "#4b5563"),
        ("Negative", total.negative_count, total.negative_pct, "#fef2f2", "#dc2626"),
    ]
    .map(|(name, count, share, background, color)| {
        (name, group_thousands(count), pct(share), background, color)
    });

    rsx! {
        div {
            style: "display: flex; gap: 8px;",
            for (name, count, share, background, color) in boxes {
                div {
                    key: "{name}",
                    style: "flex: 1; background: {background}; border-radius: 6px; padding: 8px; text-align: center;",
                    p { style: "margin: 0; font-size: 18px; font-weight: 700; color: {color};", "{count}" }
                    p { style: "margin: 0; font-size: 11px; color: {color};", "{name} ({share}%)" }
                }
            }
        }
    }
}
