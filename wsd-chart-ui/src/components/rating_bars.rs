//! Rating distribution as horizontal bars, 5 stars first.

use dioxus::prelude::*;
use wsd_core::format::group_thousands;
use wsd_core::series::RatingBar;

#[component]
pub fn RatingBars(bars: Vec<RatingBar>) -> Element {
    let rows: Vec<(u8, f64, String)> = bars
        .iter()
        .map(|bar| (bar.rating, bar.width_pct, group_thousands(bar.count)))
        .collect();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            for (rating, width, count) in rows {
                div {
                    key: "{rating}",
                    style: "display: flex; align-items: center; gap: 8px; font-size: 12px;",
                    span { style: "width: 24px; color: #374151;", "{rating}★" }
                    div {
                        style: "flex: 1; height: 8px; background: #f3f4f6; border-radius: 4px; overflow: hidden;",
                        div { style: "height: 100%; width: {width}%; background: #f59e0b;" }
                    }
                    span { style: "width: 56px; text-align: right; color: #6b7280;", "{count}" }
                }
            }
        }
    }
}
