//! Five-star rating display.

use dioxus::prelude::*;
use wsd_core::format::filled_stars;

#[component]
pub fn Stars(#[props(!optional)] rating: Option<f64>, #[props(default = 14)] size: u32) -> Element {
    let filled = filled_stars(rating);
    rsx! {
        span {
            style: "font-size: {size}px; letter-spacing: 1px;",
            for i in 1..=5u8 {
                span {
                    key: "{i}",
                    style: star_style(i <= filled),
                    "★"
                }
            }
        }
    }
}

fn star_style(filled: bool) -> &'static str {
    if filled {
        "color: #f59e0b;"
    } else {
        "color: #d1d5db;"
    }
}
