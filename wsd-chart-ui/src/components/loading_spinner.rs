//! Loading placeholders.

use dioxus::prelude::*;

/// Simple loading indicator.
#[component]
pub fn LoadingSpinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #6b7280;",
            "{label}"
        }
    }
}

/// Grey card outlines shown while a list page is loading.
#[component]
pub fn CardSkeleton(#[props(default = 5)] count: usize) -> Element {
    rsx! {
        for i in 0..count {
            div {
                key: "{i}",
                style: "border: 1px solid #e5e7eb; border-radius: 8px; padding: 12px; margin-bottom: 8px; background: #fff;",
                div { style: "height: 14px; width: 60%; background: #e5e7eb; border-radius: 4px; margin-bottom: 8px;" }
                div { style: "height: 10px; width: 40%; background: #f3f4f6; border-radius: 4px; margin-bottom: 6px;" }
                div { style: "height: 10px; width: 80%; background: #f3f4f6; border-radius: 4px;" }
            }
        }
    }
}
