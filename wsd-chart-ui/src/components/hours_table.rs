//! Opening hours, Monday first, closed days highlighted.

use dioxus::prelude::*;
use wsd_core::hours::{DayHours, NO_HOURS};

#[component]
pub fn HoursTable(hours: Vec<DayHours>) -> Element {
    if hours.is_empty() {
        return rsx! {
            div {
                h3 { style: "font-size: 14px; margin: 0 0 6px 0; color: #111827;", "Opening hours" }
                p { style: "font-size: 13px; color: #6b7280; margin: 0;", "{NO_HOURS}" }
            }
        };
    }
    let rows: Vec<(&'static str, String, &'static str)> = hours
        .iter()
        .map(|row| (row.short_day(), row.time.clone(), time_style(row.is_closed())))
        .collect();

    rsx! {
        div {
            h3 { style: "font-size: 14px; margin: 0 0 6px 0; color: #111827;", "Opening hours" }
            table {
                style: "font-size: 12px; border-collapse: collapse;",
                tbody {
                    for (day, time, style) in rows {
                        tr {
                            key: "{day}",
                            td { style: "padding: 2px 12px 2px 0; color: #6b7280;", "{day}" }
                            td { style: style, "{time}" }
                        }
                    }
                }
            }
        }
    }
}

fn time_style(closed: bool) -> &'static str {
    if closed {
        "padding: 2px 0; color: #ef4444; font-weight: 600;"
    } else {
        "padding: 2px 0; color: #111827;"
    }
}
