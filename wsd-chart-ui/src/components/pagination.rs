//! Previous / next page controls.

use dioxus::prelude::*;
use wsd_core::pagination::Pager;

#[derive(Props, Clone, PartialEq)]
pub struct PaginationProps {
    pub pager: Pager,
    /// Called with the page to load
    pub on_page: EventHandler<u32>,
}

/// Hidden unless there is more than one page. The buttons are disabled at
/// the first and last page.
#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    let pager = props.pager;
    if !pager.is_paginated() {
        return rsx! {};
    }
    let on_page = props.on_page;
    let page = pager.page();
    let last = pager.last_page();

    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; gap: 12px; padding: 12px; font-size: 13px;",
            button {
                style: button_style(pager.has_prev()),
                disabled: !pager.has_prev(),
                onclick: move |_| on_page.call(pager.prev()),
                "Previous"
            }
            span { style: "color: #374151;", "Page {page} of {last}" }
            button {
                style: button_style(pager.has_next()),
                disabled: !pager.has_next(),
                onclick: move |_| on_page.call(pager.next()),
                "Next"
            }
        }
    }
}

fn button_style(enabled: bool) -> &'static str {
    if enabled {
        "padding: 4px 12px; border: 1px solid #d1d5db; border-radius: 4px; background: #fff; cursor: pointer;"
    } else {
        "padding: 4px 12px; border: 1px solid #e5e7eb; border-radius: 4px; background: #f9fafb; color: #9ca3af;"
    }
}
