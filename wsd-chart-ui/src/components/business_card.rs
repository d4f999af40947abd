//! List card for one business.

use dioxus::prelude::*;
use wsd_api::business::Business;
use wsd_core::format::{card_category, format_rating, group_thousands};

use super::Stars;
use crate::state::AppState;

#[derive(Props, Clone, PartialEq)]
pub struct BusinessCardProps {
    pub business: Business,
    /// Outline the card, e.g. the business last opened
    #[props(default = false)]
    pub highlighted: bool,
    pub on_select: EventHandler<Business>,
}

/// Shows the business summary and resolves its display address once mounted.
///
/// Cards are keyed by business id, so each mount resolves exactly one record.
#[component]
pub fn BusinessCard(props: BusinessCardProps) -> Element {
    let state = use_context::<AppState>();
    let mut address = use_signal(|| None::<String>);

    let to_resolve = props.business.clone();
    use_effect(move || {
        let Some(services) = state.services.read().clone() else {
            return;
        };
        let business = to_resolve.clone();
        spawn(async move {
            let resolved = services.resolver.resolve(&business).await;
            address.set(Some(resolved));
        });
    });

    let business = props.business.clone();
    let name = business.name().to_string();
    let rating = format_rating(business.avg_rating);
    let reviews = group_thousands(business.num_of_reviews);
    let category = card_category(business.category());
    let shown_address = address().unwrap_or_else(|| "Loading address...".to_string());
    let border = if props.highlighted { "#f97316" } else { "#e5e7eb" };
    let on_select = props.on_select;

    rsx! {
        div {
            style: "border: 1px solid {border}; border-radius: 8px; padding: 12px; margin-bottom: 8px; background: #fff; cursor: pointer;",
            onclick: move |_| on_select.call(business.clone()),
            h3 { style: "margin: 0 0 4px 0; font-size: 15px; color: #111827;", "{name}" }
            div {
                style: "display: flex; align-items: center; gap: 6px; font-size: 12px; color: #374151;",
                Stars { rating: props.business.avg_rating }
                span { "{rating}" }
                span { style: "color: #6b7280;", "({reviews} reviews)" }
            }
            p { style: "margin: 4px 0 0 0; font-size: 12px; color: #6b7280;", "{category}" }
            p { style: "margin: 4px 0 0 0; font-size: 12px; color: #374151;", "{shown_address}" }
            if props.business.is_permanently_closed {
                p { style: "margin: 4px 0 0 0; font-size: 11px; color: #dc2626; font-weight: 600;", "Permanently closed" }
            }
        }
    }
}
