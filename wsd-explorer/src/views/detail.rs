//! Business detail: address, ratings, hours, sentiment charts, review preview.

use dioxus::prelude::*;
use wsd_api::business::Business;
use wsd_chart_ui::components::{
    AppHeader, ChartContainer, HoursTable, LoadingSpinner, RatingBars, ReviewCard,
    SentimentTotals, Stars,
};
use wsd_chart_ui::js_bridge;
use wsd_chart_ui::state::AppState;
use wsd_core::detail::load_detail;
use wsd_core::format::{coordinates_line, format_rating, group_thousands};
use wsd_core::series::Period;

/// Chart container DOM element IDs used by D3.js to render into.
const SENTIMENT_CHART_ID: &str = "avg-sentiment-chart";
const LABEL_CHART_ID: &str = "sentiment-label-chart";

#[component]
pub fn DetailPage(business: Business) -> Element {
    let mut state = use_context::<AppState>();

    let selected = business.clone();
    use_effect(move || {
        let Some(services) = state.services.read().clone() else {
            return;
        };
        let id = selected.business_id.clone();
        // Coming back from the reviews view keeps the loaded detail.
        if state
            .detail
            .peek()
            .as_ref()
            .is_some_and(|view| view.selected.business_id == id)
        {
            return;
        }
        let selected = selected.clone();
        spawn(async move {
            let view = load_detail(&services.client, &services.resolver, selected).await;
            if state.navigator.peek().is_showing(&id) {
                state.detail.set(Some(view));
            } else {
                log::debug!("Dropping detail for {} after navigation", id);
            }
        });
    });

    // Redraw both charts when the data or the period changes
    use_effect(move || {
        let period = (state.period)();
        let detail = state.detail.read();
        let Some(view) = detail.as_ref() else {
            return;
        };
        let points = view.chart_points(period);
        if points.is_empty() {
            js_bridge::destroy_chart(SENTIMENT_CHART_ID);
            js_bridge::destroy_chart(LABEL_CHART_ID);
            return;
        }
        js_bridge::render_sentiment_chart(SENTIMENT_CHART_ID, &points);
        js_bridge::render_label_chart(LABEL_CHART_ID, &points);
    });

    let on_back = move |_: ()| state.back();

    let Some(view) = state.detail.read().clone() else {
        return rsx! {
            AppHeader { title: business.name().to_string(), on_back }
            LoadingSpinner { label: "Loading details..." }
        };
    };

    let shown = view.business().clone();
    let name = shown.name().to_string();
    let rating = format_rating(shown.avg_rating);
    let reviews = group_thousands(shown.num_of_reviews);
    let category = view.category().to_string();
    let description = view.description().to_string();
    let locality = view.locality();
    let coordinates = coordinates_line(shown.coordinates());
    let address = view.address.clone();
    let hours = view.hours();
    let bars = view.rating_bars();
    let period = (state.period)();
    let years = view.available_years();
    let has_charts = !view.chart_points(period).is_empty();
    let preview = view.preview_reviews().to_vec();
    let period_value = period.to_string();

    rsx! {
        AppHeader { title: name.clone(), subtitle: category.clone(), on_back }
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 16px; display: flex; flex-direction: column; gap: 16px;",

            div {
                style: "background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px;",
                h2 { style: "margin: 0 0 6px 0; font-size: 20px; color: #111827;", "{name}" }
                div {
                    style: "display: flex; align-items: center; gap: 6px; font-size: 13px; color: #374151;",
                    Stars { rating: shown.avg_rating, size: 16 }
                    span { "{rating}" }
                    span { style: "color: #6b7280;", "({reviews} reviews)" }
                }
                p { style: "margin: 8px 0 0 0; font-size: 13px; color: #374151;", "{address}" }
                if let Some(locality) = locality {
                    p { style: "margin: 2px 0 0 0; font-size: 12px; color: #6b7280;", "{locality}" }
                }
                if let Some(coordinates) = coordinates {
                    p { style: "margin: 2px 0 0 0; font-size: 11px; color: #9ca3af;", "{coordinates}" }
                }
                p { style: "margin: 8px 0 0 0; font-size: 12px; color: #6b7280;", "Category: {category}" }
                p { style: "margin: 8px 0 0 0; font-size: 13px; color: #111827;", "{description}" }
                if let Some(url) = shown.url().map(str::to_string) {
                    a {
                        href: "{url}",
                        target: "_blank",
                        style: "display: inline-block; margin-top: 8px; font-size: 12px; color: #f97316;",
                        "View on Google Maps"
                    }
                }
                if shown.is_permanently_closed {
                    p { style: "margin: 8px 0 0 0; font-size: 12px; color: #dc2626; font-weight: 600;", "Permanently closed" }
                }
            }

            div {
                style: "display: flex; gap: 16px; flex-wrap: wrap;",
                div {
                    style: "flex: 1; min-width: 260px; background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px;",
                    h3 { style: "font-size: 14px; margin: 0 0 8px 0; color: #111827;", "Rating distribution" }
                    RatingBars { bars }
                }
                div {
                    style: "flex: 1; min-width: 200px; background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px;",
                    HoursTable { hours }
                }
            }

            if let Some(total) = view.total.clone() {
                div {
                    style: "background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px;",
                    h3 { style: "font-size: 14px; margin: 0 0 8px 0; color: #111827;", "Sentiment overview" }
                    SentimentTotals { total }
                }
            }

            if view.has_series() {
                div {
                    style: "display: flex; justify-content: flex-end;",
                    select {
                        style: "border: 1px solid #d1d5db; border-radius: 4px; padding: 4px 8px; font-size: 13px;",
                        value: "{period_value}",
                        onchange: move |evt: Event<FormData>| {
                            state.period.set(evt.value().parse().unwrap_or_default());
                        },
                        option { value: "all", selected: period == Period::All, "All (Yearly)" }
                        for year in years {
                            option {
                                key: "{year}",
                                value: "{year}",
                                selected: period == Period::Year(year),
                                "{year} (Monthly)"
                            }
                        }
                    }
                }
            }

            if has_charts {
                div {
                    style: "display: flex; gap: 16px; background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px;",
                    ChartContainer { id: SENTIMENT_CHART_ID.to_string(), title: "Average sentiment score" }
                    ChartContainer { id: LABEL_CHART_ID.to_string(), title: "Sentiment labels count" }
                }
            }

            div {
                style: "background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                    h3 { style: "font-size: 14px; margin: 0; color: #111827;", "Recent reviews" }
                    button {
                        style: "border: none; background: none; color: #f97316; cursor: pointer; font-size: 13px;",
                        onclick: move |_| state.view_all_reviews(),
                        "View all reviews →"
                    }
                }
                if preview.is_empty() {
                    p { style: "font-size: 13px; color: #6b7280;", "No reviews yet" }
                }
                for review in preview {
                    ReviewCard { key: "{review.review_id}", review }
                }
            }
        }
    }
}
