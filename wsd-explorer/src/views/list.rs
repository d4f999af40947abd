//! Business list with filter sidebar.

use dioxus::prelude::*;
use wsd_api::business::Business;
use wsd_chart_ui::components::{AppHeader, BusinessCard, CardSkeleton, FilterSelect, Pagination};
use wsd_chart_ui::state::AppState;
use wsd_core::filters::RATING_OPTIONS;
use wsd_core::format::group_thousands;
use wsd_core::listing::PageState;

use super::scroll_to_top;

#[component]
pub fn ListPage() -> Element {
    let mut state = use_context::<AppState>();

    // Refetch whenever the filters or the page change. The memo keeps option
    // list updates from triggering a list query.
    let filters = use_memo(move || state.filter_state.read().filters.clone());
    use_effect(move || {
        let filters = filters();
        let page = (state.list_page)();
        let Some(services) = state.services.read().clone() else {
            return;
        };
        let request = state.list.write().begin(&filters, page);
        spawn(async move {
            let result = services.client.businesses(&request.query).await;
            state.list.write().finish(request.ticket, result);
        });
    });

    let (page_state, pager, total) = {
        let list = state.list.read();
        (list.state().clone(), list.pager((state.list_page)()), list.total())
    };
    let filter_state = state.filter_state.read().clone();
    let current = filter_state.filters.clone();
    let options = filter_state.options;
    let ratings: Vec<String> = RATING_OPTIONS.iter().map(u8::to_string).collect();
    let search = current.search.clone().unwrap_or_default();
    let highlighted = state.navigator.read().last_selected().map(str::to_string);

    let status = if page_state.is_loading() {
        "Loading...".to_string()
    } else {
        format!("{} results found", group_thousands(total))
    };

    let cards = match page_state {
        PageState::Loading => rsx! { CardSkeleton {} },
        PageState::Empty => rsx! {
            p { style: "text-align: center; padding: 48px; color: #6b7280;", "No results found" }
        },
        PageState::Populated(businesses) => rsx! {
            for business in businesses {
                BusinessCard {
                    key: "{business.business_id}",
                    highlighted: highlighted.as_deref() == Some(business.business_id.as_str()),
                    business: business.clone(),
                    on_select: move |selected: Business| state.select(selected),
                }
            }
        },
    };

    rsx! {
        AppHeader {
            title: "Washington Destinations",
            subtitle: "Businesses, reviews and sentiment across Washington State",
        }
        div {
            style: "display: flex; align-items: flex-start;",
            div {
                style: "width: 240px; flex-shrink: 0; display: flex; flex-direction: column; gap: 12px; padding: 16px; background: #fff; border-right: 1px solid #e5e7eb; min-height: calc(100vh - 60px);",
                FilterSelect {
                    label: "Field",
                    options: options.fields.clone(),
                    selected: current.field.clone(),
                    all_label: "All",
                    searchable: true,
                    on_change: move |value: String| state.edit_filters(|f| f.set_field(&value)),
                }
                FilterSelect {
                    label: "County",
                    options: options.counties.clone(),
                    selected: current.county.clone(),
                    all_label: "All",
                    searchable: true,
                    on_change: move |value: String| {
                        state.edit_filters(|f| {
                            f.select_county(&value);
                        })
                    },
                }
                FilterSelect {
                    label: "City",
                    options: options.cities.clone(),
                    selected: current.city.clone(),
                    all_label: "All",
                    searchable: true,
                    on_change: move |value: String| state.edit_filters(|f| f.set_city(&value)),
                }
                FilterSelect {
                    label: "Min Rating",
                    options: ratings.clone(),
                    selected: current.min_rating.map(|r| r.to_string()),
                    all_label: "All",
                    on_change: move |value: String| state.edit_filters(|f| f.set_min_rating(&value)),
                }
                FilterSelect {
                    label: "Max Rating",
                    options: ratings,
                    selected: current.max_rating.map(|r| r.to_string()),
                    all_label: "All",
                    on_change: move |value: String| state.edit_filters(|f| f.set_max_rating(&value)),
                }
            }
            div {
                style: "flex: 1; min-width: 0;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; background: #fff; border-bottom: 1px solid #e5e7eb;",
                    span { style: "font-size: 13px; color: #4b5563;", "{status}" }
                    input {
                        r#type: "text",
                        placeholder: "Search by name...",
                        value: "{search}",
                        style: "border: 1px solid #d1d5db; border-radius: 8px; padding: 6px 10px; font-size: 13px; width: 240px;",
                        oninput: move |evt: Event<FormData>| {
                            let value = evt.value();
                            state.edit_filters(|f| f.set_search(&value));
                        },
                    }
                }
                div {
                    style: "padding: 16px;",
                    {cards}
                }
                Pagination {
                    pager,
                    on_page: move |page: u32| {
                        state.list_page.set(page);
                        scroll_to_top();
                    },
                }
            }
        }
    }
}
