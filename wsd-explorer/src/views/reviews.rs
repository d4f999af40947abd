//! All reviews of one business, paginated and filterable by stars.

use dioxus::prelude::*;
use wsd_api::business::Business;
use wsd_api::filters::RATING_OPTIONS;
use wsd_chart_ui::components::{AppHeader, CardSkeleton, Pagination, ReviewCard};
use wsd_chart_ui::state::AppState;
use wsd_core::format::group_thousands;
use wsd_core::listing::PageState;
use wsd_core::reviews::RatingFilter;

use super::scroll_to_top;

#[component]
pub fn ReviewsPage(business: Business) -> Element {
    let mut state = use_context::<AppState>();

    let business_id = business.business_id.clone();
    use_effect(move || {
        let params = (state.review_params)();
        let Some(services) = state.services.read().clone() else {
            return;
        };
        let request = state.reviews.write().begin(&business_id, params);
        spawn(async move {
            let result = services
                .client
                .reviews(&request.business_id, &request.query)
                .await;
            state.reviews.write().finish(request.ticket, result);
        });
    });

    let params = (state.review_params)();
    let (page_state, pager, total) = {
        let reviews = state.reviews.read();
        (reviews.state().clone(), reviews.pager(params.page), reviews.total())
    };
    let name = business.name().to_string();
    let filter_value = params.rating.to_string();
    let status = if page_state.is_loading() {
        "Loading...".to_string()
    } else {
        format!("{} reviews", group_thousands(total))
    };

    let items = match page_state {
        PageState::Loading => rsx! { CardSkeleton {} },
        PageState::Empty => rsx! {
            p { style: "text-align: center; padding: 48px; color: #6b7280;", "No reviews found" }
        },
        PageState::Populated(reviews) => rsx! {
            for review in reviews {
                ReviewCard { key: "{review.review_id}", review }
            }
        },
    };

    rsx! {
        AppHeader {
            title: name,
            subtitle: "All reviews",
            on_back: move |_: ()| state.back(),
        }
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 16px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                span { style: "font-size: 13px; color: #4b5563;", "{status}" }
                select {
                    style: "border: 1px solid #d1d5db; border-radius: 4px; padding: 4px 8px; font-size: 13px;",
                    value: "{filter_value}",
                    onchange: move |evt: Event<FormData>| {
                        let rating = evt.value().parse::<RatingFilter>().unwrap_or_default();
                        state.review_params.with_mut(|p| *p = p.with_rating(rating));
                    },
                    option { value: "all", selected: params.rating == RatingFilter::All, "All ratings" }
                    for stars in RATING_OPTIONS.iter().rev().copied() {
                        option {
                            key: "{stars}",
                            value: "{stars}",
                            selected: params.rating == RatingFilter::Stars(stars),
                            "{stars} stars"
                        }
                    }
                }
            }
            {items}
            Pagination {
                pager,
                on_page: move |page: u32| {
                    state.review_params.with_mut(|p| *p = p.with_page(page));
                    scroll_to_top();
                },
            }
        }
    }
}
