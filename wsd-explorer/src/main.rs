//! Washington State destinations explorer.
//!
//! Three views share one `AppState`:
//! 1. List: filter sidebar, paginated business cards.
//! 2. Detail: six concurrent queries joined into address, ratings, hours,
//!    sentiment totals, yearly/monthly D3 charts and a review preview.
//! 3. Reviews: paginated review list with a star filter.
//!
//! The API base URLs are fixed at build time through `WSD_API_BASE` and
//! `WSD_GEOCODER_BASE`.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use wsd_api::ApiConfig;
use wsd_chart_ui::components::ErrorDisplay;
use wsd_chart_ui::js_bridge;
use wsd_chart_ui::state::{AppState, Services};
use wsd_core::filters::{cities_for, load_options};
use wsd_core::navigator::View;

mod views;

use views::{DetailPage, ListPage, ReviewsPage};

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting Washington destinations explorer");
    launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Build HTTP clients and start loading D3 on mount
    use_effect(move || {
        let config = ApiConfig::from_build_env();
        info!("API base {}", config.api_base);
        match Services::new(&config) {
            Ok(services) => state.services.set(Some(services)),
            Err(e) => {
                log::error!("Failed to create HTTP client: {}", e);
                state.error_msg.set(Some(e.to_string()));
            }
        }
        js_bridge::init_charts();
    });

    // Initial filter options
    use_effect(move || {
        let Some(services) = state.services.read().clone() else {
            return;
        };
        spawn(async move {
            let options = load_options(&services.client).await;
            state.filter_state.write().apply_options(options);
        });
    });

    // County → city options. Only re-runs when the selected county changes.
    let city_scope = use_memo(move || state.filter_state.read().city_scope());
    use_effect(move || {
        let scope = city_scope();
        let Some(services) = state.services.read().clone() else {
            return;
        };
        spawn(async move {
            let cities = cities_for(&services.client, &scope).await;
            if !state.filter_state.write().apply_cities(&scope, cities) {
                log::debug!("Dropped city options for {:?}", scope.county);
            }
        });
    });

    let view = state.navigator.read().view().clone();
    let page = match view {
        View::List => rsx! { ListPage {} },
        View::Detail(business) => rsx! { DetailPage { business } },
        View::Reviews(business) => rsx! { ReviewsPage { business } },
    };

    rsx! {
        div {
            style: "min-height: 100vh; background: #f9fafb; font-family: sans-serif;",
            if let Some(message) = (state.error_msg)() {
                ErrorDisplay { message }
            } else {
                {page}
            }
        }
    }
}
