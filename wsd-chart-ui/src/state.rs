//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use wsd_api::geocode::ReverseGeocoder;
use wsd_api::{ApiClient, ApiConfig, ApiError};
use wsd_core::address::AddressResolver;
use wsd_core::detail::DetailView;
use wsd_core::filters::FilterState;
use wsd_core::listing::ListController;
use wsd_core::navigator::Navigator;
use wsd_core::reviews::{ReviewParams, ReviewsController};
use wsd_core::series::Period;

/// Network handles shared by every view.
#[derive(Clone)]
pub struct Services {
    pub client: ApiClient,
    pub resolver: AddressResolver<ReverseGeocoder>,
}

impl Services {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self {
            client: ApiClient::new(config)?,
            resolver: AddressResolver::new(ReverseGeocoder::new(config)?),
        })
    }
}

/// Shared application state for the explorer.
#[derive(Clone, Copy)]
pub struct AppState {
    /// API and geocoder handles (None until initialised)
    pub services: Signal<Option<Services>>,
    /// Startup error, shown instead of the views
    pub error_msg: Signal<Option<String>>,
    /// Which view is showing, and for which business
    pub navigator: Signal<Navigator>,
    /// Active list filters and the option lists offered for them
    pub filter_state: Signal<FilterState>,
    /// Current business list page (1-based)
    pub list_page: Signal<u32>,
    /// Business list results
    pub list: Signal<ListController>,
    /// Derived detail view for the selected business (None while loading)
    pub detail: Signal<Option<DetailView>>,
    /// Chart granularity on the detail view
    pub period: Signal<Period>,
    /// Page and rating filter of the reviews view
    pub review_params: Signal<ReviewParams>,
    /// Review list results
    pub reviews: Signal<ReviewsController>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            services: Signal::new(None),
            error_msg: Signal::new(None),
            navigator: Signal::new(Navigator::new()),
            filter_state: Signal::new(FilterState::new()),
            list_page: Signal::new(1),
            list: Signal::new(ListController::new()),
            detail: Signal::new(None),
            period: Signal::new(Period::All),
            review_params: Signal::new(ReviewParams::default()),
            reviews: Signal::new(ReviewsController::new()),
        }
    }

    /// Apply a filter edit and return to the first list page.
    pub fn edit_filters(&mut self, edit: impl FnOnce(&mut FilterState)) {
        edit(&mut *self.filter_state.write());
        self.list_page.set(1);
    }

    /// Open the detail view for `business`.
    pub fn select(&mut self, business: wsd_api::business::Business) {
        if self.navigator.write().select(business) {
            self.detail.set(None);
            self.period.set(Period::All);
        }
    }

    /// Detail → Reviews, starting from the first, unfiltered page.
    pub fn view_all_reviews(&mut self) {
        if self.navigator.write().view_all() {
            self.review_params.set(ReviewParams::default());
            self.reviews.set(ReviewsController::new());
        }
    }

    pub fn back(&mut self) {
        self.navigator.write().back();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use wsd_api::business::Business;
    use wsd_api::Page;
    use wsd_core::detail::DetailSlots;
    use wsd_core::navigator::View;
    use wsd_core::reviews::RatingFilter;

    /// Signal values observed after a state transition.
    #[derive(Debug)]
    struct Observed {
        list_page: u32,
        field: Option<String>,
        has_detail: bool,
        period: Period,
        review_params: ReviewParams,
        reviews_total: u64,
        reviews_loading: bool,
        view: View,
    }

    fn observe(state: AppState) -> Observed {
        Observed {
            list_page: *state.list_page.peek(),
            field: state.filter_state.peek().filters.field.clone(),
            has_detail: state.detail.peek().is_some(),
            period: *state.period.peek(),
            review_params: *state.review_params.peek(),
            reviews_total: state.reviews.peek().total(),
            reviews_loading: state.reviews.peek().state().is_loading(),
            view: state.navigator.peek().view().clone(),
        }
    }

    type Script = fn(AppState) -> Observed;

    #[derive(Clone)]
    struct HarnessProps {
        script: Script,
        out: Rc<RefCell<Option<Observed>>>,
    }

    fn harness(props: HarnessProps) -> Element {
        use_hook(|| {
            let observed = (props.script)(AppState::new());
            *props.out.borrow_mut() = Some(observed);
        });
        rsx! {}
    }

    /// Signals need an owning scope, so scripts run inside a rendered root.
    fn run(script: Script) -> Observed {
        let out = Rc::new(RefCell::new(None));
        let mut dom = VirtualDom::new_with_props(
            harness,
            HarnessProps {
                script,
                out: out.clone(),
            },
        );
        dom.rebuild_in_place();
        let observed = out.borrow_mut().take();
        observed.expect("harness did not render")
    }

    fn open_detail(state: &mut AppState) {
        state.select(Business::with_id("b1"));
        let view = DetailView::from_slots(
            Business::with_id("b1"),
            DetailSlots::default(),
            "1 Pier Way".into(),
        );
        state.detail.set(Some(view));
    }

    #[test]
    fn filter_edit_returns_to_first_page() {
        let observed = run(|mut state| {
            state.list_page.set(3);
            state.edit_filters(|f| f.set_field("parks"));
            observe(state)
        });
        assert_eq!(observed.list_page, 1);
        assert_eq!(observed.field.as_deref(), Some("parks"));
    }

    #[test]
    fn select_clears_previous_detail_and_period() {
        let observed = run(|mut state| {
            open_detail(&mut state);
            state.period.set(Period::Year(2020));
            state.back();
            state.select(Business::with_id("b2"));
            observe(state)
        });
        assert!(!observed.has_detail);
        assert_eq!(observed.period, Period::All);
        assert_eq!(observed.view, View::Detail(Business::with_id("b2")));
    }

    #[test]
    fn view_all_reviews_starts_fresh() {
        let observed = run(|mut state| {
            open_detail(&mut state);
            state
                .review_params
                .set(ReviewParams::default().with_rating(RatingFilter::Stars(2)).with_page(4));
            let mut reviews = ReviewsController::new();
            let request = reviews.begin("b0", ReviewParams::default());
            reviews.finish(request.ticket, Ok(Page { data: Vec::new(), total: 37 }));
            state.reviews.set(reviews);

            state.view_all_reviews();
            observe(state)
        });
        assert_eq!(observed.review_params, ReviewParams::default());
        assert_eq!(observed.reviews_total, 0);
        assert!(observed.reviews_loading);
        assert!(observed.has_detail);
        assert_eq!(observed.view, View::Reviews(Business::with_id("b1")));
    }
}
