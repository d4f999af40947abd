//! Which of the three views is showing.
//!
//! The selected business lives inside the variant, so the detail and reviews
//! views can never be shown without one.

use log::debug;
use wsd_api::business::Business;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    List,
    Detail(Business),
    Reviews(Business),
}

impl View {
    pub fn selected(&self) -> Option<&Business> {
        match self {
            View::List => None,
            View::Detail(business) | View::Reviews(business) => Some(business),
        }
    }
}

/// View transitions. Each returns `false` and leaves the view untouched when
/// the transition does not apply to the current view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Navigator {
    view: View,
    last_selected: Option<String>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.view.selected().map(|b| b.business_id.as_str())
    }

    /// Id of the most recently selected business, kept after returning to
    /// the list so the card can be highlighted.
    pub fn last_selected(&self) -> Option<&str> {
        self.last_selected.as_deref()
    }

    /// Whether a response for `business_id` still belongs on screen.
    pub fn is_showing(&self, business_id: &str) -> bool {
        self.selected_id() == Some(business_id)
    }

    /// List → Detail.
    pub fn select(&mut self, business: Business) -> bool {
        if self.view != View::List {
            return false;
        }
        debug!("Selected {}", business.business_id);
        self.last_selected = Some(business.business_id.clone());
        self.view = View::Detail(business);
        true
    }

    /// Detail → Reviews for the same business.
    pub fn view_all(&mut self) -> bool {
        match std::mem::take(&mut self.view) {
            View::Detail(business) => {
                self.view = View::Reviews(business);
                true
            }
            other => {
                self.view = other;
                false
            }
        }
    }

    /// Reviews → Detail, Detail → List.
    pub fn back(&mut self) -> bool {
        match std::mem::take(&mut self.view) {
            View::Reviews(business) => {
                self.view = View::Detail(business);
                true
            }
            View::Detail(_) => true,
            View::List => false,
        }
    }
}
