//! The three explorer views.

mod detail;
mod list;
mod reviews;

pub use detail::DetailPage;
pub use list::ListPage;
pub use reviews::ReviewsPage;

/// Jump back to the top after a page change.
pub(crate) fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
