//! Reusable Dioxus RSX components for the destinations explorer.

mod app_header;
mod business_card;
mod chart_container;
mod error_display;
mod filter_select;
mod hours_table;
mod loading_spinner;
mod pagination;
mod rating_bars;
mod review_card;
mod sentiment_totals;
mod stars;

pub use app_header::AppHeader;
pub use business_card::BusinessCard;
pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use filter_select::FilterSelect;
pub use hours_table::HoursTable;
pub use loading_spinner::{CardSkeleton, LoadingSpinner};
pub use pagination::Pagination;
pub use rating_bars::RatingBars;
pub use review_card::ReviewCard;
pub use sentiment_totals::SentimentTotals;
pub use stars::Stars;
