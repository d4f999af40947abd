//! View orchestration for the Washington destinations explorer.
//!
//! Nothing in this crate depends on a UI framework. Each controller is split
//! into a synchronous `begin` (decide what to fetch, mark the view loading)
//! and `finish` (apply the response if it is still current) so it can be
//! driven by Dioxus signals in the browser or by a plain `async fn` in the CLI.
//!
//! - `address`: display-address precedence with reverse-geocode fallback
//! - `filters`: filter/option state and the county → city dependent query
//! - `listing`: paginated business list
//! - `detail`: six-way concurrent detail fetch and its derived sections
//! - `reviews`: paginated, rating-filtered review list
//! - `series`: yearly/monthly chart series and rating bars
//! - `navigator`: the List / Detail / Reviews view union

pub mod address;
pub mod detail;
pub mod filters;
pub mod format;
pub mod generation;
pub mod hours;
pub mod listing;
pub mod navigator;
pub mod pagination;
pub mod reviews;
pub mod series;
