//! Wire types and HTTP client for the Washington destinations REST API.
//!
//! This crate provides:
//! - `business`, `review`, `stats`, `filters`, `page`: serde models for every
//!   endpoint the explorer consumes
//! - `transport`: the `Transport` seam plus the reqwest-backed implementation
//! - `client`: typed `ApiClient` methods, one per endpoint
//! - `geocode`: Nominatim reverse geocoding for records without an address
//!
//! Everything here compiles for both native targets and `wasm32`.

pub mod business;
pub mod client;
pub mod config;
pub mod error;
pub mod filters;
pub mod geocode;
pub mod lenient;
pub mod page;
pub mod review;
pub mod stats;
pub mod transport;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use page::Page;
