//! Shared Dioxus components and D3.js bridge for the destinations explorer.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js sentiment charts via `js_sys::eval()`
//! - `state`: reactive `AppState` signals and the `Services` handle
//! - `components`: reusable RSX components (filters, cards, pagination, charts)

pub mod components;
pub mod js_bridge;
pub mod state;
