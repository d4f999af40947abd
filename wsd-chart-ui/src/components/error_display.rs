//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a startup error in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 16px; background: #FEF2F2; color: #B91C1C; border-radius: 8px; border: 1px solid #FECACA;",
            strong { "Unable to start: " }
            "{props.message}"
        }
    }
}
