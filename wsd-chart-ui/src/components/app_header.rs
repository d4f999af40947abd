//! Page header with optional back button.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct AppHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
    /// Shown as a "← Back" button when set
    #[props(default)]
    pub on_back: Option<EventHandler<()>>,
}

#[component]
pub fn AppHeader(props: AppHeaderProps) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px; padding: 12px 16px; background: #fff; border-bottom: 1px solid #e5e7eb;",
            if let Some(on_back) = props.on_back {
                button {
                    style: "border: none; background: none; color: #f97316; cursor: pointer; font-size: 14px;",
                    onclick: move |_| on_back.call(()),
                    "← Back"
                }
            }
            div {
                h1 {
                    style: "margin: 0; font-size: 18px; color: #111827;",
                    "{props.title}"
                }
                if !props.subtitle.is_empty() {
                    p {
                        style: "margin: 0; font-size: 12px; color: #6b7280;",
                        "{props.subtitle}"
                    }
                }
            }
        }
    }
}
