//! Titled chart box that D3 renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    pub title: String,
    /// Optional minimum height in pixels
    #[props(default = 176)]
    pub min_height: u32,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "flex: 1; min-width: 0;",
            h3 {
                style: "font-size: 14px; margin: 0 0 6px 0; color: #111827;",
                "{props.title}"
            }
            div {
                style: "border: 1px solid #e5e7eb; border-radius: 8px; padding: 8px;",
                div {
                    id: "{props.id}",
                    style: "{style}",
                }
            }
        }
    }
}
