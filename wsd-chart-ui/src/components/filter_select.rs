//! Labelled dropdown with an optional type-to-narrow search box.

use dioxus::prelude::*;
use wsd_core::filters::matching_options;

#[derive(Props, Clone, PartialEq)]
pub struct FilterSelectProps {
    pub label: String,
    pub options: Vec<String>,
    /// Currently selected value; `None` selects the "all" entry
    #[props(!optional)]
    pub selected: Option<String>,
    /// Text of the unconstrained entry, e.g. "All counties"
    pub all_label: String,
    /// Show a search box that narrows the option list
    #[props(default = false)]
    pub searchable: bool,
    /// Called with the chosen value, or `""` for the "all" entry
    pub on_change: EventHandler<String>,
}

#[component]
pub fn FilterSelect(props: FilterSelectProps) -> Element {
    let mut needle = use_signal(String::new);
    let selected = props.selected.clone().unwrap_or_default();
    let needle_now = needle();

    let mut shown: Vec<String> = matching_options(&props.options, &needle_now)
        .into_iter()
        .map(str::to_string)
        .collect();
    if !selected.is_empty() && !shown.contains(&selected) {
        shown.insert(0, selected.clone());
    }

    let on_change = props.on_change;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px; min-width: 160px;",
            label {
                style: "font-size: 12px; font-weight: 600; color: #374151;",
                "{props.label}"
            }
            if props.searchable {
                input {
                    r#type: "text",
                    placeholder: "Search...",
                    value: "{needle_now}",
                    style: "border: 1px solid #d1d5db; border-radius: 4px; padding: 4px 6px; font-size: 12px;",
                    oninput: move |evt: Event<FormData>| needle.set(evt.value()),
                }
            }
            select {
                style: "border: 1px solid #d1d5db; border-radius: 4px; padding: 4px 6px; font-size: 13px;",
                onchange: move |evt: Event<FormData>| on_change.call(evt.value()),
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "{props.all_label}"
                }
                for value in shown {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: value == selected,
                        "{value}"
                    }
                }
            }
        }
    }
}
