//! Accordion Component
//!
//! Stack of collapsible panels. Each one opens and closes on its own.

use dioxus::prelude::*;
use folio_core::{AccordionState, Panel};

use super::markdown::MarkdownRenderer;

#[component]
pub fn Accordion(panels: Vec<Panel>) -> Element {
    let panel_count = panels.len();
    let mut state = use_signal(move || AccordionState::new(panel_count));

    rsx! {
        div { class: "accordion",
            for (index, panel) in panels.iter().enumerate() {
                {
                    let open = state.read().is_open(index);
                    let body = panel.body.clone();
                    rsx! {
                        div {
                            key: "{index}",
                            class: if open { "accordion-panel open" } else { "accordion-panel" },
                            button {
                                class: "accordion-header",
                                r#type: "button",
                                "aria-expanded": if open { "true" } else { "false" },
                                onclick: move |_| state.write().toggle(index),
                                span { class: "accordion-title", "{panel.title}" }
                                span { class: "accordion-chevron", if open { "\u{2212}" } else { "+" } }
                            }
                            if open {
                                MarkdownRenderer { content: body, class: "accordion-body".to_string() }
                            }
                        }
                    }
                }
            }
        }
    }
}
