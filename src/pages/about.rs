//! About page - short bio and accordion panels.

use dioxus::prelude::*;
use folio_ui::{Accordion, MarkdownRenderer};

use crate::components::{NavHeader, NavLocation};
use crate::context::use_site_content;

#[component]
pub fn About() -> Element {
    let content = use_site_content();
    let site = content.read();

    rsx! {
        NavHeader { current: NavLocation::About }

        main { class: "page about",
            h1 { class: "page-title", "About" }
            if !site.profile.about.is_empty() {
                MarkdownRenderer { content: site.profile.about.clone() }
            }
            Accordion { panels: site.panels.clone() }
        }
    }
}
