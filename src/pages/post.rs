//! Single post page.

use dioxus::prelude::*;
use folio_ui::{Button, ButtonVariant, CounterButton, MarkdownRenderer};

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};
use crate::context::use_site_content;

#[component]
pub fn PostView(slug: String) -> Element {
    let content = use_site_content();
    let navigator = use_navigator();
    let post = content.read().post(&slug).cloned();

    let back = move |_| {
        navigator.push(Route::Blog {});
    };

    rsx! {
        NavHeader { current: NavLocation::Blog }

        main { class: "page post",
            if let Some(post) = post {
                p { class: "post-date", "{post.date}" }
                MarkdownRenderer { content: post.body.clone(), class: "post-body".to_string() }
                div { class: "post-actions",
                    CounterButton { label: "Appreciate".to_string() }
                    Button { variant: ButtonVariant::Ghost, onclick: back, "All posts" }
                }
            } else {
                h1 { class: "page-title", "Not found" }
                p { class: "empty-state", "No post called \u{201C}{slug}\u{201D}." }
                Button { variant: ButtonVariant::Ghost, onclick: back, "All posts" }
            }
        }
    }
}
