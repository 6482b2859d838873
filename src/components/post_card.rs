//! Post Card Component
//!
//! One entry in the blog list.

use dioxus::prelude::*;
use folio_core::markdown::reading_minutes;
use folio_core::Post;

use crate::app::Route;

#[component]
pub fn PostCard(post: Post) -> Element {
    let minutes = reading_minutes(&post.body);

    rsx! {
        article { class: "post-card",
            Link { class: "post-card__title", to: Route::PostView { slug: post.slug.clone() },
                "{post.title}"
            }
            p { class: "post-card__meta", "{post.date} \u{00B7} {minutes} min read" }
            if !post.summary.is_empty() {
                p { class: "post-card__summary", "{post.summary}" }
            }
        }
    }
}
