//! Blog page - all posts, newest first.

use dioxus::prelude::*;

use crate::components::{NavHeader, NavLocation, PostCard};
use crate::context::use_site_content;

#[component]
pub fn Blog() -> Element {
    let content = use_site_content();
    let site = content.read();
    let posts = site.posts_newest_first();

    rsx! {
        NavHeader { current: NavLocation::Blog }

        main { class: "page blog",
            h1 { class: "page-title", "Blog" }
            if posts.is_empty() {
                p { class: "empty-state", "Nothing here yet." }
            }
            for post in posts {
                PostCard { key: "{post.slug}", post: post.clone() }
            }
        }
    }
}
