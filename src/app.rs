use dioxus::prelude::*;

use crate::context::get_site_content;
use crate::pages::{About, Blog, Home, PostView};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Hero, achievements carousel
/// - `/about` - Experience and background panels
/// - `/blog` - Post list, newest first
/// - `/blog/:slug` - A single post
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/blog")]
    Blog {},
    #[route("/blog/:slug")]
    PostView { slug: String },
}

/// Root application component.
///
/// Provides global styles, site content context, and routing.
#[component]
pub fn App() -> Element {
    let content = use_signal(get_site_content);
    use_context_provider(|| content);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
