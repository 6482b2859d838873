//! Site content context for Folio.
//!
//! The content loaded at startup is provided once by `App` and read by
//! pages with [`use_site_content`].

use dioxus::prelude::*;
use folio_core::SiteContent;

/// Get the content loaded at startup.
pub fn get_site_content() -> SiteContent {
    crate::get_site_content()
}

/// Hook to access the site content from context.
///
/// # Example
///
/// ```ignore
/// let content = use_site_content();
/// let name = content.read().profile.name.clone();
/// ```
pub fn use_site_content() -> Signal<SiteContent> {
    use_context::<Signal<SiteContent>>()
}
