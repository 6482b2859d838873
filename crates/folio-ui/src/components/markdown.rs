//! Markdown Renderer Component

use dioxus::prelude::*;
use folio_core::render_markdown;

/// Renders markdown as HTML
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     MarkdownRenderer { content: post.body.clone() }
/// }
/// ```
#[component]
pub fn MarkdownRenderer(
    /// Markdown content to render
    content: ReadOnlySignal<String>,
    #[props(default)]
    class: Option<String>,
) -> Element {
    let html_content = use_memo(move || render_markdown(&content()));
    let extra = class.unwrap_or_default();

    rsx! {
        div {
            class: "markdown-body {extra}",
            dangerous_inner_html: "{html_content()}",
        }
    }
}
