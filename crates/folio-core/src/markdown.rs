//! Markdown → HTML for blog posts and panel bodies.

use pulldown_cmark::{html, Options, Parser};

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options
}

pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, options());
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Rough reading time at 200 words per minute, at least one minute.
pub fn reading_minutes(source: &str) -> usize {
    let words = source.split_whitespace().count();
    words.div_ceil(200).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_emphasis() {
        let html = render_markdown("# Title\n\nSome *text*.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>text</em>"));
    }

    #[test]
    fn renders_strikethrough_and_tables() {
        let html = render_markdown("~~old~~\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<del>old</del>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(reading_minutes(""), 1);
        assert_eq!(reading_minutes(&"word ".repeat(201)), 2);
    }
}
