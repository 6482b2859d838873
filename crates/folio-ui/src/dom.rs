//! DOM-backed scroll host
//!
//! Reads and scrolls a container by element id through `document::eval`.
//! Each carousel instance gets its own id, so several can share a page.

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use folio_core::{ScrollCommand, ScrollGeometry, ScrollHost};

static NEXT_CONTAINER: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomScrollHost {
    container_id: String,
}

impl DomScrollHost {
    /// A host for a fresh, page-unique container id.
    pub fn allocate() -> Self {
        let n = NEXT_CONTAINER.fetch_add(1, Ordering::Relaxed);
        Self::for_id(format!("carousel-track-{n}"))
    }

    pub fn for_id(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// One reading of the container: offset, scroll width and client width
    /// in a single layout read. `None` when the element is gone.
    pub async fn read_geometry(&self) -> Option<ScrollGeometry> {
        let js = read_script(&self.container_id);
        match document::eval(&js).join::<Option<ScrollGeometry>>().await {
            Ok(geometry) => geometry,
            Err(e) => {
                tracing::warn!(id = %self.container_id, "scroll geometry read failed: {:?}", e);
                None
            }
        }
    }
}

impl ScrollHost for DomScrollHost {
    fn execute(&self, command: ScrollCommand) {
        // The handle is not awaited; the resulting scroll events report back.
        let _eval = document::eval(&command_script(&self.container_id, command));
    }
}

fn read_script(id: &str) -> String {
    format!(
        r#"const el = document.getElementById({id:?});
if (!el) {{ return null; }}
return {{ offset: el.scrollLeft, scroll_width: el.scrollWidth, client_width: el.clientWidth }};"#
    )
}

fn command_script(id: &str, command: ScrollCommand) -> String {
    let (method, left, behavior) = match command {
        ScrollCommand::By { delta, behavior } => ("scrollBy", delta, behavior),
        ScrollCommand::To { offset, behavior } => ("scrollTo", offset, behavior),
    };
    format!(
        "document.getElementById({id:?})?.{method}({{ left: {left}, behavior: '{}' }});",
        behavior.as_dom_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::ScrollBehavior;

    #[test]
    fn allocated_ids_are_unique() {
        let a = DomScrollHost::allocate();
        let b = DomScrollHost::allocate();
        assert_ne!(a.container_id(), b.container_id());
        assert!(a.container_id().starts_with("carousel-track-"));
    }

    #[test]
    fn scroll_by_script() {
        let js = command_script(
            "carousel-track-0",
            ScrollCommand::By {
                delta: -300.0,
                behavior: ScrollBehavior::Smooth,
            },
        );
        assert_eq!(
            js,
            "document.getElementById(\"carousel-track-0\")?.scrollBy({ left: -300, behavior: 'smooth' });"
        );
    }

    #[test]
    fn scroll_to_script() {
        let js = command_script(
            "c",
            ScrollCommand::To {
                offset: 600.0,
                behavior: ScrollBehavior::Instant,
            },
        );
        assert_eq!(
            js,
            "document.getElementById(\"c\")?.scrollTo({ left: 600, behavior: 'instant' });"
        );
    }

    #[test]
    fn read_script_returns_geometry_fields() {
        let js = read_script("c");
        assert!(js.contains("document.getElementById(\"c\")"));
        assert!(js.contains("offset: el.scrollLeft"));
        assert!(js.contains("scroll_width: el.scrollWidth"));
        assert!(js.contains("client_width: el.clientWidth"));
    }
}
