//! Folio UI Components
//!
//! Dioxus components for the portfolio site. State lives in `folio-core`;
//! these components bind it to the DOM.
//!
//! - [`Carousel`]: the achievement carousel, scroll-snapped and driven by
//!   the container's own scroll events
//! - [`CertificateModal`]: image overlay opened from a carousel slide
//! - [`Accordion`]: independently toggled panels
//! - [`CounterButton`], [`Button`], [`IconButton`], [`CloseButton`]
//! - [`MarkdownRenderer`]: markdown bodies for posts and panels

pub mod components;
pub mod dom;

pub use components::*;
pub use dom::DomScrollHost;
