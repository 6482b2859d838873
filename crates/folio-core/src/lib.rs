//! # Folio Core
//!
//! Headless model behind the portfolio site.
//!
//! The interesting part is the achievement [`carousel`]: a horizontally
//! scrolling, snap-aligned list whose current slide is *derived* from the
//! container's scroll offset. User scrolling and button/dot navigation both
//! end up as scroll events, and both flow through the same derivation, so
//! there is only ever one "current index".
//!
//! ## Architecture
//!
//! ```text
//! user scroll ──────────────┐
//!                           ▼
//!                     ScrollTracker ──► derive_index ──► IndicatorState
//!                           ▲
//! prev/next/dot ──► NavigationController ──► ScrollHost (platform)
//! ```
//!
//! Nothing in here knows about the DOM. A [`host::ScrollHost`] is whatever
//! owns the real scroll position: the Dioxus component in `folio-ui`, or
//! [`host::MemoryScrollHost`] in tests.
//!
//! The rest of the crate is site content: slides, accordion panels, blog
//! posts and their markdown rendering.

pub mod accordion;
pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod host;
pub mod markdown;
pub mod modal;

pub use accordion::AccordionState;
pub use carousel::{
    activation_effect, derive_index, Carousel, CarouselEffect, Dot, IndicatorState,
    NavigationController, ScrollBehavior, ScrollCommand, ScrollGeometry, ScrollState,
    ScrollTracker,
};
pub use config::CarouselConfig;
pub use content::{Panel, Post, Profile, SiteContent, Slide, SlideCollection};
pub use error::{FolioError, FolioResult};
pub use host::{ListenerId, MemoryScrollHost, ObservableScrollHost, ScrollHost, Subscription};
pub use markdown::render_markdown;
pub use modal::CertificateModalState;
