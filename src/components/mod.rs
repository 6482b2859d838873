//! Site-specific components for Folio.
//!
//! Reusable widgets live in `folio-ui`.

mod nav_header;
mod post_card;

pub use nav_header::{NavHeader, NavLocation};
pub use post_card::PostCard;
