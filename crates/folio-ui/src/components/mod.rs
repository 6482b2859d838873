//! Reusable UI components.
//!
//! Class names match the global stylesheet in the desktop app.

mod accordion;
mod button;
mod carousel;
mod certificate_modal;
mod counter_button;
mod markdown;

pub use accordion::*;
pub use button::*;
pub use carousel::*;
pub use certificate_modal::*;
pub use counter_button::*;
pub use markdown::*;
