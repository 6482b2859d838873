//! Page components for Folio.

mod about;
mod blog;
mod home;
mod post;

pub use about::About;
pub use blog::Blog;
pub use home::Home;
pub use post::PostView;
