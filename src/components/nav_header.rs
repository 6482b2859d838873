//! Navigation Header Component
//!
//! Site title on the left, page links on the right.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_site_content;

/// Navigation location within the site
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    About,
    Blog,
}

impl NavLocation {
    pub const ALL: [NavLocation; 3] = [NavLocation::Home, NavLocation::About, NavLocation::Blog];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::About => "About",
            NavLocation::Blog => "Blog",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::About => Route::About {},
            NavLocation::Blog => Route::Blog {},
        }
    }
}

#[component]
pub fn NavHeader(
    /// Current location in the site
    current: NavLocation,
) -> Element {
    let content = use_site_content();
    let name = content.read().profile.name.clone();

    rsx! {
        header { class: "nav-header",
            Link { class: "nav-title", to: Route::Home {}, "{name}" }

            nav { class: "nav-links",
                for location in NavLocation::ALL {
                    {
                        let label = location.display_name();
                        let class = if location == current { "nav-link active" } else { "nav-link" };
                        rsx! {
                            Link { key: "{label}", class: "{class}", to: location.route(), "{label}" }
                        }
                    }
                }
            }
        }
    }
}
