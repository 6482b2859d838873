//! Prev / next / jump-to navigation
//!
//! The controller never touches the current index. It turns a button or
//! dot press into a [`ScrollCommand`] and hands that to the host; the
//! host's scroll events come back through the tracker like any other
//! scroll.

use crate::config::CarouselConfig;
use crate::host::ScrollHost;

use super::tracker::ScrollTracker;

/// How the host should animate a scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Animated over a platform-controlled duration
    #[default]
    Smooth,
    /// Applied immediately
    Instant,
}

impl ScrollBehavior {
    /// Value for the DOM `behavior` option of `scrollBy`/`scrollTo`
    pub fn as_dom_str(&self) -> &'static str {
        match self {
            ScrollBehavior::Smooth => "smooth",
            ScrollBehavior::Instant => "instant",
        }
    }
}

/// A scroll request for the host scroll primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCommand {
    /// Scroll relative to the current offset
    By { delta: f64, behavior: ScrollBehavior },
    /// Scroll to an absolute offset
    To { offset: f64, behavior: ScrollBehavior },
}

/// Plans and issues carousel scroll commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationController {
    step_px: f64,
    behavior: ScrollBehavior,
}

impl NavigationController {
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            step_px: config.step_px,
            behavior: config.behavior(),
        }
    }

    pub fn step_px(&self) -> f64 {
        self.step_px
    }

    /// Command for the "previous" control, `None` at the start.
    ///
    /// The step is a fixed pixel count, not a slide width; snapping
    /// settles the final position.
    pub fn prev(&self, tracker: &ScrollTracker) -> Option<ScrollCommand> {
        if !tracker.is_mounted() || tracker.state().at_start() {
            return None;
        }
        Some(ScrollCommand::By {
            delta: -self.step_px,
            behavior: self.behavior,
        })
    }

    /// Command for the "next" control, `None` at the end.
    pub fn next(&self, tracker: &ScrollTracker) -> Option<ScrollCommand> {
        if !tracker.is_mounted() || tracker.state().at_end() {
            return None;
        }
        Some(ScrollCommand::By {
            delta: self.step_px,
            behavior: self.behavior,
        })
    }

    /// Command that lands exactly on the boundary of slide `index`.
    ///
    /// Indices past the end are clamped to the last slide. `None` for an
    /// empty collection, an unmounted container or zero-width geometry.
    pub fn jump_to(&self, tracker: &ScrollTracker, index: usize) -> Option<ScrollCommand> {
        let count = tracker.slide_count();
        if count == 0 {
            return None;
        }
        let slide_width = tracker.slide_width()?;
        let index = index.min(count - 1);
        Some(ScrollCommand::To {
            offset: index as f64 * slide_width,
            behavior: self.behavior,
        })
    }

    /// Hand a planned command to the host. `None` is a no-op.
    pub fn issue<H: ScrollHost + ?Sized>(&self, host: &H, command: Option<ScrollCommand>) {
        if let Some(command) = command {
            tracing::debug!(?command, "issuing carousel scroll");
            host.execute(command);
        }
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(&CarouselConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::ScrollGeometry;

    fn tracker(count: usize, geometry: ScrollGeometry) -> ScrollTracker {
        let mut t = ScrollTracker::new(count);
        t.observe(geometry);
        t
    }

    #[test]
    fn prev_is_noop_at_start() {
        let nav = NavigationController::default();
        let t = tracker(4, ScrollGeometry::new(0.0, 1200.0, 300.0));
        assert_eq!(nav.prev(&t), None);
    }

    #[test]
    fn prev_steps_back_by_fixed_pixels() {
        let nav = NavigationController::default();
        let t = tracker(4, ScrollGeometry::new(450.0, 1200.0, 300.0));
        assert_eq!(
            nav.prev(&t),
            Some(ScrollCommand::By {
                delta: -300.0,
                behavior: ScrollBehavior::Smooth
            })
        );
    }

    #[test]
    fn next_is_noop_at_end() {
        let nav = NavigationController::default();
        let t = tracker(4, ScrollGeometry::new(900.0, 1200.0, 300.0));
        assert_eq!(nav.next(&t), None);
    }

    #[test]
    fn step_is_independent_of_slide_width() {
        let config = CarouselConfig {
            step_px: 120.0,
            ..CarouselConfig::default()
        };
        let nav = NavigationController::new(&config);
        let t = tracker(4, ScrollGeometry::new(0.0, 2000.0, 500.0));
        assert_eq!(
            nav.next(&t),
            Some(ScrollCommand::By {
                delta: 120.0,
                behavior: ScrollBehavior::Smooth
            })
        );
    }

    #[test]
    fn jump_targets_slide_boundary() {
        let nav = NavigationController::default();
        // 5 slides of 200px
        let t = tracker(5, ScrollGeometry::new(0.0, 1000.0, 200.0));
        assert_eq!(
            nav.jump_to(&t, 3),
            Some(ScrollCommand::To {
                offset: 600.0,
                behavior: ScrollBehavior::Smooth
            })
        );
    }

    #[test]
    fn jump_past_end_clamps_to_last() {
        let nav = NavigationController::default();
        let t = tracker(5, ScrollGeometry::new(0.0, 1000.0, 200.0));
        assert_eq!(
            nav.jump_to(&t, 42),
            Some(ScrollCommand::To {
                offset: 800.0,
                behavior: ScrollBehavior::Smooth
            })
        );
    }

    #[test]
    fn unmounted_container_plans_nothing() {
        let nav = NavigationController::default();
        let t = ScrollTracker::new(3);
        assert_eq!(nav.prev(&t), None);
        assert_eq!(nav.next(&t), None);
        assert_eq!(nav.jump_to(&t, 1), None);
    }

    #[test]
    fn instant_behavior_from_config() {
        let config = CarouselConfig {
            smooth: false,
            ..CarouselConfig::default()
        };
        let nav = NavigationController::new(&config);
        let t = tracker(2, ScrollGeometry::new(0.0, 600.0, 300.0));
        assert_eq!(
            nav.jump_to(&t, 1),
            Some(ScrollCommand::To {
                offset: 300.0,
                behavior: ScrollBehavior::Instant
            })
        );
    }

    #[test]
    fn behavior_dom_strings() {
        assert_eq!(ScrollBehavior::Smooth.as_dom_str(), "smooth");
        assert_eq!(ScrollBehavior::Instant.as_dom_str(), "instant");
    }
}
