//! Indicator projection
//!
//! Pure view of a [`ScrollTracker`]: which dot is highlighted and which
//! arrow controls are enabled.

use super::tracker::ScrollTracker;

/// One dot indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

impl Dot {
    /// CSS class for this dot
    pub fn class(&self) -> &'static str {
        if self.active {
            "carousel-dot active"
        } else {
            "carousel-dot"
        }
    }
}

/// Everything the carousel controls need to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorState {
    pub dots: Vec<Dot>,
    pub current: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl IndicatorState {
    pub fn project(tracker: &ScrollTracker) -> Self {
        let current = tracker.current_index();
        let state = tracker.state();
        let dots = (0..tracker.slide_count())
            .map(|index| Dot {
                index,
                active: index == current,
            })
            .collect();

        Self {
            dots,
            current,
            prev_enabled: tracker.is_mounted() && !state.at_start(),
            next_enabled: tracker.is_mounted() && !state.at_end(),
        }
    }

    pub fn active_dot(&self) -> Option<&Dot> {
        self.dots.iter().find(|d| d.active)
    }
}
