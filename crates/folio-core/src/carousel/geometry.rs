//! Raw scroll readings and the state derived from them.

use serde::{Deserialize, Serialize};

/// One reading of a horizontal scroll container.
///
/// Field names match what the DOM reading script returns
/// (`scrollLeft`, `scrollWidth`, `clientWidth`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollGeometry {
    /// Current horizontal scroll offset in pixels
    pub offset: f64,
    /// Total scrollable content width in pixels
    pub scroll_width: f64,
    /// Visible width of the container in pixels
    pub client_width: f64,
}

impl ScrollGeometry {
    pub fn new(offset: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            offset,
            scroll_width,
            client_width,
        }
    }

    /// Largest reachable offset, never negative.
    pub fn max_offset(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    /// Width of one slide when `slide_count` slides share the scroll width.
    ///
    /// Returns `None` for an empty collection or degenerate geometry.
    pub fn slide_width(&self, slide_count: usize) -> Option<f64> {
        if slide_count == 0 {
            return None;
        }
        let width = self.scroll_width / slide_count as f64;
        (width.is_finite() && width > 0.0).then_some(width)
    }

    /// The (offset, max offset) pair reported to the rest of the carousel.
    pub fn state(&self) -> ScrollState {
        ScrollState {
            offset: self.offset,
            max_offset: self.max_offset(),
        }
    }
}

/// Offset and maximum offset of the container.
///
/// `offset <= max_offset` is the host's job, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub offset: f64,
    pub max_offset: f64,
}

impl ScrollState {
    /// Neutral state reported while no container is mounted.
    pub const NEUTRAL: ScrollState = ScrollState {
        offset: 0.0,
        max_offset: 0.0,
    };

    /// Nothing to the left of the viewport.
    pub fn at_start(&self) -> bool {
        self.offset <= 0.0
    }

    /// Nothing to the right of the viewport.
    pub fn at_end(&self) -> bool {
        self.offset >= self.max_offset
    }
}
