//! Scroll tracking for one carousel container.

use super::geometry::{ScrollGeometry, ScrollState};
use super::index::derive_index;

/// Last observed geometry of a carousel container plus the index derived
/// from it.
///
/// The index is recomputed inside [`observe`](Self::observe) and nowhere
/// else, which makes it the single write path for "current slide".
/// A detached tracker (container not mounted, or torn down) reports
/// [`ScrollState::NEUTRAL`] and index 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    slide_count: usize,
    geometry: Option<ScrollGeometry>,
    index: usize,
}

impl ScrollTracker {
    /// A tracker with no container attached yet.
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            geometry: None,
            index: 0,
        }
    }

    /// Record a reading and re-derive the index.
    ///
    /// Returns `true` when the derived index changed. Feeding the same
    /// geometry twice is a no-op the second time.
    pub fn observe(&mut self, geometry: ScrollGeometry) -> bool {
        let index = derive_index(geometry.offset, geometry.scroll_width, self.slide_count);
        self.geometry = Some(geometry);
        let changed = index != self.index;
        if changed {
            tracing::trace!(from = self.index, to = index, "carousel index changed");
        }
        self.index = index;
        changed
    }

    /// Forget the container. Later reads are neutral until the next
    /// [`observe`](Self::observe).
    pub fn detach(&mut self) {
        self.geometry = None;
        self.index = 0;
    }

    pub fn is_mounted(&self) -> bool {
        self.geometry.is_some()
    }

    pub fn geometry(&self) -> Option<ScrollGeometry> {
        self.geometry
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn state(&self) -> ScrollState {
        self.geometry
            .map(|g| g.state())
            .unwrap_or(ScrollState::NEUTRAL)
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Width of one slide in the last reading.
    pub fn slide_width(&self) -> Option<f64> {
        self.geometry.and_then(|g| g.slide_width(self.slide_count))
    }
}
