//! Achievement carousel
//!
//! Four pieces, smallest first:
//!
//! - [`derive_index`]: offset → slide index, pure.
//! - [`ScrollTracker`]: last reading of the container and its index.
//! - [`NavigationController`]: prev / next / jump-to as scroll commands.
//! - [`IndicatorState`]: dots and arrow enablement projected from a tracker.
//!
//! [`Carousel`] wires them to an [`ObservableScrollHost`]. The Dioxus
//! component in `folio-ui` wires the same pieces to DOM events instead.

mod geometry;
mod index;
mod indicators;
mod navigation;
mod tracker;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::CarouselConfig;
use crate::content::SlideCollection;
use crate::host::{ObservableScrollHost, Subscription};

pub use geometry::{ScrollGeometry, ScrollState};
pub use index::derive_index;
pub use indicators::{Dot, IndicatorState};
pub use navigation::{NavigationController, ScrollBehavior, ScrollCommand};
pub use tracker::ScrollTracker;

/// Effects the carousel asks its surroundings to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselEffect {
    /// Show the certificate at this URL
    OpenCertificate(String),
}

/// Effect of activating slide `index`, if it has one.
pub fn activation_effect(slides: &SlideCollection, index: usize) -> Option<CarouselEffect> {
    slides
        .get(index)
        .and_then(|slide| slide.certificate.clone())
        .map(CarouselEffect::OpenCertificate)
}

/// A carousel bound to a host that pushes scroll events.
///
/// Mounting reads the host once, so a restored non-zero offset is picked
/// up immediately, then subscribes. The subscription lives as long as the
/// carousel. An empty collection or an unmounted host never subscribes
/// and stays neutral.
pub struct Carousel<H: ObservableScrollHost> {
    slides: SlideCollection,
    host: Rc<H>,
    tracker: Rc<RefCell<ScrollTracker>>,
    navigation: NavigationController,
    subscription: Option<Subscription<H>>,
}

impl<H: ObservableScrollHost> Carousel<H> {
    pub fn mount(slides: SlideCollection, config: &CarouselConfig, host: Rc<H>) -> Self {
        let tracker = Rc::new(RefCell::new(ScrollTracker::new(slides.len())));

        let subscription = match host.geometry() {
            Some(geometry) if !slides.is_empty() => {
                tracker.borrow_mut().observe(geometry);
                let listener_tracker = Rc::clone(&tracker);
                Subscription::acquire(
                    &host,
                    Box::new(move |geometry: ScrollGeometry| {
                        listener_tracker.borrow_mut().observe(geometry);
                    }),
                )
            }
            _ => None,
        };

        tracing::debug!(
            slides = slides.len(),
            subscribed = subscription.is_some(),
            "carousel mounted"
        );

        Self {
            slides,
            host,
            tracker,
            navigation: NavigationController::new(config),
            subscription,
        }
    }

    pub fn slides(&self) -> &SlideCollection {
        &self.slides
    }

    /// Copy of the current tracker reading.
    pub fn tracker(&self) -> ScrollTracker {
        *self.tracker.borrow()
    }

    pub fn state(&self) -> ScrollState {
        self.tracker.borrow().state()
    }

    pub fn current_index(&self) -> usize {
        self.tracker.borrow().current_index()
    }

    pub fn indicators(&self) -> IndicatorState {
        IndicatorState::project(&self.tracker.borrow())
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn scroll_prev(&self) {
        let command = self.navigation.prev(&self.tracker.borrow());
        self.navigation.issue(self.host.as_ref(), command);
    }

    pub fn scroll_next(&self) {
        let command = self.navigation.next(&self.tracker.borrow());
        self.navigation.issue(self.host.as_ref(), command);
    }

    pub fn jump_to(&self, index: usize) {
        let command = self.navigation.jump_to(&self.tracker.borrow(), index);
        self.navigation.issue(self.host.as_ref(), command);
    }

    /// Re-read geometry from the host, e.g. after a layout change that did
    /// not scroll.
    pub fn refresh(&self) {
        if self.subscription.is_none() {
            return;
        }
        match self.host.geometry() {
            Some(geometry) => {
                self.tracker.borrow_mut().observe(geometry);
            }
            None => self.tracker.borrow_mut().detach(),
        }
    }

    pub fn activate(&self, index: usize) -> Option<CarouselEffect> {
        activation_effect(&self.slides, index)
    }
}

impl<H: ObservableScrollHost> std::fmt::Debug for Carousel<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("slides", &self.slides.len())
            .field("tracker", &*self.tracker.borrow())
            .field("subscription", &self.subscription)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Slide;
    use crate::host::MemoryScrollHost;

    fn slides(n: usize) -> SlideCollection {
        (0..n)
            .map(|i| Slide::new(format!("Achievement {i}"), "Provider"))
            .collect()
    }

    #[test]
    fn mount_reads_restored_offset() {
        let host = Rc::new(MemoryScrollHost::new(1200.0, 300.0).with_offset(600.0));
        let carousel = Carousel::mount(slides(4), &CarouselConfig::default(), host);
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.state().offset, 600.0);
    }

    #[test]
    fn user_scroll_updates_index() {
        let host = Rc::new(MemoryScrollHost::new(1200.0, 300.0));
        let carousel = Carousel::mount(slides(4), &CarouselConfig::default(), Rc::clone(&host));
        host.user_scroll(320.0);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn index_only_moves_after_scroll_lands() {
        let host = Rc::new(MemoryScrollHost::new(1200.0, 300.0));
        let carousel = Carousel::mount(slides(4), &CarouselConfig::default(), Rc::clone(&host));
        carousel.jump_to(3);
        assert_eq!(carousel.current_index(), 0);
        host.settle();
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn drop_releases_listener() {
        let host = Rc::new(MemoryScrollHost::new(1200.0, 300.0));
        let carousel = Carousel::mount(slides(4), &CarouselConfig::default(), Rc::clone(&host));
        assert_eq!(host.listener_count(), 1);
        drop(carousel);
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn empty_collection_never_subscribes() {
        let host = Rc::new(MemoryScrollHost::new(300.0, 300.0));
        let carousel = Carousel::mount(slides(0), &CarouselConfig::default(), Rc::clone(&host));
        assert!(!carousel.is_subscribed());
        assert_eq!(host.listener_count(), 0);
        assert_eq!(carousel.state(), ScrollState::NEUTRAL);
        carousel.scroll_next();
        carousel.jump_to(0);
        assert!(host.commands().is_empty());
    }

    #[test]
    fn refresh_after_unmount_goes_neutral() {
        let host = Rc::new(MemoryScrollHost::new(1200.0, 300.0).with_offset(300.0));
        let carousel = Carousel::mount(slides(4), &CarouselConfig::default(), Rc::clone(&host));
        host.unmount();
        carousel.refresh();
        assert_eq!(carousel.state(), ScrollState::NEUTRAL);
        carousel.scroll_next();
        assert!(host.commands().is_empty());
    }

    #[test]
    fn activation_effect_carries_certificate() {
        let collection: SlideCollection = vec![
            Slide::new("Rust", "Ferris Academy").with_certificate("/cert.png"),
            Slide::new("Go", "Gopher School"),
        ]
        .into();
        assert_eq!(
            activation_effect(&collection, 0),
            Some(CarouselEffect::OpenCertificate("/cert.png".to_string()))
        );
        assert_eq!(activation_effect(&collection, 1), None);
        assert_eq!(activation_effect(&collection, 7), None);
    }
}
