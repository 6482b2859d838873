//! Property-based tests for index derivation and navigation
//!
//! Uses proptest to check the carousel invariants over arbitrary
//! geometries and offsets.

use std::rc::Rc;

use folio_core::{
    derive_index, Carousel, CarouselConfig, MemoryScrollHost, NavigationController,
    ScrollCommand, ScrollGeometry, ScrollTracker, Slide, SlideCollection,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Slide count, slide width, viewport width
///
/// The viewport is never wider than one slide. Wider viewports make the
/// last slides unreachable (see `wide_viewport_cannot_reach_last_slides`).
fn layout_strategy() -> impl Strategy<Value = (usize, f64, f64)> {
    (1usize..40, 50.0f64..800.0).prop_flat_map(|(count, slide_width)| {
        (Just(count), Just(slide_width), 10.0f64..=slide_width)
    })
}

fn slides(count: usize) -> SlideCollection {
    (0..count)
        .map(|i| Slide::new(format!("Slide {i}"), "Provider"))
        .collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Any reachable offset derives an index inside the collection
    #[test]
    fn index_always_in_range(
        (count, slide_width, client_width) in layout_strategy(),
        fraction in 0.0f64..=1.0,
    ) {
        let scroll_width = slide_width * count as f64;
        let max_offset = (scroll_width - client_width).max(0.0);
        let index = derive_index(fraction * max_offset, scroll_width, count);
        prop_assert!(index < count);
    }

    /// Same inputs, same index
    #[test]
    fn index_is_idempotent(
        offset in -100.0f64..10_000.0,
        scroll_width in 0.0f64..10_000.0,
        count in 0usize..50,
    ) {
        let first = derive_index(offset, scroll_width, count);
        let second = derive_index(offset, scroll_width, count);
        prop_assert_eq!(first, second);
    }

    /// Exactly halfway between slide i and i+1 rounds to i+1
    #[test]
    fn midpoint_rounds_up(count in 2usize..40, slide_px in 1u32..500, pick in 0usize..1000) {
        let slide_width = f64::from(slide_px);
        let i = pick % (count - 1);
        let offset = (i as f64 + 0.5) * slide_width;
        prop_assert_eq!(derive_index(offset, slide_width * count as f64, count), i + 1);
    }

    /// Same tie-break when the slide width is fractional
    #[test]
    fn fractional_midpoint_rounds_up(
        count in 2usize..40,
        scroll_width in 100.0f64..20_000.0,
        pick in 0usize..1000,
    ) {
        let slide_width = scroll_width / count as f64;
        let i = pick % (count - 1);
        let offset = (i as f64 + 0.5) * slide_width;
        prop_assert_eq!(derive_index(offset, scroll_width, count), i + 1);
    }

    /// Observing the same reading twice never changes the tracker
    #[test]
    fn tracker_observe_is_idempotent(
        (count, slide_width, client_width) in layout_strategy(),
        fraction in 0.0f64..=1.0,
    ) {
        let scroll_width = slide_width * count as f64;
        let geometry = ScrollGeometry::new(
            fraction * (scroll_width - client_width).max(0.0),
            scroll_width,
            client_width,
        );
        let mut tracker = ScrollTracker::new(count);
        tracker.observe(geometry);
        let once = tracker;
        prop_assert!(!tracker.observe(geometry));
        prop_assert_eq!(once, tracker);
    }

    /// Jumping to any slide and letting it settle lands on that slide
    #[test]
    fn jump_then_settle_lands_on_target(
        (count, slide_width, client_width) in layout_strategy(),
        pick in 0usize..1000,
    ) {
        let target = pick % count;
        let scroll_width = slide_width * count as f64;
        let host = Rc::new(MemoryScrollHost::new(scroll_width, client_width));
        let carousel = Carousel::mount(slides(count), &CarouselConfig::default(), Rc::clone(&host));

        carousel.jump_to(target);
        host.settle();

        prop_assert_eq!(carousel.current_index(), target);
        prop_assert_eq!(carousel.indicators().active_dot().map(|d| d.index), Some(target));
    }

    /// Jump targets are exact multiples of the slide width
    #[test]
    fn jump_targets_boundaries(
        (count, slide_width, client_width) in layout_strategy(),
        pick in 0usize..1000,
    ) {
        let target = pick % count;
        let mut tracker = ScrollTracker::new(count);
        tracker.observe(ScrollGeometry::new(0.0, slide_width * count as f64, client_width));
        let command = NavigationController::default().jump_to(&tracker, target);
        match command {
            Some(ScrollCommand::To { offset, .. }) => {
                let expected = target as f64 * slide_width;
                prop_assert!((offset - expected).abs() < 1e-6);
            }
            other => prop_assert!(false, "unexpected command {:?}", other),
        }
    }

    /// Any sequence of drags and button presses keeps the index in range
    /// and equal to a fresh derivation from the host's offset
    #[test]
    fn mixed_input_paths_converge(
        (count, slide_width, client_width) in layout_strategy(),
        ops in prop::collection::vec(0u8..4, 1..30),
        drags in prop::collection::vec(0.0f64..=1.0, 30),
    ) {
        let scroll_width = slide_width * count as f64;
        let host = Rc::new(MemoryScrollHost::new(scroll_width, client_width));
        let carousel = Carousel::mount(slides(count), &CarouselConfig::default(), Rc::clone(&host));
        let max_offset = (scroll_width - client_width).max(0.0);

        for (i, &op) in ops.iter().enumerate() {
            match op {
                0 => host.user_scroll(drags[i] * max_offset),
                1 => carousel.scroll_next(),
                2 => carousel.scroll_prev(),
                _ => carousel.jump_to(i % count),
            }
            host.settle();

            let offset = host.offset().unwrap();
            prop_assert!(carousel.current_index() < count);
            prop_assert_eq!(
                carousel.current_index(),
                derive_index(offset, scroll_width, count)
            );
        }
    }
}
