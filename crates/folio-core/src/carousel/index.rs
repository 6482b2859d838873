//! Offset → slide index.

/// Slack applied before rounding so a midpoint computed from a fractional
/// slide width (`(i + 0.5) * w`) still rounds up. Far below a pixel.
const TIE_EPSILON: f64 = 1e-9;

/// Maps a scroll offset to the nearest slide.
///
/// `slide_width = total_scroll_width / slide_count`, then
/// `round(offset / slide_width)` clamped to `[0, slide_count - 1]`.
/// `f64::round` rounds half away from zero, so on the exact midpoint
/// between two slides the later one wins, matching snap-to-nearest.
/// Ratios within [`TIE_EPSILON`] below a midpoint count as the midpoint.
///
/// Returns 0 for an empty collection and for zero, negative or
/// non-finite widths (a hidden container reports width 0).
pub fn derive_index(offset: f64, total_scroll_width: f64, slide_count: usize) -> usize {
    if slide_count == 0 {
        return 0;
    }
    let slide_width = total_scroll_width / slide_count as f64;
    if !slide_width.is_finite() || slide_width <= 0.0 {
        return 0;
    }

    let raw = (offset / slide_width + TIE_EPSILON).round();
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    let last = slide_count - 1;
    // `as` saturates, the `min` handles the end-of-range overshoot
    (raw as usize).min(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_is_index_zero() {
        assert_eq!(derive_index(500.0, 1000.0, 0), 0);
    }

    #[test]
    fn rounds_to_nearest_slide() {
        // 4 slides of 300px
        assert_eq!(derive_index(0.0, 1200.0, 4), 0);
        assert_eq!(derive_index(149.0, 1200.0, 4), 0);
        assert_eq!(derive_index(151.0, 1200.0, 4), 1);
        assert_eq!(derive_index(600.0, 1200.0, 4), 2);
    }

    #[test]
    fn midpoint_goes_to_later_slide() {
        assert_eq!(derive_index(150.0, 1200.0, 4), 1);
        assert_eq!(derive_index(450.0, 1200.0, 4), 2);
    }

    #[test]
    fn fractional_width_midpoint_goes_to_later_slide() {
        // 1000px over 6 slides: the 3.5 midpoint lands a hair under 3.5.
        assert_eq!(derive_index(3.5 * (1000.0 / 6.0), 1000.0, 6), 4);
        for total in [900.0, 1000.0, 1234.0] {
            for n in 2..13usize {
                let w = total / n as f64;
                for i in 0..n - 1 {
                    let mid = (i as f64 + 0.5) * w;
                    assert_eq!(derive_index(mid, total, n), i + 1, "{total}/{n} at {i}");
                    assert_eq!(derive_index(mid - 0.01, total, n), i, "{total}/{n} below {i}");
                }
            }
        }
    }

    #[test]
    fn clamps_overshoot_to_last_slide() {
        assert_eq!(derive_index(1199.9, 1200.0, 4), 3);
        assert_eq!(derive_index(5000.0, 1200.0, 4), 3);
    }

    #[test]
    fn degenerate_width_falls_back_to_zero() {
        assert_eq!(derive_index(100.0, 0.0, 3), 0);
        assert_eq!(derive_index(100.0, -10.0, 3), 0);
        assert_eq!(derive_index(f64::NAN, 900.0, 3), 0);
        assert_eq!(derive_index(100.0, f64::INFINITY, 3), 0);
    }

    #[test]
    fn negative_offset_clamps_to_first() {
        assert_eq!(derive_index(-40.0, 900.0, 3), 0);
    }
}
