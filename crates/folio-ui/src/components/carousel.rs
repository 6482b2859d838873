//! Achievement Carousel Component
//!
//! Horizontal, scroll-snapped list of achievement slides with prev/next
//! arrows and dot indicators.
//!
//! The container's scroll events are the only input to the tracker. The
//! arrows and dots only issue scroll commands, and the scroll they cause
//! comes back through `onscroll` like a drag would.

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{
    activation_effect, CarouselConfig, CarouselEffect, IndicatorState, NavigationController,
    ScrollGeometry, ScrollTracker, Slide, SlideCollection,
};

use crate::dom::DomScrollHost;

/// Achievement carousel
///
/// Renders nothing for an empty collection.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Carousel {
///         slides: content.achievements.clone(),
///         config: content.carousel.clone(),
///         title: "Achievements".to_string(),
///         on_open_certificate: move |url| modal.write().open(url),
///     }
/// }
/// ```
#[component]
pub fn Carousel(
    slides: SlideCollection,
    #[props(default)]
    config: CarouselConfig,
    #[props(default)]
    title: Option<String>,
    /// Called with the certificate URL when a slide that has one is activated
    on_open_certificate: EventHandler<String>,
) -> Element {
    let host = use_hook(DomScrollHost::allocate);
    let slide_count = slides.len();
    let mut tracker = use_signal(move || ScrollTracker::new(slide_count));

    // Reads still in flight when the component goes away are dropped.
    let alive = use_hook(|| Rc::new(Cell::new(true)));
    use_drop({
        let alive = Rc::clone(&alive);
        let id = host.container_id().to_string();
        move || {
            alive.set(false);
            tracing::debug!(%id, "carousel unmounted");
        }
    });

    if slides.is_empty() {
        return rsx! {};
    }

    let refresh = {
        let host = host.clone();
        move || {
            let host = host.clone();
            let alive = Rc::clone(&alive);
            spawn(async move {
                let reading = host.read_geometry().await;
                let mut next = *tracker.peek();
                if apply_reading(alive.get(), reading, &mut next) {
                    tracker.set(next);
                }
            });
        }
    };
    let on_mounted = {
        let refresh = refresh.clone();
        let id = host.container_id().to_string();
        move |_: MountedEvent| {
            tracing::debug!(%id, slides = slide_count, "carousel mounted");
            refresh();
        }
    };
    let on_scroll = move |_: ScrollEvent| refresh();

    let container_id = host.container_id().to_string();
    let nav = NavigationController::new(&config);
    let view = IndicatorState::project(&tracker.read());

    let on_prev = {
        let host = host.clone();
        move |_: MouseEvent| nav.issue(&host, nav.prev(&tracker.read()))
    };
    let on_next = {
        let host = host.clone();
        move |_: MouseEvent| nav.issue(&host, nav.next(&tracker.read()))
    };

    rsx! {
        section { class: "carousel",
            if let Some(title) = &title {
                h2 { class: "section-header", "{title}" }
            }

            div { class: "carousel-viewport",
                button {
                    class: "carousel-arrow carousel-arrow--prev",
                    r#type: "button",
                    "aria-label": "Previous achievement",
                    disabled: !view.prev_enabled,
                    onclick: on_prev,
                    "\u{2039}"
                }

                div {
                    id: "{container_id}",
                    class: "carousel-track",
                    onmounted: on_mounted,
                    onscroll: on_scroll,

                    for (index, slide) in slides.iter().enumerate() {
                        {
                            let slides = slides.clone();
                            rsx! {
                                SlideCard {
                                    key: "{index}",
                                    slide: slide.clone(),
                                    active: index == view.current,
                                    on_activate: move |_| {
                                        if let Some(CarouselEffect::OpenCertificate(url)) =
                                            activation_effect(&slides, index)
                                        {
                                            on_open_certificate.call(url);
                                        }
                                    },
                                }
                            }
                        }
                    }
                }

                button {
                    class: "carousel-arrow carousel-arrow--next",
                    r#type: "button",
                    "aria-label": "Next achievement",
                    disabled: !view.next_enabled,
                    onclick: on_next,
                    "\u{203A}"
                }
            }

            div { class: "carousel-dots", role: "tablist",
                for dot in view.dots.iter().copied() {
                    {
                        let host = host.clone();
                        let label = format!("Go to achievement {}", dot.index + 1);
                        rsx! {
                            button {
                                key: "{dot.index}",
                                class: dot.class(),
                                r#type: "button",
                                role: "tab",
                                "aria-label": "{label}",
                                "aria-selected": if dot.active { "true" } else { "false" },
                                onclick: move |_| {
                                    nav.issue(&host, nav.jump_to(&tracker.read(), dot.index))
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Fold a finished geometry read into `tracker`.
///
/// A read that resolves after unmount is dropped. A read that finds no
/// container detaches the tracker. Returns `true` when the tracker changed,
/// so the caller only writes its signal when something is new.
fn apply_reading(
    alive: bool,
    reading: Option<ScrollGeometry>,
    tracker: &mut ScrollTracker,
) -> bool {
    if !alive {
        return false;
    }
    let before = *tracker;
    match reading {
        Some(geometry) => {
            tracker.observe(geometry);
        }
        None => tracker.detach(),
    }
    *tracker != before
}

/// Text shown under the provider line.
fn slide_meta(slide: &Slide) -> Option<String> {
    match (&slide.year, &slide.certificate) {
        (Some(year), Some(_)) => Some(format!("{} \u{00B7} view certificate", year)),
        (Some(year), None) => Some(year.clone()),
        (None, Some(_)) => Some("view certificate".to_string()),
        (None, None) => None,
    }
}

/// One slide in the track.
#[component]
pub fn SlideCard(
    slide: Slide,
    #[props(default)]
    active: bool,
    on_activate: EventHandler<()>,
) -> Element {
    let has_certificate = slide.certificate.is_some();
    let class = match (active, has_certificate) {
        (true, true) => "carousel-slide active has-certificate",
        (true, false) => "carousel-slide active",
        (false, true) => "carousel-slide has-certificate",
        (false, false) => "carousel-slide",
    };
    let meta = slide_meta(&slide);

    rsx! {
        article {
            class: class,
            onclick: move |_| on_activate.call(()),
            h3 { class: "slide-title", "{slide.title}" }
            p { class: "slide-provider", "{slide.provider}" }
            if let Some(meta) = meta {
                p { class: "slide-meta", "{meta}" }
            }
        }
    }
}
