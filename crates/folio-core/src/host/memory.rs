//! In-memory scroll container.
//!
//! Behaves like a browser scroll container closely enough to drive the
//! carousel without a DOM: offsets are clamped to `[0, max_offset]`,
//! smooth scrolls stay pending until [`settle`](MemoryScrollHost::settle),
//! a newer command retargets an in-flight one, and an optional snap width
//! settles the final position on a slide boundary.

use std::cell::{Cell, RefCell};

use crate::carousel::{ScrollBehavior, ScrollCommand, ScrollGeometry};

use super::{ListenerId, ObservableScrollHost, ScrollHost, ScrollListener};

#[derive(Debug, Default)]
struct Container {
    geometry: Option<ScrollGeometry>,
    target: Option<f64>,
    snap_width: Option<f64>,
    commands: Vec<ScrollCommand>,
}

#[derive(Default)]
pub struct MemoryScrollHost {
    container: RefCell<Container>,
    listeners: RefCell<Vec<(ListenerId, ScrollListener)>>,
    next_id: Cell<u64>,
}

impl MemoryScrollHost {
    /// A mounted container at offset 0.
    pub fn new(scroll_width: f64, client_width: f64) -> Self {
        let host = Self::default();
        host.container.borrow_mut().geometry =
            Some(ScrollGeometry::new(0.0, scroll_width, client_width));
        host
    }

    /// A container that has not been mounted.
    pub fn unmounted() -> Self {
        Self::default()
    }

    /// Snap settled positions to multiples of `width`.
    pub fn with_snap(self, width: f64) -> Self {
        self.container.borrow_mut().snap_width = Some(width);
        self
    }

    /// Start at `offset` without notifying anyone, like a restored
    /// scroll position on page load.
    pub fn with_offset(self, offset: f64) -> Self {
        {
            let mut c = self.container.borrow_mut();
            if let Some(g) = c.geometry.as_mut() {
                g.offset = offset.clamp(0.0, g.max_offset());
            }
        }
        self
    }

    /// A user drag or wheel gesture to `offset`. Interrupts any pending
    /// smooth scroll.
    pub fn user_scroll(&self, offset: f64) {
        {
            let mut c = self.container.borrow_mut();
            c.target = None;
            let Some(g) = c.geometry.as_mut() else {
                return;
            };
            g.offset = offset.clamp(0.0, g.max_offset());
        }
        self.emit();
    }

    /// Finish the pending smooth scroll, if any.
    pub fn settle(&self) {
        {
            let mut c = self.container.borrow_mut();
            let Some(target) = c.target.take() else {
                return;
            };
            let snap = c.snap_width;
            let Some(g) = c.geometry.as_mut() else {
                return;
            };
            g.offset = Self::resolve(g, target, snap);
        }
        self.emit();
    }

    /// Change the layout, e.g. after a window resize.
    pub fn resize(&self, scroll_width: f64, client_width: f64) {
        {
            let mut c = self.container.borrow_mut();
            let Some(g) = c.geometry.as_mut() else {
                return;
            };
            g.scroll_width = scroll_width;
            g.client_width = client_width;
            g.offset = g.offset.clamp(0.0, g.max_offset());
        }
        self.emit();
    }

    /// Remove the container. Listeners stay registered until their
    /// subscriptions are dropped.
    pub fn unmount(&self) {
        let mut c = self.container.borrow_mut();
        c.geometry = None;
        c.target = None;
    }

    pub fn offset(&self) -> Option<f64> {
        self.container.borrow().geometry.map(|g| g.offset)
    }

    /// Target of the in-flight smooth scroll.
    pub fn pending_target(&self) -> Option<f64> {
        self.container.borrow().target
    }

    /// Every command accepted so far, oldest first.
    pub fn commands(&self) -> Vec<ScrollCommand> {
        self.container.borrow().commands.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn resolve(geometry: &ScrollGeometry, target: f64, snap: Option<f64>) -> f64 {
        let max = geometry.max_offset();
        let mut offset = target.clamp(0.0, max);
        if let Some(width) = snap.filter(|w| *w > 0.0) {
            offset = ((offset / width).round() * width).clamp(0.0, max);
        }
        offset
    }

    fn emit(&self) {
        let Some(geometry) = self.container.borrow().geometry else {
            return;
        };
        // Listeners are taken out for the call so one may subscribe again.
        let mut listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        for (_, listener) in listeners.iter_mut() {
            listener(geometry);
        }
        let mut slot = self.listeners.borrow_mut();
        listeners.append(&mut slot);
        *slot = listeners;
    }
}

impl ScrollHost for MemoryScrollHost {
    fn execute(&self, command: ScrollCommand) {
        let instant = {
            let mut c = self.container.borrow_mut();
            let Some(geometry) = c.geometry else {
                tracing::trace!(?command, "scroll command on unmounted container ignored");
                return;
            };
            c.commands.push(command);

            // A newer command moves the target of the running animation.
            let base = c.target.unwrap_or(geometry.offset);
            let (target, behavior) = match command {
                ScrollCommand::By { delta, behavior } => (base + delta, behavior),
                ScrollCommand::To { offset, behavior } => (offset, behavior),
            };
            match behavior {
                ScrollBehavior::Smooth => {
                    c.target = Some(target);
                    false
                }
                ScrollBehavior::Instant => {
                    c.target = None;
                    let snap = c.snap_width;
                    if let Some(g) = c.geometry.as_mut() {
                        g.offset = Self::resolve(g, target, snap);
                    }
                    true
                }
            }
        };
        if instant {
            self.emit();
        }
    }
}

impl ObservableScrollHost for MemoryScrollHost {
    fn geometry(&self) -> Option<ScrollGeometry> {
        self.container.borrow().geometry
    }

    fn subscribe(&self, listener: ScrollListener) -> Option<ListenerId> {
        self.container.borrow().geometry?;
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        Some(id)
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }
}

impl std::fmt::Debug for MemoryScrollHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryScrollHost")
            .field("container", &*self.container.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
