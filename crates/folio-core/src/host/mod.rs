//! Host scroll primitive
//!
//! The host owns the real scroll position. The carousel only ever asks it
//! to scroll ([`ScrollHost::execute`]) and listens for what it reports.
//!
//! Hosts that push scroll events implement [`ObservableScrollHost`]. The
//! listener is held by a [`Subscription`] guard, so it is released on
//! every path that drops the carousel.

mod memory;

use std::fmt;
use std::rc::Rc;

use crate::carousel::{ScrollCommand, ScrollGeometry};

pub use memory::MemoryScrollHost;

/// Callback invoked with each scroll reading.
pub type ScrollListener = Box<dyn FnMut(ScrollGeometry)>;

/// Handle for a registered scroll listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Something that can be asked to scroll.
///
/// Commands are fire-and-forget. A host whose container is gone ignores
/// them.
pub trait ScrollHost {
    fn execute(&self, command: ScrollCommand);
}

/// A host that can be read and subscribed to.
pub trait ObservableScrollHost: ScrollHost {
    /// Current geometry, `None` while the container is not mounted.
    fn geometry(&self) -> Option<ScrollGeometry>;

    /// Register a listener. Returns `None` when there is no container to
    /// listen to.
    fn subscribe(&self, listener: ScrollListener) -> Option<ListenerId>;

    fn unsubscribe(&self, id: ListenerId);
}

/// Scoped scroll listener registration. Unsubscribes on drop.
pub struct Subscription<H: ObservableScrollHost> {
    host: Rc<H>,
    id: ListenerId,
}

impl<H: ObservableScrollHost> Subscription<H> {
    pub fn acquire(host: &Rc<H>, listener: ScrollListener) -> Option<Self> {
        let id = host.subscribe(listener)?;
        tracing::trace!(id = id.0, "scroll listener acquired");
        Some(Self {
            host: Rc::clone(host),
            id,
        })
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl<H: ObservableScrollHost> Drop for Subscription<H> {
    fn drop(&mut self) {
        tracing::trace!(id = self.id.0, "scroll listener released");
        self.host.unsubscribe(self.id);
    }
}

impl<H: ObservableScrollHost> fmt::Debug for Subscription<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_releases_on_drop() {
        let host = Rc::new(MemoryScrollHost::new(900.0, 300.0));
        let sub = Subscription::acquire(&host, Box::new(|_: ScrollGeometry| {})).unwrap();
        assert_eq!(host.listener_count(), 1);
        drop(sub);
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn no_subscription_without_container() {
        let host = Rc::new(MemoryScrollHost::unmounted());
        assert!(Subscription::acquire(&host, Box::new(|_: ScrollGeometry| {})).is_none());
        assert_eq!(host.listener_count(), 0);
    }
}
