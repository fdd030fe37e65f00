//! Global input surface: document-level pointer listeners.
//!
//! A slider that starts a drag needs to see moves and releases that happen
//! outside its own rectangle. It subscribes here for the lifetime of the drag
//! and holds the returned [`Subscription`]; dropping the guard unsubscribes.
//!
//! Listeners are held weakly. A listener that has been dropped without its
//! guard (which cannot happen through [`crate::slider`], but can happen with
//! hand-rolled listeners) is skipped and pruned on the next dispatch.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Which kind of device produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Events observed at global scope, regardless of which element is under the
/// pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlobalPointerEvent {
    /// Mouse-move or touch-move anywhere.
    Move { x: f64, y: f64, source: PointerSource },
    /// Mouse-up or touch-end anywhere.
    Release { source: PointerSource },
}

/// Receiver of global pointer events.
pub trait GlobalPointerListener {
    fn on_global_pointer(&mut self, event: &GlobalPointerEvent);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListenerId(u64);

type ListenerRef = Weak<RefCell<dyn GlobalPointerListener>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(ListenerId, ListenerRef)>,
}

/// The shared global event surface. Clones refer to the same registry.
#[derive(Clone, Default)]
pub struct InputSurface {
    registry: Rc<RefCell<Registry>>,
}

impl InputSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a listener until the returned guard is dropped.
    pub fn subscribe(&self, listener: ListenerRef) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push((id, listener));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every live listener in subscription order.
    ///
    /// Returns the number of listeners the event reached. Listeners may drop
    /// their own subscription while handling the event.
    pub fn dispatch(&self, event: GlobalPointerEvent) -> usize {
        // Snapshot first: handlers unsubscribe (a release ends a drag) and
        // would otherwise hit the registry borrow.
        let targets: Vec<Rc<RefCell<dyn GlobalPointerListener>>> = {
            let mut registry = self.registry.borrow_mut();
            registry
                .listeners
                .retain(|(_, listener)| listener.strong_count() > 0);
            registry
                .listeners
                .iter()
                .filter_map(|(_, listener)| listener.upgrade())
                .collect()
        };

        let mut delivered = 0;
        for target in &targets {
            // A listener already borrowed is mid-callback on this same thread;
            // re-entering it would alias its state.
            if let Ok(mut listener) = target.try_borrow_mut() {
                listener.on_global_pointer(&event);
                delivered += 1;
            }
        }
        delivered
    }

    /// Number of installed listeners, live or not yet pruned.
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl std::fmt::Debug for InputSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputSurface")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Guard for one installed listener. Dropping it removes the listener.
#[must_use = "dropping the subscription removes the listener immediately"]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        if let Ok(mut registry) = registry.try_borrow_mut() {
            registry.listeners.retain(|(id, _)| *id != self.id);
        };
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Subscription").field(&self.id).finish()
    }
}
