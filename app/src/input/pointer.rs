//! Application-wide pointer-down subscriptions.
//!
//! Components that need to react to clicks *outside* themselves (an open
//! dropdown dismissing itself) subscribe here. A subscription is an RAII
//! guard: dropping it unregisters the listener, so every exit path (close,
//! clear, reset, the owner being dropped) releases it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug)]
struct Registry<T> {
    next_id: u64,
    listeners: Vec<(u64, T)>,
}

/// Registry of outside-click listeners, tagged with `T` so the dispatcher
/// knows which component to notify.
#[derive(Debug)]
pub struct PointerBus<T> {
    inner: Rc<RefCell<Registry<T>>>,
}

impl<T: Copy + 'static> PointerBus<T> {
    pub fn new() -> Self {
        PointerBus {
            inner: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Register a listener for `tag`. It stays active until the returned
    /// guard is dropped.
    pub fn subscribe(&self, tag: T) -> PointerSubscription {
        let mut reg = self.inner.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.listeners.push((id, tag));
        tracing::trace!(id, "pointer listener attached");
        let weak: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.inner);
        PointerSubscription {
            id,
            release: Some(Box::new(move |id: u64| {
                if let Some(reg) = weak.upgrade() {
                    reg.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
                    tracing::trace!(id, "pointer listener detached");
                }
            })),
        }
    }

    /// Snapshot of the tags currently listening, in subscription order.
    ///
    /// Returned by value so handlers may close (and thereby unsubscribe)
    /// listeners while iterating.
    pub fn listeners(&self) -> Vec<T> {
        self.inner.borrow().listeners.iter().map(|(_, t)| *t).collect()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl<T: Copy + 'static> Default for PointerBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard for one registered listener; unregisters on drop.
pub struct PointerSubscription {
    id: u64,
    release: Option<Box<dyn FnOnce(u64)>>,
}

impl PointerSubscription {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl std::fmt::Debug for PointerSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerSubscription").field("id", &self.id).finish()
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release(self.id);
        }
    }
}
