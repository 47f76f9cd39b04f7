//! Change notification for the content store.
//!
//! The store runs on a single event loop: mutations run to completion, then
//! listeners are notified synchronously in registration order. The registry
//! snapshots its listener list at the start of each round, so a listener
//! cancelling (itself or another) mid-round cannot disturb deliveries
//! already made in that round; a listener cancelled before its own turn is
//! skipped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// What a successful mutation changed. Carried to every listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    /// The site configuration was patched.
    ConfigChanged,
    /// A section was appended.
    SectionAdded(crate::model::SectionId),
    /// A section was patched.
    SectionUpdated(crate::model::SectionId),
    /// A section was removed.
    SectionRemoved(crate::model::SectionId),
    /// The section display order changed.
    SectionsReordered,
    /// The whole snapshot was replaced (import or reset).
    SnapshotReplaced,
}

type Listener = Rc<RefCell<dyn FnMut(&ChangeEvent)>>;

struct RegistryInner {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Registry of change listeners, owned by the store.
pub(crate) struct SubscriberRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl SubscriberRegistry {
    pub(crate) fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(RegistryInner {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register a listener; it will be invoked once per successful mutation,
    /// after listeners registered earlier.
    pub(crate) fn subscribe(
        &self,
        listener: impl FnMut(&ChangeEvent) + 'static,
    ) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner
            .entries
            .push((id, Rc::new(RefCell::new(listener)) as Listener));
        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Deliver one event to every listener registered at the start of the
    /// round, in registration order, skipping any cancelled mid-round.
    pub(crate) fn notify(&self, event: &ChangeEvent) {
        let round: Vec<(u64, Listener)> = self.inner.borrow().entries.clone();
        for (id, listener) in round {
            let still_registered = self
                .inner
                .borrow()
                .entries
                .iter()
                .any(|(entry_id, _)| *entry_id == id);
            if !still_registered {
                continue;
            }
            (listener.borrow_mut())(event);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

/// Handle returned by `subscribe`. Cancelling is explicit and idempotent;
/// dropping the handle does not unsubscribe.
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<RegistryInner>>,
}

impl Subscription {
    /// Remove the listener. Safe to call repeatedly, and safe to call from
    /// inside a notification round.
    pub fn cancel(&self) {
        if let Some(inner) = self.registry.upgrade() {
            inner
                .borrow_mut()
                .entries
                .retain(|(entry_id, _)| *entry_id != self.id);
        }
    }
}
