//! Observable value cell with a listener registry.

use crate::reactive::queue::{self, Delivery};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Callback<T> = Box<dyn FnMut(&Rc<T>)>;

/// Handle returned by `subscribe`, used to detach a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Listener<T> {
    id: SubscriptionId,
    // `None` while the callback is running.
    callback: Option<Callback<T>>,
}

struct Shared<T> {
    value: RefCell<Rc<T>>,
    revision: Cell<u64>,
    listeners: RefCell<Vec<Listener<T>>>,
    next_id: Cell<u64>,
}

/// Shared observable value.
///
/// Cloning yields another handle to the same cell. Not `Send`: the whole
/// state layer runs on the caller's thread.
pub struct Writable<T> {
    shared: Rc<Shared<T>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

/// Non-owning handle to a `Writable`.
pub struct WeakWritable<T> {
    shared: Weak<Shared<T>>,
}

impl<T> Clone for WeakWritable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Weak::clone(&self.shared),
        }
    }
}

impl<T> WeakWritable<T> {
    pub fn upgrade(&self) -> Option<Writable<T>> {
        self.shared.upgrade().map(|shared| Writable { shared })
    }
}

impl<T: 'static> Writable<T> {
    pub fn new(value: T) -> Self {
        Self {
            shared: Rc::new(Shared {
                value: RefCell::new(Rc::new(value)),
                revision: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Returns the current snapshot.
    pub fn get(&self) -> Rc<T> {
        Rc::clone(&self.shared.value.borrow())
    }

    /// Number of snapshots published since creation.
    pub fn revision(&self) -> u64 {
        self.shared.revision.get()
    }

    /// Publishes `value` and notifies every listener.
    ///
    /// When called from inside a listener, the notifications are queued
    /// behind the ones already pending and delivered before the outermost
    /// publish returns.
    pub fn set(&self, value: T) {
        *self.shared.value.borrow_mut() = Rc::new(value);
        self.shared.revision.set(self.shared.revision.get() + 1);
        self.notify();
    }

    /// Publishes the value computed from the current snapshot.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let current = self.get();
        self.set(f(&current));
    }

    /// Registers `callback`, calling it immediately with the current snapshot
    /// and then after every publish.
    pub fn subscribe(&self, mut callback: impl FnMut(&Rc<T>) + 'static) -> SubscriptionId {
        callback(&self.get());
        self.listen(callback)
    }

    /// Registers `callback` for future publishes only.
    pub(crate) fn listen(&self, callback: impl FnMut(&Rc<T>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.shared.next_id.get());
        self.shared.next_id.set(id.0 + 1);
        self.shared.listeners.borrow_mut().push(Listener {
            id,
            callback: Some(Box::new(callback)),
        });
        id
    }

    /// Detaches a listener. Returns `false` when `id` is not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.shared.listeners.borrow_mut();
        match listeners.iter().position(|listener| listener.id == id) {
            Some(index) => {
                listeners.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn listener_count(&self) -> usize {
        self.shared.listeners.borrow().len()
    }

    pub fn downgrade(&self) -> WeakWritable<T> {
        WeakWritable {
            shared: Rc::downgrade(&self.shared),
        }
    }

    fn notify(&self) {
        // Listeners added after this publish wait for the next one.
        let ids: Vec<SubscriptionId> = self
            .shared
            .listeners
            .borrow()
            .iter()
            .map(|listener| listener.id)
            .collect();

        let deliveries = ids.into_iter().map(|id| {
            let cell = self.downgrade();
            Box::new(move || {
                if let Some(cell) = cell.upgrade() {
                    cell.deliver(id);
                }
            }) as Delivery
        });
        queue::schedule(deliveries);
    }

    /// Runs one listener with the snapshot current at delivery time.
    fn deliver(&self, id: SubscriptionId) {
        let taken = self
            .shared
            .listeners
            .borrow_mut()
            .iter_mut()
            .find(|listener| listener.id == id)
            .and_then(|listener| listener.callback.take());
        let Some(mut callback) = taken else {
            return;
        };

        callback(&self.get());

        // Gone when the listener unsubscribed itself while running.
        if let Some(listener) = self
            .shared
            .listeners
            .borrow_mut()
            .iter_mut()
            .find(|listener| listener.id == id)
        {
            listener.callback = Some(callback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Writable;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn subscribe_receives_current_value_then_changes() {
        let store = Writable::new(1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |value| sink.borrow_mut().push(**value));

        store.set(2);
        store.update(|value| value * 10);

        assert_eq!(*seen.borrow(), vec![1, 2, 20]);
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let store = Writable::new(0);
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            store.listen(move |_| order.borrow_mut().push(tag));
        }

        store.set(1);

        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = Writable::new(0);
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let id = store.listen(move |_| *counter.borrow_mut() += 1);

        store.set(1);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set(2);

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn listener_may_unsubscribe_a_later_listener_mid_notification() {
        let store = Writable::new(0);
        let calls = Rc::new(RefCell::new(Vec::new()));
        let victim = Rc::new(RefCell::new(None));

        let handle = store.clone();
        let victim_slot = Rc::clone(&victim);
        let first_calls = Rc::clone(&calls);
        store.listen(move |_| {
            first_calls.borrow_mut().push("first");
            if let Some(id) = victim_slot.borrow_mut().take() {
                handle.unsubscribe(id);
            }
        });
        let second_calls = Rc::clone(&calls);
        let id = store.listen(move |_| second_calls.borrow_mut().push("second"));
        *victim.borrow_mut() = Some(id);

        store.set(1);
        store.set(2);

        assert_eq!(*calls.borrow(), vec!["first", "first"]);
        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn nested_publish_is_delivered_after_the_running_round() {
        let store = Writable::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let writer = store.clone();
        store.listen(move |value| {
            if **value == 1 {
                writer.set(2);
            }
        });
        let sink = Rc::clone(&seen);
        store.listen(move |value| sink.borrow_mut().push(**value));

        store.set(1);

        assert_eq!(*store.get(), 2);
        assert_eq!(*seen.borrow(), vec![2, 2]);
    }

    #[test]
    fn listener_that_writes_back_sees_its_own_publish() {
        let store = Writable::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let writer = store.clone();
        let sink = Rc::clone(&seen);
        store.listen(move |value| {
            sink.borrow_mut().push(**value);
            if **value < 3 {
                writer.set(**value + 1);
            }
        });

        store.set(1);

        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn retained_snapshot_is_not_mutated_by_later_publish() {
        let store = Writable::new(vec![1, 2]);
        let before = store.get();

        store.update(|items| {
            let mut next = items.clone();
            next.push(3);
            next
        });

        assert_eq!(*before, vec![1, 2]);
        assert_eq!(*store.get(), vec![1, 2, 3]);
    }
}
