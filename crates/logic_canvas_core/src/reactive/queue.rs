//! Thread-local delivery queue shared by every cell.
//!
//! A publish enqueues one delivery per registered listener. The outermost
//! publish drains the queue before returning; a publish made by a running
//! listener only appends, so no listener is ever re-entered and derived
//! cells always recompute before the subscribers they notify.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

pub(crate) type Delivery = Box<dyn FnOnce()>;

thread_local! {
    static PENDING: RefCell<VecDeque<Delivery>> = RefCell::new(VecDeque::new());
    static DRAINING: Cell<bool> = const { Cell::new(false) };
}

/// Appends `deliveries` and drains the queue unless a drain is running.
pub(crate) fn schedule(deliveries: impl IntoIterator<Item = Delivery>) {
    PENDING.with(|pending| pending.borrow_mut().extend(deliveries));
    if DRAINING.with(|draining| draining.replace(true)) {
        return;
    }

    let _guard = DrainGuard;
    while let Some(delivery) = PENDING.with(|pending| pending.borrow_mut().pop_front()) {
        delivery();
    }
}

/// Resets the drain flag even when a listener panics.
struct DrainGuard;

impl Drop for DrainGuard {
    fn drop(&mut self) {
        if std::thread::panicking() {
            PENDING.with(|pending| pending.borrow_mut().clear());
        }
        DRAINING.with(|draining| draining.set(false));
    }
}
