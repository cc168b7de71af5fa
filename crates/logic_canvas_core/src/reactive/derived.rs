//! Read-only views recomputed from two source cells.

use crate::reactive::writable::{SubscriptionId, Writable};
use std::rc::Rc;

type Detach = Box<dyn FnOnce()>;

/// Read-only value recomputed whenever either source publishes.
///
/// Sources are observed through weak handles, so a view never keeps its
/// sources alive. Dropping the view detaches it from both sources.
pub struct Derived<T> {
    output: Writable<T>,
    detach: Vec<Detach>,
}

impl<T: 'static> Derived<T> {
    /// Builds a view over `left` and `right` and computes it once.
    pub fn from_pair<A, B, F>(left: &Writable<A>, right: &Writable<B>, compute: F) -> Self
    where
        A: 'static,
        B: 'static,
        F: Fn(&A, &B) -> T + 'static,
    {
        let compute = Rc::new(compute);
        let output = Writable::new(compute(&*left.get(), &*right.get()));

        let on_left = {
            let right = right.downgrade();
            let output = output.downgrade();
            let compute = Rc::clone(&compute);
            left.listen(move |left_value: &Rc<A>| {
                if let (Some(right), Some(output)) = (right.upgrade(), output.upgrade()) {
                    let right_value = right.get();
                    output.set(compute(&**left_value, &*right_value));
                }
            })
        };
        let on_right = {
            let left = left.downgrade();
            let output = output.downgrade();
            right.listen(move |right_value: &Rc<B>| {
                if let (Some(left), Some(output)) = (left.upgrade(), output.upgrade()) {
                    let left_value = left.get();
                    output.set(compute(&*left_value, &**right_value));
                }
            })
        };

        Self {
            output,
            detach: vec![detach_from(left, on_left), detach_from(right, on_right)],
        }
    }

    /// Returns the latest computed snapshot.
    pub fn get(&self) -> Rc<T> {
        self.output.get()
    }

    /// Number of recomputations since creation.
    pub fn revision(&self) -> u64 {
        self.output.revision()
    }

    /// Same contract as `Writable::subscribe`.
    pub fn subscribe(&self, callback: impl FnMut(&Rc<T>) + 'static) -> SubscriptionId {
        self.output.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.output.unsubscribe(id)
    }
}

impl<T> Drop for Derived<T> {
    fn drop(&mut self) {
        for detach in self.detach.drain(..) {
            detach();
        }
    }
}

fn detach_from<S: 'static>(source: &Writable<S>, id: SubscriptionId) -> Detach {
    let source = source.downgrade();
    Box::new(move || {
        if let Some(source) = source.upgrade() {
            source.unsubscribe(id);
        }
    })
}
