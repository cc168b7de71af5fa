//! Observable set of selected atom ids.
//!
//! # Invariants
//! - Ids are not validated against the atom collection; removing an atom
//!   leaves its id selected until the caller clears it.
//! - Every call publishes a fresh snapshot, even when membership is unchanged.

use crate::model::node::NodeId;
use crate::reactive::{SubscriptionId, Writable};
use log::trace;
use std::collections::BTreeSet;
use std::rc::Rc;

pub type Selection = BTreeSet<NodeId>;

/// Selection state shared by canvas interactions.
pub struct SelectionStore {
    selected: Writable<Selection>,
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStore {
    pub fn new() -> Self {
        Self {
            selected: Writable::new(Selection::new()),
        }
    }

    pub fn add(&self, id: impl Into<NodeId>) {
        let id = id.into();
        self.publish("selection_add", |selected| {
            selected.insert(id);
        });
    }

    pub fn delete(&self, id: impl Into<NodeId>) {
        let id = id.into();
        self.publish("selection_delete", |selected| {
            selected.remove(&id);
        });
    }

    /// Deletes `id` when selected, adds it otherwise.
    pub fn toggle(&self, id: impl Into<NodeId>) {
        let id = id.into();
        self.publish("selection_toggle", |selected| {
            if !selected.remove(&id) {
                selected.insert(id);
            }
        });
    }

    pub fn clear(&self) {
        self.selected.set(Selection::new());
        trace!("event=selection_clear module=store status=ok size=0");
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.selected.get().contains(id)
    }

    pub fn snapshot(&self) -> Rc<Selection> {
        self.selected.get()
    }

    pub fn subscribe(&self, callback: impl FnMut(&Rc<Selection>) + 'static) -> SubscriptionId {
        self.selected.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.selected.unsubscribe(id)
    }

    fn publish(&self, event: &str, edit: impl FnOnce(&mut Selection)) {
        self.selected.update(|current| {
            let mut next = current.clone();
            edit(&mut next);
            next
        });
        trace!(
            "event={} module=store status=ok size={}",
            event,
            self.selected.get().len()
        );
    }
}
