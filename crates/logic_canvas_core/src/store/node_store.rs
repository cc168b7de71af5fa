//! Generic observable collection for canvas nodes.
//!
//! # Responsibility
//! - Provide `add`/`remove`/`update`/`update_position`/`reset` over one
//!   ordered node collection.
//! - Keep the atom and molecule collections behind one implementation.
//!
//! # Invariants
//! - `add` appends; nothing else reorders the collection.
//! - Every effective mutation publishes exactly one new snapshot.
//! - A mutation naming a missing id publishes nothing.

use crate::model::atom::{Atom, AtomDraft, AtomPatch};
use crate::model::molecule::{Molecule, MoleculeDraft, MoleculePatch};
use crate::model::node::NodeId;
use crate::reactive::{SubscriptionId, Writable};
use crate::store::id_gen::{IdGenerator, IdStrategy};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Node kind that can live in a `NodeStore`.
pub trait CanvasNode: Clone + 'static {
    /// Creation payload without an id.
    type Draft;
    /// Partial update payload.
    type Patch;

    /// Short kind label used for id prefixes and log events.
    const KIND: &'static str;

    fn from_draft(id: NodeId, draft: Self::Draft) -> Self;
    fn id(&self) -> &NodeId;
    fn apply_patch(&mut self, patch: Self::Patch);
    fn set_position(&mut self, x: f64, y: f64);
}

impl CanvasNode for Atom {
    type Draft = AtomDraft;
    type Patch = AtomPatch;

    const KIND: &'static str = "atom";

    fn from_draft(id: NodeId, draft: AtomDraft) -> Self {
        Atom::with_id(id, draft)
    }

    fn id(&self) -> &NodeId {
        &self.id
    }

    fn apply_patch(&mut self, patch: AtomPatch) {
        patch.apply(self);
    }

    fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

impl CanvasNode for Molecule {
    type Draft = MoleculeDraft;
    type Patch = MoleculePatch;

    const KIND: &'static str = "molecule";

    fn from_draft(id: NodeId, draft: MoleculeDraft) -> Self {
        Molecule::with_id(id, draft)
    }

    fn id(&self) -> &NodeId {
        &self.id
    }

    fn apply_patch(&mut self, patch: MoleculePatch) {
        patch.apply(self);
    }

    fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

pub type AtomStore = NodeStore<Atom>;
pub type MoleculeStore = NodeStore<Molecule>;

/// Observable ordered collection of one node kind.
pub struct NodeStore<N: CanvasNode> {
    nodes: Writable<Vec<N>>,
    ids: RefCell<IdGenerator>,
}

impl<N: CanvasNode> NodeStore<N> {
    pub fn new(id_strategy: IdStrategy) -> Self {
        Self {
            nodes: Writable::new(Vec::new()),
            ids: RefCell::new(IdGenerator::new(id_strategy, N::KIND)),
        }
    }

    /// Appends a node built from `draft` under a fresh id and returns the id.
    pub fn add(&self, draft: N::Draft) -> NodeId {
        let id = self.ids.borrow_mut().next_id();
        let node = N::from_draft(id.clone(), draft);
        self.nodes.update(|nodes| {
            let mut next = Vec::with_capacity(nodes.len() + 1);
            next.extend(nodes.iter().cloned());
            next.push(node);
            next
        });
        debug!(
            "event=node_add module=store status=ok kind={} id={}",
            N::KIND,
            id
        );
        id
    }

    /// Removes the node with `id`, if present.
    pub fn remove(&self, id: &NodeId) {
        let current = self.nodes.get();
        if !current.iter().any(|node| node.id() == id) {
            log_noop::<N>("node_remove", id);
            return;
        }

        let next = current
            .iter()
            .filter(|node| node.id() != id)
            .cloned()
            .collect();
        self.nodes.set(next);
        debug!(
            "event=node_remove module=store status=ok kind={} id={}",
            N::KIND,
            id
        );
    }

    /// Merges `patch` into the node with `id`, if present.
    pub fn update(&self, id: &NodeId, patch: N::Patch) {
        if self.modify(id, |node| node.apply_patch(patch)) {
            debug!(
                "event=node_update module=store status=ok kind={} id={}",
                N::KIND,
                id
            );
        } else {
            log_noop::<N>("node_update", id);
        }
    }

    /// Moves the node with `id` to `(x, y)`, if present.
    pub fn update_position(&self, id: &NodeId, x: f64, y: f64) {
        if !self.modify(id, |node| node.set_position(x, y)) {
            log_noop::<N>("node_move", id);
        }
    }

    /// Clears the collection.
    pub fn reset(&self) {
        let dropped = self.nodes.get().len();
        self.nodes.set(Vec::new());
        debug!(
            "event=node_reset module=store status=ok kind={} dropped={}",
            N::KIND,
            dropped
        );
    }

    /// Returns a copy of the node with `id`.
    pub fn get(&self, id: &NodeId) -> Option<N> {
        self.nodes.get().iter().find(|node| node.id() == id).cloned()
    }

    /// Current immutable snapshot, in insertion order.
    pub fn snapshot(&self) -> Rc<Vec<N>> {
        self.nodes.get()
    }

    pub fn len(&self) -> usize {
        self.nodes.get().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.get().is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.nodes.revision()
    }

    /// Calls `callback` with the current snapshot now and after every change.
    pub fn subscribe(&self, callback: impl FnMut(&Rc<Vec<N>>) + 'static) -> SubscriptionId {
        self.nodes.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.nodes.unsubscribe(id)
    }

    /// Underlying cell, used to wire derived views.
    pub(crate) fn cell(&self) -> &Writable<Vec<N>> {
        &self.nodes
    }

    fn modify(&self, id: &NodeId, edit: impl FnOnce(&mut N)) -> bool {
        let current = self.nodes.get();
        let Some(index) = current.iter().position(|node| node.id() == id) else {
            return false;
        };

        let mut next = current.to_vec();
        edit(&mut next[index]);
        self.nodes.set(next);
        true
    }
}

fn log_noop<N: CanvasNode>(event: &str, id: &NodeId) {
    debug!(
        "event={} module=store status=noop kind={} id={} reason=missing_id",
        event,
        N::KIND,
        id
    );
}
