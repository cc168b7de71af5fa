//! Observable node collections and the atom selection set.
//!
//! # Responsibility
//! - Own the atom and molecule collections and their CRUD entry points.
//! - Assign fresh identities on `add`.
//! - Publish a new immutable snapshot after every effective mutation.
//!
//! # Invariants
//! - Mutations are total: missing ids are silent no-ops, never errors.
//! - Insertion order survives `update`, `update_position` and `remove`.

pub mod id_gen;
pub mod node_store;
pub mod selection;
