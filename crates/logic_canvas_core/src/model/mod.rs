//! Canvas domain model for atoms, molecules and their shared node shape.
//!
//! # Responsibility
//! - Define canonical data structures placed on the logic canvas.
//! - Provide typed draft/patch shapes for store mutations.
//!
//! # Invariants
//! - Every node is identified by a `NodeId` that never changes after creation.
//! - Molecule truth values are derived; atoms are the only user-set leaves.

pub mod atom;
pub mod connector;
pub mod molecule;
pub mod node;
