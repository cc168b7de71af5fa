//! Reactive state core for the propositional-logic canvas editor.
//! Atoms and molecules live in observable stores; derived views keep the
//! combined node list and molecule truth values current.

pub mod config;
pub mod context;
pub mod eval;
pub mod logging;
pub mod model;
pub mod reactive;
pub mod store;

pub use config::CanvasConfig;
pub use context::CanvasContext;
pub use eval::evaluator::{apply_connector, evaluate, evaluate_all};
pub use logging::{
    default_log_level, init_logging, logging_status, LogConfig, LogLevel, LogTarget, LoggingError,
};
pub use model::atom::{Atom, AtomDraft, AtomPatch};
pub use model::connector::{ConnectorParseError, LogicalConnector};
pub use model::molecule::{Molecule, MoleculeDraft, MoleculePatch};
pub use model::node::{Node, NodeId};
pub use reactive::{Derived, SubscriptionId, WeakWritable, Writable};
pub use store::id_gen::IdStrategy;
pub use store::node_store::{AtomStore, CanvasNode, MoleculeStore, NodeStore};
pub use store::selection::{Selection, SelectionStore};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
