//! Canvas state context.
//!
//! # Responsibility
//! - Own every store and derived view of one editor session.
//! - Wire the combined node view and the evaluated molecule view to the
//!   atom and molecule collections.
//!
//! # Invariants
//! - Built once per session and passed to consumers; there is no global
//!   instance.
//! - After any atom or molecule mutation returns, both derived views already
//!   reflect it.
//! - Both views recompute before any view subscriber runs, so a subscriber of
//!   one view never reads the other one stale.
//! - The connector setting only ever holds a selectable connector.
//! - Raw molecule `truth_value`s are stale by contract; display reads the
//!   evaluated view.

use crate::config::CanvasConfig;
use crate::eval::evaluator::evaluate_all;
use crate::model::connector::LogicalConnector;
use crate::model::molecule::Molecule;
use crate::model::node::Node;
use crate::reactive::{Derived, SubscriptionId, Writable};
use crate::store::node_store::{AtomStore, MoleculeStore};
use crate::store::selection::SelectionStore;
use log::{debug, info, warn};
use std::rc::Rc;

/// Session-scoped container for canvas state.
pub struct CanvasContext {
    config: CanvasConfig,
    atoms: AtomStore,
    molecules: MoleculeStore,
    selection: SelectionStore,
    connector: Writable<LogicalConnector>,
    all_nodes: Derived<Vec<Node>>,
    evaluated: Derived<Vec<Molecule>>,
}

impl Default for CanvasContext {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl CanvasContext {
    pub fn new(config: CanvasConfig) -> Self {
        let default_connector = selectable_or_and(config.default_connector);
        let atoms = AtomStore::new(config.id_strategy);
        let molecules = MoleculeStore::new(config.id_strategy);

        let all_nodes: Derived<Vec<Node>> =
            Derived::from_pair(atoms.cell(), molecules.cell(), |atoms, molecules| {
                atoms
                    .iter()
                    .cloned()
                    .map(Node::Atom)
                    .chain(molecules.iter().cloned().map(Node::Molecule))
                    .collect()
            });
        let evaluated: Derived<Vec<Molecule>> =
            Derived::from_pair(atoms.cell(), molecules.cell(), |atoms, molecules| {
                evaluate_all(molecules, atoms)
            });

        info!(
            "event=canvas_init module=context status=ok id_strategy={:?} default_connector={}",
            config.id_strategy, default_connector
        );

        Self {
            config,
            atoms,
            molecules,
            selection: SelectionStore::new(),
            connector: Writable::new(default_connector),
            all_nodes,
            evaluated,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn atoms(&self) -> &AtomStore {
        &self.atoms
    }

    pub fn molecules(&self) -> &MoleculeStore {
        &self.molecules
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    /// Connector picker default; independent of any molecule.
    pub fn connector(&self) -> LogicalConnector {
        *self.connector.get()
    }

    /// Changes the picker default. `Unknown` is ignored and `false` returned.
    pub fn set_connector(&self, connector: LogicalConnector) -> bool {
        if connector == LogicalConnector::Unknown {
            debug!("event=connector_set module=context status=noop reason=unknown_connector");
            return false;
        }
        self.connector.set(connector);
        debug!(
            "event=connector_set module=context status=ok connector={}",
            connector
        );
        true
    }

    pub fn subscribe_connector(
        &self,
        callback: impl FnMut(&Rc<LogicalConnector>) + 'static,
    ) -> SubscriptionId {
        self.connector.subscribe(callback)
    }

    pub fn unsubscribe_connector(&self, id: SubscriptionId) -> bool {
        self.connector.unsubscribe(id)
    }

    /// Atoms followed by molecules, each in insertion order.
    pub fn all_nodes(&self) -> &Derived<Vec<Node>> {
        &self.all_nodes
    }

    /// Molecules with freshly computed truth values.
    pub fn evaluated_molecules(&self) -> &Derived<Vec<Molecule>> {
        &self.evaluated
    }

    /// Clears both node collections. Selection and connector are untouched.
    pub fn reset_nodes(&self) {
        self.atoms.reset();
        self.molecules.reset();
    }
}

fn selectable_or_and(connector: LogicalConnector) -> LogicalConnector {
    if connector == LogicalConnector::Unknown {
        warn!("event=canvas_init module=context status=fallback reason=unknown_default_connector");
        return LogicalConnector::And;
    }
    connector
}
