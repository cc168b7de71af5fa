//! Molecule domain model.
//!
//! # Invariants
//! - `atoms` keeps reference order; index 0 is the IMPLIES antecedent.
//! - References may name ids with no matching atom.
//! - `truth_value` is overwritten by every evaluation and is never
//!   authoritative for display.

use crate::model::connector::LogicalConnector;
use crate::model::node::NodeId;
use serde::{Deserialize, Serialize};

/// Logical combination of referenced nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Molecule {
    pub id: NodeId,
    /// Referenced ids, in operand order.
    pub atoms: Vec<NodeId>,
    pub connector: LogicalConnector,
    /// Last evaluated value; stale until the evaluated view recomputes.
    pub truth_value: bool,
    pub x: f64,
    pub y: f64,
}

impl Molecule {
    /// Builds a molecule with a caller-provided identity.
    pub fn with_id(id: impl Into<NodeId>, draft: MoleculeDraft) -> Self {
        Self {
            id: id.into(),
            atoms: draft.atoms,
            connector: draft.connector,
            truth_value: draft.truth_value,
            x: draft.x,
            y: draft.y,
        }
    }
}

/// Molecule fields supplied on creation; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoleculeDraft {
    pub atoms: Vec<NodeId>,
    pub connector: LogicalConnector,
    pub truth_value: bool,
    pub x: f64,
    pub y: f64,
}

impl MoleculeDraft {
    pub fn new(atoms: Vec<NodeId>, connector: LogicalConnector) -> Self {
        Self {
            atoms,
            connector,
            ..Self::default()
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

/// Partial molecule update. `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoleculePatch {
    pub atoms: Option<Vec<NodeId>>,
    pub connector: Option<LogicalConnector>,
    pub truth_value: Option<bool>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl MoleculePatch {
    /// Merges every `Some` field into `molecule`.
    pub fn apply(self, molecule: &mut Molecule) {
        if let Some(atoms) = self.atoms {
            molecule.atoms = atoms;
        }
        if let Some(connector) = self.connector {
            molecule.connector = connector;
        }
        if let Some(truth_value) = self.truth_value {
            molecule.truth_value = truth_value;
        }
        if let Some(x) = self.x {
            molecule.x = x;
        }
        if let Some(y) = self.y {
            molecule.y = y;
        }
    }
}
