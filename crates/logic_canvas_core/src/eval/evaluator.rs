//! Stateless molecule evaluator.

use crate::model::atom::Atom;
use crate::model::connector::LogicalConnector;
use crate::model::molecule::Molecule;
use crate::model::node::NodeId;
use std::collections::HashMap;

/// Computes the truth value of `molecule` from `atoms`.
///
/// Each reference maps to the truth value of the first atom with that id,
/// or `false` when none matches.
pub fn evaluate(molecule: &Molecule, atoms: &[Atom]) -> bool {
    let values: Vec<bool> = molecule
        .atoms
        .iter()
        .map(|id| {
            atoms
                .iter()
                .find(|atom| &atom.id == id)
                .is_some_and(|atom| atom.truth_value)
        })
        .collect();
    apply_connector(molecule.connector, &values)
}

/// Evaluates every molecule, returning copies whose `truth_value` is
/// overwritten. All other fields are carried over unchanged.
pub fn evaluate_all(molecules: &[Molecule], atoms: &[Atom]) -> Vec<Molecule> {
    let index = TruthIndex::new(atoms);
    molecules
        .iter()
        .map(|molecule| {
            let values: Vec<bool> = molecule.atoms.iter().map(|id| index.lookup(id)).collect();
            Molecule {
                truth_value: apply_connector(molecule.connector, &values),
                ..molecule.clone()
            }
        })
        .collect()
}

/// Applies `connector` to operand values already resolved to booleans.
///
/// Operands beyond the connector's arity are ignored; missing operands of
/// NOT and IMPLIES read as `false`.
pub fn apply_connector(connector: LogicalConnector, values: &[bool]) -> bool {
    let operand = |index: usize| values.get(index).copied().unwrap_or(false);
    match connector {
        LogicalConnector::And => values.iter().all(|value| *value),
        LogicalConnector::Or => values.iter().any(|value| *value),
        LogicalConnector::Not => !operand(0),
        LogicalConnector::Implies => !operand(0) || operand(1),
        LogicalConnector::Unknown => false,
    }
}

/// id -> truth lookup built once per recomputation.
struct TruthIndex<'a> {
    truths: HashMap<&'a NodeId, bool>,
}

impl<'a> TruthIndex<'a> {
    fn new(atoms: &'a [Atom]) -> Self {
        let mut truths = HashMap::with_capacity(atoms.len());
        for atom in atoms {
            // First match wins, same as a linear scan.
            truths.entry(&atom.id).or_insert(atom.truth_value);
        }
        Self { truths }
    }

    fn lookup(&self, id: &NodeId) -> bool {
        self.truths.get(id).copied().unwrap_or(false)
    }
}
