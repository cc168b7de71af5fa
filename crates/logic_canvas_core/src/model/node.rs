//! Node identity and the combined atom/molecule node shape.

use crate::model::atom::Atom;
use crate::model::molecule::Molecule;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of an atom or molecule on the canvas.
///
/// Molecule references use the same type, so a reference may name an id
/// that no atom carries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Wraps an existing identifier (references, imports, tests).
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<&NodeId> for NodeId {
    fn from(value: &NodeId) -> Self {
        value.clone()
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Any node placed on the canvas.
///
/// Serialized untagged: a record carrying `premise` is an atom, a record
/// carrying `atoms` is a molecule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Atom(Atom),
    Molecule(Molecule),
}

impl Node {
    pub fn id(&self) -> &NodeId {
        match self {
            Self::Atom(atom) => &atom.id,
            Self::Molecule(molecule) => &molecule.id,
        }
    }

    /// Canvas coordinates as `(x, y)`.
    pub fn position(&self) -> (f64, f64) {
        match self {
            Self::Atom(atom) => (atom.x, atom.y),
            Self::Molecule(molecule) => (molecule.x, molecule.y),
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Self::Atom(_))
    }

    pub fn is_molecule(&self) -> bool {
        matches!(self, Self::Molecule(_))
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Self::Atom(atom) => Some(atom),
            Self::Molecule(_) => None,
        }
    }

    pub fn as_molecule(&self) -> Option<&Molecule> {
        match self {
            Self::Atom(_) => None,
            Self::Molecule(molecule) => Some(molecule),
        }
    }
}

impl From<Atom> for Node {
    fn from(value: Atom) -> Self {
        Self::Atom(value)
    }
}

impl From<Molecule> for Node {
    fn from(value: Molecule) -> Self {
        Self::Molecule(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, NodeId};
    use crate::model::atom::{Atom, AtomDraft};
    use crate::model::connector::LogicalConnector;
    use crate::model::molecule::{Molecule, MoleculeDraft};

    #[test]
    fn random_ids_do_not_repeat() {
        assert_ne!(NodeId::random(), NodeId::random());
    }

    #[test]
    fn guards_match_variant() {
        let atom = Node::from(Atom::with_id("a1", AtomDraft::new("P", "it rains")));
        let molecule = Node::from(Molecule::with_id(
            "m1",
            MoleculeDraft::new(vec!["a1".into()], LogicalConnector::Not),
        ));

        assert!(atom.is_atom() && !atom.is_molecule());
        assert!(molecule.is_molecule() && !molecule.is_atom());
        assert_eq!(atom.id().as_str(), "a1");
        assert!(molecule.as_atom().is_none());
        assert_eq!(
            molecule.as_molecule().map(|m| m.connector),
            Some(LogicalConnector::Not)
        );
    }
}
