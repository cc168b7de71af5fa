//! Atom domain model.
//!
//! # Responsibility
//! - Define the named boolean premise placed on the canvas.
//! - Provide the draft (create) and patch (partial update) shapes.
//!
//! # Invariants
//! - `id` is assigned once at creation and never patched.
//! - `truth_value` is user-set; atoms are never re-evaluated.

use crate::model::node::NodeId;
use serde::{Deserialize, Serialize};

/// Named boolean premise placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Atom {
    pub id: NodeId,
    /// Short label rendered on the node.
    pub name: String,
    /// Free-text description of the proposition.
    pub premise: String,
    pub truth_value: bool,
    pub x: f64,
    pub y: f64,
}

impl Atom {
    /// Builds an atom with a caller-provided identity.
    ///
    /// Stores generate ids on `add`; this constructor serves imports and
    /// evaluator callers that already hold identities.
    pub fn with_id(id: impl Into<NodeId>, draft: AtomDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            premise: draft.premise,
            truth_value: draft.truth_value,
            x: draft.x,
            y: draft.y,
        }
    }
}

/// Atom fields supplied on creation; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomDraft {
    pub name: String,
    pub premise: String,
    pub truth_value: bool,
    pub x: f64,
    pub y: f64,
}

impl AtomDraft {
    /// Creates a false atom at the canvas origin.
    pub fn new(name: impl Into<String>, premise: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            premise: premise.into(),
            ..Self::default()
        }
    }

    pub fn with_truth_value(mut self, truth_value: bool) -> Self {
        self.truth_value = truth_value;
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

/// Partial atom update. `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AtomPatch {
    pub name: Option<String>,
    pub premise: Option<String>,
    pub truth_value: Option<bool>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl AtomPatch {
    /// Patch flipping only the truth value.
    pub fn truth_value(value: bool) -> Self {
        Self {
            truth_value: Some(value),
            ..Self::default()
        }
    }

    /// Merges every `Some` field into `atom`.
    pub fn apply(self, atom: &mut Atom) {
        if let Some(name) = self.name {
            atom.name = name;
        }
        if let Some(premise) = self.premise {
            atom.premise = premise;
        }
        if let Some(truth_value) = self.truth_value {
            atom.truth_value = truth_value;
        }
        if let Some(x) = self.x {
            atom.x = x;
        }
        if let Some(y) = self.y {
            atom.y = y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Atom, AtomDraft, AtomPatch};

    #[test]
    fn patch_touches_only_given_fields() {
        let mut atom = Atom::with_id(
            "a1",
            AtomDraft::new("P", "it rains").with_truth_value(true).at(10.0, 20.0),
        );

        AtomPatch {
            premise: Some("it pours".to_string()),
            x: Some(15.0),
            ..AtomPatch::default()
        }
        .apply(&mut atom);

        assert_eq!(atom.id.as_str(), "a1");
        assert_eq!(atom.name, "P");
        assert_eq!(atom.premise, "it pours");
        assert!(atom.truth_value);
        assert_eq!((atom.x, atom.y), (15.0, 20.0));
    }
}
