//! Identifier generation for newly added nodes.

use crate::model::node::NodeId;
use serde::{Deserialize, Serialize};

/// How a store mints ids for new nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Random v4 UUID strings.
    #[default]
    Uuid,
    /// `<prefix>-<n>` with a per-store counter starting at 1. Deterministic,
    /// intended for tests and scripted demos.
    Sequential,
}

/// Per-store id source. Never repeats an id within one store.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    strategy: IdStrategy,
    prefix: &'static str,
    next: u64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy, prefix: &'static str) -> Self {
        Self {
            strategy,
            prefix,
            next: 1,
        }
    }

    pub fn next_id(&mut self) -> NodeId {
        match self.strategy {
            IdStrategy::Uuid => NodeId::random(),
            IdStrategy::Sequential => {
                let id = NodeId::new(format!("{}-{}", self.prefix, self.next));
                self.next += 1;
                id
            }
        }
    }
}
