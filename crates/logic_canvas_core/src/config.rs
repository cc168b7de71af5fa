//! Canvas runtime configuration.
//!
//! # Responsibility
//! - Describe the knobs a host sets once when constructing a `CanvasContext`.
//!
//! # Invariants
//! - Every field has a default; a host may pass `{}` as JSON.

use crate::model::connector::LogicalConnector;
use crate::store::id_gen::IdStrategy;
use serde::{Deserialize, Serialize};

/// Options applied when a `CanvasContext` is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanvasConfig {
    /// Initial value of the connector picker.
    pub default_connector: LogicalConnector,
    /// Id minting for both node stores.
    pub id_strategy: IdStrategy,
}

impl CanvasConfig {
    /// Deterministic ids, for tests and scripted demos.
    pub fn sequential() -> Self {
        Self {
            id_strategy: IdStrategy::Sequential,
            ..Self::default()
        }
    }
}
