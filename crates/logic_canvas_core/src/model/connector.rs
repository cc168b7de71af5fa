//! Logical connector tags used by molecules and the UI default setting.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Connector combining the referenced truth values of a molecule.
///
/// Wire tags are upper-case (`"AND"`, `"IMPLIES"`, ...). Any other tag
/// decodes to `Unknown` instead of failing, so stale payloads from the
/// presentation layer still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalConnector {
    /// True iff every operand is true.
    #[default]
    And,
    /// True iff at least one operand is true.
    Or,
    /// Negation of the first operand.
    Not,
    /// Material implication from the first operand to the second.
    Implies,
    /// Tag not recognized by this build. Always evaluates to `false`.
    #[serde(other)]
    Unknown,
}

/// Wire tag for `LogicalConnector::And`.
pub const CONNECTOR_AND: &str = "AND";
/// Wire tag for `LogicalConnector::Or`.
pub const CONNECTOR_OR: &str = "OR";
/// Wire tag for `LogicalConnector::Not`.
pub const CONNECTOR_NOT: &str = "NOT";
/// Wire tag for `LogicalConnector::Implies`.
pub const CONNECTOR_IMPLIES: &str = "IMPLIES";

impl LogicalConnector {
    /// Connectors a user can pick in the editor.
    pub const SELECTABLE: [LogicalConnector; 4] = [Self::And, Self::Or, Self::Not, Self::Implies];

    /// Stable upper-case tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => CONNECTOR_AND,
            Self::Or => CONNECTOR_OR,
            Self::Not => CONNECTOR_NOT,
            Self::Implies => CONNECTOR_IMPLIES,
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Number of operands the connector is meant to take.
    ///
    /// `None` means "one or more". Informational only: evaluation never
    /// rejects a molecule for having the wrong number of references.
    pub fn expected_arity(self) -> Option<usize> {
        match self {
            Self::Not => Some(1),
            Self::Implies => Some(2),
            Self::And | Self::Or | Self::Unknown => None,
        }
    }
}

impl Display for LogicalConnector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicalConnector {
    type Err = ConnectorParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            CONNECTOR_AND => Ok(Self::And),
            CONNECTOR_OR => Ok(Self::Or),
            CONNECTOR_NOT => Ok(Self::Not),
            CONNECTOR_IMPLIES => Ok(Self::Implies),
            _ => Err(ConnectorParseError {
                value: value.trim().to_string(),
            }),
        }
    }
}

/// Raised when a connector name is not one of the selectable connectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorParseError {
    pub value: String,
}

impl Display for ConnectorParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported connector `{}`; expected AND|OR|NOT|IMPLIES",
            self.value
        )
    }
}

impl Error for ConnectorParseError {}
