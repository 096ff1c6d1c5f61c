//! Error types for the dashboard core.

use thiserror::Error;

/// Which closed identifier set a rejected value was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Appliance,
    Period,
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierKind::Appliance => f.write_str("appliance"),
            IdentifierKind::Period => f.write_str("period"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    /// A string id fell outside the fixed appliance or period sets.
    #[error("invalid {kind} identifier: {value:?}")]
    InvalidIdentifier { kind: IdentifierKind, value: String },
}

impl DashboardError {
    pub(crate) fn invalid(kind: IdentifierKind, value: &str) -> Self {
        DashboardError::InvalidIdentifier {
            kind,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
