//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::models::Freshness;

/// Severity of an [`OperationStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    Warning,
    Failure,
}

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub level: StatusLevel,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Success,
        }
    }

    /// Create a new warning status.
    pub fn warning(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Warning,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Failure,
        }
    }

    /// Banner for closure data that may not cover the checked range.
    ///
    /// Returns `None` when the data is fresh.
    pub fn for_freshness(freshness: &Freshness) -> Option<Self> {
        match freshness {
            Freshness::Fresh => None,
            Freshness::Stale => Some(Self::warning(
                "Closure dates are still loading; conflicts may be missing".to_string(),
            )),
            Freshness::Error(reason) => Some(Self::warning(format!(
                "Closure dates may be incomplete ({reason}); conflicts may be missing"
            ))),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.level {
            StatusLevel::Success => "Success:",
            StatusLevel::Warning => "Warning:",
            StatusLevel::Failure => "Error:",
        };
        writeln!(f, "{label} {}", self.message)
    }
}
