//! Organisation-level scheduling settings.

use serde::{Deserialize, Serialize};

/// Scheduling settings stored per organisation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationSettings {
    pub org_id: String,

    /// Raw flag; `None` when the organisation never set it
    pub block_scheduling: Option<bool>,
}

impl OrganisationSettings {
    /// Whether closures should hard-block scheduling rather than warn.
    ///
    /// Unset means blocking.
    pub fn blocks_scheduling(&self) -> bool {
        self.block_scheduling.unwrap_or(true)
    }
}
