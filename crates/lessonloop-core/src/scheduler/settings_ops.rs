//! Organisation settings operations for the Scheduler.

use log::info;

use super::Scheduler;
use crate::{error::Result, models::OrganisationSettings, params::SetBlockScheduling};

impl Scheduler {
    /// Current closure enforcement setting of the organisation.
    pub async fn block_scheduling(&self) -> Result<OrganisationSettings> {
        let block_scheduling = self
            .with_database(|db, org_id| db.get_block_scheduling(org_id))
            .await?;

        Ok(OrganisationSettings {
            org_id: self.org_id.clone(),
            block_scheduling,
        })
    }

    /// Sets or clears the organisation's `block_scheduling` flag.
    pub async fn set_block_scheduling(
        &self,
        params: &SetBlockScheduling,
    ) -> Result<OrganisationSettings> {
        let flag = params.enabled;

        self.with_database(move |db, org_id| db.set_block_scheduling(org_id, flag))
            .await?;
        info!("Set block_scheduling={flag:?} for org {}", self.org_id);

        Ok(OrganisationSettings {
            org_id: self.org_id.clone(),
            block_scheduling: flag,
        })
    }
}
