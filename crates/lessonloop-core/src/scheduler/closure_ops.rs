//! Closure date operations for the Scheduler.

use log::info;

use super::Scheduler;
use crate::{
    display::Closures,
    error::{Result, SchedulingError},
    models::{ClosureDate, DateRange},
    params::{parse_date, ClosuresOnDate, CreateClosure, Id, ListClosures},
};

impl Scheduler {
    /// Records a new closure date for the organisation.
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::InvalidInput` if the date is malformed, the
    /// reason is blank, or both a location and `all_locations` are given.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use lessonloop_core::{params::CreateClosure, SchedulerBuilder};
    /// # async {
    /// let scheduler = SchedulerBuilder::new().build().await?;
    /// let closure = scheduler
    ///     .create_closure(&CreateClosure {
    ///         date: "2025-12-25".to_string(),
    ///         reason: "Christmas Day".to_string(),
    ///         location_id: None,
    ///         all_locations: true,
    ///     })
    ///     .await?;
    /// # Result::<(), lessonloop_core::SchedulingError>::Ok(())
    /// # };
    /// ```
    pub async fn create_closure(&self, params: &CreateClosure) -> Result<ClosureDate> {
        let closure = params.to_closure()?;

        let created = self
            .with_database(move |db, org_id| db.insert_closure(org_id, &closure))
            .await?;
        info!(
            "Created closure {} on {} for org {}",
            created.id, created.date, self.org_id
        );
        Ok(created)
    }

    /// Lists the organisation's closures dated within an inclusive range.
    pub async fn list_closures(&self, params: &ListClosures) -> Result<Closures> {
        let range = params.range()?;

        self.with_database(move |db, org_id| db.list_closures(org_id, range))
            .await
            .map(Closures)
    }

    /// Every closure on one date, whatever its location.
    pub async fn closures_for_date(&self, params: &ClosuresOnDate) -> Result<Closures> {
        let date = parse_date("date", &params.date)?;
        let range = DateRange::new(date, date)?;

        self.with_database(move |db, org_id| db.list_closures(org_id, range))
            .await
            .map(Closures)
    }

    /// Permanently removes a closure, returning the deleted row.
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::ClosureNotFound` if the organisation has no
    /// closure with that ID.
    pub async fn delete_closure(&self, params: &Id) -> Result<ClosureDate> {
        let id = params.id;

        let deleted = self
            .with_database(move |db, org_id| db.delete_closure(org_id, id))
            .await?
            .ok_or(SchedulingError::ClosureNotFound { id })?;
        info!("Deleted closure {id} for org {}", self.org_id);
        Ok(deleted)
    }
}
