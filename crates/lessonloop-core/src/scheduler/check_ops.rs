//! Series conflict checks for the Scheduler.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::Scheduler;
use crate::{
    conflicts::ClosurePatternCheck,
    error::Result,
    models::{ConflictReport, Freshness},
    params::CheckSeries,
    store::{ClosureDateStore, SqliteClosureSource},
};

/// Outcome of checking a proposed series against the organisation's
/// closures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SeriesCheck {
    pub report: ConflictReport,

    /// Whether the organisation treats closures as hard blocks
    pub block_scheduling: bool,

    /// How far the closures behind `report` can be trusted
    pub freshness: Freshness,
}

impl SeriesCheck {
    /// Whether the caller should refuse to create the series.
    ///
    /// Advisory: the scheduler never enforces it.
    pub fn blocks_creation(&self) -> bool {
        self.block_scheduling && self.report.has_conflicts
    }
}

impl Scheduler {
    /// Checks a proposed recurring series against the organisation's
    /// closures.
    ///
    /// Closures are loaded for the span of the series only. A failure to
    /// load them does not fail the check: the report is computed from
    /// whatever was loaded and `freshness` says so.
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::InvalidInput` for a malformed start date or
    /// a zero interval.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use lessonloop_core::{params::CheckSeries, SchedulerBuilder};
    /// # async {
    /// let scheduler = SchedulerBuilder::new().build().await?;
    /// let check = scheduler
    ///     .check_series(&CheckSeries {
    ///         start_date: Some("2025-01-06".to_string()),
    ///         interval_weeks: 1,
    ///         total_lessons: 4,
    ///         location_id: Some("hall-a".to_string()),
    ///     })
    ///     .await?;
    /// if check.blocks_creation() {
    ///     println!("{}", check.report);
    /// }
    /// # Result::<(), lessonloop_core::SchedulingError>::Ok(())
    /// # };
    /// ```
    pub async fn check_series(&self, params: &CheckSeries) -> Result<SeriesCheck> {
        let request = params.to_request()?;

        let store = ClosureDateStore::new(SqliteClosureSource::new(&self.db_path), &self.org_id)?;
        if let Err(e) = store.refresh_settings().await {
            warn!("Using default closure enforcement for org {}: {e}", self.org_id);
        }

        let check = ClosurePatternCheck::new(store);
        let report = check.update(&request).await;
        debug!(
            "Series check for org {}: {} of {} lessons conflict",
            self.org_id, report.conflict_count, report.total_lessons
        );

        // Nothing to load for a series without lessons
        let freshness = match request.span() {
            Some(_) => check.freshness(),
            None => Freshness::Fresh,
        };

        Ok(SeriesCheck {
            report,
            block_scheduling: check.store().block_scheduling(),
            freshness,
        })
    }
}
