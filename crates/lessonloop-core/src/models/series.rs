//! Recurring lesson series inputs and derived lesson dates.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulingError};

/// Parameters of a proposed recurring lesson series.
///
/// This is the in-memory candidate that a conflict check runs against; it is
/// never persisted. A missing `start_date` or a zero `total_lessons` yields an
/// empty conflict report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SeriesRequest {
    /// Date of the first lesson
    pub start_date: Option<Date>,

    /// Weeks between successive lessons
    pub interval_weeks: u32,

    /// Number of lessons in the series
    pub total_lessons: u32,

    /// Location the series is taught at
    #[serde(default)]
    pub location_id: Option<String>,
}

impl SeriesRequest {
    /// Creates a series at no particular location.
    pub fn new(start_date: Date, interval_weeks: u32, total_lessons: u32) -> Self {
        Self {
            start_date: Some(start_date),
            interval_weeks,
            total_lessons,
            location_id: None,
        }
    }

    /// Sets the location of the series.
    pub fn at_location(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }

    /// Rejects series that cannot produce distinct lesson dates.
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::InvalidInput` when `interval_weeks` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.interval_weeks == 0 {
            return Err(SchedulingError::invalid_input("interval_weeks")
                .with_reason("must be at least 1 week"));
        }
        Ok(())
    }
}

/// One generated lesson of a series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LessonDate {
    /// 1-based position within the series
    pub lesson_number: u32,

    /// Calendar date of the lesson
    pub date: Date,
}

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    /// Creates a range, rejecting an end before the start.
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::InvalidInput` when `end < start`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        if end < start {
            return Err(SchedulingError::invalid_input("end_date")
                .with_reason(format!("{end} is before start date {start}")));
        }
        Ok(Self { start, end })
    }

    /// Whether the date falls within the range, bounds included.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}
