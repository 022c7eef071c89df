//! Parameter structures for scheduler operations.
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde and the optional JSON schema.
//! Interface layers wrap them with their own derives and convert via
//! `.into()`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Dates cross this boundary as ISO `YYYY-MM-DD` strings and are parsed
//! here, so every interface reports malformed dates the same way.

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SchedulingError},
    models::{ClosureDate, ConflictRecord, DateRange, SeriesRequest},
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the closure date to operate on
    pub id: u64,
}

/// Parameters for recording a closure date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateClosure {
    /// Date of the closure (YYYY-MM-DD)
    pub date: String,
    /// Why lessons cannot take place, e.g. "Bank holiday"
    pub reason: String,
    /// Limit the closure to a single location
    pub location_id: Option<String>,
    /// Apply the closure to every location of the organisation
    #[serde(default)]
    pub all_locations: bool,
}

impl CreateClosure {
    /// Builds the closure this request describes.
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::InvalidInput` for a malformed date or when
    /// the closure fails [`ClosureDate::validate`].
    pub fn to_closure(&self) -> Result<ClosureDate> {
        let closure = ClosureDate {
            id: 0,
            date: parse_date("date", &self.date)?,
            reason: self.reason.trim().to_string(),
            location_id: self.location_id.clone(),
            applies_to_all_locations: self.all_locations,
        };
        closure.validate()?;
        Ok(closure)
    }
}

/// Parameters for listing closures in an inclusive date range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListClosures {
    /// First date of the range (YYYY-MM-DD)
    pub from: String,
    /// Last date of the range (YYYY-MM-DD)
    pub to: String,
}

impl ListClosures {
    /// Parses the bounds into a [`DateRange`].
    pub fn range(&self) -> Result<DateRange> {
        DateRange::new(parse_date("from", &self.from)?, parse_date("to", &self.to)?)
    }
}

/// Parameters for listing every closure on one date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ClosuresOnDate {
    /// Date to look up (YYYY-MM-DD)
    pub date: String,
}

/// Parameters for checking a recurring series against closure dates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CheckSeries {
    /// Date of the first lesson (YYYY-MM-DD); no start means nothing to check
    pub start_date: Option<String>,
    /// Weeks between lessons, at least 1
    pub interval_weeks: u32,
    /// Number of lessons in the series
    pub total_lessons: u32,
    /// Location the lessons are taught at
    pub location_id: Option<String>,
}

impl CheckSeries {
    /// Builds and validates the series this request describes.
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::InvalidInput` for a malformed start date or
    /// a zero interval.
    pub fn to_request(&self) -> Result<SeriesRequest> {
        let request = SeriesRequest {
            start_date: self
                .start_date
                .as_deref()
                .map(|text| parse_date("start_date", text))
                .transpose()?,
            interval_weeks: self.interval_weeks,
            total_lessons: self.total_lessons,
            location_id: self.location_id.clone(),
        };
        request.validate()?;
        Ok(request)
    }
}

/// Parameters for changing the organisation's closure enforcement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetBlockScheduling {
    /// `true` blocks scheduling on closure dates, `false` only warns,
    /// absent restores the default (block)
    pub enabled: Option<bool>,
}

/// A conflict as supplied by an external caller for formatting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ConflictEntry {
    /// 1-based lesson position
    pub lesson_number: u32,
    /// Lesson date (YYYY-MM-DD)
    pub date: String,
    /// Closure reason
    pub reason: String,
}

/// Parameters for formatting a list of conflicts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct FormatConflicts {
    /// Conflicts in the order they should be listed
    #[serde(default)]
    pub conflicts: Vec<ConflictEntry>,
}

impl FormatConflicts {
    /// Parses every entry into a [`ConflictRecord`], keeping input order.
    pub fn to_records(&self) -> Result<Vec<ConflictRecord>> {
        self.conflicts
            .iter()
            .map(|entry| {
                Ok(ConflictRecord {
                    date: parse_date("date", &entry.date)?,
                    reason: entry.reason.clone(),
                    lesson_number: entry.lesson_number,
                })
            })
            .collect()
    }
}

/// Parses an ISO `YYYY-MM-DD` date, naming `field` on failure.
///
/// # Errors
///
/// Returns `SchedulingError::InvalidInput` when `text` is not a valid date.
pub fn parse_date(field: &str, text: &str) -> Result<Date> {
    text.trim().parse::<Date>().map_err(|e| {
        SchedulingError::invalid_input(field).with_reason(format!("'{text}' is not a date: {e}"))
    })
}
