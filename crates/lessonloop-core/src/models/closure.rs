//! Closure date model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulingError};

/// A calendar date on which lessons should not take place.
///
/// A closure is scoped in exactly one of three ways: to every location of the
/// organisation, to one location, or to no location at all. The first two are
/// mutually exclusive, so `applies_to_all_locations` implies `location_id` is
/// `None`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClosureDate {
    /// Row identifier (0 for closures that were never stored)
    #[serde(default)]
    pub id: u64,

    /// Calendar date of the closure
    pub date: Date,

    /// Free-text label, e.g. "Bank holiday"
    pub reason: String,

    /// Location the closure is limited to
    #[serde(default)]
    pub location_id: Option<String>,

    /// Whether the closure applies regardless of location
    #[serde(default)]
    pub applies_to_all_locations: bool,
}

impl ClosureDate {
    /// Creates an organisation-wide closure.
    pub fn all_locations(date: Date, reason: impl Into<String>) -> Self {
        Self {
            id: 0,
            date,
            reason: reason.into(),
            location_id: None,
            applies_to_all_locations: true,
        }
    }

    /// Creates a closure limited to a single location.
    pub fn at_location(date: Date, reason: impl Into<String>, location_id: impl Into<String>) -> Self {
        Self {
            id: 0,
            date,
            reason: reason.into(),
            location_id: Some(location_id.into()),
            applies_to_all_locations: false,
        }
    }

    /// Creates a closure with no location and no organisation-wide scope.
    ///
    /// Such a closure only matches queries that also carry no location.
    pub fn unscoped(date: Date, reason: impl Into<String>) -> Self {
        Self {
            id: 0,
            date,
            reason: reason.into(),
            location_id: None,
            applies_to_all_locations: false,
        }
    }

    /// Attaches a stored row identifier.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Checks the scoping invariant and the reason text.
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::InvalidInput` when both scoping modes are set
    /// or the reason is blank.
    pub fn validate(&self) -> Result<()> {
        if self.applies_to_all_locations && self.location_id.is_some() {
            return Err(SchedulingError::invalid_input("location_id")
                .with_reason("an all-location closure cannot name a location"));
        }
        if self.reason.trim().is_empty() {
            return Err(SchedulingError::invalid_input("reason").with_reason("must not be empty"));
        }
        Ok(())
    }
}
