//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create and
//! delete operations with consistent messaging and resource display.

use std::fmt;

use super::datetime::DayMonthYear;
use crate::models::ClosureDate;

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use lessonloop_core::{display::CreateResult, models::ClosureDate};
///
/// let closure = ClosureDate::all_locations(date(2025, 5, 26), "Bank holiday").with_id(9);
/// let output = CreateResult::new(closure).to_string();
/// assert!(output.starts_with("Created closure date with ID: 9"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<ClosureDate> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created closure date with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<ClosureDate> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted closure '{}' on {} (ID: {})",
            self.resource.reason,
            DayMonthYear(&self.resource.date),
            self.resource.id
        )
    }
}
