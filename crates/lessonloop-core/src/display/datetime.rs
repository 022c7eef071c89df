//! Date display utilities.
//!
//! This module provides wrapper types for formatting calendar dates in the
//! day/month/year order used throughout LessonLoop's UK-facing copy.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around a civil `Date` that formats it as `DD/MM/YYYY`.
///
/// Closure dates and lesson dates carry no time of day, so no time zone is
/// involved; the date is printed exactly as stored.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use lessonloop_core::display::DayMonthYear;
///
/// assert_eq!(DayMonthYear(&date(2025, 1, 13)).to_string(), "13/01/2025");
/// ```
pub struct DayMonthYear<'a>(pub &'a Date);

impl<'a> fmt::Display for DayMonthYear<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%d/%m/%Y"))
    }
}
