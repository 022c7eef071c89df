//! User-facing text for conflict reports.

use super::datetime::DayMonthYear;
use crate::models::ConflictRecord;

/// Summary line for a set of conflicts, `None` when there are none.
///
/// A single conflict names its reason; several are counted against the size
/// of the series.
pub fn warning_message(conflicts: &[ConflictRecord], total_lessons: u32) -> Option<String> {
    match conflicts {
        [] => None,
        [only] => Some(format!(
            "1 lesson falls on a closure date ({})",
            only.reason
        )),
        _ => Some(format!(
            "{} of {total_lessons} lessons fall on closure dates",
            conflicts.len()
        )),
    }
}

/// Formats conflicts as a bullet list, one line per record in input order.
///
/// Returns an empty string for an empty slice.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use lessonloop_core::{display::format_closure_conflicts, models::ConflictRecord};
///
/// let conflicts = vec![ConflictRecord {
///     date: date(2025, 1, 13),
///     reason: "Staff training".to_string(),
///     lesson_number: 2,
/// }];
/// assert_eq!(
///     format_closure_conflicts(&conflicts),
///     "• Lesson 2 on 13/01/2025: Staff training"
/// );
/// ```
pub fn format_closure_conflicts(conflicts: &[ConflictRecord]) -> String {
    conflicts
        .iter()
        .map(|c| {
            format!(
                "• Lesson {} on {}: {}",
                c.lesson_number,
                DayMonthYear(&c.date),
                c.reason
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
