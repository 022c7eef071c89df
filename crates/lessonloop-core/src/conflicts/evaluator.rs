//! Cross-referencing of generated lesson dates with closures.

use log::{debug, warn};

use crate::{
    display::conflicts::warning_message,
    models::{ClosureDate, ConflictRecord, ConflictReport, SeriesRequest},
};

/// Checks every lesson of `request` against `closures`.
///
/// Never fails: a missing start date, a zero lesson count or a zero interval
/// produce an empty report. Each closure that matches a lesson yields its own
/// record, so two closures on one date count as two conflicts for the same
/// lesson. Records are ordered by lesson, then by closure list order.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use lessonloop_core::{
///     conflicts::evaluate,
///     models::{ClosureDate, SeriesRequest},
/// };
///
/// let closures = vec![ClosureDate::all_locations(date(2025, 1, 13), "Staff training")];
/// let report = evaluate(&SeriesRequest::new(date(2025, 1, 6), 1, 4), &closures);
///
/// assert_eq!(report.conflict_count, 1);
/// assert_eq!(report.conflicts[0].lesson_number, 2);
/// assert_eq!(
///     report.warning_message.as_deref(),
///     Some("1 lesson falls on a closure date (Staff training)")
/// );
/// ```
pub fn evaluate(request: &SeriesRequest, closures: &[ClosureDate]) -> ConflictReport {
    let total_lessons = request.total_lessons;
    if request.start_date.is_none() || total_lessons == 0 {
        return ConflictReport::empty(total_lessons);
    }
    if request.interval_weeks == 0 {
        warn!("Skipping conflict check for series with a zero-week interval");
        return ConflictReport::empty(total_lessons);
    }

    let location_id = request.location_id.as_deref();
    let mut conflicts = Vec::new();

    for lesson in request.lesson_dates() {
        for closure in closures {
            let in_scope = closure.applies_to_all_locations
                || closure.location_id.as_deref() == location_id;
            if closure.date == lesson.date && in_scope {
                conflicts.push(ConflictRecord {
                    date: lesson.date,
                    reason: closure.reason.clone(),
                    lesson_number: lesson.lesson_number,
                });
            }
        }
    }

    debug!(
        "Checked {total_lessons} lessons against {} closures: {} conflicts",
        closures.len(),
        conflicts.len()
    );

    let warning_message = warning_message(&conflicts, total_lessons);
    ConflictReport {
        total_lessons,
        conflict_count: conflicts.len(),
        has_conflicts: !conflicts.is_empty(),
        warning_message,
        conflicts,
    }
}
