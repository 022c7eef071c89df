//! Tests for the conflict evaluator and the reactive pattern check.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use jiff::civil::{date, Date};

use super::*;
use crate::{
    error::{Result, SchedulingError},
    models::{ClosureDate, DateRange, Freshness, SeriesRequest},
    store::{ClosureDateStore, ClosureSource},
};

fn weekly_from_jan_6(total_lessons: u32) -> SeriesRequest {
    SeriesRequest::new(date(2025, 1, 6), 1, total_lessons)
}

#[test]
fn test_no_closures_no_conflicts() {
    for (interval, total) in [(1, 0), (1, 10), (2, 26), (4, 3)] {
        let request = SeriesRequest::new(date(2025, 9, 1), interval, total);
        let report = evaluate(&request, &[]);
        assert!(!report.has_conflicts);
        assert!(report.conflicts.is_empty());
        assert_eq!(report.total_lessons, total);
    }
}

#[test]
fn test_single_exact_match() {
    let closures = vec![ClosureDate::all_locations(date(2025, 1, 13), "Staff training")];
    let report = evaluate(&weekly_from_jan_6(4), &closures);

    assert_eq!(report.conflict_count, 1);
    assert!(report.has_conflicts);
    assert_eq!(report.conflicts[0].lesson_number, 2);
    assert_eq!(report.conflicts[0].date, date(2025, 1, 13));
    assert_eq!(report.conflicts[0].reason, "Staff training");
    assert_eq!(
        report.warning_message.as_deref(),
        Some("1 lesson falls on a closure date (Staff training)")
    );
}

#[test]
fn test_other_location_closure_is_ignored() {
    let closures = vec![ClosureDate::at_location(date(2025, 1, 13), "Roof works", "A")];
    let report = evaluate(&weekly_from_jan_6(4).at_location("B"), &closures);

    assert!(!report.has_conflicts);
    assert_eq!(report.warning_message, None);
}

#[test]
fn test_same_location_closure_conflicts() {
    let closures = vec![ClosureDate::at_location(date(2025, 1, 20), "Roof works", "A")];
    let report = evaluate(&weekly_from_jan_6(4).at_location("A"), &closures);

    assert_eq!(report.conflict_count, 1);
    assert_eq!(report.conflicts[0].lesson_number, 3);
}

#[test]
fn test_all_location_closure_applies_everywhere() {
    let closures = vec![ClosureDate::all_locations(date(2025, 1, 27), "Snow day")];

    for request in [
        weekly_from_jan_6(4),
        weekly_from_jan_6(4).at_location("A"),
        weekly_from_jan_6(4).at_location("B"),
    ] {
        let report = evaluate(&request, &closures);
        assert_eq!(report.conflict_count, 1);
        assert_eq!(report.conflicts[0].lesson_number, 4);
    }
}

#[test]
fn test_unscoped_closure_only_hits_locationless_series() {
    let closures = vec![ClosureDate::unscoped(date(2025, 1, 13), "Inset day")];

    assert!(evaluate(&weekly_from_jan_6(4), &closures).has_conflicts);
    assert!(!evaluate(&weekly_from_jan_6(4).at_location("A"), &closures).has_conflicts);
}

#[test]
fn test_two_closures_on_one_date_produce_two_records() {
    let closures = vec![
        ClosureDate::at_location(date(2025, 1, 13), "Piano tuning", "A"),
        ClosureDate::all_locations(date(2025, 1, 13), "Staff training"),
    ];
    let report = evaluate(&weekly_from_jan_6(4).at_location("A"), &closures);

    assert_eq!(report.conflict_count, 2);
    assert!(report.conflicts.iter().all(|c| c.lesson_number == 2));
    assert_eq!(report.conflicts[0].reason, "Piano tuning");
    assert_eq!(report.conflicts[1].reason, "Staff training");
    assert_eq!(
        report.warning_message.as_deref(),
        Some("2 of 4 lessons fall on closure dates")
    );
}

#[test]
fn test_zero_lessons_short_circuits() {
    let closures = vec![ClosureDate::all_locations(date(2025, 1, 6), "Closed")];
    let report = evaluate(&weekly_from_jan_6(0), &closures);

    assert!(report.conflicts.is_empty());
    assert_eq!(report.total_lessons, 0);
    assert_eq!(report.conflict_count, 0);
    assert!(!report.has_conflicts);
    assert_eq!(report.warning_message, None);
}

#[test]
fn test_missing_start_date_short_circuits() {
    let closures = vec![ClosureDate::all_locations(date(2025, 1, 6), "Closed")];
    let request = SeriesRequest {
        start_date: None,
        interval_weeks: 1,
        total_lessons: 5,
        location_id: None,
    };
    let report = evaluate(&request, &closures);

    assert!(!report.has_conflicts);
    assert_eq!(report.total_lessons, 5);
}

#[test]
fn test_zero_interval_short_circuits() {
    let closures = vec![ClosureDate::all_locations(date(2025, 1, 6), "Closed")];
    let report = evaluate(&SeriesRequest::new(date(2025, 1, 6), 0, 3), &closures);

    assert!(!report.has_conflicts);
    assert_eq!(report.total_lessons, 3);
}

#[test]
fn test_records_follow_lesson_order() {
    let closures = vec![
        ClosureDate::all_locations(date(2025, 2, 17), "Half term"),
        ClosureDate::all_locations(date(2025, 1, 13), "Staff training"),
    ];
    let report = evaluate(&weekly_from_jan_6(8), &closures);

    let numbers: Vec<u32> = report.conflicts.iter().map(|c| c.lesson_number).collect();
    assert_eq!(numbers, vec![2, 7]);
    assert_eq!(
        report.warning_message.as_deref(),
        Some("2 of 8 lessons fall on closure dates")
    );
}

#[test]
fn test_evaluation_is_idempotent() {
    let closures = vec![
        ClosureDate::at_location(date(2025, 1, 13), "Piano tuning", "A"),
        ClosureDate::all_locations(date(2025, 1, 27), "Snow day"),
    ];
    let request = weekly_from_jan_6(6).at_location("A");

    assert_eq!(evaluate(&request, &closures), evaluate(&request, &closures));
}

/// Source returning fixed closures and counting how often it is asked.
struct CountingSource {
    closures: Vec<ClosureDate>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl ClosureSource for CountingSource {
    async fn closures_between(&self, _org_id: &str, range: DateRange) -> Result<Vec<ClosureDate>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(SchedulingError::fetch("service unavailable"));
        }
        Ok(self
            .closures
            .iter()
            .filter(|c| range.contains(c.date))
            .cloned()
            .collect())
    }

    async fn block_scheduling(&self, _org_id: &str) -> Result<Option<bool>> {
        Ok(None)
    }
}

fn pattern_check(closures: Vec<ClosureDate>) -> ClosurePatternCheck<CountingSource> {
    let source = CountingSource {
        closures,
        calls: AtomicUsize::new(0),
        failing: AtomicBool::new(false),
    };
    ClosurePatternCheck::new(ClosureDateStore::new(source, "org-1").unwrap())
}

fn calls(check: &ClosurePatternCheck<CountingSource>) -> usize {
    check.store().source().calls.load(Ordering::SeqCst)
}

#[tokio::test]
async fn test_pattern_check_loads_series_span() {
    let check = pattern_check(vec![
        ClosureDate::all_locations(date(2025, 1, 13), "Staff training"),
        ClosureDate::all_locations(date(2025, 6, 2), "Summer break"),
    ]);

    let report = check.update(&weekly_from_jan_6(4)).await;
    assert_eq!(report.conflict_count, 1);
    assert_eq!(check.freshness(), Freshness::Fresh);
    assert_eq!(check.store().closures().len(), 1);
}

#[tokio::test]
async fn test_pattern_check_refetches_only_on_input_change() {
    let check = pattern_check(vec![ClosureDate::all_locations(
        date(2025, 1, 13),
        "Staff training",
    )]);
    let request = weekly_from_jan_6(4);

    check.update(&request).await;
    check.update(&request).await;
    assert_eq!(calls(&check), 1);

    check.update(&request.clone().at_location("A")).await;
    assert_eq!(calls(&check), 2);

    let longer = SeriesRequest {
        total_lessons: 10,
        ..request
    };
    check.update(&longer).await;
    assert_eq!(calls(&check), 3);
}

#[tokio::test]
async fn test_pattern_check_picks_up_closures_in_new_range() {
    let summer: Date = date(2025, 7, 21);
    let check = pattern_check(vec![ClosureDate::all_locations(summer, "Summer break")]);

    let spring = check.update(&weekly_from_jan_6(4)).await;
    assert!(!spring.has_conflicts);

    let report = check
        .update(&SeriesRequest::new(date(2025, 7, 7), 1, 4))
        .await;
    assert_eq!(report.conflict_count, 1);
    assert_eq!(report.conflicts[0].lesson_number, 3);
}

#[tokio::test]
async fn test_report_uses_closures_in_memory() {
    let check = pattern_check(vec![ClosureDate::all_locations(
        date(2025, 1, 13),
        "Staff training",
    )]);

    assert!(!check.report(&weekly_from_jan_6(4)).has_conflicts);
    check.update(&weekly_from_jan_6(4)).await;
    assert!(check.report(&weekly_from_jan_6(4)).has_conflicts);
}

#[tokio::test]
async fn test_failed_fetch_is_not_retried_for_same_inputs() {
    let check = pattern_check(vec![ClosureDate::all_locations(
        date(2025, 1, 13),
        "Staff training",
    )]);
    check.store().source().failing.store(true, Ordering::SeqCst);
    let request = weekly_from_jan_6(4);

    let report = check.update(&request).await;
    assert!(!report.has_conflicts);
    assert!(matches!(check.freshness(), Freshness::Error(ref message) if message.contains("service unavailable")));

    check.store().source().failing.store(false, Ordering::SeqCst);
    check.update(&request).await;
    assert_eq!(calls(&check), 1);
    assert!(matches!(check.freshness(), Freshness::Error(_)));

    let report = check.update(&request.clone().at_location("hall-a")).await;
    assert_eq!(calls(&check), 2);
    assert_eq!(check.freshness(), Freshness::Fresh);
    assert!(report.has_conflicts);
}
