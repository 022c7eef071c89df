//! Expansion of a recurring series into candidate lesson dates.

use jiff::{civil::Date, Span};

use crate::models::{DateRange, LessonDate, SeriesRequest};

/// Adds whole weeks to a date, or `None` past the end of the civil calendar.
fn add_weeks(date: Date, weeks: i64) -> Option<Date> {
    Span::new()
        .try_weeks(weeks)
        .and_then(|span| date.checked_add(span))
        .ok()
}

impl SeriesRequest {
    /// Iterates over the lessons of the series in order.
    ///
    /// Lesson `n` falls `(n - 1) * interval_weeks` weeks after the start date.
    /// Yields nothing without a start date. Generation stops early if a date
    /// would leave the supported calendar range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::civil::date;
    /// use lessonloop_core::models::SeriesRequest;
    ///
    /// let dates: Vec<_> = SeriesRequest::new(date(2025, 1, 6), 2, 3)
    ///     .lesson_dates()
    ///     .map(|lesson| lesson.date)
    ///     .collect();
    /// assert_eq!(dates, vec![date(2025, 1, 6), date(2025, 1, 20), date(2025, 2, 3)]);
    /// ```
    pub fn lesson_dates(&self) -> LessonDates {
        LessonDates {
            start: self.start_date,
            interval_weeks: self.interval_weeks,
            total: self.total_lessons,
            index: 0,
        }
    }

    /// Date span to load closures for.
    ///
    /// Runs from the start date to `total_lessons * interval_weeks` weeks
    /// later, one interval past the final lesson. Clamped to [`Date::MAX`].
    pub fn span(&self) -> Option<DateRange> {
        let start = self.start_date?;
        let weeks = i64::from(self.total_lessons) * i64::from(self.interval_weeks);
        let end = add_weeks(start, weeks).unwrap_or(Date::MAX);
        Some(DateRange { start, end })
    }
}

/// Iterator returned by [`SeriesRequest::lesson_dates`].
#[derive(Debug, Clone)]
pub struct LessonDates {
    start: Option<Date>,
    interval_weeks: u32,
    total: u32,
    index: u32,
}

impl Iterator for LessonDates {
    type Item = LessonDate;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.start?;
        if self.index >= self.total {
            return None;
        }

        let weeks = i64::from(self.index) * i64::from(self.interval_weeks);
        let Some(date) = add_weeks(start, weeks) else {
            self.index = self.total;
            return None;
        };

        self.index += 1;
        Some(LessonDate {
            lesson_number: self.index,
            date,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.start.is_some() {
            (self.total - self.index) as usize
        } else {
            0
        };
        (0, Some(remaining))
    }
}
