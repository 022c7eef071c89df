//! Recurring-lesson / closure-date conflict detection.
//!
//! The check runs in three stages:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  SeriesRequest  │    │   recurrence    │    │    evaluator    │
//! │ (start, weeks,  │───▶│ (lesson dates)  │───▶│ (× closures via │
//! │  count, place)  │    │                 │    │    matcher)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`matcher`]: the three-way location scoping rule
//! - [`recurrence`]: expansion of a series into [`LessonDate`]s
//! - [`evaluator`]: the pure [`evaluate`] function
//! - [`pattern_check`]: [`ClosurePatternCheck`], which reloads closures
//!   whenever the series inputs change
//!
//! [`LessonDate`]: crate::models::LessonDate

pub mod evaluator;
pub mod matcher;
pub mod pattern_check;
pub mod recurrence;

#[cfg(test)]
mod tests;

pub use evaluator::evaluate;
pub use pattern_check::ClosurePatternCheck;
pub use recurrence::LessonDates;
