//! Conflict records and reports produced by the evaluator.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A lesson of a series that lands on an in-scope closure date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConflictRecord {
    /// Date shared by the lesson and the closure
    pub date: Date,

    /// Reason copied from the matching closure
    pub reason: String,

    /// 1-based position of the lesson within the series
    pub lesson_number: u32,
}

/// Result of checking a series against the known closures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConflictReport {
    pub conflicts: Vec<ConflictRecord>,
    pub total_lessons: u32,
    pub conflict_count: usize,
    pub has_conflicts: bool,
    pub warning_message: Option<String>,
}

impl ConflictReport {
    /// A report with no conflicts for a series of `total_lessons` lessons.
    pub fn empty(total_lessons: u32) -> Self {
        Self {
            total_lessons,
            ..Self::default()
        }
    }
}
