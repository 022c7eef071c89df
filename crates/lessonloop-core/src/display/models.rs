//! Display implementations for domain models.
//!
//! This module contains the Display trait implementations for the core domain
//! models, kept apart from the model definitions so that data structures and
//! presentation stay separate.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Dates in day/month/year order via [`DayMonthYear`]
//! - Location scope spelled out for closures

use std::fmt;

use super::{conflicts::format_closure_conflicts, datetime::DayMonthYear, status::OperationStatus};
use crate::{
    models::{ClosureDate, ConflictReport, OrganisationSettings},
    scheduler::SeriesCheck,
};

impl ClosureDate {
    /// Human-readable description of where the closure applies.
    pub fn scope_label(&self) -> String {
        match (&self.location_id, self.applies_to_all_locations) {
            (_, true) => "All locations".to_string(),
            (Some(location), false) => format!("Location {location}"),
            (None, false) => "No location".to_string(),
        }
    }
}

impl fmt::Display for ClosureDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {}. {}: {} ({})",
            self.id,
            DayMonthYear(&self.date),
            self.reason,
            self.scope_label()
        )
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.warning_message {
            None => writeln!(
                f,
                "No closure conflicts across {} lessons.",
                self.total_lessons
            ),
            Some(message) => {
                writeln!(f, "**{message}**")?;
                writeln!(f)?;
                writeln!(f, "{}", format_closure_conflicts(&self.conflicts))
            }
        }
    }
}

impl fmt::Display for OrganisationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.blocks_scheduling() {
            "block"
        } else {
            "warn"
        };
        write!(f, "Closure dates for {}: {mode}", self.org_id)?;
        if self.block_scheduling.is_none() {
            write!(f, " (default)")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for SeriesCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.report)?;
        if let Some(status) = OperationStatus::for_freshness(&self.freshness) {
            writeln!(f)?;
            write!(f, "{status}")?;
        }
        if self.report.has_conflicts {
            writeln!(f)?;
            if self.block_scheduling {
                writeln!(f, "Lessons cannot be scheduled on closure dates for this organisation.")?;
            } else {
                writeln!(f, "Closure dates are advisory for this organisation.")?;
            }
        }
        Ok(())
    }
}
