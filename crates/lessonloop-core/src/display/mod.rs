//! Display formatting functions and result types.
//!
//! This module provides the presentation side of the crate: formatting
//! functions for conflict reports, wrapper types for collections and
//! operation results, and date formatting.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Format Functions│    │   Formatted     │
//! │ (ClosureDate,   │───▶│ & Result Types  │───▶│    Output       │
//! │  ConflictReport)│    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`conflicts`]: warning message and bullet list for conflicts
//! - [`collections`]: collection wrapper types ([`Closures`])
//! - [`results`]: operation result types (CreateResult, DeleteResult)
//! - [`status`]: status and confirmation messages (OperationStatus)
//! - [`datetime`]: day/month/year date formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use lessonloop_core::{
//!     conflicts::evaluate,
//!     display::format_closure_conflicts,
//!     models::{ClosureDate, SeriesRequest},
//! };
//!
//! let closures = vec![ClosureDate::all_locations(date(2025, 1, 13), "Staff training")];
//! let report = evaluate(&SeriesRequest::new(date(2025, 1, 6), 1, 4), &closures);
//!
//! assert_eq!(
//!     format_closure_conflicts(&report.conflicts),
//!     "• Lesson 2 on 13/01/2025: Staff training"
//! );
//! ```

pub mod collections;
pub mod conflicts;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::Closures;
pub use conflicts::{format_closure_conflicts, warning_message};
pub use datetime::DayMonthYear;
pub use results::{CreateResult, DeleteResult};
pub use status::OperationStatus;
