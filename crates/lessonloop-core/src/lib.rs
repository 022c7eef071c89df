//! Core library for LessonLoop's closure-date conflict checking.
//!
//! Music schools record closure dates (bank holidays, inset days, a hall
//! that is unavailable) and schedule lessons as recurring weekly or
//! fortnightly series. This crate tells staff, before a series is
//! saved, which of its lessons would land on a closure:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ ClosureDateStore│    │   Recurrence    │    │    Evaluator    │
//! │ (store)         │───▶│ (lesson dates)  │───▶│ (ConflictReport)│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!          ▲                                              │
//!          │ SQLite (db)                                  ▼
//!                                                 display::conflicts
//! ```
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): plain data with serde derives
//! - **Display Wrappers** ([`display`]): markdown formatting of closures,
//!   reports and operation results, dates shown as dd/mm/yyyy
//! - **Terminal Rendering**: rich markdown output via the CLI's renderer
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use lessonloop_core::{conflicts::evaluate, ClosureDate, SeriesRequest};
//!
//! let closures = vec![ClosureDate::all_locations(date(2025, 1, 13), "Staff training")];
//! let series = SeriesRequest::new(date(2025, 1, 6), 1, 4).at_location("hall-a");
//!
//! let report = evaluate(&series, &closures);
//! assert_eq!(report.conflict_count, 1);
//! assert_eq!(report.conflicts[0].lesson_number, 2);
//! ```
//!
//! Against a database, go through the [`Scheduler`]:
//!
//! ```rust,no_run
//! use lessonloop_core::{params::CheckSeries, SchedulerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new()
//!     .with_database_path(Some("lessonloop.db"))
//!     .build()
//!     .await?;
//!
//! let check = scheduler
//!     .check_series(&CheckSeries {
//!         start_date: Some("2025-01-06".to_string()),
//!         interval_weeks: 1,
//!         total_lessons: 10,
//!         location_id: None,
//!     })
//!     .await?;
//! print!("{}", check.report);
//! # Ok(())
//! # }
//! ```

pub mod conflicts;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod preferences;
pub mod scheduler;
pub mod store;

// Re-export commonly used types
pub use conflicts::{evaluate, ClosurePatternCheck};
pub use db::Database;
pub use display::{Closures, CreateResult, DeleteResult, OperationStatus};
pub use error::{Result, SchedulingError};
pub use models::{
    ClosureDate, ConflictRecord, ConflictReport, DateRange, Freshness, LessonDate,
    OrganisationSettings, SeriesRequest,
};
pub use params::{
    CheckSeries, ClosuresOnDate, ConflictEntry, CreateClosure, FormatConflicts, Id, ListClosures,
    SetBlockScheduling,
};
pub use preferences::{PreferenceKey, PreferenceStore};
pub use scheduler::{Scheduler, SchedulerBuilder, SeriesCheck};
pub use store::{ClosureDateStore, ClosureSource, FetchOutcome, SqliteClosureSource};
