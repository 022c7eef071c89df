//! Data models for closure dates, lesson series and conflicts.
//!
//! This module contains the domain models the conflict checker works with.
//! Display implementations for these models live in
//! [`crate::display::models`] so that data structures and presentation stay
//! separate.
//!
//! # Lifecycle
//!
//! - [`ClosureDate`] rows are owned by the organisation and read-only from the
//!   checker's point of view.
//! - [`SeriesRequest`] and the [`LessonDate`]s generated from it are
//!   ephemeral; they exist for a single check.
//! - [`ConflictRecord`]s and the [`ConflictReport`] wrapping them are
//!   recomputed whenever any series input changes.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use lessonloop_core::models::{ClosureDate, SeriesRequest};
//!
//! let closure = ClosureDate::all_locations(date(2025, 1, 13), "Staff training");
//! assert!(closure.validate().is_ok());
//!
//! let series = SeriesRequest::new(date(2025, 1, 6), 1, 4).at_location("hall-a");
//! assert!(series.validate().is_ok());
//! ```

pub mod closure;
pub mod conflict;
pub mod series;
pub mod settings;
pub mod status;


pub use closure::ClosureDate;
pub use conflict::{ConflictRecord, ConflictReport};
pub use series::{DateRange, LessonDate, SeriesRequest};
pub use settings::OrganisationSettings;
pub use status::Freshness;
