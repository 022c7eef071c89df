//! High-level scheduler API for closure dates and series checks.
//!
//! [`Scheduler`] is the entry point used by the CLI and the MCP server. It is
//! bound to one database file and one organisation, and coordinates the
//! storage layer with the conflict engine:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Scheduler     │    │ ClosureDateStore│    │    Database     │
//! │ (closure_ops,   │───▶│ + pattern check │───▶│   (via db/)     │
//! │  check_ops, ..) │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every database call runs on the blocking thread pool with its own
//! connection, so a `Scheduler` is cheap to share between tasks.
//!
//! # Examples
//!
//! ```rust,no_run
//! use lessonloop_core::{params::CheckSeries, SchedulerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new()
//!     .with_organisation("riverside-music")
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
//! println!("{}", check.report);
//! # Ok(())
//! # }
//! ```

use std::{
    collections::HashMap,
    fmt,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, SchedulingError},
    preferences::{PreferenceStore, SqlitePreferenceBackend},
};

pub mod builder;
pub mod check_ops;
pub mod closure_ops;
pub mod preference_ops;
pub mod settings_ops;


pub use builder::SchedulerBuilder;
pub use check_ops::SeriesCheck;

/// Preference stores by user id, shared by every clone of a scheduler.
pub(crate) type PreferenceRegistry =
    Arc<Mutex<HashMap<String, PreferenceStore<SqlitePreferenceBackend>>>>;

/// Main scheduler interface, bound to one organisation.
#[derive(Clone)]
pub struct Scheduler {
    pub(crate) db_path: PathBuf,
    pub(crate) org_id: String,
    pub(crate) preference_stores: PreferenceRegistry,
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("db_path", &self.db_path)
            .field("org_id", &self.org_id)
            .finish_non_exhaustive()
    }
}

impl Scheduler {
    pub(crate) fn new(db_path: PathBuf, org_id: String) -> Self {
        Self {
            db_path,
            org_id,
            preference_stores: PreferenceRegistry::default(),
        }
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Organisation every operation is scoped to.
    pub fn org_id(&self) -> &str {
        &self.org_id
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database, &str) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        let org_id = self.org_id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db, &org_id)
        })
        .await
        .map_err(SchedulingError::join)?
    }
}
