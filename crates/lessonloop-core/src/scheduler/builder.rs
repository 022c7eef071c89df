//! Builder for creating and configuring Scheduler instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{Result, SchedulingError},
};

/// Organisation used when none is configured.
pub const DEFAULT_ORGANISATION: &str = "default";

/// Builder for creating and configuring Scheduler instances.
#[derive(Debug, Clone)]
pub struct SchedulerBuilder {
    database_path: Option<PathBuf>,
    org_id: String,
}

impl SchedulerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            org_id: DEFAULT_ORGANISATION.to_string(),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/lessonloop/lessonloop.db` or
    /// `~/.local/share/lessonloop/lessonloop.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the organisation all operations are scoped to.
    pub fn with_organisation(mut self, org_id: impl Into<String>) -> Self {
        self.org_id = org_id.into();
        self
    }

    /// Builds the configured scheduler instance.
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::Configuration` if the organisation is blank
    /// Returns `SchedulingError::FileSystem` if the database path is invalid
    /// Returns `SchedulingError::Database` if database initialization fails
    pub async fn build(self) -> Result<Scheduler> {
        let org_id = self.org_id.trim().to_string();
        if org_id.is_empty() {
            return Err(SchedulingError::Configuration {
                message: "An active organisation is required".to_string(),
            });
        }

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SchedulingError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), SchedulingError>(())
        })
        .await
        .map_err(SchedulingError::join)??;

        debug!("Scheduler ready for org {org_id} at {}", db_path.display());
        Ok(Scheduler::new(db_path, org_id))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("lessonloop")
            .place_data_file("lessonloop.db")
            .map_err(|e| SchedulingError::XdgDirectory(e.to_string()))
    }
}

impl Default for SchedulerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
