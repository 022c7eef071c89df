//! Closure source backed by the local SQLite database.

use std::path::{Path, PathBuf};

use tokio::task;

use super::ClosureSource;
use crate::{
    db::Database,
    error::{Result, SchedulingError},
    models::{ClosureDate, DateRange},
};

/// Reads closures and settings from the database at `db_path`.
///
/// Each query opens its own connection on the blocking pool. Closure reads
/// that fail surface as `SchedulingError::Fetch`.
#[derive(Debug, Clone)]
pub struct SqliteClosureSource {
    db_path: PathBuf,
}

impl SqliteClosureSource {
    pub fn new(db_path: impl AsRef<Path>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
        }
    }
}

impl ClosureSource for SqliteClosureSource {
    async fn closures_between(&self, org_id: &str, range: DateRange) -> Result<Vec<ClosureDate>> {
        let db_path = self.db_path.clone();
        let org_id = org_id.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_closures(&org_id, range)
        })
        .await
        .map_err(SchedulingError::join)?
        .map_err(SchedulingError::fetch)
    }

    async fn block_scheduling(&self, org_id: &str) -> Result<Option<bool>> {
        let db_path = self.db_path.clone();
        let org_id = org_id.to_string();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_block_scheduling(&org_id)
        })
        .await
        .map_err(SchedulingError::join)?
    }
}
