//! Organisation settings queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_BLOCK_SCHEDULING_SQL: &str =
    "SELECT block_scheduling FROM organisations WHERE id = ?1";
const UPSERT_BLOCK_SCHEDULING_SQL: &str = "INSERT INTO organisations (id, block_scheduling, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(id) DO UPDATE SET block_scheduling = excluded.block_scheduling, updated_at = excluded.updated_at";

impl super::Database {
    /// Reads an organisation's `block_scheduling` flag.
    ///
    /// `None` covers both an unknown organisation and an unset flag.
    pub fn get_block_scheduling(&self, org_id: &str) -> Result<Option<bool>> {
        let flag: Option<Option<bool>> = self
            .connection
            .query_row(SELECT_BLOCK_SCHEDULING_SQL, params![org_id], |row| row.get(0))
            .optional()
            .db_context("Failed to query organisation settings")?;
        Ok(flag.flatten())
    }

    /// Sets or clears an organisation's `block_scheduling` flag.
    pub fn set_block_scheduling(&mut self, org_id: &str, flag: Option<bool>) -> Result<()> {
        self.connection
            .execute(
                UPSERT_BLOCK_SCHEDULING_SQL,
                params![org_id, flag, Timestamp::now().to_string()],
            )
            .db_context("Failed to update organisation settings")?;
        Ok(())
    }
}
