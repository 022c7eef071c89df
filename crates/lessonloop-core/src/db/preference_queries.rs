//! Per-user preference key/value queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_PREFERENCE_SQL: &str = "SELECT value FROM preferences WHERE user_id = ?1 AND key = ?2";
const UPSERT_PREFERENCE_SQL: &str = "INSERT INTO preferences (user_id, key, value, updated_at) VALUES (?1, ?2, ?3, ?4) \
     ON CONFLICT(user_id, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_PREFERENCE_SQL: &str = "DELETE FROM preferences WHERE user_id = ?1 AND key = ?2";
const SELECT_PREFERENCE_KEYS_SQL: &str =
    "SELECT key FROM preferences WHERE user_id = ?1 AND substr(key, 1, length(?2)) = ?2 ORDER BY key";

impl super::Database {
    /// Reads a stored preference value.
    pub fn get_preference(&self, user_id: &str, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_PREFERENCE_SQL, params![user_id, key], |row| row.get(0))
            .optional()
            .db_context("Failed to query preference")
    }

    /// Writes a preference value, replacing any previous one.
    pub fn set_preference(&mut self, user_id: &str, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(
                UPSERT_PREFERENCE_SQL,
                params![user_id, key, value, Timestamp::now().to_string()],
            )
            .db_context("Failed to store preference")?;
        Ok(())
    }

    /// Removes a preference, returning whether it existed.
    pub fn delete_preference(&mut self, user_id: &str, key: &str) -> Result<bool> {
        let affected = self
            .connection
            .execute(DELETE_PREFERENCE_SQL, params![user_id, key])
            .db_context("Failed to delete preference")?;
        Ok(affected > 0)
    }

    /// Lists a user's preference keys starting with `prefix`.
    pub fn list_preference_keys(&self, user_id: &str, prefix: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PREFERENCE_KEYS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![user_id, prefix], |row| row.get(0))
            .db_context("Failed to query preference keys")?;

        rows.collect::<rusqlite::Result<Vec<String>>>()
            .db_context("Failed to read preference keys")
    }
}
