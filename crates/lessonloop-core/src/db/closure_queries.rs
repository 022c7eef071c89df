//! Closure date CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row};

use super::utils::parse_column;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{ClosureDate, DateRange},
};

const INSERT_CLOSURE_SQL: &str = "INSERT INTO closure_dates (org_id, date, reason, location_id, applies_to_all_locations, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_CLOSURE_SQL: &str = "SELECT id, date, reason, location_id, applies_to_all_locations FROM closure_dates WHERE org_id = ?1 AND id = ?2";
const SELECT_CLOSURES_BETWEEN_SQL: &str = "SELECT id, date, reason, location_id, applies_to_all_locations FROM closure_dates WHERE org_id = ?1 AND date >= ?2 AND date <= ?3 ORDER BY date, id";
const DELETE_CLOSURE_SQL: &str = "DELETE FROM closure_dates WHERE org_id = ?1 AND id = ?2";

fn closure_from_row(row: &Row<'_>) -> rusqlite::Result<ClosureDate> {
    Ok(ClosureDate {
        id: row.get::<_, i64>(0)? as u64,
        date: parse_column(1, &row.get::<_, String>(1)?)?,
        reason: row.get(2)?,
        location_id: row.get(3)?,
        applies_to_all_locations: row.get(4)?,
    })
}

impl super::Database {
    /// Stores a closure for an organisation and returns it with its new ID.
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::InvalidInput` if the closure breaks the
    /// scoping invariant, or `SchedulingError::Database` on query failure.
    pub fn insert_closure(&mut self, org_id: &str, closure: &ClosureDate) -> Result<ClosureDate> {
        closure.validate()?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_CLOSURE_SQL,
            params![
                org_id,
                closure.date.to_string(),
                closure.reason,
                closure.location_id,
                closure.applies_to_all_locations,
                Timestamp::now().to_string(),
            ],
        )
        .db_context("Failed to insert closure date")?;

        let id = tx.last_insert_rowid() as u64;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(closure.clone().with_id(id))
    }

    /// Retrieves a single closure of an organisation.
    pub fn get_closure(&self, org_id: &str, id: u64) -> Result<Option<ClosureDate>> {
        self.connection
            .query_row(SELECT_CLOSURE_SQL, params![org_id, id as i64], closure_from_row)
            .optional()
            .db_context("Failed to query closure date")
    }

    /// Lists an organisation's closures dated within `range`, bounds included,
    /// ordered by date and then insertion order.
    pub fn list_closures(&self, org_id: &str, range: DateRange) -> Result<Vec<ClosureDate>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CLOSURES_BETWEEN_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(
                params![org_id, range.start.to_string(), range.end.to_string()],
                closure_from_row,
            )
            .db_context("Failed to query closure dates")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read closure dates")
    }

    /// Deletes a closure, returning what was removed.
    ///
    /// Returns `Ok(None)` if the organisation has no closure with that ID.
    pub fn delete_closure(&mut self, org_id: &str, id: u64) -> Result<Option<ClosureDate>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let existing = tx
            .query_row(SELECT_CLOSURE_SQL, params![org_id, id as i64], closure_from_row)
            .optional()
            .db_context("Failed to query closure date")?;

        if existing.is_some() {
            tx.execute(DELETE_CLOSURE_SQL, params![org_id, id as i64])
                .db_context("Failed to delete closure date")?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(existing)
    }
}
