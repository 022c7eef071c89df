//! Per-user preference access for the Scheduler.

use std::sync::PoisonError;

use log::debug;

use super::Scheduler;
use crate::preferences::{PreferenceStore, SqlitePreferenceBackend};

impl Scheduler {
    /// Dismissals and drafts of `user_id`, stored in the scheduler's
    /// database.
    ///
    /// Repeated calls for the same user, from this scheduler or any of its
    /// clones, return handles to one store, so a reader subscribed through
    /// one call sees writes made through another.
    pub fn preferences(&self, user_id: &str) -> PreferenceStore<SqlitePreferenceBackend> {
        let mut stores = self
            .preference_stores
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        stores
            .entry(user_id.to_string())
            .or_insert_with(|| {
                debug!("Opening preference store for user {user_id}");
                PreferenceStore::new(SqlitePreferenceBackend::new(&self.db_path, user_id))
            })
            .clone()
    }
}
