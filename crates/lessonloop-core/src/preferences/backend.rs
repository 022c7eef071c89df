//! Storage backends for preferences.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use crate::{db::Database, error::Result};

/// Key/value storage behind a [`PreferenceStore`](super::PreferenceStore).
pub trait PreferenceBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes a key, returning whether it existed.
    fn remove(&self, key: &str) -> Result<bool>;

    /// All stored keys starting with `prefix`, sorted.
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>>;
}

/// Process-local backend, mostly useful in tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PreferenceBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.values().remove(key).is_some())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .values()
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }
}

/// Backend storing one user's preferences in the SQLite database.
#[derive(Debug, Clone)]
pub struct SqlitePreferenceBackend {
    db_path: PathBuf,
    user_id: String,
}

impl SqlitePreferenceBackend {
    pub fn new(db_path: impl AsRef<Path>, user_id: impl Into<String>) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
            user_id: user_id.into(),
        }
    }
}

impl PreferenceBackend for SqlitePreferenceBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Database::new(&self.db_path)?.get_preference(&self.user_id, key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Database::new(&self.db_path)?.set_preference(&self.user_id, key, value)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Database::new(&self.db_path)?.delete_preference(&self.user_id, key)
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        Database::new(&self.db_path)?.list_preference_keys(&self.user_id, prefix)
    }
}
