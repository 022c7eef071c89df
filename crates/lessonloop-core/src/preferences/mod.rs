//! Per-user dismissals and drafts with change notification.
//!
//! Banners, hints and half-finished forms are remembered per user under a
//! typed [`PreferenceKey`]. Each key kind owns its own namespace in storage,
//! so a banner called `closures` and a draft form called `closures` never
//! collide.
//!
//! Several independent views may read the same preferences. Every write goes
//! through a [`PreferenceStore`], which persists the value and then
//! broadcasts a [`PreferenceChange`]; each [`PreferenceReader`] re-derives
//! its snapshot of dismissed keys when it receives one.
//!
//! ```text
//! writer ──▶ PreferenceStore ──▶ backend (SQLite / memory)
//!                   │
//!                   └─ broadcast ──▶ reader A (resync)
//!                                ──▶ reader B (resync)
//! ```

use std::{collections::BTreeSet, sync::Arc};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::{self, error::RecvError};

use crate::error::{Result, SchedulingError};

pub mod backend;
pub mod key;


pub use backend::{MemoryBackend, PreferenceBackend, SqlitePreferenceBackend};
pub use key::PreferenceKey;

const CHANGE_CHANNEL_CAPACITY: usize = 64;
const DISMISSED_VALUE: &str = "1";

/// Kind of write that produced a [`PreferenceChange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Dismissed,
    Restored,
    DraftSaved,
    DraftCleared,
}

/// Notification sent to every reader after a write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceChange {
    pub key: PreferenceKey,
    pub kind: ChangeKind,
}

/// Writes preferences and notifies subscribed readers.
pub struct PreferenceStore<B> {
    backend: Arc<B>,
    events: broadcast::Sender<PreferenceChange>,
}

impl<B> Clone for PreferenceStore<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            events: self.events.clone(),
        }
    }
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    pub fn new(backend: B) -> Self {
        let (events, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            backend: Arc::new(backend),
            events,
        }
    }

    /// Hides a banner or hint.
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::InvalidInput` for draft keys or malformed
    /// identifiers, and propagates backend failures.
    pub fn dismiss(&self, key: &PreferenceKey) -> Result<()> {
        require_dismissal(key)?;
        self.backend.set(&key.storage_key(), DISMISSED_VALUE)?;
        self.publish(key, ChangeKind::Dismissed);
        Ok(())
    }

    /// Whether a banner or hint has been dismissed.
    pub fn is_dismissed(&self, key: &PreferenceKey) -> Result<bool> {
        require_dismissal(key)?;
        Ok(self.backend.get(&key.storage_key())?.is_some())
    }

    /// Shows a dismissed banner or hint again.
    ///
    /// Returns whether it had been dismissed.
    pub fn restore(&self, key: &PreferenceKey) -> Result<bool> {
        require_dismissal(key)?;
        let removed = self.backend.remove(&key.storage_key())?;
        if removed {
            self.publish(key, ChangeKind::Restored);
        }
        Ok(removed)
    }

    /// Saves draft text for a form.
    pub fn save_draft(&self, key: &PreferenceKey, text: &str) -> Result<()> {
        require_draft(key)?;
        self.backend.set(&key.storage_key(), text)?;
        self.publish(key, ChangeKind::DraftSaved);
        Ok(())
    }

    /// Loads draft text for a form.
    pub fn load_draft(&self, key: &PreferenceKey) -> Result<Option<String>> {
        require_draft(key)?;
        self.backend.get(&key.storage_key())
    }

    /// Discards draft text, returning whether there was any.
    pub fn clear_draft(&self, key: &PreferenceKey) -> Result<bool> {
        require_draft(key)?;
        let removed = self.backend.remove(&key.storage_key())?;
        if removed {
            self.publish(key, ChangeKind::DraftCleared);
        }
        Ok(removed)
    }

    /// Creates a reader with a snapshot of the current dismissals.
    pub fn subscribe(&self) -> Result<PreferenceReader<B>> {
        let receiver = self.events.subscribe();
        let mut reader = PreferenceReader {
            backend: Arc::clone(&self.backend),
            receiver,
            dismissed: BTreeSet::new(),
        };
        reader.resync()?;
        Ok(reader)
    }

    fn publish(&self, key: &PreferenceKey, kind: ChangeKind) {
        let change = PreferenceChange {
            key: key.clone(),
            kind,
        };
        // No subscribers is not an error
        if self.events.send(change).is_err() {
            debug!("No readers for preference change on {}", key.storage_key());
        }
    }
}

/// Snapshot of dismissed banners and hints kept current by broadcasts.
pub struct PreferenceReader<B> {
    backend: Arc<B>,
    receiver: broadcast::Receiver<PreferenceChange>,
    dismissed: BTreeSet<String>,
}

impl<B: PreferenceBackend> PreferenceReader<B> {
    /// Whether `key` was dismissed as of the last resync.
    pub fn is_dismissed(&self, key: &PreferenceKey) -> bool {
        self.dismissed.contains(&key.storage_key())
    }

    /// Number of dismissed banners and hints in the snapshot.
    pub fn dismissed_count(&self) -> usize {
        self.dismissed.len()
    }

    /// Waits for the next change and resyncs the snapshot.
    ///
    /// Returns `Ok(None)` once every store handle has been dropped. A reader
    /// that fell behind resyncs and keeps waiting.
    pub async fn recv_change(&mut self) -> Result<Option<PreferenceChange>> {
        loop {
            match self.receiver.recv().await {
                Ok(change) => {
                    self.resync()?;
                    return Ok(Some(change));
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Preference reader missed {skipped} changes, resyncing");
                    self.resync()?;
                }
                Err(RecvError::Closed) => return Ok(None),
            }
        }
    }

    fn resync(&mut self) -> Result<()> {
        let mut dismissed = BTreeSet::new();
        for prefix in PreferenceKey::DISMISSAL_PREFIXES {
            dismissed.extend(self.backend.keys_with_prefix(prefix)?);
        }
        self.dismissed = dismissed;
        Ok(())
    }
}

fn require_dismissal(key: &PreferenceKey) -> Result<()> {
    key.validate()?;
    if key.is_dismissal() {
        Ok(())
    } else {
        Err(SchedulingError::invalid_input("key").with_reason("drafts cannot be dismissed"))
    }
}

fn require_draft(key: &PreferenceKey) -> Result<()> {
    key.validate()?;
    if key.is_dismissal() {
        Err(SchedulingError::invalid_input("key").with_reason("only draft keys hold text"))
    } else {
        Ok(())
    }
}
