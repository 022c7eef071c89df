//! In-memory closure list with guarded refreshes.
//!
//! [`ClosureDateStore`] holds the closures of one organisation for the most
//! recently requested date range. Rows come from a [`ClosureSource`]; the
//! workspace ships [`SqliteClosureSource`] and tests plug in their own.
//!
//! # Refresh ordering
//!
//! Every call to [`ClosureDateStore::fetch_closures`] takes a ticket from a
//! monotonically increasing generation counter. When the source answers, the
//! rows are applied only if no newer fetch has been started in the meantime,
//! so a slow response for an old range can never overwrite a newer one:
//!
//! ```text
//! fetch #1 ──────────────────────────▶ done (ticket 1 < 2: discarded)
//!        fetch #2 ─────────▶ done (ticket 2 is latest: applied)
//! ```
//!
//! # Failure handling
//!
//! A failed fetch leaves the previous list in place and moves the store to
//! [`Freshness::Error`], so callers can tell "no closures" apart from "could
//! not load closures".

use std::{
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex, MutexGuard, PoisonError,
    },
};

use jiff::civil::Date;
use log::{debug, warn};

use crate::{
    conflicts::matcher,
    error::{Result, SchedulingError},
    models::{ClosureDate, DateRange, Freshness, OrganisationSettings},
};

pub mod sqlite;


pub use sqlite::SqliteClosureSource;

/// Backend the store loads closures and settings from.
pub trait ClosureSource {
    /// All closures of `org_id` dated within `range`, bounds included.
    fn closures_between(
        &self,
        org_id: &str,
        range: DateRange,
    ) -> impl Future<Output = Result<Vec<ClosureDate>>> + Send;

    /// The organisation's raw `block_scheduling` flag, `None` when unset.
    fn block_scheduling(&self, org_id: &str) -> impl Future<Output = Result<Option<bool>>> + Send;
}

/// What happened to a single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The rows replaced the in-memory list
    Applied { count: usize },

    /// A newer fetch was started before this one finished; rows discarded
    Superseded,

    /// The source failed; the previous list was kept
    Failed(String),
}

#[derive(Debug, Default)]
struct StoreState {
    closures: Vec<ClosureDate>,
    freshness: Freshness,
    block_scheduling: Option<bool>,
}

/// Closure dates of one organisation for the latest requested range.
pub struct ClosureDateStore<S> {
    source: S,
    org_id: String,
    generation: AtomicU64,
    state: Mutex<StoreState>,
}

impl<S: ClosureSource> ClosureDateStore<S> {
    /// Creates an empty store bound to an organisation.
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::Configuration` when `org_id` is empty, since
    /// every query needs an active organisation.
    pub fn new(source: S, org_id: impl Into<String>) -> Result<Self> {
        let org_id = org_id.into();
        if org_id.trim().is_empty() {
            return Err(SchedulingError::Configuration {
                message: "An active organisation is required to load closure dates".to_string(),
            });
        }
        Ok(Self {
            source,
            org_id,
            generation: AtomicU64::new(0),
            state: Mutex::new(StoreState::default()),
        })
    }

    /// The backend closures are loaded from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Organisation this store is bound to.
    pub fn org_id(&self) -> &str {
        &self.org_id
    }

    /// Loads the closures dated between `start` and `end` inclusive.
    ///
    /// Source failures are not returned as errors; they are reported through
    /// [`FetchOutcome::Failed`] and [`Freshness::Error`].
    ///
    /// # Errors
    ///
    /// Returns `SchedulingError::InvalidInput` when `start > end`.
    pub async fn fetch_closures(&self, start: Date, end: Date) -> Result<FetchOutcome> {
        let range = DateRange::new(start, end)?;
        Ok(self.fetch_range(range).await)
    }

    pub(crate) async fn fetch_range(&self, range: DateRange) -> FetchOutcome {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.lock().freshness = Freshness::Stale;
        debug!(
            "Fetching closures for org {} from {} to {} (generation {ticket})",
            self.org_id, range.start, range.end
        );

        let result = self.source.closures_between(&self.org_id, range).await;

        let mut state = self.lock();
        if ticket != self.generation.load(Ordering::SeqCst) {
            debug!("Discarding closures from superseded fetch (generation {ticket})");
            return FetchOutcome::Superseded;
        }

        match result {
            Ok(rows) => {
                state.closures = rows
                    .into_iter()
                    .filter(|closure| range.contains(closure.date))
                    .collect();
                state.freshness = Freshness::Fresh;
                FetchOutcome::Applied {
                    count: state.closures.len(),
                }
            }
            Err(e) => {
                warn!("Failed to load closure dates for org {}: {e}", self.org_id);
                let message = e.to_string();
                state.freshness = Freshness::Error(message.clone());
                FetchOutcome::Failed(message)
            }
        }
    }

    /// Reloads the organisation's `block_scheduling` flag.
    ///
    /// # Errors
    ///
    /// Propagates the source's error; the cached flag is left unchanged.
    pub async fn refresh_settings(&self) -> Result<OrganisationSettings> {
        let flag = self.source.block_scheduling(&self.org_id).await?;
        self.lock().block_scheduling = flag;
        Ok(OrganisationSettings {
            org_id: self.org_id.clone(),
            block_scheduling: flag,
        })
    }

    /// Whether closures should hard-block scheduling. Defaults to `true`.
    ///
    /// Advisory only; nothing in this crate enforces it.
    pub fn block_scheduling(&self) -> bool {
        self.lock().block_scheduling.unwrap_or(true)
    }

    /// First closure on `date` whose scope covers `location_id`.
    pub fn is_closure_date(&self, date: Date, location_id: Option<&str>) -> Option<ClosureDate> {
        matcher::is_closure_date(&self.lock().closures, date, location_id).cloned()
    }

    /// Every closure on `date`, regardless of location.
    pub fn closures_for_date(&self, date: Date) -> Vec<ClosureDate> {
        matcher::closures_for_date(&self.lock().closures, date)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Snapshot of the current list.
    pub fn closures(&self) -> Vec<ClosureDate> {
        self.lock().closures.clone()
    }

    /// How far the current list can be trusted.
    pub fn freshness(&self) -> Freshness {
        self.lock().freshness.clone()
    }

    /// Runs `f` against the current list without cloning it.
    pub(crate) fn with_closures<T>(&self, f: impl FnOnce(&[ClosureDate]) -> T) -> T {
        f(&self.lock().closures)
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
