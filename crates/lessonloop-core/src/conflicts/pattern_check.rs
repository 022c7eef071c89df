//! Reactive conflict check for a series being edited.

use std::sync::{Mutex, PoisonError};

use log::debug;

use super::evaluate;
use crate::{
    models::{ConflictReport, Freshness, SeriesRequest},
    store::{ClosureDateStore, ClosureSource, FetchOutcome},
};

/// Keeps a conflict report in step with a changing series.
///
/// Each time [`update`](Self::update) sees new inputs it reloads the
/// closures covering the series span, then evaluates. Unchanged inputs reuse
/// whatever closures are already loaded.
pub struct ClosurePatternCheck<S> {
    store: ClosureDateStore<S>,
    last_request: Mutex<Option<SeriesRequest>>,
}

impl<S: ClosureSource> ClosurePatternCheck<S> {
    pub fn new(store: ClosureDateStore<S>) -> Self {
        Self {
            store,
            last_request: Mutex::new(None),
        }
    }

    /// Applies new series inputs and returns the resulting report.
    ///
    /// The returned report reflects the closures in memory once the refresh
    /// settles; if the refresh failed or was superseded those may belong to
    /// another range, see [`freshness`](Self::freshness).
    ///
    /// Inputs are remembered before their fetch settles, so repeating the
    /// inputs of a failed fetch does not retry it; the freshness stays
    /// [`Freshness::Error`] until the inputs change.
    pub async fn update(&self, request: &SeriesRequest) -> ConflictReport {
        if self.remember(request) {
            if let Some(range) = request.span() {
                match self.store.fetch_range(range).await {
                    FetchOutcome::Applied { count } => {
                        debug!("Loaded {count} closures for series check");
                    }
                    FetchOutcome::Superseded => {
                        debug!("Series inputs changed while loading closures");
                    }
                    FetchOutcome::Failed(_) => {}
                }
            }
        }
        self.report(request)
    }

    /// Evaluates `request` against the closures currently in memory.
    pub fn report(&self, request: &SeriesRequest) -> ConflictReport {
        self.store.with_closures(|closures| evaluate(request, closures))
    }

    /// Freshness of the closures the last report was computed from.
    pub fn freshness(&self) -> Freshness {
        self.store.freshness()
    }

    /// The underlying closure store.
    pub fn store(&self) -> &ClosureDateStore<S> {
        &self.store
    }

    /// Records `request`, returning whether it differs from the previous one.
    fn remember(&self, request: &SeriesRequest) -> bool {
        let mut last = self
            .last_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if last.as_ref() == Some(request) {
            return false;
        }
        *last = Some(request.clone());
        true
    }
}
