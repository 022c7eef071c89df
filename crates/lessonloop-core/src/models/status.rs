//! Freshness of data held by the closure store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tri-state describing how far the in-memory closure list can be trusted.
///
/// A failed refresh keeps the previous list, so `Error` still comes with data;
/// it just may not cover the requested range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase", tag = "state", content = "message")]
pub enum Freshness {
    /// The latest requested range was loaded successfully
    Fresh,

    /// Nothing loaded yet, or a newer fetch is still in flight
    #[default]
    Stale,

    /// The latest fetch failed; the list reflects an earlier range
    Error(String),
}

impl Freshness {
    /// Whether the closure list matches the latest requested range.
    pub fn is_fresh(&self) -> bool {
        matches!(self, Freshness::Fresh)
    }

    /// Convert to a short lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Freshness::Fresh => "fresh",
            Freshness::Stale => "stale",
            Freshness::Error(_) => "error",
        }
    }

    /// Get the state with an icon for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lessonloop_core::models::Freshness;
    ///
    /// assert_eq!(Freshness::Fresh.with_icon(), "✓ Up to date");
    /// assert_eq!(Freshness::Stale.with_icon(), "○ Loading");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            Freshness::Fresh => "✓ Up to date",
            Freshness::Stale => "○ Loading",
            Freshness::Error(_) => "⚠ Closures may be incomplete",
        }
    }
}

impl fmt::Display for Freshness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Freshness::Error(message) => write!(f, "{}: {message}", self.with_icon()),
            _ => f.write_str(self.with_icon()),
        }
    }
}
