//! Existence lookups the validators depend on.
//!
//! The user store is reached through [`UserLookup`] so validation can be batched
//! against Postgres in production and mocked in tests.

use std::collections::{BTreeSet, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use thiserror::Error;

/// The backing store could not answer (connection lost, query failed, ...).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("user lookup failed: {0}")]
pub struct LookupError(pub String);

impl LookupError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Membership queries against the user store. No mutation.
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Whether a user record with this id exists.
    async fn exists(&self, id: i64) -> Result<bool, LookupError>;

    /// The subset of `ids` that exist.
    ///
    /// The default issues one [`UserLookup::exists`] per id; stores that can answer
    /// in a single round trip should override it.
    async fn existing(&self, ids: &[i64]) -> Result<BTreeSet<i64>, LookupError> {
        let mut found = BTreeSet::new();
        for id in ids {
            if self.exists(*id).await? {
                found.insert(*id);
            }
        }
        Ok(found)
    }
}

/// In-memory user store for tests/dev.
///
/// Counts store round trips so callers can assert when no query was issued.
#[derive(Debug, Default)]
pub struct InMemoryUserLookup {
    ids: HashSet<i64>,
    round_trips: AtomicUsize,
}

impl InMemoryUserLookup {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
            round_trips: AtomicUsize::new(0),
        }
    }

    /// Number of queries served so far (`existing` counts as one).
    pub fn round_trips(&self) -> usize {
        self.round_trips.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserLookup for InMemoryUserLookup {
    async fn exists(&self, id: i64) -> Result<bool, LookupError> {
        self.round_trips.fetch_add(1, Ordering::SeqCst);
        Ok(self.ids.contains(&id))
    }

    async fn existing(&self, ids: &[i64]) -> Result<BTreeSet<i64>, LookupError> {
        self.round_trips.fetch_add(1, Ordering::SeqCst);
        Ok(ids.iter().copied().filter(|id| self.ids.contains(id)).collect())
    }
}
