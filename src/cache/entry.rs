//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and their eviction handles.

use tokio::task::AbortHandle;

// == Eviction Handle ==
/// Handle to the pending eviction task of a single entry.
///
/// The id identifies the task that currently owns the leaf: a firing task
/// compares its own id against the one stored here and deletes the leaf only
/// on a match, so a task displaced by a later `set` can never delete the
/// replacement entry even if it was already past its timer when aborted.
#[derive(Debug)]
pub(crate) struct EvictionHandle {
    /// Task id, unique per cache instance
    pub(crate) id: u64,
    /// Abort handle for the spawned timer task; aborting is idempotent
    pub(crate) abort: AbortHandle,
}

impl EvictionHandle {
    /// Cancels the pending eviction task. Safe to call after the task
    /// has already fired or been aborted.
    pub(crate) fn cancel(&self) {
        self.abort.abort();
    }
}

// == Cache Entry ==
/// A single stored value and its optional pending eviction.
///
/// `eviction` is None exactly when the entry never expires.
#[derive(Debug)]
pub(crate) struct CacheEntry<V> {
    /// The stored value
    pub(crate) value: V,
    /// Handle to the pending eviction task, None = no expiration
    pub(crate) eviction: Option<EvictionHandle>,
}

impl<V> CacheEntry<V> {
    /// Creates an entry with no pending eviction.
    pub(crate) fn eternal(value: V) -> Self {
        Self {
            value,
            eviction: None,
        }
    }

    /// Creates an entry owned by the eviction task `handle`.
    pub(crate) fn expiring(value: V, handle: EvictionHandle) -> Self {
        Self {
            value,
            eviction: Some(handle),
        }
    }

    /// Cancels the pending eviction task, if any.
    pub(crate) fn cancel_eviction(&self) {
        if let Some(handle) = &self.eviction {
            handle.cancel();
        }
    }

    /// Returns the id of the eviction task that owns this entry, if any.
    pub(crate) fn eviction_id(&self) -> Option<u64> {
        self.eviction.as_ref().map(|handle| handle.id)
    }
}
