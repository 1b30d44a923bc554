//! Cache Store Module
//!
//! Main cache engine combining the segment tree with per-entry eviction timers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tokio::task::AbortHandle;
use tracing::{debug, info};

use crate::cache::entry::{CacheEntry, EvictionHandle};
use crate::cache::tree::{self, lock_branch, BranchRef, Node};
use crate::cache::ttl::{resolve_ttl, Ttl};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::tasks::spawn_eviction_task;

// == Path Cache ==
/// In-memory cache addressed by hierarchical string paths, with optional
/// per-entry TTL expiry.
///
/// Values live at the leaf of their path; intermediate path segments become
/// branch nodes, created lazily on write and never pruned. Each finite-TTL
/// entry owns exactly one pending eviction task; replacing or removing the
/// entry cancels the task first, so a stale timer never deletes a newer
/// value.
///
/// All methods take `&self`; a single instance can be shared across the
/// host application for its whole lifetime. Call [`clear`](Self::clear) at
/// shutdown or reset points; dropping the cache also cancels any pending
/// eviction tasks.
#[derive(Debug)]
pub struct PathCache<V> {
    /// Root of the segment tree
    root: BranchRef<V>,
    /// Abort handles of every pending eviction task, drained only by `clear`
    timers: Mutex<Vec<AbortHandle>>,
    /// Id source for eviction tasks
    next_task_id: AtomicU64,
    /// Default TTL in minutes for `set` calls without an explicit TTL
    default_ttl_minutes: f64,
}

impl<V: Clone + Send + 'static> PathCache<V> {
    // == Constructors ==
    /// Creates an empty cache with the default configuration (5 minute TTL).
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Creates an empty cache from the given configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            root: tree::new_branch(),
            timers: Mutex::new(Vec::new()),
            next_task_id: AtomicU64::new(0),
            default_ttl_minutes: config.default_ttl_minutes,
        }
    }

    // == Set ==
    /// Stores `value` at `path`, creating intermediate branches as needed.
    ///
    /// If an entry already exists at the path it is fully replaced: its
    /// pending eviction task is canceled before the new entry is installed,
    /// so the old timer can never fire against the new value.
    ///
    /// # Arguments
    /// * `path` - Non-empty sequence of path segments
    /// * `value` - The value to store
    /// * `ttl` - Requested lifetime; None uses the configured default
    ///
    /// # Errors
    /// - [`CacheError::InvalidPath`] if `path` is empty
    /// - [`CacheError::InvalidArgument`] if a finite TTL is zero, negative
    ///   or not a number
    ///
    /// Either error is raised before any mutation.
    ///
    /// # Panics
    /// A finite TTL schedules a timer task, so such calls must run within a
    /// Tokio runtime.
    pub fn set<S: AsRef<str>>(&self, path: &[S], value: V, ttl: Option<Ttl>) -> Result<()> {
        validate_path(path)?;
        let delay = resolve_ttl(ttl, self.default_ttl_minutes)?;

        let parent = tree::resolve_or_create(&self.root, path);
        let key = leaf_key(path);

        // The parent stays locked from cancellation through insertion, so
        // even a sub-millisecond timer cannot fire before the new entry is
        // in place
        let mut branch = lock_branch(&parent);
        if let Some(Node::Leaf(previous)) = branch.get(&key) {
            previous.cancel_eviction();
        }

        let eviction = delay.map(|delay| {
            let task_id = self.next_task_id.fetch_add(1, Ordering::Relaxed);
            let abort = spawn_eviction_task(parent.clone(), key.clone(), task_id, delay);
            self.register_timer(abort.clone());
            EvictionHandle { id: task_id, abort }
        });
        debug!(key = %key, expires = eviction.is_some(), "set cache entry");

        let entry = match eviction {
            Some(handle) => CacheEntry::expiring(value, handle),
            None => CacheEntry::eternal(value),
        };
        branch.insert(key, Node::Leaf(entry));
        Ok(())
    }

    // == Get ==
    /// Retrieves the value stored at `path`.
    ///
    /// The lookup is read-only: missing intermediate segments yield
    /// `Ok(None)` rather than creating anything, since the leaf cannot
    /// exist without its ancestors.
    ///
    /// # Errors
    /// [`CacheError::InvalidPath`] if `path` is empty.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Result<Option<V>> {
        validate_path(path)?;

        let parent = match tree::resolve(&self.root, path) {
            Some(parent) => parent,
            None => return Ok(None),
        };
        let branch = lock_branch(&parent);
        match branch.get(leaf_key(path).as_str()) {
            Some(Node::Leaf(entry)) => Ok(Some(entry.value.clone())),
            _ => Ok(None),
        }
    }

    // == Remove ==
    /// Removes the entry at `path`, canceling its pending eviction task.
    ///
    /// A missing entry is a no-op. Intermediate branches are not pruned
    /// even if they become empty.
    ///
    /// # Errors
    /// [`CacheError::InvalidPath`] if `path` is empty.
    pub fn remove<S: AsRef<str>>(&self, path: &[S]) -> Result<()> {
        validate_path(path)?;

        let parent = match tree::resolve(&self.root, path) {
            Some(parent) => parent,
            None => return Ok(()),
        };
        let key = leaf_key(path);
        let mut branch = lock_branch(&parent);
        if let Some(Node::Leaf(entry)) = branch.get(key.as_str()) {
            entry.cancel_eviction();
            branch.remove(key.as_str());
            debug!(key = %key, "removed cache entry");
        }
        Ok(())
    }

    // == Clear ==
    /// Cancels every pending eviction task and discards the whole tree.
    pub fn clear(&self) {
        let handles = {
            let mut timers = lock_timers(&self.timers);
            std::mem::take(&mut *timers)
        };
        let canceled = handles.len();
        for handle in handles {
            handle.abort();
        }

        lock_branch(&self.root).clear();
        info!(canceled_timers = canceled, "cleared cache");
    }

    /// Records the abort handle of a newly scheduled eviction task.
    fn register_timer(&self, handle: AbortHandle) {
        lock_timers(&self.timers).push(handle);
    }
}

impl<V: Clone + Send + 'static> Default for PathCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for PathCache<V> {
    /// A dropped cache leaves no timers behind, even if the host never
    /// called `clear`.
    fn drop(&mut self) {
        for handle in lock_timers(&self.timers).drain(..) {
            handle.abort();
        }
    }
}

// == Private Helpers ==
/// Rejects empty paths before any state is touched.
fn validate_path<S: AsRef<str>>(path: &[S]) -> Result<()> {
    if path.is_empty() {
        return Err(CacheError::InvalidPath);
    }
    Ok(())
}

/// Final segment of a validated (non-empty) path.
fn leaf_key<S: AsRef<str>>(path: &[S]) -> String {
    path[path.len() - 1].as_ref().to_string()
}

/// Locks the timer registry, recovering from a poisoned mutex.
fn lock_timers(timers: &Mutex<Vec<AbortHandle>>) -> std::sync::MutexGuard<'_, Vec<AbortHandle>> {
    timers.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
