//! Entry Eviction Task
//!
//! Deferred task that deletes a single leaf entry when its TTL elapses.

use std::time::Duration;

use tokio::task::AbortHandle;
use tracing::debug;

use crate::cache::tree::{lock_branch, BranchRef, Node};

/// Spawns the eviction task for one leaf entry.
///
/// The task sleeps for `delay`, then deletes `key` from the captured parent
/// branch. The parent is captured by reference at schedule time, so later
/// structural changes elsewhere in the tree cannot redirect the deletion.
/// Before deleting, the task checks that the leaf is still owned by its own
/// `task_id`; an entry replaced or removed in the meantime is left alone even
/// if the abort raced with the timer.
///
/// Must be called from within a Tokio runtime.
///
/// # Arguments
/// * `parent` - The branch holding the leaf, resolved at schedule time
/// * `key` - Final path segment of the leaf
/// * `task_id` - Id stored on the entry this task owns
/// * `delay` - Time until eviction
///
/// # Returns
/// An AbortHandle used to cancel the eviction on replacement, `remove`
/// or `clear`.
pub(crate) fn spawn_eviction_task<V: Send + 'static>(
    parent: BranchRef<V>,
    key: String,
    task_id: u64,
    delay: Duration,
) -> AbortHandle {
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let mut branch = lock_branch(&parent);
        let owned = matches!(
            branch.get(&key),
            Some(Node::Leaf(entry)) if entry.eviction_id() == Some(task_id)
        );
        if owned {
            branch.remove(&key);
            debug!(key = %key, task_id, "evicted expired entry");
        }
    });

    task.abort_handle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::entry::{CacheEntry, EvictionHandle};
    use crate::cache::tree::new_branch;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_eviction_deletes_owned_leaf() {
        let branch = new_branch();

        let abort = spawn_eviction_task(
            Arc::clone(&branch),
            "key".to_string(),
            1,
            Duration::from_millis(20),
        );
        lock_branch(&branch).insert(
            "key".to_string(),
            Node::Leaf(CacheEntry::expiring("value", EvictionHandle { id: 1, abort })),
        );

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(lock_branch(&branch).get("key").is_none());
    }

    #[tokio::test]
    async fn test_eviction_leaves_replaced_leaf_alone() {
        let branch = new_branch();

        let abort = spawn_eviction_task(
            Arc::clone(&branch),
            "key".to_string(),
            1,
            Duration::from_millis(20),
        );
        // A later entry with a different owner id occupies the leaf
        lock_branch(&branch).insert(
            "key".to_string(),
            Node::Leaf(CacheEntry::expiring("newer", EvictionHandle { id: 2, abort })),
        );

        tokio::time::sleep(Duration::from_millis(60)).await;
        // Statement form so the guard temporary drops before `branch`
        match lock_branch(&branch).get("key") {
            Some(Node::Leaf(entry)) => assert_eq!(entry.value, "newer"),
            _ => panic!("replacement entry must survive the stale task"),
        };
    }

    #[tokio::test]
    async fn test_aborted_eviction_never_fires() {
        let branch = new_branch();

        let abort = spawn_eviction_task(
            Arc::clone(&branch),
            "key".to_string(),
            1,
            Duration::from_millis(20),
        );
        lock_branch(&branch).insert(
            "key".to_string(),
            Node::Leaf(CacheEntry::eternal("value")),
        );
        abort.abort();

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(lock_branch(&branch).get("key").is_some());
    }
}
