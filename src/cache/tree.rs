//! Path Tree Module
//!
//! Prefix tree keyed by path segments, with read-only and create-on-miss
//! descent. A path of length n addresses n-1 branch nodes and one leaf
//! entry under the final segment.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::cache::entry::CacheEntry;

// == Node Types ==
/// One level of the tree: segment -> child node.
pub(crate) type Branch<V> = HashMap<String, Node<V>>;

/// Shared handle to a branch.
///
/// Branches are individually shareable so an eviction task can capture its
/// resolved parent directly instead of re-resolving the path when it fires;
/// structural changes elsewhere in the tree cannot redirect the deletion.
pub(crate) type BranchRef<V> = Arc<Mutex<Branch<V>>>;

/// A tree node: either a nested branch or a leaf entry.
///
/// Only leaves carry a value and an eviction handle; intermediate branches
/// are pure structure.
#[derive(Debug)]
pub(crate) enum Node<V> {
    Branch(BranchRef<V>),
    Leaf(CacheEntry<V>),
}

/// Creates a new empty branch.
pub(crate) fn new_branch<V>() -> BranchRef<V> {
    Arc::new(Mutex::new(HashMap::new()))
}

/// Locks a branch, recovering from a poisoned mutex.
///
/// The critical sections in this crate never panic mid-mutation, so a
/// poisoned guard still holds a consistent map.
pub(crate) fn lock_branch<V>(branch: &BranchRef<V>) -> MutexGuard<'_, Branch<V>> {
    branch.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// == Descent ==
/// Resolves the parent branch of the leaf addressed by `path`, creating
/// missing intermediate branches along the way.
///
/// A leaf sitting where an intermediate branch is needed is displaced: its
/// eviction task is canceled and a fresh empty branch takes its place.
///
/// # Arguments
/// * `root` - The tree root
/// * `path` - Non-empty path; only `path[..len-1]` is traversed
///
/// # Returns
/// The branch that holds (or will hold) the final segment's leaf.
pub(crate) fn resolve_or_create<V, S: AsRef<str>>(
    root: &BranchRef<V>,
    path: &[S],
) -> BranchRef<V> {
    let mut current = Arc::clone(root);
    for segment in &path[..path.len() - 1] {
        let segment = segment.as_ref();
        let next = {
            let mut branch = lock_branch(&current);
            match branch.get(segment) {
                Some(Node::Branch(child)) => Arc::clone(child),
                _ => {
                    // Missing, or a leaf in the way of the descent
                    if let Some(Node::Leaf(entry)) = branch.get(segment) {
                        entry.cancel_eviction();
                    }
                    let child = new_branch();
                    branch.insert(segment.to_string(), Node::Branch(Arc::clone(&child)));
                    child
                }
            }
        };
        current = next;
    }
    current
}

/// Resolves the parent branch of the leaf addressed by `path` without
/// creating anything.
///
/// # Returns
/// None if any intermediate segment is missing or is a leaf; the addressed
/// leaf cannot exist in either case.
pub(crate) fn resolve<V, S: AsRef<str>>(root: &BranchRef<V>, path: &[S]) -> Option<BranchRef<V>> {
    let mut current = Arc::clone(root);
    for segment in &path[..path.len() - 1] {
        let next = {
            let branch = lock_branch(&current);
            match branch.get(segment.as_ref()) {
                Some(Node::Branch(child)) => Arc::clone(child),
                _ => return None,
            }
        };
        current = next;
    }
    Some(current)
}
