//! Background Tasks Module
//!
//! Contains the deferred tasks scheduled while the cache is in use.
//!
//! # Tasks
//! - Entry eviction: deletes one leaf entry when its TTL elapses

mod evict;

pub(crate) use evict::spawn_eviction_task;
