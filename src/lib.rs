//! Path Cache - An in-memory, path-addressed cache
//!
//! Memoizes values under hierarchical string-path keys with optional
//! per-entry TTL expiry. Entries with a finite TTL are evicted by a
//! deferred timer task; `"infinite"` entries live until removed.
//!
//! # Example
//! ```
//! use path_cache::{PathCache, Ttl};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), path_cache::CacheError> {
//! let cache = PathCache::new();
//!
//! cache.set(&["session", "user"], "alice".to_string(), Some(Ttl::Infinite))?;
//! assert_eq!(cache.get(&["session", "user"])?.as_deref(), Some("alice"));
//!
//! cache.remove(&["session", "user"])?;
//! assert_eq!(cache.get(&["session", "user"])?, None);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod error;
mod tasks;

pub use cache::{PathCache, Ttl, DEFAULT_TTL_MINUTES};
pub use config::Config;
pub use error::{CacheError, Result};
