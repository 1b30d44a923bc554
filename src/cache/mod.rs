//! Cache Module
//!
//! Provides in-memory, path-addressed caching with per-entry TTL expiration.

pub(crate) mod entry;
mod store;
pub(crate) mod tree;
mod ttl;


// Re-export public types
pub use store::PathCache;
pub use ttl::Ttl;

// == Public Constants ==
/// Default TTL in minutes for entries set without an explicit TTL
pub const DEFAULT_TTL_MINUTES: f64 = 5.0;
