//! TTL Resolution Module
//!
//! Defines the TTL request type and its resolution into a concrete timer delay.

use std::time::Duration;

use crate::error::{CacheError, Result};

// == TTL ==
/// Requested lifetime for a cache entry.
///
/// The infinite case is an explicit variant rather than a numeric sentinel,
/// so "never expires" cannot be confused with a very large finite TTL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ttl {
    /// Entry expires after this many minutes (must be finite and > 0)
    Minutes(f64),
    /// Entry never expires and schedules no eviction task
    Infinite,
}

// == Resolution ==
/// Resolves a requested TTL into a timer delay.
///
/// # Arguments
/// * `ttl` - The requested TTL, or None to use the default
/// * `default_minutes` - Default TTL in minutes for unspecified requests
///
/// # Returns
/// - `Ok(Some(delay))` for a finite TTL (explicit or defaulted)
/// - `Ok(None)` for `Ttl::Infinite` (no eviction task)
/// - `Err(CacheError::InvalidArgument)` if the minutes (explicit or
///   defaulted) are zero, negative, not a number, or too large to
///   represent as a `Duration`
pub(crate) fn resolve_ttl(ttl: Option<Ttl>, default_minutes: f64) -> Result<Option<Duration>> {
    let minutes = match ttl {
        None => default_minutes,
        Some(Ttl::Infinite) => return Ok(None),
        Some(Ttl::Minutes(minutes)) => minutes,
    };
    if !minutes.is_finite() || minutes <= 0.0 {
        return Err(CacheError::InvalidArgument);
    }
    // The conversion is fallible: huge finite minutes overflow Duration
    Duration::try_from_secs_f64(minutes * 60.0)
        .map(Some)
        .map_err(|_| CacheError::InvalidArgument)
}
