//! Cache hit and invalidation policies for the fruit listing.
//!
//! Both policies are plain values so the listing and import paths can be
//! tested against each mode without touching a cache backend.

use std::{fmt, str::FromStr};

use super::PolicyParseError;

/// Decides whether a cached fruit list counts as a hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePresence {
    /// Any stored list is a hit, including an empty one.
    #[default]
    KeyExists,
    /// An empty stored list is treated as a miss and the store is read again.
    NonEmpty,
}

impl CachePresence {
    /// Returns true if `names` read from the cache should be served as-is.
    pub fn is_hit(&self, names: &[String]) -> bool {
        match self {
            CachePresence::KeyExists => true,
            CachePresence::NonEmpty => !names.is_empty(),
        }
    }
}

impl FromStr for CachePresence {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "key-exists" | "key_exists" => Ok(CachePresence::KeyExists),
            "non-empty" | "non_empty" => Ok(CachePresence::NonEmpty),
            other => Err(PolicyParseError::UnknownPresence(other.to_string())),
        }
    }
}

impl fmt::Display for CachePresence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CachePresence::KeyExists => write!(f, "key-exists"),
            CachePresence::NonEmpty => write!(f, "non-empty"),
        }
    }
}

/// Decides what happens to the cached fruit list when the store is replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidationPolicy {
    /// Nothing evicts the cached list; it stays stale until cleared externally.
    #[default]
    Manual,
    /// A successful import deletes the cached list.
    OnImport,
}

impl InvalidationPolicy {
    pub fn invalidates_on_import(&self) -> bool {
        matches!(self, InvalidationPolicy::OnImport)
    }
}

impl FromStr for InvalidationPolicy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => Ok(InvalidationPolicy::Manual),
            "on-import" | "on_import" => Ok(InvalidationPolicy::OnImport),
            other => Err(PolicyParseError::UnknownInvalidation(other.to_string())),
        }
    }
}

impl fmt::Display for InvalidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidationPolicy::Manual => write!(f, "manual"),
            InvalidationPolicy::OnImport => write!(f, "on-import"),
        }
    }
}
