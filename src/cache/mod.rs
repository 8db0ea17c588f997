//! Freshness-bounded cache for the monitor set
//!
//! A single-slot cache that serves the last fetched monitor set for a
//! short window (60 seconds by default) before callers fall through to
//! the network again.
//!
//! ## Design
//!
//! - **Trait-based**: the `CacheStore` slot is injected, so tests can
//!   poison it and alternative stores can be swapped in
//! - **Lazy expiry**: entries are never swept; staleness is decided at
//!   read time against the injected clock
//! - **Corrupt-tolerant**: an unreadable entry is a miss, not an error

pub mod store;

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::Monitor;

pub use store::{CacheStore, MemoryStore};

/// Time source for freshness decisions
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to
///
/// Lets tests sit exactly on the freshness boundary.
pub struct ManualClock {
    now: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: RwLock::new(start),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, delta: Duration) {
        *self.now.write().unwrap() += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.read().unwrap()
    }
}

/// One cached monitor set with its fetch timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub monitors: Vec<Monitor>,
    pub fetched_at: DateTime<Utc>,
}

/// Single-slot cache with a freshness window
pub struct FreshnessCache {
    store: Arc<dyn CacheStore>,
    clock: Arc<dyn Clock>,
    window: Duration,
}

impl FreshnessCache {
    pub fn new(store: Arc<dyn CacheStore>, clock: Arc<dyn Clock>, window: Duration) -> Self {
        Self {
            store,
            clock,
            window,
        }
    }

    /// In-memory cache running on the system clock
    pub fn in_memory(window: Duration) -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(SystemClock), window)
    }

    /// Decode the stored entry, if a readable one exists
    ///
    /// A present-but-unreadable slot counts as a miss. Freshness is not
    /// checked here; pair with [`FreshnessCache::is_fresh`].
    pub fn read(&self) -> Option<CacheEntry> {
        let raw = self.store.get()?;

        match serde_json::from_str(&raw) {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!("discarding unreadable cache entry: {err}");
                None
            }
        }
    }

    /// Store a freshly fetched monitor set, stamped with the current time
    pub fn write(&self, monitors: &[Monitor]) {
        let entry = CacheEntry {
            monitors: monitors.to_vec(),
            fetched_at: self.clock.now(),
        };

        match serde_json::to_string(&entry) {
            Ok(raw) => self.store.set(raw),
            Err(err) => warn!("failed to encode cache entry: {err}"),
        }
    }

    /// Whether an entry is still inside the freshness window
    ///
    /// The bound is exclusive: an entry exactly `window` old is stale.
    pub fn is_fresh(&self, entry: &CacheEntry) -> bool {
        self.clock.now() - entry.fetched_at < self.window
    }
}
