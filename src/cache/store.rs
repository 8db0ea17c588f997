//! Cache slot storage

use std::sync::RwLock;

/// Raw storage behind the freshness cache
///
/// Implementations hold at most one serialized entry. The cache layer
/// treats whatever comes back as untrusted input, so stores never need
/// to validate what they hold.
///
/// ## Thread Safety
///
/// Implementations must be `Send + Sync` as the slot is shared across
/// async tasks.
pub trait CacheStore: Send + Sync {
    /// Return the stored payload, if any
    fn get(&self) -> Option<String>;

    /// Replace the stored payload (last write wins)
    fn set(&self, raw: String);
}

/// In-memory cache store
///
/// A single `RwLock`-guarded slot. Contents are lost on restart.
pub struct MemoryStore {
    slot: RwLock<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.slot.read().unwrap().clone()
    }

    fn set(&self, raw: String) {
        *self.slot.write().unwrap() = Some(raw);
    }
}
