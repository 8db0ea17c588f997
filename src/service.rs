//! Cache-aside orchestration for monitor fetching
//!
//! `MonitorService` sits between callers and the API client: fresh cache
//! hits are served without touching the network, everything else fetches
//! the full set through the [`MonitorSource`] seam and writes it back.
//!
//! A failed fetch propagates its error and never mutates the cache, so a
//! previously cached set survives outages.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::Monitor;
use crate::cache::FreshnessCache;
use crate::client::{FetchResult, MonitorSource};

/// Serves the monitor set through the freshness cache
pub struct MonitorService {
    source: Arc<dyn MonitorSource>,
    cache: FreshnessCache,
}

impl MonitorService {
    pub fn new(source: Arc<dyn MonitorSource>, cache: FreshnessCache) -> Self {
        Self { source, cache }
    }

    /// Get the current monitor set
    ///
    /// Serves the cached set while it is fresh, unless `force_refresh`
    /// bypasses the cache. A successful fetch replaces the cache entry
    /// with a freshly stamped one.
    #[instrument(skip(self, api_key, cancel))]
    pub async fn get(
        &self,
        api_key: &str,
        force_refresh: bool,
        cancel: &CancellationToken,
    ) -> FetchResult<Vec<Monitor>> {
        if !force_refresh
            && let Some(entry) = self.cache.read()
            && self.cache.is_fresh(&entry)
        {
            debug!("serving {} monitors from cache", entry.monitors.len());
            return Ok(entry.monitors);
        }

        debug!("fetching monitors from the API");
        let monitors = self.source.fetch_all(api_key, cancel).await?;
        self.cache.write(&monitors);

        Ok(monitors)
    }
}
