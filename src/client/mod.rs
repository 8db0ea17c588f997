//! UptimeRobot API client
//!
//! Talks to the v2 `getMonitors` endpoint and merges paginated results
//! into a single monitor set.
//!
//! ## Key Features
//!
//! 1. **Reused connection pool** - One `reqwest::Client` for all requests
//! 2. **Sequential pagination** - Later offsets are only known after earlier
//!    pages arrive, so pages are fetched one at a time
//! 3. **Cooperative cancellation** - A `CancellationToken` is checked between
//!    pages; an aborted fetch never yields a partial set
//! 4. **Typed failures** - Transport, rejection and decode errors stay
//!    distinguishable all the way up to the UI
//!
//! ## Request shape
//!
//! ```text
//! POST <api_url>
//! Content-Type: application/json
//! Cache-Control: no-cache
//!
//! {"api_key": "...", "format": "json", "logs": 0, "offset": N, "limit": 50}
//! ```

pub mod error;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, trace};

use crate::Monitor;

pub use error::{FetchError, FetchResult};
pub use types::{MonitorsPage, Pagination};

/// Production endpoint for the `getMonitors` call
pub const DEFAULT_API_URL: &str = "https://api.uptimerobot.com/v2/getMonitors";

/// Monitors are requested in pages of this size
const PAGE_SIZE: usize = 50;

/// Timeout for a single page request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the UptimeRobot monitor API
///
/// The endpoint is configurable so tests (and self-hosted proxies) can
/// point it at a local server.
pub struct UptimeRobotClient {
    /// Endpoint URL for `getMonitors`
    api_url: String,

    /// HTTP client (reused across requests for efficiency)
    client: reqwest::Client,
}

impl UptimeRobotClient {
    /// Create a new client for the given endpoint
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// Fetch a single page of monitors
    ///
    /// A page is accepted only if the HTTP status is a success code and the
    /// envelope reports `stat == "ok"`. No caching and no retries here.
    #[instrument(skip(self, api_key))]
    pub async fn fetch_page(
        &self,
        api_key: &str,
        offset: usize,
        limit: usize,
    ) -> FetchResult<MonitorsPage> {
        trace!("requesting monitors at offset {offset}");

        let body = serde_json::json!({
            "api_key": api_key,
            "format": "json",
            "logs": 0,
            "offset": offset,
            "limit": limit,
        });

        let response = self
            .client
            .post(&self.api_url)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::ApiRejected(format!("HTTP {status}")));
        }

        let raw = response.text().await?;
        let page: MonitorsPage =
            serde_json::from_str(&raw).map_err(|err| FetchError::MalformedResponse(err.to_string()))?;

        if page.stat != "ok" {
            return Err(FetchError::ApiRejected(format!("stat \"{}\"", page.stat)));
        }

        Ok(page)
    }

    /// Fetch every monitor visible to the credential, merging all pages
    ///
    /// The first page reveals the total; further pages are fetched
    /// sequentially until the whole set is assembled. Monitors are
    /// concatenated in fetch order without deduplication or sorting.
    /// Any page failure aborts the whole fetch with that error.
    #[instrument(skip(self, api_key, cancel))]
    pub async fn fetch_all(
        &self,
        api_key: &str,
        cancel: &CancellationToken,
    ) -> FetchResult<Vec<Monitor>> {
        let first = self.fetch_page(api_key, 0, PAGE_SIZE).await?;

        // Without pagination metadata a single page is the complete set.
        let total = first
            .pagination
            .map(|p| p.total)
            .unwrap_or(first.monitors.len());
        let mut monitors = first.monitors;

        let mut offset = PAGE_SIZE;
        while offset < total {
            if cancel.is_cancelled() {
                debug!("cancelled after {} of {} monitors", monitors.len(), total);
                return Err(FetchError::Cancelled);
            }

            let page = self.fetch_page(api_key, offset, PAGE_SIZE).await?;
            monitors.extend(page.monitors);
            offset += PAGE_SIZE;
        }

        debug!("fetched {} monitors", monitors.len());
        Ok(monitors)
    }
}

/// Source of the complete monitor set
///
/// `MonitorService` fetches through this seam so tests can substitute a
/// scripted source for the real API client.
#[async_trait]
pub trait MonitorSource: Send + Sync {
    /// Fetch the full monitor set, honoring the cancellation token
    async fn fetch_all(
        &self,
        api_key: &str,
        cancel: &CancellationToken,
    ) -> FetchResult<Vec<Monitor>>;
}

#[async_trait]
impl MonitorSource for UptimeRobotClient {
    async fn fetch_all(
        &self,
        api_key: &str,
        cancel: &CancellationToken,
    ) -> FetchResult<Vec<Monitor>> {
        UptimeRobotClient::fetch_all(self, api_key, cancel).await
    }
}
