//! Helper functions for integration tests

use std::sync::Arc;

use chrono::Utc;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use upwatch::cache::{FreshnessCache, ManualClock, MemoryStore};
use upwatch::client::UptimeRobotClient;
use upwatch::service::MonitorService;

pub const TEST_API_KEY: &str = "u1337-integration";

/// Path component of the getMonitors endpoint
pub const API_PATH: &str = "/v2/getMonitors";

pub fn create_monitor_json(id: u64, name: &str, status: i64) -> Value {
    json!({
        "id": id,
        "friendly_name": name,
        "url": format!("https://{}.example.com", name.to_lowercase()),
        "status": status,
        "all_time_uptime_ratio": "99.95"
    })
}

/// A run of `count` healthy monitors with ids starting at `first_id`
pub fn create_monitor_batch(first_id: u64, count: usize) -> Vec<Value> {
    (0..count)
        .map(|offset| {
            let id = first_id + offset as u64;
            create_monitor_json(id, &format!("monitor-{id:03}"), 2)
        })
        .collect()
}

pub fn create_page_json(total: usize, offset: usize, monitors: &[Value]) -> Value {
    json!({
        "stat": "ok",
        "pagination": { "offset": offset, "limit": 50, "total": total },
        "monitors": monitors
    })
}

/// Mount a mock that answers the page request at `offset`
pub async fn mount_page(mock_server: &MockServer, total: usize, offset: usize, monitors: &[Value]) {
    Mock::given(method("POST"))
        .and(path(API_PATH))
        .and(body_partial_json(json!({ "offset": offset })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(create_page_json(total, offset, monitors)),
        )
        .mount(mock_server)
        .await;
}

pub fn create_test_client(mock_server: &MockServer) -> UptimeRobotClient {
    UptimeRobotClient::new(format!("{}{API_PATH}", mock_server.uri()))
}

/// Service wired to a mock server, with a hand-driven clock and an inspectable store
pub fn create_test_service(
    mock_server: &MockServer,
    cache_seconds: i64,
) -> (MonitorService, Arc<ManualClock>, Arc<MemoryStore>) {
    let clock = Arc::new(ManualClock::new(Utc::now()));
    let store = Arc::new(MemoryStore::new());
    let cache = FreshnessCache::new(
        store.clone(),
        clock.clone(),
        chrono::Duration::seconds(cache_seconds),
    );
    let service = MonitorService::new(Arc::new(create_test_client(mock_server)), cache);

    (service, clock, store)
}
