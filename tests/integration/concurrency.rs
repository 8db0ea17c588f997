//! Concurrency tests for shared monitor access
//!
//! These tests verify that:
//! - Parallel reads against a warm cache are all served from the single slot
//! - Parallel cold reads all succeed and leave a usable cache entry
//! - A cancelled walk caches nothing and the next fetch recovers

use std::sync::Arc;

use assert_matches::assert_matches;
use tokio_util::sync::CancellationToken;
use wiremock::MockServer;

use upwatch::cache::CacheStore;
use upwatch::client::FetchError;

use crate::helpers::*;

#[tokio::test]
async fn test_parallel_warm_reads_share_cache() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, 2, 0, &create_monitor_batch(1, 2)).await;

    let (service, _clock, _store) = create_test_service(&mock_server, 60);
    let service = Arc::new(service);
    let cancel = CancellationToken::new();

    // Warm the cache
    service.get(TEST_API_KEY, false, &cancel).await.unwrap();

    let mut tasks = vec![];
    for _ in 0..8 {
        let service = service.clone();
        let cancel = cancel.clone();
        tasks.push(tokio::spawn(async move {
            service.get(TEST_API_KEY, false, &cancel).await
        }));
    }

    for task in tasks {
        let monitors = task.await.unwrap().unwrap();
        assert_eq!(monitors.len(), 2);
    }

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "warm reads must not hit the API");
}

#[tokio::test]
async fn test_parallel_cold_reads_all_succeed() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, 3, 0, &create_monitor_batch(1, 3)).await;

    let (service, _clock, store) = create_test_service(&mock_server, 60);
    let service = Arc::new(service);

    // There is no request coalescing: racing cold reads may each hit the
    // API, but every caller gets the full set and the slot ends up populated.
    let mut tasks = vec![];
    for _ in 0..4 {
        let service = service.clone();
        tasks.push(tokio::spawn(async move {
            let cancel = CancellationToken::new();
            service.get(TEST_API_KEY, false, &cancel).await
        }));
    }

    for task in tasks {
        let monitors = task.await.unwrap().unwrap();
        assert_eq!(monitors.len(), 3);
    }

    assert!(store.get().is_some());
}

#[tokio::test]
async fn test_fetch_after_cancellation_recovers() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, 75, 0, &create_monitor_batch(1, 50)).await;
    mount_page(&mock_server, 75, 50, &create_monitor_batch(51, 25)).await;

    let (service, _clock, store) = create_test_service(&mock_server, 60);

    let cancelled = CancellationToken::new();
    cancelled.cancel();

    let err = service
        .get(TEST_API_KEY, false, &cancelled)
        .await
        .unwrap_err();
    assert_matches!(err, FetchError::Cancelled);
    assert!(
        store.get().is_none(),
        "a cancelled walk must not cache partial results"
    );

    let cancel = CancellationToken::new();
    let monitors = service.get(TEST_API_KEY, false, &cancel).await.unwrap();
    assert_eq!(monitors.len(), 75);
    assert!(store.get().is_some());
}
