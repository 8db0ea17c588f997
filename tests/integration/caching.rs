//! Integration tests for the monitor cache
//!
//! These tests verify that:
//! - Reads inside the freshness window are served without touching the API
//! - The window bound is exclusive: an entry exactly window-old is refetched
//! - A forced refresh bypasses a fresh cache entry
//! - A failed refresh leaves the previously cached entry untouched
//! - A corrupt cache slot is treated as a miss and healed by the next fetch

use assert_matches::assert_matches;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use upwatch::cache::CacheStore;
use upwatch::client::FetchError;

use crate::helpers::*;

#[tokio::test]
async fn test_fresh_cache_serves_without_refetch() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, 1, 0, &[create_monitor_json(1, "Alpha", 2)]).await;

    let (service, clock, _store) = create_test_service(&mock_server, 60);
    let cancel = CancellationToken::new();

    let first = service.get(TEST_API_KEY, false, &cancel).await.unwrap();
    assert_eq!(first.len(), 1);

    // One second short of the window
    clock.advance(chrono::Duration::seconds(59));

    let second = service.get(TEST_API_KEY, false, &cancel).await.unwrap();
    assert_eq!(second, first);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "the second read must come from cache");
}

#[tokio::test]
async fn test_entry_exactly_window_old_is_refetched() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(API_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(create_page_json(1, 0, &[create_monitor_json(1, "Old", 2)])),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, 1, 0, &[create_monitor_json(1, "New", 2)]).await;

    let (service, clock, store) = create_test_service(&mock_server, 60);
    let cancel = CancellationToken::new();

    let first = service.get(TEST_API_KEY, false, &cancel).await.unwrap();
    assert_eq!(first[0].name, "Old");

    clock.advance(chrono::Duration::seconds(60));

    let second = service.get(TEST_API_KEY, false, &cancel).await.unwrap();
    assert_eq!(second[0].name, "New");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);

    // The refetch replaced the stored entry
    assert!(store.get().unwrap().contains("New"));
}

#[tokio::test]
async fn test_forced_refresh_bypasses_fresh_cache() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(API_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(create_page_json(1, 0, &[create_monitor_json(1, "Before", 2)])),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, 1, 0, &[create_monitor_json(1, "After", 2)]).await;

    let (service, _clock, _store) = create_test_service(&mock_server, 60);
    let cancel = CancellationToken::new();

    let first = service.get(TEST_API_KEY, false, &cancel).await.unwrap();
    assert_eq!(first[0].name, "Before");

    // The entry is still fresh, but the caller wants live data
    let second = service.get(TEST_API_KEY, true, &cancel).await.unwrap();
    assert_eq!(second[0].name, "After");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_failed_refresh_keeps_cached_entry() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(API_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(create_page_json(1, 0, &[create_monitor_json(1, "Stable", 2)])),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let (service, _clock, store) = create_test_service(&mock_server, 60);
    let cancel = CancellationToken::new();

    let seeded = service.get(TEST_API_KEY, false, &cancel).await.unwrap();
    let snapshot = store.get().unwrap();

    let err = service.get(TEST_API_KEY, true, &cancel).await.unwrap_err();
    assert_matches!(err, FetchError::ApiRejected(_));

    // The failed refresh did not touch the stored entry
    assert_eq!(store.get().unwrap(), snapshot);

    // And the retained entry still serves unforced reads
    let third = service.get(TEST_API_KEY, false, &cancel).await.unwrap();
    assert_eq!(third, seeded);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test]
async fn test_corrupt_slot_falls_through_to_fetch() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, 1, 0, &[create_monitor_json(1, "Alpha", 2)]).await;

    let (service, _clock, store) = create_test_service(&mock_server, 60);
    store.set("{ not valid json".to_string());

    let cancel = CancellationToken::new();
    let fetched = service.get(TEST_API_KEY, false, &cancel).await.unwrap();
    assert_eq!(fetched.len(), 1);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    // The successful fetch replaced the unreadable slot
    assert!(store.get().unwrap().contains("Alpha"));
}
