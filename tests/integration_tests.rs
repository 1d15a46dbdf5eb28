//! Integration tests using a mock HTTP server
//!
//! Tests the full end-to-end flow: fetch config → concurrent page requests →
//! classification → aggregated result.

use pagehaul::{fetch_report, Credentials, FetchConfig, Fetcher, HttpExecutor, PageFailure};
use pagehaul::{ExecutorConfig, FetchReport};
use serde_json::json;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer, endpoint: &str) -> FetchConfig {
    // Surface page-failure warnings when tests run with RUST_LOG set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let credentials = Credentials::new("k3y", "acme", "example.com");
    FetchConfig::new(endpoint, credentials)
        .with_base_url(Url::parse(&server.uri()).unwrap())
}

/// Mount one page of an array-bodied endpoint
async fn mount_page(server: &MockServer, endpoint: &str, page: u64, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn run(config: &FetchConfig) -> FetchReport {
    fetch_report(config).await.unwrap()
}

// ============================================================================
// Pagination Flow
// ============================================================================

#[tokio::test]
async fn test_fetches_until_short_page() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/widgets", 1, json!([{"id": 1}, {"id": 2}])).await;
    mount_page(&mock_server, "/widgets", 2, json!([{"id": 3}, {"id": 4}])).await;
    mount_page(&mock_server, "/widgets", 3, json!([{"id": 5}])).await;
    mount_page(&mock_server, "/widgets", 4, json!([])).await;

    let config = test_config(&mock_server, "/widgets")
        .with_per_page(2)
        .with_batch_size(2);

    let report = run(&config).await;

    assert_eq!(report.items.len(), 5);
    assert_eq!(report.batches, 2);
    assert_eq!(report.pages_fetched, 4);
    assert!(report.is_complete());
}

#[tokio::test]
async fn test_single_short_page() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/widgets", 1, json!([{"id": 1}])).await;

    let config = test_config(&mock_server, "/widgets")
        .with_per_page(200)
        .with_batch_size(1);

    let report = run(&config).await;

    assert_eq!(report.items, vec![json!({"id": 1})]);
    assert_eq!(report.batches, 1);
}

#[tokio::test]
async fn test_sends_auth_params_and_accept_header() {
    let mock_server = MockServer::start().await;

    // base64("k3y:x")
    Mock::given(method("GET"))
        .and(path("/widgets"))
        .and(header("Authorization", "Basic azN5Ong="))
        .and(header("Accept", "application/json"))
        .and(query_param("state", "active"))
        .and(query_param("per_page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server, "/widgets")
        .with_per_page(2)
        .with_batch_size(1)
        .with_param("state", "active");

    let report = run(&config).await;

    // The mock only matches with the full request shape; an empty first page
    // ends pagination immediately.
    assert!(report.items.is_empty());
    assert_eq!(report.batches, 1);
}

#[tokio::test]
async fn test_extractor_unwraps_response_envelope() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/subscriptions.json",
        1,
        json!({"subscriptions": [{"id": 1}, {"id": 2}]}),
    )
    .await;
    mount_page(
        &mock_server,
        "/subscriptions.json",
        2,
        json!({"subscriptions": []}),
    )
    .await;

    let config = test_config(&mock_server, "/subscriptions.json")
        .with_per_page(2)
        .with_batch_size(2)
        .with_extractor(|body| {
            body["subscriptions"]
                .as_array()
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("missing subscriptions key"))
        });

    let report = run(&config).await;

    assert_eq!(report.items, vec![json!({"id": 1}), json!({"id": 2})]);
}

// ============================================================================
// Failure Handling
// ============================================================================

#[tokio::test]
async fn test_server_error_skips_page_and_continues() {
    let mock_server = MockServer::start().await;

    mount_page(&mock_server, "/widgets", 1, json!([{"id": 1}, {"id": 2}])).await;
    Mock::given(method("GET"))
        .and(path("/widgets"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/widgets", 3, json!([{"id": 5}])).await;
    mount_page(&mock_server, "/widgets", 4, json!([])).await;

    let config = test_config(&mock_server, "/widgets")
        .with_per_page(2)
        .with_batch_size(2);

    let report = run(&config).await;

    // Page 2's failure neither stops the first batch nor aborts the fetch;
    // the short page 3 in the second batch ends it.
    assert_eq!(report.items.len(), 3);
    assert_eq!(report.batches, 2);
    assert_eq!(report.failed_pages.len(), 1);
    assert_eq!(report.failed_pages[0].page, 2);
    assert_eq!(
        report.failed_pages[0].failure,
        PageFailure::HttpStatus { status: 500 }
    );
    assert!(!report.is_complete());
}

#[tokio::test]
async fn test_timeout_classified_not_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 1}, {"id": 2}]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/widgets", 2, json!([])).await;

    let config = test_config(&mock_server, "/widgets")
        .with_per_page(2)
        .with_batch_size(2);

    let executor =
        HttpExecutor::with_config(ExecutorConfig::new(2).with_timeout(Duration::from_millis(50)));
    let report = Fetcher::new(executor).fetch_report(&config).await.unwrap();

    // Page 1 timed out; the empty page 2 still ends pagination.
    assert!(report.items.is_empty());
    assert_eq!(report.failed_pages.len(), 1);
    assert_eq!(report.failed_pages[0].page, 1);
    assert_eq!(report.failed_pages[0].failure, PageFailure::TimedOut);
}

#[tokio::test]
async fn test_unparseable_success_body_aborts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/widgets"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>surprise</html>"))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server, "/widgets")
        .with_per_page(2)
        .with_batch_size(1);

    let err = fetch_report(&config).await.unwrap_err();
    assert!(matches!(err, pagehaul::Error::JsonParse(_)));
}
