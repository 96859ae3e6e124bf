use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};
use vayana_kernel::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Counts `ERROR` events emitted while installed.
#[derive(Clone, Default)]
struct ErrorCounter(Arc<AtomicUsize>);

impl ErrorCounter {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

struct StaticProbe(Result<Option<&'static str>, &'static str>);

impl HealthProbe for StaticProbe {
    async fn health(&self) -> Result<HealthResponse, ApiError> {
        match self.0 {
            Ok(status) => Ok(HealthResponse { status: status.map(str::to_owned) }),
            Err(message) => Err(ApiError::from(message)),
        }
    }
}

#[tokio::test]
async fn successful_probe_reports_status() {
    let status = check_health(&StaticProbe(Ok(Some("ok")))).await;
    assert_eq!(status, HealthStatus::Ready("ok".to_owned()));
    assert_eq!(status.to_string(), "Backend Status: ok");
}

#[tokio::test]
async fn missing_status_reads_as_loading_without_logging() {
    let counter = ErrorCounter::default();
    let _guard = tracing::subscriber::set_default(
        tracing_subscriber::registry().with(counter.clone()),
    );

    let status = check_health(&StaticProbe(Ok(None))).await;

    assert_eq!(status, HealthStatus::Ready(String::new()));
    assert_eq!(status.to_string(), "Backend Status: Loading...");
    assert_eq!(counter.count(), 0);
}

#[tokio::test]
async fn failed_probe_reports_error_and_logs_once() {
    let counter = ErrorCounter::default();
    let _guard = tracing::subscriber::set_default(
        tracing_subscriber::registry().with(counter.clone()),
    );

    let status = check_health(&StaticProbe(Err("connection refused"))).await;

    assert_eq!(status, HealthStatus::Failed);
    assert_eq!(status.to_string(), "Backend Status: Error");
    assert_eq!(counter.count(), 1);
}

#[tokio::test]
async fn client_probe_against_mock_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&ApiConfig { base_url: server.uri(), ..ApiConfig::default() })
        .expect("client should build");

    assert_eq!(check_health(&client).await.to_string(), "Backend Status: ok");
}

#[tokio::test]
async fn server_error_becomes_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = ApiClient::new(&ApiConfig { base_url: server.uri(), ..ApiConfig::default() })
        .expect("client should build");

    assert_eq!(check_health(&client).await, HealthStatus::Failed);
}

#[tokio::test]
async fn successful_bodies_without_status_read_as_loading() {
    let cases = [
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "message": "hi" })),
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": null })),
        ResponseTemplate::new(200).set_body_string("up"),
    ];

    for template in cases {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(template)
            .mount(&server)
            .await;

        let client = ApiClient::new(&ApiConfig { base_url: server.uri(), ..ApiConfig::default() })
            .expect("client should build");

        assert_eq!(check_health(&client).await.to_string(), "Backend Status: Loading...");
    }
}
