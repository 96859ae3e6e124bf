use serde_json::json;
use vayana_kernel::prelude::*;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    let config = ApiConfig { base_url: format!("{}/", server.uri()), ..ApiConfig::default() };
    ApiClient::new(&config).expect("client should build")
}

#[test]
fn base_url_is_trimmed() {
    let config =
        ApiConfig { base_url: "http://localhost:8080///".to_owned(), ..ApiConfig::default() };
    let client = ApiClient::new(&config).expect("client should build");
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[test]
fn relative_base_url_is_rejected() {
    let config = ApiConfig { base_url: "api/v1".to_owned(), ..ApiConfig::default() };
    let err = ApiClient::new(&config).expect_err("relative URL must fail");
    assert!(matches!(err, ApiError::InvalidConfiguration { .. }));
}

#[tokio::test]
async fn health_reads_status_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "ok", "time": "2024-01-01T00:00:00Z" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server).health().await.expect("health should succeed");
    assert_eq!(body.status.as_deref(), Some("ok"));
}

#[tokio::test]
async fn health_without_status_still_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "hi" })))
        .mount(&server)
        .await;

    let body = client_for(&server).health().await.expect("2xx health should succeed");
    assert_eq!(body, HealthResponse { status: None });
}

#[tokio::test]
async fn health_with_plain_text_body_has_no_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("up"))
        .mount(&server)
        .await;

    let body = client_for(&server).health().await.expect("2xx health should succeed");
    assert!(body.status.is_none());
}

#[tokio::test]
async fn health_rejection_keeps_status_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "error": "draining" })))
        .mount(&server)
        .await;

    let err = client_for(&server).health().await.expect_err("503 should be rejected");
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.user_message(), "draining");
}

#[tokio::test]
async fn login_posts_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "email": "dev@vayana.in", "password": "hunter2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "jwt" })))
        .expect(1)
        .mount(&server)
        .await;

    let request =
        LoginRequest { email: "dev@vayana.in".to_owned(), password: "hunter2".to_owned() };
    let response = client_for(&server).login(&request).await.expect("login should succeed");
    assert_eq!(response.token, "jwt");
}

#[tokio::test]
async fn login_rejection_carries_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "error": "Invalid email or password" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .login(&LoginRequest::default())
        .await
        .expect_err("login should be rejected");

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message(), "Invalid email or password");
}

#[tokio::test]
async fn register_returns_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({ "username": "dev", "email": "dev@vayana.in", "password": "pw" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "User registered successfully" })),
        )
        .mount(&server)
        .await;

    let request = RegisterRequest {
        username: "dev".to_owned(),
        email: "dev@vayana.in".to_owned(),
        password: "pw".to_owned(),
    };
    let response = client_for(&server).register(&request).await.expect("register should pass");
    assert_eq!(response.message, "User registered successfully");
}

#[tokio::test]
async fn plain_text_errors_are_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database offline"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .register(&RegisterRequest::default())
        .await
        .expect_err("register should fail");

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.user_message(), "database offline");
}
