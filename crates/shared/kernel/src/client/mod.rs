//! HTTP client for the Vayana backend.
//!
//! One [`ApiClient`] is built at start-up and shared by the pages; cloning is cheap
//! because `reqwest::Client` is reference counted internally.

mod error;

pub use error::{ApiError, ApiErrorExt};

use reqwest::{Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use vayana_domain::config::ApiConfig;
use vayana_domain::constants::{HEALTH_ENDPOINT, LOGIN_ENDPOINT, REGISTER_ENDPOINT};
use vayana_domain::dto::{
    ErrorBody, HealthResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
}

impl ApiClient {
    /// Builds a client bound to `config.base_url`.
    ///
    /// # Errors
    /// * [`ApiError::InvalidConfiguration`] if the base URL is not an absolute URL.
    /// * [`ApiError::Transport`] if the TLS backend cannot be initialised.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim_end_matches('/');

        Url::parse(base_url).map_err(|e| ApiError::InvalidConfiguration {
            message: format!("'{}' is not a valid base URL: {e}", config.base_url).into(),
            context: None,
        })?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { http, base_url: base_url.into() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /health`.
    ///
    /// A 2xx answer always succeeds: a body that is not a JSON object, or one
    /// without `status`, yields a response with no status.
    ///
    /// # Errors
    /// Transport failures and non-2xx statuses.
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        debug!(path = HEALTH_ENDPOINT, "GET");
        let response =
            self.http.get(self.url(HEALTH_ENDPOINT)).send().await.context(HEALTH_ENDPOINT)?;
        let response = ensure_success(response, HEALTH_ENDPOINT).await?;

        let body = response.text().await.context(HEALTH_ENDPOINT)?;
        Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            debug!(error = %e, "Health body carries no status");
            HealthResponse::default()
        }))
    }

    /// `POST /auth/login`.
    ///
    /// # Errors
    /// [`ApiError::Rejected`] carries the backend's error message for bad credentials.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json(LOGIN_ENDPOINT, request).await
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    /// [`ApiError::Rejected`] carries the backend's error message.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.post_json(REGISTER_ENDPOINT, request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post_json<B, T>(&self, path: &'static str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        debug!(path, "POST");
        let response = self.http.post(self.url(path)).json(body).send().await.context(path)?;
        decode(response, path).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response, path: &'static str) -> Result<T, ApiError> {
    ensure_success(response, path).await?.json::<T>().await.context(path)
}

/// Passes 2xx responses through and turns everything else into [`ApiError::Rejected`].
async fn ensure_success(response: Response, path: &'static str) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // Gin handlers answer with `{"error": "..."}`; anything else is passed through raw.
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body).map_or_else(
        |_| if body.is_empty() { status.to_string() } else { body.clone() },
        |b| b.error,
    );

    warn!(path, status = status.as_u16(), %message, "Backend rejected request");

    Err(ApiError::Rejected {
        status: status.as_u16(),
        message: message.into(),
        context: Some(path.into()),
    })
}
