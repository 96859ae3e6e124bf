//! Backend liveness as shown on the landing page.

use crate::client::{ApiClient, ApiError};
use std::fmt;
use std::future::Future;
use tracing::{error, info};
use vayana_domain::constants::{STATUS_ERROR, STATUS_LOADING};
use vayana_domain::dto::HealthResponse;

/// Anything that can answer a health request.
pub trait HealthProbe {
    fn health(&self) -> impl Future<Output = Result<HealthResponse, ApiError>> + Send;
}

impl HealthProbe for ApiClient {
    fn health(&self) -> impl Future<Output = Result<HealthResponse, ApiError>> + Send {
        Self::health(self)
    }
}

/// Display state of a single health check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HealthStatus {
    /// Request still in flight.
    #[default]
    Loading,
    /// Status text reported by the backend.
    Ready(String),
    /// The request failed; the cause has already been logged.
    Failed,
}

impl HealthStatus {
    /// Text shown after `Backend Status: `.
    ///
    /// An empty status from the backend reads as still loading.
    pub fn label(&self) -> &str {
        match self {
            Self::Ready(status) if !status.is_empty() => status,
            Self::Loading | Self::Ready(_) => STATUS_LOADING,
            Self::Failed => STATUS_ERROR,
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Backend Status: {}", self.label())
    }
}

/// Performs one health request and folds the outcome into a [`HealthStatus`].
///
/// No retry. A failure is logged exactly once and reported as [`HealthStatus::Failed`].
/// A response without a status settles as an empty [`HealthStatus::Ready`].
pub async fn check_health<P: HealthProbe>(probe: &P) -> HealthStatus {
    match probe.health().await {
        Ok(HealthResponse { status }) => {
            let status = status.unwrap_or_default();
            info!(%status, "Backend health check completed");
            HealthStatus::Ready(status)
        },
        Err(err) => {
            error!(error = %err, "Backend health check failed");
            HealthStatus::Failed
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_status() {
        assert_eq!(HealthStatus::Loading.to_string(), "Backend Status: Loading...");
        assert_eq!(HealthStatus::Ready("ok".to_owned()).to_string(), "Backend Status: ok");
        assert_eq!(HealthStatus::Failed.to_string(), "Backend Status: Error");
    }

    #[test]
    fn empty_status_reads_as_loading() {
        assert_eq!(HealthStatus::Ready(String::new()).label(), "Loading...");
        assert_eq!(HealthStatus::default().label(), "Loading...");
    }
}
