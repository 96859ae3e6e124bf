pub use crate::client::{ApiClient, ApiError, ApiErrorExt};
pub use crate::health::{HealthProbe, HealthStatus, check_health};
pub use vayana_domain::config::{ApiConfig, ClientConfig};
pub use vayana_domain::dto::{
    HealthResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};
