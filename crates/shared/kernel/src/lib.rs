//! Kernel utilities shared by the client apps.
//! Keep this crate UI-free: it owns configuration loading and the backend HTTP client.
//!
//! ## Health check
//! ```rust,no_run
//! # use vayana_kernel::prelude::*;
//! # async fn run() -> Result<(), ApiError> {
//! let client = ApiClient::new(&ApiConfig::default())?;
//! let status = check_health(&client).await;
//! println!("{status}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod health;
pub mod prelude;

pub use vayana_domain as domain;
