use serde::Deserialize;
use std::path::PathBuf;

/// Top-level client configuration.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub window: WindowConfig,
    pub log: LogConfig,
}

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout. `None` waits for the transport to give up.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

/// Native window settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Directory for rolling log files; console only when unset.
    pub path: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_owned(),
            timeout_secs: None,
            user_agent: concat!("vayana-client/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "Vayana".to_owned(), width: 1200.0, height: 800.0 }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), path: None, json: false }
    }
}
