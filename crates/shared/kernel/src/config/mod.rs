use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

const DEFAULT_CONFIG_FILE: &str = "client";
const ENV_PREFIX: &str = "VAYANA";
const ENV_SEPARATOR: &str = "__";

/// Error type for configuration loading.
#[vayana_derive::app_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration struct from an optional file with environment overrides.
///
/// Sources, lowest priority first:
/// 1. **File**: `path`, or `client` in the working directory. The extension may be
///    omitted (`client` finds `client.toml`, `client.json`, ...). A missing file is not
///    an error, so every field falls back to its `Default`.
/// 2. **Environment**: variables prefixed with `VAYANA__`, nested keys separated by
///    double underscores (`VAYANA__API__BASE_URL` maps to `api.base_url`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if a source is malformed or the merged values do not
/// deserialize into `T`.
///
/// # Example
/// ```rust
/// use vayana_kernel::config::load_config;
/// use vayana_kernel::domain::config::ClientConfig;
///
/// let cfg: ClientConfig = load_config(Some("config/missing")).unwrap_or_default();
/// assert!(!cfg.api.base_url.is_empty());
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    info!(path = %path.display(), "Loading client configuration");

    Config::builder()
        .add_source(File::from(path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
