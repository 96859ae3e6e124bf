#![windows_subsystem = "windows"]

use anyhow::Context;
use vayana_domain::config::ClientConfig;
use vayana_kernel::client::ApiClient;
use vayana_kernel::config::load_config;
use vayana_logger::{LevelFilter, Logger};
use vayana_web::ClientApp;

fn main() -> anyhow::Result<()> {
    let cfg: ClientConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let level: LevelFilter =
        cfg.log.level.parse().with_context(|| format!("Unknown log level '{}'", cfg.log.level))?;

    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).json(cfg.log.json);
    let _logger = match &cfg.log.path {
        Some(path) => builder.path(path).init()?,
        None => builder.init()?,
    };

    let client = ApiClient::new(&cfg.api).context("Failed to create the API client")?;

    ClientApp::new(client).with_window(cfg.window).launch();

    Ok(())
}
