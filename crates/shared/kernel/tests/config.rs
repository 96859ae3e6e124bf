use std::fs;
use tempfile::tempdir;
use vayana_kernel::config::load_config;
use vayana_kernel::domain::config::ClientConfig;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().expect("temp dir");
    let cfg: ClientConfig =
        load_config(Some(dir.path().join("absent.toml"))).expect("defaults should load");
    assert_eq!(cfg.api.base_url, "http://localhost:8080");
}

#[test]
fn toml_file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("client.toml");
    fs::write(
        &file,
        r#"
[api]
base_url = "https://api.vayana.dev"
timeout_secs = 3

[window]
title = "Vayana Staging"
"#,
    )?;

    let cfg: ClientConfig = load_config(Some(&file))?;
    assert_eq!(cfg.api.base_url, "https://api.vayana.dev");
    assert_eq!(cfg.api.timeout_secs, Some(3));
    assert_eq!(cfg.window.title, "Vayana Staging");
    assert_eq!(cfg.log.level, "info");
    Ok(())
}

#[test]
fn malformed_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("client.toml");
    fs::write(&file, "[api]\ntimeout_secs = \"soon\"\n")?;

    assert!(load_config::<ClientConfig>(Some(&file)).is_err());
    Ok(())
}
