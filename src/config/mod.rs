pub mod types;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use std::path::Path;
pub use types::*;

/// Prefix for environment overrides, e.g. `PACUARE_MCP__HTTP__PORT=8080`
const ENV_PREFIX: &str = "PACUARE_MCP";

/// Load configuration from defaults, an optional TOML file and the environment.
///
/// The result is not validated; callers apply CLI overrides first and then
/// call [`validate_config`].
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(File::from(path));
    }

    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .with_context(|| match path {
            Some(path) => format!("Failed to load config from: {}", path.display()),
            None => "Failed to load config from environment".to_string(),
        })?;

    let app_config: AppConfig = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    Ok(app_config)
}

/// Validate the loaded configuration
pub fn validate_config(config: &AppConfig) -> Result<()> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.logging.level.as_str()) {
        anyhow::bail!(
            "Invalid log level '{}'. Valid levels: {}",
            config.logging.level,
            valid_levels.join(", ")
        );
    }

    let valid_formats = ["pretty", "json"];
    if !valid_formats.contains(&config.logging.format.as_str()) {
        anyhow::bail!(
            "Invalid log format '{}'. Valid formats: {}",
            config.logging.format,
            valid_formats.join(", ")
        );
    }

    let api_url = config.pacuare.api_url.as_str();
    if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
        anyhow::bail!(
            "Invalid Pacuare API URL '{}': must start with http:// or https://",
            api_url
        );
    }

    if config.pacuare.request_timeout_secs == 0 {
        anyhow::bail!("Pacuare request timeout must be greater than 0 seconds");
    }

    Ok(())
}
