//! Assembly of the runtime [`AppConfig`] from file, secret, and
//! environment sources.

use crate::config_storage::{ConfigStorage, FileConfig};
use crate::secret_storage::{SecretConfig, SecretStorage};
use lagoon_core::config::{AppConfig, DEFAULT_MODEL};
use lagoon_core::{LagoonError, error::Result};
use tracing::debug;

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "LAGOON_API_KEY";

/// Loads and validates the application configuration from the default
/// locations plus the environment.
pub fn load_app_config() -> Result<AppConfig> {
    let file = ConfigStorage::new()?.load()?;
    let secrets = SecretStorage::new()?.load()?;
    let env_key = std::env::var(API_KEY_ENV).ok();
    assemble(file, secrets, env_key)
}

/// Pure assembly step, separated from the I/O for testing.
///
/// Precedence for the API key: environment variable over secret.json.
pub fn assemble(
    file: FileConfig,
    secrets: SecretConfig,
    env_key: Option<String>,
) -> Result<AppConfig> {
    let api_key = env_key
        .filter(|key| !key.trim().is_empty())
        .or(secrets.gemini.map(|gemini| gemini.api_key))
        .ok_or_else(|| {
            LagoonError::config(format!(
                "No API key configured; set {API_KEY_ENV} or add a gemini section to secret.json"
            ))
        })?;

    let sources = file.sources.ok_or_else(|| {
        LagoonError::config("No data sources configured; add a [sources] section to config.toml")
    })?;

    let config = AppConfig {
        api_key,
        model: file.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        jetty_source_url: sources.jetties,
        route_source_url: sources.routes,
        scoping: file.scoping,
        generation: file.generation,
        location_aware: file.location_aware,
        prompt_variant: file.prompt_variant,
        device_location: file.device_location,
    };
    config.validate()?;

    debug!(model = %config.model, location_aware = config.location_aware, "configuration assembled");
    Ok(config)
}
