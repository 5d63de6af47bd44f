//! Application configuration file storage.
//!
//! Loads config.toml from ~/.config/lagoon/. The file carries data
//! source URLs and tuning knobs; secrets live in secret.json.

use lagoon_core::config::{GenerationParams, PromptVariant, ScopingConfig};
use lagoon_core::error::Result;
use lagoon_core::geo::Coordinate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The on-disk shape of config.toml.
///
/// Everything except the data sources has a sensible default; the
/// source URLs are deliberately not defaulted in code so no endpoint is
/// ever embedded as a source literal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    /// Gemini model name; falls back to the built-in default when absent.
    #[serde(default)]
    pub model: Option<String>,
    /// Enables the proximity path.
    #[serde(default = "default_location_aware")]
    pub location_aware: bool,
    /// Prompt wording variant.
    #[serde(default)]
    pub prompt_variant: PromptVariant,
    /// Data source URLs; required.
    #[serde(default)]
    pub sources: Option<SourcesConfig>,
    /// Scoping caps.
    #[serde(default)]
    pub scoping: ScopingConfig,
    /// Generation parameters.
    #[serde(default)]
    pub generation: GenerationParams,
    /// Last-known device location, if the operator supplied one.
    #[serde(default)]
    pub device_location: Option<Coordinate>,
}

fn default_location_aware() -> bool {
    true
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            model: None,
            location_aware: default_location_aware(),
            prompt_variant: PromptVariant::default(),
            sources: None,
            scoping: ScopingConfig::default(),
            generation: GenerationParams::default(),
            device_location: None,
        }
    }
}

/// URLs of the two dataset documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    pub jetties: String,
    pub routes: String,
}

/// Storage for the application configuration file (config.toml).
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    /// Creates storage with the default path (~/.config/lagoon/config.toml).
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: crate::paths::LagoonPaths::config_file()?,
        })
    }

    /// Creates storage with a custom path (for testing).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the configuration; a missing file yields the defaults.
    pub fn load(&self) -> Result<FileConfig> {
        if !self.path.exists() {
            return Ok(FileConfig::default());
        }
        let content = fs::read_to_string(&self.path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let storage = ConfigStorage::with_path(dir.path().join("config.toml"));

        let config = storage.load().unwrap();
        assert!(config.location_aware);
        assert!(config.sources.is_none());
        assert_eq!(config.scoping.filter_cap, 8);
    }

    #[test]
    fn loads_full_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
model = "gemini-2.5-flash"
location_aware = false
prompt_variant = "baseline"

[sources]
jetties = "https://data.test/jetties.json"
routes = "https://data.test/routes.json"

[scoping]
filter_cap = 15
proximity_count = 5

[generation]
temperature = 0.5
top_k = 32
top_p = 0.9
max_output_tokens = 512

[device_location]
latitude = 6.45
longitude = 3.40
"#,
        )
        .unwrap();

        let config = ConfigStorage::with_path(&path).load().unwrap();
        assert!(!config.location_aware);
        assert_eq!(config.prompt_variant, PromptVariant::Baseline);
        assert_eq!(config.scoping.filter_cap, 15);
        assert_eq!(config.sources.unwrap().jetties, "https://data.test/jetties.json");
        assert_eq!(config.device_location.unwrap().latitude, 6.45);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not valid toml [[[").unwrap();

        assert!(ConfigStorage::with_path(&path).load().is_err());
    }
}
