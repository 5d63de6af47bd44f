//! Unified path management for lagoon configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/lagoon/            # Config directory
//! ├── config.toml              # Application configuration
//! └── secret.json              # API keys
//! ```

use lagoon_core::{LagoonError, error::Result};
use std::path::PathBuf;

/// Unified path management for lagoon.
pub struct LagoonPaths;

impl LagoonPaths {
    /// Returns the lagoon configuration directory, e.g. `~/.config/lagoon/`.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("lagoon"))
            .ok_or_else(|| LagoonError::config("Cannot determine config directory"))
    }

    /// Returns the path to config.toml.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to secret.json.
    pub fn secret_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("secret.json"))
    }
}
