//! Secret configuration file storage.
//!
//! Provides loading of secret configuration from ~/.config/lagoon/secret.json.
//!
//! # Security Note
//!
//! This storage reads plaintext JSON files. The secret.json file should
//! have appropriate file permissions (e.g., 600) to prevent unauthorized
//! access.

use lagoon_core::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The on-disk shape of secret.json.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiSecret>,
}

/// Gemini credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiSecret {
    pub api_key: String,
}

/// Storage for the secret configuration file (secret.json).
///
/// Read-only: it never writes or modifies secret files, and it does not
/// validate the credentials it returns.
pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    /// Creates storage with the default path (~/.config/lagoon/secret.json).
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: crate::paths::LagoonPaths::secret_file()?,
        })
    }

    /// Creates storage with a custom path (for testing).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the secret configuration; a missing file yields the
    /// defaults so the environment variable can still supply the key.
    pub fn load(&self) -> Result<SecretConfig> {
        if !self.path.exists() {
            return Ok(SecretConfig::default());
        }
        let content = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
