//! Application configuration types.
//!
//! All configuration is explicit and injected at startup: data source
//! URLs and tuning knobs come from config.toml, the API key from
//! secret.json or the environment. Nothing here is ever a source
//! literal in the shipped binary.

use crate::geo::Coordinate;
use crate::scope::{DEFAULT_FILTER_CAP, DEFAULT_PROXIMITY_COUNT};
use serde::{Deserialize, Serialize};

/// Default Gemini model used when config.toml does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Fixed generation parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

/// Prompt wording variant.
///
/// Two near-duplicate orchestrators existed historically, differing in
/// emoji guidance and in whether the proximity path was present. Both
/// wordings are kept selectable rather than guessing which one is
/// authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptVariant {
    /// The original wording with denser emoji guidance.
    Baseline,
    /// The location-aware wording with sparser emoji guidance.
    #[default]
    LocationAware,
}

/// Item caps for the data-scoping paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopingConfig {
    /// Cap for the keyword-filtered path; valid range 8..=15.
    pub filter_cap: usize,
    /// Result count for the proximity path.
    pub proximity_count: usize,
}

impl Default for ScopingConfig {
    fn default() -> Self {
        Self {
            filter_cap: DEFAULT_FILTER_CAP,
            proximity_count: DEFAULT_PROXIMITY_COUNT,
        }
    }
}

/// The fully assembled application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gemini API key; supplied by secret.json or LAGOON_API_KEY.
    pub api_key: String,
    /// Gemini model name.
    pub model: String,
    /// Source URL of the jetty feature collection.
    pub jetty_source_url: String,
    /// Source URL of the route feature collection.
    pub route_source_url: String,
    /// Scoping caps.
    pub scoping: ScopingConfig,
    /// Generation parameters.
    pub generation: GenerationParams,
    /// Enables the proximity path and its prompt section.
    pub location_aware: bool,
    /// Prompt wording variant.
    pub prompt_variant: PromptVariant,
    /// Last-known device location; a terminal has no GPS, so the fix is
    /// supplied by configuration when present.
    pub device_location: Option<Coordinate>,
}

impl AppConfig {
    /// Validates invariants that serde defaults cannot express.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(crate::LagoonError::config(
                "API key is empty; set LAGOON_API_KEY or secret.json",
            ));
        }
        if !(8..=15).contains(&self.scoping.filter_cap) {
            return Err(crate::LagoonError::config(format!(
                "scoping.filter_cap must be within 8..=15, got {}",
                self.scoping.filter_cap
            )));
        }
        if self.scoping.proximity_count == 0 {
            return Err(crate::LagoonError::config(
                "scoping.proximity_count must be at least 1",
            ));
        }
        Ok(())
    }
}
