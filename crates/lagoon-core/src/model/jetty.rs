//! Jetty domain entity.

use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};

/// A named ferry boarding point with a fixed geographic location.
///
/// Loaded once from the jetty feature collection and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jetty {
    /// Stable identifier from the source dataset
    pub id: String,
    /// Display name, e.g. "Ebute Ero Jetty"
    pub name: String,
    /// Administrative area (local government area)
    pub area: String,
    /// Operational status, e.g. "Operational" / "Under Construction"
    pub status: String,
    /// Ownership, e.g. "State" / "Private"
    pub ownership: String,
    /// Quality rating of the facility, e.g. "Good" / "Fair" / "Poor"
    pub condition: String,
    /// Whether charter services are offered at this jetty
    #[serde(default)]
    pub offers_charter: bool,
    /// Geographic position of the boarding point
    pub location: Coordinate,
    /// Free-text description from the source dataset
    #[serde(default)]
    pub description: Option<String>,
    /// Nearby landmark used for wayfinding
    #[serde(default)]
    pub landmark: Option<String>,
}

impl Jetty {
    /// All string-valued fields considered by keyword filtering.
    pub fn text_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.area.as_str(),
            self.status.as_str(),
            self.ownership.as_str(),
            self.condition.as_str(),
        ];
        if let Some(description) = &self.description {
            fields.push(description.as_str());
        }
        if let Some(landmark) = &self.landmark {
            fields.push(landmark.as_str());
        }
        fields
    }
}
