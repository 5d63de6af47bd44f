//! Route domain entity.

use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};

/// A scheduled ferry service between two points.
///
/// Routes may be served by a public-sector operator, a private-sector
/// operator, or both; the two sub-structures carry independent fares and
/// schedules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Stable identifier from the source dataset
    pub id: String,
    /// Name of the origin jetty
    pub origin: String,
    /// Name of the destination jetty
    pub destination: String,
    /// Intermediate stops, in travel order
    #[serde(default)]
    pub stops: Vec<String>,
    /// Overall journey duration, e.g. "25 minutes"
    pub duration: String,
    /// Polyline of the waterway path
    #[serde(default)]
    pub polyline: Vec<Coordinate>,
    /// Operator details keyed by category
    #[serde(default)]
    pub operators: RouteOperators,
}

/// Operator details for the two operator categories of a route.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteOperators {
    /// Public-sector operator (state ferry service), if any
    #[serde(default)]
    pub public_sector: Option<OperatorDetails>,
    /// Private-sector operator, if any
    #[serde(default)]
    pub private_sector: Option<OperatorDetails>,
}

/// Fare and schedule information for one operator of a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorDetails {
    /// Fare description, e.g. "N1500 per trip"
    pub fare: String,
    /// Operating hours, e.g. "6:30am - 7:00pm"
    pub hours: String,
    /// Departure frequency, e.g. "Every 30 minutes"
    pub frequency: String,
    /// Accepted payment methods
    #[serde(default)]
    pub payment_methods: Vec<String>,
    /// Boat types in service on this route
    #[serde(default)]
    pub boat_types: Vec<String>,
    /// Free-text schedule notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl OperatorDetails {
    fn text_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.fare.as_str(),
            self.hours.as_str(),
            self.frequency.as_str(),
        ];
        fields.extend(self.payment_methods.iter().map(String::as_str));
        fields.extend(self.boat_types.iter().map(String::as_str));
        if let Some(notes) = &self.notes {
            fields.push(notes.as_str());
        }
        fields
    }
}

impl Route {
    /// All string-valued fields considered by keyword filtering, including
    /// both operator sub-structures.
    pub fn text_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.origin.as_str(),
            self.destination.as_str(),
            self.duration.as_str(),
        ];
        fields.extend(self.stops.iter().map(String::as_str));
        if let Some(public) = &self.operators.public_sector {
            fields.extend(public.text_fields());
        }
        if let Some(private) = &self.operators.private_sector {
            fields.extend(private.text_fields());
        }
        fields
    }
}
