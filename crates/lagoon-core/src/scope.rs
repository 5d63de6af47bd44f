//! Data scoping: narrowing the full dataset to a bounded, relevant subset.
//!
//! The scoped context is what gets serialized into the prompt, so every
//! path enforces a hard item cap. Three paths exist: a small sample when
//! no keywords were found, a keyword-filtered subset, and a
//! distance-ranked subset for proximity questions.

use crate::geo::{Coordinate, RankedJetty, nearest_jetties};
use crate::model::{Dataset, Jetty, Route};
use serde::Serialize;

/// Items returned per collection when no keywords were found.
pub const SAMPLE_CAP: usize = 3;

/// Default cap for the keyword-filtered path (the location-aware
/// variant's value; the baseline used 15).
pub const DEFAULT_FILTER_CAP: usize = 8;

/// The baseline variant's filter cap, kept reachable through config.
pub const BASELINE_FILTER_CAP: usize = 15;

/// Default result count for the proximity path.
pub const DEFAULT_PROXIMITY_COUNT: usize = 5;

/// How a scoped context was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Provenance {
    /// No keywords were found; a small sample in dataset order.
    Sampled,
    /// Records matched at least one of the listed keywords.
    Filtered { keywords: Vec<String> },
    /// Jetties ranked by distance from the user's location.
    DistanceRanked,
}

impl Provenance {
    /// Human-readable label embedded in the prompt.
    pub fn label(&self) -> String {
        match self {
            Provenance::Sampled => "sample of the network (no keywords found)".to_string(),
            Provenance::Filtered { keywords } => {
                format!("filtered, relevant to: {}", keywords.join(", "))
            }
            Provenance::DistanceRanked => {
                "jetties ranked by distance from the user's location".to_string()
            }
        }
    }
}

/// An ephemeral, per-request view of the dataset bounded in size.
///
/// Never persisted; built fresh for every send.
#[derive(Debug, Clone, Serialize)]
pub struct ScopedContext {
    pub jetties: Vec<Jetty>,
    pub routes: Vec<Route>,
    /// Populated only on the proximity path.
    pub ranked_jetties: Vec<RankedJetty>,
    pub provenance: Provenance,
}

/// Scopes the dataset by keyword filtering.
///
/// With an empty keyword set this returns the first [`SAMPLE_CAP`]
/// jetties and routes in dataset order. Otherwise a record matches when
/// any of its string fields, lowercased, contains any keyword as a
/// substring; routes also match through either operator sub-structure.
/// A non-empty keyword set that matches nothing still yields the
/// `Filtered` provenance with empty lists, never a silent fallback to
/// sampling.
pub fn scope_by_keywords(dataset: &Dataset, keywords: &[String], filter_cap: usize) -> ScopedContext {
    if keywords.is_empty() {
        return ScopedContext {
            jetties: dataset.jetties.iter().take(SAMPLE_CAP).cloned().collect(),
            routes: dataset.routes.iter().take(SAMPLE_CAP).cloned().collect(),
            ranked_jetties: Vec::new(),
            provenance: Provenance::Sampled,
        };
    }

    let jetties: Vec<Jetty> = dataset
        .jetties
        .iter()
        .filter(|jetty| matches_any(&jetty.text_fields(), keywords))
        .take(filter_cap)
        .cloned()
        .collect();

    let routes: Vec<Route> = dataset
        .routes
        .iter()
        .filter(|route| matches_any(&route.text_fields(), keywords))
        .take(filter_cap)
        .cloned()
        .collect();

    ScopedContext {
        jetties,
        routes,
        ranked_jetties: Vec::new(),
        provenance: Provenance::Filtered {
            keywords: keywords.to_vec(),
        },
    }
}

/// Scopes the dataset to the `count` jetties nearest to `origin`.
///
/// The caller must already hold a location fix; this function never
/// consults the location collaborator itself.
pub fn scope_by_proximity(dataset: &Dataset, origin: Coordinate, count: usize) -> ScopedContext {
    ScopedContext {
        jetties: Vec::new(),
        routes: Vec::new(),
        ranked_jetties: nearest_jetties(origin, &dataset.jetties, count),
        provenance: Provenance::DistanceRanked,
    }
}

fn matches_any(fields: &[&str], keywords: &[String]) -> bool {
    fields.iter().any(|field| {
        let lowered = field.to_lowercase();
        keywords.iter().any(|keyword| lowered.contains(keyword))
    })
}
