//! Geospatial helpers: great-circle distance and nearest-jetty ranking.

use crate::model::Jetty;
use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers, as used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two coordinates in kilometers.
///
/// Pure haversine; deterministic for any pair of inputs.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// A jetty annotated with its distance from a reference point.
#[derive(Debug, Clone, Serialize)]
pub struct RankedJetty {
    pub jetty: Jetty,
    pub distance_km: f64,
}

/// Returns the `count` jetties nearest to `origin`, sorted ascending by
/// distance. Ties keep the input order (stable sort).
pub fn nearest_jetties(origin: Coordinate, jetties: &[Jetty], count: usize) -> Vec<RankedJetty> {
    let mut ranked: Vec<RankedJetty> = jetties
        .iter()
        .map(|jetty| RankedJetty {
            jetty: jetty.clone(),
            distance_km: haversine_km(origin, jetty.location),
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(count);
    ranked
}
