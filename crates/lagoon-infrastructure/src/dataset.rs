//! Dataset loading: fetches the two feature-collection documents and
//! maps them into the domain [`Dataset`].
//!
//! The consumed shape is GeoJSON-like:
//! `{ features: [ { properties: {...}, geometry: { coordinates: [...] } } ] }`.
//! Jetty geometries are points (`[lon, lat]`), route geometries are
//! polylines. No authentication, no retry; a failed load is logged by
//! the caller and leaves the dataset unset.

use lagoon_core::error::Result;
use lagoon_core::geo::Coordinate;
use lagoon_core::model::{Dataset, Jetty, Route, RouteOperators};
use lagoon_core::LagoonError;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

/// HTTP client for the two dataset documents.
#[derive(Clone, Default)]
pub struct DatasetClient {
    client: Client,
}

impl DatasetClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches both documents and assembles the dataset.
    pub async fn fetch(&self, jetty_url: &str, route_url: &str) -> Result<Dataset> {
        let jetties = self.fetch_json::<JettyCollection>(jetty_url).await?;
        let routes = self.fetch_json::<RouteCollection>(route_url).await?;

        let dataset = Dataset::new(
            jetties.features.into_iter().map(Jetty::from).collect(),
            routes.features.into_iter().map(Route::from).collect(),
        );
        info!(
            jetties = dataset.jetties.len(),
            routes = dataset.routes.len(),
            "transit dataset loaded"
        );
        Ok(dataset)
    }

    async fn fetch_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| LagoonError::transport(format!("dataset fetch failed: {err}")))?;
        response
            .json()
            .await
            .map_err(|err| LagoonError::transport(format!("dataset decode failed: {err}")))
    }
}

#[derive(Deserialize)]
struct JettyCollection {
    features: Vec<JettyFeature>,
}

#[derive(Deserialize)]
struct JettyFeature {
    properties: JettyProperties,
    geometry: PointGeometry,
}

#[derive(Deserialize)]
struct JettyProperties {
    id: String,
    name: String,
    #[serde(default)]
    area: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    ownership: String,
    #[serde(default)]
    condition: String,
    #[serde(default)]
    offers_charter: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    landmark: Option<String>,
}

#[derive(Deserialize)]
struct PointGeometry {
    /// GeoJSON order: [longitude, latitude]
    coordinates: [f64; 2],
}

impl From<JettyFeature> for Jetty {
    fn from(feature: JettyFeature) -> Self {
        let [longitude, latitude] = feature.geometry.coordinates;
        let p = feature.properties;
        Jetty {
            id: p.id,
            name: p.name,
            area: p.area,
            status: p.status,
            ownership: p.ownership,
            condition: p.condition,
            offers_charter: p.offers_charter,
            location: Coordinate::new(latitude, longitude),
            description: p.description,
            landmark: p.landmark,
        }
    }
}

#[derive(Deserialize)]
struct RouteCollection {
    features: Vec<RouteFeature>,
}

#[derive(Deserialize)]
struct RouteFeature {
    properties: RouteProperties,
    geometry: LineGeometry,
}

#[derive(Deserialize)]
struct RouteProperties {
    id: String,
    origin: String,
    destination: String,
    #[serde(default)]
    stops: Vec<String>,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    operators: RouteOperators,
}

#[derive(Deserialize)]
struct LineGeometry {
    /// GeoJSON order: [longitude, latitude] per vertex
    coordinates: Vec<[f64; 2]>,
}

impl From<RouteFeature> for Route {
    fn from(feature: RouteFeature) -> Self {
        let p = feature.properties;
        Route {
            id: p.id,
            origin: p.origin,
            destination: p.destination,
            stops: p.stops,
            duration: p.duration,
            polyline: feature
                .geometry
                .coordinates
                .into_iter()
                .map(|[longitude, latitude]| Coordinate::new(latitude, longitude))
                .collect(),
            operators: p.operators,
        }
    }
}
