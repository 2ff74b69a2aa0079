//! OSRM wire types and their domain conversion.
//!
//! OSRM speaks GeoJSON: coordinates arrive as `[lon, lat]` pairs.  The
//! conversion into [`FetchedRoute`] flips them into the `lat`/`lon` order
//! the rest of the toolkit uses — keep that flip here, at the boundary.

use serde::Deserialize;

use evr_core::GeoPoint;

// ── Wire format ───────────────────────────────────────────────────────────────

/// Top-level body of an OSRM `route/v1` response.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// `"Ok"` on success; anything else is a routing failure
    /// (`"NoRoute"`, `"NoSegment"`…).
    pub code: String,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

/// One route alternative.
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Total distance in metres.
    pub distance: f64,
    /// Total travel duration in seconds.
    pub duration: f64,
    pub geometry: Geometry,
}

/// GeoJSON LineString geometry (`geometries=geojson`).
#[derive(Debug, Deserialize)]
pub struct Geometry {
    /// `[lon, lat]` pairs along the route.
    pub coordinates: Vec<[f64; 2]>,
}

// ── Domain result ─────────────────────────────────────────────────────────────

/// A route as fetched from the service, in toolkit conventions.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedRoute {
    /// Route geometry in `lat`/`lon` order, start first.
    pub points: Vec<GeoPoint>,
    /// Total distance in metres.
    pub distance_m: f32,
    /// Base (civilian) travel duration in seconds, before any priority
    /// scaling.
    pub duration_secs: f32,
}

impl From<OsrmRoute> for FetchedRoute {
    fn from(route: OsrmRoute) -> Self {
        let points = route
            .geometry
            .coordinates
            .iter()
            .map(|&[lon, lat]| GeoPoint::new(lat as f32, lon as f32))
            .collect();
        FetchedRoute {
            points,
            distance_m: route.distance as f32,
            duration_secs: route.duration as f32,
        }
    }
}
