//! Route presentation: ETA scaling and summary formatting.

use std::fmt;

use evr_core::{GeoPoint, Priority};

/// Which engine produced the active route.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RouteSource {
    /// Fetched from the external OSRM service.
    Osrm,
    /// Computed locally over the road-network graph.
    Dijkstra,
}

impl RouteSource {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteSource::Osrm     => "OSRM",
            RouteSource::Dijkstra => "Dijkstra",
        }
    }
}

impl fmt::Display for RouteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scale a base (civilian) travel duration by the dispatch priority and
/// round to whole minutes.
///
/// High priority cuts 30 % off the base time, medium 15 %.
pub fn adjusted_eta_minutes(duration_secs: f32, priority: Priority) -> u32 {
    let base_minutes = duration_secs / 60.0;
    (base_minutes * priority.eta_factor()).round() as u32
}

/// The active route as rendered: geometry plus the numbers shown to the
/// dispatcher.
#[derive(Clone, PartialEq, Debug)]
pub struct RouteDisplay {
    /// Polyline in lat/lon order, start first.  Traffic simulation may
    /// splice detour points into this.
    pub points: Vec<GeoPoint>,
    /// Total distance in metres.
    pub distance_m: f32,
    /// Unscaled travel duration in seconds, as produced by the engine.
    pub base_duration_secs: f32,
    /// Priority-adjusted ETA in whole minutes.  Traffic simulation may
    /// bump this.
    pub eta_minutes: u32,
    pub source: RouteSource,
}

/// The route-info panel contents, ready for display.
#[derive(Clone, PartialEq, Debug)]
pub struct RouteSummary {
    pub source:      RouteSource,
    pub distance_km: f32,
    pub priority:    Priority,
    pub eta_minutes: u32,
}

impl RouteSummary {
    /// The ETA line shown beneath the summary.
    pub fn eta_line(&self) -> String {
        format!("Estimated Arrival Time: {} minutes", self.eta_minutes)
    }
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm Used: {}", self.source)?;
        writeln!(f, "Distance: {:.2} km", self.distance_km)?;
        writeln!(f, "Road Conditions: {} priority", self.priority)?;
        write!(f, "{}", self.eta_line())
    }
}
