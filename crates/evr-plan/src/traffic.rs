//! Traffic simulation over the active route.
//!
//! A cosmetic-but-useful stress pass: random segments of the displayed
//! route pick up a delay marker at their midpoint and a small detour kink
//! in the polyline, and the ETA grows by a few minutes.  Driven by a seeded
//! [`PlanRng`] so a session replay produces the same delays.

use evr_core::PlanRng;

use crate::view::{LayerKind, MapView, MarkerKind, PathStyle};
use crate::{PlanError, PlanResult, Planner};

/// Probability that any given route segment picks up a delay.
const DELAY_PROBABILITY: f64 = 0.3;

/// Detour kink applied to the polyline at a delayed segment's midpoint,
/// in degrees.
const DETOUR_D_LAT: f32 = 0.0005;
const DETOUR_D_LON: f32 = -0.0005;

/// What one simulation pass did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TrafficReport {
    /// Number of segments that picked up a delay marker.
    pub delays: usize,
    /// The ETA after the bump, in whole minutes.
    pub eta_minutes: u32,
}

impl Planner {
    /// Run one traffic pass over the active route.
    ///
    /// Errors with [`PlanError::NothingToSimulate`] when no route is
    /// displayed.  The ETA bump (2–6 minutes) applies even when no segment
    /// happens to pick up a delay.
    pub fn simulate_traffic(
        &mut self,
        rng:  &mut PlanRng,
        view: &mut dyn MapView,
    ) -> PlanResult<TrafficReport> {
        let priority = self.priority;
        let route = self.route.as_mut().ok_or(PlanError::NothingToSimulate)?;

        let original = std::mem::take(&mut route.points);
        let mut modified = Vec::with_capacity(original.len() + original.len() / 2);
        let mut delays = 0usize;

        for (i, &point) in original.iter().enumerate() {
            modified.push(point);

            if i + 1 < original.len() && rng.gen_bool(DELAY_PROBABILITY) {
                let mid = point.midpoint(original[i + 1]);
                view.place_marker(MarkerKind::TrafficDelay, mid);
                modified.push(mid.offset(DETOUR_D_LAT, DETOUR_D_LON));
                delays += 1;
            }
        }

        route.points = modified;
        route.eta_minutes += rng.gen_range(2u32..7);
        let eta_minutes = route.eta_minutes;

        view.clear_layer(LayerKind::Route);
        view.draw_path(&route.points, PathStyle::for_priority(priority));

        Ok(TrafficReport { delays, eta_minutes })
    }
}
