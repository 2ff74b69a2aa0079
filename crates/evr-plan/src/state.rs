//! The planning-session state machine.
//!
//! A `Planner` owns everything a dispatch session accumulates: the click
//! selection mode, start/end points, the blocked-road list, the active
//! priority, and the currently displayed route.  Handler methods mutate the
//! state and drive the [`MapView`] collaborator; nothing here performs I/O.

use evr_core::{GeoPoint, Priority};
use evr_graph::{BlockedSegment, RoadNetwork, Router};

use crate::display::{adjusted_eta_minutes, RouteDisplay, RouteSource, RouteSummary};
use crate::view::{LayerKind, MapView, MarkerKind, PathStyle};
use crate::{PlanError, PlanResult};

/// What the next (non-block-mode) map click places.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum SelectionMode {
    #[default]
    Start,
    End,
}

/// The effect a map click had on the session.
#[derive(Clone, PartialEq, Debug)]
pub enum ClickOutcome {
    PlacedStart(GeoPoint),
    PlacedEnd(GeoPoint),
    AddedBlock(BlockedSegment),
    /// A click on an exactly matching blocked position removes it.
    RemovedBlock(GeoPoint),
}

/// One dispatcher planning session.
#[derive(Default)]
pub struct Planner {
    pub selection:  SelectionMode,
    pub block_mode: bool,
    pub priority:   Priority,
    pub(crate) start:   Option<GeoPoint>,
    pub(crate) end:     Option<GeoPoint>,
    pub(crate) blocked: Vec<BlockedSegment>,
    pub(crate) route:   Option<RouteDisplay>,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn start(&self) -> Option<GeoPoint> {
        self.start
    }

    pub fn end(&self) -> Option<GeoPoint> {
        self.end
    }

    pub fn blocked(&self) -> &[BlockedSegment] {
        &self.blocked
    }

    pub fn route(&self) -> Option<&RouteDisplay> {
        self.route.as_ref()
    }

    /// `true` once both endpoints are placed (the "calculate" control may
    /// be enabled).
    pub fn ready_to_route(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Label for the current-mode indicator.
    pub fn mode_label(&self) -> &'static str {
        if self.block_mode {
            "Road Block Mode"
        } else {
            match self.selection {
                SelectionMode::Start => "Start Point",
                SelectionMode::End   => "End Point",
            }
        }
    }

    // ── Mode handlers ─────────────────────────────────────────────────────

    pub fn set_selection(&mut self, mode: SelectionMode) {
        self.selection = mode;
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Flip road-block placement mode; returns the new state.
    pub fn toggle_block_mode(&mut self) -> bool {
        self.block_mode = !self.block_mode;
        self.block_mode
    }

    // ── Click handling ────────────────────────────────────────────────────

    /// Dispatch a map click according to the current mode.
    pub fn handle_click(&mut self, pos: GeoPoint, view: &mut dyn MapView) -> ClickOutcome {
        if self.block_mode {
            return self.toggle_block_at(pos, view);
        }
        match self.selection {
            SelectionMode::Start => {
                self.start = Some(pos);
                view.clear_layer(LayerKind::Start);
                view.place_marker(MarkerKind::Start, pos);
                ClickOutcome::PlacedStart(pos)
            }
            SelectionMode::End => {
                self.end = Some(pos);
                view.clear_layer(LayerKind::End);
                view.place_marker(MarkerKind::End, pos);
                ClickOutcome::PlacedEnd(pos)
            }
        }
    }

    /// Add a blockage at `pos`, or remove one already at exactly `pos`.
    ///
    /// The recorded penalty weight comes from the active priority.
    fn toggle_block_at(&mut self, pos: GeoPoint, view: &mut dyn MapView) -> ClickOutcome {
        if let Some(idx) = self.blocked.iter().position(|b| b.pos == pos) {
            self.blocked.remove(idx);
            // Re-render the surviving block markers.
            view.clear_layer(LayerKind::Blocks);
            for b in &self.blocked {
                view.place_marker(MarkerKind::RoadBlock, b.pos);
            }
            ClickOutcome::RemovedBlock(pos)
        } else {
            let segment = BlockedSegment::new(pos, self.priority.block_weight());
            self.blocked.push(segment);
            view.place_marker(MarkerKind::RoadBlock, pos);
            ClickOutcome::AddedBlock(segment)
        }
    }

    /// Drop endpoints, route, and every blockage; clear all layers.
    pub fn clear_all(&mut self, view: &mut dyn MapView) {
        self.start = None;
        self.end = None;
        self.route = None;
        self.blocked.clear();
        for layer in [
            LayerKind::Start,
            LayerKind::End,
            LayerKind::Route,
            LayerKind::Blocks,
            LayerKind::Traffic,
        ] {
            view.clear_layer(layer);
        }
    }

    // ── Routing ───────────────────────────────────────────────────────────

    /// Install a route produced by any engine as the active display.
    ///
    /// The ETA is scaled by the active priority; the polyline is redrawn
    /// with the priority's style.
    pub fn apply_route(
        &mut self,
        points:        Vec<GeoPoint>,
        distance_m:    f32,
        duration_secs: f32,
        source:        RouteSource,
        view:          &mut dyn MapView,
    ) -> &RouteDisplay {
        let display = RouteDisplay {
            eta_minutes: adjusted_eta_minutes(duration_secs, self.priority),
            base_duration_secs: duration_secs,
            points,
            distance_m,
            source,
        };

        view.clear_layer(LayerKind::Route);
        view.draw_path(&display.points, PathStyle::for_priority(self.priority));

        &*self.route.insert(display)
    }

    /// Route between the placed endpoints over the local road network,
    /// honoring the session's blockages.
    ///
    /// Endpoints are snapped to their nearest road nodes.  Edge weights are
    /// interpreted as seconds of travel for ETA purposes; the displayed
    /// distance is the summed great-circle length of the node chain.
    pub fn route_offline(
        &mut self,
        network: &RoadNetwork,
        router:  &dyn Router,
        view:    &mut dyn MapView,
    ) -> PlanResult<&RouteDisplay> {
        let (start, end) = self
            .start
            .zip(self.end)
            .ok_or(PlanError::MissingEndpoints)?;

        let from = network.snap_to_node(start).ok_or(PlanError::EmptyNetwork)?;
        let to = network.snap_to_node(end).ok_or(PlanError::EmptyNetwork)?;

        let route = router.route(network, from, to, &self.blocked)?;

        let points: Vec<GeoPoint> = route
            .nodes
            .iter()
            .map(|n| network.node_pos[n.index()])
            .collect();
        let distance_m: f32 = points
            .windows(2)
            .map(|w| w[0].distance_m(w[1]))
            .sum();

        Ok(self.apply_route(
            points,
            distance_m,
            route.total_weight,
            RouteSource::Dijkstra,
            view,
        ))
    }

    // ── Presentation ──────────────────────────────────────────────────────

    /// Summary panel for the active route, if one is displayed.
    pub fn summary(&self) -> Option<RouteSummary> {
        self.route.as_ref().map(|r| RouteSummary {
            source:      r.source,
            distance_km: r.distance_m / 1000.0,
            priority:    self.priority,
            eta_minutes: r.eta_minutes,
        })
    }

    /// One formatted line per blockage, in placement order.
    pub fn blocked_list_lines(&self) -> Vec<String> {
        self.blocked
            .iter()
            .map(|b| format!("Lat: {:.4}, Lng: {:.4}", b.pos.lat, b.pos.lon))
            .collect()
    }
}
