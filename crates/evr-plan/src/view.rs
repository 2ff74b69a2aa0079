//! The rendering collaborator.
//!
//! The planner never talks to a map library; it emits three primitive
//! operations through [`MapView`].  A GUI adapter forwards them to its
//! widget; [`TraceView`] records them for assertions; [`NoopView`] discards
//! them for headless use.

use evr_core::{GeoPoint, Priority};

/// What a marker denotes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MarkerKind {
    Start,
    End,
    RoadBlock,
    TrafficDelay,
}

/// Logical display layers the planner clears independently.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum LayerKind {
    Start,
    End,
    Route,
    Blocks,
    Traffic,
}

/// Route polyline styling, derived from the dispatch priority.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PathStyle {
    /// CSS color string handed through to the rendering layer.
    pub color: &'static str,
    /// Stroke weight in pixels.
    pub weight: u32,
}

impl PathStyle {
    /// High priority renders red and heavy; everything else the standard
    /// blue.
    pub fn for_priority(priority: Priority) -> PathStyle {
        match priority {
            Priority::High => PathStyle { color: "#ff0000", weight: 6 },
            _              => PathStyle { color: "#00a8ff", weight: 5 },
        }
    }
}

/// Rendering collaborator driven by the planner.
///
/// Implementations should be cheap: the planner may clear and redraw a
/// layer on every gesture.
pub trait MapView {
    fn place_marker(&mut self, kind: MarkerKind, pos: GeoPoint);
    fn draw_path(&mut self, points: &[GeoPoint], style: PathStyle);
    fn clear_layer(&mut self, layer: LayerKind);
}

/// A [`MapView`] that discards every operation.
///
/// Useful for headless planning (batch ETA computation, tests that only
/// care about state).
pub struct NoopView;

impl MapView for NoopView {
    fn place_marker(&mut self, _kind: MarkerKind, _pos: GeoPoint) {}
    fn draw_path(&mut self, _points: &[GeoPoint], _style: PathStyle) {}
    fn clear_layer(&mut self, _layer: LayerKind) {}
}

/// One recorded rendering operation.
#[derive(Clone, PartialEq, Debug)]
pub enum RenderOp {
    Marker(MarkerKind, GeoPoint),
    Path(Vec<GeoPoint>, PathStyle),
    Clear(LayerKind),
}

/// A [`MapView`] that records operations in order.
#[derive(Default)]
pub struct TraceView {
    pub ops: Vec<RenderOp>,
}

impl TraceView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markers of the given kind placed so far, in order.
    pub fn markers(&self, kind: MarkerKind) -> Vec<GeoPoint> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                RenderOp::Marker(k, pos) if *k == kind => Some(*pos),
                _ => None,
            })
            .collect()
    }

    /// The most recently drawn path, if any.
    pub fn last_path(&self) -> Option<(&[GeoPoint], PathStyle)> {
        self.ops.iter().rev().find_map(|op| match op {
            RenderOp::Path(points, style) => Some((points.as_slice(), *style)),
            _ => None,
        })
    }
}

impl MapView for TraceView {
    fn place_marker(&mut self, kind: MarkerKind, pos: GeoPoint) {
        self.ops.push(RenderOp::Marker(kind, pos));
    }

    fn draw_path(&mut self, points: &[GeoPoint], style: PathStyle) {
        self.ops.push(RenderOp::Path(points.to_vec(), style));
    }

    fn clear_layer(&mut self, layer: LayerKind) {
        self.ops.push(RenderOp::Clear(layer));
    }
}
