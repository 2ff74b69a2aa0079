//! Road blockages: positions marked impassable by the dispatcher.
//!
//! Matching is **exact coordinate equality** — no distance tolerance.  A
//! blockage placed at a node's exact position removes every edge touching
//! that node, in both directions.  The penalty weight is carried through the
//! contract but not consumed by the distance computation: blockage is a hard
//! skip, not a soft penalty.

use evr_core::GeoPoint;

/// A geographic position currently impassable, plus a penalty weight.
///
/// The weight records how strongly the active dispatch priority penalizes
/// this blockage; the search ignores it (hard skip).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockedSegment {
    pub pos:    GeoPoint,
    pub weight: f32,
}

impl BlockedSegment {
    pub fn new(pos: GeoPoint, weight: f32) -> Self {
        Self { pos, weight }
    }
}

/// `true` if `pos` exactly equals any blocked position.
///
/// Blockage sets are small (hand-placed by a dispatcher), so a linear scan
/// is the contract here — no index.
#[inline]
pub fn is_blocked(blocked: &[BlockedSegment], pos: GeoPoint) -> bool {
    blocked.iter().any(|b| b.pos == pos)
}
