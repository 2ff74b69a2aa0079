//! `evr-core` — foundational types for the evroute emergency routing toolkit.
//!
//! This crate is a dependency of every other `evr-*` crate.  It intentionally
//! has no `evr-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`ids`]      | `NodeId`, `EdgeId`                                   |
//! | [`geo`]      | `GeoPoint`, haversine distance, midpoint/offset      |
//! | [`priority`] | `Priority` enum (emergency dispatch level)           |
//! | [`rng`]      | `PlanRng` (seeded, reproducible)                     |
//! | [`error`]    | `CoreError`, `CoreResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod error;
pub mod geo;
pub mod ids;
pub mod priority;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId};
pub use priority::Priority;
pub use rng::PlanRng;
