//! `evr-graph` — road network, spatial indexing, and blockage-aware search.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`network`]  | `RoadNetwork` (CSR + R-tree), `RoadNetworkBuilder`         |
//! | [`queue`]    | `MinQueue` — insertion-ordered min priority queue          |
//! | [`blockage`] | `BlockedSegment`, exact-position matching                  |
//! | [`search`]   | `find_shortest_paths`, `ShortestPaths`, `Router`, `DijkstraRouter` |
//! | [`loader`]   | `load_from_csv` (feature = `"csv"` only)                   |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `csv`   | Enables CSV network loading via the `csv` crate.            |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.          |

pub mod blockage;
pub mod error;
pub mod network;
pub mod queue;
pub mod search;

#[cfg(feature = "csv")]
pub mod loader;


pub use blockage::BlockedSegment;
pub use error::{GraphError, GraphResult};
pub use network::{RoadNetwork, RoadNetworkBuilder};
pub use queue::MinQueue;
pub use search::{find_shortest_paths, DijkstraRouter, Route, Router, ShortestPaths};
