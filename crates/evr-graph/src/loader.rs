//! CSV network loader — enabled with the `csv` Cargo feature.
//!
//! # CSV format
//!
//! Two files: one for nodes, one for edges.  Node `id`s are arbitrary
//! external identifiers (e.g. exported intersection ids); they are remapped
//! to dense `NodeId`s in file order.
//!
//! ```csv
//! id,lat,lon
//! 101,28.6139,77.2090
//! 102,28.6200,77.2150
//! ```
//!
//! ```csv
//! from,to,len_m,weight,oneway
//! 101,102,850.0,64.0,false
//! ```
//!
//! `oneway = false` adds both directions (the common case for city
//! streets); `true` adds only `from → to`.
//!
//! Use [`RoadNetworkBuilder`](crate::RoadNetworkBuilder) directly for
//! non-CSV sources.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use evr_core::{GeoPoint, NodeId};

use crate::network::{RoadNetwork, RoadNetworkBuilder};
use crate::{GraphError, GraphResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct NodeRecord {
    id:  i64,
    lat: f32,
    lon: f32,
}

#[derive(Deserialize)]
struct EdgeRecord {
    from:   i64,
    to:     i64,
    len_m:  f32,
    weight: f32,
    oneway: bool,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a road network from node and edge CSV files.
///
/// # Errors
///
/// [`GraphError::Csv`] on malformed rows or edges referencing unknown node
/// ids, [`GraphError::Io`] on file errors.
pub fn load_from_csv(nodes: &Path, edges: &Path) -> GraphResult<RoadNetwork> {
    let node_file = std::fs::File::open(nodes).map_err(GraphError::Io)?;
    let edge_file = std::fs::File::open(edges).map_err(GraphError::Io)?;
    load_from_readers(node_file, edge_file)
}

/// Like [`load_from_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass `std::io::Cursor`s) or loading from network
/// streams.
pub fn load_from_readers<N: Read, E: Read>(nodes: N, edges: E) -> GraphResult<RoadNetwork> {
    // ── Parse node rows, remapping external ids to dense NodeIds ─────────
    let mut node_reader = csv::Reader::from_reader(nodes);
    let mut builder = RoadNetworkBuilder::new();
    let mut id_map: HashMap<i64, NodeId> = HashMap::new();

    for result in node_reader.deserialize::<NodeRecord>() {
        let row = result.map_err(|e| GraphError::Csv(e.to_string()))?;
        let id = builder.add_node(GeoPoint::new(row.lat, row.lon));
        if id_map.insert(row.id, id).is_some() {
            return Err(GraphError::Csv(format!("duplicate node id {}", row.id)));
        }
    }

    // ── Parse edge rows ───────────────────────────────────────────────────
    let mut edge_reader = csv::Reader::from_reader(edges);

    for result in edge_reader.deserialize::<EdgeRecord>() {
        let row = result.map_err(|e| GraphError::Csv(e.to_string()))?;
        let (from, to) = match (id_map.get(&row.from), id_map.get(&row.to)) {
            (Some(&f), Some(&t)) => (f, t),
            _ => {
                return Err(GraphError::Csv(format!(
                    "edge {} -> {} references unknown node id",
                    row.from, row.to
                )));
            }
        };

        if row.oneway {
            builder.add_directed_edge(from, to, row.len_m, row.weight);
        } else {
            builder.add_road(from, to, row.len_m, row.weight);
        }
    }

    Ok(builder.build())
}
