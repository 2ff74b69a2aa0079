//! Shared Delhi road network definition.
//!
//! An 8-node synthetic network around central New Delhi.  Edge weights are
//! seconds of travel at unhurried city speeds.

use evr_core::{GeoPoint, NodeId};
use evr_graph::{RoadNetwork, RoadNetworkBuilder};

/// Build the 8-node central-Delhi road network.
///
/// Returns `(network, [connaught_place, india_gate, aiims, red_fort,
/// karol_bagh, lodhi_garden, ito_junction, chandni_chowk])`.
pub fn build_network() -> (RoadNetwork, [NodeId; 8]) {
    let mut b = RoadNetworkBuilder::new();

    let connaught_place = b.add_node(GeoPoint::new(28.6315, 77.2167));
    let india_gate      = b.add_node(GeoPoint::new(28.6129, 77.2295));
    let aiims           = b.add_node(GeoPoint::new(28.5672, 77.2100));
    let red_fort        = b.add_node(GeoPoint::new(28.6562, 77.2410));
    let karol_bagh      = b.add_node(GeoPoint::new(28.6519, 77.1909));
    let lodhi_garden    = b.add_node(GeoPoint::new(28.5931, 77.2197));
    let ito_junction    = b.add_node(GeoPoint::new(28.6289, 77.2405));
    let chandni_chowk   = b.add_node(GeoPoint::new(28.6506, 77.2303));

    // Bidirectional arterials; (length m, travel s).
    b.add_road(connaught_place, india_gate,    2_400.0, 300.0);
    b.add_road(connaught_place, karol_bagh,    3_200.0, 420.0);
    b.add_road(connaught_place, ito_junction,  2_300.0, 280.0);
    b.add_road(connaught_place, chandni_chowk, 2_600.0, 360.0);
    b.add_road(connaught_place, lodhi_garden,  4_600.0, 700.0);
    b.add_road(india_gate,      lodhi_garden,  2_400.0, 290.0);
    b.add_road(india_gate,      ito_junction,  2_100.0, 260.0);
    b.add_road(lodhi_garden,    aiims,         3_100.0, 380.0);
    b.add_road(ito_junction,    red_fort,      3_100.0, 390.0);
    b.add_road(chandni_chowk,   red_fort,      1_300.0, 180.0);
    b.add_road(chandni_chowk,   karol_bagh,    4_300.0, 540.0);

    let net = b.build();
    (net, [
        connaught_place,
        india_gate,
        aiims,
        red_fort,
        karol_bagh,
        lodhi_garden,
        ito_junction,
        chandni_chowk,
    ])
}
