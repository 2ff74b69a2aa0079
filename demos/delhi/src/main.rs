//! delhi — scripted emergency-dispatch planning session.
//!
//! Runs an offline session over a synthetic central-Delhi network: place
//! start and end points, block an intersection, route around it with the
//! local Dijkstra engine, then run a seeded traffic pass.  Rendering goes
//! to a console `MapView` so every operation the planner performs is
//! visible.

mod network;

use anyhow::{Context, Result};

use evr_core::{GeoPoint, PlanRng, Priority};
use evr_graph::DijkstraRouter;
use evr_plan::{LayerKind, MapView, MarkerKind, PathStyle, Planner, SelectionMode};

use network::build_network;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;

/// Dispatch origin: a station near Connaught Place.
const STATION: GeoPoint = GeoPoint { lat: 28.6320, lon: 77.2160 };

/// Incident site: near AIIMS hospital.
const INCIDENT: GeoPoint = GeoPoint { lat: 28.5670, lon: 77.2105 };

// ── Console view ──────────────────────────────────────────────────────────────

/// A `MapView` that narrates every rendering operation to stdout.
struct ConsoleView;

impl MapView for ConsoleView {
    fn place_marker(&mut self, kind: MarkerKind, pos: GeoPoint) {
        println!("  [map] marker {kind:?} at {pos}");
    }

    fn draw_path(&mut self, points: &[GeoPoint], style: PathStyle) {
        println!(
            "  [map] path with {} points, {} @ {}px",
            points.len(),
            style.color,
            style.weight
        );
    }

    fn clear_layer(&mut self, layer: LayerKind) {
        println!("  [map] clear {layer:?}");
    }
}

// ── Session script ────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let (net, [_, india_gate, ..]) = build_network();
    let mut planner = Planner::new();
    let mut view = ConsoleView;

    println!("Priority: {}", planner.priority);
    println!("Mode: {}", planner.mode_label());

    // Place the endpoints.
    planner.handle_click(STATION, &mut view);
    planner.set_selection(SelectionMode::End);
    planner.handle_click(INCIDENT, &mut view);
    println!("Ready to route: {}", planner.ready_to_route());

    // First route: unobstructed.
    planner
        .route_offline(&net, &DijkstraRouter, &mut view)
        .context("initial route")?;
    let summary = planner.summary().context("summary after routing")?;
    println!("\n{summary}\n");

    // An accident closes India Gate circle; route again.
    planner.toggle_block_mode();
    println!("Mode: {}", planner.mode_label());
    planner.handle_click(net.node_pos[india_gate.index()], &mut view);
    for line in planner.blocked_list_lines() {
        println!("  blocked: {line}");
    }

    planner
        .route_offline(&net, &DijkstraRouter, &mut view)
        .context("route around blockage")?;
    let summary = planner.summary().context("summary after rerouting")?;
    println!("\n{summary}\n");

    // Lower the priority and see the ETA stretch.
    planner.set_priority(Priority::Low);
    planner
        .route_offline(&net, &DijkstraRouter, &mut view)
        .context("low-priority route")?;
    println!("\n{}\n", planner.summary().context("low-priority summary")?);

    // Traffic pass.
    let mut rng = PlanRng::new(SEED);
    let report = planner.simulate_traffic(&mut rng, &mut view)?;
    println!(
        "Traffic: {} delayed segments, ETA now {} minutes",
        report.delays, report.eta_minutes
    );

    Ok(())
}
