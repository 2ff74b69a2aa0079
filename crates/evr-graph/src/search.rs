//! Blockage-aware single-source shortest paths (Dijkstra) and the routing
//! trait built on top of it.
//!
//! # Contract
//!
//! [`find_shortest_paths`] is a pure, synchronous function of its inputs:
//! no I/O, no shared state, no cancellation.  The network and the blockage
//! list are immutable snapshots for the duration of one call, so concurrent
//! calls over the same network are independent.
//!
//! # Blockage rule
//!
//! An edge is excluded when **either** endpoint's position exactly equals
//! any blocked position.  This is coarser than blocking only the segment
//! between two matched endpoints, and the coordinate match carries no
//! distance tolerance.  Both points are part of the contract — do not
//! "fix" them.
//!
//! # Preconditions
//!
//! Edge weights and blockage penalties must be non-negative.  This is not
//! runtime-checked; the guarantee that a node's distance is final once it
//! is dequeued at minimum priority does not hold otherwise.

use evr_core::NodeId;

use crate::blockage::{is_blocked, BlockedSegment};
use crate::network::RoadNetwork;
use crate::queue::MinQueue;
use crate::{GraphError, GraphResult};

// ── ShortestPaths ─────────────────────────────────────────────────────────────

/// The output of one shortest-path computation: per-node minimum distance
/// and predecessor links, from which a caller reconstructs paths.
///
/// Unreached nodes hold `f32::INFINITY` and `NodeId::INVALID` — they never
/// carry a predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    /// Minimum accumulated cost from the start node.  Indexed by `NodeId`.
    pub dist: Vec<f32>,
    /// Predecessor on the best known path.  Indexed by `NodeId`.
    pub prev: Vec<NodeId>,
}

impl ShortestPaths {
    /// Minimum cost from the start node, or `f32::INFINITY` if unreached.
    #[inline]
    pub fn distance(&self, node: NodeId) -> f32 {
        self.dist[node.index()]
    }

    /// Predecessor of `node` on the best path, `None` for the start node
    /// and for unreached nodes.
    #[inline]
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        let p = self.prev[node.index()];
        (p != NodeId::INVALID).then_some(p)
    }

    /// `true` if the search assigned `node` a finite distance.
    #[inline]
    pub fn reached(&self, node: NodeId) -> bool {
        self.dist[node.index()].is_finite()
    }

    /// Walk predecessor links from `node` back to the start and return the
    /// node chain in start → `node` order.  `None` if `node` was unreached.
    pub fn path_to(&self, node: NodeId) -> Option<Vec<NodeId>> {
        if !self.reached(node) {
            return None;
        }
        let mut nodes = vec![node];
        let mut cur = node;
        while let Some(p) = self.predecessor(cur) {
            nodes.push(p);
            cur = p;
        }
        nodes.reverse();
        Some(nodes)
    }
}

// ── find_shortest_paths ───────────────────────────────────────────────────────

/// Compute minimum-cost distances and predecessor links from `start` to all
/// reachable nodes, skipping edges incident to any blocked position.
///
/// `end` is an early-exit signal: the search stops as soon as the end node
/// is dequeued, at which point its recorded distance and predecessor are
/// already final.  An unreachable `end` is a normal outcome — the result
/// simply holds an infinite distance for it.
///
/// # Errors
///
/// [`GraphError::NodeNotFound`] if `start` or `end` does not index a node
/// of `network`.
pub fn find_shortest_paths(
    network: &RoadNetwork,
    start:   NodeId,
    end:     NodeId,
    blocked: &[BlockedSegment],
) -> GraphResult<ShortestPaths> {
    if !network.contains(start) {
        return Err(GraphError::NodeNotFound(start));
    }
    if !network.contains(end) {
        return Err(GraphError::NodeNotFound(end));
    }

    let n = network.node_count();
    let mut dist = vec![f32::INFINITY; n];
    let mut prev = vec![NodeId::INVALID; n];
    dist[start.index()] = 0.0;

    // Seed the queue with every node at its initial distance; improved
    // distances re-enqueue rather than update in place, and the stale-entry
    // guard below discards superseded copies.
    let mut queue: MinQueue<NodeId> = MinQueue::with_capacity(n);
    for i in 0..n {
        let node = NodeId(i as u32);
        queue.enqueue(node, dist[node.index()]);
    }

    while let Some((node, priority)) = queue.dequeue() {
        // Destination dequeued at minimum priority: its distance is final.
        if node == end {
            break;
        }

        // Skip stale heap entries.
        if priority > dist[node.index()] {
            continue;
        }

        // Either-endpoint blockage rule, source side: a blocked position on
        // this node excludes every edge leaving it (the reverse edges die
        // when their source is scanned).
        if is_blocked(blocked, network.node_pos[node.index()]) {
            continue;
        }

        for edge in network.out_edges(node) {
            let next = network.edge_to[edge.index()];

            // Either-endpoint blockage rule, target side.
            if is_blocked(blocked, network.node_pos[next.index()]) {
                continue;
            }

            let cand = dist[node.index()] + network.edge_weight[edge.index()];
            if cand < dist[next.index()] {
                dist[next.index()] = cand;
                prev[next.index()] = node;
                queue.enqueue(next, cand);
            }
        }
    }

    Ok(ShortestPaths { dist, prev })
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// A reconstructed path: the node chain from source to destination and the
/// total traversal cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Nodes visited in order, source first.  A trivial route (source ==
    /// destination) holds the single node.
    pub nodes: Vec<NodeId>,
    /// Accumulated edge weight along the chain.
    pub total_weight: f32,
}

impl Route {
    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// Implement this trait to replace the default Dijkstra with A*, a
/// contraction hierarchy, or a remote service adapter.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a planner can be shared across
/// threads serving independent sessions.
pub trait Router: Send + Sync {
    /// Compute a route from `from` to `to` avoiding `blocked` positions.
    ///
    /// `from == to` is a trivial route, not an error.
    fn route(
        &self,
        network: &RoadNetwork,
        from:    NodeId,
        to:      NodeId,
        blocked: &[BlockedSegment],
    ) -> GraphResult<Route>;
}

/// Default [`Router`]: [`find_shortest_paths`] plus predecessor-chain
/// reconstruction.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(
        &self,
        network: &RoadNetwork,
        from:    NodeId,
        to:      NodeId,
        blocked: &[BlockedSegment],
    ) -> GraphResult<Route> {
        let paths = find_shortest_paths(network, from, to, blocked)?;
        let nodes = paths
            .path_to(to)
            .ok_or(GraphError::NoRoute { from, to })?;
        Ok(Route {
            nodes,
            total_weight: paths.distance(to),
        })
    }
}
