//! Candidate-leg graph built from a waypoint network.
//!
//! Edges carry precomputed great-circle distances and honor only the
//! aircraft-independent constraints (distance cap, restricted zones, fan-out
//! cap). Aircraft feasibility is applied later, per search state.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::geo::{self, GeoPoint};
use crate::network::{Network, WaypointId};

/// Cap the candidate fan-out so each waypoint only links to its closest
/// neighbours. Sixteen keeps planning fast on dense networks while leaving
/// enough detour candidates around restricted zones.
const MAX_CANDIDATE_NEIGHBORS: usize = 16;

/// Circular airspace volume that legs must not cross.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestrictedZone {
    pub center: GeoPoint,
    pub radius_nm: f64,
}

impl RestrictedZone {
    pub fn new(center: GeoPoint, radius_nm: f64) -> Self {
        Self { center, radius_nm }
    }

    /// Whether the great-circle leg from `a` to `b` passes through the zone.
    pub fn blocks(&self, a: GeoPoint, b: GeoPoint) -> bool {
        geo::segment_clearance_nm(a, b, self.center) < self.radius_nm
    }
}

/// Options controlling candidate-leg generation.
#[derive(Debug, Clone)]
pub struct GraphOptions {
    /// Drop candidate legs longer than this, regardless of aircraft.
    pub max_leg_nm: Option<f64>,
    /// Maximum neighbours kept per waypoint.
    pub max_neighbors: usize,
    /// Airspace no leg may cross.
    pub restricted_zones: Vec<RestrictedZone>,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            max_leg_nm: None,
            max_neighbors: MAX_CANDIDATE_NEIGHBORS,
            restricted_zones: Vec::new(),
        }
    }
}

/// Edge within the routing graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: WaypointId,
    pub distance_nm: f64,
}

/// Graph structure used by the route planner.
///
/// Read-only after construction; the adjacency is behind an `Arc` so clones
/// are cheap and the graph can be shared across concurrent planning calls.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<WaypointId, Vec<Edge>>>,
}

impl Graph {
    /// Build a graph directly from an adjacency map.
    pub fn from_parts(adjacency: HashMap<WaypointId, Vec<Edge>>) -> Self {
        Self {
            adjacency: Arc::new(adjacency),
        }
    }

    /// Return the neighbours for a given waypoint identifier.
    pub fn neighbours(&self, waypoint: WaypointId) -> &[Edge] {
        self.adjacency
            .get(&waypoint)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

/// Build the candidate-leg graph for a network.
///
/// Every waypoint pair within the distance cap and clear of all restricted
/// zones becomes a directed edge; each waypoint keeps only its
/// `max_neighbors` closest candidates. Edge order is deterministic
/// (distance, then target id).
pub fn build_graph(network: &Network, options: &GraphOptions) -> Graph {
    let mut adjacency: HashMap<WaypointId, Vec<Edge>> = HashMap::new();

    for (id, waypoint) in network.iter() {
        let mut edges: Vec<Edge> = network
            .iter()
            .filter(|(other_id, _)| *other_id != id)
            .map(|(other_id, other)| Edge {
                target: other_id,
                distance_nm: geo::distance_nm(waypoint.position, other.position),
            })
            .filter(|edge| {
                options
                    .max_leg_nm
                    .map_or(true, |limit| edge.distance_nm <= limit)
            })
            .filter(|edge| {
                let target = network
                    .waypoint(edge.target)
                    .map(|w| w.position)
                    .unwrap_or(waypoint.position);
                !options
                    .restricted_zones
                    .iter()
                    .any(|zone| zone.blocks(waypoint.position, target))
            })
            .collect();

        edges.sort_by(|a, b| {
            compare_distance(a.distance_nm, b.distance_nm).then_with(|| a.target.cmp(&b.target))
        });
        edges.truncate(options.max_neighbors);

        adjacency.insert(id, edges);
    }

    let graph = Graph::from_parts(adjacency);
    debug!(
        waypoints = network.len(),
        edges = graph.edge_count(),
        "built candidate-leg graph"
    );
    graph
}

fn compare_distance(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Greater)
}
