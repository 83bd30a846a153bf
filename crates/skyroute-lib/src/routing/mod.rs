//! Route planning entry points.
//!
//! This module provides:
//! - [`CostMetric`] - Optimization objective (distance, time, or fuel)
//! - [`PlanConstraints`] - Operational constraints applied during planning
//! - [`SearchBudget`] - Optional bounds on the search effort
//! - [`PlanRequest`] - High-level planning request
//! - [`plan_route`] - Main entry point for computing itineraries
//!
//! # Example
//!
//! ```ignore
//! use skyroute_lib::{plan_route, AircraftCatalog, PlanRequest};
//!
//! let profile = AircraftCatalog::builtin().get("C172").unwrap().clone();
//! let request = PlanRequest::new("KSFO", "KSEA", profile);
//! let itinerary = plan_route(&network, &request)?;
//! println!("{} legs", itinerary.leg_count());
//! ```

mod search;

use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::aircraft::AircraftProfile;
use crate::error::{Error, Result};
use crate::geo;
use crate::graph::{build_graph, Graph, GraphOptions};
use crate::itinerary::{Itinerary, Leg};
use crate::network::{Network, WaypointId};

use search::{PathStep, SearchConstraints, SearchOutcome};

/// Optimization objective for route planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CostMetric {
    /// Minimize total great-circle distance flown.
    #[default]
    Distance,
    /// Minimize total flight time.
    Time,
    /// Minimize total fuel burned.
    Fuel,
}

impl fmt::Display for CostMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            CostMetric::Distance => "distance",
            CostMetric::Time => "time",
            CostMetric::Fuel => "fuel",
        };
        f.write_str(value)
    }
}

/// Operational constraints applied during route planning.
#[derive(Debug, Clone, Default)]
pub struct PlanConstraints {
    /// Waypoint codes that must not appear in the itinerary.
    pub avoid: Vec<String>,
    /// Cap on any single leg, applied on top of the profile's own limit.
    pub max_leg_nm: Option<f64>,
}

/// Optional bounds on search effort.
///
/// With both fields unset the search runs until the state space is
/// exhausted. On a tight network with narrow fuel margins the number of
/// near-tied states can grow sharply; a budget turns that into a
/// [`Error::SearchAborted`] instead of an unbounded run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchBudget {
    /// Maximum number of state expansions.
    pub max_expansions: Option<usize>,
    /// Wall-clock limit for one planning call.
    pub time_limit: Option<Duration>,
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub origin: String,
    pub destination: String,
    pub profile: AircraftProfile,
    pub metric: CostMetric,
    pub constraints: PlanConstraints,
    pub budget: SearchBudget,
    /// Pre-built candidate-leg graph. If `None`, one is built on demand
    /// from `graph_options`.
    pub graph: Option<Graph>,
    pub graph_options: GraphOptions,
}

impl PlanRequest {
    /// Convenience constructor with default metric and no constraints.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        profile: AircraftProfile,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            profile,
            metric: CostMetric::default(),
            constraints: PlanConstraints::default(),
            budget: SearchBudget::default(),
            graph: None,
            graph_options: GraphOptions::default(),
        }
    }

    /// Select the optimization objective.
    pub fn with_metric(mut self, metric: CostMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Attach a pre-built graph to the request.
    pub fn with_graph(mut self, graph: Graph) -> Self {
        self.graph = Some(graph);
        self
    }
}

/// Resolve a waypoint code to an id, with suggestions for typos.
fn resolve_waypoint(network: &Network, code: &str) -> Result<WaypointId> {
    network.waypoint_id(code).ok_or_else(|| {
        let suggestions = network.fuzzy_code_matches(code, 3);
        Error::UnknownNode {
            code: code.to_string(),
            suggestions,
        }
    })
}

/// Resolve the avoid list to waypoint ids.
fn resolve_avoided(network: &Network, avoided: &[String]) -> Result<HashSet<WaypointId>> {
    let mut resolved = HashSet::new();
    for code in avoided {
        resolved.insert(resolve_waypoint(network, code)?);
    }
    Ok(resolved)
}

/// Compute an itinerary for the request, or a typed failure.
///
/// This is the main entry point for route planning. It:
/// 1. Validates the aircraft profile
/// 2. Resolves waypoint codes to ids
/// 3. Short-circuits the origin == destination case
/// 4. Obtains the candidate-leg graph
/// 5. Runs the resource-constrained search
/// 6. Assembles the itinerary with per-leg metrics and totals
pub fn plan_route(network: &Network, request: &PlanRequest) -> Result<Itinerary> {
    // Step 1: an invalid profile fails before any search.
    request.profile.validate()?;

    // Step 2: resolve endpoint codes.
    let origin_id = resolve_waypoint(network, &request.origin)?;
    let destination_id = resolve_waypoint(network, &request.destination)?;

    // Step 3: zero-leg trip, trivially returned without search.
    if origin_id == destination_id {
        return Ok(Itinerary::empty(request.origin.clone(), request.metric));
    }

    // Step 4: resolve avoided codes; an avoided endpoint cannot be routed.
    let avoided = resolve_avoided(network, &request.constraints.avoid)?;
    if avoided.contains(&origin_id) || avoided.contains(&destination_id) {
        return Err(Error::Infeasible {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
        });
    }

    // Step 5: obtain the graph.
    let graph = match &request.graph {
        Some(graph) => graph.clone(),
        None => build_graph(network, &request.graph_options),
    };

    let constraints = SearchConstraints {
        max_leg_nm: request.constraints.max_leg_nm,
        avoided,
    };

    // Step 6: search and assemble.
    let outcome = search::find_constrained_route(
        &graph,
        network,
        &request.profile,
        origin_id,
        destination_id,
        request.metric,
        &constraints,
        &request.budget,
    );

    match outcome {
        SearchOutcome::Found(steps) => {
            let itinerary = assemble_itinerary(network, &graph, request, &steps);
            debug!(
                origin = %request.origin,
                destination = %request.destination,
                legs = itinerary.leg_count(),
                metric = %request.metric,
                "planned itinerary"
            );
            Ok(itinerary)
        }
        SearchOutcome::Exhausted => Err(Error::Infeasible {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
        }),
        SearchOutcome::Aborted { expansions } => Err(Error::SearchAborted { expansions }),
    }
}

/// Turn a node sequence into legs with per-leg metrics and fuel tracking.
fn assemble_itinerary(
    network: &Network,
    graph: &Graph,
    request: &PlanRequest,
    steps: &[PathStep],
) -> Itinerary {
    let profile = &request.profile;
    let mut legs = Vec::with_capacity(steps.len().saturating_sub(1));
    let mut fuel_remaining = profile.usable_fuel_gal();

    for pair in steps.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let from_wp = network
            .waypoint(from.node)
            .expect("path nodes come from this network");
        let to_wp = network
            .waypoint(to.node)
            .expect("path nodes come from this network");

        let distance_nm = graph
            .neighbours(from.node)
            .iter()
            .filter(|e| e.target == to.node)
            .map(|e| e.distance_nm)
            .min_by(|a, b| a.partial_cmp(b).unwrap())
            .unwrap_or_else(|| geo::distance_nm(from_wp.position, to_wp.position));

        let cost = profile.cost_of(distance_nm);
        fuel_remaining = (fuel_remaining - cost.fuel_gal).max(0.0);

        legs.push(Leg {
            from: from_wp.code.clone(),
            to: to_wp.code.clone(),
            distance_nm,
            initial_bearing_deg: geo::initial_bearing_deg(from_wp.position, to_wp.position),
            time_hr: cost.time_hr,
            fuel_gal: cost.fuel_gal,
            fuel_remaining_gal: fuel_remaining,
            refuel: to.refuel,
        });

        if to.refuel {
            fuel_remaining = profile.usable_fuel_gal();
        }
    }

    Itinerary::from_legs(
        request.origin.clone(),
        request.destination.clone(),
        request.metric,
        legs,
    )
}
