//! Skyroute library entry points.
//!
//! This crate models an airport/waypoint network, evaluates leg feasibility
//! against an aircraft performance profile, and runs a resource-constrained
//! shortest-path search to produce cost-optimal multi-leg itineraries.
//! Loading network data and presenting results are the caller's concern;
//! consumers should only depend on the types and functions exported here.
//!

#![deny(warnings)]

pub mod aircraft;
pub mod error;
pub mod feasibility;
pub mod geo;
pub mod graph;
pub mod itinerary;
pub mod network;
pub mod routing;

pub use aircraft::{AircraftCatalog, AircraftProfile, LegCost};
pub use error::{Error, Result};
pub use feasibility::evaluate_leg;
pub use geo::GeoPoint;
pub use graph::{build_graph, Edge, Graph, GraphOptions, RestrictedZone};
pub use itinerary::{Itinerary, Leg};
pub use network::{Network, Waypoint, WaypointId};
pub use routing::{plan_route, CostMetric, PlanConstraints, PlanRequest, SearchBudget};
