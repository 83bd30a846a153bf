//! In-memory waypoint network handed to the planner by callers.
//!
//! The network is the caller-materialized set of airports and waypoints.
//! Loading from files or databases is a collaborator concern; this module
//! only validates and indexes what it is given.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::geo::GeoPoint;

/// Dense numeric identifier for a waypoint, assigned at network construction.
pub type WaypointId = u32;

/// Minimum Jaro-Winkler similarity for a code to appear as a suggestion.
const MIN_SUGGESTION_SIMILARITY: f64 = 0.75;

/// An airport or en-route waypoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// Unique identifier code (e.g. ICAO).
    pub code: String,
    pub position: GeoPoint,
    pub elevation_ft: Option<f64>,
    /// Whether a full refuel is possible here.
    pub fuel_available: bool,
}

impl Waypoint {
    /// Create a waypoint with no elevation and no fuel service.
    pub fn new(code: impl Into<String>, lat_deg: f64, lon_deg: f64) -> Self {
        Self {
            code: code.into(),
            position: GeoPoint::new(lat_deg, lon_deg),
            elevation_ft: None,
            fuel_available: false,
        }
    }

    /// Mark the waypoint as offering fuel.
    pub fn with_fuel(mut self) -> Self {
        self.fuel_available = true;
        self
    }

    pub fn with_elevation_ft(mut self, elevation_ft: f64) -> Self {
        self.elevation_ft = Some(elevation_ft);
        self
    }
}

/// Immutable collection of waypoints with code-based lookup.
#[derive(Debug, Clone, Default)]
pub struct Network {
    waypoints: Vec<Waypoint>,
    code_to_id: HashMap<String, WaypointId>,
}

impl Network {
    /// Build a network, assigning dense ids in iteration order.
    ///
    /// Construction-time invariants: no duplicate codes, every coordinate
    /// within geographic range.
    pub fn from_waypoints<I>(waypoints: I) -> Result<Self>
    where
        I: IntoIterator<Item = Waypoint>,
    {
        let mut nodes = Vec::new();
        let mut code_to_id = HashMap::new();

        for waypoint in waypoints {
            if !waypoint.position.is_valid() {
                return Err(Error::InvalidCoordinate {
                    code: waypoint.code,
                    message: format!(
                        "latitude {} / longitude {} out of range",
                        waypoint.position.lat_deg, waypoint.position.lon_deg
                    ),
                });
            }

            let id = nodes.len() as WaypointId;
            if code_to_id.insert(waypoint.code.clone(), id).is_some() {
                return Err(Error::DuplicateNode {
                    code: waypoint.code,
                });
            }
            nodes.push(waypoint);
        }

        Ok(Self {
            waypoints: nodes,
            code_to_id,
        })
    }

    /// Lookup a waypoint identifier by its case-sensitive code.
    pub fn waypoint_id(&self, code: &str) -> Option<WaypointId> {
        self.code_to_id.get(code).copied()
    }

    /// Lookup a waypoint by identifier.
    pub fn waypoint(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.get(id as usize)
    }

    /// Lookup a waypoint code by identifier.
    pub fn code(&self, id: WaypointId) -> Option<&str> {
        self.waypoint(id).map(|w| w.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Iterate waypoints in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (WaypointId, &Waypoint)> {
        self.waypoints
            .iter()
            .enumerate()
            .map(|(id, w)| (id as WaypointId, w))
    }

    /// Return up to `limit` codes similar to `code`, best match first.
    ///
    /// Comparison is case-insensitive; codes below the similarity cutoff are
    /// omitted entirely so wildly wrong inputs produce no suggestions.
    pub fn fuzzy_code_matches(&self, code: &str, limit: usize) -> Vec<String> {
        let needle = code.to_ascii_uppercase();
        let mut scored: Vec<(f64, &str)> = self
            .waypoints
            .iter()
            .map(|w| {
                let score = strsim::jaro_winkler(&needle, &w.code.to_ascii_uppercase());
                (score, w.code.as_str())
            })
            .filter(|(score, _)| *score >= MIN_SUGGESTION_SIMILARITY)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, code)| code.to_string())
            .collect()
    }
}
