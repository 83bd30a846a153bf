//! Planned itinerary returned by the route planner.

use serde::Serialize;

use crate::routing::CostMetric;

/// One flown leg with its metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub distance_nm: f64,
    pub initial_bearing_deg: f64,
    pub time_hr: f64,
    pub fuel_gal: f64,
    /// Usable fuel left after the leg, before any refuel at the arrival.
    pub fuel_remaining_gal: f64,
    /// Whether a full refuel is taken at the arrival waypoint.
    pub refuel: bool,
}

/// Ordered sequence of legs from origin to destination with running totals.
///
/// Constructed only by the planner on success; immutable thereafter. A
/// zero-leg itinerary (origin equals destination) has zero totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    origin: String,
    destination: String,
    metric: CostMetric,
    legs: Vec<Leg>,
    total_distance_nm: f64,
    total_time_hr: f64,
    total_fuel_gal: f64,
}

impl Itinerary {
    /// Assemble an itinerary from legs, accumulating totals.
    pub(crate) fn from_legs(
        origin: impl Into<String>,
        destination: impl Into<String>,
        metric: CostMetric,
        legs: Vec<Leg>,
    ) -> Self {
        let total_distance_nm = legs.iter().map(|l| l.distance_nm).sum();
        let total_time_hr = legs.iter().map(|l| l.time_hr).sum();
        let total_fuel_gal = legs.iter().map(|l| l.fuel_gal).sum();

        Self {
            origin: origin.into(),
            destination: destination.into(),
            metric,
            legs,
            total_distance_nm,
            total_time_hr,
            total_fuel_gal,
        }
    }

    /// Zero-leg itinerary for origin == destination.
    pub(crate) fn empty(code: impl Into<String>, metric: CostMetric) -> Self {
        let code = code.into();
        Self::from_legs(code.clone(), code, metric, Vec::new())
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn metric(&self) -> CostMetric {
        self.metric
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn iter(&self) -> impl Iterator<Item = &Leg> {
        self.legs.iter()
    }

    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Whether the trip is a single nonstop leg.
    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1
    }

    pub fn total_distance_nm(&self) -> f64 {
        self.total_distance_nm
    }

    pub fn total_time_hr(&self) -> f64 {
        self.total_time_hr
    }

    pub fn total_fuel_gal(&self) -> f64 {
        self.total_fuel_gal
    }
}
