//! Leg feasibility under an aircraft profile and current fuel state.
//!
//! Feasibility is a pure predicate over (profile, distance, fuel remaining),
//! not a property of the edge itself: the same leg can be flyable with full
//! tanks and unflyable later in the trip. Identical inputs always yield
//! identical verdicts, so the search may re-evaluate legs freely.

use crate::aircraft::{AircraftProfile, LegCost};

/// Slack absorbing floating-point noise in the limit comparisons, so a leg
/// that exactly matches the maximum range or the remaining fuel passes.
const FEASIBILITY_EPSILON: f64 = 1e-9;

/// Decide whether a leg is flyable and return its cost when it is.
///
/// A leg is flyable iff its distance is within the profile's maximum leg
/// distance (net of reserve) and its fuel cost is covered by the fuel
/// currently remaining above reserve.
pub fn evaluate_leg(
    profile: &AircraftProfile,
    distance_nm: f64,
    fuel_remaining_gal: f64,
) -> Option<LegCost> {
    if distance_nm > profile.max_leg_distance_nm() + FEASIBILITY_EPSILON {
        return None;
    }

    let cost = profile.cost_of(distance_nm);
    if cost.fuel_gal > fuel_remaining_gal + FEASIBILITY_EPSILON {
        return None;
    }

    Some(cost)
}
