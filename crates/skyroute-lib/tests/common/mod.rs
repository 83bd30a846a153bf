//! Shared fixture networks and profiles for integration tests.

use skyroute_lib::{AircraftProfile, Network, Waypoint};

/// Three waypoints on the equator, two degrees of longitude apart
/// (about 120 nm per hop, 240 nm end to end). Only the middle one sells
/// fuel.
#[allow(dead_code)]
pub fn chain_network() -> Network {
    Network::from_waypoints([
        Waypoint::new("KAAA", 0.0, 0.0).with_fuel(),
        Waypoint::new("KBBB", 0.0, 2.0).with_fuel(),
        Waypoint::new("KCCC", 0.0, 4.0),
    ])
    .expect("chain fixture is valid")
}

/// Same chain, but no fuel anywhere en route.
#[allow(dead_code)]
pub fn dry_chain_network() -> Network {
    Network::from_waypoints([
        Waypoint::new("KAAA", 0.0, 0.0),
        Waypoint::new("KBBB", 0.0, 2.0),
        Waypoint::new("KCCC", 0.0, 4.0),
    ])
    .expect("dry chain fixture is valid")
}

/// Endpoints on the equator with a fuel stop offset a degree north of the
/// direct track, so routing via the midpoint is strictly longer than the
/// nonstop leg.
#[allow(dead_code)]
pub fn offset_midpoint_network() -> Network {
    Network::from_waypoints([
        Waypoint::new("KAAA", 0.0, 0.0),
        Waypoint::new("KMID", 1.0, 2.0).with_fuel(),
        Waypoint::new("KCCC", 0.0, 4.0),
    ])
    .expect("offset midpoint fixture is valid")
}

/// Profile that can fly one 120 nm hop but not two on a single tank:
/// 150 nm maximum leg, 12.5 gal usable against ~10 gal per hop.
#[allow(dead_code)]
pub fn short_range_profile() -> AircraftProfile {
    AircraftProfile::new("SHORT", 187.5, 120.0, 10.0, 0.2)
}

/// Profile whose maximum leg (60 nm) is below a single 120 nm hop.
#[allow(dead_code)]
pub fn tiny_leg_profile() -> AircraftProfile {
    AircraftProfile::new("TINY", 75.0, 120.0, 10.0, 0.2)
}

/// Profile comfortably covering the whole chain nonstop.
#[allow(dead_code)]
pub fn long_range_profile() -> AircraftProfile {
    AircraftProfile::new("LONG", 600.0, 150.0, 12.0, 0.1)
}
