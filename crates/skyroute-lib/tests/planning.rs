mod common;

use skyroute_lib::{plan_route, CostMetric, Error, PlanRequest, SearchBudget};

use common::{
    chain_network, dry_chain_network, long_range_profile, offset_midpoint_network,
    short_range_profile, tiny_leg_profile,
};

#[test]
fn long_range_aircraft_flies_direct() {
    // The fuel stop sits off the direct track, so the nonstop leg is
    // strictly shorter and must win.
    let network = offset_midpoint_network();
    let request = PlanRequest::new("KAAA", "KCCC", long_range_profile());
    let itinerary = plan_route(&network, &request).expect("route exists");

    assert!(itinerary.is_direct());
    assert_eq!(itinerary.legs()[0].from, "KAAA");
    assert_eq!(itinerary.legs()[0].to, "KCCC");
    assert!((itinerary.total_distance_nm() - 240.2).abs() < 1.0);
}

#[test]
fn equal_cost_tie_prefers_more_fuel_remaining() {
    // A, B, C sit on the same great circle, so flying via the fuel stop
    // costs exactly as much as the nonstop leg; the planner takes the
    // refueled variant for the extra slack.
    let network = chain_network();
    let request = PlanRequest::new("KAAA", "KCCC", long_range_profile());
    let itinerary = plan_route(&network, &request).expect("route exists");

    assert_eq!(itinerary.leg_count(), 2);
    assert!(itinerary.legs()[0].refuel);
    assert!((itinerary.total_distance_nm() - 240.2).abs() < 1.0);
}

#[test]
fn short_range_aircraft_refuels_at_midpoint() {
    let network = chain_network();
    let request = PlanRequest::new("KAAA", "KCCC", short_range_profile());
    let itinerary = plan_route(&network, &request).expect("route exists");

    assert_eq!(itinerary.leg_count(), 2);
    let legs = itinerary.legs();
    assert_eq!(legs[0].from, "KAAA");
    assert_eq!(legs[0].to, "KBBB");
    assert_eq!(legs[1].from, "KBBB");
    assert_eq!(legs[1].to, "KCCC");

    // Full refuel is taken at the intermediate stop, not at the destination.
    assert!(legs[0].refuel);
    assert!(!legs[1].refuel);

    assert!((itinerary.total_distance_nm() - 240.2).abs() < 1.0);
}

#[test]
fn max_leg_below_hop_distance_is_infeasible() {
    let network = chain_network();
    let request = PlanRequest::new("KAAA", "KCCC", tiny_leg_profile());
    let err = plan_route(&network, &request).expect_err("no route");
    assert!(matches!(err, Error::Infeasible { .. }));
    assert!(format!("{err}").contains("no feasible itinerary"));
}

#[test]
fn no_fuel_stop_en_route_is_infeasible() {
    // Each hop is individually flyable but the tank cannot cover both, and
    // nobody sells fuel at the midpoint.
    let network = dry_chain_network();
    let request = PlanRequest::new("KAAA", "KCCC", short_range_profile());
    let err = plan_route(&network, &request).expect_err("no route");
    assert!(matches!(err, Error::Infeasible { .. }));
}

#[test]
fn origin_equals_destination_yields_zero_leg_itinerary() {
    let network = chain_network();
    let request = PlanRequest::new("KBBB", "KBBB", short_range_profile());
    let itinerary = plan_route(&network, &request).expect("trivial route");

    assert_eq!(itinerary.leg_count(), 0);
    assert_eq!(itinerary.origin(), "KBBB");
    assert_eq!(itinerary.destination(), "KBBB");
    assert_eq!(itinerary.total_distance_nm(), 0.0);
    assert_eq!(itinerary.total_time_hr(), 0.0);
    assert_eq!(itinerary.total_fuel_gal(), 0.0);
}

#[test]
fn unknown_origin_surfaces_suggestions() {
    let network = chain_network();
    let request = PlanRequest::new("KAAX", "KCCC", long_range_profile());
    let err = plan_route(&network, &request).expect_err("unknown code");

    let message = format!("{err}");
    assert!(message.contains("unknown waypoint code"));
    assert!(message.contains("KAAA"), "should suggest KAAA: {message}");
}

#[test]
fn invalid_profile_fails_before_search() {
    let network = chain_network();
    let mut profile = long_range_profile();
    profile.burn_rate_gph = 0.0;
    let request = PlanRequest::new("KAAA", "KCCC", profile);
    let err = plan_route(&network, &request).expect_err("invalid profile");
    assert!(matches!(err, Error::InvalidProfile { .. }));

    // Even a trivial same-node request rejects the profile first.
    let mut profile = long_range_profile();
    profile.range_nm = -100.0;
    let request = PlanRequest::new("KAAA", "KAAA", profile);
    assert!(matches!(
        plan_route(&network, &request),
        Err(Error::InvalidProfile { .. })
    ));
}

#[test]
fn tiny_expansion_budget_aborts_the_search() {
    let network = chain_network();
    let mut request = PlanRequest::new("KAAA", "KCCC", short_range_profile());
    request.budget = SearchBudget {
        max_expansions: Some(0),
        time_limit: None,
    };

    let err = plan_route(&network, &request).expect_err("budget exhausted");
    assert!(matches!(err, Error::SearchAborted { .. }));
}

#[test]
fn planning_is_deterministic() {
    let network = chain_network();
    let request = PlanRequest::new("KAAA", "KCCC", short_range_profile());

    let first = plan_route(&network, &request).expect("route exists");
    let second = plan_route(&network, &request).expect("route exists");
    assert_eq!(first, second);
}

#[test]
fn itinerary_honors_performance_invariants() {
    let network = chain_network();
    let profile = short_range_profile();
    let request = PlanRequest::new("KAAA", "KCCC", profile.clone());
    let itinerary = plan_route(&network, &request).expect("route exists");

    let mut total_distance = 0.0;
    let mut total_time = 0.0;
    let mut total_fuel = 0.0;
    for leg in itinerary.iter() {
        assert!(leg.distance_nm <= profile.max_leg_distance_nm() + 1e-6);
        assert!(leg.fuel_gal <= profile.usable_fuel_gal() + 1e-6);
        assert!(leg.fuel_remaining_gal >= -1e-6);
        total_distance += leg.distance_nm;
        total_time += leg.time_hr;
        total_fuel += leg.fuel_gal;
    }

    assert!((itinerary.total_distance_nm() - total_distance).abs() < 1e-9);
    assert!((itinerary.total_time_hr() - total_time).abs() < 1e-9);
    assert!((itinerary.total_fuel_gal() - total_fuel).abs() < 1e-9);
}

#[test]
fn metric_totals_follow_the_profile() {
    let network = chain_network();
    let profile = long_range_profile();

    let request =
        PlanRequest::new("KAAA", "KCCC", profile.clone()).with_metric(CostMetric::Time);
    let itinerary = plan_route(&network, &request).expect("route exists");

    assert_eq!(itinerary.metric(), CostMetric::Time);
    let expected_time = itinerary.total_distance_nm() / profile.cruise_speed_kt;
    assert!((itinerary.total_time_hr() - expected_time).abs() < 1e-9);
    let expected_fuel = itinerary.total_time_hr() * profile.burn_rate_gph;
    assert!((itinerary.total_fuel_gal() - expected_fuel).abs() < 1e-9);
}

#[test]
fn itinerary_serializes_for_callers() {
    let network = chain_network();
    let request = PlanRequest::new("KAAA", "KCCC", short_range_profile());
    let itinerary = plan_route(&network, &request).expect("route exists");

    let value = serde_json::to_value(&itinerary).expect("serializes");
    assert_eq!(value["metric"], "distance");
    assert_eq!(value["origin"], "KAAA");
    assert_eq!(value["legs"][0]["from"], "KAAA");
    assert_eq!(value["legs"][0]["refuel"], true);
    assert!(value["total_distance_nm"].as_f64().unwrap() > 0.0);
}
