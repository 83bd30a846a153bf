//! Resource-constrained best-first search over (waypoint, fuel) states.
//!
//! A plain Dijkstra label per node is not enough here: whether an edge can
//! be taken depends on the fuel remaining when the node is reached, so two
//! arrivals at the same node with different fuel are genuinely different
//! states. Each node therefore keeps a Pareto frontier of labels (cost vs.
//! fuel remaining) and a label is discarded when another label at the same
//! node has lower-or-equal cost and greater-or-equal fuel.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::Instant;

use tracing::{debug, warn};

use crate::aircraft::AircraftProfile;
use crate::feasibility::evaluate_leg;
use crate::graph::{Edge, Graph};
use crate::network::{Network, WaypointId};

use super::{CostMetric, SearchBudget};

/// Tolerance for cost/fuel comparisons in dominance checks. Merging
/// float-equal states keeps zero-cost cycles from looping forever.
const DOMINANCE_EPSILON: f64 = 1e-9;

/// How many expansions pass between wall-clock deadline checks.
const DEADLINE_CHECK_INTERVAL: usize = 64;

/// Operational constraints applied during the search.
#[derive(Debug, Default, Clone)]
pub(crate) struct SearchConstraints {
    /// Caller-imposed cap on any single leg, on top of the profile limit.
    pub max_leg_nm: Option<f64>,
    /// Waypoints that must not appear in the itinerary.
    pub avoided: HashSet<WaypointId>,
}

impl SearchConstraints {
    fn allows(&self, edge: &Edge, target: WaypointId) -> bool {
        if let Some(limit) = self.max_leg_nm {
            if edge.distance_nm > limit {
                return false;
            }
        }
        !self.avoided.contains(&target)
    }
}

/// One node of the reconstructed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PathStep {
    pub node: WaypointId,
    /// Whether a full refuel was taken on arrival at `node`.
    pub refuel: bool,
}

/// Outcome of one search run.
#[derive(Debug, Clone)]
pub(crate) enum SearchOutcome {
    Found(Vec<PathStep>),
    Exhausted,
    Aborted { expansions: usize },
}

/// Explored partial path. Parent links live in the label arena because a
/// node may be reached at several distinct fuel levels.
#[derive(Debug, Clone, Copy)]
struct Label {
    node: WaypointId,
    cost: f64,
    fuel: f64,
    legs: u32,
    parent: Option<usize>,
    refueled: bool,
}

pub(crate) fn find_constrained_route(
    graph: &Graph,
    network: &Network,
    profile: &AircraftProfile,
    origin: WaypointId,
    destination: WaypointId,
    metric: CostMetric,
    constraints: &SearchConstraints,
    budget: &SearchBudget,
) -> SearchOutcome {
    let usable_fuel = profile.usable_fuel_gal();
    let deadline = budget.time_limit.map(|limit| Instant::now() + limit);

    let mut labels: Vec<Label> = Vec::new();
    let mut frontier: HashMap<WaypointId, Vec<usize>> = HashMap::new();
    let mut queue: BinaryHeap<QueueEntry> = BinaryHeap::new();
    let mut expansions = 0usize;

    // Origin is assumed fully fueled regardless of its fuel flag.
    push_label(
        &mut labels,
        &mut frontier,
        &mut queue,
        Label {
            node: origin,
            cost: 0.0,
            fuel: usable_fuel,
            legs: 0,
            parent: None,
            refueled: false,
        },
    );

    while let Some(entry) = queue.pop() {
        // Skip entries whose label has since been dominated.
        let still_live = frontier
            .get(&entry.node)
            .map_or(false, |live| live.contains(&entry.label));
        if !still_live {
            continue;
        }

        if entry.node == destination {
            debug!(expansions, labels = labels.len(), "route search succeeded");
            return SearchOutcome::Found(reconstruct(&labels, entry.label));
        }

        expansions += 1;
        if let Some(max) = budget.max_expansions {
            if expansions > max {
                warn!(expansions, "route search exceeded expansion budget");
                return SearchOutcome::Aborted { expansions };
            }
        }
        if let Some(deadline) = deadline {
            if expansions % DEADLINE_CHECK_INTERVAL == 0 && Instant::now() >= deadline {
                warn!(expansions, "route search exceeded time budget");
                return SearchOutcome::Aborted { expansions };
            }
        }

        let current = labels[entry.label];
        for edge in graph.neighbours(entry.node) {
            if !constraints.allows(edge, edge.target) {
                continue;
            }
            let Some(leg) = evaluate_leg(profile, edge.distance_nm, current.fuel) else {
                continue;
            };

            let arrival_fuel = (current.fuel - leg.fuel_gal).max(0.0);
            let refuel_here = edge.target != destination
                && network
                    .waypoint(edge.target)
                    .map_or(false, |w| w.fuel_available);
            // Refueling is free under every metric, so the refueled state
            // dominates any partial alternative and is the one generated.
            let next_fuel = if refuel_here { usable_fuel } else { arrival_fuel };

            let step_cost = match metric {
                CostMetric::Distance => edge.distance_nm,
                CostMetric::Time => leg.time_hr,
                CostMetric::Fuel => leg.fuel_gal,
            };

            push_label(
                &mut labels,
                &mut frontier,
                &mut queue,
                Label {
                    node: edge.target,
                    cost: current.cost + step_cost,
                    fuel: next_fuel,
                    legs: current.legs + 1,
                    parent: Some(entry.label),
                    refueled: refuel_here,
                },
            );
        }
    }

    debug!(expansions, labels = labels.len(), "route search exhausted");
    SearchOutcome::Exhausted
}

/// Record a label unless a live label at the same node dominates it; evict
/// the live labels it dominates in turn.
fn push_label(
    labels: &mut Vec<Label>,
    frontier: &mut HashMap<WaypointId, Vec<usize>>,
    queue: &mut BinaryHeap<QueueEntry>,
    label: Label,
) {
    let live = frontier.entry(label.node).or_default();

    if live
        .iter()
        .any(|&i| dominates(labels[i].cost, labels[i].fuel, label.cost, label.fuel))
    {
        return;
    }
    live.retain(|&i| !dominates(label.cost, label.fuel, labels[i].cost, labels[i].fuel));

    let index = labels.len();
    labels.push(label);
    live.push(index);
    queue.push(QueueEntry::new(&label, index));
}

/// Whether state (a_cost, a_fuel) dominates (b_cost, b_fuel): no worse on
/// cost, no worse on fuel. Equal states dominate each other, so revisits are
/// pruned.
fn dominates(a_cost: f64, a_fuel: f64, b_cost: f64, b_fuel: f64) -> bool {
    a_cost <= b_cost + DOMINANCE_EPSILON && a_fuel + DOMINANCE_EPSILON >= b_fuel
}

fn reconstruct(labels: &[Label], last: usize) -> Vec<PathStep> {
    let mut path = Vec::new();
    let mut current = Some(last);
    while let Some(index) = current {
        let label = labels[index];
        path.push(PathStep {
            node: label.node,
            refuel: label.refueled,
        });
        current = label.parent;
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: WaypointId,
    cost: FloatOrd,
    fuel: FloatOrd,
    legs: u32,
    label: usize,
}

impl QueueEntry {
    fn new(label: &Label, index: usize) -> Self {
        Self {
            node: label.node,
            cost: FloatOrd(label.cost),
            fuel: FloatOrd(label.fuel),
            legs: label.legs,
            label: index,
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse cost ordering so BinaryHeap becomes a min-heap; among
        // equal costs prefer more fuel remaining, then fewer legs, then
        // stable ids for full determinism.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| self.fuel.cmp(&other.fuel))
            .then_with(|| other.legs.cmp(&self.legs))
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.label.cmp(&self.label))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominance_prefers_cheaper_and_fuller() {
        assert!(dominates(1.0, 10.0, 2.0, 5.0));
        assert!(!dominates(2.0, 10.0, 1.0, 5.0));
        assert!(!dominates(1.0, 5.0, 2.0, 10.0));
        // Equal states dominate each other.
        assert!(dominates(1.0, 5.0, 1.0, 5.0));
    }

    #[test]
    fn queue_orders_by_cost_then_fuel_then_legs() {
        let mut queue = BinaryHeap::new();
        let entries = [
            (2, 5.0, 10.0, 1),
            (0, 1.0, 10.0, 2),
            (1, 1.0, 20.0, 3),
            (3, 1.0, 20.0, 1),
        ];
        for (node, cost, fuel, legs) in entries {
            queue.push(QueueEntry {
                node,
                cost: FloatOrd(cost),
                fuel: FloatOrd(fuel),
                legs,
                label: node as usize,
            });
        }

        // Cheapest first; among cost ties the fuller state; among fuel ties
        // the shorter path.
        assert_eq!(queue.pop().unwrap().node, 3);
        assert_eq!(queue.pop().unwrap().node, 1);
        assert_eq!(queue.pop().unwrap().node, 0);
        assert_eq!(queue.pop().unwrap().node, 2);
    }
}
