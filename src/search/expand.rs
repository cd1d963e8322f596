use crate::costing::{ModeCosting, TurnCostTable, turn_angle};
use crate::graph::{EdgeIx, PathLocation, RoadNetwork};
use crate::label::{Label, LabelSet};
use crate::trace::DistanceApproximator;

use log::trace;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Where the best-known route onto an edge currently stands.
#[derive(Clone, Copy, Debug)]
struct EdgeStatus {
    label: usize,
    settled: bool,
}

/// Destinations hosted on one edge: `(location index, percent along)`.
type Hosted = SmallVec<[(usize, f64); 1]>;

/// Expands a best-first shortest-path tree from the location at
/// `origin` towards every other location, sinking all reached labels
/// into `labels`.
///
/// A label on an edge stands for arrival at the edge's end node, with
/// the edge fully traversed; origin and destination edges are covered
/// by their remaining fraction only. Paths are pruned once their
/// accumulated seconds exceed `max_time`; the label set's ceiling is
/// the sole distance bound, refusing labels past it at insertion.
///
/// `inbound` is the label by which the origin itself was reached in
/// the previous transition, when known. It seeds the turn angle of the
/// first junction so consecutive transitions price turns the way one
/// continuous route would.
///
/// Returns, per destination location index, the index of the best
/// label arriving at it; destinations unreachable within the ceilings
/// are absent. Ties are broken by lower cost, then lower insertion
/// index.
#[allow(clippy::too_many_arguments)]
pub fn shortest_path<N, C>(
    network: &N,
    locations: &[PathLocation],
    origin: usize,
    labels: &mut LabelSet,
    approximator: &DistanceApproximator,
    search_radius: f64,
    costing: &C,
    inbound: Option<&Label>,
    turn_costs: &TurnCostTable,
    max_time: f64,
) -> FxHashMap<usize, usize>
where
    N: RoadNetwork,
    C: ModeCosting,
{
    // Destinations keyed by their hosting edge.
    let mut hosted: FxHashMap<EdgeIx, Hosted> = FxHashMap::default();
    let mut remaining = 0usize;

    for (index, location) in locations.iter().enumerate() {
        if index == origin {
            continue;
        }

        remaining += 1;
        for projection in location.edges() {
            hosted
                .entry(projection.edge)
                .or_default()
                .push((index, projection.percent_along));
        }
    }

    let mut results: FxHashMap<usize, usize> = FxHashMap::default();
    let mut status: FxHashMap<EdgeIx, EdgeStatus> = FxHashMap::default();

    // Cheapest queued arrival per destination, to keep the queue lean.
    let mut best_arrival: FxHashMap<usize, f64> = FxHashMap::default();

    // Seed one label per allowed origin edge.
    for projection in locations[origin].edges() {
        let edge = projection.edge;
        if !costing.allowed(edge) {
            continue;
        }

        let length = network.length(edge);
        let full = costing.edge_cost(edge, length);

        // Turning onto the origin edge, when we know how we arrived.
        let turn = match inbound {
            Some(previous) if previous.edge != edge => {
                let angle = turn_angle(
                    network.end_heading(previous.edge),
                    network.begin_heading(edge),
                );
                turn_costs.penalty(angle) + costing.turn_cost(previous.edge, edge, angle)
            }
            _ => 0.0,
        };

        // Destinations sharing the origin edge, at or ahead of the
        // origin offset, are reached without leaving it.
        if let Some(shared) = hosted.get(&edge) {
            for &(destination, percent) in shared {
                if percent < projection.percent_along {
                    continue;
                }

                let fraction = percent - projection.percent_along;
                let cost = full.scaled(fraction);
                let distance = length * fraction;

                if cost.secs > max_time {
                    continue;
                }

                if best_arrival
                    .get(&destination)
                    .is_none_or(|&best| cost.cost < best)
                    && labels
                        .put(Label {
                            edge,
                            predecessor: None,
                            cost,
                            distance,
                            turn_cost: turn,
                            sortcost: cost.cost,
                            target: Some(destination),
                        })
                        .is_some()
                {
                    best_arrival.insert(destination, cost.cost);
                }
            }
        }

        // The remaining fraction of the edge, onto the rest of the
        // network.
        let fraction = 1.0 - projection.percent_along;
        let cost = full.scaled(fraction);
        let distance = length * fraction;

        if cost.secs > max_time {
            continue;
        }

        let sortcost =
            cost.cost + heuristic(approximator.distance(network.end_position(edge)), search_radius);

        let Some(index) = labels.put(Label {
            edge,
            predecessor: None,
            cost,
            distance,
            turn_cost: turn,
            sortcost,
            target: None,
        }) else {
            continue;
        };

        let improves = status
            .get(&edge)
            .is_none_or(|existing| cost.cost < labels[existing.label].cost.cost);
        if improves {
            status.insert(
                edge,
                EdgeStatus {
                    label: index,
                    settled: false,
                },
            );
        }
    }

    // Relax until every destination is settled or the frontier drains.
    while remaining > 0 {
        let Some(index) = labels.pop() else {
            break;
        };
        let label = labels[index];

        if let Some(destination) = label.target {
            // The first pop for a destination is its best arrival.
            if results.contains_key(&destination) {
                continue;
            }

            results.insert(destination, index);
            remaining -= 1;
            continue;
        }

        // Lazy deletion: only the best label per edge expands.
        match status.get_mut(&label.edge) {
            Some(entry) if entry.label == index && !entry.settled => entry.settled = true,
            _ => continue,
        }

        for next in network.outgoing(label.edge) {
            if !costing.allowed(next) {
                continue;
            }

            let angle = turn_angle(network.end_heading(label.edge), network.begin_heading(next));
            let turn =
                label.turn_cost + turn_costs.penalty(angle) + costing.turn_cost(label.edge, next, angle);

            let length = network.length(next);
            let full = costing.edge_cost(next, length);

            // Arrivals at destinations hosted on this edge.
            if let Some(shared) = hosted.get(&next) {
                for &(destination, percent) in shared {
                    if results.contains_key(&destination) {
                        continue;
                    }

                    let cost = label.cost + full.scaled(percent);
                    let distance = label.distance + length * percent;

                    if cost.secs > max_time {
                        continue;
                    }

                    if best_arrival
                        .get(&destination)
                        .is_none_or(|&best| cost.cost < best)
                        && labels
                            .put(Label {
                                edge: next,
                                predecessor: Some(index),
                                cost,
                                distance,
                                turn_cost: turn,
                                sortcost: cost.cost,
                                target: Some(destination),
                            })
                            .is_some()
                    {
                        best_arrival.insert(destination, cost.cost);
                    }
                }
            }

            // The full traversal to the end of the edge.
            let cost = label.cost + full;
            let distance = label.distance + length;

            if cost.secs > max_time {
                continue;
            }

            let improves = status
                .get(&next)
                .is_none_or(|existing| !existing.settled && cost.cost < labels[existing.label].cost.cost);
            if !improves {
                continue;
            }

            let sortcost = cost.cost
                + heuristic(approximator.distance(network.end_position(next)), search_radius);

            if let Some(inserted) = labels.put(Label {
                edge: next,
                predecessor: Some(index),
                cost,
                distance,
                turn_cost: turn,
                sortcost,
                target: None,
            }) {
                status.insert(
                    next,
                    EdgeStatus {
                        label: inserted,
                        settled: false,
                    },
                );
            }
        }
    }

    trace!(
        "expansion grew {} labels, reached {}/{} destinations",
        labels.len(),
        results.len(),
        locations.len().saturating_sub(1),
    );

    results
}

/// Remaining-distance heuristic, relaxed by the measurement's search
/// radius so near-destination labels sort by cost alone.
fn heuristic(approximated: f64, search_radius: f64) -> f64 {
    (approximated - search_radius).max(0.0)
}
