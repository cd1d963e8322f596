use crate::costing::EdgeCost;
use crate::graph::{EdgeIx, PathLocation};
use crate::label::{Label, LabelSet};
use crate::state::*;

use geo::Point;
use rustc_hash::FxHashMap;
use std::sync::Arc;

fn location() -> PathLocation {
    PathLocation::on_edge(Point::new(0.0, 0.0), EdgeIx::new(0), 0.5)
}

fn label(distance: f64) -> Label {
    Label {
        edge: EdgeIx::new(0),
        predecessor: None,
        cost: EdgeCost::new(distance, 0.0),
        distance,
        turn_cost: 0.0,
        sortcost: distance,
        target: None,
    }
}

#[test]
fn stateids_order_by_time_then_id() {
    assert!(StateId::new(0, 5) < StateId::new(1, 0));
    assert!(StateId::new(2, 1) < StateId::new(2, 3));
    assert_eq!(StateId::new(4, 4), StateId::new(4, 4));
}

#[test]
fn stateid_displays_as_time_and_offset() {
    assert_eq!(StateId::new(3, 11).to_string(), "3/11");
}

#[test]
fn set_route_binds_destinations_in_order() {
    let mut set = LabelSet::new(f64::INFINITY);
    let first = set.put(label(10.0)).unwrap();
    let second = set.put(label(20.0)).unwrap();

    let state = State::new(StateId::new(0, 0), location());
    assert!(!state.routed());

    let rhs = [StateId::new(1, 0), StateId::new(1, 1), StateId::new(1, 2)];

    // The middle candidate went unreached.
    let mut results = FxHashMap::default();
    results.insert(1usize, first);
    results.insert(3usize, second);

    state.set_route(&rhs, &results, Arc::new(set));

    assert!(state.routed());
    assert_eq!(state.last_label(rhs[0]).map(|l| l.distance), Some(10.0));
    assert!(state.last_label(rhs[1]).is_none());
    assert_eq!(state.last_label(rhs[2]).map(|l| l.distance), Some(20.0));
}

#[test]
fn unrouted_states_have_no_labels() {
    let state = State::new(StateId::new(0, 0), location());

    assert!(!state.routed());
    assert!(state.last_label(StateId::new(1, 0)).is_none());
    assert!(state.labelset().is_none());
}

#[test]
fn labelset_survives_through_shared_ownership() {
    let mut set = LabelSet::new(f64::INFINITY);
    let index = set.put(label(5.0)).unwrap();

    let state = State::new(StateId::new(0, 0), location());
    let rhs = [StateId::new(1, 0)];
    let mut results = FxHashMap::default();
    results.insert(1usize, index);

    let shared = Arc::new(set);
    state.set_route(&rhs, &results, Arc::clone(&shared));
    drop(shared);

    // The state keeps the arena alive on its own.
    assert_eq!(state.labelset().unwrap().len(), 1);
}

#[test]
#[should_panic(expected = "routed twice")]
fn routing_a_state_twice_is_a_bug() {
    let state = State::new(StateId::new(0, 0), location());
    let results = FxHashMap::default();

    state.set_route(&[], &results, Arc::new(LabelSet::new(1.0)));
    state.set_route(&[], &results, Arc::new(LabelSet::new(1.0)));
}
