use crate::costing::{ModeCosting, TurnCostTable};
use crate::graph::RoadNetwork;
use crate::label::LabelSet;
use crate::search::shortest_path;
use crate::state::{State, StateId};
use crate::trace::{DistanceApproximator, clock_distance, great_circle_distance};
use crate::transition::{ConfigError, PredecessorLookup, TraceSource, TransitionConfig};

use log::debug;
use std::sync::Arc;

/// Sentinel returned by [`TransitionCostModel::cost`] when no route
/// connects the two candidates within budget. Callers must treat it
/// as "no transition", never as a large cost.
pub const NO_TRANSITION: f64 = -1.0;

/// Prices the movement between candidates of adjacent columns.
///
/// The model routes lazily: the first cost request out of a left
/// state triggers one bounded expansion towards every right-column
/// candidate the Viterbi search has not reached yet, and every label
/// that expansion touches is cached on the left state. All later
/// requests out of the same state are answered from the cache.
pub struct TransitionCostModel<'a, N, C, T, V>
where
    N: RoadNetwork,
    C: ModeCosting,
    T: TraceSource,
    V: PredecessorLookup,
{
    network: &'a N,
    costing: &'a C,
    trace: &'a T,
    viterbi: &'a V,

    config: TransitionConfig,
    inv_beta: f64,
    turn_costs: TurnCostTable,
}

impl<'a, N, C, T, V> TransitionCostModel<'a, N, C, T, V>
where
    N: RoadNetwork,
    C: ModeCosting,
    T: TraceSource,
    V: PredecessorLookup,
{
    /// Builds a model over the given collaborators.
    ///
    /// Fails when the configuration is invalid: a non-positive `beta`
    /// or a negative `turn_penalty_factor`.
    pub fn new(
        network: &'a N,
        costing: &'a C,
        trace: &'a T,
        viterbi: &'a V,
        config: TransitionConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            network,
            costing,
            trace,
            viterbi,
            config,
            inv_beta: config.beta.recip(),
            turn_costs: TurnCostTable::new(config.turn_penalty_factor),
        })
    }

    /// Transition cost from the candidate at `lhs` to the candidate
    /// at `rhs`, routing on demand.
    ///
    /// Returns [`NO_TRANSITION`] when `rhs` was unreachable within the
    /// distance and time budgets.
    pub fn cost(&self, lhs: StateId, rhs: StateId) -> f64 {
        let left = self.state(lhs);

        if !left.routed() {
            self.update_route(left, lhs, rhs);
        }

        let Some(label) = left.last_label(rhs) else {
            return NO_TRANSITION;
        };

        let left_measurement = self.trace.measurement(lhs.time());
        let right_measurement = self.trace.measurement(rhs.time());

        self.calculate(
            label.turn_cost,
            label.cost.cost,
            great_circle_distance(left_measurement, right_measurement),
            label.cost.secs,
            clock_distance(left_measurement, right_measurement),
        )
    }

    /// The state a [`StateId`] names. Right-hand states resolve by
    /// their own id, never the left one's.
    fn state(&self, id: StateId) -> &State {
        &self.trace.column(id.time())[id.id() as usize]
    }

    fn calculate(
        &self,
        turn_cost: f64,
        route_distance: f64,
        gc_dist: f64,
        route_time: f64,
        clk_dist: f64,
    ) -> f64 {
        turn_cost
            + self.inv_beta * ((route_distance - gc_dist).abs() + (route_time - clk_dist).abs())
    }

    /// Routes `lhs` towards every right-column candidate the Viterbi
    /// search has not reached yet, and caches the outcome on the left
    /// state.
    ///
    /// Panics when the predecessor of `lhs` exists but has not been
    /// routed: the driver expands columns in order, so an unrouted
    /// predecessor is caller misuse, not a recoverable condition.
    fn update_route(&self, left: &State, lhs: StateId, rhs: StateId) {
        // The label that reached the left candidate, seeding the turn
        // angle at the first junction of this search.
        let inbound = self.viterbi.predecessor(lhs).and_then(|previous| {
            let state = self.state(previous);
            if !state.routed() {
                panic!(
                    "predecessor {previous} of state {lhs} has not been routed; \
                     request transition costs in expansion order"
                );
            }

            state.last_label(lhs)
        });

        let right_column = self.trace.column(rhs.time());

        let mut locations = Vec::with_capacity(1 + right_column.len());
        locations.push(left.candidate().clone());

        let mut unreached = Vec::with_capacity(right_column.len());
        for state in right_column {
            if self.viterbi.predecessor(state.id()).is_none() {
                locations.push(state.candidate().clone());
                unreached.push(state.id());
            }
        }

        let left_measurement = self.trace.measurement(lhs.time());
        let right_measurement = self.trace.measurement(rhs.time());

        let gc_dist = great_circle_distance(left_measurement, right_measurement);
        let max_distance =
            (gc_dist * self.config.max_route_distance_factor).min(self.config.breakage_distance);

        let clk_dist = clock_distance(left_measurement, right_measurement);
        let max_time = clk_dist * self.config.max_route_time_factor;

        debug!(
            "routing state {lhs} towards {} unreached candidates (ceilings {:.0}m, {:.0}s)",
            unreached.len(),
            max_distance,
            max_time,
        );

        // Coincident measurements yield a zero distance budget; the
        // floor of one meter keeps the set able to hold the short
        // labels that still connect them. The set's ceiling is the
        // expansion's only distance bound.
        let mut labelset = LabelSet::new(max_distance.ceil().max(1.0));

        let approximator = DistanceApproximator::new(right_measurement.point());

        let results = shortest_path(
            self.network,
            &locations,
            0,
            &mut labelset,
            &approximator,
            right_measurement.search_radius(),
            self.costing,
            inbound.as_ref(),
            &self.turn_costs,
            max_time.ceil(),
        );

        left.set_route(&unreached, &results, Arc::new(labelset));
    }
}
