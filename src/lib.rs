//! Transition costing core for Hidden-Markov-Model map matching.
//!
//! Given candidate road positions for every measurement of a trace,
//! the [`TransitionCostModel`] prices the movement between candidates
//! of adjacent time steps. Routing happens lazily: the first request
//! out of a left-hand state performs one bounded shortest-path
//! expansion towards the whole right-hand column, and every label that
//! expansion reaches is cached on the left state for the remaining
//! requests.
//!
//! The surrounding matcher supplies its columns, measurements, and
//! Viterbi predecessor relation through the seams in [`transition`];
//! the road network and travel mode attach through [`graph`] and
//! [`costing`].

pub mod costing;
pub mod graph;
pub mod label;
pub mod search;
pub mod state;
pub mod trace;
pub mod transition;

#[cfg(test)]
pub(crate) mod fixtures;

#[doc(inline)]
pub use graph::{RoadGraph, RoadNetwork};
#[doc(inline)]
pub use transition::{
    ConfigError, NO_TRANSITION, PredecessorLookup, TraceSource, TransitionConfig,
    TransitionCostModel,
};
