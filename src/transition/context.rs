use crate::state::{State, StateId};
use crate::trace::Measurement;

/// Read access to the matcher's columns and measurements.
///
/// Both lookups sit on the hot path of every transition and must be
/// O(1).
pub trait TraceSource {
    /// The candidate states of the column at `time`.
    fn column(&self, time: u32) -> &[State];

    /// The measurement the column at `time` was generated from.
    fn measurement(&self, time: u32) -> &Measurement;
}

/// The predecessor relation of the surrounding Viterbi search.
///
/// Read-only: the model uses it to find the inbound label of a state,
/// and to skip right-column candidates that already have a
/// predecessor.
pub trait PredecessorLookup {
    /// The Viterbi predecessor of `id`, or `None` when the state has
    /// not been reached yet (or opens the trace).
    fn predecessor(&self, id: StateId) -> Option<StateId>;
}
