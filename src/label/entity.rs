use crate::costing::EdgeCost;
use crate::graph::EdgeIx;

/// A reached position in the shortest-path tree.
///
/// Immutable once inserted into a [`LabelSet`](crate::label::LabelSet).
/// The predecessor is an index into the same set, never an owning
/// reference, so back-pointer chains stay valid for exactly as long as
/// the set does and cycles cannot arise.
#[derive(Clone, Copy, Debug)]
pub struct Label {
    /// The directed edge this label reached.
    pub edge: EdgeIx,

    /// Index of the label this one was relaxed from, within the same
    /// set. `None` for origin labels.
    pub predecessor: Option<usize>,

    /// Accumulated mode cost and seconds since the origin.
    pub cost: EdgeCost,

    /// Accumulated path distance since the origin, in meters.
    pub distance: f64,

    /// Turn penalties accrued up to and including the turn onto this
    /// label's edge.
    pub turn_cost: f64,

    /// Queue key: accumulated cost plus the remaining-distance
    /// heuristic at insertion time.
    pub(crate) sortcost: f64,

    /// The destination (location index) this label arrives at, when it
    /// is an arrival rather than a full edge traversal.
    pub(crate) target: Option<usize>,
}
