use geo::Point;
use petgraph::graph::EdgeIndex;
use smallvec::SmallVec;

/// Identifier of a directed edge within the road network.
pub type EdgeIx = EdgeIndex;

/// The expander's view of a road network.
///
/// Everything the bounded search needs reduces to directed-edge
/// connectivity and per-edge geometry, so tiled readers and in-memory
/// graphs alike sit behind this trait. Implementations may be shared
/// read-only across matcher instances; any internal caching must be
/// safe under that sharing.
pub trait RoadNetwork {
    /// Edges departing the end node of `edge`: the candidates for the
    /// next relaxation step.
    fn outgoing(&self, edge: EdgeIx) -> SmallVec<[EdgeIx; 4]>;

    /// Length of the edge in meters.
    fn length(&self, edge: EdgeIx) -> f64;

    /// Heading (degrees from north) at which the edge departs its
    /// start node.
    fn begin_heading(&self, edge: EdgeIx) -> f64;

    /// Heading (degrees from north) at which the edge arrives at its
    /// end node.
    fn end_heading(&self, edge: EdgeIx) -> f64;

    /// Position of the edge's end node.
    fn end_position(&self, edge: EdgeIx) -> Point;
}
