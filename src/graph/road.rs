use crate::graph::{EdgeIx, RoadNetwork};

use geo::{Bearing, Distance, Haversine, Point};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use smallvec::SmallVec;

/// An in-memory directed road graph with straight edges.
///
/// Nodes carry their position; edge geometry is derived from the
/// endpoints, so lengths are haversine distances and both headings of
/// an edge coincide with its bearing.
#[derive(Debug, Default)]
pub struct RoadGraph {
    graph: DiGraph<Point, ()>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
        }
    }

    /// Adds a node at `position`, returning its index.
    pub fn add_node(&mut self, position: Point) -> NodeIndex {
        self.graph.add_node(position)
    }

    /// Adds a one-way edge between two existing nodes.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) -> EdgeIx {
        self.graph.add_edge(from, to, ())
    }

    /// Adds edges in both directions between two existing nodes.
    pub fn add_edge_pair(&mut self, a: NodeIndex, b: NodeIndex) -> (EdgeIx, EdgeIx) {
        (self.add_edge(a, b), self.add_edge(b, a))
    }

    /// Positions of the edge's endpoints.
    ///
    /// Panics when the edge does not belong to this graph; edge
    /// indices are only ever produced by [`RoadGraph::add_edge`].
    fn endpoints(&self, edge: EdgeIx) -> (Point, Point) {
        let (start, end) = self
            .graph
            .edge_endpoints(edge)
            .expect("edge does not belong to this graph");

        (self.graph[start], self.graph[end])
    }
}

impl RoadNetwork for RoadGraph {
    fn outgoing(&self, edge: EdgeIx) -> SmallVec<[EdgeIx; 4]> {
        let (_, end) = self
            .graph
            .edge_endpoints(edge)
            .expect("edge does not belong to this graph");

        self.graph
            .edges_directed(end, Direction::Outgoing)
            .map(|next| next.id())
            .collect()
    }

    fn length(&self, edge: EdgeIx) -> f64 {
        let (start, end) = self.endpoints(edge);
        Haversine.distance(start, end)
    }

    fn begin_heading(&self, edge: EdgeIx) -> f64 {
        let (start, end) = self.endpoints(edge);
        Haversine.bearing(start, end)
    }

    fn end_heading(&self, edge: EdgeIx) -> f64 {
        // Straight edges hold their bearing end to end.
        self.begin_heading(edge)
    }

    fn end_position(&self, edge: EdgeIx) -> Point {
        self.endpoints(edge).1
    }
}
