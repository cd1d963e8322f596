//! Hand-built fixtures shared across unit tests.

use crate::graph::{EdgeIx, RoadNetwork};

use geo::Point;
use smallvec::SmallVec;

/// A synthetic directed-edge network with exact lengths and headings,
/// independent of any real geometry. End positions default to the
/// origin so the expansion heuristic stays inert unless a test says
/// otherwise.
#[derive(Default)]
pub(crate) struct FixedNetwork {
    edges: Vec<FixedEdge>,
}

struct FixedEdge {
    length: f64,
    heading: f64,
    end_position: Point,
    outgoing: Vec<usize>,
}

impl FixedNetwork {
    pub(crate) fn edge(&mut self, length: f64, heading: f64) -> EdgeIx {
        self.edges.push(FixedEdge {
            length,
            heading,
            end_position: Point::new(0.0, 0.0),
            outgoing: Vec::new(),
        });

        EdgeIx::new(self.edges.len() - 1)
    }

    pub(crate) fn connect(&mut self, from: EdgeIx, to: EdgeIx) {
        self.edges[from.index()].outgoing.push(to.index());
    }
}

impl RoadNetwork for FixedNetwork {
    fn outgoing(&self, edge: EdgeIx) -> SmallVec<[EdgeIx; 4]> {
        self.edges[edge.index()]
            .outgoing
            .iter()
            .map(|&next| EdgeIx::new(next))
            .collect()
    }

    fn length(&self, edge: EdgeIx) -> f64 {
        self.edges[edge.index()].length
    }

    fn begin_heading(&self, edge: EdgeIx) -> f64 {
        self.edges[edge.index()].heading
    }

    fn end_heading(&self, edge: EdgeIx) -> f64 {
        self.edges[edge.index()].heading
    }

    fn end_position(&self, edge: EdgeIx) -> Point {
        self.edges[edge.index()].end_position
    }
}
