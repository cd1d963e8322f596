use crate::graph::EdgeIx;

use geo::Point;
use smallvec::SmallVec;

/// Which side of the road a projection fell on, relative to the
/// direction of travel of its edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    Neither,
    Left,
    Right,
}

/// A measurement projected onto one directed edge.
#[derive(Clone, Copy, Debug)]
pub struct EdgeProjection {
    pub edge: EdgeIx,

    /// How far along the edge the projection sits, in [0, 1].
    pub percent_along: f64,

    pub side: Side,
}

impl EdgeProjection {
    pub fn new(edge: EdgeIx, percent_along: f64, side: Side) -> Self {
        Self {
            edge,
            percent_along,
            side,
        }
    }
}

/// A measurement snapped onto the road network: the snapped position
/// and every directed edge it may lie on.
///
/// The expander consumes these both as the search origin and as the
/// destinations of a transition.
#[derive(Clone, Debug)]
pub struct PathLocation {
    point: Point,
    edges: SmallVec<[EdgeProjection; 2]>,
}

impl PathLocation {
    pub fn new(point: Point, edges: impl IntoIterator<Item = EdgeProjection>) -> Self {
        Self {
            point,
            edges: edges.into_iter().collect(),
        }
    }

    /// A location on a single edge, offset `percent_along` into it.
    pub fn on_edge(point: Point, edge: EdgeIx, percent_along: f64) -> Self {
        Self::new(
            point,
            [EdgeProjection::new(edge, percent_along, Side::Neither)],
        )
    }

    /// The snapped position on the network.
    pub fn point(&self) -> Point {
        self.point
    }

    /// Every directed edge the location may lie on.
    pub fn edges(&self) -> &[EdgeProjection] {
        &self.edges
    }
}
