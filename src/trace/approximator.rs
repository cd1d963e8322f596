use geo::Point;

/// Meters spanned by one degree of latitude.
const METERS_PER_DEGREE: f64 = 110_567.0;

/// Cheap planar distance from a fixed anchor.
///
/// Precomputes the longitude scale at the anchor's latitude so that
/// per-label heuristic lookups during expansion avoid trigonometry.
/// Error against the haversine distance stays within a few percent at
/// the sub-kilometre ranges a single transition spans.
#[derive(Clone, Copy, Debug)]
pub struct DistanceApproximator {
    anchor: Point,
    meters_per_lng_degree: f64,
}

impl DistanceApproximator {
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            meters_per_lng_degree: METERS_PER_DEGREE * anchor.y().to_radians().cos(),
        }
    }

    /// Approximate meters from the anchor to `point`.
    pub fn distance(&self, point: Point) -> f64 {
        let dy = (point.y() - self.anchor.y()) * METERS_PER_DEGREE;
        let dx = (point.x() - self.anchor.x()) * self.meters_per_lng_degree;

        (dx * dx + dy * dy).sqrt()
    }
}
