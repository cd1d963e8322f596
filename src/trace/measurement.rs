use geo::{Distance, Haversine, Point};

/// A single positional observation within a trace.
///
/// Measurements are immutable once produced: decimation and candidate
/// search both run before any transition is priced, so the model only
/// ever reads them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    point: Point,
    epoch_time: f64,
    search_radius: f64,
}

impl Measurement {
    pub fn new(point: Point, epoch_time: f64, search_radius: f64) -> Self {
        Self {
            point,
            epoch_time,
            search_radius,
        }
    }

    /// The observed (lng, lat) position.
    pub fn point(&self) -> Point {
        self.point
    }

    /// Seconds since the epoch at which the fix was taken.
    pub fn epoch_time(&self) -> f64 {
        self.epoch_time
    }

    /// Radius (meters) the candidate search used around this fix. The
    /// expander relaxes its heuristic by the same amount.
    pub fn search_radius(&self) -> f64 {
        self.search_radius
    }
}

/// Great-circle distance between two measurements, in meters.
pub fn great_circle_distance(left: &Measurement, right: &Measurement) -> f64 {
    Haversine.distance(left.point, right.point)
}

/// Elapsed clock time from `left` to `right`, in seconds.
///
/// Traces are time ordered, so for adjacent measurements this is
/// non-negative. It may be zero.
pub fn clock_distance(left: &Measurement, right: &Measurement) -> f64 {
    right.epoch_time - left.epoch_time
}
