use crate::trace::*;

use approx::assert_relative_eq;
use geo::{Distance, Haversine, Point};

#[test]
fn great_circle_is_symmetric() {
    let a = Measurement::new(Point::new(-118.618033, 34.166292), 0.0, 50.0);
    let b = Measurement::new(Point::new(-118.626895, 34.163434), 30.0, 50.0);

    let there = great_circle_distance(&a, &b);
    let back = great_circle_distance(&b, &a);

    assert!(there > 0.0);
    assert_relative_eq!(there, back);
}

#[test]
fn clock_distance_is_elapsed_seconds() {
    let a = Measurement::new(Point::new(0.0, 0.0), 100.0, 50.0);
    let b = Measurement::new(Point::new(0.0, 0.0), 112.5, 50.0);

    assert_relative_eq!(clock_distance(&a, &b), 12.5);
    assert_relative_eq!(clock_distance(&a, &a), 0.0);
}

#[test]
fn approximator_tracks_haversine_nearby() {
    let anchor = Point::new(-118.62, 34.16);
    let approximator = DistanceApproximator::new(anchor);

    let nearby = Point::new(-118.6125, 34.1655);
    let exact = Haversine.distance(anchor, nearby);

    assert!(exact > 500.0);
    assert_relative_eq!(approximator.distance(nearby), exact, max_relative = 0.02);
}

#[test]
fn approximator_is_zero_at_the_anchor() {
    let anchor = Point::new(11.576124, 48.137154);
    let approximator = DistanceApproximator::new(anchor);

    assert_relative_eq!(approximator.distance(anchor), 0.0);
}
