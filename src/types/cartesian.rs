//! Shared capability for points ordered by distance from the origin.

use std::cmp::Ordering;

/// A 2D point in Cartesian coordinates.
///
/// Implementors expose their coordinates through [`x`](Self::x) and
/// [`y`](Self::y); distance and ordering derive from those. Ordering
/// compares distance from the origin only, so two points with different
/// coordinates but equal distance compare equal.
pub trait CartesianPoint {
    /// The x-coordinate.
    fn x(&self) -> f64;

    /// The y-coordinate.
    fn y(&self) -> f64;

    /// Euclidean distance from the origin, recomputed on each call.
    fn distance_from_origin(&self) -> f64 {
        (self.x() * self.x() + self.y() * self.y()).sqrt()
    }

    /// Compare two points by their distance from the origin.
    ///
    /// This is a total preorder, not a total order: `(3, 4)` and `(5, 0)`
    /// are both at distance 5 and compare `Equal`. Distances go through
    /// `f64::total_cmp`, so a NaN distance still orders deterministically,
    /// after every finite value.
    fn cmp_by_distance(&self, other: &impl CartesianPoint) -> Ordering {
        self.distance_from_origin()
            .total_cmp(&other.distance_from_origin())
    }

    /// Check whether two points lie at the same distance from the origin.
    ///
    /// Distance equality, not coordinate equality.
    fn eq_by_distance(&self, other: &impl CartesianPoint) -> bool {
        self.cmp_by_distance(other) == Ordering::Equal
    }
}

/// Sort a slice of points by distance from the origin, nearest first.
pub fn sort_by_distance<P: CartesianPoint>(points: &mut [P]) {
    points.sort_by(|a, b| a.cmp_by_distance(b));
}
