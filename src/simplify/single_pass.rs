//! Single-sweep vertex reduction.
//!
//! Walks the vertices once. A vertex survives when its distance to the
//! segment joining the last kept vertex and the next original vertex exceeds
//! the tolerance. Dropped spans are never revisited, so long gentle curves
//! can lose more detail than with [`rdp`](super::rdp).
//!
//! Time complexity: O(n).

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Simplifies a polyline with a single forward sweep.
///
/// # Arguments
///
/// * `points` - The input polyline, or a closed ring with its first vertex
///   repeated at the end
/// * `tolerance` - A vertex closer than this to the segment joining the last
///   kept vertex and its successor is dropped
///
/// # Returns
///
/// The retained points in order. The first and last points are always
/// preserved, so a closed ring stays closed. Inputs with fewer than 3
/// points are returned unchanged.
///
/// # Example
///
/// ```
/// use shapekit::{Point2, simplify::single_pass};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.01), // Nearly on the line, removed
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
/// ];
///
/// let simplified = single_pass(&points, 0.1);
/// assert_eq!(simplified.len(), 3);
/// ```
pub fn single_pass<F: Float>(points: &[Point2<F>], tolerance: F) -> Vec<Point2<F>> {
    single_pass_indices(points, tolerance)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Runs [`single_pass`] and returns the indices of retained points, in order.
pub fn single_pass_indices<F: Float>(points: &[Point2<F>], tolerance: F) -> Vec<usize> {
    let n = points.len();
    if n < 3 {
        return (0..n).collect();
    }

    let mut kept = Vec::with_capacity(n);
    kept.push(0);
    let mut anchor = points[0];

    for i in 1..n - 1 {
        let span = Segment2::new(anchor, points[i + 1]);
        if span.distance_to_point(points[i]) > tolerance {
            kept.push(i);
            anchor = points[i];
        }
    }
    kept.push(n - 1);

    tracing::trace!(
        input = n,
        kept = kept.len(),
        "single-pass simplification"
    );
    kept
}
