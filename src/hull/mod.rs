//! Convex hull of a point set.
//!
//! # Example
//!
//! ```
//! use shapekit::hull::convex_hull;
//! use shapekit::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 0.5), // Interior point
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//!
//! let hull = convex_hull(&points);
//!
//! // Hull should be the 4 corners (interior point excluded)
//! assert_eq!(hull.len(), 4);
//! ```

use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the convex hull of a set of points using Andrew's monotone chain algorithm.
///
/// Returns the hull vertices in counter-clockwise order, starting from the
/// lexicographically smallest point. The first and last points are NOT the
/// same (the hull is implicitly closed).
///
/// # Algorithm
///
/// 1. Sort points lexicographically (by x, then by y)
/// 2. Build the lower hull from left to right
/// 3. Build the upper hull from right to left
/// 4. Concatenate, removing duplicate endpoints
///
/// A candidate pops the previous hull point whenever the turn is not
/// strictly to the left (cross product `<= 0`), so collinear points on the
/// boundary are dropped.
///
/// # Complexity
///
/// - Time: O(n log n) due to sorting
/// - Space: O(n)
///
/// # Returns
///
/// The convex hull vertices in CCW order. Inputs with fewer than 3 points
/// are returned unchanged.
pub fn convex_hull<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    convex_hull_indices(points)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Computes the convex hull and returns the indices of hull vertices.
///
/// This is useful when you need to track which original points are on the hull.
///
/// # Example
///
/// ```
/// use shapekit::hull::convex_hull_indices;
/// use shapekit::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),  // 0
///     Point2::new(1.0, 0.0),  // 1
///     Point2::new(0.5, 0.5),  // 2 - interior
///     Point2::new(1.0, 1.0),  // 3
///     Point2::new(0.0, 1.0),  // 4
/// ];
///
/// let indices = convex_hull_indices(&points);
///
/// // Should not include index 2 (interior point)
/// assert!(!indices.contains(&2));
/// assert_eq!(indices.len(), 4);
/// ```
pub fn convex_hull_indices<F: Float>(points: &[Point2<F>]) -> Vec<usize> {
    if points.len() < 3 {
        return (0..points.len()).collect();
    }

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| lexicographic(points[a], points[b]));

    let lower = half_hull(points, order.iter().copied());
    let upper = half_hull(points, order.iter().rev().copied());

    // The last point of each chain starts the other one
    let mut hull = lower;
    hull.pop();
    hull.extend_from_slice(&upper[..upper.len() - 1]);

    tracing::trace!(input = points.len(), hull = hull.len(), "convex hull");
    hull
}

/// Builds one monotone chain, keeping only strict left turns.
fn half_hull<F: Float>(points: &[Point2<F>], order: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut chain: Vec<usize> = Vec::new();
    for idx in order {
        let p = points[idx];
        while chain.len() >= 2
            && cross(
                points[chain[chain.len() - 2]],
                points[chain[chain.len() - 1]],
                p,
            ) <= F::zero()
        {
            chain.pop();
        }
        chain.push(idx);
    }
    chain
}

fn lexicographic<F: Float>(a: Point2<F>, b: Point2<F>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

/// Cross product of `(a - o)` and `(b - o)`.
#[inline]
fn cross<F: Float>(o: Point2<F>, a: Point2<F>, b: Point2<F>) -> F {
    (a - o).cross(b - o)
}
