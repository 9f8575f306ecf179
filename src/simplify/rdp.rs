//! Ramer-Douglas-Peucker polyline simplification.
//!
//! Splits the polyline at the vertex farthest from the chord joining a
//! span's endpoints, as long as that distance exceeds the tolerance, and
//! repeats on both halves. Spans are processed from an explicit work list
//! so very long inputs cannot overflow the stack.
//!
//! Time complexity: O(n²) worst case, O(n log n) typical.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Simplifies a polyline using the Ramer-Douglas-Peucker algorithm.
///
/// # Arguments
///
/// * `points` - The input polyline as a slice of points
/// * `epsilon` - Distance tolerance. Points within this distance of the
///   simplified line are removed.
///
/// # Returns
///
/// A new vector containing only the points that remain after
/// simplification. The first and last points are always preserved, and
/// inputs with fewer than 3 points come back unchanged.
///
/// # Example
///
/// ```
/// use shapekit::{Point2, simplify::rdp};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.1),  // Close to the line, will be removed
///     Point2::new(2.0, 0.0),
///     Point2::new(3.0, 2.0),  // Far from line, will be kept
///     Point2::new(4.0, 0.0),
/// ];
///
/// let simplified = rdp(&points, 0.5);
/// assert!(simplified.len() < points.len());
/// ```
pub fn rdp<F: Float>(points: &[Point2<F>], epsilon: F) -> Vec<Point2<F>> {
    rdp_indices(points, epsilon)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Simplifies a polyline and returns the indices of retained points.
///
/// # Arguments
///
/// * `points` - The input polyline as a slice of points
/// * `epsilon` - Distance tolerance
///
/// # Returns
///
/// A vector of indices into the original point array, in order.
/// Always includes index 0 and the last index if the input has >= 2 points.
pub fn rdp_indices<F: Float>(points: &[Point2<F>], epsilon: F) -> Vec<usize> {
    let n = points.len();
    if n < 3 {
        return (0..n).collect();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut spans = vec![(0, n - 1)];
    while let Some((start, end)) = spans.pop() {
        if end <= start + 1 {
            continue;
        }

        let chord = Segment2::new(points[start], points[end]);
        let mut max_dist = F::zero();
        let mut max_idx = start;

        for (i, &p) in points.iter().enumerate().take(end).skip(start + 1) {
            let dist = chord.distance_to_point(p);
            if dist > max_dist {
                max_dist = dist;
                max_idx = i;
            }
        }

        if max_dist > epsilon {
            keep[max_idx] = true;
            spans.push((start, max_idx));
            spans.push((max_idx, end));
        }
    }

    keep.iter()
        .enumerate()
        .filter_map(|(i, &k)| k.then_some(i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rdp_empty() {
        let points: Vec<Point2<f64>> = vec![];
        assert!(rdp(&points, 1.0).is_empty());
    }

    #[test]
    fn test_rdp_two_points() {
        let points = vec![Point2::new(0.0_f64, 0.0), Point2::new(10.0, 10.0)];
        assert_eq!(rdp(&points, 1.0).len(), 2);
    }

    #[test]
    fn test_rdp_with_noise() {
        // Line with small deviations that should be smoothed out
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.05),
            Point2::new(2.0, -0.03),
            Point2::new(3.0, 0.02),
            Point2::new(4.0, 0.0),
        ];
        assert_eq!(rdp(&points, 0.1).len(), 2);
    }

    #[test]
    fn test_rdp_indices() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0), // 0 - keep
            Point2::new(1.0, 0.0), // 1 - remove
            Point2::new(2.0, 0.0), // 2 - remove
            Point2::new(3.0, 5.0), // 3 - keep (significant deviation)
            Point2::new(4.0, 0.0), // 4 - remove
            Point2::new(5.0, 0.0), // 5 - keep (endpoint)
        ];
        let indices = rdp_indices(&points, 0.5);
        assert_eq!(indices, vec![0, 2, 3, 4, 5]);
    }

    #[test]
    fn test_rdp_small_scale_line() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.5e-8, 0.0),
            Point2::new(1e-8, 0.0),
        ];
        assert_eq!(rdp_indices(&points, 1e-10), vec![0, 2]);

        let corner = vec![points[0], points[2], Point2::new(1e-8, 1e-8)];
        assert_eq!(rdp_indices(&corner, 1e-10), vec![0, 1, 2]);
    }

    #[test]
    fn test_rdp_complex_path() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.1),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.1),
            Point2::new(4.0, 0.0),
            Point2::new(5.0, 3.0), // Significant turn
            Point2::new(6.0, 3.1),
            Point2::new(7.0, 3.0),
            Point2::new(8.0, 0.0), // Return
            Point2::new(9.0, 0.1),
            Point2::new(10.0, 0.0),
        ];

        let result = rdp(&points, 0.5);

        assert!(result.len() < points.len());
        assert_relative_eq!(result[0].x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(result[result.len() - 1].x, 10.0, epsilon = 1e-10);
        assert!(result.iter().any(|p| (p.y - 3.0).abs() < 0.5));
    }
}
