//! Polygon overlap test.

use super::core::Polygon;
use crate::primitives::Intersects;
use num_traits::Float;

/// Heuristic overlap test.
///
/// Two polygons intersect when any pair of edges crosses, or when either
/// polygon contains a vertex of the other. Collinear overlapping edges do
/// not count as crossing on their own; shared boundary is picked up where a
/// neighbouring edge meets it.
impl<F: Float> Intersects<Polygon<F>> for Polygon<F> {
    fn intersects(&self, other: &Polygon<F>) -> bool {
        let ours = self.edges();
        let theirs = other.edges();

        let crossing = ours
            .iter()
            .any(|a| theirs.iter().any(|b| a.intersection(*b).is_some()));
        if crossing {
            return true;
        }

        self.vertices().iter().any(|&v| other.contains_point(v))
            || other.vertices().iter().any(|&v| self.contains_point(v))
    }
}
