//! Constructors for common polygon shapes.

use super::core::Polygon;
use crate::error::{GeomError, Result};
use crate::primitives::{Circle2, Point2, Rect2};
use crate::scalar::cast;
use num_traits::Float;

impl<F: Float> Polygon<F> {
    /// Builds a closed regular polygon with `sides` vertices on a circle.
    ///
    /// Vertex `i` sits at angle `2πi / sides` from the positive x axis, so
    /// winding is CCW and the first vertex lies at `center + (radius, 0)`.
    /// The first vertex is repeated at the end.
    ///
    /// # Errors
    ///
    /// [`GeomError::InvalidConstruction`] when `sides < 3`.
    ///
    /// # Example
    ///
    /// ```
    /// use shapekit::{Point2, Polygon};
    ///
    /// let square = Polygon::regular(Point2::new(0.0_f64, 0.0), 1.0, 4).unwrap();
    /// assert!(square.is_closed());
    /// assert!((square.area() - 2.0).abs() < 1e-10);
    /// ```
    pub fn regular(center: Point2<F>, radius: F, sides: usize) -> Result<Self> {
        ring_on_circle(center, radius, sides, "regular polygon")
    }

    /// Approximates a circle with a closed regular polygon of `segments` sides.
    ///
    /// # Errors
    ///
    /// [`GeomError::InvalidConstruction`] when `segments < 3`.
    pub fn circle(circle: Circle2<F>, segments: usize) -> Result<Self> {
        ring_on_circle(circle.center, circle.radius, segments, "circle approximation")
    }

    /// Builds a closed polygon from the corners of a rectangle.
    ///
    /// Corners run top-left, top-right, bottom-right, bottom-left, which is
    /// CCW in y-up coordinates for a normalized rectangle.
    pub fn rectangle(rect: Rect2<F>) -> Self {
        let [a, b, c, d] = rect.corners();
        Self::new([a, b, c, d, a])
    }

    /// Builds a closed triangle.
    pub fn triangle(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self::new([a, b, c, a])
    }
}

fn ring_on_circle<F: Float>(
    center: Point2<F>,
    radius: F,
    sides: usize,
    shape: &'static str,
) -> Result<Polygon<F>> {
    if sides < 3 {
        tracing::debug!(shape, sides, "rejected construction");
        return Err(GeomError::InvalidConstruction {
            shape,
            min: 3,
            got: sides,
        });
    }

    let step = cast::<F>(std::f64::consts::TAU) / cast::<F>(sides as f64);
    let mut vertices = Vec::with_capacity(sides + 1);
    for i in 0..sides {
        let (sin, cos) = (step * cast::<F>(i as f64)).sin_cos();
        vertices.push(Point2::new(
            center.x + radius * cos,
            center.y + radius * sin,
        ));
    }
    vertices.push(vertices[0]);

    Ok(Polygon::from(vertices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Planar;
    use approx::assert_relative_eq;

    #[test]
    fn test_regular_square() {
        let square: Polygon<f64> = Polygon::regular(Point2::origin(), 1.0, 4).unwrap();
        assert!(square.is_closed());
        assert_eq!(square.len(), 5);
        assert_relative_eq!(square.area(), 2.0, epsilon = 1e-10);
        assert!(square.signed_area() > 0.0);
        assert!(square.is_convex());
    }

    #[test]
    fn test_regular_vertices_on_circle() {
        let center = Point2::new(3.0_f64, -2.0);
        let hexagon = Polygon::regular(center, 2.5, 6).unwrap();
        for v in hexagon.vertices() {
            assert_relative_eq!(v.distance(center), 2.5, epsilon = 1e-12);
        }
        assert!(hexagon
            .vertex(0)
            .unwrap()
            .approx_eq(Point2::new(5.5, -2.0), 1e-12));
    }

    #[test]
    fn test_regular_centroid_is_center() {
        let center = Point2::new(1.0_f64, 1.0);
        let poly = Polygon::regular(center, 3.0, 7).unwrap();
        assert!(poly.centroid().unwrap().approx_eq(center, 1e-10));
    }

    #[test]
    fn test_regular_rejects_too_few_sides() {
        let result: Result<Polygon<f64>> = Polygon::regular(Point2::origin(), 1.0, 2);
        assert_eq!(
            result,
            Err(GeomError::InvalidConstruction {
                shape: "regular polygon",
                min: 3,
                got: 2,
            })
        );
    }

    #[test]
    fn test_circle_area_converges() {
        let c = Circle2::new(Point2::origin(), 1.0_f64);
        let coarse = Polygon::circle(c, 8).unwrap();
        let fine = Polygon::circle(c, 256).unwrap();
        assert!(coarse.area() < fine.area());
        assert!(fine.area() < c.area());
        assert_relative_eq!(fine.area(), c.area(), epsilon = 1e-3);
    }

    #[test]
    fn test_rectangle() {
        let poly = Polygon::rectangle(Rect2::new(1.0_f64, 2.0, 3.0, 4.0));
        assert!(poly.is_closed());
        assert_eq!(poly.len(), 5);
        assert_relative_eq!(poly.area(), 12.0, epsilon = 1e-12);
        assert!(poly.contains_point(Point2::new(2.0, 3.0)));
    }

    #[test]
    fn test_triangle() {
        let poly = Polygon::triangle(
            Point2::new(0.0_f64, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 3.0),
        );
        assert!(poly.is_closed());
        assert_relative_eq!(poly.area(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(poly.perimeter(), 12.0, epsilon = 1e-12);
    }
}
