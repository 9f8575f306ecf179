//! 2D circle type.

use super::{Intersects, Planar, Point2, Rect2, Segment2, Vec2};
use crate::error::Result;
use crate::polygon::Polygon;
use crate::scalar::{cast, default_tolerance};
use num_traits::Float;

/// A 2D circle defined by center and radius.
///
/// # Example
///
/// ```
/// use shapekit::{Circle2, Point2};
///
/// let circle: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 1.0);
/// assert!(circle.contains_point(Point2::new(0.5, 0.0)));
/// assert!(!circle.contains_point(Point2::new(2.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle2<F> {
    /// Center point of the circle
    pub center: Point2<F>,
    /// Radius of the circle (non-negative for a meaningful shape; not enforced)
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    /// Creates a new circle from center and radius.
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Creates a unit circle centered at the origin.
    #[inline]
    pub fn unit() -> Self {
        Self {
            center: Point2::origin(),
            radius: F::one(),
        }
    }

    /// Creates the circle whose diameter runs from `a` to `b`.
    #[inline]
    pub fn from_diameter(a: Point2<F>, b: Point2<F>) -> Self {
        let center = a.midpoint(b);
        Self {
            center,
            radius: center.distance(a),
        }
    }

    /// Creates the circumcircle of three points.
    ///
    /// # Arguments
    ///
    /// * `a`, `b`, `c` - Points the circle must pass through, in any order
    ///
    /// # Returns
    ///
    /// The circle through all three points, or `None` if they are collinear (the circumcircle
    /// determinant is below `1e-10` in magnitude). Callers are expected to
    /// branch on this; it is a normal outcome for degenerate input.
    pub fn from_three_points(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Option<Self> {
        let d = (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y))
            * (F::one() + F::one());

        if d.abs() < default_tolerance() {
            tracing::debug!(
                determinant = ?d.to_f64(),
                "circumcircle requested for collinear points"
            );
            return None;
        }

        let a_sq = a.length_squared();
        let b_sq = b.length_squared();
        let c_sq = c.length_squared();

        let cx = (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d;
        let cy = (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d;

        let center = Point2::new(cx, cy);
        Some(Self {
            center,
            radius: center.distance(a),
        })
    }

    /// Returns the diameter of the circle.
    #[inline]
    pub fn diameter(&self) -> F {
        self.radius + self.radius
    }

    /// Returns the area of the circle.
    #[inline]
    pub fn area(&self) -> F {
        cast::<F>(std::f64::consts::PI) * self.radius * self.radius
    }

    /// Returns the circumference of the circle.
    #[inline]
    pub fn circumference(&self) -> F {
        cast::<F>(std::f64::consts::TAU) * self.radius
    }

    /// Checks if a point is inside the circle (including boundary).
    #[inline]
    pub fn contains_point(&self, point: Point2<F>) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Checks if `other` lies entirely inside this circle (touching counts).
    #[inline]
    pub fn contains_circle(&self, other: &Circle2<F>) -> bool {
        self.center.distance(other.center) + other.radius <= self.radius
    }

    /// Returns the signed distance from a point to the circle boundary.
    ///
    /// Negative inside, positive outside.
    #[inline]
    pub fn signed_distance(&self, point: Point2<F>) -> F {
        self.center.distance(point) - self.radius
    }

    /// Returns the point on the circle at the given angle (in radians).
    ///
    /// Angle 0 is at (center.x + radius, center.y), increasing counter-clockwise.
    #[inline]
    pub fn point_at(&self, angle: F) -> Point2<F> {
        self.center + Vec2::from_angle(angle) * self.radius
    }

    /// Returns the unit tangent at the given angle (in radians).
    ///
    /// The tangent points counter-clockwise.
    #[inline]
    pub fn tangent_at(&self, angle: F) -> Vec2<F> {
        Vec2::from_angle(angle).perpendicular()
    }

    /// Returns the closest point on the circle to the given point.
    ///
    /// If the point is at the center, returns the point at angle 0.
    pub fn nearest_point(&self, point: Point2<F>) -> Point2<F> {
        let offset = point - self.center;
        let dist = offset.length();

        if dist < F::epsilon() {
            self.point_at(F::zero())
        } else {
            self.center + offset * (self.radius / dist)
        }
    }

    /// Returns the axis-aligned bounding box.
    #[inline]
    pub fn bounding_box(&self) -> Rect2<F> {
        Rect2::from_center(self.center, self.diameter(), self.diameter())
    }

    /// Approximates the circle with a closed regular polygon.
    ///
    /// Fails when `segments < 3`.
    pub fn to_polygon(&self, segments: usize) -> Result<Polygon<F>> {
        Polygon::circle(*self, segments)
    }

    /// Finds the points where the two circle boundaries cross.
    ///
    /// Returns no points when the circles are apart, nested, or identical,
    /// one point when they are tangent, and two otherwise.
    pub fn intersection_points(&self, other: &Circle2<F>) -> Vec<Point2<F>> {
        let d = self.center.distance(other.center);
        let r1 = self.radius;
        let r2 = other.radius;

        // No intersection if too far apart or one contains the other
        if d > r1 + r2 || d < (r1 - r2).abs() {
            return Vec::new();
        }

        // Coincident circles (infinite intersections)
        if d < F::epsilon() {
            return Vec::new();
        }

        // Distance from center1 to the chord joining the intersection points
        let a = (r1 * r1 - r2 * r2 + d * d) / (d + d);
        let h_sq = r1 * r1 - a * a;

        let dir = (other.center - self.center) * (F::one() / d);
        let base = self.center + dir * a;

        if h_sq < F::epsilon() {
            return vec![base];
        }

        let offset = dir.perpendicular() * h_sq.sqrt();
        vec![base - offset, base + offset]
    }

    /// Checks if this circle touches or crosses a line segment.
    #[inline]
    pub fn intersects_segment(&self, segment: &Segment2<F>) -> bool {
        segment.distance_to_point(self.center) <= self.radius
    }

    /// Moves the circle by `offset` in place.
    #[inline]
    pub fn translate(&mut self, offset: Vec2<F>) -> &mut Self {
        self.center += offset;
        self
    }

    /// Returns a circle translated by the given vector.
    #[inline]
    pub fn translated(mut self, offset: Vec2<F>) -> Self {
        self.translate(offset);
        self
    }

    /// Multiplies the radius by `factor` in place, keeping the center.
    #[inline]
    pub fn scale_radius(&mut self, factor: F) -> &mut Self {
        self.radius = self.radius * factor;
        self
    }

    /// Returns a circle scaled by the given factor around its center.
    #[inline]
    pub fn scaled(mut self, factor: F) -> Self {
        self.scale_radius(factor);
        self
    }

    /// Returns `true` if centers and radii match within `eps`.
    #[inline]
    pub fn approx_eq(&self, other: &Circle2<F>, eps: F) -> bool {
        self.center.approx_eq(other.center, eps) && (self.radius - other.radius).abs() <= eps
    }

    /// [`approx_eq`](Self::approx_eq) with the default tolerance.
    #[inline]
    pub fn equals(&self, other: &Circle2<F>) -> bool {
        self.approx_eq(other, default_tolerance())
    }
}

impl<F: Float> Intersects<Circle2<F>> for Circle2<F> {
    /// Circles intersect when their centers are no further apart than the
    /// sum of the radii. A circle nested inside another counts.
    #[inline]
    fn intersects(&self, other: &Circle2<F>) -> bool {
        let r_sum = self.radius + other.radius;
        self.center.distance_squared(other.center) <= r_sum * r_sum
    }
}

impl<F: Float> Intersects<Rect2<F>> for Circle2<F> {
    /// Clamps the center into the rectangle and compares the distance to
    /// that closest point against the radius. The rectangle must be
    /// normalized.
    #[inline]
    fn intersects(&self, rect: &Rect2<F>) -> bool {
        let closest = rect.clamp_point(self.center);
        self.center.distance_squared(closest) <= self.radius * self.radius
    }
}

impl<F: Float> Intersects<Circle2<F>> for Rect2<F> {
    #[inline]
    fn intersects(&self, circle: &Circle2<F>) -> bool {
        circle.intersects(self)
    }
}

impl<F: Float> Default for Circle2<F> {
    fn default() -> Self {
        Self::unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeomError;
    use approx::assert_relative_eq;

    #[test]
    fn test_new() {
        let c: Circle2<f64> = Circle2::new(Point2::new(1.0, 2.0), 3.0);
        assert_eq!(c.center.x, 1.0);
        assert_eq!(c.center.y, 2.0);
        assert_eq!(c.radius, 3.0);
    }

    #[test]
    fn test_unit() {
        let c: Circle2<f64> = Circle2::unit();
        assert_eq!(c.center, Point2::origin());
        assert_eq!(c.radius, 1.0);
        assert_eq!(c, Circle2::default());
    }

    #[test]
    fn test_from_diameter() {
        let c: Circle2<f64> = Circle2::from_diameter(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        assert_eq!(c.center, Point2::new(2.0, 0.0));
        assert_eq!(c.radius, 2.0);
    }

    #[test]
    fn test_from_three_points() {
        let c: Circle2<f64> = Circle2::from_three_points(
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(0.0, 4.0),
        )
        .unwrap();
        assert_relative_eq!(c.center.x, 2.0, epsilon = 1e-10);
        assert_relative_eq!(c.center.y, 2.0, epsilon = 1e-10);
        assert_relative_eq!(c.radius, 8.0_f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn test_from_three_points_collinear() {
        let c: Option<Circle2<f64>> = Circle2::from_three_points(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        );
        assert!(c.is_none());
    }

    #[test]
    fn test_diameter() {
        let c: Circle2<f64> = Circle2::new(Point2::origin(), 5.0);
        assert_eq!(c.diameter(), 10.0);
    }

    #[test]
    fn test_area() {
        let c: Circle2<f64> = Circle2::new(Point2::origin(), 1.0);
        assert_relative_eq!(c.area(), std::f64::consts::PI, epsilon = 1e-10);
    }

    #[test]
    fn test_circumference() {
        let c: Circle2<f64> = Circle2::new(Point2::origin(), 1.0);
        assert_relative_eq!(c.circumference(), std::f64::consts::TAU, epsilon = 1e-10);
    }

    #[test]
    fn test_contains_point() {
        let c: Circle2<f64> = Circle2::new(Point2::origin(), 1.0);

        assert!(c.contains_point(Point2::new(0.0, 0.0))); // Center
        assert!(c.contains_point(Point2::new(1.0, 0.0))); // On boundary
        assert!(c.contains_point(Point2::new(0.5, 0.5))); // Inside
        assert!(!c.contains_point(Point2::new(1.0, 1.0))); // Outside
    }

    #[test]
    fn test_contains_circle() {
        let big: Circle2<f64> = Circle2::new(Point2::origin(), 5.0);
        assert!(big.contains_circle(&Circle2::new(Point2::new(2.0, 0.0), 3.0)));
        assert!(!big.contains_circle(&Circle2::new(Point2::new(3.0, 0.0), 3.0)));
    }

    #[test]
    fn test_signed_distance() {
        let c: Circle2<f64> = Circle2::new(Point2::origin(), 1.0);

        assert_relative_eq!(c.signed_distance(Point2::new(0.0, 0.0)), -1.0);
        assert_relative_eq!(
            c.signed_distance(Point2::new(1.0, 0.0)),
            0.0,
            epsilon = 1e-10
        );
        assert_relative_eq!(c.signed_distance(Point2::new(2.0, 0.0)), 1.0);
    }

    #[test]
    fn test_point_at() {
        let c: Circle2<f64> = Circle2::new(Point2::origin(), 1.0);

        let p0 = c.point_at(0.0);
        assert_relative_eq!(p0.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(p0.y, 0.0, epsilon = 1e-10);

        let p90 = c.point_at(std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(p90.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(p90.y, 1.0, epsilon = 1e-10);

        let t = c.tangent_at(0.0);
        assert_relative_eq!(t.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(t.y, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_nearest_point() {
        let c: Circle2<f64> = Circle2::new(Point2::origin(), 1.0);

        // Point outside
        let nearest = c.nearest_point(Point2::new(2.0, 0.0));
        assert_relative_eq!(nearest.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(nearest.y, 0.0, epsilon = 1e-10);

        // Point inside
        let nearest = c.nearest_point(Point2::new(0.5, 0.0));
        assert_relative_eq!(nearest.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(nearest.y, 0.0, epsilon = 1e-10);

        // Point at center
        let nearest = c.nearest_point(Point2::new(0.0, 0.0));
        assert_relative_eq!(nearest.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(nearest.y, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_bounding_box() {
        let c: Circle2<f64> = Circle2::new(Point2::new(1.0, 2.0), 3.0);
        let b = c.bounding_box();
        assert_eq!(b.left(), -2.0);
        assert_eq!(b.top(), -1.0);
        assert_eq!(b.right(), 4.0);
        assert_eq!(b.bottom(), 5.0);
    }

    #[test]
    fn test_to_polygon() {
        let c: Circle2<f64> = Circle2::new(Point2::origin(), 1.0);
        let poly = c.to_polygon(4).unwrap();

        // Closed: the first vertex is repeated at the end
        assert_eq!(poly.len(), 5);
        assert!(poly.is_closed());
        let v = poly.vertices();
        assert_relative_eq!(v[0].x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(v[0].y, 0.0, epsilon = 1e-10);
        assert_relative_eq!(v[1].x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(v[1].y, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_to_polygon_rejects_too_few_segments() {
        let c: Circle2<f64> = Circle2::unit();
        assert!(matches!(
            c.to_polygon(2),
            Err(GeomError::InvalidConstruction { got: 2, .. })
        ));
    }

    #[test]
    fn test_intersection_points_none() {
        let c1: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 1.0);
        let c2: Circle2<f64> = Circle2::new(Point2::new(5.0, 0.0), 1.0);

        assert!(c1.intersection_points(&c2).is_empty());
        assert!(c1.intersection_points(&c1).is_empty());
    }

    #[test]
    fn test_intersection_points_tangent() {
        let c1: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 1.0);
        let c2: Circle2<f64> = Circle2::new(Point2::new(2.0, 0.0), 1.0);

        let result = c1.intersection_points(&c2);
        assert_eq!(result.len(), 1);
        assert_relative_eq!(result[0].x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(result[0].y, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_intersection_points_two() {
        let c1: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 1.0);
        let c2: Circle2<f64> = Circle2::new(Point2::new(1.0, 0.0), 1.0);

        let result = c1.intersection_points(&c2);
        assert_eq!(result.len(), 2);

        // Points should be at x = 0.5, y = ±sqrt(3)/2
        let sqrt3_2 = (3.0_f64).sqrt() / 2.0;
        for p in result {
            assert_relative_eq!(p.x, 0.5, epsilon = 1e-10);
            assert_relative_eq!(p.y.abs(), sqrt3_2, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_intersects_circle() {
        let c1: Circle2<f64> = Circle2::new(Point2::origin(), 1.0);
        let c2: Circle2<f64> = Circle2::new(Point2::new(1.5, 0.0), 1.0);
        let c3: Circle2<f64> = Circle2::new(Point2::new(5.0, 0.0), 1.0);
        let nested: Circle2<f64> = Circle2::new(Point2::origin(), 0.2);

        assert!(c1.intersects(&c2));
        assert!(!c1.intersects(&c3));
        assert!(c1.intersects(&nested));
    }

    #[test]
    fn test_intersects_rect() {
        let c: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 1.0);

        // Overlapping an edge
        assert!(c.intersects(&Rect2::new(0.5, -1.0, 2.0, 2.0)));
        // Near the corner but outside the radius
        let corner = Rect2::new(0.8, 0.8, 1.0, 1.0);
        assert!(!c.intersects(&corner));
        assert!(!corner.intersects(&c));
        // Circle fully inside the rectangle
        assert!(c.intersects(&Rect2::new(-5.0, -5.0, 10.0, 10.0)));
    }

    #[test]
    fn test_intersects_segment() {
        let c: Circle2<f64> = Circle2::unit();
        assert!(c.intersects_segment(&Segment2::from_coords(-2.0, 0.5, 2.0, 0.5)));
        assert!(!c.intersects_segment(&Segment2::from_coords(-2.0, 2.0, 2.0, 2.0)));
    }

    #[test]
    fn test_scaled() {
        let c: Circle2<f64> = Circle2::new(Point2::new(1.0, 1.0), 2.0);
        let scaled = c.scaled(2.0);
        assert_eq!(scaled.center, c.center);
        assert_eq!(scaled.radius, 4.0);
    }

    #[test]
    fn test_translated() {
        let c: Circle2<f64> = Circle2::new(Point2::origin(), 1.0);
        let translated = c.translated(Vec2::new(3.0, 4.0));
        assert_eq!(translated.center.x, 3.0);
        assert_eq!(translated.center.y, 4.0);
        assert_eq!(translated.radius, 1.0);
        assert!(translated.equals(&translated.clone()));
    }

    #[test]
    fn test_f32_support() {
        let c: Circle2<f32> = Circle2::new(Point2::new(1.0, 2.0), 3.0);
        assert!(c.contains_point(Point2::new(1.0, 2.0)));
    }
}
