//! 2D line segment type.

use super::{Intersects, Planar, Point2, Rect2, Vec2};
use crate::scalar::default_tolerance;
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Zero-length segments (`start == end`) are allowed; distance queries then
/// fall back to point distance and intersection queries report nothing.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Creates a segment of the given length starting at `start` and heading
    /// along `direction`.
    ///
    /// `direction` does not need to be unit length. A zero direction yields a
    /// zero-length segment at `start`.
    #[inline]
    pub fn from_point_and_direction(start: Point2<F>, direction: Vec2<F>, length: F) -> Self {
        Self {
            start,
            end: start + direction.normalized() * length,
        }
    }

    /// Creates a segment of the given length leaving `start` at `angle`
    /// radians from the X axis.
    #[inline]
    pub fn from_angle(start: Point2<F>, angle: F, length: F) -> Self {
        Self {
            start,
            end: start + Vec2::from_angle(angle) * length,
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the unit direction, or the zero vector for a degenerate segment.
    #[inline]
    pub fn unit_direction(self) -> Vec2<F> {
        self.direction().normalized()
    }

    /// Returns the unit normal on the left side of the segment (CCW from the direction).
    ///
    /// Zero for a degenerate segment.
    #[inline]
    pub fn normal(self) -> Vec2<F> {
        self.direction().perpendicular().normalized()
    }

    /// Returns the angle of the segment direction in radians, in `(-pi, pi]`.
    #[inline]
    pub fn angle(self) -> F {
        self.direction().angle()
    }

    /// Returns the squared length of the segment.
    #[inline]
    pub fn length_squared(self) -> F {
        self.start.distance_squared(self.end)
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the midpoint of the segment.
    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// Returns the point at parameter `t` along the segment.
    ///
    /// - `t = 0` returns `start`
    /// - `t = 1` returns `end`
    /// - Values outside [0, 1] extrapolate beyond the segment
    #[inline]
    pub fn point_at(self, t: F) -> Point2<F> {
        self.start.lerp(self.end, t)
    }

    /// Returns the reversed segment (start and end swapped).
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Computes the closest point on the segment to the given point.
    ///
    /// # Returns
    ///
    /// A tuple of (closest_point, parameter_t) where t is in [0, 1]. Only an
    /// exactly zero-length segment falls back to `(start, 0)`; very short
    /// segments still project normally.
    pub fn closest_point(self, p: Point2<F>) -> (Point2<F>, F) {
        let v = self.direction();
        let len_sq = v.length_squared();

        // Zero-length segment
        if len_sq == F::zero() {
            return (self.start, F::zero());
        }

        // Project p onto the line, clamping to [0, 1]
        let t = (p - self.start).dot(v) / len_sq;
        let t_clamped = t.max(F::zero()).min(F::one());

        (self.point_at(t_clamped), t_clamped)
    }

    /// Computes the squared distance from a point to this segment.
    #[inline]
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        let (closest, _) = self.closest_point(p);
        p.distance_squared(closest)
    }

    /// Computes the distance from a point to this segment.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        self.distance_squared_to_point(p).sqrt()
    }

    /// Returns `true` if `p` lies within `tolerance` of the segment.
    #[inline]
    pub fn contains_point(self, p: Point2<F>, tolerance: F) -> bool {
        self.distance_to_point(p) <= tolerance
    }

    /// Returns `true` if the segment is degenerate (start equals end within epsilon).
    #[inline]
    pub fn is_degenerate(self, eps: F) -> bool {
        self.length_squared() <= eps * eps
    }

    /// Computes the intersection point with another segment.
    ///
    /// Solves for the parameters of both segments with Cramer's rule. Returns
    /// `None` when the segments do not cross within their extents (endpoints
    /// included) or when they are parallel. Collinear overlapping segments
    /// are parallel too and therefore also report `None`.
    pub fn intersection(self, other: Self) -> Option<Point2<F>> {
        let d1 = self.direction();
        let d2 = other.direction();

        let denom = d1.cross(d2);
        if denom.abs() < default_tolerance() {
            return None;
        }

        let offset = other.start - self.start;
        let t = offset.cross(d2) / denom;
        let u = offset.cross(d1) / denom;

        let unit = F::zero()..=F::one();
        if unit.contains(&t) && unit.contains(&u) {
            Some(self.point_at(t))
        } else {
            None
        }
    }

    /// Returns the axis-aligned bounding box of the segment.
    #[inline]
    pub fn bounding_box(self) -> Rect2<F> {
        Rect2::from_points(self.start, self.end)
    }

    /// Moves both endpoints by `offset` in place.
    #[inline]
    pub fn translate(&mut self, offset: Vec2<F>) -> &mut Self {
        *self = self.translated(offset);
        self
    }

    /// Returns the segment moved by `offset`.
    #[inline]
    pub fn translated(self, offset: Vec2<F>) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// Returns `true` if both endpoints match within `eps`.
    #[inline]
    pub fn approx_eq(self, other: Self, eps: F) -> bool {
        self.start.approx_eq(other.start, eps) && self.end.approx_eq(other.end, eps)
    }

    /// [`approx_eq`](Self::approx_eq) with the default tolerance.
    #[inline]
    pub fn equals(self, other: Self) -> bool {
        self.approx_eq(other, default_tolerance())
    }
}

impl<F: Float> Intersects<Segment2<F>> for Segment2<F> {
    #[inline]
    fn intersects(&self, other: &Segment2<F>) -> bool {
        self.intersection(*other).is_some()
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
