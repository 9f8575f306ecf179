//! Axis-aligned rectangle.

use super::{Intersects, Planar, Point2, Vec2};
use crate::scalar::default_tolerance;
use num_traits::Float;

/// A 2D axis-aligned rectangle anchored at its top-left corner.
///
/// Uses canvas orientation: `top` is `y` and `bottom` is `y + height`.
///
/// `width` and `height` may be negative, for example while a drag gesture
/// runs up and to the left. Every derived query (edges, corners, area,
/// containment, intersection, union) assumes a normalized rectangle; call
/// [`normalize`](Self::normalize) first when the sign is not known. The
/// queries do not normalize on their own.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect2<F> {
    /// Left edge.
    pub x: F,
    /// Top edge.
    pub y: F,
    /// Horizontal extent.
    pub width: F,
    /// Vertical extent.
    pub height: F,
}

impl<F: Float> Rect2<F> {
    /// Creates a new rectangle. Does not validate the sign of the size.
    #[inline]
    pub fn new(x: F, y: F, width: F, height: F) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a normalized rectangle spanning two arbitrary corners.
    #[inline]
    pub fn from_points(a: Point2<F>, b: Point2<F>) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            x,
            y,
            width: a.x.max(b.x) - x,
            height: a.y.max(b.y) - y,
        }
    }

    /// Creates a rectangle of the given size centered on `center`.
    #[inline]
    pub fn from_center(center: Point2<F>, width: F, height: F) -> Self {
        let two = F::one() + F::one();
        Self {
            x: center.x - width / two,
            y: center.y - height / two,
            width,
            height,
        }
    }

    /// Creates a rectangle of the given size anchored at the origin.
    ///
    /// This is the usual shape of a viewport.
    #[inline]
    pub fn from_size(width: F, height: F) -> Self {
        Self::new(F::zero(), F::zero(), width, height)
    }

    /// Creates the smallest rectangle containing every point.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn bounding<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let mut rect = Self::new(first.x, first.y, F::zero(), F::zero());
        for p in iter {
            rect.expand_to_include(p);
        }
        Some(rect)
    }

    /// Returns `true` if width and height are both non-negative.
    #[inline]
    pub fn is_normalized(self) -> bool {
        self.width >= F::zero() && self.height >= F::zero()
    }

    /// Flips a negative width or height into a positive one in place,
    /// moving the origin so the covered area is unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        if self.width < F::zero() {
            self.x = self.x + self.width;
            self.width = -self.width;
        }
        if self.height < F::zero() {
            self.y = self.y + self.height;
            self.height = -self.height;
        }
        self
    }

    /// Returns a normalized copy.
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Left edge.
    #[inline]
    pub fn left(self) -> F {
        self.x
    }

    /// Right edge.
    #[inline]
    pub fn right(self) -> F {
        self.x + self.width
    }

    /// Top edge.
    #[inline]
    pub fn top(self) -> F {
        self.y
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(self) -> F {
        self.y + self.height
    }

    /// Top-left corner, `(left, top)`.
    #[inline]
    pub fn top_left(self) -> Point2<F> {
        Point2::new(self.left(), self.top())
    }

    /// Top-right corner.
    #[inline]
    pub fn top_right(self) -> Point2<F> {
        Point2::new(self.right(), self.top())
    }

    /// Bottom-right corner, `(right, bottom)`.
    #[inline]
    pub fn bottom_right(self) -> Point2<F> {
        Point2::new(self.right(), self.bottom())
    }

    /// Bottom-left corner.
    #[inline]
    pub fn bottom_left(self) -> Point2<F> {
        Point2::new(self.left(), self.bottom())
    }

    /// Returns the corners in order top-left, top-right, bottom-right, bottom-left.
    #[inline]
    pub fn corners(self) -> [Point2<F>; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    /// Returns the center point of the rectangle.
    #[inline]
    pub fn center(self) -> Point2<F> {
        self.top_left().midpoint(self.bottom_right())
    }

    /// Returns the size as a vector (width, height).
    #[inline]
    pub fn size(self) -> Vec2<F> {
        Vec2::new(self.width, self.height)
    }

    /// Returns the area of the rectangle.
    #[inline]
    pub fn area(self) -> F {
        self.width * self.height
    }

    /// Returns the perimeter of the rectangle.
    #[inline]
    pub fn perimeter(self) -> F {
        (self.width + self.height) * (F::one() + F::one())
    }

    /// Returns `true` if the rectangle covers no area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= F::zero() || self.height <= F::zero()
    }

    /// Returns `true` if the point is inside or on the boundary.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Returns `true` if `other` lies entirely inside this rectangle.
    ///
    /// Shared edges count as contained.
    #[inline]
    pub fn contains_rect(self, other: Self) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// Returns `true` unless the rectangles are strictly separated on an axis.
    ///
    /// Touching edges count as intersecting.
    #[inline]
    pub fn overlaps(self, other: Self) -> bool {
        !(other.left() > self.right()
            || other.right() < self.left()
            || other.top() > self.bottom()
            || other.bottom() < self.top())
    }

    /// Returns the overlap of two rectangles, if they intersect.
    ///
    /// Rectangles that only touch produce a zero-width or zero-height result.
    pub fn intersection(self, other: Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Some(Self::new(left, top, right - left, bottom - top))
    }

    /// Grows this rectangle in place to the smallest box containing both.
    pub fn union(&mut self, other: Self) -> &mut Self {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        *self = Self::new(left, top, right - left, bottom - top);
        self
    }

    /// Returns the smallest box containing both rectangles.
    #[inline]
    pub fn unioned(mut self, other: Self) -> Self {
        self.union(other);
        self
    }

    /// Grows this rectangle in place so it contains `p`.
    pub fn expand_to_include(&mut self, p: Point2<F>) -> &mut Self {
        self.union(Self::new(p.x, p.y, F::zero(), F::zero()))
    }

    /// Returns the rectangle grown by `dx` on the left and right and `dy` on
    /// the top and bottom. Negative values shrink it.
    #[inline]
    pub fn inflated(self, dx: F, dy: F) -> Self {
        let two = F::one() + F::one();
        Self::new(
            self.x - dx,
            self.y - dy,
            self.width + dx * two,
            self.height + dy * two,
        )
    }

    /// Moves the rectangle by `offset` in place.
    #[inline]
    pub fn translate(&mut self, offset: Vec2<F>) -> &mut Self {
        self.x = self.x + offset.x;
        self.y = self.y + offset.y;
        self
    }

    /// Returns the rectangle moved by `offset`.
    #[inline]
    pub fn translated(mut self, offset: Vec2<F>) -> Self {
        self.translate(offset);
        self
    }

    /// Returns the point inside the rectangle closest to `p`.
    #[inline]
    pub fn clamp_point(self, p: Point2<F>) -> Point2<F> {
        Point2::new(
            p.x.max(self.left()).min(self.right()),
            p.y.max(self.top()).min(self.bottom()),
        )
    }

    /// Returns the distance from a point to this rectangle.
    ///
    /// Returns 0 if the point is inside.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        self.clamp_point(p).distance(p)
    }

    /// Returns `true` if all four fields match within `eps`.
    #[inline]
    pub fn approx_eq(self, other: Self, eps: F) -> bool {
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.width - other.width).abs() <= eps
            && (self.height - other.height).abs() <= eps
    }

    /// [`approx_eq`](Self::approx_eq) with the default tolerance.
    #[inline]
    pub fn equals(self, other: Self) -> bool {
        self.approx_eq(other, default_tolerance())
    }
}

impl<F: Float> Intersects<Rect2<F>> for Rect2<F> {
    #[inline]
    fn intersects(&self, other: &Rect2<F>) -> bool {
        self.overlaps(*other)
    }
}
