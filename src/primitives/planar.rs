//! Coordinate-pair capability shared by points and vectors.

use crate::error::{GeomError, Result};
use crate::scalar::default_tolerance;
use num_traits::Float;

/// Operations common to every `(x, y)` pair.
///
/// Implemented by [`Point2`](super::Point2) and [`Vec2`](super::Vec2). The two
/// types stay distinct; this trait carries only what makes sense for both.
///
/// Each operation comes in two forms built on the same primitive:
/// - a pure form that returns a new value (`scaled`, `rotated`, ...),
/// - an in-place form that mutates the receiver and returns it for chaining
///   (`scale`, `rotate`, ...).
///
/// # Example
///
/// ```
/// use shapekit::{Planar, Point2};
///
/// let mut p: Point2<f64> = Point2::new(1.0, 2.0);
/// p.add_in_place(Point2::new(1.0, 1.0)).scale(2.0);
/// assert!(p.equals(Point2::new(4.0, 6.0)));
/// ```
pub trait Planar<F: Float>: Copy {
    /// Builds a value from raw coordinates.
    fn from_xy(x: F, y: F) -> Self;

    /// X coordinate.
    fn x(&self) -> F;

    /// Y coordinate.
    fn y(&self) -> F;

    /// Overwrites both coordinates.
    fn set_xy(&mut self, x: F, y: F);

    /// Component-wise sum of `a` and `b`.
    #[inline]
    fn sum(a: Self, b: Self) -> Self {
        Self::from_xy(a.x() + b.x(), a.y() + b.y())
    }

    /// Component-wise difference `a - b`.
    #[inline]
    fn difference(a: Self, b: Self) -> Self {
        Self::from_xy(a.x() - b.x(), a.y() - b.y())
    }

    /// Returns both coordinates multiplied by `factor`.
    #[inline]
    fn scaled(self, factor: F) -> Self {
        Self::from_xy(self.x() * factor, self.y() * factor)
    }

    /// Returns both coordinates divided by `divisor`.
    ///
    /// Fails with [`GeomError::DivisionByZero`] when `divisor` is exactly zero.
    #[inline]
    fn divided(self, divisor: F) -> Result<Self> {
        if divisor == F::zero() {
            return Err(GeomError::DivisionByZero);
        }
        Ok(Self::from_xy(self.x() / divisor, self.y() / divisor))
    }

    /// Returns the pair rotated about the origin by `angle` radians (CCW).
    #[inline]
    fn rotated(self, angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_xy(
            self.x() * cos - self.y() * sin,
            self.x() * sin + self.y() * cos,
        )
    }

    /// Returns the pair scaled to unit length.
    ///
    /// A zero-length pair is returned unchanged.
    #[inline]
    fn normalized(self) -> Self {
        let len = self.length();
        if len == F::zero() {
            self
        } else {
            Self::from_xy(self.x() / len, self.y() / len)
        }
    }

    /// Squared distance from the origin.
    #[inline]
    fn length_squared(self) -> F {
        self.x() * self.x() + self.y() * self.y()
    }

    /// Distance from the origin.
    #[inline]
    fn length(self) -> F {
        self.x().hypot(self.y())
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    fn distance_squared(self, other: Self) -> F {
        Self::difference(self, other).length_squared()
    }

    /// Euclidean distance to `other`.
    #[inline]
    fn distance(self, other: Self) -> F {
        Self::difference(self, other).length()
    }

    /// Returns `true` if each coordinate differs by at most `eps`.
    ///
    /// Coordinates are compared independently, not by Euclidean distance.
    #[inline]
    fn approx_eq(self, other: Self, eps: F) -> bool {
        (self.x() - other.x()).abs() <= eps && (self.y() - other.y()).abs() <= eps
    }

    /// [`approx_eq`](Self::approx_eq) with the default tolerance (`1e-10`).
    #[inline]
    fn equals(self, other: Self) -> bool {
        self.approx_eq(other, default_tolerance())
    }

    /// Adds `other` to this pair in place.
    #[inline]
    fn add_in_place(&mut self, other: Self) -> &mut Self {
        *self = Self::sum(*self, other);
        self
    }

    /// Subtracts `other` from this pair in place.
    #[inline]
    fn sub_in_place(&mut self, other: Self) -> &mut Self {
        *self = Self::difference(*self, other);
        self
    }

    /// Multiplies this pair by `factor` in place.
    #[inline]
    fn scale(&mut self, factor: F) -> &mut Self {
        *self = self.scaled(factor);
        self
    }

    /// Divides this pair by `divisor` in place.
    ///
    /// On [`GeomError::DivisionByZero`] the receiver is left untouched.
    #[inline]
    fn divide(&mut self, divisor: F) -> Result<&mut Self> {
        *self = self.divided(divisor)?;
        Ok(self)
    }

    /// Rotates this pair about the origin in place.
    #[inline]
    fn rotate(&mut self, angle: F) -> &mut Self {
        *self = self.rotated(angle);
        self
    }

    /// Scales this pair to unit length in place; zero length is a no-op.
    #[inline]
    fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }
}
