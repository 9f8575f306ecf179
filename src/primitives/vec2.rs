//! 2D vector type for directions and offsets.

use super::{Planar, Point2};
use num_traits::Float;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector representing a direction or offset.
///
/// Generic over floating-point types (`f32` or `f64`). There is deliberately
/// no `Div` operator: division goes through [`Planar::divided`], which
/// rejects a zero divisor instead of producing infinities.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Creates a unit vector along the X axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self {
            x: F::one(),
            y: F::zero(),
        }
    }

    /// Creates a unit vector along the Y axis.
    #[inline]
    pub fn unit_y() -> Self {
        Self {
            x: F::zero(),
            y: F::one(),
        }
    }

    /// Creates a unit vector pointing at `angle` radians from the X axis.
    #[inline]
    pub fn from_angle(angle: F) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { x: cos, y: sin }
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (perpendicular dot product).
    ///
    /// Returns the z-component of the 3D cross product if the vectors
    /// were extended to 3D with z=0. Positive means `other` is counter-clockwise
    /// from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns the direction of this vector in radians, in `(-pi, pi]`.
    #[inline]
    pub fn angle(self) -> F {
        self.y.atan2(self.x)
    }

    /// Returns the signed angle from `self` to `other`, in `(-pi, pi]`.
    ///
    /// Positive when `other` is counter-clockwise from `self`.
    #[inline]
    pub fn angle_to(self, other: Self) -> F {
        self.cross(other).atan2(self.dot(other))
    }

    /// Projects this vector onto `onto`.
    ///
    /// Returns the zero vector when `onto` has zero length.
    #[inline]
    pub fn project(self, onto: Self) -> Self {
        let len_sq = onto.length_squared();
        if len_sq == F::zero() {
            return Self::zero();
        }
        onto * (self.dot(onto) / len_sq)
    }

    /// Reflects this vector about a surface with the given normal.
    ///
    /// `normal` must be unit length; the result is meaningless otherwise.
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * ((F::one() + F::one()) * self.dot(normal))
    }

    /// Returns a vector perpendicular to this one (rotated 90 degrees counter-clockwise).
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// When `t = 0`, returns `self`. When `t = 1`, returns `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }

    /// Converts this vector into the point it reaches from the origin.
    #[inline]
    pub fn to_point(self) -> Point2<F> {
        Point2::new(self.x, self.y)
    }
}

impl<F: Float> Planar<F> for Vec2<F> {
    #[inline]
    fn from_xy(x: F, y: F) -> Self {
        Self::new(x, y)
    }

    #[inline]
    fn x(&self) -> F {
        self.x
    }

    #[inline]
    fn y(&self) -> F {
        self.y
    }

    #[inline]
    fn set_xy(&mut self, x: F, y: F) {
        self.x = x;
        self.y = y;
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::sum(self, other)
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::difference(self, other)
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        self.scaled(scalar)
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<F: Float> AddAssign for Vec2<F> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.add_in_place(other);
    }
}

impl<F: Float> SubAssign for Vec2<F> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.sub_in_place(other);
    }
}

impl<F: Float> MulAssign<F> for Vec2<F> {
    #[inline]
    fn mul_assign(&mut self, scalar: F) {
        self.scale(scalar);
    }
}

impl<F: Float> Default for Vec2<F> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: Float> From<(F, F)> for Vec2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<Point2<F>> for Vec2<F> {
    fn from(p: Point2<F>) -> Self {
        Self::new(p.x, p.y)
    }
}
