//! 2D point type.

use super::{Planar, Vec2};
use num_traits::Float;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A 2D point representing a position.
///
/// Generic over floating-point types (`f32` or `f64`). Points are plain
/// `Copy` values, so every shape that stores one owns an independent copy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin.
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Returns the midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        self.lerp(other, F::one() / (F::one() + F::one()))
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// When `t = 0`, returns `self`. When `t = 1`, returns `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }

    /// Returns the point rotated by `angle` radians around `pivot`.
    #[inline]
    pub fn rotated_around(self, angle: F, pivot: Self) -> Self {
        pivot + (self - pivot).rotated(angle)
    }

    /// Converts this point into a vector from the origin.
    #[inline]
    pub fn to_vec(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }
}

impl<F: Float> Planar<F> for Point2<F> {
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

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x - v.x,
            y: self.y - v.y,
        }
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> AddAssign<Vec2<F>> for Point2<F> {
    #[inline]
    fn add_assign(&mut self, v: Vec2<F>) {
        *self = *self + v;
    }
}

impl<F: Float> SubAssign<Vec2<F>> for Point2<F> {
    #[inline]
    fn sub_assign(&mut self, v: Vec2<F>) {
        *self = *self - v;
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<Vec2<F>> for Point2<F> {
    fn from(v: Vec2<F>) -> Self {
        Self::new(v.x, v.y)
    }
}
