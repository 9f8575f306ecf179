//! Scalar helpers shared by every shape type.
//!
//! Two tolerances are in use across the crate:
//! - [`DEFAULT_TOLERANCE`] (`1e-10`) for entity equality and degeneracy tests.
//! - [`FUZZY_TOLERANCE`] (`1e-6`) for [`fuzzy_eq`] on plain scalars.

use num_traits::Float;

/// Tolerance used by `equals` on shapes and by degeneracy checks.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Tolerance used by [`fuzzy_eq`].
pub const FUZZY_TOLERANCE: f64 = 1e-6;

/// Converts an `f64` constant into `F`.
///
/// Every `Float` type in use (`f32`, `f64`) can represent any finite `f64`
/// after rounding, so the NaN fallback is never hit in practice.
#[inline]
pub fn cast<F: Float>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::nan)
}

/// Returns [`DEFAULT_TOLERANCE`] as `F`.
#[inline]
pub fn default_tolerance<F: Float>() -> F {
    cast(DEFAULT_TOLERANCE)
}

/// Clamps `value` into `[min, max]`.
#[inline]
pub fn clamp<F: Float>(value: F, min: F, max: F) -> F {
    value.max(min).min(max)
}

/// Linearly interpolates between `a` and `b`.
///
/// `t` is not clamped; values outside [0, 1] extrapolate.
#[inline]
pub fn lerp<F: Float>(a: F, b: F, t: F) -> F {
    a + (b - a) * t
}

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad<F: Float>(degrees: F) -> F {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg<F: Float>(radians: F) -> F {
    radians.to_degrees()
}

/// Maps `value` from the range `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// An empty input range maps everything to `out_min`.
pub fn remap<F: Float>(value: F, in_min: F, in_max: F, out_min: F, out_max: F) -> F {
    let span = in_max - in_min;
    if span == F::zero() {
        return out_min;
    }
    out_min + (value - in_min) / span * (out_max - out_min)
}

/// Returns `true` if `a` and `b` differ by less than [`FUZZY_TOLERANCE`].
#[inline]
pub fn fuzzy_eq<F: Float>(a: F, b: F) -> bool {
    approx_eq(a, b, cast(FUZZY_TOLERANCE))
}

/// Returns `true` if `a` and `b` differ by at most `eps`.
#[inline]
pub fn approx_eq<F: Float>(a: F, b: F, eps: F) -> bool {
    (a - b).abs() <= eps
}

/// Rounds `value` to the given number of decimal places.
///
/// Negative `decimals` round to tens, hundreds, and so on.
pub fn round_to<F: Float>(value: F, decimals: i32) -> F {
    let factor = cast::<F>(10.0).powi(decimals);
    (value * factor).round() / factor
}

/// Returns `-1`, `0` or `1` according to the sign of `value`.
///
/// Both zeros (and NaN) map to `0`, unlike [`Float::signum`].
#[inline]
pub fn sign<F: Float>(value: F) -> F {
    if value > F::zero() {
        F::one()
    } else if value < F::zero() {
        -F::one()
    } else {
        F::zero()
    }
}
