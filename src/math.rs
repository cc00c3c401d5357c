//! Scalar helpers shared by the shape generators.
//!
//! None of these guard their inputs: a reversed clamp range or a zero-width
//! `map_range` input interval produces whatever the arithmetic produces.

use crate::float_types::Real;
use rand::Rng;

/// Two-sided clamp. `min > max` is not special-cased: the upper bound is
/// applied last, so the result is then always `max`.
#[inline]
pub fn clamp(value: Real, min: Real, max: Real) -> Real {
    value.max(min).min(max)
}

/// Linear interpolation from `a` (`t = 0`) to `b` (`t = 1`).
///
/// `t` is clamped to `[0, 1]` first, so the result never leaves the segment.
#[inline]
pub fn lerp(a: Real, b: Real, t: Real) -> Real {
    let t = clamp(t, 0.0, 1.0);
    a + (b - a) * t
}

/// Affine remap of `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Callers must ensure `in_min != in_max`.
#[inline]
pub fn map_range(value: Real, in_min: Real, in_max: Real, out_min: Real, out_max: Real) -> Real {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Uniform draw in `[min, max)` from the thread-local generator.
pub fn random(min: Real, max: Real) -> Real {
    random_with(&mut rand::rng(), min, max)
}

/// Uniform integer draw in `[min, max]`, both bounds inclusive.
pub fn random_int(min: i64, max: i64) -> i64 {
    random_int_with(&mut rand::rng(), min, max)
}

/// [`random`] driven by a caller-supplied generator.
///
/// Unlike `Rng::random_range` this never panics on an empty range:
/// `min == max` returns `min`, and `min > max` draws from `(max, min]`.
pub fn random_with<R: Rng>(rng: &mut R, min: Real, max: Real) -> Real {
    let unit: Real = rng.random();
    unit * (max - min) + min
}

/// [`random_int`] driven by a caller-supplied generator.
///
/// A reversed range is swapped, so `random_int_with(rng, 5, 1)` draws from
/// `[1, 5]`. Any span up to the full `i64` range is accepted.
pub fn random_int_with<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    rng.random_range(low..=high)
}
