//! Curve evaluation and polyline smoothing.
//!
//! Everything here is generic over `nalgebra::Point<Real, D>`, so the same
//! code smooths planar `Point2`s inside the shape generators and `Point3`s
//! handed in by callers.

use crate::float_types::Real;
use nalgebra::Point;
use std::borrow::Cow;

pub use crate::float_types::DEFAULT_RESOLUTION;

/// Steps used by [`bezier_points`] across the whole curve.
const BEZIER_STEPS: usize = 100;
/// Steps used by [`quadratic_bspline_points`] inside each knot span.
const BSPLINE_STEPS: usize = 20;

/// **Uniform Catmull-Rom segment**
///
/// Point at `t ∈ [0, 1]` on the segment from `p1` to `p2`; `p0` and `p3`
/// only shape the tangents. Evaluated in cubic Hermite form:
/// ```text
/// m₁ = (p₂ - p₀)/2        m₂ = (p₃ - p₁)/2
/// p(t) = h₀₀(t)·p₁ + h₁₀(t)·m₁ + h₀₁(t)·p₂ + h₁₁(t)·m₂
/// ```
/// All basis weights are exactly 0 or 1 at the ends, so `t = 0` yields `p1`
/// and `t = 1` yields `p2` bit for bit.
pub fn catmull_rom_spline<const D: usize>(
    p0: &Point<Real, D>,
    p1: &Point<Real, D>,
    p2: &Point<Real, D>,
    p3: &Point<Real, D>,
    t: Real,
) -> Point<Real, D> {
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    let m1 = (p2 - p0) * 0.5;
    let m2 = (p3 - p1) * 0.5;

    Point::from(p1.coords * h00 + m1 * h10 + p2.coords * h01 + m2 * h11)
}

/// Chains [`catmull_rom_spline`] through every consecutive pair of `points`,
/// `resolution` samples per span, then appends the exact final point.
///
/// The tangent window is clamped at both ends by reusing the end point.
/// Output length is `(N - 1) * resolution + 1`. Fewer than three points are
/// handed back untouched (`Cow::Borrowed`).
pub fn bezier_interpolation<const D: usize>(
    points: &[Point<Real, D>],
    resolution: usize,
) -> Cow<'_, [Point<Real, D>]> {
    let n = points.len();
    if n < 3 {
        return Cow::Borrowed(points);
    }

    let mut result = Vec::with_capacity((n - 1) * resolution + 1);
    for i in 0..n - 1 {
        let p0 = &points[i.saturating_sub(1)];
        let p1 = &points[i];
        let p2 = &points[i + 1];
        let p3 = &points[(i + 2).min(n - 1)];
        for step in 0..resolution {
            let t = step as Real / resolution as Real;
            result.push(catmull_rom_spline(p0, p1, p2, p3, t));
        }
    }
    result.push(points[n - 1]);

    Cow::Owned(result)
}

/// Quadratic Bézier in Bernstein form: `(1-t)²·p₀ + 2(1-t)t·p₁ + t²·p₂`.
pub fn quadratic_bezier<const D: usize>(
    p0: &Point<Real, D>,
    p1: &Point<Real, D>,
    p2: &Point<Real, D>,
    t: Real,
) -> Point<Real, D> {
    let u = 1.0 - t;
    Point::from(p0.coords * (u * u) + p1.coords * (2.0 * u * t) + p2.coords * (t * t))
}

/// Cubic Bézier in Bernstein form:
/// `(1-t)³·p₀ + 3(1-t)²t·p₁ + 3(1-t)t²·p₂ + t³·p₃`.
pub fn cubic_bezier<const D: usize>(
    p0: &Point<Real, D>,
    p1: &Point<Real, D>,
    p2: &Point<Real, D>,
    p3: &Point<Real, D>,
    t: Real,
) -> Point<Real, D> {
    let u = 1.0 - t;
    Point::from(
        p0.coords * (u * u * u)
            + p1.coords * (3.0 * u * u * t)
            + p2.coords * (3.0 * u * t * t)
            + p3.coords * (t * t * t),
    )
}

/// Splits `points` into overlapping 3-point windows (stride 2: `[0,1,2]`,
/// `[2,3,4]`, ...) and samples each as a [`quadratic_bezier`] with
/// `resolution` steps. The last window's end point closes the curve; a
/// trailing control point that fits no window is appended as-is.
///
/// Fewer than three points are handed back untouched.
pub fn simple_bezier_curve<const D: usize>(
    points: &[Point<Real, D>],
    resolution: usize,
) -> Cow<'_, [Point<Real, D>]> {
    let n = points.len();
    if n < 3 {
        return Cow::Borrowed(points);
    }

    let mut result = Vec::new();
    let mut start = 0;
    while start + 2 < n {
        let [p0, p1, p2] = [&points[start], &points[start + 1], &points[start + 2]];
        for step in 0..resolution {
            let t = step as Real / resolution as Real;
            result.push(quadratic_bezier(p0, p1, p2, t));
        }
        start += 2;
    }
    result.extend_from_slice(&points[start..]);

    Cow::Owned(result)
}

/// Single Bézier curve of degree `N - 1` through all of `points`, sampled at
/// 100 uniform steps, followed by the last control point.
///
/// Two or fewer points are handed back untouched.
pub fn bezier_points<const D: usize>(points: &[Point<Real, D>]) -> Cow<'_, [Point<Real, D>]> {
    if points.len() <= 2 {
        return Cow::Borrowed(points);
    }

    let degree = points.len() - 1;
    let mut result = Vec::with_capacity(BEZIER_STEPS + 1);
    for step in 0..BEZIER_STEPS {
        let t = step as Real / BEZIER_STEPS as Real;
        let mut acc = Point::<Real, D>::origin().coords;
        for (index, point) in points.iter().enumerate() {
            let weight = binomial(degree, index)
                * t.powi(index as i32)
                * (1.0 - t).powi((degree - index) as i32);
            acc += point.coords * weight;
        }
        result.push(Point::from(acc));
    }
    result.push(points[degree]);

    Cow::Owned(result)
}

/// Uniform quadratic B-spline through `points`, pinned to the first and last
/// control points, 20 steps per knot span.
///
/// Two or fewer points are handed back untouched.
pub fn quadratic_bspline_points<const D: usize>(
    points: &[Point<Real, D>],
) -> Cow<'_, [Point<Real, D>]> {
    if points.len() <= 2 {
        return Cow::Borrowed(points);
    }

    let spans = points.len() - 2;
    let mut result = Vec::with_capacity(spans * BSPLINE_STEPS + 2);
    result.push(points[0]);
    for span in 0..spans {
        for step in 0..BSPLINE_STEPS {
            let t = step as Real / BSPLINE_STEPS as Real;
            let mut acc = Point::<Real, D>::origin().coords;
            for k in 0..3 {
                acc += points[span + k].coords * quadratic_bspline_factor(k, t);
            }
            result.push(Point::from(acc));
        }
    }
    result.push(points[points.len() - 1]);

    Cow::Owned(result)
}

fn quadratic_bspline_factor(k: usize, t: Real) -> Real {
    match k {
        0 => (t - 1.0) * (t - 1.0) / 2.0,
        1 => (-2.0 * t * t + 2.0 * t + 1.0) / 2.0,
        2 => t * t / 2.0,
        _ => 0.0,
    }
}

fn binomial(n: usize, k: usize) -> Real {
    factorial(n) / (factorial(k) * factorial(n - k))
}

fn factorial(n: usize) -> Real {
    (2..=n).fold(1.0, |acc, i| acc * i as Real)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point2, Point3};

    #[test]
    fn binomial_row() {
        let row: Vec<Real> = (0..=4).map(|k| binomial(4, k)).collect();
        assert_eq!(row, vec![1.0, 4.0, 6.0, 4.0, 1.0]);
    }

    #[test]
    fn bspline_factors_partition_unity() {
        for i in 0..=10 {
            let t = i as Real / 10.0;
            let sum: Real = (0..3).map(|k| quadratic_bspline_factor(k, t)).sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn catmull_rom_reproduces_straight_lines() {
        let pts = [0.0, 1.0, 2.0, 3.0].map(|x| Point2::new(x, 2.0 * x));
        let mid = catmull_rom_spline(&pts[0], &pts[1], &pts[2], &pts[3], 0.5);
        assert!((mid - Point2::new(1.5, 3.0)).norm() < 1e-12);
    }

    #[test]
    fn simple_bezier_keeps_trailing_point() {
        let pts: Vec<Point3<Real>> = (0..4).map(|i| Point3::new(i as Real, 0.0, 0.0)).collect();
        let out = simple_bezier_curve(&pts, 5);
        // one window [0,1,2] sampled 5 times, then points 2 and 3
        assert_eq!(out.len(), 7);
        assert_eq!(out[5], pts[2]);
        assert_eq!(out[6], pts[3]);
    }

    #[test]
    fn bezier_points_has_fixed_sample_count() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(1.0, 2.0), Point2::new(2.0, 0.0)];
        let out = bezier_points(&pts);
        assert_eq!(out.len(), BEZIER_STEPS + 1);
        assert_eq!(out[0], pts[0]);
        assert_eq!(out[BEZIER_STEPS], pts[2]);
    }

    #[test]
    fn bspline_is_pinned_to_ends() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 1.0),
        ];
        let out = quadratic_bspline_points(&pts);
        assert_eq!(out.len(), 2 * BSPLINE_STEPS + 2);
        assert_eq!(out[0], pts[0]);
        assert_eq!(*out.last().unwrap(), pts[3]);
        // span start is the midpoint of its first two control points
        assert!((out[1] - Point2::new(0.5, 0.5)).norm() < 1e-12);
    }
}
