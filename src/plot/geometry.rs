//! Planar construction helpers shared by the shape generators.
//!
//! All angles are radians measured counter-clockwise from +X in projected
//! space. Nothing here guards against coincident points: a zero-length
//! segment produces NaN just like the arithmetic says.

use crate::float_types::{FRAC_PI_2, PI, Real, TAU, tolerance};
use geo::{Coord, Kernel, Orientation, kernels::RobustKernel};
use nalgebra::{Point2, Vector2};

pub type Point = Point2<Real>;

#[inline]
pub fn distance(a: &Point, b: &Point) -> Real {
    (b - a).norm()
}

/// Length of the polyline.
pub fn whole_distance(points: &[Point]) -> Real {
    points.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}

/// Reference length that head, neck and tail sizes scale with:
/// `whole_distance ^ 0.99`, so sizes grow slightly slower than the shape.
pub fn base_length(points: &[Point]) -> Real {
    whole_distance(points).powf(0.99)
}

#[inline]
pub fn mid(a: &Point, b: &Point) -> Point {
    nalgebra::center(a, b)
}

/// Direction angle, in `[0, 2π)`, of the vector pointing from `end` back
/// to `start`.
///
/// Built from `asin(|Δy| / d)` and a four-branch quadrant correction on
/// the signs of `Δx`/`Δy`.
pub fn azimuth(start: &Point, end: &Point) -> Real {
    let ratio = (end.y - start.y).abs() / distance(start, end);
    // rounding can push a vertical segment past 1; NaN passes through
    let ratio = if ratio > 1.0 { 1.0 } else { ratio };
    let angle = ratio.asin();
    if end.y >= start.y && end.x >= start.x {
        angle + PI
    } else if end.y >= start.y && end.x < start.x {
        TAU - angle
    } else if end.y < start.y && end.x < start.x {
        angle
    } else {
        PI - angle
    }
}

/// Angle at `b` swept from `b→a` round to `b→c`, in `[0, 2π)`.
pub fn angle_of_three_points(a: &Point, b: &Point, c: &Point) -> Real {
    let angle = azimuth(b, a) - azimuth(b, c);
    if angle < 0.0 { angle + TAU } else { angle }
}

/// Whether `p1 → p2 → p3` turns clockwise on a y-down screen, which is a
/// left (counter-clockwise) turn in y-up projected space.
///
/// Uses an exact orientation predicate, so nearly collinear inputs get a
/// consistent answer. Collinear points are not clockwise.
pub fn is_clockwise(p1: &Point, p2: &Point, p3: &Point) -> bool {
    let coord = |p: &Point| Coord { x: p.x, y: p.y };
    RobustKernel::orient2d(coord(p1), coord(p2), coord(p3)) == Orientation::CounterClockwise
}

/// The point `distance` away from `end`, on a ray rotated by `angle` from
/// the `end → start` direction: by `+angle` when `clockwise` is set, by
/// `-angle` otherwise (the flag follows the y-down convention of
/// [`is_clockwise`]). With `angle = 0` the result walks from `end` back
/// toward `start`; with `angle = π/2` it is a perpendicular offset at `end`.
pub fn third_point(start: &Point, end: &Point, angle: Real, distance: Real, clockwise: bool) -> Point {
    let azimuth = azimuth(start, end);
    let alpha = if clockwise { azimuth + angle } else { azimuth - angle };
    end + Vector2::new(alpha.cos(), alpha.sin()) * distance
}

/// Samples the arc from `start_angle` forward to `end_angle`, `segments + 1`
/// points including both ends.
///
/// The sweep always runs forward: a negative raw sweep is wrapped by +2π,
/// never taken the short way round.
pub fn arc_points(center: &Point, radius: Real, start_angle: Real, end_angle: Real, segments: usize) -> Vec<Point> {
    let mut sweep = end_angle - start_angle;
    if sweep < 0.0 {
        sweep += TAU;
    }
    (0..=segments)
        .map(|i| {
            let angle = start_angle + sweep * i as Real / segments as Real;
            center + Vector2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Intersection of line `a–b` with line `c–d`.
pub fn intersect_point(a: &Point, b: &Point, c: &Point, d: &Point) -> Point {
    if a.y == b.y {
        let f = (d.x - c.x) / (d.y - c.y);
        return Point::new(f * (a.y - c.y) + c.x, a.y);
    }
    if c.y == d.y {
        let e = (b.x - a.x) / (b.y - a.y);
        return Point::new(e * (c.y - a.y) + a.x, c.y);
    }
    let e = (b.x - a.x) / (b.y - a.y);
    let f = (d.x - c.x) / (d.y - c.y);
    let y = (e * a.y - a.x - f * c.y + c.x) / (e - f);
    Point::new(e * y - e * a.y + a.x, y)
}

/// Centre of the circle through three points, found by intersecting the
/// perpendicular bisectors of `p1–p2` and `p1–p3`.
pub fn circle_center(p1: &Point, p2: &Point, p3: &Point) -> Point {
    let pa = mid(p1, p2);
    let pb = Point::new(pa.x - p1.y + p2.y, pa.y + p1.x - p2.x);
    let pc = mid(p1, p3);
    let pd = Point::new(pc.x - p1.y + p3.y, pc.y + p1.x - p3.x);
    intersect_point(&pa, &pb, &pc, &pd)
}

/// Sum of the unit vectors from `p2` toward `p1` and toward `p3`: the
/// (unnormalised) inner bisector at `p2`.
pub fn normal(p1: &Point, p2: &Point, p3: &Point) -> Vector2<Real> {
    (p1 - p2).normalize() + (p3 - p2).normalize()
}

/// Two tangent handles at `p2` for a smooth curve through `p1, p2, p3`.
///
/// Returns `[toward p1, toward p3]`, each perpendicular to the bisector and
/// scaled by `t` times the adjacent segment length. When the three points
/// are collinear the handles lie along the segments instead.
pub fn bisector_normals(t: Real, p1: &Point, p2: &Point, p3: &Point) -> [Point; 2] {
    let normal = normal(p1, p2, p3);
    let dist = normal.norm();
    let d1 = distance(p1, p2);
    let d2 = distance(p2, p3);

    if dist > tolerance() {
        let u = normal / dist;
        let perp = Vector2::new(-u.y, u.x);
        if is_clockwise(p1, p2, p3) {
            [p2 + perp * (t * d1), p2 - perp * (t * d2)]
        } else {
            [p2 - perp * (t * d1), p2 + perp * (t * d2)]
        }
    } else {
        [p2 + (p1 - p2) * t, p2 + (p3 - p2) * t]
    }
}

/// Right angle, re-exported for the generators' perpendicular offsets.
pub const HALF_PI: Real = FRAC_PI_2;
