//! Smoothed closed rings: close curve and gathering place.
//!
//! Each ring vertex gets two tangent handles perpendicular to its angle
//! bisector (see [`bisector_normals`]); every edge is then a cubic Bézier
//! from one vertex to the next through the facing handles. The curve passes
//! through every vertex and is closed.

use crate::curve::cubic_bezier;
use crate::float_types::Real;
use crate::plot::geometry::{Point, bisector_normals, mid};
use crate::plot::options::{ShapeOptions, SmoothRingParams};
use crate::plot::{ShapeKind, generate};
use nalgebra::Point3;
use std::borrow::Cow;

/// Smooth closed loop through all control points.
pub fn compute_close_curve_positions<'a>(
    control_points: Option<&'a [Point3<Real>]>,
    options: &ShapeOptions,
) -> Cow<'a, [Point3<Real>]> {
    let params = SmoothRingParams::close_curve(options);
    generate(ShapeKind::CloseCurve, control_points, |controls| {
        smooth_closed_ring(controls, params.smoothing_factor, params.segments)
    })
}

/// Rounded blob through the three control points and the midpoint of the
/// first and third.
pub fn compute_gathering_place_positions<'a>(
    control_points: Option<&'a [Point3<Real>]>,
    options: &ShapeOptions,
) -> Cow<'a, [Point3<Real>]> {
    let params = SmoothRingParams::gathering_place(options);
    generate(ShapeKind::GatheringPlace, control_points, |controls| {
        let ring = [controls[0], controls[1], controls[2], mid(&controls[0], &controls[2])];
        smooth_closed_ring(&ring, params.smoothing_factor, params.segments)
    })
}

/// `ring.len() * segments + 1` points; sample `i * segments` is `ring[i]`
/// and the last point repeats the first.
fn smooth_closed_ring(ring: &[Point], smoothing: Real, segments: usize) -> Vec<Point> {
    let n = ring.len();
    let at = |i: usize| ring[i % n];

    // handles[2i] leaves ring[i], handles[2i + 1] enters ring[i + 1]
    let mut handles: Vec<Point> = (0..n)
        .flat_map(|i| bisector_normals(smoothing, &at(i), &at(i + 1), &at(i + 2)))
        .collect();
    handles.rotate_right(1);

    let mut outline = Vec::with_capacity(n * segments + 1);
    for i in 0..n {
        let (start, end) = (at(i), at(i + 1));
        for step in 0..segments {
            let t = step as Real / segments as Real;
            outline.push(cubic_bezier(&start, &handles[2 * i], &handles[2 * i + 1], &end, t));
        }
    }
    outline.push(ring[0]);
    outline
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn ring_passes_through_every_vertex() {
        let ring = square();
        let outline = smooth_closed_ring(&ring, 0.3, 10);
        assert_eq!(outline.len(), 41);
        for (i, vertex) in ring.iter().enumerate() {
            assert_eq!(outline[i * 10], *vertex);
        }
        assert_eq!(outline[0], outline[40]);
    }

    #[test]
    fn edges_bulge_outward() {
        let outline = smooth_closed_ring(&square(), 0.3, 10);
        assert!(outline[5].y < 0.0);
        assert!(outline[15].x > 1.0);
        assert!(outline[25].y > 1.0);
        assert!(outline[35].x < 0.0);
    }

    #[test]
    fn zero_smoothing_gives_straight_edges() {
        let outline = smooth_closed_ring(&square(), 0.0, 4);
        assert_relative_eq!(outline[2], Point::new(0.5, 0.0), epsilon = 1e-12);
    }
}
