//! Lune (circular segment): the chord between the first two control points
//! closed by the arc of the circle through all three.

use crate::float_types::Real;
use crate::plot::geometry::{Point, arc_points, azimuth, circle_center, distance, is_clockwise};
use crate::plot::options::{ArcParams, ShapeOptions};
use crate::plot::{ShapeKind, generate};
use nalgebra::Point3;
use std::borrow::Cow;

/// `segments + 1` arc samples from one chord end to the other, passing
/// the third control point, then the first sample again.
pub fn compute_lune_positions<'a>(
    control_points: Option<&'a [Point3<Real>]>,
    options: &ShapeOptions,
) -> Cow<'a, [Point3<Real>]> {
    let params = ArcParams::resolve(options);
    generate(ShapeKind::Lune, control_points, |controls| {
        lune_outline(&controls[0], &controls[1], &controls[2], params.segments)
    })
}

fn lune_outline(p1: &Point, p2: &Point, p3: &Point, segments: usize) -> Vec<Point> {
    let center = circle_center(p1, p2, p3);
    let radius = distance(p1, &center);
    let angle1 = azimuth(p1, &center);
    let angle2 = azimuth(p2, &center);
    let (start, end) = if is_clockwise(p1, p2, p3) {
        (angle2, angle1)
    } else {
        (angle1, angle2)
    };

    let mut outline = arc_points(&center, radius, start, end, segments);
    outline.push(outline[0]);
    outline
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arc_passes_through_the_third_point() {
        let (a, b) = (Point::new(10.0, 0.0), Point::new(-10.0, 0.0));
        for apex in [Point::new(0.0, 10.0), Point::new(0.0, -10.0)] {
            let outline = lune_outline(&a, &b, &apex, 100);
            assert_eq!(outline.len(), 102);
            assert_eq!(outline[0], outline[101]);
            assert_relative_eq!(outline[50], apex, epsilon = 1e-9);
        }
    }
}
