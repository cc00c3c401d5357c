//! Straight-edged shapes: regular polygon and isosceles triangle.

use crate::float_types::{Real, TAU};
use crate::plot::geometry::{Point, azimuth, distance};
use crate::plot::options::{RegularPolygonParams, ShapeOptions};
use crate::plot::{ShapeKind, generate, select_controls};
use nalgebra::{Point3, Vector2};
use std::borrow::Cow;

/// `border` vertices evenly spaced around `control_points[0]`, starting at
/// `control_points[1]`. The ring is not closed.
pub fn compute_regular_positions<'a>(
    control_points: Option<&'a [Point3<Real>]>,
    options: &ShapeOptions,
) -> Cow<'a, [Point3<Real>]> {
    let params = RegularPolygonParams::resolve(options);
    generate(ShapeKind::RegularPolygon, control_points, |controls| {
        regular_polygon(&controls[0], &controls[1], params.border)
    })
}

/// The three control points as they are.
pub fn compute_isosceles_triangle_positions<'a>(
    control_points: Option<&'a [Point3<Real>]>,
    _options: &ShapeOptions,
) -> Cow<'a, [Point3<Real>]> {
    match select_controls(ShapeKind::IsoscelesTriangle, control_points) {
        Ok(points) => Cow::Owned(points.to_vec()),
        Err(early) => early,
    }
}

fn regular_polygon(center: &Point, vertex: &Point, border: usize) -> Vec<Point> {
    let radius = distance(center, vertex);
    let start = azimuth(vertex, center);
    let step = TAU / border as Real;
    (0..border)
        .map(|i| {
            let angle = start + step * i as Real;
            center + Vector2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn hexagon_starts_at_vertex() {
        let center = Point::new(3.0, -2.0);
        let vertex = Point::new(3.0, 2.0);
        let hexagon = regular_polygon(&center, &vertex, 6);
        assert_eq!(hexagon.len(), 6);
        assert_relative_eq!(hexagon[0], vertex, epsilon = 1e-9);
        for pair in hexagon.windows(2) {
            assert_relative_eq!(distance(&pair[0], &pair[1]), 4.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn triangle_is_passed_through() {
        let points = [
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(4.0, 5.0, 6.0),
            Point3::new(7.0, 8.0, 9.0),
            Point3::new(0.0, 0.0, 0.0),
        ];
        let triangle = compute_isosceles_triangle_positions(Some(&points), &ShapeOptions::new());
        assert!(matches!(triangle, Cow::Owned(_)));
        assert_eq!(&triangle[..], &points[..3]);
    }
}
