//! Sector: centre plus two boundary points.

use crate::coords::projection::to_planar;
use crate::float_types::Real;
use crate::plot::geometry::{Point, arc_points, azimuth, distance};
use crate::plot::options::{ArcParams, ShapeOptions};
use crate::plot::{ShapeKind, generate};
use nalgebra::Point3;
use std::borrow::Cow;

/// Radius and sweep of a sector, in projected metres and radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SectorParameters {
    pub center: Point,
    /// Distance from the centre to the second control point.
    pub radius: Real,
    /// Direction of the second control point seen from the centre.
    pub start_angle: Real,
    /// Direction of the third control point seen from the centre.
    pub end_angle: Real,
}

impl SectorParameters {
    fn from_controls(controls: &[Point]) -> Self {
        let (center, start, end) = (controls[0], controls[1], controls[2]);
        Self {
            center,
            radius: distance(&center, &start),
            start_angle: azimuth(&start, &center),
            end_angle: azimuth(&end, &center),
        }
    }
}

/// Arc from the start to the end boundary, always sweeping forward (a
/// negative raw sweep wraps by 2π), then the centre, then the first arc
/// point again.
///
/// With `segments = N` the outline has `N + 3` points and its first and last
/// points are identical. The third control point only sets the end
/// direction; the radius comes from the second.
pub fn compute_sector_positions<'a>(
    control_points: Option<&'a [Point3<Real>]>,
    options: &ShapeOptions,
) -> Cow<'a, [Point3<Real>]> {
    let params = ArcParams::resolve(options);
    generate(ShapeKind::Sector, control_points, |controls| {
        sector_outline(&SectorParameters::from_controls(controls), params.segments)
    })
}

/// Geometry of the sector the same control points would draw, or `None`
/// when fewer than three are given or one of them cannot be projected.
pub fn sector_parameters(control_points: Option<&[Point3<Real>]>) -> Option<SectorParameters> {
    let points = control_points?;
    if points.len() < ShapeKind::Sector.min_points() {
        return None;
    }
    let controls = points[..3]
        .iter()
        .map(|p| to_planar(p).map(|planar| planar.xy()))
        .collect::<Option<Vec<Point>>>()?;
    Some(SectorParameters::from_controls(&controls))
}

fn sector_outline(sector: &SectorParameters, segments: usize) -> Vec<Point> {
    let mut outline = arc_points(
        &sector.center,
        sector.radius,
        sector.start_angle,
        sector.end_angle,
        segments,
    );
    outline.push(sector.center);
    outline.push(outline[0]);
    outline
}
