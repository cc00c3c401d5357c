//! Fine arrow: a straight two-point dart, optionally with a swallow-tail notch.

use crate::curve::bezier_interpolation;
use crate::float_types::Real;
use crate::plot::geometry::{HALF_PI, Point, base_length, third_point};
use crate::plot::options::{FineArrowParams, ShapeOptions, SwallowtailFineArrowParams};
use crate::plot::{ShapeKind, generate};
use nalgebra::Point3;
use std::borrow::Cow;

/// Outline of a straight dart from `control_points[0]` (tail) to
/// `control_points[1]` (tip).
///
/// Seven points: tail-left, neck-left, head-left, tip, head-right,
/// neck-right, tail-right.
pub fn compute_fine_arrow_positions<'a>(
    control_points: Option<&'a [Point3<Real>]>,
    options: &ShapeOptions,
) -> Cow<'a, [Point3<Real>]> {
    let params = FineArrowParams::resolve(options);
    generate(ShapeKind::FineArrow, control_points, |controls| {
        fine_arrow_outline(controls, &params).to_vec()
    })
}

/// The fine arrow dart with a V notch pulled into its tail, closed and run
/// through a Catmull-Rom pass so the edges come out softened.
pub fn compute_swallowtail_fine_arrow_positions<'a>(
    control_points: Option<&'a [Point3<Real>]>,
    options: &ShapeOptions,
) -> Cow<'a, [Point3<Real>]> {
    let params = SwallowtailFineArrowParams::resolve(options);
    generate(ShapeKind::SwallowtailFineArrow, control_points, |controls| {
        swallowtail_fine_arrow_outline(controls, &params)
    })
}

pub(crate) fn fine_arrow_outline(controls: &[Point], params: &FineArrowParams) -> [Point; 7] {
    let (tail, tip) = (controls[0], controls[1]);
    let len = base_length(&controls[..2]);

    let tail_width = len * params.tail_width_factor;
    let head_width = len * params.head_width_factor;
    let neck_width = len * params.neck_width_factor;

    let tail_left = third_point(&tip, &tail, HALF_PI, tail_width, true);
    let tail_right = third_point(&tip, &tail, HALF_PI, tail_width, false);
    let head_left = third_point(&tail, &tip, params.head_angle, head_width, false);
    let head_right = third_point(&tail, &tip, params.head_angle, head_width, true);
    let neck_left = third_point(&tail, &tip, params.neck_angle, neck_width, false);
    let neck_right = third_point(&tail, &tip, params.neck_angle, neck_width, true);

    [tail_left, neck_left, head_left, tip, head_right, neck_right, tail_right]
}

fn swallowtail_fine_arrow_outline(controls: &[Point], params: &SwallowtailFineArrowParams) -> Vec<Point> {
    let (tail, tip) = (controls[0], controls[1]);
    let dart = fine_arrow_outline(controls, &params.arrow);

    let half_tail = base_length(&controls[..2]) * params.arrow.tail_width_factor;
    let notch = third_point(&tip, &tail, 0.0, half_tail * params.swallow_tail_factor, true);

    let mut ring = Vec::with_capacity(dart.len() + 2);
    ring.extend_from_slice(&dart);
    ring.push(notch);
    ring.push(dart[0]);

    bezier_interpolation(&ring, params.resolution).into_owned()
}
