//! Attack arrows: a curved shaft along the control polyline ending in a head.
//!
//! The plain arrow takes its two tail corners from the first two control
//! points and runs the bone from their midpoint through the rest. The
//! flat-tail variant treats every control point as bone and derives a
//! square tail; the swallow-tail variant cuts a notch into the plain tail.

use crate::curve::quadratic_bspline_points;
use crate::float_types::Real;
use crate::plot::arrow::{HeadCap, body_points, head_points};
use crate::plot::geometry::{HALF_PI, Point, base_length, distance, is_clockwise, mid, third_point};
use crate::plot::options::{AttackArrowParams, ShapeOptions};
use crate::plot::{ShapeKind, generate};
use nalgebra::Point3;
use std::borrow::Cow;

pub fn compute_attack_arrow_positions<'a>(
    control_points: Option<&'a [Point3<Real>]>,
    options: &ShapeOptions,
) -> Cow<'a, [Point3<Real>]> {
    let params = AttackArrowParams::resolve(options);
    generate(ShapeKind::AttackArrow, control_points, |controls| {
        attack_arrow_outline(controls, &params).outline
    })
}

/// Attack arrow whose tail is a straight cut perpendicular to the first bone
/// segment, `2 * tail_width_factor * base_length` wide. The outline is closed.
pub fn compute_flat_tail_attack_arrow_positions<'a>(
    control_points: Option<&'a [Point3<Real>]>,
    options: &ShapeOptions,
) -> Cow<'a, [Point3<Real>]> {
    let params = AttackArrowParams::resolve(options);
    generate(ShapeKind::FlatTailAttackArrow, control_points, |controls| {
        flat_tail_attack_arrow_outline(controls, &params)
    })
}

/// Plain attack arrow with a notch pulled from the tail midpoint toward the
/// shaft, `swallow_tail_factor` times half the tail width deep. The outline
/// is closed.
pub fn compute_swallowtail_attack_arrow_positions<'a>(
    control_points: Option<&'a [Point3<Real>]>,
    options: &ShapeOptions,
) -> Cow<'a, [Point3<Real>]> {
    let params = AttackArrowParams::resolve(options);
    generate(ShapeKind::SwallowtailAttackArrow, control_points, |controls| {
        swallowtail_attack_arrow_outline(controls, &params)
    })
}

struct AttackArrowOutline {
    outline: Vec<Point>,
    bone: Vec<Point>,
    tail_width: Real,
}

fn attack_arrow_outline(controls: &[Point], params: &AttackArrowParams) -> AttackArrowOutline {
    let (mut tail_left, mut tail_right) = (controls[0], controls[1]);
    if is_clockwise(&controls[0], &controls[1], &controls[2]) {
        tail_left = controls[1];
        tail_right = controls[0];
    }

    let mut bone = Vec::with_capacity(controls.len() - 1);
    bone.push(mid(&tail_left, &tail_right));
    bone.extend_from_slice(&controls[2..]);

    let tail_width = distance(&tail_left, &tail_right);
    let cap = HeadCap { tail_width, head_tail_factor: params.head_tail_factor };
    let outline = shaft_and_head(&bone, tail_left, tail_right, params, cap);

    AttackArrowOutline { outline, bone, tail_width }
}

fn flat_tail_attack_arrow_outline(controls: &[Point], params: &AttackArrowParams) -> Vec<Point> {
    let half_tail = base_length(controls) * params.tail_width_factor;
    let tail_left = third_point(&controls[1], &controls[0], HALF_PI, half_tail, false);
    let tail_right = third_point(&controls[1], &controls[0], HALF_PI, half_tail, true);

    let cap = HeadCap {
        tail_width: distance(&tail_left, &tail_right),
        head_tail_factor: params.head_tail_factor,
    };
    let mut outline = shaft_and_head(controls, tail_left, tail_right, params, cap);
    outline.push(outline[0]);
    outline
}

fn swallowtail_attack_arrow_outline(controls: &[Point], params: &AttackArrowParams) -> Vec<Point> {
    let AttackArrowOutline { mut outline, bone, tail_width } = attack_arrow_outline(controls, params);
    let depth = tail_width / 2.0 * params.swallow_tail_factor;
    let notch = third_point(&bone[1], &bone[0], 0.0, depth, true);
    outline.push(notch);
    outline.push(outline[0]);
    outline
}

/// Left side (tail to neck), head, then right side back to the tail. Each
/// side is smoothed with a quadratic B-spline.
fn shaft_and_head(
    bone: &[Point],
    tail_left: Point,
    tail_right: Point,
    params: &AttackArrowParams,
    cap: HeadCap,
) -> Vec<Point> {
    let head = head_points(bone, &params.head, Some(cap));
    let (neck_left, neck_right) = (head[0], head[4]);

    let tail_width_factor = cap.tail_width / base_length(bone);
    let (body_left, body_right) = body_points(bone, &neck_left, &neck_right, tail_width_factor);

    let side = |tail: Point, body: Vec<Point>, neck: Point| -> Vec<Point> {
        let mut raw = Vec::with_capacity(body.len() + 2);
        raw.push(tail);
        raw.extend(body);
        raw.push(neck);
        quadratic_bspline_points(&raw).into_owned()
    };
    let left = side(tail_left, body_left, neck_left);
    let right = side(tail_right, body_right, neck_right);

    let mut outline = Vec::with_capacity(left.len() + head.len() + right.len() + 2);
    outline.extend(left);
    outline.extend_from_slice(&head);
    outline.extend(right.into_iter().rev());
    outline
}
