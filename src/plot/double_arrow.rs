//! Double (pincer) arrow.
//!
//! Control points: the two outer tail corners, the first head tip, and
//! optionally the second head tip and the point where both shafts meet.
//! With three points the second tip is the mirror of the first across the
//! perpendicular bisector of the tail; the meeting point defaults to the
//! tail midpoint.

use crate::curve::bezier_points;
use crate::float_types::{PI, Real, TAU};
use crate::plot::arrow::{body_points, head_points};
use crate::plot::geometry::{
    HALF_PI, Point, angle_of_three_points, base_length, distance, is_clockwise, mid, third_point,
};
use crate::plot::options::{DoubleArrowParams, ShapeOptions};
use crate::plot::{ShapeKind, generate};
use nalgebra::Point3;
use std::borrow::Cow;

/// Points of a single arm: tail side, five head points, other tail side.
const ARM_LEN: usize = 13;
const BODY_LEN: usize = (ARM_LEN - 5) / 2;

pub fn compute_double_arrow_positions<'a>(
    control_points: Option<&'a [Point3<Real>]>,
    options: &ShapeOptions,
) -> Cow<'a, [Point3<Real>]> {
    let params = DoubleArrowParams::resolve(options);
    generate(ShapeKind::DoubleArrow, control_points, |controls| {
        double_arrow_outline(controls, &params)
    })
}

fn double_arrow_outline(controls: &[Point], params: &DoubleArrowParams) -> Vec<Point> {
    let (p1, p2, p3) = (controls[0], controls[1], controls[2]);
    let p4 = controls.get(3).copied().unwrap_or_else(|| mirrored_tip(&p1, &p2, &p3));
    let joint = controls.get(4).copied().unwrap_or_else(|| mid(&p1, &p2));

    let (left, right) = if is_clockwise(&p1, &p2, &p3) {
        (
            arm_points(&p1, &joint, &p4, false, params),
            arm_points(&joint, &p2, &p3, true, params),
        )
    } else {
        (
            arm_points(&p2, &joint, &p3, false, params),
            arm_points(&joint, &p1, &p4, true, params),
        )
    };

    let (ll_body, rest) = left.split_at(BODY_LEN);
    let (l_head, lr_body) = rest.split_at(5);
    let (rl_body, rest) = right.split_at(BODY_LEN);
    let (r_head, rr_body) = rest.split_at(5);

    let mut between = Vec::with_capacity(rr_body.len() + ll_body.len() - 1);
    between.extend_from_slice(rr_body);
    between.extend_from_slice(&ll_body[1..]);

    let mut outline = Vec::new();
    outline.extend_from_slice(&bezier_points(rl_body));
    outline.extend_from_slice(r_head);
    outline.extend_from_slice(&bezier_points(&between));
    outline.extend_from_slice(l_head);
    outline.extend_from_slice(&bezier_points(lr_body));
    outline
}

/// One arm from the tail edge `start–end` to `tip`.
///
/// The bone bows away from the straight line by fixed fractions of its
/// length, to the right when `clockwise` is set. Returns
/// `[end, body-left.., neck-left, head.., neck-right, body-right.., start]`.
fn arm_points(start: &Point, end: &Point, tip: &Point, clockwise: bool, params: &DoubleArrowParams) -> [Point; ARM_LEN] {
    let tail_mid = mid(start, end);
    let len = distance(&tail_mid, tip);

    let bend1 = third_point(tip, &tail_mid, 0.0, len * 0.3, true);
    let bend2 = third_point(tip, &tail_mid, 0.0, len * 0.5, true);
    let bend1 = third_point(&tail_mid, &bend1, HALF_PI, len / 5.0, clockwise);
    let bend2 = third_point(&tail_mid, &bend2, HALF_PI, len / 4.0, clockwise);
    let bone = [tail_mid, bend1, bend2, *tip];

    let head = head_points(&bone, &params.head, None);
    let (neck_left, neck_right) = (head[0], head[4]);
    let tail_width_factor = distance(start, end) / base_length(&bone) / 2.0;
    let (body_left, body_right) = body_points(&bone, &neck_left, &neck_right, tail_width_factor);

    [
        *end,
        body_left[0],
        body_left[1],
        neck_left,
        head[0],
        head[1],
        head[2],
        head[3],
        head[4],
        neck_right,
        body_right[1],
        body_right[0],
        *start,
    ]
}

/// Mirror image of `point` across the perpendicular bisector of
/// `line_start–line_end`.
fn mirrored_tip(line_start: &Point, line_end: &Point, point: &Point) -> Point {
    let center = mid(line_start, line_end);
    let len = distance(&center, point);
    let angle = angle_of_three_points(line_start, &center, point);

    // (reduced angle, side of the foot, side of the offset)
    let (reduced, foot_side, offset_side) = if angle < HALF_PI {
        (angle, false, true)
    } else if angle < PI {
        (PI - angle, false, false)
    } else if angle < 1.5 * PI {
        (angle - PI, true, true)
    } else {
        (TAU - angle, true, false)
    };

    let foot = third_point(line_start, &center, HALF_PI, len * reduced.sin(), foot_side);
    third_point(&center, &foot, HALF_PI, len * reduced.cos(), offset_side)
}
