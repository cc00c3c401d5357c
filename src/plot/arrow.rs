//! Arrow head and body construction shared by the attack and double arrows.
//!
//! An arrow is described by its *bone*: the polyline from the middle of the
//! tail to the tip. The head is five points around the tip, the body two
//! offset polylines that taper from the tail width to the neck width.

use crate::float_types::{PI, Real};
use crate::plot::geometry::{HALF_PI, Point, angle_of_three_points, base_length, distance, third_point, whole_distance};
use crate::plot::options::ArrowHeadParams;

/// Limits applied to the head height of attack arrows.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeadCap {
    /// Distance between the two tail corners.
    pub tail_width: Real,
    pub head_tail_factor: Real,
}

/// `[neck-left, head-left, tip, head-right, neck-right]` around the last
/// bone point.
///
/// With a `cap`, the head height is limited to `tail_width *
/// head_tail_factor`, and after the widths are fixed, to the length of the
/// last bone segment.
pub(crate) fn head_points(bone: &[Point], params: &ArrowHeadParams, cap: Option<HeadCap>) -> [Point; 5] {
    let tip = bone[bone.len() - 1];
    let before_tip = bone[bone.len() - 2];

    let mut head_height = base_length(bone) * params.head_height_factor;
    if let Some(cap) = cap {
        let limit = cap.tail_width * cap.head_tail_factor;
        if head_height > limit {
            head_height = limit;
        }
    }
    let head_width = head_height * params.head_width_factor;
    let neck_width = head_height * params.neck_width_factor;
    if cap.is_some() {
        let last_segment = distance(&tip, &before_tip);
        if head_height > last_segment {
            head_height = last_segment;
        }
    }
    let neck_height = head_height * params.neck_height_factor;

    let head_end = third_point(&before_tip, &tip, 0.0, head_height, true);
    let neck_end = third_point(&before_tip, &tip, 0.0, neck_height, true);
    let head_left = third_point(&tip, &head_end, HALF_PI, head_width, false);
    let head_right = third_point(&tip, &head_end, HALF_PI, head_width, true);
    let neck_left = third_point(&tip, &neck_end, HALF_PI, neck_width, false);
    let neck_right = third_point(&tip, &neck_end, HALF_PI, neck_width, true);

    [neck_left, head_left, tip, head_right, neck_right]
}

/// Left and right offsets at every interior bone vertex.
///
/// The half-width starts at `base_length * tail_width_factor / 2` and
/// shrinks linearly with distance along the bone toward half the neck
/// width; each offset sits on the vertex's angle bisector, so it is divided
/// by `sin(half angle)` to keep the band width constant across the joint.
pub(crate) fn body_points(
    bone: &[Point],
    neck_left: &Point,
    neck_right: &Point,
    tail_width_factor: Real,
) -> (Vec<Point>, Vec<Point>) {
    let all_len = whole_distance(bone);
    let tail_width = base_length(bone) * tail_width_factor;
    let neck_width = distance(neck_left, neck_right);
    let width_dif = (tail_width - neck_width) / 2.0;

    let interior = bone.len().saturating_sub(2);
    let mut left = Vec::with_capacity(interior);
    let mut right = Vec::with_capacity(interior);
    let mut travelled = 0.0;
    for i in 1..bone.len() - 1 {
        let angle = angle_of_three_points(&bone[i - 1], &bone[i], &bone[i + 1]) / 2.0;
        travelled += distance(&bone[i - 1], &bone[i]);
        let w = (tail_width / 2.0 - travelled / all_len * width_dif) / angle.sin();
        left.push(third_point(&bone[i - 1], &bone[i], PI - angle, w, true));
        right.push(third_point(&bone[i - 1], &bone[i], angle, w, false));
    }
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params() -> ArrowHeadParams {
        ArrowHeadParams {
            head_height_factor: 0.2,
            head_width_factor: 0.3,
            neck_height_factor: 0.85,
            neck_width_factor: 0.15,
        }
    }

    #[test]
    fn head_is_symmetric_about_the_shaft() {
        let bone = [Point::new(0.0, 0.0), Point::new(0.0, 1000.0)];
        let head = head_points(&bone, &params(), None);
        assert_eq!(head[2], bone[1]);
        assert_relative_eq!(head[1].x, -head[3].x, epsilon = 1e-9);
        assert_relative_eq!(head[1].y, head[3].y, epsilon = 1e-9);
        assert_relative_eq!(head[0].x, -head[4].x, epsilon = 1e-9);
        assert!(head[1].y < bone[1].y);
    }

    #[test]
    fn cap_limits_head_to_tail_width() {
        let bone = [Point::new(0.0, 0.0), Point::new(0.0, 1000.0)];
        let cap = HeadCap { tail_width: 10.0, head_tail_factor: 0.8 };
        let head = head_points(&bone, &params(), Some(cap));
        // head height 8, head width 8 * 0.3
        assert_relative_eq!((head[1].x - head[3].x).abs(), 2.0 * 8.0 * 0.3, epsilon = 1e-9);
    }

    #[test]
    fn straight_bone_body_tapers() {
        let bone = [Point::new(0.0, 0.0), Point::new(0.0, 50.0), Point::new(0.0, 100.0)];
        let (left, right) = body_points(&bone, &Point::new(-1.0, 90.0), &Point::new(1.0, 90.0), 0.2);
        assert_eq!(left.len(), 1);
        assert_eq!(right.len(), 1);
        let width = distance(&left[0], &right[0]);
        let tail = base_length(&bone) * 0.2;
        assert!(width < tail && width > 2.0);
        assert_relative_eq!(left[0].y, 50.0, epsilon = 1e-9);
    }
}
