mod support;

use milplot::{
    ShapeKind, ShapeOptions, compute_fine_arrow_positions, compute_positions, compute_regular_positions,
    compute_sector_positions, float_types::Real, sector_parameters,
};
use nalgebra::{Point2, Vector2};

/// Perpendicular distance of `p` from the line through `a` and `b`.
fn offset_from_line(a: &Point2<Real>, b: &Point2<Real>, p: &Point2<Real>) -> Real {
    let dir: Vector2<Real> = (b - a).normalize();
    let v = p - a;
    (dir.x * v.y - dir.y * v.x).abs()
}

#[test]
fn outline_lengths_with_defaults() {
    support::init_logging();
    let points = support::triangle();
    let expected = [
        (ShapeKind::FineArrow, 7),
        (ShapeKind::SwallowtailFineArrow, 8 * 8 + 1),
        (ShapeKind::AttackArrow, 9),
        (ShapeKind::FlatTailAttackArrow, 22 + 5 + 22 + 1),
        (ShapeKind::SwallowtailAttackArrow, 11),
        (ShapeKind::DoubleArrow, 3 * 101 + 2 * 5),
        (ShapeKind::Sector, 103),
        (ShapeKind::RegularPolygon, 6),
        (ShapeKind::IsoscelesTriangle, 3),
        (ShapeKind::Lune, 102),
        (ShapeKind::CloseCurve, 301),
        (ShapeKind::GatheringPlace, 401),
    ];
    for (kind, len) in expected {
        let outline = compute_positions(kind, Some(&points), &ShapeOptions::default());
        assert_eq!(outline.len(), len, "{kind}");
    }
}

#[test]
fn outline_takes_height_of_first_control_point() {
    let [a, b, c] = support::triangle();
    let mut lifted = milplot::to_planar(&c).unwrap();
    lifted.z = 500.0;
    let raised = milplot::to_spatial(&lifted).unwrap();
    let controls = [a, b, raised];
    let outline = compute_positions(ShapeKind::CloseCurve, Some(&controls), &ShapeOptions::default());
    for p in outline.iter() {
        let (_, _, height) = support::degrees(p);
        assert!(support::approx_eq(height, 50.0, 1e-3), "height {height}");
    }
}

#[test]
fn fine_arrow_is_a_symmetric_dart() {
    let origin = support::beijing();
    let tip = support::offset(&origin, 0.0, 100.0);
    let controls = [origin, tip];
    let outline = compute_fine_arrow_positions(Some(&controls), &ShapeOptions::default());
    assert_eq!(outline.len(), 7);

    let tail = support::planar(&origin);
    let head = support::planar(&tip);
    let p: Vec<Point2<Real>> = outline.iter().map(support::planar).collect();
    assert!((p[3] - head).norm() < 1e-3);
    for (l, r) in [(0, 6), (1, 5), (2, 4)] {
        let left = offset_from_line(&tail, &head, &p[l]);
        let right = offset_from_line(&tail, &head, &p[r]);
        assert!(support::approx_eq(left, right, 1e-3));
        assert!(support::approx_eq(p[l].y, p[r].y, 1e-3));
    }
}

#[test]
fn head_width_factor_scales_head_offset() {
    let origin = support::beijing();
    let tip = support::offset(&origin, 100.0, 0.0);
    let tail = support::planar(&origin);
    let head = support::planar(&tip);

    let controls = [origin, tip];
    let narrow = compute_fine_arrow_positions(Some(&controls), &ShapeOptions::new().with_head_width_factor(0.25));
    let wide = compute_fine_arrow_positions(Some(&controls), &ShapeOptions::new().with_head_width_factor(0.5));

    let narrow_offset = offset_from_line(&tail, &head, &support::planar(&narrow[2]));
    let wide_offset = offset_from_line(&tail, &head, &support::planar(&wide[2]));
    assert!(narrow_offset > 1.0);
    assert!(support::approx_eq(wide_offset / narrow_offset, 2.0, 1e-6));

    // tail and tip stay put
    for i in [0, 3, 6] {
        assert!((support::planar(&narrow[i]) - support::planar(&wide[i])).norm() < 1e-6);
    }
}

#[test]
fn sector_has_segments_plus_three_points() {
    let points = support::triangle();
    for segments in [1, 16, 100] {
        let outline = compute_sector_positions(Some(&points), &ShapeOptions::new().with_segments(segments));
        assert_eq!(outline.len(), segments + 3);
        assert_eq!(outline[0], outline[segments + 2]);
        assert!((outline[segments + 1] - points[0]).norm() < 1e-3);
    }
}

#[test]
fn sector_parameters_match_control_points() {
    let points = support::triangle();
    let sector = sector_parameters(Some(&points)).unwrap();
    assert!((sector.center - support::planar(&points[0])).norm() < 1e-6);
    assert!(support::approx_eq(sector.radius, 400.0, 1e-3));
    assert!(support::approx_eq(sector.end_angle, 500.0_f64.atan2(150.0), 1e-6));

    assert!(sector_parameters(None).is_none());
    assert!(sector_parameters(Some(&points[..2])).is_none());
}

#[test]
fn regular_hexagon_vertices_are_sixty_degrees_apart() {
    let center = support::beijing();
    let vertex = support::offset(&center, 300.0, 120.0);
    let options = ShapeOptions::new().with_border(6);
    let controls = [center, vertex];
    let hexagon = compute_regular_positions(Some(&controls), &options);
    assert_eq!(hexagon.len(), 6);

    let c = support::planar(&center);
    let radius = (support::planar(&vertex) - c).norm();
    let angles: Vec<Real> = hexagon
        .iter()
        .map(|p| {
            let v = support::planar(p) - c;
            assert!(support::approx_eq(v.norm(), radius, 1e-3));
            v.y.atan2(v.x)
        })
        .collect();
    assert!((support::planar(&hexagon[0]) - support::planar(&vertex)).norm() < 1e-3);
    for pair in angles.windows(2) {
        let step = (pair[1] - pair[0]).rem_euclid(std::f64::consts::TAU);
        assert!(support::approx_eq(step.to_degrees(), 60.0, 1e-6));
    }
}

#[test]
fn border_option_sets_vertex_count() {
    let points = support::triangle();
    let octagon = compute_regular_positions(Some(&points[..2]), &ShapeOptions::new().with_border(8));
    assert_eq!(octagon.len(), 8);
}
