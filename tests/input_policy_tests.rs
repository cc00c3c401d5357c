mod support;

use milplot::{
    PlotError, ShapeKind, ShapeOptions, compute_fine_arrow_positions, compute_positions,
    compute_sector_positions, validate_control_points,
};
use nalgebra::Point3;
use std::borrow::Cow;

#[test]
fn none_gives_empty_outline() {
    support::init_logging();
    for kind in ShapeKind::ALL {
        let outline = compute_positions(kind, None, &ShapeOptions::default());
        assert!(outline.is_empty(), "{kind} should be empty for None");
    }
}

#[test]
fn too_few_points_returns_the_same_slice() {
    support::init_logging();
    let points = support::triangle();
    for kind in ShapeKind::ALL {
        let short = &points[..kind.min_points() - 1];
        let outline = compute_positions(kind, Some(short), &ShapeOptions::default());
        assert!(matches!(outline, Cow::Borrowed(_)), "{kind} should borrow its input");
        assert!(std::ptr::eq(outline.as_ref(), short), "{kind} should return the identical slice");
    }
}

#[test]
fn empty_slice_is_returned_as_is() {
    let empty: [Point3<f64>; 0] = [];
    let outline = compute_sector_positions(Some(&empty), &ShapeOptions::default());
    assert!(std::ptr::eq(outline.as_ref(), &empty[..]));
}

#[test]
fn extra_points_are_ignored() {
    let [a, b, c] = support::triangle();
    let options = ShapeOptions::default();
    let (pair, triple, five) = ([a, b], [a, b, c], [a, b, c, a, b]);
    let two = compute_fine_arrow_positions(Some(&pair), &options);
    let three = compute_fine_arrow_positions(Some(&triple), &options);
    assert_eq!(two, three);

    let sector = compute_sector_positions(Some(&triple), &options);
    let padded = compute_sector_positions(Some(&five), &options);
    assert_eq!(sector, padded);
}

#[test]
fn unprojectable_points_are_dropped() {
    support::init_logging();
    let [a, b, _] = support::triangle();
    let options = ShapeOptions::default();

    let centre_of_earth = [Point3::origin(), b];
    let outline = compute_fine_arrow_positions(Some(&centre_of_earth), &options);
    assert!(matches!(outline, Cow::Owned(_)));
    assert!(outline.is_empty());

    let with_nan = [a, Point3::new(f64::NAN, 0.0, 0.0)];
    let outline = compute_fine_arrow_positions(Some(&with_nan), &options);
    assert!(outline.is_empty());
}

#[test]
fn validation_explains_rejections() {
    let [a, b, c] = support::triangle();
    assert_eq!(
        validate_control_points(ShapeKind::Sector, None),
        Err(PlotError::MissingControlPoints)
    );
    assert_eq!(
        validate_control_points(ShapeKind::Sector, Some(&[a, b])),
        Err(PlotError::TooFewControlPoints { kind: ShapeKind::Sector, min: 3, got: 2 })
    );
    let origin = Point3::origin();
    assert_eq!(
        validate_control_points(ShapeKind::Lune, Some(&[a, b, origin])),
        Err(PlotError::InvalidCoordinate(origin))
    );
    // beyond the maximum nothing is looked at
    assert_eq!(validate_control_points(ShapeKind::FineArrow, Some(&[a, b, origin])), Ok(()));
    assert_eq!(validate_control_points(ShapeKind::CloseCurve, Some(&[a, b, c])), Ok(()));

    // accepted exactly as the generator accepts them
    let unprojected = [a, b, origin];
    assert_eq!(validate_control_points(ShapeKind::IsoscelesTriangle, Some(&unprojected)), Ok(()));
    assert_eq!(
        compute_positions(ShapeKind::IsoscelesTriangle, Some(&unprojected), &ShapeOptions::default()).as_ref(),
        &unprojected[..]
    );

    let message = validate_control_points(ShapeKind::DoubleArrow, Some(&[a])).unwrap_err().to_string();
    assert_eq!(message, "(TooFewControlPoints) double-arrow needs at least 3 control points, got 1");
}
