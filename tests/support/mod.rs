//! Test support library
//! Provides control point fixtures and comparison helpers for tests.
#![allow(dead_code)]

use milplot::{
    coords::{Cartographic, cartesian_to_cartographic, cartographic_to_cartesian},
    float_types::Real,
    to_planar,
};
use nalgebra::{Point2, Point3};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Routes `log` output through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

/// Earth-centred point from degrees and metres.
pub fn ecef(longitude: Real, latitude: Real, height: Real) -> Point3<Real> {
    cartographic_to_cartesian(&Cartographic::from_degrees(longitude, latitude, height))
}

/// `(longitude°, latitude°, height)` of an Earth-centred point.
pub fn degrees(point: &Point3<Real>) -> (Real, Real, Real) {
    let position = cartesian_to_cartographic(point).expect("point should have a geodetic position");
    let (longitude, latitude) = position.to_degrees();
    (longitude, latitude, position.height)
}

/// Web Mercator `x`/`y` of an Earth-centred point.
pub fn planar(point: &Point3<Real>) -> Point2<Real> {
    to_planar(point).expect("point should project").xy()
}

/// A point `east`/`north` metres away from `origin` in projected space, at
/// `origin`'s height.
pub fn offset(origin: &Point3<Real>, east: Real, north: Real) -> Point3<Real> {
    let p = to_planar(origin).expect("origin should project");
    milplot::to_spatial(&Point3::new(p.x + east, p.y + north, p.z)).expect("offset should unproject")
}

/// Tiananmen Square, 50 m up.
pub fn beijing() -> Point3<Real> {
    ecef(116.3975, 39.9087, 50.0)
}

/// Three points around Beijing, a few hundred metres apart.
pub fn triangle() -> [Point3<Real>; 3] {
    let origin = beijing();
    [origin, offset(&origin, 400.0, 0.0), offset(&origin, 150.0, 500.0)]
}
