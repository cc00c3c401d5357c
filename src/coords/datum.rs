//! Datum shifts between WGS84 and the two offset systems in public use
//! across mainland China: GCJ-02 (the national "Mars" offset) and BD-09
//! (a further polar distortion applied on top of GCJ-02).
//!
//! WGS84 -> GCJ-02 is an empirical polynomial model and has no closed-form
//! inverse; [`gcj02_to_wgs84`] is the usual one-step approximation and is
//! accurate to a few metres. GCJ-02 <-> BD-09 is an arithmetic rotate/scale
//! pair and round-trips to well under a micro-degree.
//!
//! All functions take and return `(longitude°, latitude°)`.

use crate::errors::PlotError;
use crate::float_types::{PI, Real};
use std::fmt;
use std::str::FromStr;

/// Krasovsky 1940 semi-major axis, the ellipsoid GCJ-02 is defined on.
const KRASOVSKY_A: Real = 6_378_245.0;
/// Krasovsky 1940 first eccentricity squared.
const KRASOVSKY_EE: Real = 0.006_693_421_622_965_943_23;
/// π scaled by 3000/180, the BD-09 distortion frequency.
const X_PI: Real = PI * 3000.0 / 180.0;
const BD_LNG_OFFSET: Real = 0.0065;
const BD_LAT_OFFSET: Real = 0.006;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CoordinateSystem {
    /// Unshifted geodetic coordinates.
    Wgs84,
    /// GCJ-02 offset coordinates.
    Gcj02,
    /// BD-09 offset coordinates.
    Bd09,
}

impl CoordinateSystem {
    pub const ALL: [CoordinateSystem; 3] = [Self::Wgs84, Self::Gcj02, Self::Bd09];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wgs84 => "wgs84",
            Self::Gcj02 => "gcj02",
            Self::Bd09 => "bd09",
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoordinateSystem {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        Self::ALL
            .into_iter()
            .find(|system| system.name() == normalized)
            .ok_or_else(|| PlotError::UnknownCoordinateSystem(s.to_owned()))
    }
}

/// Converts `(lng, lat)` from one system to another. Same-system conversion
/// is the identity.
pub fn convert(lng: Real, lat: Real, from: CoordinateSystem, to: CoordinateSystem) -> (Real, Real) {
    use CoordinateSystem::*;
    match (from, to) {
        (Wgs84, Gcj02) => wgs84_to_gcj02(lng, lat),
        (Gcj02, Wgs84) => gcj02_to_wgs84(lng, lat),
        (Gcj02, Bd09) => gcj02_to_bd09(lng, lat),
        (Bd09, Gcj02) => bd09_to_gcj02(lng, lat),
        (Wgs84, Bd09) => wgs84_to_bd09(lng, lat),
        (Bd09, Wgs84) => bd09_to_wgs84(lng, lat),
        (Wgs84, Wgs84) | (Gcj02, Gcj02) | (Bd09, Bd09) => (lng, lat),
    }
}

/// Whether the point lies outside the box the GCJ-02 offset is applied in.
pub fn out_of_china(lng: Real, lat: Real) -> bool {
    !(lng > 73.66 && lng < 135.05 && lat > 3.86 && lat < 53.55)
}

pub fn wgs84_to_gcj02(lng: Real, lat: Real) -> (Real, Real) {
    if out_of_china(lng, lat) {
        return (lng, lat);
    }
    let (dlng, dlat) = gcj02_offset(lng, lat);
    (lng + dlng, lat + dlat)
}

/// Approximate inverse of [`wgs84_to_gcj02`]: evaluates the forward offset
/// at the shifted point and subtracts it.
pub fn gcj02_to_wgs84(lng: Real, lat: Real) -> (Real, Real) {
    if out_of_china(lng, lat) {
        return (lng, lat);
    }
    let (dlng, dlat) = gcj02_offset(lng, lat);
    let mg_lng = lng + dlng;
    let mg_lat = lat + dlat;
    (lng * 2.0 - mg_lng, lat * 2.0 - mg_lat)
}

pub fn gcj02_to_bd09(lng: Real, lat: Real) -> (Real, Real) {
    let z = lng.hypot(lat) + 0.000_02 * (lat * X_PI).sin();
    let theta = lat.atan2(lng) + 0.000_003 * (lng * X_PI).cos();
    (z * theta.cos() + BD_LNG_OFFSET, z * theta.sin() + BD_LAT_OFFSET)
}

pub fn bd09_to_gcj02(lng: Real, lat: Real) -> (Real, Real) {
    let x = lng - BD_LNG_OFFSET;
    let y = lat - BD_LAT_OFFSET;
    let z = x.hypot(y) - 0.000_02 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000_003 * (x * X_PI).cos();
    (z * theta.cos(), z * theta.sin())
}

pub fn wgs84_to_bd09(lng: Real, lat: Real) -> (Real, Real) {
    let (g_lng, g_lat) = wgs84_to_gcj02(lng, lat);
    gcj02_to_bd09(g_lng, g_lat)
}

pub fn bd09_to_wgs84(lng: Real, lat: Real) -> (Real, Real) {
    let (g_lng, g_lat) = bd09_to_gcj02(lng, lat);
    gcj02_to_wgs84(g_lng, g_lat)
}

/// `(Δlng, Δlat)` in degrees of the GCJ-02 offset at a WGS84 position.
fn gcj02_offset(lng: Real, lat: Real) -> (Real, Real) {
    let mut dlat = transform_lat(lng - 105.0, lat - 35.0);
    let mut dlng = transform_lng(lng - 105.0, lat - 35.0);
    let rad_lat = lat / 180.0 * PI;
    let magic = 1.0 - KRASOVSKY_EE * rad_lat.sin().powi(2);
    let sqrt_magic = magic.sqrt();
    dlat = (dlat * 180.0) / ((KRASOVSKY_A * (1.0 - KRASOVSKY_EE)) / (magic * sqrt_magic) * PI);
    dlng = (dlng * 180.0) / (KRASOVSKY_A / sqrt_magic * rad_lat.cos() * PI);
    (dlng, dlat)
}

fn transform_lat(lng: Real, lat: Real) -> Real {
    let mut ret = -100.0 + 2.0 * lng + 3.0 * lat + 0.2 * lat * lat + 0.1 * lng * lat
        + 0.2 * lng.abs().sqrt();
    ret += (20.0 * (6.0 * lng * PI).sin() + 20.0 * (2.0 * lng * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (lat * PI).sin() + 40.0 * (lat / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (lat / 12.0 * PI).sin() + 320.0 * (lat * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

fn transform_lng(lng: Real, lat: Real) -> Real {
    let mut ret = 300.0 + lng + 2.0 * lat + 0.1 * lng * lng + 0.1 * lng * lat
        + 0.1 * lng.abs().sqrt();
    ret += (20.0 * (6.0 * lng * PI).sin() + 20.0 * (2.0 * lng * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (lng * PI).sin() + 40.0 * (lng / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (lng / 12.0 * PI).sin() + 300.0 * (lng / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_loosely() {
        assert_eq!("WGS84".parse::<CoordinateSystem>().unwrap(), CoordinateSystem::Wgs84);
        assert_eq!("gcj-02".parse::<CoordinateSystem>().unwrap(), CoordinateSystem::Gcj02);
        assert_eq!(" bd_09 ".parse::<CoordinateSystem>().unwrap(), CoordinateSystem::Bd09);
        assert!(matches!(
            "utm".parse::<CoordinateSystem>(),
            Err(PlotError::UnknownCoordinateSystem(name)) if name == "utm"
        ));
    }

    #[test]
    fn offset_is_a_few_hundred_metres_in_beijing() {
        let (lng, lat) = wgs84_to_gcj02(116.397_428, 39.909_23);
        let dlng = lng - 116.397_428;
        let dlat = lat - 39.909_23;
        assert!(dlng > 0.004 && dlng < 0.008, "dlng = {dlng}");
        assert!(dlat > 0.0005 && dlat < 0.003, "dlat = {dlat}");
    }

    #[test]
    fn same_system_is_identity() {
        for system in CoordinateSystem::ALL {
            assert_eq!(convert(120.0, 30.0, system, system), (120.0, 30.0));
        }
    }
}
