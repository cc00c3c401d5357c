//! Globe coordinates: Earth-centred Cartesian points, geographic
//! (longitude, latitude, height) positions, and the conversions between them.
//!
//! Submodules:
//! - [`projection`]: the planar Web Mercator space used by the shape math
//! - [`datum`]: WGS84 / GCJ-02 / BD-09 datum shifts

pub mod datum;
pub mod projection;

use crate::float_types::{Real, tolerance};
use nalgebra::Point3;

pub use datum::CoordinateSystem;
pub use projection::{
    PlanarPoint, WebMercator, to_planar, to_planar_batch, to_spatial, to_spatial_batch,
    try_to_planar, try_to_spatial,
};

/// Fixed-point iterations used to recover geodetic latitude.
const LATITUDE_ITERATIONS: usize = 10;

/// An oblate ellipsoid of revolution described by its two semi-axes (metres).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub semimajor_axis: Real,
    pub semiminor_axis: Real,
}

impl Ellipsoid {
    pub const WGS84: Ellipsoid = Ellipsoid {
        semimajor_axis: 6_378_137.0,
        semiminor_axis: 6_356_752.314_245_179,
    };

    /// First eccentricity squared, e² = 1 - b²/a².
    #[inline]
    pub fn eccentricity_squared(&self) -> Real {
        1.0 - (self.semiminor_axis * self.semiminor_axis)
            / (self.semimajor_axis * self.semimajor_axis)
    }

    /// Prime vertical radius of curvature N(φ).
    #[inline]
    fn prime_vertical_radius(&self, latitude: Real) -> Real {
        let sin_lat = latitude.sin();
        self.semimajor_axis / (1.0 - self.eccentricity_squared() * sin_lat * sin_lat).sqrt()
    }
}

/// A geographic position. Angles are stored in radians, height in metres
/// above the ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cartographic {
    pub longitude: Real,
    pub latitude: Real,
    pub height: Real,
}

impl Cartographic {
    pub const fn new(longitude: Real, latitude: Real, height: Real) -> Self {
        Self { longitude, latitude, height }
    }

    pub fn from_degrees(longitude: Real, latitude: Real, height: Real) -> Self {
        Self::new(longitude.to_radians(), latitude.to_radians(), height)
    }

    /// `(longitude°, latitude°)`
    pub fn to_degrees(&self) -> (Real, Real) {
        (self.longitude.to_degrees(), self.latitude.to_degrees())
    }

    pub fn is_nan(&self) -> bool {
        self.longitude.is_nan() || self.latitude.is_nan() || self.height.is_nan()
    }
}

/// Geographic -> Earth-centred Cartesian on the WGS84 ellipsoid.
pub fn cartographic_to_cartesian(position: &Cartographic) -> Point3<Real> {
    Ellipsoid::WGS84.cartographic_to_cartesian(position)
}

/// Earth-centred Cartesian -> geographic on the WGS84 ellipsoid.
///
/// Returns `None` for NaN input and for points at the Earth's centre, where
/// no geodetic normal exists.
pub fn cartesian_to_cartographic(point: &Point3<Real>) -> Option<Cartographic> {
    Ellipsoid::WGS84.cartesian_to_cartographic(point)
}

impl Ellipsoid {
    pub fn cartographic_to_cartesian(&self, position: &Cartographic) -> Point3<Real> {
        let (sin_lat, cos_lat) = position.latitude.sin_cos();
        let (sin_lon, cos_lon) = position.longitude.sin_cos();
        let n = self.prime_vertical_radius(position.latitude);
        let e2 = self.eccentricity_squared();

        Point3::new(
            (n + position.height) * cos_lat * cos_lon,
            (n + position.height) * cos_lat * sin_lon,
            (n * (1.0 - e2) + position.height) * sin_lat,
        )
    }

    pub fn cartesian_to_cartographic(&self, point: &Point3<Real>) -> Option<Cartographic> {
        if point.iter().any(|c| c.is_nan()) {
            return None;
        }
        if point.coords.norm() < tolerance() {
            return None;
        }

        let e2 = self.eccentricity_squared();
        let p = point.x.hypot(point.y);
        let longitude = point.y.atan2(point.x);

        let mut latitude = point.z.atan2(p * (1.0 - e2));
        for _ in 0..LATITUDE_ITERATIONS {
            let n = self.prime_vertical_radius(latitude);
            latitude = point.z.atan2(p - e2 * n * latitude.cos());
        }

        // p·cosφ + z·sinφ - a²/N stays well conditioned at the poles
        let (sin_lat, cos_lat) = latitude.sin_cos();
        let n = self.prime_vertical_radius(latitude);
        let height = p * cos_lat + point.z * sin_lat
            - self.semimajor_axis * self.semimajor_axis / n;

        Some(Cartographic::new(longitude, latitude, height))
    }
}
