//! Web Mercator projection between the globe and the planar space the
//! shape generators work in.
//!
//! A [`PlanarPoint`] keeps `x`/`y` in projected metres and carries the
//! ellipsoidal height through `z`, so a point can go to the plane and back
//! without losing its altitude.

use crate::coords::{Cartographic, Ellipsoid, cartesian_to_cartographic, cartographic_to_cartesian};
use crate::errors::PlotError;
use crate::float_types::{FRAC_PI_2, PI, Real};
use nalgebra::Point3;

/// Planar (projected) point: `x`, `y` in Web Mercator metres, `z` = height.
pub type PlanarPoint = Point3<Real>;

/// Spherical ("pseudo") Mercator over an ellipsoid's semi-major axis.
///
/// Immutable and `Copy`: share [`WebMercator::WGS84`] freely across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebMercator {
    semimajor_axis: Real,
    one_over_semimajor_axis: Real,
}

impl WebMercator {
    pub const WGS84: WebMercator = WebMercator::new(Ellipsoid::WGS84);

    pub const fn new(ellipsoid: Ellipsoid) -> Self {
        Self {
            semimajor_axis: ellipsoid.semimajor_axis,
            one_over_semimajor_axis: 1.0 / ellipsoid.semimajor_axis,
        }
    }

    /// Largest latitude (radians) the projection can represent, ≈ 85.0511°.
    /// Beyond it the square map would stop being square.
    pub fn maximum_latitude() -> Real {
        mercator_angle_to_geodetic_latitude(PI)
    }

    pub fn project(&self, position: &Cartographic) -> PlanarPoint {
        PlanarPoint::new(
            position.longitude * self.semimajor_axis,
            geodetic_latitude_to_mercator_angle(position.latitude) * self.semimajor_axis,
            position.height,
        )
    }

    pub fn unproject(&self, point: &PlanarPoint) -> Cartographic {
        Cartographic::new(
            point.x * self.one_over_semimajor_axis,
            mercator_angle_to_geodetic_latitude(point.y * self.one_over_semimajor_axis),
            point.z,
        )
    }
}

impl Default for WebMercator {
    fn default() -> Self {
        Self::WGS84
    }
}

/// Latitude (radians) -> Mercator angle, clamped to the representable band.
pub fn geodetic_latitude_to_mercator_angle(latitude: Real) -> Real {
    let max = WebMercator::maximum_latitude();
    let latitude = latitude.clamp(-max, max);
    let sin_lat = latitude.sin();
    0.5 * ((1.0 + sin_lat) / (1.0 - sin_lat)).ln()
}

/// Mercator angle -> latitude (radians).
pub fn mercator_angle_to_geodetic_latitude(angle: Real) -> Real {
    FRAC_PI_2 - 2.0 * (-angle).exp().atan()
}

/// Projects an Earth-centred point into the plane. `None` on NaN input.
pub fn to_planar(point: &Point3<Real>) -> Option<PlanarPoint> {
    let cartographic = cartesian_to_cartographic(point)?;
    Some(WebMercator::WGS84.project(&cartographic))
}

/// Inverse of [`to_planar`]. `None` on NaN input.
pub fn to_spatial(point: &PlanarPoint) -> Option<Point3<Real>> {
    if point.iter().any(|c| c.is_nan()) {
        return None;
    }
    let cartographic = WebMercator::WGS84.unproject(point);
    Some(cartographic_to_cartesian(&cartographic))
}

/// [`to_planar`] reporting the offending point.
pub fn try_to_planar(point: &Point3<Real>) -> Result<PlanarPoint, PlotError> {
    to_planar(point).ok_or(PlotError::InvalidCoordinate(*point))
}

/// [`to_spatial`] reporting the offending point.
pub fn try_to_spatial(point: &PlanarPoint) -> Result<Point3<Real>, PlotError> {
    to_spatial(point).ok_or(PlotError::InvalidCoordinate(*point))
}

/// Projects every point; `None` or empty input gives an empty result.
/// Points that fail to project are skipped.
pub fn to_planar_batch(points: Option<&[Point3<Real>]>) -> Vec<PlanarPoint> {
    let Some(points) = points else {
        return Vec::new();
    };
    points
        .iter()
        .filter_map(|p| {
            let projected = to_planar(p);
            if projected.is_none() {
                log::warn!("to_planar_batch: skipping degenerate point {:?}", p);
            }
            projected
        })
        .collect()
}

/// Unprojects every point; `None` or empty input gives an empty result.
/// Points that fail to unproject are skipped.
pub fn to_spatial_batch(points: Option<&[PlanarPoint]>) -> Vec<Point3<Real>> {
    let Some(points) = points else {
        return Vec::new();
    };
    points
        .iter()
        .filter_map(|p| {
            let unprojected = to_spatial(p);
            if unprojected.is_none() {
                log::warn!("to_spatial_batch: skipping degenerate point {:?}", p);
            }
            unprojected
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn maximum_latitude_matches_web_mercator_band() {
        assert_relative_eq!(
            WebMercator::maximum_latitude().to_degrees(),
            85.051_128_779_806_59,
            epsilon = 1e-9
        );
    }

    #[test]
    fn origin_projects_to_origin() {
        let p = WebMercator::WGS84.project(&Cartographic::new(0.0, 0.0, 12.0));
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-9);
        assert_eq!(p.z, 12.0);
    }

    #[test]
    fn latitude_is_clamped_at_the_poles() {
        let pole = WebMercator::WGS84.project(&Cartographic::from_degrees(0.0, 90.0, 0.0));
        let band = WebMercator::WGS84.project(&Cartographic::new(0.0, WebMercator::maximum_latitude(), 0.0));
        assert_relative_eq!(pole.y, band.y, epsilon = 1e-6);
        assert!(pole.y.is_finite());
    }

    #[test]
    fn nan_is_rejected_both_ways() {
        assert!(to_planar(&Point3::new(Real::NAN, 0.0, 0.0)).is_none());
        assert!(to_spatial(&PlanarPoint::new(0.0, Real::NAN, 0.0)).is_none());
        assert!(matches!(
            try_to_spatial(&PlanarPoint::new(Real::NAN, 0.0, 0.0)),
            Err(PlotError::InvalidCoordinate(_))
        ));
    }
}
