//! Military plot shapes.
//!
//! Every generator has the same signature,
//! `fn(Option<&[Point3]>, &ShapeOptions) -> Cow<[Point3]>`, and the same
//! input policy:
//!
//! - `None` control points give an empty outline;
//! - fewer points than the shape needs give back **the very same slice**
//!   (`Cow::Borrowed`), so callers can test identity with [`std::ptr::eq`];
//! - points beyond the shape's maximum are ignored;
//! - control points that cannot be projected are dropped, and if too few
//!   survive the outline is empty.
//!
//! The outline is computed in Web Mercator space and projected back; every
//! generated point takes the height of the first control point.

pub mod arrow;
pub mod attack_arrow;
pub mod curve;
pub mod double_arrow;
pub mod fine_arrow;
pub mod geometry;
pub mod lune;
pub mod options;
pub mod polygon;
pub mod sector;

use crate::coords::projection::{PlanarPoint, to_planar_batch, to_spatial_batch};
use crate::errors::PlotError;
use crate::float_types::Real;
use geometry::Point;
use nalgebra::Point3;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

pub use attack_arrow::{
    compute_attack_arrow_positions, compute_flat_tail_attack_arrow_positions,
    compute_swallowtail_attack_arrow_positions,
};
pub use curve::{compute_close_curve_positions, compute_gathering_place_positions};
pub use double_arrow::compute_double_arrow_positions;
pub use fine_arrow::{compute_fine_arrow_positions, compute_swallowtail_fine_arrow_positions};
pub use lune::compute_lune_positions;
pub use options::{ShapeConfig, ShapeOptions};
pub use polygon::{compute_isosceles_triangle_positions, compute_regular_positions};
pub use sector::{SectorParameters, compute_sector_positions, sector_parameters};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ShapeKind {
    FineArrow,
    SwallowtailFineArrow,
    AttackArrow,
    FlatTailAttackArrow,
    SwallowtailAttackArrow,
    DoubleArrow,
    Sector,
    RegularPolygon,
    IsoscelesTriangle,
    Lune,
    CloseCurve,
    GatheringPlace,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 12] = [
        Self::FineArrow,
        Self::SwallowtailFineArrow,
        Self::AttackArrow,
        Self::FlatTailAttackArrow,
        Self::SwallowtailAttackArrow,
        Self::DoubleArrow,
        Self::Sector,
        Self::RegularPolygon,
        Self::IsoscelesTriangle,
        Self::Lune,
        Self::CloseCurve,
        Self::GatheringPlace,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::FineArrow => "fine-arrow",
            Self::SwallowtailFineArrow => "swallowtail-fine-arrow",
            Self::AttackArrow => "attack-arrow",
            Self::FlatTailAttackArrow => "flat-tail-attack-arrow",
            Self::SwallowtailAttackArrow => "swallowtail-attack-arrow",
            Self::DoubleArrow => "double-arrow",
            Self::Sector => "sector",
            Self::RegularPolygon => "regular-polygon",
            Self::IsoscelesTriangle => "isosceles-triangle",
            Self::Lune => "lune",
            Self::CloseCurve => "close-curve",
            Self::GatheringPlace => "gathering-place",
        }
    }

    /// Fewest control points the shape can be built from.
    pub const fn min_points(self) -> usize {
        match self {
            Self::FineArrow | Self::SwallowtailFineArrow | Self::RegularPolygon => 2,
            _ => 3,
        }
    }

    /// Control points beyond this are ignored; `None` means unbounded.
    pub const fn max_points(self) -> Option<usize> {
        match self {
            Self::FineArrow | Self::SwallowtailFineArrow | Self::RegularPolygon => Some(2),
            Self::AttackArrow | Self::FlatTailAttackArrow | Self::SwallowtailAttackArrow => Some(999),
            Self::DoubleArrow => Some(5),
            Self::Sector | Self::IsoscelesTriangle | Self::Lune | Self::GatheringPlace => Some(3),
            Self::CloseCurve => None,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| PlotError::UnknownShape(s.to_owned()))
    }
}

/// Computes the outline of any shape by kind.
pub fn compute_positions<'a>(
    kind: ShapeKind,
    control_points: Option<&'a [Point3<Real>]>,
    options: &ShapeOptions,
) -> Cow<'a, [Point3<Real>]> {
    match kind {
        ShapeKind::FineArrow => compute_fine_arrow_positions(control_points, options),
        ShapeKind::SwallowtailFineArrow => compute_swallowtail_fine_arrow_positions(control_points, options),
        ShapeKind::AttackArrow => compute_attack_arrow_positions(control_points, options),
        ShapeKind::FlatTailAttackArrow => compute_flat_tail_attack_arrow_positions(control_points, options),
        ShapeKind::SwallowtailAttackArrow => compute_swallowtail_attack_arrow_positions(control_points, options),
        ShapeKind::DoubleArrow => compute_double_arrow_positions(control_points, options),
        ShapeKind::Sector => compute_sector_positions(control_points, options),
        ShapeKind::RegularPolygon => compute_regular_positions(control_points, options),
        ShapeKind::IsoscelesTriangle => compute_isosceles_triangle_positions(control_points, options),
        ShapeKind::Lune => compute_lune_positions(control_points, options),
        ShapeKind::CloseCurve => compute_close_curve_positions(control_points, options),
        ShapeKind::GatheringPlace => compute_gathering_place_positions(control_points, options),
    }
}

/// Strict check of a control point set, for callers that want a reason
/// instead of the silent empty/identity result.
pub fn validate_control_points(kind: ShapeKind, control_points: Option<&[Point3<Real>]>) -> Result<(), PlotError> {
    let points = control_points.ok_or(PlotError::MissingControlPoints)?;
    if points.len() < kind.min_points() {
        return Err(PlotError::TooFewControlPoints {
            kind,
            min: kind.min_points(),
            got: points.len(),
        });
    }
    // the isosceles triangle hands its points back without projecting them
    if kind == ShapeKind::IsoscelesTriangle {
        return Ok(());
    }
    let used = &points[..points.len().min(kind.max_points().unwrap_or(usize::MAX))];
    if let Some(bad) = used.iter().find(|p| crate::coords::to_planar(p).is_none()) {
        return Err(PlotError::InvalidCoordinate(*bad));
    }
    Ok(())
}

/// Applies the input policy. `Err` carries the early result.
pub(crate) fn select_controls<'a>(
    kind: ShapeKind,
    control_points: Option<&'a [Point3<Real>]>,
) -> Result<&'a [Point3<Real>], Cow<'a, [Point3<Real>]>> {
    let Some(points) = control_points else {
        log::debug!("{}: no control points", kind);
        return Err(Cow::Owned(Vec::new()));
    };
    if points.len() < kind.min_points() {
        log::debug!("{}: needs {} control points, got {}", kind, kind.min_points(), points.len());
        return Err(Cow::Borrowed(points));
    }
    let count = points.len().min(kind.max_points().unwrap_or(usize::MAX));
    Ok(&points[..count])
}

/// Runs a planar outline builder under the input policy: project the
/// controls, build, project back at the first control point's height.
pub(crate) fn generate<'a, F>(
    kind: ShapeKind,
    control_points: Option<&'a [Point3<Real>]>,
    build: F,
) -> Cow<'a, [Point3<Real>]>
where
    F: FnOnce(&[Point]) -> Vec<Point>,
{
    let points = match select_controls(kind, control_points) {
        Ok(points) => points,
        Err(early) => return early,
    };
    log::trace!("{}: computing outline from {} control points", kind, points.len());

    let planar = to_planar_batch(Some(points));
    if planar.len() < kind.min_points() {
        log::debug!("{}: only {} control points could be projected", kind, planar.len());
        return Cow::Owned(Vec::new());
    }
    let height = planar[0].z;
    let controls: Vec<Point> = planar.iter().map(|p| p.xy()).collect();

    let outline: Vec<PlanarPoint> = build(&controls)
        .into_iter()
        .map(|p| PlanarPoint::new(p.x, p.y, height))
        .collect();
    Cow::Owned(to_spatial_batch(Some(&outline)))
}
