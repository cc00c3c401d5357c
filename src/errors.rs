//! Plotting errors

use crate::float_types::Real;
use crate::plot::ShapeKind;
use nalgebra::Point3;
use std::fmt::Display;

/// Everything the strict (`try_*` / `validate_*`) surface can report.
///
/// The default generators never return these: they follow the
/// empty-or-identity policy instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlotError {
    /// (InvalidCoordinate) The coordinate has a NaN, or cannot be placed on the ellipsoid
    InvalidCoordinate(Point3<Real>),
    /// (MissingControlPoints) No control point sequence was supplied
    MissingControlPoints,
    /// (TooFewControlPoints) The shape needs more control points
    TooFewControlPoints {
        kind: ShapeKind,
        min: usize,
        got: usize,
    },
    /// (UnknownShape) No shape is registered under this name
    UnknownShape(String),
    /// (UnknownCoordinateSystem) No datum is registered under this name
    UnknownCoordinateSystem(String),
}

impl Display for PlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotError::InvalidCoordinate(point) => write!(f, "(InvalidCoordinate) The coordinate ({}) cannot be projected", point),
            PlotError::MissingControlPoints => write!(f, "(MissingControlPoints) No control points were supplied"),
            PlotError::TooFewControlPoints { kind, min, got } => write!(f, "(TooFewControlPoints) {} needs at least {} control points, got {}", kind, min, got),
            PlotError::UnknownShape(name) => write!(f, "(UnknownShape) No shape named `{}`", name),
            PlotError::UnknownCoordinateSystem(name) => write!(f, "(UnknownCoordinateSystem) No coordinate system named `{}`", name),
        }
    }
}
