//! **Military plotting geometry** over globe coordinates.
//!
//! Control points come in as Earth-centred Cartesian positions
//! ([`nalgebra::Point3`], metres). Each shape generator projects them to Web
//! Mercator, builds the symbol outline with planar geometry, and projects
//! the outline back, ready to hand to a renderer.
//!
//! ```
//! use milplot::coords::{Cartographic, cartographic_to_cartesian};
//! use milplot::{ShapeOptions, compute_fine_arrow_positions};
//!
//! let tail = cartographic_to_cartesian(&Cartographic::from_degrees(116.39, 39.90, 0.0));
//! let tip = cartographic_to_cartesian(&Cartographic::from_degrees(116.40, 39.91, 0.0));
//! let controls = [tail, tip];
//! let outline = compute_fine_arrow_positions(Some(&controls), &ShapeOptions::default());
//! assert_eq!(outline.len(), 7);
//! ```
//!
//! # Modules
//! - [`coords`]: ellipsoid, Web Mercator and datum shifts (WGS-84, GCJ-02, BD-09)
//! - [`math`]: scalar helpers and random draws
//! - [`curve`]: Catmull-Rom, Bézier and B-spline evaluation
//! - [`plot`]: the shape generators
//!
//! # Features
//! - **serde**: `Serialize`/`Deserialize` for options, shape kinds and coordinates
//!
//! # Logging
//! Generators log through the [`log`] facade: `trace` on entry, `debug` when
//! the input policy short-circuits, `warn` when a point cannot be projected.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod coords;
pub mod curve;
pub mod errors;
pub mod float_types;
pub mod math;
pub mod plot;

pub use coords::{
    CoordinateSystem, PlanarPoint, WebMercator, to_planar, to_planar_batch, to_spatial, to_spatial_batch,
    try_to_planar, try_to_spatial,
};
pub use errors::PlotError;
pub use float_types::Real;
pub use plot::{
    SectorParameters, ShapeConfig, ShapeKind, ShapeOptions, compute_attack_arrow_positions,
    compute_close_curve_positions, compute_double_arrow_positions, compute_fine_arrow_positions,
    compute_flat_tail_attack_arrow_positions, compute_gathering_place_positions, compute_isosceles_triangle_positions,
    compute_lune_positions, compute_positions, compute_regular_positions, compute_sector_positions,
    compute_swallowtail_attack_arrow_positions, compute_swallowtail_fine_arrow_positions, sector_parameters,
    validate_control_points,
};
