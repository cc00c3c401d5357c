//! Shape options.
//!
//! [`ShapeOptions`] is the flat, all-optional record callers fill in (and,
//! with the `serde` feature, deserialise from camelCase JSON; unknown keys
//! are ignored). Each generator resolves it once into its own parameter
//! struct, where every field carries a documented default.
//!
//! Values are never validated or clamped: negative widths or zero segment
//! counts go straight into the arithmetic.

use crate::float_types::{FITTING_COUNT, PI, Real};

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ShapeOptions {
    pub head_height_factor: Option<Real>,
    pub head_width_factor: Option<Real>,
    pub neck_height_factor: Option<Real>,
    pub neck_width_factor: Option<Real>,
    pub tail_width_factor: Option<Real>,
    /// Cap on head height as a fraction of the tail width.
    pub head_tail_factor: Option<Real>,
    pub swallow_tail_factor: Option<Real>,
    /// Radians between the shaft and the ray to the head corners.
    pub head_angle: Option<Real>,
    /// Radians between the shaft and the ray to the neck corners.
    pub neck_angle: Option<Real>,
    /// Samples per arc or per smoothed ring edge.
    pub segments: Option<usize>,
    /// Tangent handle length as a fraction of the adjacent edge.
    pub smoothing_factor: Option<Real>,
    /// Samples per span for spline-smoothed outlines.
    pub resolution: Option<usize>,
    pub config: Option<ShapeConfig>,
}

/// Nested configuration block.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ShapeConfig {
    /// Vertex count of a regular polygon.
    pub border: Option<usize>,
}

impl ShapeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_head_width_factor(mut self, value: Real) -> Self {
        self.head_width_factor = Some(value);
        self
    }

    pub fn with_tail_width_factor(mut self, value: Real) -> Self {
        self.tail_width_factor = Some(value);
        self
    }

    pub fn with_swallow_tail_factor(mut self, value: Real) -> Self {
        self.swallow_tail_factor = Some(value);
        self
    }

    pub fn with_segments(mut self, value: usize) -> Self {
        self.segments = Some(value);
        self
    }

    pub fn with_smoothing_factor(mut self, value: Real) -> Self {
        self.smoothing_factor = Some(value);
        self
    }

    pub fn with_resolution(mut self, value: usize) -> Self {
        self.resolution = Some(value);
        self
    }

    pub fn with_border(mut self, value: usize) -> Self {
        self.config.get_or_insert_with(ShapeConfig::default).border = Some(value);
        self
    }

    fn border(&self) -> Option<usize> {
        self.config.as_ref().and_then(|config| config.border)
    }
}

/// Two-point dart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FineArrowParams {
    /// Half tail width / base length. Default `0.1`.
    pub tail_width_factor: Real,
    /// Neck corner distance from the tip / base length. Default `0.2`.
    pub neck_width_factor: Real,
    /// Head corner distance from the tip / base length. Default `0.25`.
    pub head_width_factor: Real,
    /// Default `π / 8.5`.
    pub head_angle: Real,
    /// Default `π / 13`.
    pub neck_angle: Real,
}

impl Default for FineArrowParams {
    fn default() -> Self {
        Self {
            tail_width_factor: 0.1,
            neck_width_factor: 0.2,
            head_width_factor: 0.25,
            head_angle: PI / 8.5,
            neck_angle: PI / 13.0,
        }
    }
}

impl FineArrowParams {
    pub fn resolve(options: &ShapeOptions) -> Self {
        let d = Self::default();
        Self {
            tail_width_factor: options.tail_width_factor.unwrap_or(d.tail_width_factor),
            neck_width_factor: options.neck_width_factor.unwrap_or(d.neck_width_factor),
            head_width_factor: options.head_width_factor.unwrap_or(d.head_width_factor),
            head_angle: options.head_angle.unwrap_or(d.head_angle),
            neck_angle: options.neck_angle.unwrap_or(d.neck_angle),
        }
    }
}

/// Dart with a V notch cut into the tail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwallowtailFineArrowParams {
    pub arrow: FineArrowParams,
    /// Notch depth / half tail width. Default `1.0`.
    pub swallow_tail_factor: Real,
    /// Spline samples per outline edge. Default `8`.
    pub resolution: usize,
}

impl Default for SwallowtailFineArrowParams {
    fn default() -> Self {
        Self {
            arrow: FineArrowParams::default(),
            swallow_tail_factor: 1.0,
            resolution: 8,
        }
    }
}

impl SwallowtailFineArrowParams {
    pub fn resolve(options: &ShapeOptions) -> Self {
        let d = Self::default();
        Self {
            arrow: FineArrowParams::resolve(options),
            swallow_tail_factor: options.swallow_tail_factor.unwrap_or(d.swallow_tail_factor),
            resolution: options.resolution.unwrap_or(d.resolution),
        }
    }
}

/// Sizing of an arrow head relative to the arrow's base length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHeadParams {
    pub head_height_factor: Real,
    pub head_width_factor: Real,
    pub neck_height_factor: Real,
    pub neck_width_factor: Real,
}

/// Attack arrows (plain, flat tail, swallow-tail).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackArrowParams {
    /// Defaults: head height `0.18`, head width `0.3`, neck height `0.85`,
    /// neck width `0.15`.
    pub head: ArrowHeadParams,
    /// Head height never exceeds `tail width * head_tail_factor`. Default `0.8`.
    pub head_tail_factor: Real,
    /// Flat-tail variant only: half tail width / base length. Default `0.1`.
    /// The swallow-tail notch depth does not follow it; that depth comes
    /// from the tail corners and `swallow_tail_factor` alone.
    pub tail_width_factor: Real,
    /// Swallow-tail variant only: notch depth / half tail width. Default `1.0`.
    pub swallow_tail_factor: Real,
}

impl Default for AttackArrowParams {
    fn default() -> Self {
        Self {
            head: ArrowHeadParams {
                head_height_factor: 0.18,
                head_width_factor: 0.3,
                neck_height_factor: 0.85,
                neck_width_factor: 0.15,
            },
            head_tail_factor: 0.8,
            tail_width_factor: 0.1,
            swallow_tail_factor: 1.0,
        }
    }
}

impl AttackArrowParams {
    pub fn resolve(options: &ShapeOptions) -> Self {
        let d = Self::default();
        Self {
            head: resolve_head(options, d.head),
            head_tail_factor: options.head_tail_factor.unwrap_or(d.head_tail_factor),
            tail_width_factor: options.tail_width_factor.unwrap_or(d.tail_width_factor),
            swallow_tail_factor: options.swallow_tail_factor.unwrap_or(d.swallow_tail_factor),
        }
    }
}

/// Pincer arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleArrowParams {
    /// Defaults: head height `0.25`, head width `0.3`, neck height `0.85`,
    /// neck width `0.15`.
    pub head: ArrowHeadParams,
}

impl Default for DoubleArrowParams {
    fn default() -> Self {
        Self {
            head: ArrowHeadParams {
                head_height_factor: 0.25,
                head_width_factor: 0.3,
                neck_height_factor: 0.85,
                neck_width_factor: 0.15,
            },
        }
    }
}

impl DoubleArrowParams {
    pub fn resolve(options: &ShapeOptions) -> Self {
        Self { head: resolve_head(options, Self::default().head) }
    }
}

fn resolve_head(options: &ShapeOptions, d: ArrowHeadParams) -> ArrowHeadParams {
    ArrowHeadParams {
        head_height_factor: options.head_height_factor.unwrap_or(d.head_height_factor),
        head_width_factor: options.head_width_factor.unwrap_or(d.head_width_factor),
        neck_height_factor: options.neck_height_factor.unwrap_or(d.neck_height_factor),
        neck_width_factor: options.neck_width_factor.unwrap_or(d.neck_width_factor),
    }
}

/// Sector and lune arcs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParams {
    /// Default `100`.
    pub segments: usize,
}

impl Default for ArcParams {
    fn default() -> Self {
        Self { segments: FITTING_COUNT }
    }
}

impl ArcParams {
    pub fn resolve(options: &ShapeOptions) -> Self {
        Self { segments: options.segments.unwrap_or(FITTING_COUNT) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularPolygonParams {
    /// Default `6`.
    pub border: usize,
}

impl Default for RegularPolygonParams {
    fn default() -> Self {
        Self { border: 6 }
    }
}

impl RegularPolygonParams {
    pub fn resolve(options: &ShapeOptions) -> Self {
        Self { border: options.border().unwrap_or(Self::default().border) }
    }
}

/// Smoothed closed rings (close curve, gathering place).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothRingParams {
    pub smoothing_factor: Real,
    /// Default `100`.
    pub segments: usize,
}

impl SmoothRingParams {
    /// Close curve: smoothing `0.3`.
    pub fn close_curve(options: &ShapeOptions) -> Self {
        Self::resolve(options, 0.3)
    }

    /// Gathering place: smoothing `0.4`.
    pub fn gathering_place(options: &ShapeOptions) -> Self {
        Self::resolve(options, 0.4)
    }

    fn resolve(options: &ShapeOptions, smoothing_factor: Real) -> Self {
        Self {
            smoothing_factor: options.smoothing_factor.unwrap_or(smoothing_factor),
            segments: options.segments.unwrap_or(FITTING_COUNT),
        }
    }
}
