// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (chart dimensions, margins, points).

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// Default block width in pixels.
pub const WIDTH: f64 = 1200.0;
/// Default block height in pixels.
pub const HEIGHT: f64 = 260.0;

/// A pixel position in the inner plotting frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Outer chart size, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Space reserved around the plotting area, in pixels.
/// Contract: all fields are finite and non-negative (checked by `validate`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    /// Same margin on every side.
    pub const fn uniform(m: f64) -> Self {
        Self::new(m, m, m, m)
    }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(16.0, 24.0, 28.0, 40.0)
    }
}

/// Resolved inner plotting area for a dimensions/margins pair.
pub(crate) fn inner_size(dims: Dimensions, margins: Margins) -> Result<(f64, f64)> {
    if !dims.width.is_finite() || dims.width <= 0.0 || !dims.height.is_finite() || dims.height <= 0.0 {
        return Err(ChartError::InvalidDimensions(format!(
            "width and height must be finite and positive, got {}x{}",
            dims.width, dims.height
        )));
    }
    let sides = [margins.top, margins.right, margins.bottom, margins.left];
    if sides.iter().any(|m| !m.is_finite() || *m < 0.0) {
        return Err(ChartError::InvalidDimensions(format!(
            "margins must be finite and non-negative, got {margins:?}"
        )));
    }
    let w = dims.width - margins.hsum();
    let h = dims.height - margins.vsum();
    if w <= 0.0 || h <= 0.0 {
        return Err(ChartError::InvalidDimensions(format!(
            "margins leave no plotting area ({w}x{h})"
        )));
    }
    Ok((w, h))
}
