// File: crates/style-core/src/sizes.rs
// Summary: Standard figure sizes (inches) for consistency across visualizations.

use log::error;

use crate::error::StyleError;

/// Default figure resolution, in dots per inch.
pub const DEFAULT_DPI: f32 = 100.0;

/// Figure dimensions in inches.
/// Contract: both fields are positive for every preset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSize {
    pub width: f32,
    pub height: f32,
}

impl FigureSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Pixel dimensions at `dpi`, rounded to the nearest pixel and never below 1.
    pub fn to_pixels(&self, dpi: f32) -> (i32, i32) {
        let px = |inches: f32| ((inches * dpi).round() as i32).max(1);
        (px(self.width), px(self.height))
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        SQUARE_MEDIUM
    }
}

pub const SQUARE_SMALL: FigureSize = FigureSize::new(7.5, 7.5);
pub const SQUARE_MEDIUM: FigureSize = FigureSize::new(10.0, 10.0);
pub const SQUARE_LARGE: FigureSize = FigureSize::new(12.0, 12.0);
pub const WIDE: FigureSize = FigureSize::new(12.0, 8.0);
pub const TALL: FigureSize = FigureSize::new(8.0, 12.0);

/// Named presets, read-only.
pub const STANDARD_FIGURE_SIZES: &[(&str, FigureSize)] = &[
    ("square_small", SQUARE_SMALL),
    ("square_medium", SQUARE_MEDIUM),
    ("square_large", SQUARE_LARGE),
    ("wide", WIDE),
    ("tall", TALL),
];

/// Find a preset by name.
pub fn figure_size(name: &str) -> Result<FigureSize, StyleError> {
    for (key, size) in STANDARD_FIGURE_SIZES {
        if *key == name {
            return Ok(*size);
        }
    }
    error!("unrecognized figure size preset (name={name})");
    Err(StyleError::UnknownFigureSize(name.to_string()))
}
