//! Visualization options shared by the layout engine and the renderer.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::{FontColor, Rgb};

#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Base font size must be positive and finite, got {0}")]
    InvalidFontSize(f32),
    #[error("Unknown color: {0:?}")]
    InvalidColor(String),
    #[error("Invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Canvas and typography settings for one render.
///
/// Missing JSON fields fall back to the defaults:
/// 64 px padding, 12 px base font, black background, random word colors,
/// and a 300 px square canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationOptions {
    /// Inset between the cloud and the canvas edge in auto-size mode.
    pub padding_px: u32,
    /// Font size of the least prominent word; the most frequent word is
    /// drawn at six times this size.
    pub base_font_size: f32,
    pub background: Rgb,
    pub font_color: FontColor,
    /// Side of the square canvas. `0` sizes the canvas from the content.
    pub canvas_size: u32,
}

impl Default for VisualizationOptions {
    fn default() -> Self {
        Self {
            padding_px: 64,
            base_font_size: 12.0,
            background: Rgb::BLACK,
            font_color: FontColor::Random,
            canvas_size: 300,
        }
    }
}

impl VisualizationOptions {
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.base_font_size.is_finite() && self.base_font_size > 0.0) {
            debug!("rejecting options: base font size {}", self.base_font_size);
            return Err(OptionsError::InvalidFontSize(self.base_font_size));
        }
        Ok(())
    }

    /// Whether the canvas is sized from the cloud's bounds.
    #[inline]
    pub fn is_auto_sized(&self) -> bool {
        self.canvas_size == 0
    }
}
