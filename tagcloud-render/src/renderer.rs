//! Turns a finished layout into pixels.
//!
//! Sizing policy:
//!
//! | layout    | `canvas_size` | canvas                                        |
//! |-----------|---------------|-----------------------------------------------|
//! | empty     | any           | 100 × 100, background only                    |
//! | non-empty | `n > 0`       | `n × n`, cloud center moved to canvas center  |
//! | non-empty | `0`           | bounds + 2·padding (min 100), inset by padding |

use log::{debug, info};
use tagcloud_core::{
    GlyphPainter, MeasureError, OptionsError, Placement, Point, Rect, VisualizationOptions,
};
use tagcloud_layout::{CloudBounds, LayoutError};
use thiserror::Error;

use crate::canvas::Canvas;
use crate::palette::ColorSource;

/// Smallest canvas side ever produced.
pub const MIN_CANVAS_SIDE: u32 = 100;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),
    #[error("Glyph backend failed: {0}")]
    Measure(#[from] MeasureError),
    #[error("Invalid options: {0}")]
    Options(#[from] OptionsError),
    #[error("Canvas of {width}x{height} pixels is too large")]
    CanvasTooLarge { width: u32, height: u32 },
}

/// Renders placement lists according to one set of options.
#[derive(Clone, Debug)]
pub struct CloudRenderer {
    options: VisualizationOptions,
}

impl CloudRenderer {
    pub fn new(options: VisualizationOptions) -> Result<Self, RenderError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &VisualizationOptions {
        &self.options
    }

    /// Canvas dimensions for `placements`.
    pub fn canvas_dimensions(&self, placements: &[Placement]) -> (u32, u32) {
        let Some(bounds) = CloudBounds::from_placements(placements) else {
            return (MIN_CANVAS_SIDE, MIN_CANVAS_SIDE);
        };
        if !self.options.is_auto_sized() {
            let side = self.options.canvas_size;
            return (side, side);
        }
        let pad = 2 * i64::from(self.options.padding_px);
        let side = |extent: i64| (extent + pad).clamp(i64::from(MIN_CANVAS_SIDE), i64::from(u32::MAX)) as u32;
        (side(bounds.width()), side(bounds.height()))
    }

    /// Translation applied to every placement before drawing.
    ///
    /// Computed in `i64`: a cloud near the edge of the `i32` range can need a
    /// shift larger than `i32` allows.
    pub fn offset(&self, placements: &[Placement]) -> (i64, i64) {
        let Some(bounds) = CloudBounds::from_placements(placements) else {
            return (0, 0);
        };
        if self.options.is_auto_sized() {
            let pad = i64::from(self.options.padding_px);
            (pad - i64::from(bounds.min_x), pad - i64::from(bounds.min_y))
        } else {
            let canvas_center = i64::from(self.options.canvas_size / 2);
            let cloud_center = bounds.center();
            (
                canvas_center - i64::from(cloud_center.x),
                canvas_center - i64::from(cloud_center.y),
            )
        }
    }

    /// Placements translated into canvas coordinates.
    pub fn positioned(&self, placements: &[Placement]) -> Vec<Placement> {
        let delta = self.offset(placements);
        placements
            .iter()
            .map(|p| Placement {
                rect: shifted(&p.rect, delta),
                ..p.clone()
            })
            .collect()
    }

    /// Paint `placements` onto a freshly allocated canvas.
    ///
    /// `painter` must be the backend that measured the words during layout.
    /// `colors` is consulted only when the options use random font colors.
    pub fn render<P, C>(
        &self,
        placements: &[Placement],
        painter: &mut P,
        colors: &mut C,
    ) -> Result<Canvas, RenderError>
    where
        P: GlyphPainter + ?Sized,
        C: ColorSource + ?Sized,
    {
        let (width, height) = self.canvas_dimensions(placements);
        let mut canvas = Canvas::new(width, height, self.options.background)?;

        if placements.is_empty() {
            debug!("empty layout, blank {width}x{height} canvas");
            return Ok(canvas);
        }

        let delta = self.offset(placements);
        for placement in placements {
            let color = match self.options.font_color.fixed() {
                Some(fixed) => fixed,
                None => colors.color_for(&placement.word),
            };
            let rect = shifted(&placement.rect, delta);
            let origin = Point::new(rect.x, rect.y);
            painter.draw(&placement.word, placement.font_size, origin, color, &mut canvas)?;
        }

        info!(
            "rendered {} words onto {width}x{height} canvas (offset {},{})",
            placements.len(),
            delta.0,
            delta.1
        );
        Ok(canvas)
    }
}

/// `rect` moved by `delta`, clamped so that its far edges stay inside the
/// `i32` range. Clamped boxes lie far outside any canvas and are clipped.
fn shifted(rect: &Rect, (dx, dy): (i64, i64)) -> Rect {
    let clamp = |pos: i32, extent: i32, d: i64| {
        let hi = i64::from(i32::MAX) - i64::from(extent.max(0));
        (i64::from(pos) + d).clamp(i64::from(i32::MIN), hi) as i32
    };
    Rect {
        x: clamp(rect.x, rect.width, dx),
        y: clamp(rect.y, rect.height, dy),
        ..*rect
    }
}

// ===================================================================
// Tests
// ===================================================================
