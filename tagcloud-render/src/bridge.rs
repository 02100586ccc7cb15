//! Frequencies → pixels: wires the layout engine and the renderer to one
//! glyph backend so measured boxes and painted ink agree.

use log::debug;
use tagcloud_core::{GlyphPainter, Placement, VisualizationOptions, WordFrequencies};
use tagcloud_layout::{LayoutConfig, LayoutEngine};

use crate::canvas::Canvas;
use crate::palette::{ColorSource, RandomColors};
use crate::renderer::{CloudRenderer, RenderError};

/// Output of one pipeline run.
#[derive(Clone, Debug)]
pub struct RenderedCloud {
    pub canvas: Canvas,
    /// Placements in canvas coordinates.
    pub placements: Vec<Placement>,
}

/// Layout plus rendering over a single glyph backend.
pub struct TagCloud<B> {
    engine: LayoutEngine<B>,
    renderer: CloudRenderer,
}

impl<B: GlyphPainter> TagCloud<B> {
    pub fn new(
        backend: B,
        options: VisualizationOptions,
        config: LayoutConfig,
    ) -> Result<Self, RenderError> {
        let renderer = CloudRenderer::new(options)?;
        let engine = LayoutEngine::new(backend, config)?;
        Ok(Self { engine, renderer })
    }

    /// Spiral starts in the middle of the configured canvas, default search
    /// limits otherwise.
    pub fn with_canvas_center(backend: B, options: VisualizationOptions) -> Result<Self, RenderError> {
        let config = LayoutConfig::centered_on(options.canvas_size);
        Self::new(backend, options, config)
    }

    pub fn options(&self) -> &VisualizationOptions {
        self.renderer.options()
    }

    pub fn layout_config(&self) -> &LayoutConfig {
        self.engine.config()
    }

    pub fn backend_mut(&mut self) -> &mut B {
        self.engine.backend_mut()
    }

    /// Placements in layout coordinates, without rendering.
    pub fn layout(&mut self, words: &WordFrequencies) -> Result<Vec<Placement>, RenderError> {
        Ok(self.engine.layout(words, self.renderer.options())?)
    }

    pub fn render<C: ColorSource + ?Sized>(
        &mut self,
        words: &WordFrequencies,
        colors: &mut C,
    ) -> Result<RenderedCloud, RenderError> {
        let placements = self.layout(words)?;
        debug!("rendering {} placements", placements.len());
        let canvas = self
            .renderer
            .render(&placements, self.engine.backend_mut(), colors)?;
        Ok(RenderedCloud {
            canvas,
            placements: self.renderer.positioned(&placements),
        })
    }

    /// Render with an unseeded random color per word.
    pub fn render_random(&mut self, words: &WordFrequencies) -> Result<RenderedCloud, RenderError> {
        self.render(words, &mut RandomColors::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagcloud_core::{BlockGlyphs, FontColor, Rgb};

    fn words() -> WordFrequencies {
        [("hello", 2), ("world", 1)].into_iter().collect()
    }

    #[test]
    fn test_canvas_center_config() {
        let cloud = TagCloud::with_canvas_center(
            BlockGlyphs::default(),
            VisualizationOptions {
                canvas_size: 300,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(cloud.layout_config().center, tagcloud_core::Point::new(150, 150));
    }

    #[test]
    fn test_render_returns_canvas_coordinates() {
        let options = VisualizationOptions {
            canvas_size: 400,
            background: Rgb::BLACK,
            font_color: FontColor::Fixed(Rgb::WHITE),
            ..Default::default()
        };
        let mut cloud =
            TagCloud::new(BlockGlyphs::default(), options, LayoutConfig::default()).unwrap();
        let out = cloud.render_random(&words()).unwrap();
        assert_eq!((out.canvas.width(), out.canvas.height()), (400, 400));
        assert_eq!(out.placements.len(), 2);
        for p in &out.placements {
            assert!(p.rect.left() >= 0 && p.rect.right() <= 400);
            assert!(p.rect.top() >= 0 && p.rect.bottom() <= 400);
        }
    }

    #[test]
    fn test_invalid_config_surfaces_layout_error() {
        let config = LayoutConfig {
            angular_step: 0.0,
            ..Default::default()
        };
        let err = TagCloud::new(BlockGlyphs::default(), VisualizationOptions::default(), config)
            .err()
            .unwrap();
        assert!(matches!(err, RenderError::Layout(_)));
    }
}
