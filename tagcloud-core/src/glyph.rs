//! Glyph capabilities injected into the layout engine and the renderer.
//!
//! Layout only needs [`GlyphMeasure`]; painting needs [`GlyphPainter`]. The
//! same backend instance must serve both steps, otherwise the measured boxes
//! and the drawn ink drift apart and words visibly overlap.

use thiserror::Error;

use crate::color::Rgb;
use crate::{Point, Size};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error("No usable font: {0}")]
    FontUnavailable(String),
    #[error("Cannot measure {word:?} at {font_size}px")]
    Unmeasurable { word: String, font_size: f32 },
}

/// Measures the pixel box of a word at a given font size.
///
/// Implementations must be deterministic for a fixed font family and size.
pub trait GlyphMeasure {
    fn measure(&mut self, word: &str, font_size: f32) -> Result<Size, MeasureError>;
}

impl<T: GlyphMeasure + ?Sized> GlyphMeasure for &mut T {
    fn measure(&mut self, word: &str, font_size: f32) -> Result<Size, MeasureError> {
        (**self).measure(word, font_size)
    }
}

/// Destination for painted glyph coverage.
pub trait PixelSink {
    /// Blend `color` at `(x, y)` with `coverage` (0 = none, 255 = opaque).
    /// Coordinates outside the target are ignored.
    fn blend(&mut self, x: i32, y: i32, color: Rgb, coverage: u8);
}

/// A [`GlyphMeasure`] that can also paint the word it measured.
pub trait GlyphPainter: GlyphMeasure {
    /// Paint `word` with its box's top-left corner at `origin`.
    fn draw(
        &mut self,
        word: &str,
        font_size: f32,
        origin: Point,
        color: Rgb,
        sink: &mut dyn PixelSink,
    ) -> Result<(), MeasureError>;
}

impl<T: GlyphPainter + ?Sized> GlyphPainter for &mut T {
    fn draw(
        &mut self,
        word: &str,
        font_size: f32,
        origin: Point,
        color: Rgb,
        sink: &mut dyn PixelSink,
    ) -> Result<(), MeasureError> {
        (**self).draw(word, font_size, origin, color, sink)
    }
}

/// Font-free backend that renders every character as a solid block.
///
/// Each character occupies a cell `advance × font_size` wide and
/// `line_height × font_size` tall. Useful headless and in tests, where
/// system fonts may be missing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockGlyphs {
    pub advance: f32,
    pub line_height: f32,
}

impl Default for BlockGlyphs {
    fn default() -> Self {
        Self {
            advance: 0.5,
            line_height: 1.25,
        }
    }
}

impl BlockGlyphs {
    fn cell(&self, font_size: f32) -> (u32, u32) {
        (
            (self.advance * font_size).ceil() as u32,
            (self.line_height * font_size).ceil() as u32,
        )
    }
}

impl GlyphMeasure for BlockGlyphs {
    fn measure(&mut self, word: &str, font_size: f32) -> Result<Size, MeasureError> {
        if !(font_size.is_finite() && font_size > 0.0) {
            return Err(MeasureError::Unmeasurable {
                word: word.to_string(),
                font_size,
            });
        }
        let (cell_w, cell_h) = self.cell(font_size);
        let chars = word.chars().count() as u32;
        Ok(Size::new(cell_w * chars, cell_h))
    }
}

impl GlyphPainter for BlockGlyphs {
    fn draw(
        &mut self,
        word: &str,
        font_size: f32,
        origin: Point,
        color: Rgb,
        sink: &mut dyn PixelSink,
    ) -> Result<(), MeasureError> {
        let size = self.measure(word, font_size)?;
        let (cell_w, _) = self.cell(font_size);
        // One pixel of spacing around each block keeps letters apart.
        for (i, ch) in word.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let x0 = origin.x.saturating_add((i as u32 * cell_w) as i32);
            for dy in 1..size.height.saturating_sub(1) {
                for dx in 1..cell_w.saturating_sub(1) {
                    let x = x0.saturating_add(dx as i32);
                    let y = origin.y.saturating_add(dy as i32);
                    sink.blend(x, y, color, 255);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder(Vec<(i32, i32)>);

    impl PixelSink for Recorder {
        fn blend(&mut self, x: i32, y: i32, _color: Rgb, _coverage: u8) {
            self.0.push((x, y));
        }
    }

    #[test]
    fn test_block_measure() {
        let mut g = BlockGlyphs::default();
        let s = g.measure("hello", 10.0).unwrap();
        assert_eq!(s, Size::new(25, 13));
    }

    #[test]
    fn test_block_measure_grows_with_font_size() {
        let mut g = BlockGlyphs::default();
        let small = g.measure("word", 12.0).unwrap();
        let large = g.measure("word", 72.0).unwrap();
        assert!(large.width > small.width);
        assert!(large.height > small.height);
    }

    #[test]
    fn test_block_measure_rejects_bad_size() {
        let mut g = BlockGlyphs::default();
        assert!(g.measure("x", 0.0).is_err());
        assert!(g.measure("x", f32::INFINITY).is_err());
    }

    #[test]
    fn test_block_draw_stays_inside_measured_box() {
        let mut g = BlockGlyphs::default();
        let size = g.measure("ab", 20.0).unwrap();
        let mut rec = Recorder(Vec::new());
        g.draw("ab", 20.0, Point::new(5, 7), Rgb::WHITE, &mut rec).unwrap();
        assert!(!rec.0.is_empty());
        for &(x, y) in &rec.0 {
            assert!(x >= 5 && x < 5 + size.width as i32);
            assert!(y >= 7 && y < 7 + size.height as i32);
        }
    }

    #[test]
    fn test_block_draw_skips_spaces() {
        let mut g = BlockGlyphs::default();
        let mut rec = Recorder(Vec::new());
        g.draw(" ", 20.0, Point::new(0, 0), Rgb::WHITE, &mut rec).unwrap();
        assert!(rec.0.is_empty());
    }

    #[test]
    fn test_measure_through_mut_ref() {
        fn measure_twice(mut m: impl GlyphMeasure) -> Size {
            m.measure("abc", 10.0).unwrap();
            m.measure("abc", 10.0).unwrap()
        }
        let mut g = BlockGlyphs::default();
        assert_eq!(measure_twice(&mut g), Size::new(15, 13));
    }
}
