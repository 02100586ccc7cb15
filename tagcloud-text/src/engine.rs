//! Text engine — measures and paints words using `cosmic-text`.
//!
//! The engine owns a `FontSystem` (font discovery + shaping) and a
//! `SwashCache` (glyph rasterization). Every word is shaped as a single
//! unwrapped line. Its box is the union of the line box (advance width by
//! `line_height_factor × font_size`) and the rasterized ink, so overhanging
//! glyphs such as italics stay inside it. Painting re-shapes the word with
//! the same attributes and shifts it by the same ink overhang.

use cosmic_text::{
    Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style as CStyle, SwashCache,
    SwashContent, Weight,
};
use log::{debug, info};
use tagcloud_core::{GlyphMeasure, GlyphPainter, MeasureError, PixelSink, Point, Rgb, Size};

use crate::cache::MeasureCache;

/// Font selection for every word in a cloud.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// CSS-style family chain; the first entry is used
    /// (e.g. `"Arial, Helvetica, sans-serif"`).
    pub family: String,
    /// Font weight (100–900). 400 = normal, 700 = bold.
    pub weight: u16,
    pub italic: bool,
    /// Line box height as a multiple of the font size.
    pub line_height_factor: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: String::from("sans-serif"),
            weight: 400,
            italic: false,
            line_height_factor: 1.2,
        }
    }
}

/// Parse the first family from a potential CSS chain.
fn family_of(spec: &FontSpec) -> Family<'_> {
    let first = spec
        .family
        .split(',')
        .next()
        .unwrap_or(&spec.family)
        .trim()
        .trim_matches('"')
        .trim_matches('\'');
    match first {
        "sans-serif" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        concrete => Family::Name(concrete),
    }
}

/// Word box relative to the pen origin of the shaped line. `min_*` is never
/// positive and `max_*` never below the line box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct WordBox {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

impl WordBox {
    fn size(&self) -> Size {
        Size::new((self.max_x - self.min_x) as u32, (self.max_y - self.min_y) as u32)
    }

    fn include(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        self.min_x = self.min_x.min(left);
        self.min_y = self.min_y.min(top);
        self.max_x = self.max_x.max(right);
        self.max_y = self.max_y.max(bottom);
    }
}

/// cosmic-text backed [`GlyphMeasure`] + [`GlyphPainter`].
pub struct TextEngine {
    pub font_system: FontSystem,
    pub swash_cache: SwashCache,
    font: FontSpec,
    cache: MeasureCache,
    has_faces: bool,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    /// Create an engine with system font discovery and the default font.
    pub fn new() -> Self {
        Self::with_font(FontSpec::default())
    }

    pub fn with_font(font: FontSpec) -> Self {
        let font_system = FontSystem::new();
        let faces = font_system.db().faces().count();
        info!("text engine: {faces} font faces discovered, family {:?}", font.family);
        Self {
            font_system,
            swash_cache: SwashCache::new(),
            font,
            cache: MeasureCache::new(4096),
            has_faces: faces > 0,
        }
    }

    /// Register an in-memory font file (TTF/OTF). Clears cached measurements.
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.font_system.db_mut().load_font_data(data);
        self.has_faces = self.font_system.db().faces().next().is_some();
        self.cache.clear();
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn has_fonts(&self) -> bool {
        self.has_faces
    }

    pub fn cache(&self) -> &MeasureCache {
        &self.cache
    }

    fn check(&self, word: &str, font_size: f32) -> Result<(), MeasureError> {
        if !self.has_fonts() {
            return Err(MeasureError::FontUnavailable(format!(
                "no font faces available for {:?}",
                self.font.family
            )));
        }
        if !(font_size.is_finite() && font_size > 0.0) {
            return Err(MeasureError::Unmeasurable {
                word: word.to_string(),
                font_size,
            });
        }
        Ok(())
    }

    fn line_height(&self, font_size: f32) -> f32 {
        font_size * self.font.line_height_factor
    }

    /// Shape `word` as one unwrapped line.
    fn shape(&mut self, word: &str, font_size: f32) -> Buffer {
        let metrics = Metrics::new(font_size, self.line_height(font_size));
        let font_style = if self.font.italic {
            CStyle::Italic
        } else {
            CStyle::Normal
        };
        let attrs = Attrs::new()
            .family(family_of(&self.font))
            .weight(Weight(self.font.weight))
            .style(font_style);

        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(&mut self.font_system, word, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }

    /// Line box of `buffer` grown by the extent of its rasterized glyphs.
    fn word_box(&mut self, buffer: &Buffer, font_size: f32) -> WordBox {
        let mut lines = 0usize;
        let mut advance: f32 = 0.0;
        let mut word = WordBox {
            min_x: 0,
            min_y: 0,
            max_x: 0,
            max_y: 0,
        };

        for run in buffer.layout_runs() {
            lines += 1;
            for glyph in run.glyphs.iter() {
                advance = advance.max(glyph.x + glyph.w);
                let physical = glyph.physical((0.0, 0.0), 1.0);
                let Some(image) = self
                    .swash_cache
                    .get_image(&mut self.font_system, physical.cache_key)
                else {
                    continue;
                };
                let (w, h) = (image.placement.width as i32, image.placement.height as i32);
                if w == 0 || h == 0 {
                    continue;
                }
                let left = physical.x + image.placement.left;
                let top = run.line_y as i32 + physical.y - image.placement.top;
                word.include(left, top, left + w, top + h);
            }
        }

        let line_box_height = (self.line_height(font_size) * lines.max(1) as f32).ceil() as i32;
        word.include(0, 0, advance.ceil() as i32, line_box_height);
        word
    }
}

impl GlyphMeasure for TextEngine {
    fn measure(&mut self, word: &str, font_size: f32) -> Result<Size, MeasureError> {
        // Only validated sizes are ever cached.
        if let Some(size) = self.cache.get(word, font_size) {
            return Ok(size);
        }
        self.check(word, font_size)?;

        let buffer = self.shape(word, font_size);
        let size = self.word_box(&buffer, font_size).size();
        debug!("measured {word:?} at {font_size:.1}px: {size:?}");
        self.cache.put(word, font_size, size);
        Ok(size)
    }
}

impl GlyphPainter for TextEngine {
    fn draw(
        &mut self,
        word: &str,
        font_size: f32,
        origin: Point,
        color: Rgb,
        sink: &mut dyn PixelSink,
    ) -> Result<(), MeasureError> {
        self.check(word, font_size)?;
        let buffer = self.shape(word, font_size);
        let bounds = self.word_box(&buffer, font_size);
        // Ink left of or above the pen origin moves the whole word inward.
        let pen_x = origin.x.saturating_sub(bounds.min_x);
        let pen_y = origin.y.saturating_sub(bounds.min_y);

        for run in buffer.layout_runs() {
            let line_y = run.line_y;
            for glyph in run.glyphs.iter() {
                let physical = glyph.physical((0.0, 0.0), 1.0);

                let image = match self
                    .swash_cache
                    .get_image(&mut self.font_system, physical.cache_key)
                {
                    Some(img) => img,
                    None => continue, // whitespace or missing glyph
                };

                let (w, h) = (image.placement.width as i32, image.placement.height as i32);
                if w == 0 || h == 0 {
                    continue;
                }
                let left = pen_x.saturating_add(physical.x + image.placement.left);
                let top = pen_y.saturating_add(line_y as i32 + physical.y - image.placement.top);

                for row in 0..h {
                    for col in 0..w {
                        let i = (row * w + col) as usize;
                        let (ink, coverage) = match image.content {
                            SwashContent::Mask => (color, image.data[i]),
                            SwashContent::Color => {
                                let px = &image.data[i * 4..i * 4 + 4];
                                (Rgb::new(px[0], px[1], px[2]), px[3])
                            }
                            SwashContent::SubpixelMask => {
                                let px = &image.data[i * 4..i * 4 + 3];
                                let avg = (px[0] as u16 + px[1] as u16 + px[2] as u16) / 3;
                                (color, avg as u8)
                            }
                        };
                        if coverage > 0 {
                            sink.blend(left.saturating_add(col), top.saturating_add(row), ink, coverage);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

// ===================================================================
// Tests
// ===================================================================
