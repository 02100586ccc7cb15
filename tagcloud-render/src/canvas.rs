//! CPU raster target for a rendered cloud.
//!
//! Pixels are `Rgba` (4 × u8, `#[repr(C)]`, `bytemuck::Pod`) so the whole
//! buffer can be handed to an encoder as a flat RGBA8 byte slice without
//! copying.

use bytemuck::{Pod, Zeroable};
use tagcloud_core::{PixelSink, Rgb};

use crate::renderer::RenderError;

/// Upper bound on `width × height` (1 GiB of RGBA).
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(c: Rgb) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: 255,
        }
    }

    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// Row-major RGBA pixel buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// Allocate a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb) -> Result<Self, RenderError> {
        let count = width as u64 * height as u64;
        if count > MAX_CANVAS_PIXELS {
            return Err(RenderError::CanvasTooLarge { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![Rgba::opaque(background); count as usize],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let i = self.index(x.try_into().ok()?, y.try_into().ok()?)?;
        Some(self.pixels[i])
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Flat RGBA8 view, row-major, `width * height * 4` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn into_rgba_bytes(self) -> Vec<u8> {
        bytemuck::cast_slice(&self.pixels).to_vec()
    }
}

impl PixelSink for Canvas {
    /// Source-over blend; out-of-bounds coordinates are clipped.
    fn blend(&mut self, x: i32, y: i32, color: Rgb, coverage: u8) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let dst = &mut self.pixels[i];
        if coverage == 255 {
            *dst = Rgba::opaque(color);
            return;
        }
        let a = coverage as u16;
        let mix = |s: u8, d: u8| ((s as u16 * a + d as u16 * (255 - a) + 127) / 255) as u8;
        *dst = Rgba {
            r: mix(color.r, dst.r),
            g: mix(color.g, dst.g),
            b: mix(color.b, dst.b),
            a: 255,
        };
    }
}
