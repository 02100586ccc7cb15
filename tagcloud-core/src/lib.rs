//! # tagcloud-core
//!
//! Shared data model for the tag cloud workspace: integer geometry, colors,
//! visualization options, word frequency tables, and the glyph capability
//! traits that the layout and render crates are generic over.
//!
//! ```text
//! WordFrequencies ──► tagcloud-layout ──► Vec<Placement> ──► tagcloud-render
//!                          │                                      │
//!                          └──────── GlyphMeasure / GlyphPainter ─┘
//! ```

use serde::{Deserialize, Serialize};

pub mod color;
pub mod glyph;
pub mod options;
pub mod words;

pub use color::{FontColor, Rgb};
pub use glyph::{BlockGlyphs, GlyphMeasure, GlyphPainter, MeasureError, PixelSink};
pub use options::{OptionsError, VisualizationOptions};
pub use words::WordFrequencies;

/// Integer pixel coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Glyph extent in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in integer pixel space, stored as origin + size.
///
/// `right()`/`bottom()` are exclusive-style coordinates (`x + width`), but
/// [`Rect::intersects`] treats them inclusively: two rects that merely touch
/// along an edge are considered overlapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Rect of `size` whose center is `center` (half extents truncate).
    ///
    /// `None` when any edge of the box falls outside the `i32` range.
    pub fn centered_at(center: Point, size: Size) -> Option<Self> {
        let width = i32::try_from(size.width).ok()?;
        let height = i32::try_from(size.height).ok()?;
        let x = center.x.checked_sub(width / 2)?;
        let y = center.y.checked_sub(height / 2)?;
        x.checked_add(width)?;
        y.checked_add(height)?;
        Some(Self {
            x,
            y,
            width,
            height,
        })
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Overlap test with inclusive edges.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// Same rect shifted by `(dx, dy)`, saturating at the `i32` range.
    #[inline]
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }
}

/// A word bound to a pixel rectangle and font size for one render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub rect: Rect,
    pub font_size: f32,
}

impl Placement {
    pub fn new(word: impl Into<String>, rect: Rect, font_size: f32) -> Self {
        Self {
            word: word.into(),
            rect,
            font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!(r.left(), 10);
        assert_eq!(r.top(), 20);
        assert_eq!(r.right(), 110);
        assert_eq!(r.bottom(), 70);
    }

    #[test]
    fn test_centered_at_truncates_half_extent() {
        let r = Rect::centered_at(Point::new(0, 0), Size::new(5, 3));
        assert_eq!(r, Some(Rect::new(-2, -1, 5, 3)));
    }

    #[test]
    fn test_centered_at_center_point() {
        let r = Rect::centered_at(Point::new(100, 200), Size::new(40, 20));
        assert_eq!(r, Some(Rect::new(80, 190, 40, 20)));
    }

    #[test]
    fn test_centered_at_rejects_out_of_range() {
        let size = Size::new(40, 20);
        assert_eq!(Rect::centered_at(Point::new(i32::MIN, 0), size), None);
        assert_eq!(Rect::centered_at(Point::new(i32::MAX, 0), size), None);
        assert_eq!(Rect::centered_at(Point::new(0, i32::MIN), size), None);
        assert_eq!(Rect::centered_at(Point::new(0, i32::MAX), size), None);
        assert_eq!(Rect::centered_at(Point::new(0, 0), Size::new(u32::MAX, 1)), None);

        let edge = Rect::centered_at(Point::new(i32::MAX - 20, 0), size).unwrap();
        assert_eq!(edge.right(), i32::MAX);
    }

    #[test]
    fn test_edges_saturate() {
        let r = Rect::new(i32::MAX - 1, i32::MAX - 1, 10, 10);
        assert_eq!(r.right(), i32::MAX);
        assert_eq!(r.bottom(), i32::MAX);
        assert_eq!(r.translate(5, 5).x, i32::MAX);
    }

    #[test]
    fn test_intersects_overlapping() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(50, 50, 100, 100);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_touching_edges() {
        let a = Rect::new(0, 0, 10, 10);
        let right = Rect::new(10, 0, 10, 10);
        let below = Rect::new(0, 10, 10, 10);
        let corner = Rect::new(10, 10, 10, 10);
        assert!(a.intersects(&right));
        assert!(a.intersects(&below));
        assert!(a.intersects(&corner));
    }

    #[test]
    fn test_no_intersect_with_gap() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(11, 0, 10, 10);
        let c = Rect::new(0, 11, 10, 10);
        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 5, 5);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_translate() {
        let r = Rect::new(1, 2, 3, 4).translate(-5, 10);
        assert_eq!(r, Rect::new(-4, 12, 3, 4));
    }

    #[test]
    fn test_placement_serde() {
        let p = Placement::new("hello", Rect::new(1, 2, 30, 12), 24.0);
        let json = serde_json::to_string(&p).unwrap();
        let back: Placement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
