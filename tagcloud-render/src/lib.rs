//! # tagcloud-render
//!
//! CPU rasterization of tag-cloud layouts.
//!
//! ## Architecture
//!
//! ```text
//!  WordFrequencies (tagcloud-core)
//!       │
//!       ▼
//!  LayoutEngine (tagcloud-layout)   ◀─── GlyphMeasure
//!       │
//!       ▼
//!  CloudRenderer.render()           ◀─── GlyphPainter + ColorSource
//!       │
//!       ▼
//!  Canvas (RGBA8)
//! ```
//!
//! ## Crate modules
//!
//! - [`canvas`] — pixel buffer and source-over blending
//! - [`palette`] — per-word color sources
//! - [`renderer`] — canvas sizing, recentring, glyph painting
//! - [`bridge`] — layout + render over one glyph backend

pub mod bridge;
pub mod canvas;
pub mod palette;
pub mod renderer;

// Re-exports for convenience
pub use bridge::{RenderedCloud, TagCloud};
pub use canvas::{Canvas, Rgba, MAX_CANVAS_PIXELS};
pub use palette::{ColorSource, FixedColor, HashPalette, RandomColors};
pub use renderer::{CloudRenderer, RenderError, MIN_CANVAS_SIDE};
