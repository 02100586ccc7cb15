//! # tagcloud-text
//!
//! Glyph backend for tag clouds. Measures and paints words via
//! `cosmic-text`.
//!
//! ## Architecture
//!
//! ```text
//! TextEngine (cosmic-text FontSystem + SwashCache)
//!     │
//!     ├─ measure(word, size) ──► Size        (LRU-cached)
//!     │
//!     └─ draw(word, size, origin) ──► PixelSink (coverage per pixel)
//! ```
//!
//! - **`engine`** — shaping, measurement, glyph rasterization.
//! - **`cache`** — LRU of measured boxes keyed by word and font size.

pub mod cache;
pub mod engine;

// Re-exports for ergonomic use.
pub use cache::MeasureCache;
pub use engine::{FontSpec, TextEngine};
