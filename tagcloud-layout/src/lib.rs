//! # tagcloud-layout
//!
//! Word placement for tag clouds.
//!
//! ## Architecture
//!
//! ```text
//! WordFrequencies ──► LayoutEngine ──► Vec<Placement> ──► CloudBounds
//!                        │    ▲
//!          GlyphMeasure ─┘    │ candidate points
//!                        SpiralGenerator
//!                             │
//!                        SpatialHash (collision queries)
//! ```
//!
//! - **`spiral`** — Archimedean spiral candidates, pure cursor stepping.
//! - **`engine`** — font sizing, measurement, bounded placement search.
//! - **`spatial`** — uniform grid for box-overlap queries.
//! - **`bounds`** — bounding box of a finished layout.

pub mod bounds;
pub mod engine;
pub mod spatial;
pub mod spiral;

pub use bounds::CloudBounds;
pub use engine::{font_size_for, LayoutConfig, LayoutEngine, LayoutError};
pub use spatial::SpatialHash;
pub use spiral::{CoordinateGenerator, Spiral, SpiralCursor, SpiralGenerator};
