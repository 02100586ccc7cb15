//! Spatial hash grid for collision queries during placement.
//!
//! Divides pixel space into uniform square cells. Every accepted word box is
//! registered in each cell its closed extent touches, so a candidate box only
//! has to be compared against boxes sharing at least one cell with it.
//!
//! # Design decisions
//!
//! * **Closed extents.** Cell ranges are computed from `left..=right` and
//!   `top..=bottom`, matching [`Rect::intersects`]. Two boxes that touch on an
//!   edge always share a cell, so the grid answers exactly like a scan over
//!   every accepted box.
//! * **Append-only.** A layout never moves or withdraws an accepted word, so
//!   boxes live in a `Vec` and cells hold indices into it.

use rustc_hash::FxHashMap;
use tagcloud_core::Rect;

// ───────────────────────────────────────────────────────────────────
// Cell key
// ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct CellKey(i32, i32);

// ───────────────────────────────────────────────────────────────────
// SpatialHash
// ───────────────────────────────────────────────────────────────────

/// Grid-based spatial hash over the boxes accepted so far.
#[derive(Clone, Debug)]
pub struct SpatialHash {
    /// Width/height of each grid cell in pixels.
    cell_size: i32,
    /// Grid: cell → indices of boxes touching that cell.
    grid: FxHashMap<CellKey, Vec<usize>>,
    /// Accepted boxes in insertion order.
    rects: Vec<Rect>,
}

impl SpatialHash {
    /// Create an empty grid with the given cell size in pixels.
    ///
    /// A cell around the typical word width (64 px for 12 px base fonts)
    /// keeps most boxes within two or three cells.
    pub fn new(cell_size: u32) -> Self {
        assert!(cell_size > 0, "cell_size must be positive");
        Self {
            cell_size: cell_size.min(i32::MAX as u32) as i32,
            grid: FxHashMap::default(),
            rects: Vec::new(),
        }
    }

    #[inline(always)]
    fn to_cell(&self, x: i32, y: i32) -> CellKey {
        CellKey(x.div_euclid(self.cell_size), y.div_euclid(self.cell_size))
    }

    /// Inclusive cell range covered by a rect's closed extent.
    #[inline]
    fn cell_range(&self, rect: &Rect) -> (CellKey, CellKey) {
        let min = self.to_cell(rect.left(), rect.top());
        let max = self.to_cell(rect.right(), rect.bottom());
        (min, max)
    }

    /// Register an accepted box and return its index.
    pub fn insert(&mut self, rect: Rect) -> usize {
        let index = self.rects.len();
        self.rects.push(rect);
        let (min, max) = self.cell_range(&rect);
        for cx in min.0..=max.0 {
            for cy in min.1..=max.1 {
                self.grid.entry(CellKey(cx, cy)).or_default().push(index);
            }
        }
        index
    }

    /// Whether any registered box intersects `region`.
    ///
    /// Returns on the first hit; no allocation.
    pub fn any_intersecting(&self, region: &Rect) -> bool {
        let (min, max) = self.cell_range(region);
        for cx in min.0..=max.0 {
            for cy in min.1..=max.1 {
                let Some(indices) = self.grid.get(&CellKey(cx, cy)) else {
                    continue;
                };
                if indices.iter().any(|&i| self.rects[i].intersects(region)) {
                    return true;
                }
            }
        }
        false
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

// ===================================================================
// Tests
// ===================================================================
