//! Bounding box of a finished layout.

use tagcloud_core::{Placement, Point};

/// Smallest axis-aligned box enclosing every placement.
///
/// Always derived from a placement list, never stored alongside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloudBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl CloudBounds {
    /// `None` for an empty list: an empty layout has no extent, and callers
    /// are expected to handle it before asking for bounds.
    pub fn from_placements(placements: &[Placement]) -> Option<Self> {
        let (first, rest) = placements.split_first()?;
        let init = CloudBounds {
            min_x: first.rect.left(),
            min_y: first.rect.top(),
            max_x: first.rect.right(),
            max_y: first.rect.bottom(),
        };
        Some(rest.iter().fold(init, |b, p| CloudBounds {
            min_x: b.min_x.min(p.rect.left()),
            min_y: b.min_y.min(p.rect.top()),
            max_x: b.max_x.max(p.rect.right()),
            max_y: b.max_y.max(p.rect.bottom()),
        }))
    }

    /// Horizontal extent; `i64` because a layout may span the whole `i32`
    /// range.
    #[inline]
    pub fn width(&self) -> i64 {
        i64::from(self.max_x) - i64::from(self.min_x)
    }

    #[inline]
    pub fn height(&self) -> i64 {
        i64::from(self.max_y) - i64::from(self.min_y)
    }

    /// Midpoint, rounded toward negative infinity so that translating the
    /// bounds translates the center by exactly the same delta.
    #[inline]
    pub fn center(&self) -> Point {
        let mid = |lo: i32, hi: i32| (i64::from(lo) + i64::from(hi)).div_euclid(2) as i32;
        Point::new(mid(self.min_x, self.max_x), mid(self.min_y, self.max_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagcloud_core::Rect;

    fn placement(x: i32, y: i32, w: i32, h: i32) -> Placement {
        Placement::new("w", Rect::new(x, y, w, h), 12.0)
    }

    #[test]
    fn test_empty_has_no_bounds() {
        assert_eq!(CloudBounds::from_placements(&[]), None);
    }

    #[test]
    fn test_single_placement() {
        let b = CloudBounds::from_placements(&[placement(10, 20, 30, 40)]).unwrap();
        assert_eq!(
            b,
            CloudBounds {
                min_x: 10,
                min_y: 20,
                max_x: 40,
                max_y: 60
            }
        );
        assert_eq!(b.width(), 30);
        assert_eq!(b.height(), 40);
        assert_eq!(b.center(), Point::new(25, 40));
    }

    #[test]
    fn test_multiple_placements() {
        let b = CloudBounds::from_placements(&[
            placement(-10, 5, 20, 10),
            placement(30, -15, 10, 10),
            placement(0, 0, 5, 50),
        ])
        .unwrap();
        assert_eq!(b.min_x, -10);
        assert_eq!(b.min_y, -15);
        assert_eq!(b.max_x, 40);
        assert_eq!(b.max_y, 50);
        assert_eq!(b.width(), 50);
        assert_eq!(b.height(), 65);
    }

    #[test]
    fn test_center_rounds_down() {
        let b = CloudBounds {
            min_x: -5,
            min_y: -5,
            max_x: 0,
            max_y: 2,
        };
        assert_eq!(b.center(), Point::new(-3, -2));
    }

    #[test]
    fn test_center_follows_translation() {
        let b = CloudBounds::from_placements(&[placement(-7, -3, 4, 2)]).unwrap();
        let moved = CloudBounds::from_placements(&[placement(-7 + 100, -3 + 100, 4, 2)]).unwrap();
        assert_eq!(moved.center().x, b.center().x + 100);
        assert_eq!(moved.center().y, b.center().y + 100);
    }

    #[test]
    fn test_full_range_extent() {
        let b = CloudBounds::from_placements(&[
            placement(i32::MIN, i32::MIN, 10, 10),
            placement(i32::MAX - 10, i32::MAX - 10, 10, 10),
        ])
        .unwrap();
        assert_eq!(b.width(), u32::MAX as i64);
        assert_eq!(b.height(), u32::MAX as i64);
        assert_eq!(b.center(), Point::new(-1, -1));
    }
}
