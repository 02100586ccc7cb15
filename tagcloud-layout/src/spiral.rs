//! Archimedean spiral candidate positions.
//!
//! The spiral itself ([`Spiral`]) is immutable; the only state is the
//! current angle, carried in an explicit [`SpiralCursor`]. Stepping is a pure
//! function `cursor → (point, next cursor)`, so a sequence can be replayed
//! from any saved cursor. [`SpiralGenerator`] bundles the two for callers that
//! just want an endless stream of points.
//!
//! ```text
//! angle:   0      s      2s     3s   ...
//! radius:  0      s·s    s·2s   s·3s ...
//! point:   center, then winding outward counter-clockwise (y down)
//! ```

use serde::{Deserialize, Serialize};
use tagcloud_core::Point;

use crate::engine::LayoutError;

/// Source of candidate anchor points for the placement search.
pub trait CoordinateGenerator {
    fn next_position(&mut self) -> Point;
}

impl<G: CoordinateGenerator + ?Sized> CoordinateGenerator for &mut G {
    fn next_position(&mut self) -> Point {
        (**self).next_position()
    }
}

/// Spiral parameters: a center and a strictly positive angular step
/// (radians). The step also scales the radius, so `radius = step · angle`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spiral {
    center: Point,
    step: f64,
}

/// Position along a spiral. Fresh cursors start at angle 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpiralCursor {
    angle: f64,
}

impl SpiralCursor {
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

impl Spiral {
    /// A zero, negative, or non-finite step is rejected: with `step == 0`
    /// the radius never grows and the search would spin on the center.
    pub fn new(center: Point, step: f64) -> Result<Self, LayoutError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(LayoutError::InvalidAngularStep(step));
        }
        Ok(Self { center, step })
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Point at `cursor` and the cursor one step further along.
    ///
    /// Coordinates truncate toward zero.
    #[inline]
    pub fn point_at(&self, cursor: SpiralCursor) -> (Point, SpiralCursor) {
        let angle = cursor.angle;
        let radius = self.step * angle;
        let x = self.center.x as f64 + radius * angle.cos();
        let y = self.center.y as f64 + radius * angle.sin();
        let next = SpiralCursor {
            angle: angle + self.step,
        };
        (Point::new(x as i32, y as i32), next)
    }

    /// Generator positioned at the start of this spiral.
    pub fn generator(&self) -> SpiralGenerator {
        SpiralGenerator {
            spiral: *self,
            cursor: SpiralCursor::default(),
        }
    }
}

/// Owning, non-restartable walker over a [`Spiral`].
///
/// Create a fresh generator (or keep a copy of [`SpiralGenerator::cursor`])
/// to replay a sequence.
#[derive(Clone, Debug)]
pub struct SpiralGenerator {
    spiral: Spiral,
    cursor: SpiralCursor,
}

impl SpiralGenerator {
    pub fn new(center: Point, step: f64) -> Result<Self, LayoutError> {
        Ok(Spiral::new(center, step)?.generator())
    }

    /// Resume from a previously saved cursor.
    pub fn resume(spiral: Spiral, cursor: SpiralCursor) -> Self {
        Self { spiral, cursor }
    }

    pub fn cursor(&self) -> SpiralCursor {
        self.cursor
    }

    pub fn spiral(&self) -> &Spiral {
        &self.spiral
    }
}

impl CoordinateGenerator for SpiralGenerator {
    #[inline]
    fn next_position(&mut self) -> Point {
        let (point, next) = self.spiral.point_at(self.cursor);
        self.cursor = next;
        point
    }
}

impl Iterator for SpiralGenerator {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        Some(self.next_position())
    }
}
