use std::time::{Duration, Instant};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tagcloud_core::{
    GlyphMeasure, MeasureError, OptionsError, Placement, Point, Rect, Size, VisualizationOptions,
    WordFrequencies,
};
use thiserror::Error;

use crate::spatial::SpatialHash;
use crate::spiral::{CoordinateGenerator, Spiral, SpiralGenerator};

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Angular step must be positive and finite, got {0}")]
    InvalidAngularStep(f64),
    #[error("Invalid layout config: {0}")]
    InvalidConfig(String),
    #[error("Could not place {word:?} after {attempts} attempts")]
    PlacementExhausted { word: String, attempts: u64 },
    #[error("Layout deadline exceeded while placing {word:?} after {elapsed:?}")]
    DeadlineExceeded { word: String, elapsed: Duration },
    #[error("Measurement failed: {0}")]
    Measure(#[from] MeasureError),
    #[error("Invalid options: {0}")]
    Options(#[from] OptionsError),
    #[error("Invalid layout config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl LayoutError {
    /// Whether retrying with different parameters (bigger attempt budget,
    /// smaller fonts, looser spiral) could succeed.
    pub fn is_search_failure(&self) -> bool {
        matches!(
            self,
            LayoutError::PlacementExhausted { .. } | LayoutError::DeadlineExceeded { .. }
        )
    }
}

/// Search parameters for the layout engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Spiral origin; the first candidate for every word.
    pub center: Point,
    /// Angular increment per candidate, radians. Must be > 0.
    pub angular_step: f64,
    /// Candidate budget per word.
    pub max_attempts: u64,
    /// Wall-clock budget for the whole layout call.
    pub deadline_ms: Option<u64>,
    /// Cell size of the collision grid, pixels.
    pub grid_cell_px: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center: Point::new(0, 0),
            angular_step: 0.1,
            max_attempts: 200_000,
            deadline_ms: None,
            grid_cell_px: 64,
        }
    }
}

impl LayoutConfig {
    /// Config whose spiral starts in the middle of a `size × size` canvas.
    pub fn centered_on(size: u32) -> Self {
        let half = (size / 2) as i32;
        Self {
            center: Point::new(half, half),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        self.spiral()?;
        if self.max_attempts == 0 {
            return Err(LayoutError::InvalidConfig("max_attempts must be at least 1".into()));
        }
        if self.grid_cell_px == 0 {
            return Err(LayoutError::InvalidConfig("grid_cell_px must be at least 1".into()));
        }
        Ok(())
    }

    pub fn spiral(&self) -> Result<Spiral, LayoutError> {
        Spiral::new(self.center, self.angular_step)
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }
}

/// Font size for a word with `count` occurrences when the most frequent word
/// has `max_count`: the base size plus up to five more base sizes, linear in
/// the frequency ratio.
pub fn font_size_for(count: u32, max_count: u32, base_font_size: f32) -> f32 {
    let ratio = if max_count == 0 {
        0.0
    } else {
        count as f32 / max_count as f32
    };
    base_font_size + ratio * base_font_size * 5.0
}

/// Places words along a spiral so that no two glyph boxes intersect.
///
/// Generic over the measurement backend; the same backend should later be
/// handed to the renderer (see [`LayoutEngine::backend_mut`]).
pub struct LayoutEngine<M> {
    measure: M,
    config: LayoutConfig,
}

impl<M: GlyphMeasure> LayoutEngine<M> {
    pub fn new(measure: M, config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { measure, config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn backend_mut(&mut self) -> &mut M {
        &mut self.measure
    }

    pub fn into_backend(self) -> M {
        self.measure
    }

    /// Lay out `words` on a fresh spiral built from the engine config.
    pub fn layout(
        &mut self,
        words: &WordFrequencies,
        options: &VisualizationOptions,
    ) -> Result<Vec<Placement>, LayoutError> {
        let mut generator: SpiralGenerator = self.config.spiral()?.generator();
        self.layout_with(words, options, &mut generator)
    }

    /// Lay out `words` using candidates from `generator`.
    ///
    /// The generator must not be shared with another in-flight layout. On
    /// error no placements are returned.
    pub fn layout_with<G: CoordinateGenerator>(
        &mut self,
        words: &WordFrequencies,
        options: &VisualizationOptions,
        generator: &mut G,
    ) -> Result<Vec<Placement>, LayoutError> {
        options.validate()?;

        let Some(max_count) = words.max_count() else {
            return Ok(Vec::new());
        };

        let started = Instant::now();
        let deadline = self.config.deadline();
        let mut index = SpatialHash::new(self.config.grid_cell_px);
        let mut placements: Vec<Placement> = Vec::with_capacity(words.len());
        let mut total_attempts: u64 = 0;

        for (word, count) in words.by_frequency() {
            let font_size = font_size_for(count, max_count, options.base_font_size);
            let size = self.measure.measure(word, font_size)?;

            let (rect, attempts) =
                self.find_free_rect(word, size, &index, generator, started, deadline)?;
            total_attempts += attempts;

            debug!(
                "placed {word:?} ({count}x, {font_size:.1}px) at {rect:?} after {attempts} attempts"
            );
            index.insert(rect);
            placements.push(Placement::new(word, rect, font_size));
        }

        info!(
            "laid out {} words in {:?} ({} candidates tried)",
            placements.len(),
            started.elapsed(),
            total_attempts
        );
        Ok(placements)
    }

    fn find_free_rect<G: CoordinateGenerator>(
        &self,
        word: &str,
        size: Size,
        index: &SpatialHash,
        generator: &mut G,
        started: Instant,
        deadline: Option<Duration>,
    ) -> Result<(Rect, u64), LayoutError> {
        for attempt in 1..=self.config.max_attempts {
            // Far out on the spiral a box may not fit in i32 coordinates.
            if let Some(candidate) = Rect::centered_at(generator.next_position(), size) {
                if !index.any_intersecting(&candidate) {
                    return Ok((candidate, attempt));
                }
            }

            // Checking the clock every candidate would dominate the loop.
            if let Some(limit) = deadline {
                if attempt % 1024 == 0 {
                    let elapsed = started.elapsed();
                    if elapsed > limit {
                        warn!("deadline of {limit:?} exceeded while placing {word:?}");
                        return Err(LayoutError::DeadlineExceeded {
                            word: word.to_string(),
                            elapsed,
                        });
                    }
                }
            }
        }

        warn!(
            "gave up placing {word:?} after {} attempts",
            self.config.max_attempts
        );
        Err(LayoutError::PlacementExhausted {
            word: word.to_string(),
            attempts: self.config.max_attempts,
        })
    }
}

// ===================================================================
// Tests
// ===================================================================
