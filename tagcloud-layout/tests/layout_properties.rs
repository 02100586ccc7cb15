//! Property tests for the placement invariants.

use proptest::prelude::*;
use tagcloud_core::{BlockGlyphs, Point, VisualizationOptions, WordFrequencies};
use tagcloud_layout::{font_size_for, CloudBounds, LayoutConfig, LayoutEngine, SpiralGenerator};

fn word_table() -> impl Strategy<Value = WordFrequencies> {
    prop::collection::vec(("[a-z]{1,8}", 1u32..50), 0..20)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn placements_never_overlap(words in word_table(), step in 0.1f64..1.0) {
        let config = LayoutConfig { angular_step: step, ..Default::default() };
        let mut engine = LayoutEngine::new(BlockGlyphs::default(), config).unwrap();
        let placed = engine.layout(&words, &VisualizationOptions::default()).unwrap();

        for (i, a) in placed.iter().enumerate() {
            for b in &placed[i + 1..] {
                prop_assert!(!a.rect.intersects(&b.rect), "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn placed_words_match_input_keys(words in word_table()) {
        let mut engine = LayoutEngine::new(BlockGlyphs::default(), LayoutConfig::default()).unwrap();
        let placed = engine.layout(&words, &VisualizationOptions::default()).unwrap();

        prop_assert_eq!(placed.len(), words.len());
        let mut placed_words: Vec<&str> = placed.iter().map(|p| p.word.as_str()).collect();
        let mut input_words: Vec<&str> = words.iter().map(|(w, _)| w).collect();
        placed_words.sort_unstable();
        input_words.sort_unstable();
        prop_assert_eq!(placed_words, input_words);
        prop_assert_eq!(CloudBounds::from_placements(&placed).is_none(), words.is_empty());
    }

    #[test]
    fn font_size_monotonic(a in 0u32..1000, b in 0u32..1000, base in 1.0f32..40.0) {
        let max = a.max(b).max(1);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(font_size_for(lo, max, base) <= font_size_for(hi, max, base));
    }

    #[test]
    fn layout_is_deterministic(words in word_table(), cx in -500i32..500, cy in -500i32..500) {
        let config = LayoutConfig { center: Point::new(cx, cy), ..Default::default() };
        let options = VisualizationOptions::default();

        let mut engine = LayoutEngine::new(BlockGlyphs::default(), config.clone()).unwrap();
        let mut first_gen = SpiralGenerator::new(config.center, config.angular_step).unwrap();
        let mut second_gen = SpiralGenerator::new(config.center, config.angular_step).unwrap();

        let first = engine.layout_with(&words, &options, &mut first_gen).unwrap();
        let second = engine.layout_with(&words, &options, &mut second_gen).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn first_spiral_point_is_center(cx in any::<i16>(), cy in any::<i16>(), step in 0.001f64..10.0) {
        let center = Point::new(cx as i32, cy as i32);
        let mut walker = SpiralGenerator::new(center, step).unwrap();
        prop_assert_eq!(walker.next(), Some(center));
    }
}
