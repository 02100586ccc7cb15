//! Per-word glyph colors.
//!
//! Used only when the options ask for `FontColor::Random`. Interactive
//! renders use [`RandomColors`]; tests and reproducible output use
//! [`HashPalette`], which always maps the same word to the same color.

use std::hash::{Hash, Hasher};

use rand::rngs::ThreadRng;
use rand::Rng;
use rustc_hash::FxHasher;
use tagcloud_core::Rgb;

/// Chooses a color for each drawn word.
pub trait ColorSource {
    fn color_for(&mut self, word: &str) -> Rgb;
}

impl<F: FnMut(&str) -> Rgb> ColorSource for F {
    fn color_for(&mut self, word: &str) -> Rgb {
        self(word)
    }
}

/// Same color for every word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedColor(pub Rgb);

impl ColorSource for FixedColor {
    fn color_for(&mut self, _word: &str) -> Rgb {
        self.0
    }
}

/// Independent, unseeded random color per call.
#[derive(Clone, Debug, Default)]
pub struct RandomColors {
    rng: ThreadRng,
}

impl RandomColors {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl ColorSource for RandomColors {
    fn color_for(&mut self, _word: &str) -> Rgb {
        Rgb::new(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }
}

/// Deterministic word → palette entry via `FxHasher`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashPalette {
    colors: Vec<Rgb>,
}

const DEFAULT_PALETTE: [Rgb; 10] = [
    Rgb::new(0x1f, 0x77, 0xb4),
    Rgb::new(0xff, 0x7f, 0x0e),
    Rgb::new(0x2c, 0xa0, 0x2c),
    Rgb::new(0xd6, 0x27, 0x28),
    Rgb::new(0x94, 0x67, 0xbd),
    Rgb::new(0x8c, 0x56, 0x4b),
    Rgb::new(0xe3, 0x77, 0xc2),
    Rgb::new(0x7f, 0x7f, 0x7f),
    Rgb::new(0xbc, 0xbd, 0x22),
    Rgb::new(0x17, 0xbe, 0xcf),
];

impl Default for HashPalette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl HashPalette {
    /// Palette over `colors`; falls back to the default palette when empty.
    pub fn new(colors: Vec<Rgb>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self { colors }
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn lookup(&self, word: &str) -> Rgb {
        let mut hasher = FxHasher::default();
        word.hash(&mut hasher);
        self.colors[(hasher.finish() % self.colors.len() as u64) as usize]
    }
}

impl ColorSource for HashPalette {
    fn color_for(&mut self, word: &str) -> Rgb {
        self.lookup(word)
    }
}
