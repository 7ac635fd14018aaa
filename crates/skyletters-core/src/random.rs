//! Single seam for every random draw, so a run can be replayed exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f32;
}

/// Default source backed by a seedable [`StdRng`].
#[derive(Debug, Clone)]
pub struct Dice {
    rng: StdRng,
}

impl Dice {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl RandomSource for Dice {
    fn unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }
}

/// Always returns the same draw. Every spread lands on the same fraction.
#[derive(Debug, Clone, Copy)]
pub struct ConstantSource(pub f32);

impl RandomSource for ConstantSource {
    fn unit(&mut self) -> f32 {
        self.0
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<f32>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(draws: Vec<f32>) -> Self {
        Self { draws, cursor: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn unit(&mut self) -> f32 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        draw
    }
}
