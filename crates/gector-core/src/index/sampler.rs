//! Level assignment for new nodes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::IndexConfig;

/// Default chance of promoting a node one level up.
pub const DEFAULT_PROMOTION_PROBABILITY: f64 = 0.5;

/// Repeated Bernoulli trials deciding how far up a new node propagates.
#[derive(Debug, Clone)]
pub struct LevelSampler {
    rng: StdRng,
    probability: f64,
}

impl LevelSampler {
    /// Creates a sampler seeded from OS entropy.
    #[must_use]
    pub fn new(probability: f64) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            probability,
        }
    }

    /// Creates a sampler with a fixed seed, for reproducible level layouts.
    #[must_use]
    pub fn seeded(probability: f64, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            probability,
        }
    }

    /// Builds the sampler described by an index configuration.
    #[must_use]
    pub fn from_config(config: &IndexConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(config.promotion_probability, seed),
            None => Self::new(config.promotion_probability),
        }
    }

    /// Promotion probability per trial.
    #[must_use]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Runs one independent trial.
    ///
    /// A probability of 0 (or below) never promotes, 1 (or above) always does.
    pub fn promote(&mut self) -> bool {
        self.rng.gen::<f64>() < self.probability
    }
}

impl Default for LevelSampler {
    fn default() -> Self {
        Self::new(DEFAULT_PROMOTION_PROBABILITY)
    }
}
