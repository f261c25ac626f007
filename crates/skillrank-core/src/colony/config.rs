//! Colony parameters

use serde::{Deserialize, Serialize};

use crate::bail_config;
use crate::error::Result;

pub const DEFAULT_NUM_ANTS: usize = 500;
pub const DEFAULT_NUM_ITERATIONS: usize = 1;
pub const DEFAULT_ALPHA: f64 = 1.0;
pub const DEFAULT_BETA: f64 = 2.0;
pub const DEFAULT_EVAPORATION_RATE: f64 = 0.1;

/// Parameters fixed for the lifetime of an [`AntColony`](super::AntColony)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColonyConfig {
    /// Draws per iteration
    pub num_ants: usize,
    /// Evaporate/reinforce cycles per run
    pub num_iterations: usize,
    /// Exponent on the pheromone weight
    pub alpha: f64,
    /// Exponent on the heuristic weight
    pub beta: f64,
    /// Fraction of pheromone lost each iteration, in `[0, 1]`
    pub evaporation_rate: f64,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        ColonyConfig {
            num_ants: DEFAULT_NUM_ANTS,
            num_iterations: DEFAULT_NUM_ITERATIONS,
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            evaporation_rate: DEFAULT_EVAPORATION_RATE,
        }
    }
}

impl ColonyConfig {
    /// Create and validate a configuration
    pub fn new(
        num_ants: usize,
        num_iterations: usize,
        alpha: f64,
        beta: f64,
        evaporation_rate: f64,
    ) -> Result<Self> {
        let config = ColonyConfig {
            num_ants,
            num_iterations,
            alpha,
            beta,
            evaporation_rate,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_ants == 0 {
            bail_config!("num_ants", "must be positive");
        }
        if self.num_iterations == 0 {
            bail_config!("num_iterations", "must be positive");
        }
        if !self.alpha.is_finite() {
            bail_config!("alpha", format!("must be finite, got {}", self.alpha));
        }
        if !self.beta.is_finite() {
            bail_config!("beta", format!("must be finite, got {}", self.beta));
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            bail_config!(
                "evaporation_rate",
                format!("must be within [0, 1], got {}", self.evaporation_rate)
            );
        }
        Ok(())
    }

    pub fn with_ants(mut self, num_ants: usize) -> Self {
        self.num_ants = num_ants;
        self
    }

    pub fn with_iterations(mut self, num_iterations: usize) -> Self {
        self.num_iterations = num_iterations;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation_rate(mut self, evaporation_rate: f64) -> Self {
        self.evaporation_rate = evaporation_rate;
        self
    }
}
