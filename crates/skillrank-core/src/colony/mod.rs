//! Pheromone-reinforced sampler
//!
//! Each iteration sends `num_ants` ants to draw one candidate each, with
//! probability proportional to `pheromone^alpha * heuristic^beta`. After all
//! draws the trail evaporates and is reinforced by how often each candidate
//! was picked:
//!
//! ```text
//! pheromone[i] = (1 - evaporation_rate) * pheromone[i] + count[i] / num_ants
//! ```
//!
//! Selection counts accumulate across iterations into the final scores.
//! Pheromones live as long as the colony, so reusing one instance across
//! [`AntColony::run`] calls carries reinforcement over; construct a fresh
//! colony per request to start from a uniform trail.

mod config;

use std::time::Instant;

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, trace, warn};

use crate::candidate::Candidate;
use crate::error::Result;
use crate::heuristic;
use crate::query::Query;
use crate::ranking::Ranking;
use crate::trace_time;

pub use config::{
    ColonyConfig, DEFAULT_ALPHA, DEFAULT_BETA, DEFAULT_EVAPORATION_RATE, DEFAULT_NUM_ANTS,
    DEFAULT_NUM_ITERATIONS,
};

/// Initial pheromone level for every candidate
pub const INITIAL_PHEROMONE: f64 = 1.0;

/// Ant colony ranking over a borrowed corpus
#[derive(Debug)]
pub struct AntColony<'a, C, R = StdRng> {
    corpus: &'a [C],
    config: ColonyConfig,
    pheromones: Vec<f64>,
    rng: R,
}

impl<'a, C: Candidate> AntColony<'a, C, StdRng> {
    /// Create a colony seeded from OS entropy
    pub fn new(corpus: &'a [C], config: ColonyConfig) -> Result<Self> {
        Self::with_rng(corpus, config, StdRng::from_entropy())
    }

    /// Create a colony with a fixed seed for reproducible rankings
    pub fn with_seed(corpus: &'a [C], config: ColonyConfig, seed: u64) -> Result<Self> {
        Self::with_rng(corpus, config, StdRng::seed_from_u64(seed))
    }
}

impl<'a, C: Candidate, R: RngCore> AntColony<'a, C, R> {
    /// Create a colony drawing from the given random source.
    ///
    /// Fails with `InvalidConfiguration` if `config` does not validate.
    pub fn with_rng(corpus: &'a [C], config: ColonyConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(AntColony {
            corpus,
            config,
            pheromones: vec![INITIAL_PHEROMONE; corpus.len()],
            rng,
        })
    }

    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    /// Current pheromone trail, index-aligned with the corpus
    pub fn pheromones(&self) -> &[f64] {
        &self.pheromones
    }

    /// Restore a uniform trail
    pub fn reset_pheromones(&mut self) {
        self.pheromones.fill(INITIAL_PHEROMONE);
    }

    /// Rank the corpus for `query`.
    ///
    /// Only candidates selected at least once appear in the result.
    pub fn run(&mut self, query: &Query) -> Ranking<'a, C> {
        let start = Instant::now();
        let n = self.corpus.len();

        debug!(
            candidates = n,
            num_ants = self.config.num_ants,
            num_iterations = self.config.num_iterations,
            alpha = self.config.alpha,
            beta = self.config.beta,
            evaporation_rate = self.config.evaporation_rate,
            query = %query,
            "colony_run"
        );

        let mut scores = vec![0.0; n];
        if n == 0 {
            return Ranking::from_scores(self.corpus, &scores);
        }

        // The heuristic does not depend on the trail, so one pass serves every iteration
        let heuristic = heuristic::relevance(query, self.corpus);

        for iteration in 0..self.config.num_iterations {
            let counts = self.draw(&heuristic);
            self.update_pheromones(&counts);

            for (score, count) in scores.iter_mut().zip(&counts) {
                *score += count;
            }

            trace!(
                iteration,
                selected = counts.iter().filter(|c| **c > 0.0).count(),
                "colony_iteration"
            );
        }

        let ranking = Ranking::from_scores(self.corpus, &scores);
        trace_time!(start, "colony_run_done", ranked = ranking.len());
        ranking
    }

    /// Combined selection weight `pheromone^alpha * heuristic^beta` per candidate
    fn weights(&self, heuristic: &[f64]) -> Vec<f64> {
        self.pheromones
            .iter()
            .zip(heuristic)
            .map(|(p, h)| p.powf(self.config.alpha) * h.powf(self.config.beta))
            .collect()
    }

    /// Run one iteration of draws; returns selection counts per candidate.
    ///
    /// When the weights sum to zero no candidate can be chosen and every draw
    /// is skipped.
    fn draw(&mut self, heuristic: &[f64]) -> Vec<f64> {
        let mut counts = vec![0.0; self.corpus.len()];

        // The trail only changes between iterations, so all ants share one distribution
        let weights = self.weights(heuristic);
        let total: f64 = weights.iter().sum();

        if total == 0.0 {
            trace!(num_ants = self.config.num_ants, "degenerate_weights");
            return counts;
        }
        if !total.is_finite() {
            warn!(total, "non-finite colony weights, skipping iteration draws");
            return counts;
        }

        let distribution = match WeightedIndex::new(&weights) {
            Ok(d) => d,
            Err(err) => {
                warn!(error = %err, "invalid colony weights, skipping iteration draws");
                return counts;
            }
        };

        for _ in 0..self.config.num_ants {
            counts[distribution.sample(&mut self.rng)] += 1.0;
        }
        counts
    }

    /// Evaporate the trail and reinforce it with this iteration's counts
    fn update_pheromones(&mut self, counts: &[f64]) {
        let retain = 1.0 - self.config.evaporation_rate;
        let ants = self.config.num_ants as f64;
        for (pheromone, count) in self.pheromones.iter_mut().zip(counts) {
            *pheromone = retain * *pheromone + count / ants;
        }
    }
}
