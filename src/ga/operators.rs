//! Real-coded genetic operators.
//!
//! Both operators take their inputs by reference or by value and return
//! freshly owned gene vectors; nothing aliases the parent generation.
//!
//! # Crossover
//!
//! - [`crossover`]: single-point crossover, degenerating to a random swap
//!   for one-gene individuals
//!
//! # Mutation
//!
//! - [`GaussianMutation`]: per-gene additive Gaussian noise clamped to the
//!   gene bounds
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Bäck, Fogel & Michalewicz (1997), *Handbook of Evolutionary
//!   Computation*, C3.2 (mutation of real-valued vectors)

use super::config::{ConfigError, GaConfig};
use super::types::GeneBounds;
use rand::Rng;
use rand_distr::{Distribution, Normal};

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// # Algorithm
///
/// 1. With probability `1 - crossover_rate`, return copies of the parents
/// 2. One gene: return the copies in original or swapped order (coin flip)
/// 3. Otherwise pick a cut point uniformly from `1..n`; child1 takes
///    `parent1[..cut] ++ parent2[cut..]`, child2 the complementary splice
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn crossover<R: Rng>(
    parent1: &[f64],
    parent2: &[f64],
    crossover_rate: f64,
    rng: &mut R,
) -> (Vec<f64>, Vec<f64>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if rng.random::<f64>() >= crossover_rate {
        return (parent1.to_vec(), parent2.to_vec());
    }

    if n < 2 {
        return if rng.random_bool(0.5) {
            (parent1.to_vec(), parent2.to_vec())
        } else {
            (parent2.to_vec(), parent1.to_vec())
        };
    }

    let cut = rng.random_range(1..n);
    (splice(parent1, parent2, cut), splice(parent2, parent1, cut))
}

/// `head[..cut]` followed by `tail[cut..]`.
fn splice(head: &[f64], tail: &[f64], cut: usize) -> Vec<f64> {
    let mut child = Vec::with_capacity(head.len());
    child.extend_from_slice(&head[..cut]);
    child.extend_from_slice(&tail[cut..]);
    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Per-gene Gaussian mutation.
///
/// Each gene is independently perturbed with probability `rate` by noise
/// drawn from `N(0, σ)` with `σ = (max - min) / 10`, then clamped back into
/// the bounds. Untouched genes keep their exact value.
#[derive(Debug, Clone, Copy)]
pub struct GaussianMutation {
    rate: f64,
    bounds: GeneBounds,
    noise: Normal<f64>,
}

impl GaussianMutation {
    /// Builds the operator for explicit parameters.
    pub fn new(rate: f64, bounds: GeneBounds) -> Result<Self, ConfigError> {
        let noise = Normal::new(0.0, bounds.mutation_sigma()).map_err(|_| {
            ConfigError::InvalidMutationSpread {
                min: bounds.min,
                max: bounds.max,
            }
        })?;
        Ok(Self {
            rate,
            bounds,
            noise,
        })
    }

    /// Builds the operator from a run configuration.
    pub fn from_config(config: &GaConfig) -> Result<Self, ConfigError> {
        Self::new(config.mutation_rate, config.bounds)
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn bounds(&self) -> GeneBounds {
        self.bounds
    }

    /// Mutates `genes` and hands them back.
    pub fn mutate<R: Rng>(&self, mut genes: Vec<f64>, rng: &mut R) -> Vec<f64> {
        for gene in genes.iter_mut() {
            if rng.random::<f64>() < self.rate {
                let shifted = *gene + self.noise.sample(rng);
                *gene = self.bounds.clamp(shifted);
            }
        }
        genes
    }
}
