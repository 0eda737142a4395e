//! Core data types for the GA.
//!
//! An individual is an owned gene vector. Operators always hand back fresh
//! vectors, so no individual is ever shared between two generations.

use rand::Rng;

/// A candidate solution: one real value per problem dimension.
pub type Individual = Vec<f64>;

/// All individuals of one generation.
pub type Population = Vec<Individual>;

/// Closed interval every gene must stay inside.
///
/// ```
/// use realga::ga::GeneBounds;
///
/// let b = GeneBounds::new(-10.0, 10.0);
/// assert_eq!(b.clamp(12.5), 10.0);
/// assert_eq!(b.mutation_sigma(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneBounds {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl Default for GeneBounds {
    fn default() -> Self {
        Self {
            min: -10.0,
            max: 10.0,
        }
    }
}

impl GeneBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Standard deviation of the Gaussian mutation noise: a tenth of the span.
    pub fn mutation_sigma(&self) -> f64 {
        self.span() / 10.0
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps `value` into `[min, max]`.
    ///
    /// `NaN` maps to `min` so a gene can never leave the interval.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Draws a value uniformly from `[min, max]`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.min..=self.max)
    }
}

/// Creates `size` individuals of `dimensions` genes, each drawn uniformly
/// within `bounds`.
pub fn random_population<R: Rng>(
    size: usize,
    dimensions: usize,
    bounds: &GeneBounds,
    rng: &mut R,
) -> Population {
    (0..size)
        .map(|_| (0..dimensions).map(|_| bounds.sample(rng)).collect())
        .collect()
}

/// Summary of one evaluated generation.
///
/// Appended once per generation to [`GaReport::generation_stats`](super::GaReport::generation_stats)
/// and never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based generation index.
    pub generation: usize,

    /// Highest fitness in this generation.
    pub best_fitness: f64,

    /// Mean fitness over the generation.
    pub avg_fitness: f64,
}

/// Best individual observed across all generations so far.
#[derive(Debug, Clone, PartialEq)]
pub struct BestSoFar {
    pub individual: Individual,
    pub fitness: f64,
    /// Generation (1-based) in which `individual` was first seen.
    pub generation: usize,
}

impl BestSoFar {
    /// Replaces the record only on strict improvement.
    ///
    /// Returns `true` when the record changed.
    pub(crate) fn offer(
        slot: &mut Option<BestSoFar>,
        individual: &[f64],
        fitness: f64,
        generation: usize,
    ) -> bool {
        let improves = match slot {
            Some(best) => fitness > best.fitness,
            None => fitness > f64::NEG_INFINITY,
        };
        if improves {
            *slot = Some(BestSoFar {
                individual: individual.to_vec(),
                fitness,
                generation,
            });
        }
        improves
    }
}
