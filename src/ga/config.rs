//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop,
//! expressed in engine units (rates as fractions in `[0, 1]`).

use super::objective::Objective;
use super::types::GeneBounds;

/// Configuration rejected at construction time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,
    #[error("num_generations must be at least 1")]
    NoGenerations,
    #[error("gene bounds must be finite, got [{min}, {max}]")]
    NonFiniteBounds { min: f64, max: f64 },
    #[error("min_value ({min}) must be less than max_value ({max})")]
    InvertedBounds { min: f64, max: f64 },
    #[error("gene bounds [{min}, {max}] are too wide for Gaussian mutation")]
    InvalidMutationSpread { min: f64, max: f64 },
    #[error("{name} must be a finite value, got {value}")]
    NonFiniteRate { name: &'static str, value: f64 },
    #[error("dimensions must be at least 1")]
    ZeroDimensions,
    #[error("objective `{objective}` does not accept {dimensions} dimension(s)")]
    DimensionMismatch {
        objective: Objective,
        dimensions: usize,
    },
}

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use realga::ga::{GaConfig, Objective};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.num_generations, 50);
/// assert_eq!(config.objective, Objective::SimpleQuadratic);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use realga::ga::{GaConfig, Objective};
///
/// let config = GaConfig::default()
///     .with_objective(Objective::Rastrigin)
///     .with_population_size(200)
///     .with_bounds(-5.12, 5.12)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Number of generations to run. The run always executes exactly this many.
    pub num_generations: usize,

    /// Per-gene probability of Gaussian mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Probability of recombining a pair of parents (0.0–1.0).
    ///
    /// When crossover is skipped, both children are copies of the parents.
    pub crossover_rate: f64,

    /// Search interval shared by every gene.
    pub bounds: GeneBounds,

    /// Fitness landscape to maximize.
    pub objective: Objective,

    /// Explicit individual length.
    ///
    /// `None` uses [`Objective::default_dimensions`]. An explicit value the
    /// objective does not accept fails validation.
    pub dimensions: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            num_generations: 50,
            mutation_rate: 0.1,
            crossover_rate: 0.7,
            bounds: GeneBounds::default(),
            objective: Objective::default(),
            dimensions: None,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_num_generations(mut self, n: usize) -> Self {
        self.num_generations = n;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the gene bounds.
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = GeneBounds::new(min, max);
        self
    }

    /// Sets the objective function.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Overrides the individual length.
    pub fn with_dimensions(mut self, n: usize) -> Self {
        self.dimensions = Some(n);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Individual length used by the run.
    pub fn resolved_dimensions(&self) -> usize {
        self.dimensions
            .unwrap_or_else(|| self.objective.default_dimensions())
    }

    /// Validates the configuration.
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.num_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }

        let GeneBounds { min, max } = self.bounds;
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::NonFiniteBounds { min, max });
        }
        if min >= max {
            return Err(ConfigError::InvertedBounds { min, max });
        }
        if !self.bounds.mutation_sigma().is_finite() {
            return Err(ConfigError::InvalidMutationSpread { min, max });
        }

        for (name, value) in [
            ("mutation_rate", self.mutation_rate),
            ("crossover_rate", self.crossover_rate),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteRate { name, value });
            }
        }

        let dimensions = self.resolved_dimensions();
        if dimensions == 0 {
            return Err(ConfigError::ZeroDimensions);
        }
        if !self.objective.accepts_dimensions(dimensions) {
            return Err(ConfigError::DimensionMismatch {
                objective: self.objective,
                dimensions,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.num_generations, 50);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert!((config.crossover_rate - 0.7).abs() < 1e-10);
        assert_eq!(config.bounds, GeneBounds::new(-10.0, 10.0));
        assert_eq!(config.objective, Objective::SimpleQuadratic);
        assert!(config.dimensions.is_none());
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_num_generations(1000)
            .with_mutation_rate(0.05)
            .with_crossover_rate(0.8)
            .with_bounds(-5.0, 5.0)
            .with_objective(Objective::Complex)
            .with_seed(42);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.num_generations, 1000);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert_eq!(config.bounds, GeneBounds::new(-5.0, 5.0));
        assert_eq!(config.objective, Objective::Complex);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.resolved_dimensions(), 2);
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0);
        assert!((config.crossover_rate - 0.0).abs() < 1e-10);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_empty_population() {
        let config = GaConfig::default().with_population_size(0);
        assert_eq!(config.validate(), Err(ConfigError::EmptyPopulation));
    }

    #[test]
    fn test_validate_single_individual_ok() {
        let config = GaConfig::default().with_population_size(1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_num_generations(0);
        assert_eq!(config.validate(), Err(ConfigError::NoGenerations));
    }

    #[test]
    fn test_validate_inverted_bounds() {
        let config = GaConfig::default().with_bounds(3.0, 3.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedBounds { .. })
        ));
        let config = GaConfig::default().with_bounds(5.0, -5.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedBounds { .. })
        ));
    }

    #[test]
    fn test_validate_non_finite_bounds() {
        let config = GaConfig::default().with_bounds(f64::NEG_INFINITY, 0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteBounds { .. })
        ));
        let config = GaConfig::default().with_bounds(0.0, f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteBounds { .. })
        ));
    }

    #[test]
    fn test_validate_overflowing_span() {
        let config = GaConfig::default().with_bounds(-f64::MAX, f64::MAX);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMutationSpread { .. })
        ));
    }

    #[test]
    fn test_validate_nan_rate() {
        let mut config = GaConfig::default();
        config.mutation_rate = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteRate {
                name: "mutation_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_dimension_mismatch() {
        let config = GaConfig::default()
            .with_objective(Objective::SimpleQuadratic)
            .with_dimensions(2);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DimensionMismatch {
                objective: Objective::SimpleQuadratic,
                dimensions: 2,
            })
        );

        let config = GaConfig::default()
            .with_objective(Objective::Complex)
            .with_dimensions(3);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_dimensions() {
        let config = GaConfig::default()
            .with_objective(Objective::Rastrigin)
            .with_dimensions(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroDimensions));
    }

    #[test]
    fn test_rastrigin_accepts_higher_dimensions() {
        let config = GaConfig::default()
            .with_objective(Objective::Rastrigin)
            .with_dimensions(10);
        assert!(config.validate().is_ok());
        assert_eq!(config.resolved_dimensions(), 10);
    }

    #[test]
    fn test_error_messages() {
        let err = GaConfig::default().with_bounds(1.0, 0.0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "min_value (1) must be less than max_value (0)"
        );
        let err = GaConfig::default()
            .with_objective(Objective::Complex)
            .with_dimensions(1)
            .validate()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "objective `complex` does not accept 1 dimension(s)"
        );
    }
}
