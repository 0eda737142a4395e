//! Run parameters as supplied by the request layer.
//!
//! [`GaParams`] mirrors the submitted form: rates are percentages and the
//! objective is a free-form name. [`GaParams::to_config`] converts it into
//! a validated [`GaConfig`].

use super::config::{ConfigError, GaConfig};
use super::objective::Objective;
use super::types::GeneBounds;

/// Raw run parameters.
///
/// ```
/// use realga::ga::{GaParams, Objective};
///
/// let params = GaParams {
///     function_type: "complex".into(),
///     mutation_rate: 25.0,
///     ..GaParams::default()
/// };
/// let config = params.to_config().unwrap();
/// assert_eq!(config.objective, Objective::Complex);
/// assert!((config.mutation_rate - 0.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaParams {
    /// Objective name: `simple_quadratic`, `complex` or `rastrigin`.
    /// Anything else selects the zero-fitness fallback.
    pub function_type: String,
    pub population_size: usize,
    pub num_generations: usize,
    /// Per-gene mutation probability in percent (0–100).
    pub mutation_rate: f64,
    /// Crossover probability in percent (0–100).
    pub crossover_rate: f64,
    pub min_value: f64,
    pub max_value: f64,
    /// Fixed seed; omitted for a fresh random run.
    pub seed: Option<u64>,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            function_type: Objective::SimpleQuadratic.name().to_string(),
            population_size: 50,
            num_generations: 50,
            mutation_rate: 10.0,
            crossover_rate: 70.0,
            min_value: -10.0,
            max_value: 10.0,
            seed: None,
        }
    }
}

impl GaParams {
    /// The objective selected by `function_type`.
    pub fn objective(&self) -> Objective {
        Objective::from_name(&self.function_type)
    }

    /// Human-readable label of the selected objective.
    pub fn function_name(&self) -> &'static str {
        self.objective().label()
    }

    /// Converts percentages to fractions and validates the result.
    pub fn to_config(&self) -> Result<GaConfig, ConfigError> {
        let config = GaConfig {
            population_size: self.population_size,
            num_generations: self.num_generations,
            mutation_rate: percent_to_fraction(self.mutation_rate),
            crossover_rate: percent_to_fraction(self.crossover_rate),
            bounds: GeneBounds::new(self.min_value, self.max_value),
            objective: self.objective(),
            dimensions: None,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

/// `NaN` passes through so validation can report it.
fn percent_to_fraction(percent: f64) -> f64 {
    if percent.is_nan() {
        percent
    } else {
        (percent / 100.0).clamp(0.0, 1.0)
    }
}
