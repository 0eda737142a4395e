//! Genetic Algorithm engine.
//!
//! A real-coded generational GA maximizing one of a closed set of
//! objective functions.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population, generations, rates, bounds)
//! - [`GaParams`]: The same parameters as submitted by a caller (percent rates,
//!   objective by name)
//! - [`Objective`]: Fitness functions and their dimensionality
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaReport`]: Best solution and per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and Gaussian mutation
//! - [`selection`]: Roulette-wheel parent selection with uniform fallbacks
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod objective;
pub mod operators;
mod params;
mod runner;
pub mod selection;
mod types;

pub use config::{ConfigError, GaConfig};
pub use objective::{function_label, Objective, RASTRIGIN_A};
pub use params::GaParams;
pub use runner::{GaReport, GaRunner, RunState};
pub use selection::{select_parents, FallbackReason, ParentSelection, SelectionMethod};
pub use types::{random_population, BestSoFar, GeneBounds, GenerationStats, Individual, Population};

/// Validates `params` and runs the GA to completion.
///
/// ```
/// use realga::ga::{self, GaParams};
///
/// let params = GaParams {
///     function_type: "rastrigin".into(),
///     num_generations: 10,
///     seed: Some(1),
///     ..GaParams::default()
/// };
/// let report = ga::run(&params).unwrap();
/// assert_eq!(report.best_individual.len(), 2);
/// assert_eq!(report.generation_stats.len(), 10);
/// ```
pub fn run(params: &GaParams) -> Result<GaReport, ConfigError> {
    let config = params.to_config()?;
    Ok(GaRunner::new(config)?.run())
}
