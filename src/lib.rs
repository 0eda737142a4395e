//! Real-coded generational genetic algorithm.
//!
//! Evolves a population of fixed-length real vectors toward the maximum of a
//! selected objective function:
//!
//! - **Fitness**: a closed set of benchmark objectives ([`ga::Objective`]),
//!   higher is better.
//! - **Selection**: roulette-wheel (fitness-proportionate) parent selection
//!   with a uniform fallback for degenerate fitness vectors.
//! - **Variation**: single-point crossover and per-gene Gaussian mutation
//!   clamped to the search bounds.
//! - **Elitism**: the best individual of each generation is carried over
//!   unchanged.
//!
//! A run is single-threaded and fully deterministic for a fixed seed.
//!
//! # Example
//!
//! ```
//! use realga::ga::{GaConfig, GaRunner, Objective};
//!
//! let config = GaConfig::default()
//!     .with_objective(Objective::SimpleQuadratic)
//!     .with_seed(7);
//! let report = GaRunner::new(config).unwrap().run();
//!
//! assert_eq!(report.best_individual.len(), 1);
//! assert_eq!(report.generation_stats.len(), 50);
//! ```

pub mod ga;
pub mod random;
