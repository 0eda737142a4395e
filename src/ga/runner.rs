//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → elitism → selection → crossover → mutation
//! → replacement, for a fixed number of generations.
//!
//! A runner moves through [`RunState::Initialized`], then
//! [`RunState::Running`] once per completed generation, and ends in
//! [`RunState::Finished`]. It owns its population, random generator and run
//! context; two runners never share state.

use super::config::{ConfigError, GaConfig};
use super::objective::Objective;
use super::operators::{crossover, GaussianMutation};
use super::selection::select_parents;
use super::types::{random_population, BestSoFar, GenerationStats, Individual, Population};
use crate::random::{create_rng, fresh_seed};
use log::{debug, info, warn};
use rand::rngs::StdRng;

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Population created, nothing evaluated yet.
    Initialized,
    /// `generation` generations have completed; more remain.
    Running { generation: usize },
    /// All configured generations have completed.
    Finished,
}

/// Result of a GA run.
///
/// Contains the best solution found, along with per-generation statistics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaReport {
    /// Objective that was maximized.
    pub objective: Objective,

    /// Seed the run's generator was created from.
    pub seed: u64,

    /// The best individual found during the entire run.
    pub best_individual: Individual,

    /// Fitness of `best_individual`.
    pub best_fitness: f64,

    /// Generation (1-based) in which `best_individual` was first seen.
    pub best_generation: usize,

    /// One entry per completed generation, in order.
    pub generation_stats: Vec<GenerationStats>,
}

impl GaReport {
    /// Human-readable label of the objective.
    pub fn function_name(&self) -> &'static str {
        self.objective.label()
    }

    /// Number of generations covered by the report.
    pub fn generations(&self) -> usize {
        self.generation_stats.len()
    }
}

/// Best-so-far record and statistics history of one run.
#[derive(Debug, Default)]
struct RunContext {
    best: Option<BestSoFar>,
    history: Vec<GenerationStats>,
}

/// Summary of one fitness vector.
struct GenerationSummary {
    /// Index of the first individual with maximal fitness.
    best_index: Option<usize>,
    best_fitness: f64,
    avg_fitness: f64,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use realga::ga::{GaConfig, GaRunner, Objective};
///
/// let config = GaConfig::default()
///     .with_objective(Objective::Complex)
///     .with_num_generations(20)
///     .with_seed(42);
/// let report = GaRunner::new(config)?.run();
/// assert_eq!(report.best_individual.len(), 2);
/// assert_eq!(report.generations(), 20);
/// # Ok::<(), realga::ga::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct GaRunner {
    config: GaConfig,
    seed: u64,
    mutation: GaussianMutation,
    rng: StdRng,
    population: Population,
    state: RunState,
    context: RunContext,
}

impl GaRunner {
    /// Validates `config` and creates the initial random population.
    pub fn new(config: GaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mutation = GaussianMutation::from_config(&config)?;

        let seed = config.seed.unwrap_or_else(fresh_seed);
        let mut rng = create_rng(seed);
        let dimensions = config.resolved_dimensions();
        let population =
            random_population(config.population_size, dimensions, &config.bounds, &mut rng);

        info!(
            "GA initialized: objective={} dims={} population={} generations={} mutation={} crossover={} bounds=[{}, {}] seed={}",
            config.objective,
            dimensions,
            config.population_size,
            config.num_generations,
            config.mutation_rate,
            config.crossover_rate,
            config.bounds.min,
            config.bounds.max,
            seed,
        );

        Ok(Self {
            context: RunContext {
                best: None,
                history: Vec::with_capacity(config.num_generations),
            },
            config,
            seed,
            mutation,
            rng,
            population,
            state: RunState::Initialized,
        })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// The population the next [`step`](Self::step) will evaluate.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Statistics of the generations completed so far.
    pub fn history(&self) -> &[GenerationStats] {
        &self.context.history
    }

    /// Best individual seen so far, if any.
    pub fn best(&self) -> Option<&BestSoFar> {
        self.context.best.as_ref()
    }

    /// Number of generations completed so far.
    pub fn completed_generations(&self) -> usize {
        match self.state {
            RunState::Initialized => 0,
            RunState::Running { generation } => generation,
            RunState::Finished => self.config.num_generations,
        }
    }

    /// Runs every remaining generation and returns the report.
    pub fn run(self) -> GaReport {
        self.run_with_observer(|_| {})
    }

    /// Like [`run`](Self::run), calling `observer` after each generation.
    pub fn run_with_observer<F>(mut self, mut observer: F) -> GaReport
    where
        F: FnMut(&GenerationStats),
    {
        while self.state != RunState::Finished {
            self.step();
            if let Some(stats) = self.context.history.last() {
                observer(stats);
            }
        }
        self.into_report()
    }

    /// Executes exactly one generation. Does nothing once finished.
    pub fn step(&mut self) -> RunState {
        let generation = match self.state {
            RunState::Initialized => 1,
            RunState::Running { generation } => generation + 1,
            RunState::Finished => return RunState::Finished,
        };

        // 1. Evaluate
        let objective = self.config.objective;
        let fitnesses: Vec<f64> = self
            .population
            .iter()
            .map(|ind| objective.evaluate(ind))
            .collect();

        // 2. Summarize
        let summary = summarize(&fitnesses);
        let elite: Individual = match summary.best_index {
            Some(i) => self.population[i].clone(),
            None => {
                warn!("generation {generation}: empty population, using default fitness 0");
                self.population.first().cloned().unwrap_or_default()
            }
        };

        // 3. Record
        let stats = GenerationStats {
            generation,
            best_fitness: summary.best_fitness,
            avg_fitness: summary.avg_fitness,
        };
        self.context.history.push(stats);
        debug!(
            "generation {generation}: best={} avg={}",
            stats.best_fitness, stats.avg_fitness
        );

        // 4. Track global best
        if BestSoFar::offer(
            &mut self.context.best,
            &elite,
            summary.best_fitness,
            generation,
        ) {
            debug!(
                "generation {generation}: new best {} at {:?}",
                summary.best_fitness, elite
            );
        }

        // 5. Breed
        self.population = self.next_generation(elite, &fitnesses);

        // 6. Advance
        self.state = if generation >= self.config.num_generations {
            RunState::Finished
        } else {
            RunState::Running { generation }
        };
        self.state
    }

    /// Elite first, then mutated offspring until the population is full.
    fn next_generation(&mut self, elite: Individual, fitnesses: &[f64]) -> Population {
        let size = self.config.population_size;
        let mut next: Population = Vec::with_capacity(size);
        if !elite.is_empty() {
            next.push(elite);
        }

        while next.len() < size && !self.population.is_empty() {
            let (i, j) = select_parents(fitnesses, &mut self.rng).indices();
            let (child1, child2) = crossover(
                &self.population[i],
                &self.population[j],
                self.config.crossover_rate,
                &mut self.rng,
            );

            next.push(self.mutation.mutate(child1, &mut self.rng));
            if next.len() < size {
                next.push(self.mutation.mutate(child2, &mut self.rng));
            }
        }
        next
    }

    /// Consumes the runner and reports the generations completed so far.
    ///
    /// If no best individual was ever recorded, the first member of the
    /// current population is reported, evaluated now, with the last
    /// completed generation as its generation.
    pub fn into_report(self) -> GaReport {
        let objective = self.config.objective;
        let completed = self.completed_generations();

        let best = match self.context.best {
            Some(best) => best,
            None => {
                warn!("no best individual recorded; reporting the first population member");
                let individual = self.population.first().cloned().unwrap_or_default();
                BestSoFar {
                    fitness: objective.evaluate(&individual),
                    individual,
                    generation: completed,
                }
            }
        };

        info!(
            "GA finished: generations={} best_fitness={} best_generation={} best={:?}",
            completed, best.fitness, best.generation, best.individual
        );

        GaReport {
            objective,
            seed: self.seed,
            best_individual: best.individual,
            best_fitness: best.fitness,
            best_generation: best.generation,
            generation_stats: self.context.history,
        }
    }
}

/// Mean and first-occurrence maximum of a fitness vector.
///
/// An empty vector yields fitness 0 and no best index. `NaN` entries never
/// win against a number.
fn summarize(fitnesses: &[f64]) -> GenerationSummary {
    if fitnesses.is_empty() {
        return GenerationSummary {
            best_index: None,
            best_fitness: 0.0,
            avg_fitness: 0.0,
        };
    }

    let mut best_index = 0;
    for (i, &f) in fitnesses.iter().enumerate().skip(1) {
        let current = fitnesses[best_index];
        if f > current || (current.is_nan() && !f.is_nan()) {
            best_index = i;
        }
    }

    GenerationSummary {
        best_index: Some(best_index),
        best_fitness: fitnesses[best_index],
        avg_fitness: fitnesses.iter().sum::<f64>() / fitnesses.len() as f64,
    }
}

// ============================================================================
// Tests
// ============================================================================
