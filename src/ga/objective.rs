//! Objective functions.
//!
//! [`Objective`] is the closed set of fitness landscapes the engine can
//! optimize. Every variant is a maximization target: minimization benchmarks
//! are negated before they reach the engine.
//!
//! | Variant | Dimensions | Optimum |
//! |---------|------------|---------|
//! | [`SimpleQuadratic`](Objective::SimpleQuadratic) | 1 | `x = 5`, value 10 |
//! | [`Complex`](Objective::Complex) | 2 | value 2 (periodic) |
//! | [`Rastrigin`](Objective::Rastrigin) | 2 by default, any `n ≥ 1` | origin, value 0 |
//! | [`Unknown`](Objective::Unknown) | 1 by default, any `n ≥ 1` | constant 0 |
//!
//! # References
//!
//! - Rastrigin (1974), *Systems of Extremal Control*
//! - Mühlenbein, Schomisch & Born (1991), "The Parallel Genetic Algorithm as
//!   Function Optimizer"

use std::convert::Infallible;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Amplitude of the cosine modulation in the Rastrigin function.
pub const RASTRIGIN_A: f64 = 10.0;

/// Objective function selected for a run.
///
/// Parsing never fails: unrecognized names become [`Objective::Unknown`],
/// which scores every individual as 0.
///
/// ```
/// use realga::ga::Objective;
///
/// assert_eq!(Objective::from_name("rastrigin"), Objective::Rastrigin);
/// assert_eq!(Objective::from_name("sphere"), Objective::Unknown);
/// assert_eq!(Objective::SimpleQuadratic.evaluate(&[5.0]), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Objective {
    /// `f(x) = -(x - 5)² + 10`.
    #[default]
    SimpleQuadratic,

    /// `f(x, y) = sin(x) + cos(y)`.
    Complex,

    /// Negated Rastrigin: `f(x) = -[A·n + Σ(xᵢ² - A·cos(2πxᵢ))]`, `A = 10`.
    Rastrigin,

    /// Fallback for unrecognized names. Always scores 0.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl Objective {
    /// All variants, in declaration order.
    pub const ALL: [Objective; 4] = [
        Objective::SimpleQuadratic,
        Objective::Complex,
        Objective::Rastrigin,
        Objective::Unknown,
    ];

    /// Maps a configuration name to its variant.
    pub fn from_name(name: &str) -> Self {
        match name {
            "simple_quadratic" => Objective::SimpleQuadratic,
            "complex" => Objective::Complex,
            "rastrigin" => Objective::Rastrigin,
            _ => Objective::Unknown,
        }
    }

    /// Configuration name of this variant.
    pub fn name(self) -> &'static str {
        match self {
            Objective::SimpleQuadratic => "simple_quadratic",
            Objective::Complex => "complex",
            Objective::Rastrigin => "rastrigin",
            Objective::Unknown => "unknown",
        }
    }

    /// Human-readable description for display.
    pub fn label(self) -> &'static str {
        match self {
            Objective::SimpleQuadratic => "f(x) = -(x-5)² + 10 (simple quadratic function)",
            Objective::Complex => "f(x,y) = sin(x) + cos(y) (2D trigonometric function)",
            Objective::Rastrigin => "Rastrigin function (many local maxima)",
            Objective::Unknown => "Unknown function",
        }
    }

    /// Number of genes an individual has when no override is configured.
    pub fn default_dimensions(self) -> usize {
        match self {
            Objective::SimpleQuadratic => 1,
            Objective::Complex => 2,
            Objective::Rastrigin => 2,
            Objective::Unknown => 1,
        }
    }

    /// Whether individuals of length `n` are meaningful for this objective.
    pub fn accepts_dimensions(self, n: usize) -> bool {
        match self {
            Objective::SimpleQuadratic => n == 1,
            Objective::Complex => n == 2,
            Objective::Rastrigin | Objective::Unknown => n >= 1,
        }
    }

    /// Scores an individual. Higher is better.
    ///
    /// Callers are expected to pass a gene slice whose length the objective
    /// accepts; [`GaConfig::validate`](super::GaConfig::validate) enforces
    /// this for engine runs. Missing genes read as 0.
    pub fn evaluate(self, genes: &[f64]) -> f64 {
        match self {
            Objective::SimpleQuadratic => {
                let x = gene(genes, 0);
                -(x - 5.0).powi(2) + 10.0
            }
            Objective::Complex => gene(genes, 0).sin() + gene(genes, 1).cos(),
            Objective::Rastrigin => rastrigin(genes),
            Objective::Unknown => 0.0,
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Objective {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Objective::from_name(s))
    }
}

/// Label lookup straight from a raw configuration name.
pub fn function_label(name: &str) -> &'static str {
    Objective::from_name(name).label()
}

fn gene(genes: &[f64], i: usize) -> f64 {
    genes.get(i).copied().unwrap_or(0.0)
}

fn rastrigin(genes: &[f64]) -> f64 {
    let n = genes.len() as f64;
    let sum: f64 = genes
        .iter()
        .map(|&x| x * x - RASTRIGIN_A * (2.0 * PI * x).cos())
        .sum();
    -(RASTRIGIN_A * n + sum)
}
