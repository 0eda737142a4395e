//! Roulette-wheel parent selection.
//!
//! Parents are drawn without replacement with probability proportional to
//! their shifted fitness. Selection never fails: every degenerate input is
//! routed to a named uniform fallback, reported in [`ParentSelection::method`].
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Efraimidis & Spirakis (2006), "Weighted random sampling with a
//!   reservoir"

use log::debug;
use rand::seq::index;
use rand::Rng;

/// Added after shifting so the worst individual keeps a non-zero weight.
pub const WEIGHT_EPSILON: f64 = 1e-6;

/// Allowed deviation of the probability sum from 1.
pub const PROBABILITY_TOLERANCE: f64 = 1e-10;

/// Why the weighted draw was abandoned for uniform sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// Fewer than two candidates; no distinct pair exists.
    TooFewCandidates,
    /// The shifted weights do not sum to a positive finite total.
    NonPositiveTotal,
    /// A probability is negative or non-finite, or they do not sum to 1.
    InvalidProbabilities,
    /// The weighted sampler rejected the distribution.
    DrawFailed,
}

/// How a pair of parents was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMethod {
    /// Fitness-proportionate draw without replacement.
    Roulette,
    /// Uniform draw without replacement.
    Uniform(FallbackReason),
}

/// Two parent indices into the current population.
///
/// The order of `first` and `second` carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentSelection {
    pub first: usize,
    pub second: usize,
    pub method: SelectionMethod,
}

impl ParentSelection {
    pub fn indices(&self) -> (usize, usize) {
        (self.first, self.second)
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.method, SelectionMethod::Uniform(_))
    }
}

/// Selects two distinct parent indices from a generation's fitness vector.
///
/// # Algorithm
///
/// 1. Shift every fitness so the minimum becomes [`WEIGHT_EPSILON`]
/// 2. Normalize the shifted weights to probabilities
/// 3. Check the probabilities (non-negative, finite, summing to 1 within
///    [`PROBABILITY_TOLERANCE`])
/// 4. Draw two indices without replacement according to the probabilities
///
/// Any failure in steps 2–4 falls back to a uniform draw of two distinct
/// indices.
///
/// With `fitnesses.len() >= 2` the returned indices are always distinct and
/// in range. Shorter inputs return `(0, 0)` with
/// [`FallbackReason::TooFewCandidates`].
pub fn select_parents<R: Rng>(fitnesses: &[f64], rng: &mut R) -> ParentSelection {
    let n = fitnesses.len();
    if n < 2 {
        return ParentSelection {
            first: 0,
            second: 0,
            method: SelectionMethod::Uniform(FallbackReason::TooFewCandidates),
        };
    }

    match roulette_probabilities(fitnesses) {
        Ok(probs) => match index::sample_weighted(rng, n, |i| probs[i], 2) {
            Ok(picked) => {
                let picked = picked.into_vec();
                ParentSelection {
                    first: picked[0],
                    second: picked[1],
                    method: SelectionMethod::Roulette,
                }
            }
            Err(_) => uniform(n, FallbackReason::DrawFailed, rng),
        },
        Err(reason) => uniform(n, reason, rng),
    }
}

/// Shifted and normalized selection probabilities.
///
/// Returns the reason the distribution is unusable instead of a vector.
pub fn roulette_probabilities(fitnesses: &[f64]) -> Result<Vec<f64>, FallbackReason> {
    let min = fitnesses.iter().copied().fold(f64::INFINITY, f64::min);
    let weights: Vec<f64> = fitnesses
        .iter()
        .map(|&f| f - min + WEIGHT_EPSILON)
        .collect();

    let total: f64 = weights.iter().sum();
    // `!(total > 0.0)` also catches NaN
    if !(total > 0.0) || !total.is_finite() {
        return Err(FallbackReason::NonPositiveTotal);
    }

    let probs: Vec<f64> = weights.iter().map(|w| w / total).collect();
    let sum: f64 = probs.iter().sum();
    let malformed = probs.iter().any(|&p| !p.is_finite() || p < 0.0);
    if malformed || (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
        return Err(FallbackReason::InvalidProbabilities);
    }
    Ok(probs)
}

fn uniform<R: Rng>(n: usize, reason: FallbackReason, rng: &mut R) -> ParentSelection {
    debug!("roulette selection fell back to uniform sampling: {reason:?}");
    let picked = index::sample(rng, n, 2).into_vec();
    ParentSelection {
        first: picked[0],
        second: picked[1],
        method: SelectionMethod::Uniform(reason),
    }
}
