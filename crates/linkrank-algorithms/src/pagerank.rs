//! Iterative PageRank
//!
//! Repeats the PageRank recurrence until no page's rank moves by more than the
//! tolerance in a round.
//!
//! Rounds are synchronous. Each round reads only the previous round's complete
//! snapshot and produces a fresh one, so the update order within a round never
//! changes the result. Inlink sums are accumulated in ascending page index
//! order, which fixes the floating-point summation order as well.
//!
//! A dangling page is assigned `1/N` in every round and does not pass rank on to
//! other pages. This differs from the textbook formulation, which spreads
//! dangling mass over every page, so ranks need not sum to exactly 1.

use crate::common::{check_non_empty, validate_damping, LinkGraph, RankMapping};
use crate::error::{RankError, RankResult};
use tracing::{debug, warn};

/// Solver configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Largest per-page change still counted as settled
    pub tolerance: f64,
    /// Round cap
    pub max_rounds: usize,
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            tolerance: 0.001,
            max_rounds: 10_000,
        }
    }
}

/// Result of a solver run
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IterationOutcome {
    pub ranks: RankMapping,
    /// Rounds executed
    pub rounds: usize,
    /// Largest per-page change in the final round
    pub max_delta: f64,
    /// False when the round cap was reached first
    pub converged: bool,
}

impl IterationOutcome {
    /// Ranks of a converged run, or `NonConvergence` otherwise
    pub fn into_converged(self) -> RankResult<RankMapping> {
        if self.converged {
            Ok(self.ranks)
        } else {
            Err(RankError::NonConvergence {
                rounds: self.rounds,
                max_delta: self.max_delta,
            })
        }
    }
}

/// Calculate PageRank with the default tolerance and round cap.
///
/// If the round cap is reached the best-effort ranks are still returned.
pub fn iterate_pagerank(graph: &LinkGraph, damping_factor: f64) -> RankResult<RankMapping> {
    let config = IterationConfig {
        damping_factor,
        ..Default::default()
    };
    run_iteration(graph, &config).map(|outcome| outcome.ranks)
}

/// Run the solver as configured.
pub fn run_iteration(graph: &LinkGraph, config: &IterationConfig) -> RankResult<IterationOutcome> {
    check_non_empty(graph)?;
    validate_damping(config.damping_factor)?;
    if !config.tolerance.is_finite() || config.tolerance <= 0.0 {
        return Err(RankError::InvalidInput(format!(
            "tolerance must be positive, got {}",
            config.tolerance
        )));
    }
    if config.max_rounds == 0 {
        return Err(RankError::InvalidInput(
            "max rounds must be at least 1".to_string(),
        ));
    }

    let n = graph.page_count();
    let mut scores = vec![1.0 / n as f64; n];
    let mut rounds = 0;

    let (max_delta, converged) = loop {
        let next_scores = next_round(graph, &scores, config.damping_factor);
        rounds += 1;

        let max_delta = scores
            .iter()
            .zip(next_scores.iter())
            .map(|(old, new)| (new - old).abs())
            .fold(0.0_f64, f64::max);
        scores = next_scores;

        if max_delta < config.tolerance {
            break (max_delta, true);
        }
        if rounds >= config.max_rounds {
            warn!(
                "PageRank did not converge after {} rounds (largest change {})",
                rounds, max_delta
            );
            break (max_delta, false);
        }
    };

    debug!("PageRank finished after {} rounds, converged: {}", rounds, converged);

    Ok(IterationOutcome {
        ranks: graph.to_mapping(&scores),
        rounds,
        max_delta,
        converged,
    })
}

/// One synchronous round: maps the previous snapshot to the next one.
///
/// `scores` must be aligned with the graph's page indices.
pub(crate) fn next_round(graph: &LinkGraph, scores: &[f64], damping_factor: f64) -> Vec<f64> {
    let n = graph.page_count() as f64;
    let base_score = (1.0 - damping_factor) / n;

    (0..graph.page_count())
        .map(|idx| {
            if graph.is_dangling(idx) {
                return 1.0 / n;
            }

            let sum_incoming: f64 = graph
                .predecessors(idx)
                .iter()
                .map(|&source| scores[source] / graph.out_degree(source) as f64)
                .sum();

            base_score + damping_factor * sum_incoming
        })
        .collect()
}
