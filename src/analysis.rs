//! Analysis driver
//!
//! Runs both estimators on the same graph and gathers their output into a report.

use crate::config::AnalysisConfig;
use crate::error::LinkRankResult;
use crate::report::RankReport;
use linkrank_algorithms::{run_iteration, run_sampler, LinkGraph, RankError};
use std::time::Instant;
use tracing::info;

/// Estimate PageRank by sampling and by iteration.
pub fn analyze(graph: &LinkGraph, config: &AnalysisConfig) -> LinkRankResult<RankReport> {
    config.validate()?;
    if graph.is_empty() {
        return Err(RankError::InvalidInput("corpus has no pages".to_string()).into());
    }

    let start = Instant::now();
    let sampling = run_sampler(graph, &config.sampling())?;
    info!(
        "Sampled {} steps over {} pages in {:?}",
        sampling.sample_count,
        graph.page_count(),
        start.elapsed()
    );

    let start = Instant::now();
    let iteration = run_iteration(graph, &config.iteration())?;
    info!(
        "Iteration finished after {} rounds in {:?} (converged: {})",
        iteration.rounds,
        start.elapsed(),
        iteration.converged
    );

    let rounds = iteration.rounds;
    let converged = iteration.converged;
    let iterated = if config.require_convergence {
        iteration.into_converged()?
    } else {
        iteration.ranks
    };

    Ok(RankReport {
        sampling: config.sampling(),
        iteration: config.iteration(),
        sampled: sampling.ranks,
        iterated,
        rounds,
        converged,
    })
}
