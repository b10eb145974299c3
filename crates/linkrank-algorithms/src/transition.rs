//! Random-surfer transition model
//!
//! With probability `damping_factor` the surfer follows one of the current page's
//! links, chosen uniformly. Otherwise it teleports to any page, chosen uniformly.
//! A dangling page is treated as linking to every page.

use crate::common::{validate_damping, LinkGraph, ProbabilityDistribution};
use crate::error::{RankError, RankResult};

/// One-step distribution over the next page, aligned with the graph's page indices.
///
/// Callers are expected to have validated `idx` and `damping_factor`.
pub(crate) fn transition_probabilities(graph: &LinkGraph, idx: usize, damping_factor: f64) -> Vec<f64> {
    let n = graph.page_count() as f64;

    if graph.is_dangling(idx) {
        return vec![1.0 / n; graph.page_count()];
    }

    let mut probabilities = vec![(1.0 - damping_factor) / n; graph.page_count()];
    let share = damping_factor / graph.out_degree(idx) as f64;
    for &target in graph.successors(idx) {
        probabilities[target] += share;
    }
    probabilities
}

/// Probability distribution over which page to visit after `page`.
pub fn transition_model(
    graph: &LinkGraph,
    page: &str,
    damping_factor: f64,
) -> RankResult<ProbabilityDistribution> {
    validate_damping(damping_factor)?;
    let idx = graph
        .index_of(page)
        .ok_or_else(|| RankError::InvalidInput(format!("page {} is not in the graph", page)))?;

    let probabilities = transition_probabilities(graph, idx, damping_factor);
    Ok(graph.to_mapping(&probabilities))
}
