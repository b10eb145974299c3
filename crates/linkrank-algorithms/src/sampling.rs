//! Monte-Carlo PageRank
//!
//! Simulates a random surfer over the transition model for a fixed number of steps
//! and reports how often each page was visited.

use crate::common::{check_non_empty, validate_damping, LinkGraph, PageId, RankMapping};
use crate::error::{RankError, RankResult};
use crate::transition::transition_probabilities;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use tracing::debug;

/// Sampler configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplingConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Length of the sample sequence
    pub sample_count: usize,
    /// Seed for a reproducible run. `None` draws from the thread-local generator.
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            sample_count: 10_000,
            seed: None,
        }
    }
}

/// Result of a sampling run
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SamplingOutcome {
    /// Visit frequency per page
    pub ranks: RankMapping,
    /// Raw visit count per page. Sums to `sample_count`.
    pub visit_counts: BTreeMap<PageId, usize>,
    pub sample_count: usize,
}

/// Estimate PageRank by sampling `sample_count` pages with the thread-local generator.
pub fn sample_pagerank(
    graph: &LinkGraph,
    damping_factor: f64,
    sample_count: usize,
) -> RankResult<RankMapping> {
    let mut rng = rand::thread_rng();
    sample_pagerank_with_rng(graph, damping_factor, sample_count, &mut rng)
}

/// Estimate PageRank by sampling `sample_count` pages with a caller-supplied generator.
pub fn sample_pagerank_with_rng<R: Rng>(
    graph: &LinkGraph,
    damping_factor: f64,
    sample_count: usize,
    rng: &mut R,
) -> RankResult<RankMapping> {
    sample_with_rng(graph, damping_factor, sample_count, rng).map(|outcome| outcome.ranks)
}

/// Run the sampler as configured, seeding a `StdRng` when a seed is given.
pub fn run_sampler(graph: &LinkGraph, config: &SamplingConfig) -> RankResult<SamplingOutcome> {
    match config.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            sample_with_rng(graph, config.damping_factor, config.sample_count, &mut rng)
        }
        None => {
            let mut rng = rand::thread_rng();
            sample_with_rng(graph, config.damping_factor, config.sample_count, &mut rng)
        }
    }
}

fn sample_with_rng<R: Rng>(
    graph: &LinkGraph,
    damping_factor: f64,
    sample_count: usize,
    rng: &mut R,
) -> RankResult<SamplingOutcome> {
    check_non_empty(graph)?;
    validate_damping(damping_factor)?;
    if sample_count == 0 {
        return Err(RankError::InvalidInput(
            "sample count must be at least 1".to_string(),
        ));
    }

    let counts = count_visits(graph, damping_factor, sample_count, rng)?;

    let total = sample_count as f64;
    let frequencies: Vec<f64> = counts.iter().map(|&c| c as f64 / total).collect();
    let visit_counts = graph.pages().iter().cloned().zip(counts).collect();

    debug!(
        "Sampled {} pages over {} distinct pages",
        sample_count,
        graph.page_count()
    );

    Ok(SamplingOutcome {
        ranks: graph.to_mapping(&frequencies),
        visit_counts,
        sample_count,
    })
}

/// Walk the chain and tally visits per page index. The first page is drawn
/// uniformly; every later page is drawn from the transition model of its
/// predecessor. Memory stays proportional to the page count.
fn count_visits<R: Rng>(
    graph: &LinkGraph,
    damping_factor: f64,
    sample_count: usize,
    rng: &mut R,
) -> RankResult<Vec<usize>> {
    let mut counts = vec![0usize; graph.page_count()];
    let mut current = rng.gen_range(0..graph.page_count());
    counts[current] += 1;

    for _ in 1..sample_count {
        let probabilities = transition_probabilities(graph, current, damping_factor);
        let next = WeightedIndex::new(&probabilities)?;
        current = next.sample(rng);
        counts[current] += 1;
    }

    Ok(counts)
}
